//! Category tree nodes for content classification.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{entity_eq, require};
use crate::xml::{Element, XmlDecode, XmlEncode};

/// A node in a category tree. The parent chain is owned by value, so cycles
/// cannot be constructed; chains as deep as the caller builds them serialize
/// as nested `<Category>` elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub parent: Option<Box<Category>>,
    name: String,
    language: String,
    pub description: Option<String>,
}

entity_eq!(Category: parent, name);

impl Category {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            parent: None,
            name: require("Name", name)?,
            language: require("Language", language)?,
            description: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require("Name", name)?;
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> Result<()> {
        self.language = require("Language", language)?;
        Ok(())
    }

    /// Number of ancestors above this node
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.parent.as_deref();
        while let Some(parent) = node {
            depth += 1;
            node = parent.parent.as_deref();
        }
        depth
    }

    /// Categories order by name, case-insensitively
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

impl XmlEncode for Category {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Category");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        el.push_text_child("Language", &self.language);
        el.push_opt_text_child("Description", self.description.as_deref());
        if let Some(parent) = &self.parent {
            el.push(parent.to_xml());
        }
        el
    }
}

impl XmlDecode for Category {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Category")?;
        let mut category =
            Category::new(el.required_text("Language")?, el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            category.id = id.parse()?;
        }
        if let Some(description) = el.child("Description") {
            category.description = Some(description.text());
        }
        if let Some(parent) = el.child("Category") {
            category.parent = Some(Box::new(Category::from_xml(parent)?));
        }
        Ok(category)
    }
}
