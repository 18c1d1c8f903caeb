//! The generic content item every concrete content type embeds.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{entity_eq, now, require, Comment, Tags};
use crate::xml::{format_date, parse_date, Element, XmlDecode, XmlEncode};

/// A content item: identity, authorship, timestamps, language, name, optional
/// body, tags and comments.
///
/// Concrete content types (Article, Video, ...) embed an `Item` by value and
/// write its fields flat into their own element, so `<Article>` carries
/// `<Name>`, `<DateCreated>` etc. directly rather than a nested `<Item>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub author_id: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    name: String,
    language: String,
    pub body: Option<String>,
    pub tags: Tags,
    pub comments: Vec<Comment>,
}

entity_eq!(Item: name, language);

impl Item {
    /// Create an item with defaults: id 0, no author, timestamps now, empty
    /// tags and comments
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let created = now();
        Ok(Self {
            id: 0,
            author_id: 0,
            created,
            updated: created,
            name: require("Name", name)?,
            language: require("Language", language)?,
            body: None,
            tags: Tags::new(),
            comments: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the item; empty names are rejected on every assignment
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

    /// Items order by name, case-insensitively
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }

    /// Write this item's fields flat into the owning element
    pub(crate) fn write_into(&self, el: &mut Element) {
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        if self.author_id != 0 {
            el.push_text_child("AuthorId", self.author_id.to_string());
        }
        el.push_text_child("DateCreated", format_date(&self.created));
        el.push_text_child("DateUpdated", format_date(&self.updated));
        el.push_text_child("Name", &self.name);
        el.push_text_child("Language", &self.language);
        el.push_opt_text_child("Body", self.body.as_deref());
        if !self.tags.is_empty() {
            let mut tags = Element::new("Tags");
            for tag in self.tags.iter() {
                tags.push_text_child("Tag", tag);
            }
            el.push(tags);
        }
        if !self.comments.is_empty() {
            let mut comments = Element::new("Comments");
            for comment in &self.comments {
                comments.push(comment.to_xml());
            }
            el.push(comments);
        }
    }

    /// Read item fields flat from the owning element
    pub(crate) fn read_from(el: &Element) -> Result<Self> {
        let mut item = Item::new(el.required_text("Language")?, el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            item.id = id.parse()?;
        }
        if let Some(author) = el.child_text("AuthorId") {
            item.author_id = author.parse()?;
        }
        if let Some(created) = el.child_text("DateCreated") {
            item.created = parse_date(&created)?;
        }
        if let Some(updated) = el.child_text("DateUpdated") {
            item.updated = parse_date(&updated)?;
        }
        if let Some(body) = el.child("Body") {
            item.body = Some(body.text());
        }
        if let Some(tags) = el.child("Tags") {
            for tag in tags.children_named("Tag") {
                item.tags.insert(tag.text());
            }
        }
        if let Some(comments) = el.child("Comments") {
            for comment in comments.children_named("Comment") {
                item.comments.push(Comment::from_xml(comment)?);
            }
        }
        Ok(item)
    }
}

impl XmlEncode for Item {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Item");
        self.write_into(&mut el);
        el
    }
}

impl XmlDecode for Item {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Item")?;
        Self::read_from(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn new_item_has_documented_defaults() {
        let item = Item::new("en", "Title").unwrap();

        assert_eq!(item.id, 0);
        assert_eq!(item.author_id, 0);
        assert_eq!(item.tags.len(), 0);
        assert!(item.comments.is_empty());
        assert!(item.body.is_none());
        assert!(item.created <= Utc::now());
        assert_eq!(item.created, item.updated);
    }

    #[test]
    fn required_fields_reject_empty_on_every_assignment() {
        assert!(Item::new("", "Title").is_err());
        assert!(Item::new("en", "").is_err());

        let mut item = Item::new("en", "Title").unwrap();
        assert!(item.set_name("").is_err());
        assert_eq!(item.name(), "Title");
        assert!(item.set_language("de").is_ok());
        assert_eq!(item.language(), "de");
    }

    #[test]
    fn item_round_trips_with_tags_and_comments() {
        let mut item = Item::new("en", "Title").unwrap();
        item.id = 11;
        item.author_id = 4;
        item.body = Some("free text".into());
        item.tags.insert("alpha");
        item.tags.insert("beta");
        item.comments.push(Comment::new("first", "hello").unwrap());
        item.comments.push(Comment::new("first", "hello").unwrap()); // duplicates allowed

        let back = Item::from_xml(&item.to_xml()).unwrap();
        assert_eq!(back, item);
        assert_eq!(back.id, 11);
        assert_eq!(back.tags.iter().collect::<Vec<_>>(), vec!["alpha", "beta"]);
        assert_eq!(back.comments.len(), 2);
        assert_eq!(back.created, item.created);
    }

    #[test]
    fn default_items_are_equal_and_share_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Item::new("en", "Title").unwrap();
        let b = Item::new("en", "Title").unwrap();
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn changing_a_declared_field_flips_equality() {
        let a = Item::new("en", "Title").unwrap();
        let mut b = Item::new("en", "Title").unwrap();
        b.set_name("Other").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn natural_order_ignores_case() {
        let a = Item::new("en", "alpha").unwrap();
        let b = Item::new("en", "Beta").unwrap();
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
        assert_eq!(a.natural_cmp(&a.clone()), Ordering::Equal);
    }
}
