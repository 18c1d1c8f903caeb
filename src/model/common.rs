//! Shared value objects: comments, files, images.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ext::bytes;
use crate::model::{entity_eq, now, require};
use crate::xml::{format_date, parse_date, Element, XmlDecode, XmlEncode};

/// A comment attached to an item. Name and text are required non-empty;
/// duplicates are allowed and order is preserved by the owning item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub author_id: i64,
    name: String,
    text: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

entity_eq!(Comment: author_id, name, text);

impl Comment {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let created = now();
        Ok(Self {
            id: 0,
            author_id: 0,
            name: require("Name", name)?,
            text: require("Text", text)?,
            created,
            updated: created,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require("Name", name)?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.text = require("Text", text)?;
        Ok(())
    }

    /// Comments order by creation time, oldest first
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.created.cmp(&other.created)
    }
}

impl XmlEncode for Comment {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Comment");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        if self.author_id != 0 {
            el.push_text_child("AuthorId", self.author_id.to_string());
        }
        el.push_text_child("DateCreated", format_date(&self.created));
        el.push_text_child("DateUpdated", format_date(&self.updated));
        el.push_text_child("Name", &self.name);
        el.push_text_child("Text", &self.text);
        el
    }
}

impl XmlDecode for Comment {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Comment")?;
        let mut comment = Comment::new(el.required_text("Name")?, el.required_text("Text")?)?;
        if let Some(id) = el.child_text("Id") {
            comment.id = id.parse()?;
        }
        if let Some(author) = el.child_text("AuthorId") {
            comment.author_id = author.parse()?;
        }
        if let Some(created) = el.child_text("DateCreated") {
            comment.created = parse_date(&created)?;
        }
        if let Some(updated) = el.child_text("DateUpdated") {
            comment.updated = parse_date(&updated)?;
        }
        Ok(comment)
    }
}

/// A binary payload with naming metadata. Content type, name and original
/// name are required non-empty; size derives from the payload length unless
/// explicitly overridden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    content_type: String,
    name: String,
    original_name: String,
    data: Vec<u8>,
    size: Option<u64>,
}

impl File {
    pub fn new(
        content_type: impl Into<String>,
        name: impl Into<String>,
        original_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<Self> {
        Ok(Self {
            id: 0,
            content_type: require("ContentType", content_type)?,
            name: require("Name", name)?,
            original_name: require("OriginalName", original_name)?,
            data,
            size: None,
        })
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn set_content_type(&mut self, value: impl Into<String>) -> Result<()> {
        self.content_type = require("ContentType", value)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.name = require("Name", value)?;
        Ok(())
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn set_original_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.original_name = require("OriginalName", value)?;
        Ok(())
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Effective size: the explicit override when set, otherwise the payload
    /// length
    pub fn size(&self) -> u64 {
        self.size.unwrap_or(self.data.len() as u64)
    }

    pub fn set_size(&mut self, size: u64) {
        self.size = Some(size);
    }

    /// Files order by name, case-insensitively
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

// Declared equality fields are (content_type, name, size); size compares by
// effective value, so an explicit override equals a derived length. Written
// out by hand instead of entity_eq! for that reason.
impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.content_type == other.content_type
            && self.name == other.name
            && self.size() == other.size()
    }
}

impl Eq for File {}

impl std::hash::Hash for File {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.content_type.hash(state);
        self.name.hash(state);
        self.size().hash(state);
    }
}

impl XmlEncode for File {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("File");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("ContentType", &self.content_type);
        el.push_text_child("Name", &self.name);
        el.push_text_child("OriginalName", &self.original_name);
        el.push_text_child("Size", self.size().to_string());
        el.push_text_child("Data", bytes::to_base64(&self.data));
        el
    }
}

impl XmlDecode for File {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("File")?;
        let data = bytes::from_base64(&el.required_text("Data")?)?;
        let mut file = File::new(
            el.required_text("ContentType")?,
            el.required_text("Name")?,
            el.required_text("OriginalName")?,
            data,
        )?;
        if let Some(id) = el.child_text("Id") {
            file.id = id.parse()?;
        }
        if let Some(size) = el.child_text("Size") {
            file.size = Some(size.parse()?);
        }
        Ok(file)
    }
}

/// An image: a file plus pixel dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    pub file: File,
    pub width: u32,
    pub height: u32,
}

entity_eq!(Image: file, width, height);

impl Image {
    pub fn new(file: File, width: u32, height: u32) -> Self {
        Self {
            id: 0,
            file,
            width,
            height,
        }
    }

    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.file.natural_cmp(&other.file)
    }
}

impl XmlEncode for Image {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Image");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Width", self.width.to_string());
        el.push_text_child("Height", self.height.to_string());
        el.push(self.file.to_xml());
        el
    }
}

impl XmlDecode for Image {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Image")?;
        let file_el = el
            .child("File")
            .ok_or_else(|| crate::error::Error::MissingElement { name: "File".into() })?;
        let mut image = Image::new(
            File::from_xml(file_el)?,
            el.required_text("Width")?.parse()?,
            el.required_text("Height")?.parse()?,
        );
        if let Some(id) = el.child_text("Id") {
            image.id = id.parse()?;
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> File {
        File::new("image/png", "logo.png", "original-logo.png", vec![1, 2, 3]).unwrap()
    }

    #[test]
    fn comment_requires_name_and_text() {
        assert!(Comment::new("", "body").is_err());
        assert!(Comment::new("title", "").is_err());

        let mut comment = Comment::new("title", "body").unwrap();
        assert!(comment.set_text("").is_err());
        assert_eq!(comment.text(), "body");
    }

    #[test]
    fn comment_round_trips() {
        let mut comment = Comment::new("title", "body").unwrap();
        comment.id = 7;
        comment.author_id = 3;

        let back = Comment::from_xml(&comment.to_xml()).unwrap();
        assert_eq!(back, comment);
        assert_eq!(back.id, 7);
        assert_eq!(back.created, comment.created);
    }

    #[test]
    fn file_size_derives_from_payload_until_overridden() {
        let mut file = sample_file();
        assert_eq!(file.size(), 3);

        file.set_size(99);
        assert_eq!(file.size(), 99);
    }

    #[test]
    fn file_equality_uses_effective_size() {
        let a = sample_file();
        let mut b = File::new("image/png", "logo.png", "other-name.png", vec![0; 3]).unwrap();
        // original_name and payload bytes differ, declared fields match
        assert_eq!(a, b);

        b.set_size(4);
        assert_ne!(a, b);
    }

    #[test]
    fn file_round_trips_payload_as_base64() {
        let file = sample_file();
        let el = file.to_xml();
        assert_eq!(el.child_text("Data").as_deref(), Some("AQID"));

        let back = File::from_xml(&el).unwrap();
        assert_eq!(back, file);
        assert_eq!(back.data(), &[1, 2, 3]);
        assert_eq!(back.original_name(), "original-logo.png");
    }

    #[test]
    fn empty_payload_round_trips() {
        let file = File::new("text/plain", "empty.txt", "empty.txt", Vec::new()).unwrap();
        let back = File::from_xml(&file.to_xml()).unwrap();
        assert_eq!(back.data().len(), 0);
        assert_eq!(back.size(), 0);
    }

    #[test]
    fn image_round_trips_with_nested_file() {
        let image = Image::new(sample_file(), 64, 48);
        let back = Image::from_xml(&image.to_xml()).unwrap();
        assert_eq!(back, image);
        assert_eq!(back.width, 64);
        assert_eq!(back.file.name(), "logo.png");
    }
}
