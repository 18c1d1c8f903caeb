//! Concrete content types. Each embeds [`Item`] by value and adds its own
//! fields on top; XML elements are named after the concrete type with the
//! item's fields written flat (see [`Item`]).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{entity_eq, require, Category, File, Image, Item};
use crate::xml::{Element, XmlDecode, XmlEncode};

macro_rules! order_by_item {
    ($ty:ident) => {
        impl $ty {
            /// Orders by the embedded item's name, case-insensitively
            pub fn natural_cmp(&self, other: &Self) -> Ordering {
                self.item.natural_cmp(&other.item)
            }
        }
    };
}

/// A long-form article, optionally categorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub item: Item,
    pub category: Option<Category>,
}

entity_eq!(Article: item, category);
order_by_item!(Article);

impl Article {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            category: None,
        })
    }
}

impl XmlEncode for Article {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Article");
        self.item.write_into(&mut el);
        if let Some(category) = &self.category {
            el.push(category.to_xml());
        }
        el
    }
}

impl XmlDecode for Article {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Article")?;
        Ok(Self {
            item: Item::read_from(el)?,
            category: el.child("Category").map(Category::from_xml).transpose()?,
        })
    }
}

/// A blog: a named stream of entries, optionally categorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub item: Item,
    pub category: Option<Category>,
}

entity_eq!(Blog: item, category);
order_by_item!(Blog);

impl Blog {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            category: None,
        })
    }
}

impl XmlEncode for Blog {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Blog");
        self.item.write_into(&mut el);
        if let Some(category) = &self.category {
            el.push(category.to_xml());
        }
        el
    }
}

impl XmlDecode for Blog {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Blog")?;
        Ok(Self {
            item: Item::read_from(el)?,
            category: el.child("Category").map(Category::from_xml).transpose()?,
        })
    }
}

/// A single entry within a blog, referenced by the owning blog's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogEntry {
    pub item: Item,
    pub blog_id: i64,
}

entity_eq!(BlogEntry: item, blog_id);
order_by_item!(BlogEntry);

impl BlogEntry {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            blog_id: 0,
        })
    }
}

impl XmlEncode for BlogEntry {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("BlogEntry");
        self.item.write_into(&mut el);
        if self.blog_id != 0 {
            el.push_text_child("BlogId", self.blog_id.to_string());
        }
        el
    }
}

impl XmlDecode for BlogEntry {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("BlogEntry")?;
        let mut entry = Self {
            item: Item::read_from(el)?,
            blog_id: 0,
        };
        if let Some(blog_id) = el.child_text("BlogId") {
            entry.blog_id = blog_id.parse()?;
        }
        Ok(entry)
    }
}

/// A downloadable file with a counter of completed downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub item: Item,
    pub file: Option<File>,
    pub downloads: u64,
}

entity_eq!(Download: item, file);
order_by_item!(Download);

impl Download {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            file: None,
            downloads: 0,
        })
    }
}

impl XmlEncode for Download {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Download");
        self.item.write_into(&mut el);
        if self.downloads != 0 {
            el.push_text_child("Downloads", self.downloads.to_string());
        }
        if let Some(file) = &self.file {
            el.push(file.to_xml());
        }
        el
    }
}

impl XmlDecode for Download {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Download")?;
        let mut download = Self {
            item: Item::read_from(el)?,
            file: el.child("File").map(File::from_xml).transpose()?,
            downloads: 0,
        };
        if let Some(count) = el.child_text("Downloads") {
            download.downloads = count.parse()?;
        }
        Ok(download)
    }
}

/// A bookmarked external link; the URL is required non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebLink {
    pub item: Item,
    url: String,
}

entity_eq!(WebLink: item, url);
order_by_item!(WebLink);

impl WebLink {
    pub fn new(
        language: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            url: require("Url", url)?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.url = require("Url", url)?;
        Ok(())
    }
}

impl XmlEncode for WebLink {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("WebLink");
        self.item.write_into(&mut el);
        el.push_text_child("Url", &self.url);
        el
    }
}

impl XmlDecode for WebLink {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("WebLink")?;
        Ok(Self {
            item: Item::read_from(el)?,
            url: require("Url", el.required_text("Url")?)?,
        })
    }
}

/// A frequently-asked question; the question is the item name, the answer is
/// required non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub item: Item,
    answer: String,
}

entity_eq!(Faq: item, answer);
order_by_item!(Faq);

impl Faq {
    pub fn new(
        language: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, question)?,
            answer: require("Answer", answer)?,
        })
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) -> Result<()> {
        self.answer = require("Answer", answer)?;
        Ok(())
    }
}

impl XmlEncode for Faq {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Faq");
        self.item.write_into(&mut el);
        el.push_text_child("Answer", &self.answer);
        el
    }
}

impl XmlDecode for Faq {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Faq")?;
        Ok(Self {
            item: Item::read_from(el)?,
            answer: require("Answer", el.required_text("Answer")?)?,
        })
    }
}

/// A quotation; the quoted text lives in the item body, the source is
/// optional attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub item: Item,
    pub source: Option<String>,
}

entity_eq!(Quote: item, source);
order_by_item!(Quote);

impl Quote {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            source: None,
        })
    }
}

impl XmlEncode for Quote {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Quote");
        self.item.write_into(&mut el);
        el.push_opt_text_child("Source", self.source.as_deref());
        el
    }
}

impl XmlDecode for Quote {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Quote")?;
        Ok(Self {
            item: Item::read_from(el)?,
            source: el.child("Source").map(Element::text),
        })
    }
}

/// A song: optional recording and lyrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub item: Item,
    pub file: Option<File>,
    pub lyrics: Option<String>,
}

entity_eq!(Song: item, file);
order_by_item!(Song);

impl Song {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            file: None,
            lyrics: None,
        })
    }
}

impl XmlEncode for Song {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Song");
        self.item.write_into(&mut el);
        el.push_opt_text_child("Lyrics", self.lyrics.as_deref());
        if let Some(file) = &self.file {
            el.push(file.to_xml());
        }
        el
    }
}

impl XmlDecode for Song {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Song")?;
        Ok(Self {
            item: Item::read_from(el)?,
            file: el.child("File").map(File::from_xml).transpose()?,
            lyrics: el.child("Lyrics").map(Element::text),
        })
    }
}

/// A video: optional media file, duration in seconds, optional preview image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub item: Item,
    pub file: Option<File>,
    pub duration_seconds: u32,
    pub preview: Option<Image>,
}

entity_eq!(Video: item, file, duration_seconds);
order_by_item!(Video);

impl Video {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            file: None,
            duration_seconds: 0,
            preview: None,
        })
    }
}

impl XmlEncode for Video {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Video");
        self.item.write_into(&mut el);
        if self.duration_seconds != 0 {
            el.push_text_child("Duration", self.duration_seconds.to_string());
        }
        if let Some(file) = &self.file {
            el.push(file.to_xml());
        }
        if let Some(preview) = &self.preview {
            el.push(preview.to_xml());
        }
        el
    }
}

impl XmlDecode for Video {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Video")?;
        let mut video = Self {
            item: Item::read_from(el)?,
            file: el.child("File").map(File::from_xml).transpose()?,
            duration_seconds: 0,
            preview: el.child("Image").map(Image::from_xml).transpose()?,
        };
        if let Some(duration) = el.child_text("Duration") {
            video.duration_seconds = duration.parse()?;
        }
        Ok(video)
    }
}

/// An audio recording: optional media file plus duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audio {
    pub item: Item,
    pub file: Option<File>,
    pub duration_seconds: u32,
}

entity_eq!(Audio: item, file, duration_seconds);
order_by_item!(Audio);

impl Audio {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            file: None,
            duration_seconds: 0,
        })
    }
}

impl XmlEncode for Audio {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Audio");
        self.item.write_into(&mut el);
        if self.duration_seconds != 0 {
            el.push_text_child("Duration", self.duration_seconds.to_string());
        }
        if let Some(file) = &self.file {
            el.push(file.to_xml());
        }
        el
    }
}

impl XmlDecode for Audio {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Audio")?;
        let mut audio = Self {
            item: Item::read_from(el)?,
            file: el.child("File").map(File::from_xml).transpose()?,
            duration_seconds: 0,
        };
        if let Some(duration) = el.child_text("Duration") {
            audio.duration_seconds = duration.parse()?;
        }
        Ok(audio)
    }
}

/// A piece of visual art with an optional image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Art {
    pub item: Item,
    pub image: Option<Image>,
}

entity_eq!(Art: item, image);
order_by_item!(Art);

impl Art {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            image: None,
        })
    }
}

impl XmlEncode for Art {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Art");
        self.item.write_into(&mut el);
        if let Some(image) = &self.image {
            el.push(image.to_xml());
        }
        el
    }
}

impl XmlDecode for Art {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Art")?;
        Ok(Self {
            item: Item::read_from(el)?,
            image: el.child("Image").map(Image::from_xml).transpose()?,
        })
    }
}

/// A recorded dream, optionally linked to the dream that inspired it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dream {
    pub item: Item,
    pub inspired_by: Option<Box<Dream>>,
}

entity_eq!(Dream: item, inspired_by);
order_by_item!(Dream);

impl Dream {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            inspired_by: None,
        })
    }
}

impl XmlEncode for Dream {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Dream");
        self.item.write_into(&mut el);
        if let Some(inspiration) = &self.inspired_by {
            el.push(inspiration.to_xml());
        }
        el
    }
}

impl XmlDecode for Dream {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Dream")?;
        Ok(Self {
            item: Item::read_from(el)?,
            inspired_by: el
                .child("Dream")
                .map(Dream::from_xml)
                .transpose()?
                .map(Box::new),
        })
    }
}

/// An idea, optionally linked to the idea that inspired it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub item: Item,
    pub inspired_by: Option<Box<Idea>>,
}

entity_eq!(Idea: item, inspired_by);
order_by_item!(Idea);

impl Idea {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            inspired_by: None,
        })
    }
}

impl XmlEncode for Idea {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Idea");
        self.item.write_into(&mut el);
        if let Some(inspiration) = &self.inspired_by {
            el.push(inspiration.to_xml());
        }
        el
    }
}

impl XmlDecode for Idea {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Idea")?;
        Ok(Self {
            item: Item::read_from(el)?,
            inspired_by: el
                .child("Idea")
                .map(Idea::from_xml)
                .transpose()?
                .map(Box::new),
        })
    }
}

/// A playcast: narrated audio over a preview image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playcast {
    pub item: Item,
    pub audio: Option<File>,
    pub preview: Option<Image>,
}

entity_eq!(Playcast: item, audio, preview);
order_by_item!(Playcast);

impl Playcast {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
            audio: None,
            preview: None,
        })
    }
}

impl XmlEncode for Playcast {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Playcast");
        self.item.write_into(&mut el);
        if let Some(audio) = &self.audio {
            el.push(audio.to_xml());
        }
        if let Some(preview) = &self.preview {
            el.push(preview.to_xml());
        }
        el
    }
}

impl XmlDecode for Playcast {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Playcast")?;
        Ok(Self {
            item: Item::read_from(el)?,
            audio: el.child("File").map(File::from_xml).transpose()?,
            preview: el.child("Image").map(Image::from_xml).transpose()?,
        })
    }
}

/// Plain text content: nothing beyond the embedded item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub item: Item,
}

entity_eq!(Text: item);
order_by_item!(Text);

impl Text {
    pub fn new(language: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            item: Item::new(language, name)?,
        })
    }
}

impl XmlEncode for Text {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Text");
        self.item.write_into(&mut el);
        el
    }
}

impl XmlDecode for Text {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Text")?;
        Ok(Self {
            item: Item::read_from(el)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_round_trips_with_category_chain() {
        let mut article = Article::new("en", "Headline").unwrap();
        article.item.body = Some("body".into());
        let mut category = Category::new("en", "News").unwrap();
        category.parent = Some(Box::new(Category::new("en", "Root").unwrap()));
        article.category = Some(category);

        let back = Article::from_xml(&article.to_xml()).unwrap();
        assert_eq!(back, article);
        assert_eq!(back.category.as_ref().unwrap().depth(), 1);
    }

    #[test]
    fn weblink_url_is_required() {
        assert!(WebLink::new("en", "Site", "").is_err());

        let mut link = WebLink::new("en", "Site", "https://example.com").unwrap();
        assert!(link.set_url("").is_err());
        assert_eq!(link.url(), "https://example.com");

        let back = WebLink::from_xml(&link.to_xml()).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn faq_requires_an_answer() {
        assert!(Faq::new("en", "Why?", "").is_err());
        let faq = Faq::new("en", "Why?", "Because.").unwrap();
        let back = Faq::from_xml(&faq.to_xml()).unwrap();
        assert_eq!(back.answer(), "Because.");
        assert_eq!(back.item.name(), "Why?");
    }

    #[test]
    fn download_counter_defaults_to_zero() {
        let mut download = Download::new("en", "Installer").unwrap();
        let back = Download::from_xml(&download.to_xml()).unwrap();
        assert_eq!(back.downloads, 0);

        download.downloads = 12;
        let back = Download::from_xml(&download.to_xml()).unwrap();
        assert_eq!(back.downloads, 12);
    }

    #[test]
    fn video_round_trips_file_duration_and_preview() {
        let mut video = Video::new("en", "Clip").unwrap();
        video.duration_seconds = 90;
        video.file = Some(File::new("video/mp4", "clip.mp4", "raw.mp4", vec![9, 9]).unwrap());
        video.preview = Some(Image::new(
            File::new("image/png", "thumb.png", "thumb.png", vec![1]).unwrap(),
            32,
            32,
        ));

        let back = Video::from_xml(&video.to_xml()).unwrap();
        assert_eq!(back, video);
        assert_eq!(back.duration_seconds, 90);
        assert!(back.preview.is_some());
    }

    #[test]
    fn dream_inspiration_chain_round_trips() {
        let first = Dream::new("en", "Falling").unwrap();
        let mut second = Dream::new("en", "Flying").unwrap();
        second.inspired_by = Some(Box::new(first));

        let back = Dream::from_xml(&second.to_xml()).unwrap();
        assert_eq!(back, second);
        assert_eq!(back.inspired_by.as_ref().unwrap().item.name(), "Falling");
    }

    #[test]
    fn equality_ignores_timestamps() {
        let a = Quote::new("en", "Said").unwrap();
        let mut b = Quote::new("en", "Said").unwrap();
        b.item.created = b.item.created - chrono::Duration::days(1);
        assert_eq!(a, b);

        b.source = Some("someone".into());
        assert_ne!(a, b);
    }

    #[test]
    fn content_types_order_by_name() {
        let a = Song::new("en", "Abbey Road").unwrap();
        let b = Song::new("en", "zeppelin").unwrap();
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }
}
