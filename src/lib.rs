//! cmskit - Content-management domain model with XML round-tripping
//!
//! Two cooperating layers, no shared state between them:
//! - `model`: entities and value objects (articles, media, people, places)
//!   with validated setters, declared-field equality, and paired XML
//!   encode/decode implementations obeying the round-trip law
//!   `T::from_xml(&x.to_xml())? == x`
//! - `ext`: stateless helpers over bytes, collections, streams, URLs and
//!   metadata
//!
//! # Modules
//!
//! - `model`: domain entities (Item, Article, Category, Person, ...)
//! - `xml`: owned element tree, encode/decode traits, serde bridge
//! - `ext`: extension helpers grouped by receiver type
//! - `error`: crate-wide error enum and `Result` alias
//!
//! Everything runs synchronously on the caller's thread; entities are plain
//! owned values with no interior mutability, so `&`/`&mut` rules give the
//! whole crate its concurrency story.

pub mod error;
pub mod ext;
pub mod model;
pub mod xml;

pub use error::{Error, Result};
pub use ext::{Describe, SliceExt};
pub use model::{
    Art, Article, Audio, Blog, BlogEntry, Category, City, Comment, Country, Download, Dream,
    Faq, File, Idea, Image, Item, Location, Person, Playcast, PollAnswer, PollOption, Profile,
    Quote, Rating, Setting, Song, Subscription, Tags, Text, Video, WebLink,
};
pub use xml::{Element, Node, XmlDecode, XmlEncode};
