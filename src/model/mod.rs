//! Content-management domain model.
//!
//! Every entity here follows the same conventions:
//! - composition over inheritance: content types embed [`Item`] by value,
//!   shared value objects ([`File`], [`Image`], [`Category`], ...) nest inside
//!   their owners
//! - required string fields reject empty values at every assignment, not only
//!   at construction, so `set_*` methods return `Result`
//! - equality and hashing run over an explicit, per-type list of declared
//!   fields (expanded by `entity_eq!`), never over the full struct
//! - natural ordering is an inherent `natural_cmp` method rather than an
//!   `Ord` impl, because the declared-field equality would break `Ord`'s
//!   consistency contract
//! - each type round-trips through XML: `T::from_xml(&x.to_xml())? == x`
//!
//! Self-references (`Category::parent`, `Dream::inspired_by`) are owned
//! `Option<Box<T>>` chains, so reference cycles cannot be constructed.

mod category;
mod common;
mod content;
mod item;
mod misc;
mod person;
mod place;

pub use category::Category;
pub use common::{Comment, File, Image};
pub use content::{
    Art, Article, Audio, Blog, BlogEntry, Download, Dream, Faq, Idea, Playcast, Quote, Song,
    Text, Video, WebLink,
};
pub use item::Item;
pub use misc::{PollAnswer, PollOption, Rating, Setting, Subscription};
pub use person::{Person, Profile};
pub use place::{City, Country, Location};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Validate a required string field, rejecting empty values
pub(crate) fn require(field: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.is_empty() {
        Err(Error::Empty { field })
    } else {
        Ok(value)
    }
}

/// Current time truncated to whole seconds, so RFC-1123 text round-trips
/// without losing precision
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Implements `PartialEq`/`Eq`/`Hash` over the declared equality fields of an
/// entity, leaving every other field (timestamps in particular) out of the
/// comparison.
macro_rules! entity_eq {
    ($ty:ident: $($field:ident),+ $(,)?) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $(self.$field.hash(state);)+
            }
        }
    };
}

pub(crate) use entity_eq;

/// Order-preserving, duplicate-free tag collection.
///
/// Starts empty; inserting an existing or empty tag is a no-op. Iteration
/// yields tags in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag; returns false for duplicates and empty strings
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() || self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove a tag; returns whether it was present
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for Tags {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_empty_values() {
        assert!(matches!(
            require("IsoCode", ""),
            Err(Error::Empty { field: "IsoCode" })
        ));
        assert_eq!(require("IsoCode", "US").unwrap(), "US");
    }

    #[test]
    fn tags_preserve_order_and_reject_duplicates() {
        let mut tags = Tags::new();
        assert!(tags.insert("rust"));
        assert!(tags.insert("xml"));
        assert!(!tags.insert("rust"));
        assert!(!tags.insert(""));

        assert_eq!(tags.len(), 2);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["rust", "xml"]);

        assert!(tags.remove("rust"));
        assert!(!tags.remove("rust"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn now_has_no_subsecond_component() {
        use chrono::Timelike;
        assert_eq!(now().nanosecond(), 0);
    }
}
