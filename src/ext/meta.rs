//! Display-name and description lookup.
//!
//! A first-match chain over the metadata a value carries: description, then
//! display name, then the bare type name. Model types that have a natural
//! name implement this so generic consumers can label anything uniformly.

use crate::model::{Category, Country, Item, Person, Setting};

/// Human-readable labeling for a value
pub trait Describe {
    /// Short name suitable for lists and headings
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Longer free-text description
    fn description(&self) -> Option<&str> {
        None
    }

    /// First available label: description, display name, then type name
    fn label(&self) -> String {
        if let Some(text) = self.description().or_else(|| self.display_name()) {
            return text.to_owned();
        }
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_owned()
    }
}

impl Describe for Item {
    fn display_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn description(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl Describe for Category {
    fn display_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Describe for Person {
    fn display_name(&self) -> Option<&str> {
        Some(self.last_name())
    }
}

impl Describe for Country {
    fn display_name(&self) -> Option<&str> {
        Some(self.name())
    }
}

impl Describe for Setting {
    fn display_name(&self) -> Option<&str> {
        Some(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Anonymous;
    impl Describe for Anonymous {}

    #[test]
    fn label_prefers_description_over_display_name() {
        let mut item = Item::new("en", "Title").unwrap();
        assert_eq!(item.label(), "Title");

        item.body = Some("a longer description".into());
        assert_eq!(item.label(), "a longer description");
    }

    #[test]
    fn label_falls_back_to_type_name() {
        assert_eq!(Anonymous.label(), "Anonymous");
    }

    #[test]
    fn category_description_participates() {
        let mut category = Category::new("en", "News").unwrap();
        assert_eq!(category.label(), "News");

        category.description = Some("daily news".into());
        assert_eq!(category.label(), "daily news");
    }
}
