//! People and their public profiles.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{entity_eq, require, Image};
use crate::xml::{format_date, parse_date, Element, XmlDecode, XmlEncode};

/// A person: first and last name required, contact and portrait optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    first_name: String,
    last_name: String,
    pub email: Option<String>,
    pub born: Option<DateTime<Utc>>,
    pub image: Option<Image>,
}

entity_eq!(Person: first_name, last_name, email);

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            first_name: require("FirstName", first_name)?,
            last_name: require("LastName", last_name)?,
            email: None,
            born: None,
            image: None,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.first_name = require("FirstName", value)?;
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.last_name = require("LastName", value)?;
        Ok(())
    }

    /// People order by last name, then first name, case-insensitively
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .to_lowercase()
            .cmp(&other.last_name.to_lowercase())
            .then_with(|| {
                self.first_name
                    .to_lowercase()
                    .cmp(&other.first_name.to_lowercase())
            })
    }
}

impl XmlEncode for Person {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Person");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("FirstName", &self.first_name);
        el.push_text_child("LastName", &self.last_name);
        el.push_opt_text_child("Email", self.email.as_deref());
        if let Some(born) = &self.born {
            el.push_text_child("Born", format_date(born));
        }
        if let Some(image) = &self.image {
            el.push(image.to_xml());
        }
        el
    }
}

impl XmlDecode for Person {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Person")?;
        let mut person = Person::new(
            el.required_text("FirstName")?,
            el.required_text("LastName")?,
        )?;
        if let Some(id) = el.child_text("Id") {
            person.id = id.parse()?;
        }
        if let Some(email) = el.child("Email") {
            person.email = Some(email.text());
        }
        if let Some(born) = el.child_text("Born") {
            person.born = Some(parse_date(&born)?);
        }
        if let Some(image) = el.child("Image") {
            person.image = Some(Image::from_xml(image)?);
        }
        Ok(person)
    }
}

/// A public profile wrapping an optional person record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub person: Option<Person>,
    pub website: Option<String>,
    pub about: Option<String>,
}

entity_eq!(Profile: person, website);

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiles order by the wrapped person where present
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (&self.person, &other.person) {
            (Some(a), Some(b)) => a.natural_cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl XmlEncode for Profile {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Profile");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_opt_text_child("Website", self.website.as_deref());
        el.push_opt_text_child("About", self.about.as_deref());
        if let Some(person) = &self.person {
            el.push(person.to_xml());
        }
        el
    }
}

impl XmlDecode for Profile {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Profile")?;
        let mut profile = Profile::new();
        if let Some(id) = el.child_text("Id") {
            profile.id = id.parse()?;
        }
        if let Some(website) = el.child("Website") {
            profile.website = Some(website.text());
        }
        if let Some(about) = el.child("About") {
            profile.about = Some(about.text());
        }
        if let Some(person) = el.child("Person") {
            profile.person = Some(Person::from_xml(person)?);
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::File;

    #[test]
    fn person_names_are_required() {
        assert!(Person::new("", "Doe").is_err());
        assert!(Person::new("Jan", "").is_err());

        let mut person = Person::new("Jan", "Doe").unwrap();
        assert!(person.set_last_name("").is_err());
        assert_eq!(person.last_name(), "Doe");
    }

    #[test]
    fn person_round_trips_with_portrait() {
        let mut person = Person::new("Jan", "Doe").unwrap();
        person.id = 2;
        person.email = Some("jan@example.com".into());
        person.born = Some(parse_date("Sat, 01 Jan 2000 00:00:00 +0000").unwrap());
        person.image = Some(Image::new(
            File::new("image/jpeg", "jan.jpg", "dsc001.jpg", vec![5, 6]).unwrap(),
            10,
            10,
        ));

        let back = Person::from_xml(&person.to_xml()).unwrap();
        assert_eq!(back, person);
        assert_eq!(back.born, person.born);
        assert!(back.image.is_some());
    }

    #[test]
    fn person_order_is_last_name_first() {
        let a = Person::new("Zoe", "Adams").unwrap();
        let b = Person::new("Amy", "zuse").unwrap();
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn default_profiles_are_equal() {
        assert_eq!(Profile::default(), Profile::default());
        assert_eq!(
            Profile::default().natural_cmp(&Profile::default()),
            Ordering::Equal
        );
    }

    #[test]
    fn profile_round_trips() {
        let mut profile = Profile::new();
        profile.website = Some("https://example.com".into());
        profile.person = Some(Person::new("Jan", "Doe").unwrap());

        let back = Profile::from_xml(&profile.to_xml()).unwrap();
        assert_eq!(back, profile);
    }
}
