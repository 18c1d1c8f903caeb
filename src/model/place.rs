//! Geographic entities: countries, cities, locations.
//!
//! The composition chain Location → City → Country → Image → File is the
//! deepest nesting in the model and exercises the full recursive XML path.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{entity_eq, require, Image};
use crate::xml::{Element, XmlDecode, XmlEncode};

/// A country with a required ISO code and optional flag image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    name: String,
    iso_code: String,
    pub image: Option<Image>,
}

entity_eq!(Country: name, iso_code);

impl Country {
    pub fn new(name: impl Into<String>, iso_code: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("Name", name)?,
            iso_code: require("IsoCode", iso_code)?,
            image: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require("Name", name)?;
        Ok(())
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn set_iso_code(&mut self, iso_code: impl Into<String>) -> Result<()> {
        self.iso_code = require("IsoCode", iso_code)?;
        Ok(())
    }

    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

impl XmlEncode for Country {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Country");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        el.push_text_child("IsoCode", &self.iso_code);
        if let Some(image) = &self.image {
            el.push(image.to_xml());
        }
        el
    }
}

impl XmlDecode for Country {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Country")?;
        let mut country = Country::new(el.required_text("Name")?, el.required_text("IsoCode")?)?;
        if let Some(id) = el.child_text("Id") {
            country.id = id.parse()?;
        }
        if let Some(image) = el.child("Image") {
            country.image = Some(Image::from_xml(image)?);
        }
        Ok(country)
    }
}

/// A city, optionally placed in a country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    name: String,
    pub country: Option<Country>,
    pub image: Option<Image>,
}

entity_eq!(City: name, country);

impl City {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("Name", name)?,
            country: None,
            image: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require("Name", name)?;
        Ok(())
    }

    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

impl XmlEncode for City {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("City");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        if let Some(country) = &self.country {
            el.push(country.to_xml());
        }
        if let Some(image) = &self.image {
            el.push(image.to_xml());
        }
        el
    }
}

impl XmlDecode for City {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("City")?;
        let mut city = City::new(el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            city.id = id.parse()?;
        }
        if let Some(country) = el.child("Country") {
            city.country = Some(Country::from_xml(country)?);
        }
        if let Some(image) = el.child("Image") {
            city.image = Some(Image::from_xml(image)?);
        }
        Ok(city)
    }
}

/// A named location with an optional street address and city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    name: String,
    pub address: Option<String>,
    pub city: Option<City>,
}

entity_eq!(Location: name, city);

impl Location {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("Name", name)?,
            address: None,
            city: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require("Name", name)?;
        Ok(())
    }

    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

impl XmlEncode for Location {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Location");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        el.push_opt_text_child("Address", self.address.as_deref());
        if let Some(city) = &self.city {
            el.push(city.to_xml());
        }
        el
    }
}

impl XmlDecode for Location {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Location")?;
        let mut location = Location::new(el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            location.id = id.parse()?;
        }
        if let Some(address) = el.child("Address") {
            location.address = Some(address.text());
        }
        if let Some(city) = el.child("City") {
            location.city = Some(City::from_xml(city)?);
        }
        Ok(location)
    }
}
