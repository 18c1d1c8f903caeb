//! Settings, subscriptions, ratings and poll entities.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{entity_eq, now, require};
use crate::xml::{format_date, parse_date, Element, XmlDecode, XmlEncode};

/// A named configuration value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    name: String,
    pub value: Option<String>,
}

entity_eq!(Setting: name, value);

impl Setting {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("Name", name)?,
            value: None,
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

impl XmlEncode for Setting {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Setting");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        el.push_opt_text_child("Value", self.value.as_deref());
        el
    }
}

impl XmlDecode for Setting {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Setting")?;
        let mut setting = Setting::new(el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            setting.id = id.parse()?;
        }
        if let Some(value) = el.child("Value") {
            setting.value = Some(value.text());
        }
        Ok(setting)
    }
}

/// A mailing-list subscription keyed by email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    email: String,
    pub active: bool,
    pub created: DateTime<Utc>,
}

entity_eq!(Subscription: email);

impl Subscription {
    pub fn new(email: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            email: require("Email", email)?,
            active: true,
            created: now(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        self.email = require("Email", email)?;
        Ok(())
    }

    /// Subscriptions order by signup time, oldest first
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.created.cmp(&other.created)
    }
}

impl XmlEncode for Subscription {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Subscription");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("DateCreated", format_date(&self.created));
        el.push_text_child("Email", &self.email);
        el.push_text_child("Active", self.active.to_string());
        el
    }
}

impl XmlDecode for Subscription {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Subscription")?;
        let mut subscription = Subscription::new(el.required_text("Email")?)?;
        if let Some(id) = el.child_text("Id") {
            subscription.id = id.parse()?;
        }
        if let Some(created) = el.child_text("DateCreated") {
            subscription.created = parse_date(&created)?;
        }
        if let Some(active) = el.child_text("Active") {
            subscription.active = active.parse()?;
        }
        Ok(subscription)
    }
}

/// A numeric rating of an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub item_id: i64,
    pub value: i32,
    pub created: DateTime<Utc>,
}

entity_eq!(Rating: item_id, value);

impl Rating {
    pub fn new(value: i32) -> Self {
        Self {
            id: 0,
            item_id: 0,
            value,
            created: now(),
        }
    }

    /// Ratings order by value, ascending
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new(0)
    }
}

impl XmlEncode for Rating {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("Rating");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("DateCreated", format_date(&self.created));
        if self.item_id != 0 {
            el.push_text_child("ItemId", self.item_id.to_string());
        }
        el.push_text_child("Value", self.value.to_string());
        el
    }
}

impl XmlDecode for Rating {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("Rating")?;
        let mut rating = Rating::new(el.required_text("Value")?.parse()?);
        if let Some(id) = el.child_text("Id") {
            rating.id = id.parse()?;
        }
        if let Some(item_id) = el.child_text("ItemId") {
            rating.item_id = item_id.parse()?;
        }
        if let Some(created) = el.child_text("DateCreated") {
            rating.created = parse_date(&created)?;
        }
        Ok(rating)
    }
}

/// A selectable option in a poll, with its running vote count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    pub id: i64,
    name: String,
    pub votes: u64,
}

entity_eq!(PollOption: name);

impl PollOption {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("Name", name)?,
            votes: 0,
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

impl XmlEncode for PollOption {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("PollOption");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        if self.votes != 0 {
            el.push_text_child("Votes", self.votes.to_string());
        }
        el
    }
}

impl XmlDecode for PollOption {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("PollOption")?;
        let mut option = PollOption::new(el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            option.id = id.parse()?;
        }
        if let Some(votes) = el.child_text("Votes") {
            option.votes = votes.parse()?;
        }
        Ok(option)
    }
}

/// A cast answer referencing the chosen poll option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollAnswer {
    pub id: i64,
    name: String,
    pub option_id: i64,
}

entity_eq!(PollAnswer: name, option_id);

impl PollAnswer {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: 0,
            name: require("Name", name)?,
            option_id: 0,
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

impl XmlEncode for PollAnswer {
    fn to_xml(&self) -> Element {
        let mut el = Element::new("PollAnswer");
        if self.id != 0 {
            el.push_text_child("Id", self.id.to_string());
        }
        el.push_text_child("Name", &self.name);
        if self.option_id != 0 {
            el.push_text_child("OptionId", self.option_id.to_string());
        }
        el
    }
}

impl XmlDecode for PollAnswer {
    fn from_xml(el: &Element) -> Result<Self> {
        el.expect_name("PollAnswer")?;
        let mut answer = PollAnswer::new(el.required_text("Name")?)?;
        if let Some(id) = el.child_text("Id") {
            answer.id = id.parse()?;
        }
        if let Some(option_id) = el.child_text("OptionId") {
            answer.option_id = option_id.parse()?;
        }
        Ok(answer)
    }
}
