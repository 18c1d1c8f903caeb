//! Bridges between XML elements and other value representations.
//!
//! Two surfaces live here:
//! - element ↔ `serde_json::Value` translation (attributes and leaf elements
//!   become string entries, nested elements become objects, repeated names
//!   become arrays, absent content maps to null)
//! - generic serde object ↔ XML string, delegated to `quick_xml::se`/`de`

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::xml::Element;

/// Translate an element into a JSON-style value.
///
/// Leaf elements with text become strings, leaf elements without content
/// become null. Elements with attributes or children become objects keyed by
/// attribute and child names; repeated child names collapse into an array.
/// Mixed text next to children is kept under `"#text"`.
pub fn element_to_value(el: &Element) -> Value {
    let has_children = el.children().next().is_some();

    if el.attributes().is_empty() && !has_children {
        let text = el.text();
        return if text.is_empty() {
            Value::Null
        } else {
            Value::String(text)
        };
    }

    let mut map = Map::new();
    for (key, value) in el.attributes() {
        map.insert(key.clone(), Value::String(value.clone()));
    }
    for child in el.children() {
        let value = element_to_value(child);
        match map.entry(child.name().to_owned()) {
            serde_json::map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
            serde_json::map::Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if let Value::Array(items) = existing {
                    items.push(value);
                } else {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            }
        }
    }
    let text = el.text();
    if !text.is_empty() {
        map.insert("#text".into(), Value::String(text));
    }
    Value::Object(map)
}

/// Inverse of [`element_to_value`] for object/scalar values.
///
/// Every entry becomes a child element (attributes are not reconstructed);
/// arrays become repeated children, null becomes an empty element.
pub fn value_to_element(name: &str, value: &Value) -> Result<Element> {
    let mut el = Element::new(name);
    append_value(&mut el, value)?;
    Ok(el)
}

fn append_value(el: &mut Element, value: &Value) -> Result<()> {
    match value {
        Value::Null => {}
        Value::String(s) => el.push_text(s.clone()),
        Value::Bool(b) => el.push_text(b.to_string()),
        Value::Number(n) => el.push_text(n.to_string()),
        Value::Object(map) => {
            for (key, entry) in map {
                if key == "#text" {
                    if let Value::String(s) = entry {
                        el.push_text(s.clone());
                    }
                    continue;
                }
                match entry {
                    Value::Array(items) => {
                        for item in items {
                            el.push(value_to_element(key, item)?);
                        }
                    }
                    _ => el.push(value_to_element(key, entry)?),
                }
            }
        }
        Value::Array(_) => {
            return Err(Error::Malformed(
                "array cannot form an element body without a field name".into(),
            ));
        }
    }
    Ok(())
}

/// Serialize any serde value to an XML string (root named after the type)
pub fn to_xml_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(quick_xml::se::to_string(value)?)
}

/// Serialize any serde value into a `fmt::Write` sink
pub fn write_xml<T: Serialize, W: std::fmt::Write>(writer: W, value: &T) -> Result<()> {
    quick_xml::se::to_writer(writer, value)?;
    Ok(())
}

/// Serialize any serde value into an `io::Write` sink without buffering the
/// whole document in memory first
pub fn write_xml_bytes<T: Serialize, W: std::io::Write>(writer: W, value: &T) -> Result<()> {
    // the serializer speaks fmt::Write; the adapter carries the io error out
    struct IoAdapter<W: std::io::Write> {
        inner: W,
        error: Option<std::io::Error>,
    }

    impl<W: std::io::Write> std::fmt::Write for IoAdapter<W> {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.inner.write_all(s.as_bytes()).map_err(|e| {
                self.error = Some(e);
                std::fmt::Error
            })
        }
    }

    let mut adapter = IoAdapter {
        inner: writer,
        error: None,
    };
    match quick_xml::se::to_writer(&mut adapter, value) {
        Ok(_) => Ok(()),
        Err(err) => match adapter.error.take() {
            Some(io_err) => Err(Error::Io(io_err)),
            None => Err(err.into()),
        },
    }
}

/// Deserialize any serde value from an XML string
pub fn from_xml_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(quick_xml::de::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[test]
    fn leaf_elements_become_strings_and_nulls() {
        let el = Element::parse("<Setting><Name>theme</Name><Value/></Setting>").unwrap();
        let value = element_to_value(&el);

        assert_eq!(value["Name"], Value::String("theme".into()));
        assert_eq!(value["Value"], Value::Null);
    }

    #[test]
    fn attributes_and_repeated_children_translate() {
        let el =
            Element::parse("<Tags lang=\"en\"><Tag>a</Tag><Tag>b</Tag></Tags>").unwrap();
        let value = element_to_value(&el);

        assert_eq!(value["lang"], Value::String("en".into()));
        assert_eq!(
            value["Tag"],
            Value::Array(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn object_value_round_trips_through_element() {
        let el = Element::parse(
            "<City><Name>Oslo</Name><Country><Name>Norway</Name></Country></City>",
        )
        .unwrap();
        let value = element_to_value(&el);
        let rebuilt = value_to_element("City", &value).unwrap();

        assert_eq!(element_to_value(&rebuilt), value);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Envelope {
        name: String,
        count: u32,
    }

    #[test]
    fn serde_bridge_round_trips() {
        let message = Envelope {
            name: "x".into(),
            count: 3,
        };
        let text = to_xml_string(&message).unwrap();
        let back: Envelope = from_xml_str(&text).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn byte_sink_serialization_matches_string_form() {
        let value = Envelope {
            name: "stream".into(),
            count: 1,
        };

        let mut sink: Vec<u8> = Vec::new();
        write_xml_bytes(&mut sink, &value).unwrap();
        assert_eq!(sink, to_xml_string(&value).unwrap().into_bytes());

        let mut text = String::new();
        write_xml(&mut text, &value).unwrap();
        assert_eq!(text.into_bytes(), sink);
    }
}
