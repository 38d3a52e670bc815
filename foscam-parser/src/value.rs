//! Canonical value model for normalized device responses.

use crate::error::{ParseError, ParseResult};
use crate::numeric::format_number;
use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

/// Largest magnitude below which every integer is exactly representable
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A normalized response value.
///
/// Produced by walking the parsed XML tree:
/// - an element with child elements becomes a [`Value::Map`] keyed by child name,
///   in document order;
/// - a leaf element becomes a [`Value::Number`] when its text round-trips
///   losslessly, otherwise a [`Value::Text`];
/// - child elements sharing a name are gathered into a [`Value::List`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Map(IndexMap<String, Value>),
    List(Vec<Value>),
    /// Always finite
    Number(f64),
    Text(String),
}

impl Value {
    /// Look up a key when this value is a map
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The number as an integer, when it has no fractional part and fits
    /// the exactly-representable range
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(exact_integer)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Convert into a `serde_json::Value`.
    ///
    /// Integral numbers are emitted as JSON integers so that values such as
    /// `999999999999` do not pick up a trailing `.0`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Number(n) => match exact_integer(*n) {
                Some(i) => serde_json::Value::from(i),
                None => serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            },
            Value::Text(text) => serde_json::Value::String(text.clone()),
        }
    }

    /// Serialize back into XML under a root element named `root`.
    ///
    /// Numbers are written in canonical form, so normalizing the output
    /// reproduces the value. Empty maps and whitespace-only text cannot be
    /// told apart from empty leaves once written and come back as `Text("")`.
    pub fn to_xml(&self, root: &str) -> ParseResult<String> {
        if matches!(self, Value::List(_)) {
            return Err(ParseError::XmlSerializationFailed(
                "a list cannot be the document root".to_string(),
            ));
        }

        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, root, self)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| ParseError::XmlSerializationFailed(e.to_string()))
    }
}

fn exact_integer(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER).then_some(n as i64)
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> ParseResult<()> {
    let text = match value {
        Value::List(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            return Ok(());
        }
        Value::Number(n) => Some(format_number(*n)),
        Value::Text(text) => Some(text.clone()),
        Value::Map(_) => None,
    };

    write_event(writer, Event::Start(BytesStart::new(name)))?;
    match (value, text) {
        (Value::Map(map), _) => {
            for (key, child) in map {
                write_element(writer, key, child)?;
            }
        }
        (_, Some(text)) if !text.is_empty() => {
            write_event(writer, Event::Text(BytesText::new(&text)))?;
        }
        _ => {}
    }
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> ParseResult<()> {
    writer
        .write_event(event)
        .map_err(|e| ParseError::XmlSerializationFailed(e.to_string()))
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Value::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Value::Number(n) => match exact_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        [
            ("result".to_string(), Value::from(0.0)),
            ("mac".to_string(), Value::from(999999999999.0)),
            ("ratio".to_string(), Value::from(0.5)),
            ("devName".to_string(), Value::from("Porch & Yard")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_accessors() {
        let value = sample();
        assert_eq!(value.get("result").and_then(Value::as_i64), Some(0));
        assert_eq!(value.get("ratio").and_then(Value::as_i64), None);
        assert_eq!(value.get("ratio").and_then(Value::as_number), Some(0.5));
        assert_eq!(value.get("devName").and_then(Value::as_text), Some("Porch & Yard"));
        assert!(value.get("missing").is_none());
        assert!(Value::from("x").get("x").is_none());
    }

    #[test]
    fn test_to_json_keeps_integers_integral() {
        assert_eq!(
            sample().to_json(),
            json!({"result": 0, "mac": 999999999999_i64, "ratio": 0.5, "devName": "Porch & Yard"})
        );
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let value = sample();
        assert_eq!(serde_json::to_value(&value).unwrap(), value.to_json());
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let binding = sample();
        let keys: Vec<&str> = binding.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["result", "mac", "ratio", "devName"]);
    }

    #[test]
    fn test_to_xml_escapes_and_formats() {
        let xml = sample().to_xml("CGI_Result").unwrap();
        assert_eq!(
            xml,
            "<CGI_Result><result>0</result><mac>999999999999</mac><ratio>0.5</ratio>\
             <devName>Porch &amp; Yard</devName></CGI_Result>"
        );
    }

    #[test]
    fn test_to_xml_repeats_list_items() {
        let value: Value = [(
            "channel".to_string(),
            Value::List(vec![Value::from(1.0), Value::from("two")]),
        )]
        .into_iter()
        .collect();

        assert_eq!(
            value.to_xml("root").unwrap(),
            "<root><channel>1</channel><channel>two</channel></root>"
        );
    }

    #[test]
    fn test_to_xml_rejects_list_root() {
        let result = Value::List(vec![]).to_xml("root");
        assert!(matches!(result, Err(ParseError::XmlSerializationFailed(_))));
    }
}
