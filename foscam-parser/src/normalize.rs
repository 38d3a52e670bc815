//! Response normalization.
//!
//! Turns the raw XML body returned by `CGIProxy.fcgi` into a [`Value`]:
//! parse, walk the element tree coercing leaves, then drop the
//! `<CGI_Result>` envelope. Nothing here reports an error to the caller;
//! text that does not parse is handed back untouched.

use crate::error::{ParseError, ParseResult};
use crate::numeric::coerce_leaf;
use crate::value::Value;
use indexmap::map::Entry;
use indexmap::IndexMap;
use xmltree::{Element, XMLNode};

/// Wrapper element the device puts around every CGI reply.
pub const CGI_RESULT_ENVELOPE: &str = "CGI_Result";

/// Outcome of normalizing a raw response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The transport produced no body
    Absent,
    /// The body was not well-formed XML and is passed through unchanged
    Unparsed(String),
    /// The body parsed; envelope removed and leaves coerced
    Parsed(Value),
}

impl Response {
    pub fn is_absent(&self) -> bool {
        matches!(self, Response::Absent)
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Response::Parsed(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Response::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Response::Parsed(value) => Some(value),
            _ => None,
        }
    }

    /// The original text of a body that failed to parse
    pub fn as_unparsed(&self) -> Option<&str> {
        match self {
            Response::Unparsed(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// JSON view: `null`, the passthrough string, or the parsed value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Response::Absent => serde_json::Value::Null,
            Response::Unparsed(text) => serde_json::Value::String(text.clone()),
            Response::Parsed(value) => value.to_json(),
        }
    }
}

/// Normalize a raw device response.
///
/// ```rust
/// use foscam_parser::{normalize, Response, Value};
///
/// let parsed = normalize(Some("<CGI_Result><result>0</result></CGI_Result>"));
/// assert_eq!(parsed.as_value().and_then(|v| v.get("result")), Some(&Value::Number(0.0)));
///
/// assert_eq!(normalize(Some("not xml")), Response::Unparsed("not xml".to_string()));
/// assert_eq!(normalize(None), Response::Absent);
/// ```
pub fn normalize(raw: Option<&str>) -> Response {
    let Some(text) = raw else {
        return Response::Absent;
    };

    match parse_document(text) {
        Ok(root) => Response::Parsed(unwrap_envelope(document_value(&root))),
        Err(e) => {
            tracing::debug!(error = %e, "Response is not XML, passing through");
            Response::Unparsed(text.to_string())
        }
    }
}

/// Asynchronous form of [`normalize`].
///
/// Resolves exactly once and never fails. The work is pure and in-memory,
/// so it completes on first poll.
pub async fn parse_response(raw: Option<String>) -> Response {
    normalize(raw.as_deref())
}

/// Parse `text` into its single root element.
fn parse_document(text: &str) -> ParseResult<Element> {
    let nodes = Element::parse_all(text.as_bytes())
        .map_err(|e| ParseError::InvalidXmlStructure(e.to_string()))?;

    let mut root = None;
    for node in nodes {
        match node {
            XMLNode::Element(element) => {
                if root.is_some() {
                    return Err(ParseError::InvalidXmlStructure(
                        "multiple root elements".to_string(),
                    ));
                }
                root = Some(element);
            }
            XMLNode::Text(text) | XMLNode::CData(text) if !text.trim().is_empty() => {
                return Err(ParseError::InvalidXmlStructure(
                    "text outside the root element".to_string(),
                ));
            }
            _ => {}
        }
    }

    root.ok_or_else(|| ParseError::InvalidXmlStructure("no root element".to_string()))
}

/// `{root_name: walk(root)}`
fn document_value(root: &Element) -> Value {
    let mut map = IndexMap::with_capacity(1);
    map.insert(root.name.clone(), walk(root));
    Value::Map(map)
}

fn walk(element: &Element) -> Value {
    let mut children = element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    });

    let Some(first) = children.next() else {
        return coerce_leaf(&leaf_text(element));
    };

    let mut map: IndexMap<String, Value> = IndexMap::new();
    for child in std::iter::once(first).chain(children) {
        insert_child(&mut map, &child.name, walk(child));
    }
    Value::Map(map)
}

/// Insert a child, folding repeated names into a list kept at the position
/// of the first occurrence.
fn insert_child(map: &mut IndexMap<String, Value>, name: &str, value: Value) {
    match map.entry(name.to_string()) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(mut entry) => {
            // walk() never yields a list, so an existing list is a fold
            let existing = entry.get_mut();
            match existing {
                Value::List(items) => items.push(value),
                _ => {
                    let first = std::mem::replace(existing, Value::List(Vec::with_capacity(2)));
                    if let Value::List(items) = existing {
                        items.push(first);
                        items.push(value);
                    }
                }
            }
        }
    }
}

fn leaf_text(element: &Element) -> String {
    element
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Text(text) | XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Map(mut map) if map.len() == 1 && map.contains_key(CGI_RESULT_ENVELOPE) => map
            .swap_remove(CGI_RESULT_ENVELOPE)
            .unwrap_or(Value::Map(IndexMap::new())),
        other => other,
    }
}
