use crate::utils::error::{Result, SeedError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loaded Postman collection.
///
/// Kept as a raw JSON tree so keys the tool does not know about, and the
/// order they were exported in, survive the rewrite untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    root: Value,
}

impl Collection {
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(data)?;
        Ok(Self { root })
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Top-level `item` sequence.
    pub fn items(&self) -> Result<&Vec<Value>> {
        let root = self
            .root
            .as_object()
            .ok_or_else(|| SeedError::invalid_collection("root is not a JSON object"))?;
        match root.get("item") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(SeedError::invalid_collection("\"item\" is not an array")),
            None => Err(SeedError::invalid_collection("missing top-level \"item\" key")),
        }
    }

    pub fn items_mut(&mut self) -> Result<&mut Vec<Value>> {
        let root = self
            .root
            .as_object_mut()
            .ok_or_else(|| SeedError::invalid_collection("root is not a JSON object"))?;
        match root.get_mut("item") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(SeedError::invalid_collection("\"item\" is not an array")),
            None => Err(SeedError::invalid_collection("missing top-level \"item\" key")),
        }
    }
}

/// How an entry of an `item` sequence is treated by the walker.
#[derive(Debug)]
pub enum ItemKind<'a> {
    Group(&'a mut Value),
    Request {
        name: String,
        request: &'a mut Value,
    },
    Other,
}

impl<'a> ItemKind<'a> {
    /// Folders win over requests when an entry carries both keys.
    pub fn classify(item: &'a mut Map<String, Value>) -> Self {
        if item.contains_key("item") {
            return match item.get_mut("item") {
                Some(nested) => ItemKind::Group(nested),
                None => ItemKind::Other,
            };
        }

        let name = item
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        match item.get_mut("request") {
            Some(request) => ItemKind::Request { name, request },
            None => ItemKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<RequestItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<Event>>,
    pub request: RequestSpec,
    #[serde(default)]
    pub response: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: String,
    #[serde(default)]
    pub header: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: RequestUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

impl Body {
    pub fn raw(raw: &str) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: raw.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestUrl {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub listen: String,
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub exec: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// What a transform pass did to the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchReport {
    pub patched: Vec<String>,
    pub requests_visited: usize,
    pub groups_visited: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub collection: Collection,
    pub report: PatchReport,
    pub inserted_requests: usize,
}
