//! `docker inspect --type={image,container}` parser

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use snap_context::Context;

use crate::error::{Error, Result};

/// Which object type was inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectKind {
    Image,
    Container,
}

/// Decoded `docker inspect` output.
///
/// The command prints a JSON array with one object per inspected item; only
/// the first object is kept. Any decoding problem leaves `data` empty, so
/// callers always get a structure to query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockerInspect {
    kind: InspectKind,
    data: Map<String, Value>,
}

/// Decode inspect output into the first inspected object.
pub fn unmarshal(content: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(Error::parse("docker inspect", "expected a JSON array"));
    };
    match items.into_iter().next() {
        Some(Value::Object(first)) => Ok(first),
        Some(_) => Err(Error::parse("docker inspect", "first element is not an object")),
        None => Err(Error::parse("docker inspect", "empty array")),
    }
}

impl DockerInspect {
    pub fn parse_as(context: &Context, kind: InspectKind) -> Self {
        let data = unmarshal(&context.joined()).unwrap_or_else(|e| {
            tracing::debug!(?kind, error = %e, "Unreadable docker inspect output");
            Map::new()
        });
        Self { kind, data }
    }

    pub fn parse_image(context: &Context) -> Self {
        Self::parse_as(context, InspectKind::Image)
    }

    pub fn parse_container(context: &Context) -> Self {
        Self::parse_as(context, InspectKind::Container)
    }

    pub fn kind(&self) -> InspectKind {
        self.kind
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Top-level value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl std::ops::Index<&str> for DockerInspect {
    type Output = Value;

    /// Missing keys index to `Value::Null`, like `serde_json::Value` does.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.data.get(key).unwrap_or(&NULL)
    }
}
