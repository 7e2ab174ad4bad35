use crate::types::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;

/// Metadata of one blog post, as written to `postMeta.json` by the
/// site's build step.
///
/// The record is held as the ordered JSON object it was read from. Only
/// `id` is required; every other field is optional and may carry any JSON
/// value, so a record serializes back exactly as it was parsed. Typed
/// accessors read the fields the crate queries on and treat `null` or a
/// value of the wrong shape as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "IndexMap<String, Value>")]
pub struct PostMeta {
    fields: IndexMap<String, Value>,
}

impl TryFrom<IndexMap<String, Value>> for PostMeta {
    type Error = ValidationError;

    fn try_from(fields: IndexMap<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("id") {
            None | Some(Value::Null) => Err(ValidationError::EmptyField("id")),
            Some(_) => Ok(Self { fields }),
        }
    }
}

impl Serialize for PostMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl PostMeta {
    pub fn new(id: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("id".to_string(), Value::String(id.into()));
        Self { fields }
    }

    /// Sets `key` to `value`, keeping the field's position if it exists.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The identity of the post. Non-string ids are rendered as JSON text.
    pub fn id(&self) -> Cow<'_, str> {
        match self.fields.get("id") {
            Some(Value::String(id)) => Cow::Borrowed(id),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(""),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    pub fn date(&self) -> Option<&str> {
        self.text("date")
    }

    pub fn slug(&self) -> Option<&str> {
        self.text("slug")
    }

    /// String tags. `null` or a non-array yields none; non-string entries
    /// are skipped.
    pub fn tags(&self) -> Vec<&str> {
        match self.fields.get("tags") {
            Some(Value::Array(tags)) => tags.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Publication day, if `date` holds an ISO date or RFC 3339 timestamp.
    pub fn published_on(&self) -> Option<chrono::NaiveDate> {
        let raw = self.date()?.trim();
        chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                chrono::DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }
}
