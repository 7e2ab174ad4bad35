use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

static ID_IN_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)",
    )
    .expect("Notion ID regex is valid")
});

/// Identifier of a page on the content provider.
///
/// Recognised Notion ids (bare, dashed, or embedded in a notion.so URL)
/// are stored as 32 lowercase hex characters. Anything else non-empty is
/// kept verbatim and left for the provider to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    /// Parses a page identifier. Only an empty input is rejected locally.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().trim_end_matches('/');
        if cleaned.is_empty() {
            return Err(ValidationError::EmptyField("page id"));
        }

        // 1. UUID format with dashes
        if let Ok(uuid) = Uuid::parse_str(cleaned) {
            return Ok(PageId(uuid.as_simple().to_string()));
        }

        // 2. Direct 32-char hex ID
        if is_hex_id(cleaned) {
            return Ok(PageId(cleaned.to_lowercase()));
        }

        // 3. Extract from URLs or slugs ending in `-<id>`
        if let Some(id) = extract_embedded_id(cleaned) {
            return Ok(PageId(id));
        }

        Ok(PageId(cleaned.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier was recognised as a Notion id.
    pub fn is_notion_id(&self) -> bool {
        is_hex_id(&self.0)
    }

    /// The 8-4-4-4-12 form the v3 API expects. Unrecognised ids are
    /// returned unchanged.
    pub fn to_dashed(&self) -> String {
        if self.is_notion_id() {
            format!(
                "{}-{}-{}-{}-{}",
                &self.0[0..8],
                &self.0[8..12],
                &self.0[12..16],
                &self.0[16..20],
                &self.0[20..32]
            )
        } else {
            self.0.clone()
        }
    }
}

fn is_hex_id(s: &str) -> bool {
    s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn extract_embedded_id(input: &str) -> Option<String> {
    let captures = ID_IN_URL.captures(input)?;
    let id = captures.get(1)?.as_str().replace('-', "");
    Some(id.to_lowercase())
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PageId::parse(&s).map_err(serde::de::Error::custom)
    }
}
