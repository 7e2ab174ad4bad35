// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Notion `token_v2` session cookie, needed only for non-public pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new session token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into().trim().to_string();

        if token.is_empty() {
            return Err(ValidationError::InvalidAuthToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.chars().any(|c| c.is_whitespace() || c == ';') {
            return Err(ValidationError::InvalidAuthToken {
                reason: "token must not contain whitespace or ';'".to_string(),
            });
        }

        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact token in display
        let visible: String = self.0.chars().take(6).collect();
        write!(f, "{}...", visible)
    }
}

/// Validated http(s) URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// The URL with any trailing slash removed, ready for `{base}/{path}` joins.
    pub fn as_base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_token_is_redacted() {
        let token = AuthToken::new("v02%3Auser_token_or_cookies%3Aabc").unwrap();
        assert_eq!(token.to_string(), "v02%3A...");
    }

    #[test]
    fn auth_token_rejects_cookie_injection() {
        assert!(AuthToken::new("").is_err());
        assert!(AuthToken::new("abc; other=1").is_err());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let url = ValidatedUrl::parse("https://www.notion.so/api/v3/").unwrap();
        assert_eq!(url.as_base(), "https://www.notion.so/api/v3");
        assert!(ValidatedUrl::parse("ftp://example.com").is_err());
    }
}
