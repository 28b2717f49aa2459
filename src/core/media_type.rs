//! # Media type
//!
//! Minimal `type/subtype; name=value` parser. It only knows what is needed to
//! classify a body: the subtype and the `charset` parameter. The original
//! string is kept so a body which is rewritten goes out with exactly the
//! content type it came with.

use std::fmt::Display;

/// Parsed `Content-Type` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaType {
    raw: String,
    kind: String,
    subtype: String,
    parameters: Vec<(String, String)>,
}

impl MediaType {
    /// Parse a `Content-Type` header value.
    ///
    /// Returns `None` when the value isn't a `type/subtype` pair.
    pub fn parse(value: &str) -> Option<Self> {
        let mut sections = value.split(';');
        let (kind, subtype) = sections.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());

        if kind.is_empty() || subtype.is_empty() || !is_token(kind) || !is_token(subtype) {
            return None;
        }

        let parameters = sections
            .filter_map(|section| section.split_once('='))
            .map(|(name, value)| {
                (
                    name.trim().to_ascii_lowercase(),
                    value.trim().trim_matches('"').to_string(),
                )
            })
            .filter(|(name, _)| !name.is_empty())
            .collect();

        Some(Self {
            raw: value.trim().to_string(),
            kind: kind.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            parameters,
        })
    }

    /// Top-level type, lower-cased (`application` in `application/json`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Subtype, lower-cased (`json` in `application/json`).
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Value of the `charset` parameter, if declared.
    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

    /// Value of the parameter called `name` (case-insensitive).
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the body is a JSON document.
    pub fn is_json(&self) -> bool {
        self.subtype.eq_ignore_ascii_case("json")
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// RFC 7230 token characters.
fn is_token(value: &str) -> bool {
    value.bytes().all(|byte| {
        byte.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&byte)
    })
}
