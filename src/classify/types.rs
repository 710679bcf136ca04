//! Identifier and request-kind types shared by the core.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Browser tab identifier.
///
/// Hosts report non-positive ids for requests without a tab (prefetch,
/// service workers, background fetches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i64);

impl TabId {
    /// True if this id refers to a real tab.
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for TabId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host-assigned request identifier.
///
/// Kept as text because hosts disagree on whether it is a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// Resource type of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    /// The page itself.
    MainFrame,
    /// An embedded frame.
    SubFrame,
    /// Any sub-resource.
    #[serde(other)]
    Other,
}

/// Transport scheme of a request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
    Other,
}

impl Scheme {
    /// Scheme of `url`; unparseable URLs map to `Other`.
    pub fn of(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) => match parsed.scheme() {
                "http" => Scheme::Http,
                "https" => Scheme::Https,
                _ => Scheme::Other,
            },
            Err(_) => Scheme::Other,
        }
    }
}
