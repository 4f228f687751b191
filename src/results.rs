use crate::utils;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full markup of one navigated page at the moment of capture
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL the browser was sent to
    pub url: String,

    /// Serialized document markup
    pub markup: String,
}

impl RenderedPage {
    pub fn new(url: String, markup: String) -> Self {
        Self { url, markup }
    }

    /// First `max_chars` characters of the markup
    pub fn preview(&self, max_chars: usize) -> &str {
        utils::preview(&self.markup, max_chars)
    }
}

/// Absolute URL of a set detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkRecord(String);

impl LinkRecord {
    pub fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LinkRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
