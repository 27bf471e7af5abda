//! Display language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two interchangeable display languages.
///
/// Only label resolution depends on it; priced state never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    #[default]
    Zh,
    En,
}

impl DisplayLanguage {
    /// Storage / wire code ("zh" | "en")
    pub fn code(self) -> &'static str {
        match self {
            DisplayLanguage::Zh => "zh",
            DisplayLanguage::En => "en",
        }
    }

    /// BCP 47 tag for the document root
    pub fn html_lang(self) -> &'static str {
        match self {
            DisplayLanguage::Zh => "zh-CN",
            DisplayLanguage::En => "en",
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            DisplayLanguage::Zh => DisplayLanguage::En,
            DisplayLanguage::En => DisplayLanguage::Zh,
        }
    }

    /// Pick the text matching this language
    pub fn pick<'a>(self, zh: &'a str, en: &'a str) -> &'a str {
        match self {
            DisplayLanguage::Zh => zh,
            DisplayLanguage::En => en,
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown language code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display language: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for DisplayLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(DisplayLanguage::Zh),
            "en" | "en-us" => Ok(DisplayLanguage::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}
