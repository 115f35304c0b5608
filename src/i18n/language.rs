//! Language tags and text direction.
//!
//! `LanguageTag` is an opaque BCP-47 identifier (e.g. "en", "en-GB", "zh-TW").
//! Tags are compared verbatim: they are not case-folded or otherwise normalized.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A BCP-47 language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Tag used when no configuration names a language.
    pub const BUILTIN_DEFAULT: &'static str = "en";

    /// Create a tag from any string-like value.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The built-in default language tag (`en`).
    pub fn builtin_default() -> Self {
        Self::new(Self::BUILTIN_DEFAULT)
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strip the region subtag from this tag.
    ///
    /// Removes the first two-letter subtag that follows the primary subtag
    /// (`en-GB` -> `en`, `pt-BR` -> `pt`). Tags without one are returned
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use docsite_i18n::i18n::LanguageTag;
    ///
    /// assert_eq!(LanguageTag::new("en-GB").strip_region().as_str(), "en");
    /// ```
    pub fn strip_region(&self) -> LanguageTag {
        let mut subtags = self.0.split('-');
        let Some(primary) = subtags.next() else {
            return self.clone();
        };

        let mut out = String::with_capacity(self.0.len());
        out.push_str(primary);
        let mut stripped = false;
        for subtag in subtags {
            if !stripped && subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                stripped = true;
                continue;
            }
            out.push('-');
            out.push_str(subtag);
        }

        LanguageTag(out)
    }

    /// Get the primary language subtag (`zh-TW` -> `zh`).
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Writing direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// The HTML `dir` attribute value ("ltr" or "rtl").
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
