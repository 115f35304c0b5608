//! Dictionary types.
//!
//! A `RawDictionary` is what a loader produces: values may be missing (`null`)
//! or empty. An `EffectiveDictionary` is the layered result for one language
//! and only ever holds non-empty strings.

use crate::i18n::LanguageTag;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Dictionaries from one origin, keyed by language tag.
pub type DictionarySet = HashMap<LanguageTag, RawDictionary>;

/// Unvalidated key/value strings for one language from one origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDictionary {
    entries: BTreeMap<String, Option<String>>,
}

impl RawDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    /// Get the raw value for a key (`Some(None)` when present but null).
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        }
    }
}

/// The final string table for one language. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectiveDictionary {
    entries: BTreeMap<String, String>,
}

static EMPTY: EffectiveDictionary = EffectiveDictionary {
    entries: BTreeMap::new(),
};

impl EffectiveDictionary {
    /// A shared empty dictionary.
    pub fn empty() -> &'static EffectiveDictionary {
        &EMPTY
    }

    pub(crate) fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
