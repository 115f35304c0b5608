//! Resource layering: merge several raw dictionaries for one language into a
//! single effective dictionary.
//!
//! Layers are applied in order. A layer only overwrites a key when it has a
//! non-empty value for it, so a gap in a more specific layer never blanks out a
//! value set by a more generic one.
//!
//! The built-in layers differ between the default language and the others:
//!
//! - default language: `builtin(lang)`, `builtin(strip_region(lang))`,
//!   `plugin(lang)`, `user(lang)`
//! - other languages: `builtin(lang)` or else `builtin(strip_region(lang))`,
//!   `plugin(lang)`, `user(lang)`

use crate::i18n::{DictionarySet, EffectiveDictionary, LanguageTag, RawDictionary};
use std::collections::BTreeMap;
use std::fmt;

/// Where a dictionary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Shipped with the crate
    Builtin,
    /// Contributed by a site plugin
    Plugin,
    /// Authored by the site
    User,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Builtin => "builtin",
            Origin::Plugin => "plugin",
            Origin::User => "user",
        })
    }
}

/// One entry of a merge plan.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub origin: Origin,
    /// The tag that was looked up in the origin's set
    pub tag: &'a str,
    /// `None` when the origin has no dictionary for `tag`
    pub dictionary: Option<&'a RawDictionary>,
}

/// The three dictionary origins a translation system is built from.
#[derive(Debug, Clone, Default)]
pub struct TranslationSources {
    pub builtin: DictionarySet,
    pub plugin: DictionarySet,
    pub user: DictionarySet,
}

impl TranslationSources {
    pub fn new(builtin: DictionarySet) -> Self {
        Self {
            builtin,
            ..Self::default()
        }
    }

    pub fn with_plugin(mut self, plugin: DictionarySet) -> Self {
        self.plugin = plugin;
        self
    }

    pub fn with_user(mut self, user: DictionarySet) -> Self {
        self.user = user;
        self
    }

    fn set(&self, origin: Origin) -> &DictionarySet {
        match origin {
            Origin::Builtin => &self.builtin,
            Origin::Plugin => &self.plugin,
            Origin::User => &self.user,
        }
    }

    fn layer<'a>(&'a self, origin: Origin, tag: &'a str) -> Layer<'a> {
        Layer {
            origin,
            tag,
            dictionary: self.set(origin).get(tag),
        }
    }

    /// Build the ordered merge plan for a language.
    ///
    /// `stripped` must be `lang.strip_region()`; it is borrowed so the layers
    /// can point at it.
    pub fn layers_for<'a>(
        &'a self,
        lang: &'a LanguageTag,
        stripped: &'a LanguageTag,
        is_default: bool,
    ) -> Vec<Layer<'a>> {
        let mut layers = Vec::with_capacity(4);

        if is_default {
            layers.push(self.layer(Origin::Builtin, lang.as_str()));
            layers.push(self.layer(Origin::Builtin, stripped.as_str()));
        } else {
            let exact = self.layer(Origin::Builtin, lang.as_str());
            if exact.dictionary.is_some() {
                layers.push(exact);
            } else {
                layers.push(self.layer(Origin::Builtin, stripped.as_str()));
            }
        }

        layers.push(self.layer(Origin::Plugin, lang.as_str()));
        layers.push(self.layer(Origin::User, lang.as_str()));
        layers
    }

    /// Build the effective dictionary for a language.
    pub fn build_dictionary(&self, lang: &LanguageTag, is_default: bool) -> EffectiveDictionary {
        let stripped = lang.strip_region();
        merge(self.layers_for(lang, &stripped, is_default))
    }
}

/// Merge layers in order into one dictionary.
///
/// Non-empty values overwrite earlier ones; missing, null and empty values are
/// skipped.
pub fn merge<'a, I>(layers: I) -> EffectiveDictionary
where
    I: IntoIterator<Item = Layer<'a>>,
{
    merge_dictionaries(layers.into_iter().map(|layer| layer.dictionary))
}

/// Merge bare dictionaries in order, with the same rules as [`merge`].
pub fn merge_dictionaries<'a, I>(sources: I) -> EffectiveDictionary
where
    I: IntoIterator<Item = Option<&'a RawDictionary>>,
{
    let mut entries = BTreeMap::new();

    for dictionary in sources.into_iter().flatten() {
        for (key, value) in dictionary.iter() {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                entries.insert(key.to_string(), value.to_string());
            }
        }
    }

    EffectiveDictionary::from_entries(entries)
}
