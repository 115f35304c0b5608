//! Per-language translator.
//!
//! A `Translator` is bound to one language and reads from the shared,
//! immutable translation map. Lookups fall back once to the default language
//! and then to the key itself, so a missing string shows up verbatim in
//! rendered output instead of failing.

use crate::i18n::{EffectiveDictionary, LanguageTag, LocaleRegistry, TextDirection, TranslationMap};
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::trace;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("placeholder regex is valid")
    })
}

/// Names of the `{{placeholders}}` used in a string.
pub(crate) fn placeholders(value: &str) -> BTreeSet<&str> {
    placeholder_regex()
        .captures_iter(value)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

/// Replace every `{{name}}` whose name is in `args`; others are left as is.
pub(crate) fn interpolate(template: &str, args: &HashMap<String, String>) -> String {
    placeholder_regex()
        .replace_all(template, |cap: &Captures<'_>| match args.get(&cap[1]) {
            Some(value) => value.clone(),
            None => cap[0].to_string(),
        })
        .into_owned()
}

/// UI string lookup for one language.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: LanguageTag,
    default_lang: LanguageTag,
    translations: Arc<TranslationMap>,
}

impl Translator {
    pub(crate) fn new(
        lang: LanguageTag,
        default_lang: LanguageTag,
        translations: Arc<TranslationMap>,
    ) -> Self {
        Self {
            lang,
            default_lang,
            translations,
        }
    }

    /// The language this translator is bound to.
    pub fn lang(&self) -> &LanguageTag {
        &self.lang
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        self.translations
            .get(self.lang.as_str())
            .and_then(|dictionary| dictionary.get(key))
            .or_else(|| {
                self.translations
                    .get(self.default_lang.as_str())
                    .and_then(|dictionary| dictionary.get(key))
            })
    }

    /// Translate a key.
    ///
    /// Returns the key itself when neither the bound language nor the default
    /// language has a value for it.
    ///
    /// # Example
    /// ```ignore
    /// let t = system.translator_for(Some("en"));
    /// assert_eq!(t.t("search.label"), "Search");
    /// ```
    pub fn t(&self, key: &str) -> String {
        match self.resolve(key) {
            Some(value) => value.to_string(),
            None => self.miss(key),
        }
    }

    /// Translate a key and fill in `{{name}}` placeholders.
    ///
    /// Placeholders without a matching argument are left verbatim.
    pub fn t_with<I, K, V>(&self, key: &str, args: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        let Some(value) = self.resolve(key) else {
            return self.miss(key);
        };

        let args: HashMap<String, String> = args
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_string(), value.to_string()))
            .collect();
        interpolate(value, &args)
    }

    fn miss(&self, key: &str) -> String {
        trace!("No translation for '{}' in '{}'", key, self.lang);
        key.to_string()
    }

    /// Check if a key resolves in the bound or the default language.
    pub fn exists(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// The bound language's own dictionary, without default-language fallback.
    ///
    /// Empty when the language was not built.
    pub fn all(&self) -> &EffectiveDictionary {
        self.translations
            .get(self.lang.as_str())
            .unwrap_or(EffectiveDictionary::empty())
    }

    /// Text direction of the bound language.
    pub fn dir(&self) -> TextDirection {
        self.dir_for(self.lang.as_str())
    }

    /// Text direction of another language.
    pub fn dir_for(&self, lang: &str) -> TextDirection {
        LocaleRegistry::get().direction(lang)
    }
}
