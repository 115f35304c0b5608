//! Locale registry: maps site locales to language tags and language tags to
//! text direction.
//!
//! The registry itself only holds static data (the right-to-left table) and is
//! initialized once with `OnceLock`. Site configuration is always passed in
//! explicitly.

use crate::i18n::rtl::RTL_LANGUAGES;
use crate::i18n::{LanguageTag, TextDirection};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

/// Locale identifier of the root (unprefixed) locale.
pub const ROOT_LOCALE: &str = "root";

/// Configuration for one site locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Human-readable name shown in language pickers (e.g. "Français")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// BCP-47 language tag for this locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<LanguageTag>,

    /// Locale identifier (URL prefix); `None` for the root locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Writing direction of the locale's content
    #[serde(default)]
    pub dir: TextDirection,
}

impl LocaleConfig {
    /// Create a locale configuration for a language tag.
    pub fn new(lang: impl Into<LanguageTag>) -> Self {
        Self {
            lang: Some(lang.into()),
            ..Self::default()
        }
    }

    /// The locale used when a site configures none: English, left-to-right.
    pub fn builtin_default() -> Self {
        Self::new(LanguageTag::builtin_default())
    }

    /// Set the locale identifier.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the text direction.
    pub fn with_dir(mut self, dir: TextDirection) -> Self {
        self.dir = dir;
        self
    }
}

/// Site-wide i18n configuration.
///
/// `default_locale` is optional only so that a structurally invalid
/// configuration can be reported at build time instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteI18nConfig {
    pub default_locale: Option<LocaleConfig>,

    #[serde(default)]
    pub locales: BTreeMap<String, LocaleConfig>,
}

impl SiteI18nConfig {
    /// Create a single-language configuration.
    pub fn new(default_locale: LocaleConfig) -> Self {
        Self {
            default_locale: Some(default_locale),
            locales: BTreeMap::new(),
        }
    }

    /// Declare an additional locale.
    pub fn with_locale(mut self, id: impl Into<String>, locale: LocaleConfig) -> Self {
        self.locales.insert(id.into(), locale);
        self
    }
}

impl Default for SiteI18nConfig {
    fn default() -> Self {
        Self::new(LocaleConfig::builtin_default())
    }
}

/// Locale registry singleton.
pub struct LocaleRegistry {
    rtl: HashSet<&'static str>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            rtl: RTL_LANGUAGES.iter().copied().collect(),
        })
    }

    /// Resolve the language tag of the default locale.
    ///
    /// Tries `defaultLocale.lang`, then `defaultLocale.locale`, then the
    /// built-in default (`en`).
    pub fn default_lang(&self, config: &SiteI18nConfig) -> LanguageTag {
        config
            .default_locale
            .as_ref()
            .and_then(|default| {
                non_empty(default.lang.as_ref().map(LanguageTag::as_str))
                    .or_else(|| non_empty(default.locale.as_deref()))
            })
            .map(LanguageTag::new)
            .unwrap_or_else(LanguageTag::builtin_default)
    }

    /// Resolve the language tag for a locale identifier.
    ///
    /// `None` (or an empty identifier) designates the root locale. Falls back
    /// to the default locale's tag and finally the built-in default, so this
    /// never fails.
    pub fn resolve_lang(&self, locale: Option<&str>, config: &SiteI18nConfig) -> LanguageTag {
        let id = match locale {
            Some(id) if !id.is_empty() => id,
            _ => ROOT_LOCALE,
        };

        config
            .locales
            .get(id)
            .and_then(|entry| non_empty(entry.lang.as_ref().map(LanguageTag::as_str)))
            .map(LanguageTag::new)
            .unwrap_or_else(|| self.default_lang(config))
    }

    /// Get the text direction of a language tag.
    ///
    /// A tag is right-to-left when its primary subtag is in the RTL table, or
    /// when it carries an Arabic script subtag (e.g. `pa-Arab`).
    pub fn direction(&self, tag: &str) -> TextDirection {
        let lower = LanguageTag::new(tag.to_ascii_lowercase());
        let script_pos = lower.as_str().find("-arab");

        if self.rtl.contains(lower.primary()) || script_pos.is_some_and(|pos| pos > 1) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Check if a language tag is written right to left.
    pub fn is_rtl(&self, tag: &str) -> bool {
        self.direction(tag) == TextDirection::Rtl
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
