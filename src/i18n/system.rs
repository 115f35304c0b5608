//! Translation system: builds every configured language's dictionary once and
//! hands out translators.
//!
//! The system is an explicit value owned by whoever initializes the site. It is
//! cheap to clone (the translation map sits behind an `Arc`) and never mutated
//! after `build`, so translators can be created from any number of tasks
//! without locking.

use crate::error::{Result, TranslationError};
use crate::i18n::loader::{self, SourceState};
use crate::i18n::{
    builtin_dictionaries, DictionarySet, DictionaryValidator, EffectiveDictionary, LanguageTag,
    LocaleRegistry, SiteI18nConfig, TranslationSources, Translator, ValidationReport,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Effective dictionaries keyed by language tag.
#[derive(Debug, Clone, Default)]
pub struct TranslationMap {
    dictionaries: HashMap<LanguageTag, Arc<EffectiveDictionary>>,
}

impl TranslationMap {
    pub(crate) fn insert(&mut self, lang: LanguageTag, dictionary: Arc<EffectiveDictionary>) {
        self.dictionaries.insert(lang, dictionary);
    }

    pub fn get(&self, lang: &str) -> Option<&EffectiveDictionary> {
        self.dictionaries.get(lang).map(Arc::as_ref)
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.dictionaries.contains_key(lang)
    }

    /// Built language tags, sorted.
    pub fn languages(&self) -> Vec<&LanguageTag> {
        let mut languages: Vec<_> = self.dictionaries.keys().collect();
        languages.sort();
        languages
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

/// The built translation system for a site.
#[derive(Debug, Clone)]
pub struct TranslationSystem {
    default_lang: LanguageTag,
    translations: Arc<TranslationMap>,
}

impl TranslationSystem {
    /// Build the dictionaries of the default language and every configured
    /// locale.
    ///
    /// `config` is `None` when the site has no i18n configuration at all; the
    /// built-in default locale (`en`) is used then.
    ///
    /// # Errors
    /// Returns `TranslationError::Configuration` when a configuration is given
    /// without a default locale.
    pub fn build(config: Option<&SiteI18nConfig>, sources: &TranslationSources) -> Result<Self> {
        let fallback;
        let config = match config {
            Some(config) => config,
            None => {
                fallback = SiteI18nConfig::default();
                &fallback
            }
        };

        if config.default_locale.is_none() {
            return Err(TranslationError::Configuration(
                "`defaultLocale` is missing".to_string(),
            ));
        }

        let registry = LocaleRegistry::get();
        let default_lang = registry.default_lang(config);

        let mut translations = TranslationMap::default();
        let default_dictionary = sources.build_dictionary(&default_lang, true);
        debug!(
            "Built default language '{}' with {} keys",
            default_lang,
            default_dictionary.len()
        );
        translations.insert(default_lang.clone(), Arc::new(default_dictionary));

        // Locales rebuild with single built-in layering, replacing the
        // default language's dictionary when one resolves to it.
        let mut built_for_locales = HashSet::new();
        for locale in config.locales.keys() {
            let lang = registry.resolve_lang(Some(locale), config);
            if !built_for_locales.insert(lang.clone()) {
                debug!("Locale '{}' shares the '{}' dictionary", locale, lang);
                continue;
            }

            let dictionary = sources.build_dictionary(&lang, false);
            debug!(
                "Built locale '{}' as '{}' with {} keys",
                locale,
                lang,
                dictionary.len()
            );
            translations.insert(lang, Arc::new(dictionary));
        }

        info!(
            "Translation system ready: {} languages, default '{}'",
            translations.len(),
            default_lang
        );

        Ok(Self {
            default_lang,
            translations: Arc::new(translations),
        })
    }

    /// Build from the built-in tables, a directory of user dictionary files
    /// and plugin dictionaries.
    ///
    /// A missing directory means the site has no user dictionaries.
    pub async fn from_fs(
        config: Option<&SiteI18nConfig>,
        content_dir: &Path,
        plugin: DictionarySet,
    ) -> Result<Self> {
        let user = match loader::load_user_translations(content_dir).await? {
            SourceState::Loaded(user) => user,
            SourceState::Absent => DictionarySet::new(),
        };

        let sources = TranslationSources::new(builtin_dictionaries()?)
            .with_plugin(plugin)
            .with_user(user);
        Self::build(config, &sources)
    }

    /// The default language tag.
    pub fn default_lang(&self) -> &LanguageTag {
        &self.default_lang
    }

    /// The built translation map.
    pub fn translations(&self) -> &TranslationMap {
        &self.translations
    }

    /// Create a translator for a language (the default language when `None`).
    pub fn translator_for(&self, lang: Option<&str>) -> Translator {
        let lang = lang
            .map(LanguageTag::new)
            .unwrap_or_else(|| self.default_lang.clone());
        Translator::new(
            lang,
            self.default_lang.clone(),
            Arc::clone(&self.translations),
        )
    }

    /// Check every non-default language against the default language.
    ///
    /// Only languages with findings are returned, sorted by tag.
    pub fn validate(&self) -> Vec<(LanguageTag, ValidationReport)> {
        let Some(reference) = self.translations.get(self.default_lang.as_str()) else {
            return Vec::new();
        };

        self.translations
            .languages()
            .into_iter()
            .filter(|lang| **lang != self.default_lang)
            .filter_map(|lang| {
                let dictionary = self.translations.get(lang.as_str())?;
                let report = DictionaryValidator::validate(reference, dictionary);
                (!report.is_clean()).then(|| (lang.clone(), report))
            })
            .collect()
    }
}
