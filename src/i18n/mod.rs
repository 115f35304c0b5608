//! Internationalization (i18n) module: UI string resolution for a
//! documentation site.
//!
//! All dictionary layering, language metadata and lookup logic lives here.
//!
//! # Architecture
//!
//! - `language`: Language tags and text direction
//! - `registry`: Site locale configuration and language resolution
//! - `dictionary`: Raw (loader output) and effective (layered) dictionaries
//! - `builtin`: Built-in UI tables embedded at compile time
//! - `loader`: User, collection and plugin dictionary loading
//! - `layering`: Built-in / plugin / user merge order
//! - `system`: Builds every configured language once
//! - `translator`: Per-language lookup and interpolation
//! - `validator`: Translation quality validation
//!
//! # Example
//!
//! ```rust,ignore
//! use docsite_i18n::i18n::{LocaleConfig, SiteI18nConfig, TranslationSources, TranslationSystem};
//!
//! let config = SiteI18nConfig::new(LocaleConfig::new("en"))
//!     .with_locale("fr", LocaleConfig::new("fr"));
//! let sources = TranslationSources::new(builtin_dictionaries()?);
//! let system = TranslationSystem::build(Some(&config), &sources)?;
//!
//! let t = system.translator_for(Some("fr"));
//! assert_eq!(t.t("search.label"), "Rechercher");
//! ```

mod builtin;
mod dictionary;
mod language;
mod layering;
pub mod loader;
mod registry;
mod rtl;
mod system;
mod translator;
mod validator;

pub use builtin::{builtin_dictionaries, builtin_languages};
pub use dictionary::{DictionarySet, EffectiveDictionary, RawDictionary};
pub use language::{LanguageTag, TextDirection};
pub use layering::{merge, merge_dictionaries, Layer, Origin, TranslationSources};
pub use loader::SourceState;
pub use registry::{LocaleConfig, LocaleRegistry, SiteI18nConfig, ROOT_LOCALE};
pub use system::{TranslationMap, TranslationSystem};
pub use translator::Translator;
pub use validator::{DictionaryValidator, ValidationReport};
