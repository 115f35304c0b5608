//! Built-in UI dictionaries shipped with the crate.
//!
//! Each table is embedded at compile time from `translations/*.json`. English
//! covers every built-in key; the other tables may be partial and rely on the
//! default-language fallback for the rest.

use crate::error::{Result, TranslationError};
use crate::i18n::{DictionarySet, LanguageTag, RawDictionary};
use std::path::PathBuf;
use tracing::debug;

/// Language tag and embedded JSON source for each built-in table.
///
/// Simplified Chinese ships as `zh`, so `zh-CN` reaches it by region stripping.
const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("ar", include_str!("../../translations/ar.json")),
    ("ca", include_str!("../../translations/ca.json")),
    ("cs", include_str!("../../translations/cs.json")),
    ("da", include_str!("../../translations/da.json")),
    ("de", include_str!("../../translations/de.json")),
    ("en", include_str!("../../translations/en.json")),
    ("es", include_str!("../../translations/es.json")),
    ("fa", include_str!("../../translations/fa.json")),
    ("fi", include_str!("../../translations/fi.json")),
    ("fr", include_str!("../../translations/fr.json")),
    ("gl", include_str!("../../translations/gl.json")),
    ("he", include_str!("../../translations/he.json")),
    ("hi", include_str!("../../translations/hi.json")),
    ("hu", include_str!("../../translations/hu.json")),
    ("id", include_str!("../../translations/id.json")),
    ("it", include_str!("../../translations/it.json")),
    ("ja", include_str!("../../translations/ja.json")),
    ("ko", include_str!("../../translations/ko.json")),
    ("lv", include_str!("../../translations/lv.json")),
    ("nb", include_str!("../../translations/nb.json")),
    ("nl", include_str!("../../translations/nl.json")),
    ("pl", include_str!("../../translations/pl.json")),
    ("pt", include_str!("../../translations/pt.json")),
    ("ro", include_str!("../../translations/ro.json")),
    ("ru", include_str!("../../translations/ru.json")),
    ("sk", include_str!("../../translations/sk.json")),
    ("sv", include_str!("../../translations/sv.json")),
    ("tr", include_str!("../../translations/tr.json")),
    ("uk", include_str!("../../translations/uk.json")),
    ("vi", include_str!("../../translations/vi.json")),
    ("zh", include_str!("../../translations/zh-CN.json")),
    ("zh-TW", include_str!("../../translations/zh-TW.json")),
];

/// Tags of every built-in table.
pub fn builtin_languages() -> impl Iterator<Item = &'static str> {
    BUILTIN_TABLES.iter().map(|(tag, _)| *tag)
}

/// Parse all built-in tables.
pub fn builtin_dictionaries() -> Result<DictionarySet> {
    let mut set = DictionarySet::with_capacity(BUILTIN_TABLES.len());

    for (tag, source) in BUILTIN_TABLES {
        let dictionary: RawDictionary =
            serde_json::from_str(source).map_err(|e| TranslationError::Parse {
                path: PathBuf::from(format!("translations/{tag}.json")),
                message: e.to_string(),
            })?;
        set.insert(LanguageTag::new(*tag), dictionary);
    }

    debug!("Parsed {} built-in dictionaries", set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionaries_all_parse() {
        let set = builtin_dictionaries().expect("built-in tables should parse");
        assert_eq!(set.len(), BUILTIN_TABLES.len());
        assert_eq!(set.len(), 32);
    }

    #[test]
    fn test_builtin_languages_include_regional_chinese() {
        let languages: Vec<_> = builtin_languages().collect();
        assert!(languages.contains(&"zh"));
        assert!(languages.contains(&"zh-TW"));
        assert!(!languages.contains(&"zh-CN"));
    }

    #[test]
    fn test_english_covers_every_builtin_key() {
        let set = builtin_dictionaries().unwrap();
        let english = &set["en"];

        for (tag, dictionary) in &set {
            for (key, _) in dictionary.iter() {
                assert!(
                    english.get(key).is_some(),
                    "key `{key}` from `{tag}` is missing in English"
                );
            }
        }
    }

    #[test]
    fn test_builtin_values_are_non_empty() {
        let set = builtin_dictionaries().unwrap();
        for (tag, dictionary) in &set {
            for (key, value) in dictionary.iter() {
                assert!(
                    value.is_some_and(|v| !v.is_empty()),
                    "`{tag}` has an empty value for `{key}`"
                );
            }
        }
    }

    #[test]
    fn test_builtin_english_search_label() {
        let set = builtin_dictionaries().unwrap();
        assert_eq!(set["en"].get("search.label"), Some(Some("Search")));
        assert_eq!(set["fr"].get("search.label"), Some(Some("Rechercher")));
    }
}
