//! Dictionary loaders.
//!
//! These read user and plugin dictionaries from disk. A source that does not
//! exist is reported as `SourceState::Absent`, which callers treat as "no
//! dictionaries". Any other I/O failure or malformed file is an error.
//!
//! Two layouts are supported for user dictionaries:
//!
//! - a flat directory (`load_user_translations`): `<dir>/<lang>.{json,yaml,yml}`
//! - a content collection (`load_collection`): any file below the collection
//!   root, keyed by its relative path without extension; files whose name
//!   starts with `_` are skipped

use crate::error::{Result, TranslationError};
use crate::i18n::{DictionarySet, LanguageTag, RawDictionary};
use futures::future::try_join_all;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// File extensions recognised as dictionaries.
pub const DICTIONARY_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Outcome of reading an optional source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceState<T> {
    /// The source does not exist
    Absent,
    /// The source exists and was read
    Loaded(T),
}

impl<T: Default> SourceState<T> {
    /// The loaded value, or the empty default when absent.
    pub fn unwrap_or_default(self) -> T {
        match self {
            SourceState::Absent => T::default(),
            SourceState::Loaded(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DictionaryFormat {
    Json,
    Yaml,
}

impl DictionaryFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse the contents of a dictionary file.
///
/// The format is chosen from the file extension.
pub fn parse_dictionary(path: &Path, content: &str) -> Result<RawDictionary> {
    let format = DictionaryFormat::from_path(path).ok_or_else(|| TranslationError::Parse {
        path: path.to_path_buf(),
        message: format!(
            "unsupported extension (expected one of: {})",
            DICTIONARY_EXTENSIONS.join(", ")
        ),
    })?;

    if content.trim().is_empty() {
        return Ok(RawDictionary::new());
    }

    let parsed: std::result::Result<RawDictionary, String> = match format {
        DictionaryFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DictionaryFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| TranslationError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

async fn read_dictionary(path: PathBuf) -> Result<RawDictionary> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| TranslationError::SourceRead {
            path: path.clone(),
            source,
        })?;
    let dictionary = parse_dictionary(&path, &content)?;
    debug!("Loaded {} keys from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// List a directory, distinguishing "does not exist" from other failures.
async fn read_dir_entries(dir: &Path) -> Result<SourceState<Vec<(PathBuf, bool)>>> {
    let mut read_dir = match tokio::fs::read_dir(dir).await {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SourceState::Absent),
        Err(source) => {
            return Err(TranslationError::SourceRead {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let to_error = |source: io::Error| TranslationError::SourceRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await.map_err(to_error)? {
        let is_dir = entry.file_type().await.map_err(to_error)?.is_dir();
        entries.push((entry.path(), is_dir));
    }
    entries.sort();

    Ok(SourceState::Loaded(entries))
}

async fn read_all(files: Vec<(LanguageTag, PathBuf)>) -> Result<DictionarySet> {
    let loads = files.into_iter().map(|(lang, path)| async move {
        let dictionary = read_dictionary(path).await?;
        Ok::<_, TranslationError>((lang, dictionary))
    });

    Ok(try_join_all(loads).await?.into_iter().collect())
}

/// Load user dictionaries from a flat directory, keyed by file stem.
///
/// Files with other extensions and sub-directories are ignored.
pub async fn load_user_translations(dir: &Path) -> Result<SourceState<DictionarySet>> {
    let entries = match read_dir_entries(dir).await? {
        SourceState::Absent => {
            debug!("No user translations at {}", dir.display());
            return Ok(SourceState::Absent);
        }
        SourceState::Loaded(entries) => entries,
    };

    let files: Vec<_> = entries
        .into_iter()
        .filter(|(path, is_dir)| !is_dir && DictionaryFormat::from_path(path).is_some())
        .filter_map(|(path, _)| {
            let stem = path.file_stem()?.to_str()?.to_string();
            Some((LanguageTag::new(stem), path))
        })
        .collect();

    let set = read_all(files).await?;
    info!(
        "Loaded {} user dictionaries from {}",
        set.len(),
        dir.display()
    );
    Ok(SourceState::Loaded(set))
}

/// Derive a collection entry id from a file path: relative to the collection
/// root, without extension, `/`-separated.
pub fn collection_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    (!parts.is_empty()).then(|| parts.join("/"))
}

fn is_collection_entry(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(true, |name| name.starts_with('_'));
    !hidden && DictionaryFormat::from_path(path).is_some()
}

/// Load user dictionaries from a content collection directory.
pub async fn load_collection(root: &Path) -> Result<SourceState<DictionarySet>> {
    let mut pending = match read_dir_entries(root).await? {
        SourceState::Absent => {
            debug!("No i18n collection at {}", root.display());
            return Ok(SourceState::Absent);
        }
        SourceState::Loaded(entries) => entries,
    };

    let mut files = Vec::new();
    while let Some((path, is_dir)) = pending.pop() {
        if is_dir {
            // Directories removed mid-walk are skipped.
            if let SourceState::Loaded(children) = read_dir_entries(&path).await? {
                pending.extend(children);
            }
            continue;
        }

        if !is_collection_entry(&path) {
            continue;
        }
        if let Some(id) = collection_id(root, &path) {
            files.push((LanguageTag::new(id), path));
        }
    }
    files.sort();

    let set = read_all(files).await?;
    info!(
        "Loaded {} collection entries from {}",
        set.len(),
        root.display()
    );
    Ok(SourceState::Loaded(set))
}

/// Load plugin dictionaries from a JSON file mapping language tags to
/// dictionaries.
pub async fn load_plugin_translations(path: &Path) -> Result<DictionarySet> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TranslationError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

    let set: HashMap<LanguageTag, RawDictionary> =
        serde_json::from_str(&content).map_err(|e| TranslationError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        "Loaded plugin translations for {} languages from {}",
        set.len(),
        path.display()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // ==================== parse_dictionary Tests ====================

    #[test]
    fn test_parse_dictionary_json() {
        let dict = parse_dictionary(Path::new("en.json"), r#"{ "a": "1", "b": null }"#).unwrap();
        assert_eq!(dict.get("a"), Some(Some("1")));
        assert_eq!(dict.get("b"), Some(None));
    }

    #[test]
    fn test_parse_dictionary_yaml() {
        let dict = parse_dictionary(
            Path::new("fr.yml"),
            "search.label: Rechercher\nskipLink.label: \"Aller au contenu\"\n",
        )
        .unwrap();
        assert_eq!(dict.get("search.label"), Some(Some("Rechercher")));
        assert_eq!(dict.get("skipLink.label"), Some(Some("Aller au contenu")));
    }

    #[test]
    fn test_parse_dictionary_yaml_null_value() {
        let dict = parse_dictionary(Path::new("fr.yaml"), "a: ~\nb: ''\n").unwrap();
        assert_eq!(dict.get("a"), Some(None));
        assert_eq!(dict.get("b"), Some(Some("")));
    }

    #[test]
    fn test_parse_dictionary_empty_file() {
        let dict = parse_dictionary(Path::new("de.yaml"), "  \n").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_parse_dictionary_malformed_json() {
        let result = parse_dictionary(Path::new("en.json"), "{ nope");
        assert!(matches!(result, Err(TranslationError::Parse { .. })));
    }

    #[test]
    fn test_parse_dictionary_unsupported_extension() {
        let result = parse_dictionary(Path::new("en.toml"), "a = 1");
        assert!(matches!(result, Err(TranslationError::Parse { .. })));
    }

    // ==================== collection_id Tests ====================

    #[test]
    fn test_collection_id_top_level() {
        let root = Path::new("/site/src/content/i18n");
        assert_eq!(
            collection_id(root, &root.join("fr.json")).as_deref(),
            Some("fr")
        );
    }

    #[test]
    fn test_collection_id_nested() {
        let root = Path::new("/site/src/content/i18n");
        assert_eq!(
            collection_id(root, &root.join("pt").join("BR.yml")).as_deref(),
            Some("pt/BR")
        );
    }

    #[test]
    fn test_collection_id_outside_root() {
        let root = Path::new("/site/src/content/i18n");
        assert_eq!(collection_id(root, Path::new("/elsewhere/fr.json")), None);
    }

    // ==================== load_user_translations Tests ====================

    #[tokio::test]
    async fn test_load_user_translations_missing_dir_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let state = load_user_translations(&temp_dir.path().join("missing"))
            .await
            .unwrap();
        assert_eq!(state, SourceState::Absent);
    }

    #[tokio::test]
    async fn test_load_user_translations_reads_supported_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), r#"{ "a": "A" }"#).unwrap();
        fs::write(temp_dir.path().join("fr.yaml"), "a: Ah\n").unwrap();
        fs::write(temp_dir.path().join("de.yml"), "a: Aa\n").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let set = load_user_translations(temp_dir.path())
            .await
            .unwrap()
            .unwrap_or_default();

        assert_eq!(set.len(), 3);
        assert_eq!(set["en"].get("a"), Some(Some("A")));
        assert_eq!(set["fr"].get("a"), Some(Some("Ah")));
        assert_eq!(set["de"].get("a"), Some(Some("Aa")));
    }

    #[tokio::test]
    async fn test_load_user_translations_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let state = load_user_translations(temp_dir.path()).await.unwrap();
        assert_eq!(state, SourceState::Loaded(DictionarySet::new()));
    }

    #[tokio::test]
    async fn test_load_user_translations_malformed_file_propagates() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), r#"{ "a": "A" }"#).unwrap();
        fs::write(temp_dir.path().join("fr.yaml"), "a: [unclosed\n").unwrap();

        let result = load_user_translations(temp_dir.path()).await;
        assert!(matches!(result, Err(TranslationError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_user_translations_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("i18n");
        fs::write(&file, "not a directory").unwrap();

        let result = load_user_translations(&file).await;
        assert!(matches!(result, Err(TranslationError::SourceRead { .. })));
    }

    // ==================== load_collection Tests ====================

    #[tokio::test]
    async fn test_load_collection_missing_root_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let state = load_collection(&temp_dir.path().join("i18n")).await.unwrap();
        assert_eq!(state, SourceState::Absent);
    }

    #[tokio::test]
    async fn test_load_collection_nested_and_underscore_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("en.json"), r#"{ "a": "A" }"#).unwrap();
        fs::write(root.join("_draft.json"), r#"{ "a": "draft" }"#).unwrap();
        fs::create_dir_all(root.join("zh")).unwrap();
        fs::write(root.join("zh").join("TW.yaml"), "a: 甲\n").unwrap();
        fs::write(root.join("README.md"), "# docs").unwrap();

        let set = load_collection(root).await.unwrap().unwrap_or_default();

        assert_eq!(set.len(), 2);
        assert!(set.contains_key("en"));
        assert!(set.contains_key("zh/TW"));
        assert!(!set.contains_key("_draft"));
    }

    // ==================== load_plugin_translations Tests ====================

    #[tokio::test]
    async fn test_load_plugin_translations() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugins.json");
        fs::write(
            &path,
            r#"{ "en": { "plugin.label": "Plugin" }, "fr": { "plugin.label": null } }"#,
        )
        .unwrap();

        let set = load_plugin_translations(&path).await.unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set["en"].get("plugin.label"), Some(Some("Plugin")));
        assert_eq!(set["fr"].get("plugin.label"), Some(None));
    }

    #[tokio::test]
    async fn test_load_plugin_translations_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_plugin_translations(&temp_dir.path().join("none.json")).await;
        assert!(matches!(result, Err(TranslationError::SourceRead { .. })));
    }
}
