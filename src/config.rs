use crate::i18n::SiteI18nConfig;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Which loader reads the user dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderKind {
    /// Top-level dictionary files in a directory, keyed by file stem
    #[default]
    Fs,
    /// A content collection walked recursively, keyed by relative path
    Collection,
}

impl std::str::FromStr for LoaderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fs" => Ok(LoaderKind::Fs),
            "collection" => Ok(LoaderKind::Collection),
            other => bail!("Unknown loader '{}' (expected 'fs' or 'collection')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Site locale configuration
    pub i18n_config_file: Option<PathBuf>,

    // User dictionaries
    pub content_dir: PathBuf,
    pub loader: LoaderKind,

    // Plugin dictionaries
    pub plugin_translations_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            i18n_config_file: optional_path("I18N_CONFIG_FILE"),

            content_dir: std::env::var("I18N_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("src/content/i18n")),
            loader: match std::env::var("I18N_LOADER") {
                Ok(value) => value.parse().context("Invalid I18N_LOADER")?,
                Err(_) => LoaderKind::default(),
            },

            plugin_translations_file: optional_path("PLUGIN_TRANSLATIONS_FILE"),
        })
    }

    /// Read the site locale configuration.
    ///
    /// Returns `None` when no configuration file is set, which means the site
    /// is monolingual in the built-in default language.
    pub fn load_site_config(&self) -> Result<Option<SiteI18nConfig>> {
        let Some(path) = &self.i18n_config_file else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read i18n config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse i18n config {}", path.display()))?;
        Ok(Some(config))
    }
}

fn optional_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
