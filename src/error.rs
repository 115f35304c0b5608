use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a translation system.
///
/// Lookup misses are never errors: a translator returns the key itself when
/// nothing resolves.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The site configuration is structurally invalid (e.g. no default locale).
    #[error("Invalid i18n configuration: {0}")]
    Configuration(String),

    /// A dictionary source exists but could not be read.
    #[error("Failed to read translations from {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary file was read but its contents are malformed.
    #[error("Failed to parse translations in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, TranslationError>;
