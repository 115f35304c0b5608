//! Translation resolution engine for documentation sites.
//!
//! Built-in, plugin and user dictionaries are layered per language once, and
//! per-language translators look strings up with default-language fallback.

pub mod config;
pub mod error;
pub mod i18n;
