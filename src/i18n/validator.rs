//! Translation quality validation module.
//!
//! Compares a language's dictionary with the default language's to catch
//! problems that would otherwise only show up in rendered pages: keys the
//! default language does not know, placeholders that differ between the two,
//! and malformed `{{placeholder}}` syntax.

use crate::i18n::translator::placeholders;
use crate::i18n::EffectiveDictionary;
use tracing::debug;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that will render incorrectly
    pub errors: Vec<String>,

    /// Likely mistakes that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated dictionaries.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate a dictionary against the default language's dictionary.
    ///
    /// # Arguments
    /// * `reference` - The default language's dictionary
    /// * `candidate` - The dictionary to check
    pub fn validate(
        reference: &EffectiveDictionary,
        candidate: &EffectiveDictionary,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, value) in candidate.iter() {
            if !Self::has_balanced_braces(value) {
                report
                    .errors
                    .push(format!("Unbalanced placeholder braces in '{}': {:?}", key, value));
            }

            let Some(reference_value) = reference.get(key) else {
                report
                    .warnings
                    .push(format!("Unknown key '{}' (not in default language)", key));
                continue;
            };

            let expected = placeholders(reference_value);
            let actual = placeholders(value);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch in '{}': default has {:?}, translation has {:?}",
                    key, expected, actual
                ));
            }
        }

        if !report.is_clean() {
            debug!(
                "Validation found {} errors and {} warnings",
                report.errors.len(),
                report.warnings.len()
            );
        }
        report
    }

    /// Check that every `{{` is closed by a `}}` before the next `{{`, and
    /// that no `}}` appears outside a placeholder.
    fn has_balanced_braces(value: &str) -> bool {
        let mut rest = value;
        while let Some(open) = rest.find("{{") {
            if rest[..open].contains("}}") {
                return false;
            }
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                return false;
            };
            if after_open[..close].contains("{{") {
                return false;
            }
            rest = &after_open[close + 2..];
        }
        !rest.contains("}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{merge_dictionaries, RawDictionary};

    fn dictionary(entries: &[(&str, &str)]) -> EffectiveDictionary {
        let raw: RawDictionary = entries.iter().copied().collect();
        merge_dictionaries([Some(&raw)])
    }

    // ==================== Brace Tests ====================

    #[test]
    fn test_balanced_braces_plain_text() {
        assert!(DictionaryValidator::has_balanced_braces("No placeholders"));
    }

    #[test]
    fn test_balanced_braces_placeholders() {
        assert!(DictionaryValidator::has_balanced_braces("{{a}} and {{ b }}"));
    }

    #[test]
    fn test_balanced_braces_unclosed() {
        assert!(!DictionaryValidator::has_balanced_braces("Hello {{name"));
    }

    #[test]
    fn test_balanced_braces_nested_open() {
        assert!(!DictionaryValidator::has_balanced_braces("{{a {{b}}"));
    }

    #[test]
    fn test_balanced_braces_stray_close() {
        assert!(!DictionaryValidator::has_balanced_braces("name}} here"));
    }

    #[test]
    fn test_balanced_braces_stray_close_before_placeholder() {
        assert!(!DictionaryValidator::has_balanced_braces("}} {{a}}"));
    }

    #[test]
    fn test_balanced_braces_stray_close_between_placeholders() {
        assert!(!DictionaryValidator::has_balanced_braces("{{a}} }} {{b}}"));
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_matching_dictionary_is_clean() {
        let reference = dictionary(&[("greeting", "Hello {{name}}"), ("search", "Search")]);
        let candidate = dictionary(&[("greeting", "Bonjour {{ name }}")]);

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_unknown_key() {
        let reference = dictionary(&[("search", "Search")]);
        let candidate = dictionary(&[("serach", "Rechercher")]);

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Unknown key 'serach'"));
    }

    #[test]
    fn test_validate_placeholder_mismatch() {
        let reference = dictionary(&[("greeting", "Hello {{name}}")]);
        let candidate = dictionary(&[("greeting", "Hola {{nombre}}")]);

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_validate_missing_placeholder() {
        let reference = dictionary(&[("anchor", "Section titled {{title}}")]);
        let candidate = dictionary(&[("anchor", "Abschnitt")]);

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_validate_unbalanced_braces_is_error() {
        let reference = dictionary(&[("greeting", "Hello {{name}}")]);
        let candidate = dictionary(&[("greeting", "Hola {{name")]);

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Unbalanced"));
    }

    #[test]
    fn test_validate_leading_stray_close_is_error() {
        let reference = dictionary(&[("k", "{{a}}")]);
        let candidate = dictionary(&[("k", "}} {{a}}")]);

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert_eq!(report.errors.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
