//! Right-to-left language codes.
//!
//! Primary language subtags (lowercase) written right to left. Anything not
//! listed here is treated as left-to-right. Add codes here; nothing else needs
//! to change.

pub(crate) const RTL_LANGUAGES: &[&str] = &[
    // Arabic and its regional varieties
    "ar", "arb", "arq", "ars", "ary", "arz", "aeb", "acm", "acq", "acw", "acx", "acy", "adf",
    "ads", "aec", "afb", "ajp", "apc", "apd", "auz", "avl", "ayh", "ayl", "ayn", "ayp", "pga",
    "shu", "sqr", "ssh", "xaa", "yhd", "abh", "abv", "bbz",
    // Hebrew, Yiddish and Judeo languages
    "he", "iw", "hbo", "yi", "ji", "ydd", "yds", "yih", "yud", "jpr", "aao",
    // Persian and Iranian languages
    "fa", "pes", "prs", "prp", "prd", "peo", "ps", "pbt", "pbu", "pst", "ckb",
    // South Asian and other scripts
    "ur", "ug", "dv", "sd", "men", "xmn", "sam",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_no_duplicates() {
        let unique: HashSet<_> = RTL_LANGUAGES.iter().collect();
        assert_eq!(unique.len(), RTL_LANGUAGES.len());
    }

    #[test]
    fn test_table_is_lowercase() {
        assert!(RTL_LANGUAGES
            .iter()
            .all(|code| code.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_table_contains_core_rtl_languages() {
        for code in ["ar", "he", "fa", "ur"] {
            assert!(RTL_LANGUAGES.contains(&code), "missing {code}");
        }
    }
}
