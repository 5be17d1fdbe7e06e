//! Static language code → display name and primary-region lookup tables.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

lazy_static! {
    /// ISO 639-1 style codes mapped to English display names. The `zh`
    /// entry covers detectors that do not split simplified/traditional.
    static ref LANGUAGE_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("af", "Afrikaans"),
        ("ar", "Arabic"),
        ("bg", "Bulgarian"),
        ("bn", "Bengali"),
        ("ca", "Catalan"),
        ("cs", "Czech"),
        ("cy", "Welsh"),
        ("da", "Danish"),
        ("de", "German"),
        ("el", "Greek"),
        ("en", "English"),
        ("es", "Spanish"),
        ("et", "Estonian"),
        ("fa", "Persian"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("gu", "Gujarati"),
        ("he", "Hebrew"),
        ("hi", "Hindi"),
        ("hr", "Croatian"),
        ("hu", "Hungarian"),
        ("id", "Indonesian"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("kn", "Kannada"),
        ("ko", "Korean"),
        ("lt", "Lithuanian"),
        ("lv", "Latvian"),
        ("mk", "Macedonian"),
        ("ml", "Malayalam"),
        ("mr", "Marathi"),
        ("ne", "Nepali"),
        ("nl", "Dutch"),
        ("no", "Norwegian"),
        ("pa", "Punjabi"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("ro", "Romanian"),
        ("ru", "Russian"),
        ("sk", "Slovak"),
        ("sl", "Slovenian"),
        ("so", "Somali"),
        ("sq", "Albanian"),
        ("sv", "Swedish"),
        ("sw", "Swahili"),
        ("ta", "Tamil"),
        ("te", "Telugu"),
        ("th", "Thai"),
        ("tl", "Tagalog"),
        ("tr", "Turkish"),
        ("uk", "Ukrainian"),
        ("ur", "Urdu"),
        ("vi", "Vietnamese"),
        ("zh", "Chinese"),
        ("zh-cn", "Chinese (Simplified)"),
        ("zh-tw", "Chinese (Traditional)"),
    ]);

    /// Language code mapped to the primary country it is associated with.
    /// Deliberately incomplete; languages without an obvious primary
    /// country have no entry and resolve to nothing.
    static ref LANGUAGE_REGIONS: HashMap<&'static str, (&'static str, &'static str)> =
        HashMap::from([
            ("en", ("United States", "US")),
            ("es", ("Spain", "ES")),
            ("fr", ("France", "FR")),
            ("de", ("Germany", "DE")),
            ("it", ("Italy", "IT")),
            ("pt", ("Portugal", "PT")),
            ("ru", ("Russia", "RU")),
            ("ja", ("Japan", "JP")),
            ("zh", ("China", "CN")),
            ("zh-cn", ("China", "CN")),
            ("ko", ("South Korea", "KR")),
            ("ar", ("Saudi Arabia", "SA")),
            ("hi", ("India", "IN")),
            ("nl", ("Netherlands", "NL")),
            ("sv", ("Sweden", "SE")),
            ("pl", ("Poland", "PL")),
            ("tr", ("Turkey", "TR")),
            ("vi", ("Vietnam", "VN")),
            ("th", ("Thailand", "TH")),
            ("id", ("Indonesia", "ID")),
            ("he", ("Israel", "IL")),
        ]);
}

/// Region groupings for the `languages` listing.
pub const LANGUAGE_GROUPS: &[(&str, &[&str])] = &[
    (
        "European",
        &[
            "en", "es", "fr", "de", "it", "pt", "nl", "sv", "da", "no", "fi", "pl", "cs", "sk",
            "ro", "hu", "hr", "sl", "et", "lv", "lt",
        ],
    ),
    ("Cyrillic", &["ru", "uk", "bg", "mk"]),
    ("Asian", &["ja", "zh-cn", "zh-tw", "ko", "th", "vi", "id"]),
    (
        "Indic",
        &["hi", "bn", "gu", "kn", "ml", "mr", "ne", "pa", "ta", "te", "ur"],
    ),
    ("Middle Eastern", &["ar", "fa", "he", "tr"]),
    ("Other", &["af", "sq", "ca", "cy", "el", "so", "sw", "tl"]),
];

/// Primary country associated with a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionInfo {
    pub name: String,
    pub code: String,
}

/// Display name for a language code. Unmapped codes fall back to the
/// uppercased code; an empty code resolves to "Unknown".
pub fn language_name(code: &str) -> String {
    if code.is_empty() {
        return "Unknown".to_string();
    }
    match LANGUAGE_NAMES.get(code) {
        Some(name) => (*name).to_string(),
        None => code.to_uppercase(),
    }
}

/// Primary region for a language code, when one is configured. Never
/// fabricates a value for unmapped codes.
pub fn region_info(code: &str) -> Option<RegionInfo> {
    LANGUAGE_REGIONS.get(code).map(|(name, code)| RegionInfo {
        name: (*name).to_string(),
        code: (*code).to_string(),
    })
}

/// Number of languages with a configured display name.
pub fn supported_language_count() -> usize {
    LANGUAGE_NAMES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve_to_names() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("zh-cn"), "Chinese (Simplified)");
        assert_eq!(language_name("sw"), "Swahili");
    }

    #[test]
    fn test_unmapped_code_is_uppercased() {
        assert_eq!(language_name("xx"), "XX");
        assert_eq!(language_name("zz-aa"), "ZZ-AA");
    }

    #[test]
    fn test_empty_code_is_unknown() {
        assert_eq!(language_name(""), "Unknown");
    }

    #[test]
    fn test_region_lookup() {
        let region = region_info("ja").unwrap();
        assert_eq!(region.name, "Japan");
        assert_eq!(region.code, "JP");
        // Configured language without a primary country entry.
        assert!(region_info("sw").is_none());
        assert!(region_info("xx").is_none());
    }

    #[test]
    fn test_every_grouped_code_has_a_name() {
        for (_, codes) in LANGUAGE_GROUPS {
            for code in *codes {
                assert!(
                    LANGUAGE_NAMES.contains_key(code),
                    "group references unmapped code {code}"
                );
            }
        }
    }
}
