//! Language identification behind a narrow oracle interface.
//!
//! The classifier itself lives in the `lingua` crate; this module only
//! adapts its output into ranked `(code, probability)` guesses so the rest
//! of the tool never depends on a specific detector.

use lingua::{LanguageDetector, LanguageDetectorBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One ranked guess from the identification oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageGuess {
    /// Short language code, e.g. "en" or "zh".
    pub code: String,
    /// Probability in [0, 1].
    pub probability: f64,
}

/// External language-identification oracle.
///
/// "No detection" is signalled by `None` / the empty vector, never by a
/// fabricated guess with probability zero.
pub trait LanguageOracle {
    /// Best single language code for `text`, if any.
    fn detect(&self, text: &str) -> Option<String>;

    /// All plausible languages for `text`, sorted descending by probability.
    fn detect_ranked(&self, text: &str) -> Vec<LanguageGuess>;
}

/// Default oracle wrapping the lingua statistical detector.
pub struct LinguaOracle {
    detector: LanguageDetector,
}

impl LinguaOracle {
    pub fn new() -> Self {
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageOracle for LinguaOracle {
    fn detect(&self, text: &str) -> Option<String> {
        self.detect_ranked(text).into_iter().next().map(|g| g.code)
    }

    fn detect_ranked(&self, text: &str) -> Vec<LanguageGuess> {
        // Numeric-only or empty input carries no language signal; report
        // no detection instead of letting the model guess from noise.
        if !text.chars().any(char::is_alphabetic) {
            debug!("no alphabetic content, skipping detection");
            return Vec::new();
        }

        self.detector
            .compute_language_confidence_values(text)
            .into_iter()
            .filter(|(_, confidence)| *confidence > 0.0)
            .map(|(language, confidence)| LanguageGuess {
                code: language.iso_code_639_1().to_string().to_lowercase(),
                probability: confidence,
            })
            .collect()
    }
}
