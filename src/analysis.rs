//! Analysis pipeline: one text in, one assembled result out.

use crate::oracle::{LanguageGuess, LanguageOracle};
use crate::resolver::{language_name, region_info, RegionInfo};
use crate::script::{classify_script, ScriptLabel};
use crate::stats::{character_frequency, compute_statistics, word_frequency, TextStatistics};
use serde::Serialize;
use tracing::debug;

/// Tunable knobs for a single analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
    /// Frequency tables are truncated to this many entries.
    pub top_k: usize,
    /// Second-ranked probability above which text counts as multilingual.
    pub multilingual_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            multilingual_threshold: 0.15,
        }
    }
}

/// The primary language with its display name and confidence.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedLanguage {
    pub code: String,
    pub name: String,
    pub confidence: f64,
}

/// Everything computed for one piece of text.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Primary detection; `None` when the oracle could not decide.
    pub language: Option<DetectedLanguage>,
    /// Full ranked list from the oracle. Empty means no detection.
    pub guesses: Vec<LanguageGuess>,
    pub region: Option<RegionInfo>,
    pub script: ScriptLabel,
    pub multilingual: bool,
    pub statistics: TextStatistics,
    pub character_frequency: Vec<(char, u64)>,
    pub word_frequency: Vec<(String, u64)>,
}

impl Analysis {
    pub fn detected(&self) -> bool {
        self.language.is_some()
    }
}

/// Coarse multilingual check: true iff the second-ranked guess strictly
/// exceeds `threshold`. This is a heuristic over the oracle's ranking, not
/// a segmentation of the text.
pub fn is_multilingual(guesses: &[LanguageGuess], threshold: f64) -> bool {
    match guesses.get(1) {
        Some(second) => second.probability > threshold,
        None => false,
    }
}

/// Runs the full pipeline against a configured oracle.
pub struct Analyzer<'a> {
    oracle: &'a dyn LanguageOracle,
    config: AnalysisConfig,
}

impl<'a> Analyzer<'a> {
    pub fn new(oracle: &'a dyn LanguageOracle) -> Self {
        Self {
            oracle,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.multilingual_threshold = threshold;
        self
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let guesses = self.oracle.detect_ranked(text);
        debug!(guesses = guesses.len(), "oracle returned ranked guesses");

        let language = guesses.first().map(|top| DetectedLanguage {
            code: top.code.clone(),
            name: language_name(&top.code),
            confidence: top.probability,
        });
        let region = language.as_ref().and_then(|l| region_info(&l.code));
        let multilingual = is_multilingual(&guesses, self.config.multilingual_threshold);

        Analysis {
            language,
            region,
            multilingual,
            script: classify_script(text),
            statistics: compute_statistics(text),
            character_frequency: character_frequency(text, self.config.top_k),
            word_frequency: word_frequency(text, self.config.top_k),
            guesses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::CannedOracle;

    fn guesses(pairs: &[(&str, f64)]) -> Vec<LanguageGuess> {
        pairs
            .iter()
            .map(|(code, probability)| LanguageGuess {
                code: code.to_string(),
                probability: *probability,
            })
            .collect()
    }

    #[test]
    fn test_multilingual_requires_two_guesses() {
        assert!(!is_multilingual(&guesses(&[]), 0.15));
        assert!(!is_multilingual(&guesses(&[("en", 0.9)]), 0.15));
    }

    #[test]
    fn test_multilingual_threshold_is_strict() {
        assert!(is_multilingual(&guesses(&[("en", 0.6), ("fr", 0.3)]), 0.15));
        assert!(!is_multilingual(&guesses(&[("en", 0.8), ("fr", 0.1)]), 0.15));
        // Exactly at the threshold does not count.
        assert!(!is_multilingual(&guesses(&[("en", 0.85), ("fr", 0.15)]), 0.15));
    }

    #[test]
    fn test_analysis_assembles_all_parts() {
        let oracle = CannedOracle::new(vec![("en", 0.92), ("fr", 0.05)]);
        let analysis = Analyzer::new(&oracle).analyze("Hello world. Hello again!");

        let language = analysis.language.as_ref().unwrap();
        assert_eq!(language.code, "en");
        assert_eq!(language.name, "English");
        assert!((language.confidence - 0.92).abs() < 1e-9);
        assert_eq!(analysis.region.as_ref().unwrap().code, "US");
        assert_eq!(analysis.script, crate::script::ScriptLabel::Latin);
        assert!(!analysis.multilingual);
        assert_eq!(analysis.statistics.total_words, 4);
        assert_eq!(analysis.word_frequency[0], ("hello".to_string(), 2));
    }

    #[test]
    fn test_no_detection_leaves_language_and_region_empty() {
        let oracle = CannedOracle::undetectable();
        let analysis = Analyzer::new(&oracle).analyze("12345 67890");
        assert!(!analysis.detected());
        assert!(analysis.guesses.is_empty());
        assert!(analysis.region.is_none());
        // Statistics still computed; the report layer decides what to show.
        assert_eq!(analysis.statistics.total_words, 2);
    }

    #[test]
    fn test_unmapped_code_degrades_to_uppercase() {
        let oracle = CannedOracle::new(vec![("xx", 0.7)]);
        let analysis = Analyzer::new(&oracle).analyze("whatever text");
        assert_eq!(analysis.language.unwrap().name, "XX");
        assert!(analysis.region.is_none());
    }

    #[test]
    fn test_config_knobs_apply() {
        let oracle = CannedOracle::new(vec![("en", 0.55), ("de", 0.4)]);
        let analyzer = Analyzer::new(&oracle).with_top_k(1).with_threshold(0.5);
        let analysis = analyzer.analyze("one two two three three three");
        assert_eq!(analysis.word_frequency, vec![("three".to_string(), 3)]);
        // 0.4 does not exceed the raised threshold.
        assert!(!analysis.multilingual);
    }

    #[test]
    fn test_analysis_serializes_to_json() {
        let oracle = CannedOracle::new(vec![("en", 0.9)]);
        let analysis = Analyzer::new(&oracle).analyze("Hello");
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"code\":\"en\""));
        assert!(json.contains("\"script\":\"Latin\""));
    }
}
