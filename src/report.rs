//! Renders an [`Analysis`](crate::analysis::Analysis) into the
//! multi-section terminal report.

use crate::analysis::Analysis;
use crate::resolver::language_name;
use colored::Colorize;

const RULE_WIDTH: usize = 70;

/// Composes deterministic text reports. Color is an explicit constructor
/// argument, not ambient console state.
pub struct ReportComposer {
    color: bool,
}

impl ReportComposer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Full multi-section report. When the oracle produced no guesses the
    /// report is a single "unable to detect" line and nothing else.
    pub fn compose(&self, analysis: &Analysis) -> String {
        let Some(language) = &analysis.language else {
            return self.red("✗ Unable to detect language");
        };

        let mut lines: Vec<String> = Vec::new();

        lines.push(self.cyan(&"=".repeat(RULE_WIDTH)));
        lines.push(self.yellow("LANGUAGE ANALYSIS REPORT"));
        lines.push(self.cyan(&"=".repeat(RULE_WIDTH)));
        lines.push(String::new());

        lines.push(format!(
            "{} {}",
            self.green("Primary Language:"),
            self.magenta(&format!("{} ({})", language.name, language.code))
        ));
        lines.push(format!(
            "{} {}",
            self.green("Confidence:"),
            self.yellow(&format!("{:.2}%", language.confidence * 100.0))
        ));
        lines.push(String::new());

        if let Some(region) = &analysis.region {
            lines.push(format!(
                "{} {}",
                self.green("Primary Region:"),
                self.cyan(&format!("{} ({})", region.name, region.code))
            ));
            lines.push(String::new());
        }

        lines.push(format!(
            "{} {}",
            self.green("Writing Script:"),
            self.cyan(analysis.script.name())
        ));
        lines.push(String::new());

        if analysis.multilingual {
            lines.push(self.yellow("⚠ Multilingual text detected!"));
            lines.push(self.cyan("All detected languages:"));
            for guess in analysis.guesses.iter().take(5) {
                lines.push(format!(
                    "  • {} ({}): {:.2}%",
                    language_name(&guess.code),
                    guess.code,
                    guess.probability * 100.0
                ));
            }
            lines.push(String::new());
        }

        let stats = &analysis.statistics;
        lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
        lines.push(self.yellow("TEXT STATISTICS"));
        lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
        lines.push(self.stat_line("Total Characters", &group_digits(stats.total_chars)));
        lines.push(self.stat_line("Total Words", &group_digits(stats.total_words)));
        lines.push(self.stat_line("Total Sentences", &group_digits(stats.total_sentences)));
        lines.push(self.stat_line("Unique Words", &group_digits(stats.unique_words)));
        lines.push(self.stat_line(
            "Average Word Length",
            &format!("{:.2} chars", stats.avg_word_length),
        ));
        lines.push(format!(
            "{} {} | {} {} | {} {}",
            self.white("Alphabetic:"),
            self.green(&group_digits(stats.alphabetic_chars)),
            self.white("Numeric:"),
            self.green(&group_digits(stats.numeric_chars)),
            self.white("Special:"),
            self.green(&group_digits(stats.special_chars)),
        ));
        lines.push(String::new());

        if !analysis.character_frequency.is_empty() {
            lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
            lines.push(self.yellow(&format!("TOP {} CHARACTERS", analysis.character_frequency.len())));
            lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
            for (c, count) in &analysis.character_frequency {
                let percentage = if stats.alphabetic_chars > 0 {
                    *count as f64 / stats.alphabetic_chars as f64 * 100.0
                } else {
                    0.0
                };
                let bar = "█".repeat(percentage as usize);
                lines.push(format!(
                    "{} {}",
                    self.magenta(&format!("'{}':", c)),
                    self.green(&format!("{} {} ({:.1}%)", bar, group_digits(*count), percentage))
                ));
            }
            lines.push(String::new());
        }

        if !analysis.word_frequency.is_empty() {
            lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
            lines.push(self.yellow(&format!("TOP {} WORDS", analysis.word_frequency.len())));
            lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
            for (word, count) in &analysis.word_frequency {
                let percentage = if stats.total_words > 0 {
                    *count as f64 / stats.total_words as f64 * 100.0
                } else {
                    0.0
                };
                lines.push(format!(
                    "{} {}",
                    self.cyan(&format!("{:<15}", word)),
                    self.green(&format!(
                        "{} occurrences ({:.1}%)",
                        group_digits(*count),
                        percentage
                    ))
                ));
            }
            lines.push(String::new());
        }

        lines.push(self.cyan(&"=".repeat(RULE_WIDTH)));
        lines.join("\n")
    }

    /// One-screen summary: detected language, confidence, and alternatives
    /// when the text looks multilingual.
    pub fn quick_summary(&self, text: &str, analysis: &Analysis) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
        lines.push(format!(
            "{} {}",
            self.yellow("Text:"),
            self.white(&preview(text, 100))
        ));
        lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));

        let Some(language) = &analysis.language else {
            lines.push(self.red("✗ Unable to detect language"));
            return lines.join("\n");
        };

        lines.push(format!(
            "{} {}",
            self.green("✓ Language:"),
            self.magenta(&format!("{} ({})", language.name, language.code))
        ));
        lines.push(format!(
            "{} {}",
            self.green("✓ Confidence:"),
            self.yellow(&format!("{:.2}%", language.confidence * 100.0))
        ));

        if analysis.multilingual {
            lines.push(self.yellow("⚠ Multilingual content detected!"));
            lines.push(self.cyan("Other languages found:"));
            for guess in analysis.guesses.iter().skip(1).take(3) {
                lines.push(format!(
                    "  • {} ({}): {:.2}%",
                    language_name(&guess.code),
                    guess.code,
                    guess.probability * 100.0
                ));
            }
        }

        lines.push(self.cyan(&"─".repeat(RULE_WIDTH)));
        lines.join("\n")
    }

    fn stat_line(&self, label: &str, value: &str) -> String {
        format!("{} {}", self.white(&format!("{}:", label)), self.green(value))
    }

    fn cyan(&self, s: &str) -> String {
        if self.color { s.cyan().to_string() } else { s.to_string() }
    }

    fn green(&self, s: &str) -> String {
        if self.color { s.green().to_string() } else { s.to_string() }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color { s.yellow().to_string() } else { s.to_string() }
    }

    fn magenta(&self, s: &str) -> String {
        if self.color { s.magenta().to_string() } else { s.to_string() }
    }

    fn red(&self, s: &str) -> String {
        if self.color { s.red().to_string() } else { s.to_string() }
    }

    fn white(&self, s: &str) -> String {
        if self.color { s.white().to_string() } else { s.to_string() }
    }
}

/// Thousands separator, e.g. 1234567 -> "1,234,567".
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First `max_chars` characters with an ellipsis when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::oracle::testing::CannedOracle;

    fn plain() -> ReportComposer {
        ReportComposer::new(false)
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn test_undetectable_report_is_single_message() {
        let oracle = CannedOracle::undetectable();
        let analysis = Analyzer::new(&oracle).analyze("1234 5678");
        let report = plain().compose(&analysis);
        assert!(report.contains("Unable to detect language"));
        assert!(!report.contains("TEXT STATISTICS"));
        assert!(!report.contains("TOP"));
    }

    #[test]
    fn test_full_report_has_all_sections() {
        let oracle = CannedOracle::new(vec![("en", 0.95), ("fr", 0.03)]);
        let analysis = Analyzer::new(&oracle).analyze("Hello world. Hello again, world!");
        let report = plain().compose(&analysis);

        assert!(report.contains("LANGUAGE ANALYSIS REPORT"));
        assert!(report.contains("Primary Language: English (en)"));
        assert!(report.contains("Confidence: 95.00%"));
        assert!(report.contains("Primary Region: United States (US)"));
        assert!(report.contains("Writing Script: Latin"));
        assert!(report.contains("TEXT STATISTICS"));
        assert!(report.contains("Total Words: 5"));
        assert!(report.contains("CHARACTERS"));
        assert!(report.contains("WORDS"));
        // Not flagged multilingual at 3%.
        assert!(!report.contains("Multilingual"));
    }

    #[test]
    fn test_multilingual_section_lists_alternatives() {
        let oracle = CannedOracle::new(vec![("en", 0.6), ("fr", 0.4)]);
        let analysis = Analyzer::new(&oracle).analyze("Hello bonjour world monde");
        let report = plain().compose(&analysis);
        assert!(report.contains("Multilingual text detected"));
        assert!(report.contains("French (fr): 40.00%"));
    }

    #[test]
    fn test_plain_mode_has_no_ansi_escapes() {
        let oracle = CannedOracle::new(vec![("en", 0.9)]);
        let analysis = Analyzer::new(&oracle).analyze("Hello world");
        let report = plain().compose(&analysis);
        assert!(!report.contains('\u{1b}'));
        let summary = plain().quick_summary("Hello world", &analysis);
        assert!(!summary.contains('\u{1b}'));
    }

    #[test]
    fn test_quick_summary_truncates_long_text() {
        let oracle = CannedOracle::new(vec![("en", 0.9)]);
        let text = "word ".repeat(50);
        let analysis = Analyzer::new(&oracle).analyze(&text);
        let summary = plain().quick_summary(&text, &analysis);
        assert!(summary.contains("..."));
        assert!(summary.contains("Language: English (en)"));
    }

    #[test]
    fn test_reports_are_deterministic() {
        let oracle = CannedOracle::new(vec![("en", 0.9)]);
        let analysis = Analyzer::new(&oracle).analyze("the cat sat on the mat");
        assert_eq!(plain().compose(&analysis), plain().compose(&analysis));
    }
}
