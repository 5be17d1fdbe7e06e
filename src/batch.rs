//! Batch analysis of a directory of text files.
//!
//! Each file is independent, so files are analyzed in parallel. Unreadable
//! or too-short files are counted and reported, never fatal.

use crate::analysis::Analyzer;
use crate::oracle::LanguageOracle;
use crate::report::group_digits;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extensions scanned when the caller does not override them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "log", "json"];

/// Files with fewer trimmed characters than this carry too little signal.
const MIN_CHARS: usize = 10;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("no files with extensions [{extensions}] under {dir}")]
    NoFiles { dir: PathBuf, extensions: String },
}

/// Per-file detection result.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub path: PathBuf,
    pub language: String,
    pub code: String,
    pub size_bytes: u64,
    pub chars: u64,
    pub words: u64,
    pub sentences: u64,
}

/// Aggregate outcome of one batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
    pub undetected: usize,
    pub skipped: usize,
    pub unreadable: usize,
}

impl BatchSummary {
    pub fn total_words(&self) -> u64 {
        self.reports.iter().map(|r| r.words).sum()
    }

    pub fn total_chars(&self) -> u64 {
        self.reports.iter().map(|r| r.chars).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.reports.iter().map(|r| r.size_bytes).sum()
    }

    /// Language display names with file counts, most common first. Ties
    /// resolve alphabetically so the summary is deterministic.
    pub fn language_distribution(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for report in &self.reports {
            *counts.entry(report.language.as_str()).or_default() += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(lang, count)| (lang.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

enum Outcome {
    Report(Box<FileReport>),
    Undetected,
    Skipped,
    Unreadable,
}

pub struct BatchProcessor<'a> {
    oracle: &'a (dyn LanguageOracle + Sync),
    extensions: Vec<String>,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(oracle: &'a (dyn LanguageOracle + Sync)) -> Self {
        Self {
            oracle,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        if !extensions.is_empty() {
            self.extensions = extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect();
        }
        self
    }

    /// Walk `dir` recursively and analyze every matching file.
    pub fn process(&self, dir: &Path) -> Result<BatchSummary, BatchError> {
        if !dir.is_dir() {
            return Err(BatchError::MissingDirectory(dir.to_path_buf()));
        }

        let files = self.collect_files(dir);
        if files.is_empty() {
            return Err(BatchError::NoFiles {
                dir: dir.to_path_buf(),
                extensions: self.extensions.join(", "),
            });
        }
        info!("Found {} files to process", files.len());

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("valid progress template")
                .progress_chars("█▓░"),
        );

        let outcomes: Vec<Outcome> = files
            .par_iter()
            .map(|path| {
                let outcome = self.process_file(path);
                progress.inc(1);
                outcome
            })
            .collect();
        progress.finish_and_clear();

        let mut summary = BatchSummary::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Report(report) => summary.reports.push(*report),
                Outcome::Undetected => summary.undetected += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Unreadable => summary.unreadable += 1,
            }
        }
        Ok(summary)
    }

    fn collect_files(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| self.extensions.iter().any(|wanted| wanted == &e.to_lowercase()))
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect()
    }

    fn process_file(&self, path: &Path) -> Outcome {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                return Outcome::Unreadable;
            }
        };
        // Lossy decode keeps the batch moving on mixed encodings.
        let text = String::from_utf8_lossy(&bytes).into_owned();

        if text.trim().chars().count() < MIN_CHARS {
            debug!("{} too short, skipping", path.display());
            return Outcome::Skipped;
        }

        let analysis = Analyzer::new(self.oracle).analyze(&text);
        let Some(language) = analysis.language else {
            debug!("{}: no detection", path.display());
            return Outcome::Undetected;
        };

        Outcome::Report(Box::new(FileReport {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            language: language.name,
            code: language.code,
            size_bytes: bytes.len() as u64,
            chars: analysis.statistics.total_chars,
            words: analysis.statistics.total_words,
            sentences: analysis.statistics.total_sentences,
        }))
    }
}

/// Render the batch summary: distribution bars, per-file table, totals.
pub fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();

    out.push_str("Language Distribution:\n");
    let total_files = summary.reports.len();
    for (language, count) in summary.language_distribution() {
        let percentage = count as f64 / total_files as f64 * 100.0;
        let bar = "█".repeat((percentage / 2.0) as usize);
        out.push_str(&format!(
            "{:<20} {} {} files ({:.1}%)\n",
            language, bar, count, percentage
        ));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["File", "Language", "Words", "Chars", "Bytes"]);
    for report in &summary.reports {
        table.add_row(vec![
            Cell::new(&report.file),
            Cell::new(format!("{} ({})", report.language, report.code)),
            Cell::new(group_digits(report.words)),
            Cell::new(group_digits(report.chars)),
            Cell::new(group_digits(report.size_bytes)),
        ]);
    }
    out.push('\n');
    out.push_str(&table.to_string());
    out.push('\n');

    out.push_str(&format!(
        "\nTotal Files Processed: {}\nTotal Words: {}\nTotal Characters: {}\nTotal Size: {} bytes\n",
        group_digits(total_files as u64),
        group_digits(summary.total_words()),
        group_digits(summary.total_chars()),
        group_digits(summary.total_bytes()),
    ));
    if summary.skipped + summary.undetected > 0 {
        out.push_str(&format!(
            "Skipped: {} too short, {} undetected\n",
            summary.skipped, summary.undetected
        ));
    }
    out
}
