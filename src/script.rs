//! Dominant writing-script identification from Unicode code-point ranges.

use serde::Serialize;
use std::fmt;

/// Writing systems this classifier can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScriptLabel {
    Latin,
    Cyrillic,
    Arabic,
    Chinese,
    Japanese,
    Korean,
    Devanagari,
    Greek,
    Hebrew,
    Thai,
    Unknown,
}

impl ScriptLabel {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptLabel::Latin => "Latin",
            ScriptLabel::Cyrillic => "Cyrillic",
            ScriptLabel::Arabic => "Arabic",
            ScriptLabel::Chinese => "Chinese",
            ScriptLabel::Japanese => "Japanese",
            ScriptLabel::Korean => "Korean",
            ScriptLabel::Devanagari => "Devanagari",
            ScriptLabel::Greek => "Greek",
            ScriptLabel::Hebrew => "Hebrew",
            ScriptLabel::Thai => "Thai",
            ScriptLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ScriptLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive code-point ranges per script. The table order is the tie-break
/// order, so it must stay fixed.
const SCRIPT_RANGES: [(ScriptLabel, &[(u32, u32)]); 10] = [
    (ScriptLabel::Latin, &[(0x0041, 0x007A), (0x00C0, 0x024F)]),
    (ScriptLabel::Cyrillic, &[(0x0400, 0x04FF)]),
    (ScriptLabel::Arabic, &[(0x0600, 0x06FF)]),
    (ScriptLabel::Chinese, &[(0x4E00, 0x9FFF)]),
    (ScriptLabel::Japanese, &[(0x3040, 0x309F), (0x30A0, 0x30FF)]),
    (ScriptLabel::Korean, &[(0xAC00, 0xD7AF)]),
    (ScriptLabel::Devanagari, &[(0x0900, 0x097F)]),
    (ScriptLabel::Greek, &[(0x0370, 0x03FF)]),
    (ScriptLabel::Hebrew, &[(0x0590, 0x05FF)]),
    (ScriptLabel::Thai, &[(0x0E00, 0x0E7F)]),
];

/// Identify the dominant writing system of `text` by counting characters
/// whose code points fall in the known ranges. Characters outside every
/// range are ignored. Returns `Unknown` when nothing matched.
pub fn classify_script(text: &str) -> ScriptLabel {
    let mut counts = [0u64; SCRIPT_RANGES.len()];

    for c in text.chars() {
        let cp = c as u32;
        for (i, (_, ranges)) in SCRIPT_RANGES.iter().enumerate() {
            if ranges.iter().any(|&(lo, hi)| cp >= lo && cp <= hi) {
                counts[i] += 1;
                break;
            }
        }
    }

    let mut dominant = ScriptLabel::Unknown;
    let mut best = 0u64;
    for (i, (label, _)) in SCRIPT_RANGES.iter().enumerate() {
        if counts[i] > best {
            dominant = *label;
            best = counts[i];
        }
    }
    dominant
}
