use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative fit derived from the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FitLabel {
    #[serde(rename = "Poor Fit")]
    PoorFit,
    #[serde(rename = "Average Fit")]
    AverageFit,
    #[serde(rename = "Good Fit")]
    GoodFit,
    #[serde(rename = "Excellent Fit")]
    ExcellentFit,
}

impl FitLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitLabel::ExcellentFit => "Excellent Fit",
            FitLabel::GoodFit => "Good Fit",
            FitLabel::AverageFit => "Average Fit",
            FitLabel::PoorFit => "Poor Fit",
        }
    }
}

impl fmt::Display for FitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a score to a fit label. Thresholds are inclusive lower bounds:
/// ≥80 excellent, ≥60 good, ≥40 average, anything else (including NaN) poor.
pub fn classify_fit(score: f64) -> FitLabel {
    match score {
        s if s >= 80.0 => FitLabel::ExcellentFit,
        s if s >= 60.0 => FitLabel::GoodFit,
        s if s >= 40.0 => FitLabel::AverageFit,
        _ => FitLabel::PoorFit,
    }
}
