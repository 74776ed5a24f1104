use serde::{Deserialize, Serialize};

use crate::screening::classifier::FitLabel;
use crate::screening::pipeline::ScreeningResult;

/// Request body for JSON-based screening (`POST /analyze`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// Response payload shared by `/analyze`, `/upload` and `screen --json`.
/// Keyword lists are sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenResponse {
    pub score: f64,
    pub fit: FitLabel,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl From<ScreeningResult> for ScreenResponse {
    fn from(result: ScreeningResult) -> Self {
        // BTreeSet iteration is already sorted
        ScreenResponse {
            score: result.score,
            fit: result.fit,
            matched_keywords: result.matched.into_iter().collect(),
            missing_keywords: result.missing.into_iter().collect(),
        }
    }
}
