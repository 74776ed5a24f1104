//! Screening pipeline: normalize both texts, score keyword overlap, classify the score.
//!
//! Framework-agnostic. Used by the HTTP handlers and by the `screen` CLI.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::screening::classifier::{classify_fit, FitLabel};
use crate::screening::normalizer::preprocess_text;
use crate::screening::scorer::calculate_score;
use crate::screening::stopwords::StopWords;

/// Result of one screening invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningResult {
    pub score: f64,
    pub fit: FitLabel,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

/// Runs the full pipeline over raw resume and job description text.
pub fn screen_resume(resume_text: &str, job_text: &str, stop_words: &StopWords) -> ScreeningResult {
    let resume_tokens = preprocess_text(resume_text, stop_words);
    let job_tokens = preprocess_text(job_text, stop_words);

    let keyword_score = calculate_score(&resume_tokens, &job_tokens);
    let fit = classify_fit(keyword_score.score);

    debug!(
        resume_tokens = resume_tokens.len(),
        job_tokens = job_tokens.len(),
        matched = keyword_score.matched.len(),
        missing = keyword_score.missing.len(),
        score = keyword_score.score,
        "screened resume"
    );

    ScreeningResult {
        score: keyword_score.score,
        fit,
        matched: keyword_score.matched,
        missing: keyword_score.missing,
    }
}

/// Holds the process-wide stop-word set so adapters can share one instance.
#[derive(Debug, Clone)]
pub struct Screener {
    stop_words: Arc<StopWords>,
}

impl Screener {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words: Arc::new(stop_words),
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn screen(&self, resume_text: &str, job_text: &str) -> ScreeningResult {
        screen_resume(resume_text, job_text, &self.stop_words)
    }
}

impl Default for Screener {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}
