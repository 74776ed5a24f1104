//! Keyword scorer: set overlap between resume and job tokens.
//!
//! score = 100 × |resume ∩ job| / |job|, rounded to two decimals, 0 for an empty job set.

use std::collections::BTreeSet;

/// Output of `calculate_score`. `matched ∪ missing` is exactly the job keyword set.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    pub score: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

pub fn calculate_score(resume_tokens: &[String], job_tokens: &[String]) -> KeywordScore {
    let resume_set: BTreeSet<&str> = resume_tokens.iter().map(String::as_str).collect();
    let job_set: BTreeSet<&str> = job_tokens.iter().map(String::as_str).collect();

    let matched: BTreeSet<String> = job_set
        .intersection(&resume_set)
        .map(|s| s.to_string())
        .collect();
    let missing: BTreeSet<String> = job_set
        .difference(&resume_set)
        .map(|s| s.to_string())
        .collect();

    let score = if job_set.is_empty() {
        0.0
    } else {
        round_to_hundredths(matched.len() as f64 / job_set.len() as f64 * 100.0)
    };

    KeywordScore {
        score,
        matched,
        missing,
    }
}

/// Rounds to two decimals, half-to-even on the exact binary value
/// (1/32 → 3.125 → 3.12).
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
