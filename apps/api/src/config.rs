use anyhow::{Context, Result};

use crate::screening::stopwords::StopWords;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Appended to the English stop-word list (`EXTRA_STOP_WORDS`, comma-separated).
    pub extra_stop_words: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            extra_stop_words: Vec::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            extra_stop_words: lookup("EXTRA_STOP_WORDS")
                .map(|v| parse_word_list(&v))
                .unwrap_or_default(),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .trim()
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a non-negative integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    /// English stop words plus `extra_stop_words`. Shared by the server and the CLI.
    pub fn stop_words(&self) -> StopWords {
        let mut stop_words = StopWords::english();
        stop_words.extend(&self.extra_stop_words);
        stop_words
    }
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
