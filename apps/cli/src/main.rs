use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use screener_api::config::Config;
use screener_api::models::screening::ScreenResponse;
use screener_api::screening::intake::{decode_lenient, require_resume_text};
use screener_api::screening::{Screener, ScreeningResult};

/// Screen a resume against a job description by keyword overlap.
#[derive(Parser, Debug)]
#[command(name = "screen", version, about)]
struct Cli {
    /// Resume text file
    #[arg(long, default_value = "data/sample_resume.txt")]
    resume: PathBuf,

    /// Job description text file
    #[arg(long, default_value = "data/sample_job_description.txt")]
    job: PathBuf,

    /// Print the same JSON object the HTTP API returns
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let resume_text = load_text(&cli.resume)?;
    require_resume_text(&resume_text)
        .with_context(|| format!("resume file {} has no text", cli.resume.display()))?;
    let job_text = load_text(&cli.job)?;

    let result = build_screener()?.screen(&resume_text, &job_text);
    info!(score = result.score, fit = %result.fit, "screening complete");

    if cli.json {
        let response = ScreenResponse::from(result);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}

/// Same stop words as the server, including `EXTRA_STOP_WORDS`.
fn build_screener() -> Result<Screener> {
    let config = Config::from_env().context("invalid configuration")?;
    Ok(screener_for(&config))
}

fn screener_for(config: &Config) -> Screener {
    Screener::new(config.stop_words())
}

/// Reads a file and decodes it leniently, like the upload endpoint does.
fn load_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded input file");
    Ok(decode_lenient(&bytes))
}

fn render_report(result: &ScreeningResult) -> String {
    let list = |words: &std::collections::BTreeSet<String>| {
        let quoted: Vec<String> = words.iter().map(|w| format!("'{w}'")).collect();
        format!("[{}]", quoted.join(", "))
    };

    format!(
        "\nResume Screening Result\n\
         ----------------------------\n\
         Match Score: {:?}%\n\
         Fit Category: {}\n\
         Matched Keywords: {}\n\
         Missing Keywords: {}\n",
        result.score,
        result.fit,
        list(&result.matched),
        list(&result.missing),
    )
}
