use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pipeline::{build_profile, recommend, score, JobPosting};

/// Parse a resume text file into a structured profile, optionally scoring
/// it against a job posting's required skills.
///
/// Expects plain text; extract PDF/DOCX bytes upstream.
#[derive(Debug, Parser)]
#[command(name = "pipeline", version)]
struct Args {
    /// Path to a plain-text resume
    resume: PathBuf,

    /// Extra skill terms added to the base vocabulary (comma-separated)
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,

    /// Required skills from the target job posting (comma-separated)
    #[arg(long, value_delimiter = ',')]
    required: Vec<String>,

    /// Target job title; with --company, also prints tailored bullets and
    /// a fallback cover letter
    #[arg(long)]
    title: Option<String>,

    /// Target company
    #[arg(long)]
    company: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.resume)
        .with_context(|| format!("failed to read resume file {}", args.resume.display()))?;

    let profile = build_profile(&raw, &args.skills);
    info!(
        sections = profile.sections.len(),
        skills = profile.skills.len(),
        "parsed resume"
    );
    println!("{}", serde_json::to_string_pretty(&profile)?);

    match (&args.title, &args.company) {
        (Some(title), Some(company)) => {
            let job = JobPosting {
                title: title.clone(),
                company: company.clone(),
                skills: args.required.clone(),
            };
            let tailored = recommend(&raw, profile.contacts.name.as_deref(), &args.skills, &job);
            println!("{}", serde_json::to_string_pretty(&tailored)?);
        }
        _ if !args.required.is_empty() => {
            let report = score(&raw, &args.required);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {}
    }

    Ok(())
}
