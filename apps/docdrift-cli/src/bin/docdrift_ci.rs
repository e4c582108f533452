use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

use docdrift_cli::summary::render_summary;
use docdrift_cli::{init_tracing, load_config, resolve_arg, EXIT_FAILURE, EXIT_POOR};
use docdrift_core::ingest::{CollectedText, SourceCollector};
use docdrift_core::types::TextKind;
use docdrift_engine::DefaultEngine;

/// Repository gate: compare all code under one directory with all docs under another.
#[derive(Parser, Debug)]
#[command(name = "docdrift-ci", version, about)]
struct Args {
    /// Directory scanned for source files
    #[arg(long, value_name = "DIR", default_value = "src")]
    code_dir: String,
    /// Directory scanned for documentation files
    #[arg(long, value_name = "DIR", default_value = "docs")]
    doc_dir: String,
    /// Print the JSON report instead of the summary
    #[arg(long)]
    json: bool,
    /// Directory holding config.toml (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<String>,
}

enum Outcome {
    NothingToCheck,
    Checked { passed: bool },
}

fn run(args: &Args) -> anyhow::Result<Outcome> {
    let config = load_config(args.config_dir.as_deref()).map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let report_settings = config.report()?;
    let collector = SourceCollector::new(config.ingest()?);
    let engine = DefaultEngine::from_config(&config)?;

    let code_dir = resolve_arg(&args.code_dir)?;
    let code = collect_dir(&collector, &code_dir, TextKind::Code)?;
    if code.is_empty() {
        println!("No code files found under {}; nothing to check.", code_dir.display());
        return Ok(Outcome::NothingToCheck);
    }

    let doc_dir = resolve_arg(&args.doc_dir)?;
    let doc = collect_dir(&collector, &doc_dir, TextKind::Doc)?;
    if doc.is_empty() {
        eprintln!("WARNING: No documentation text found under {}", doc_dir.display());
    }
    info!(code_files = code.files.len(), doc_files = doc.files.len(), "collected sources");

    let (code_files, doc_files) = (code.files.len(), doc.files.len());
    let report = engine.analyze_units(&code.into_unit(), &doc.into_unit())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_summary(&report, code_files, doc_files, report_settings.max_listed_terms));
    }
    Ok(Outcome::Checked { passed: report.verdict.passes() })
}

/// Collect `dir`, treating a missing path or a non-directory as no files.
fn collect_dir(collector: &SourceCollector, dir: &Path, kind: TextKind) -> anyhow::Result<CollectedText> {
    if dir.is_dir() {
        return Ok(collector.collect(dir, kind)?);
    }
    if dir.exists() {
        warn!(%kind, path = %dir.display(), "not a directory");
        eprintln!("WARNING: {kind} path {} is not a directory", dir.display());
    } else {
        warn!(%kind, path = %dir.display(), "directory does not exist");
    }
    Ok(CollectedText::empty(kind))
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(Outcome::NothingToCheck | Outcome::Checked { passed: true }) => ExitCode::SUCCESS,
        Ok(Outcome::Checked { passed: false }) => ExitCode::from(EXIT_POOR),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
