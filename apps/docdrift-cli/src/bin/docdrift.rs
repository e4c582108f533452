use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use docdrift_cli::{init_tracing, load_config, resolve_arg, EXIT_FAILURE};
use docdrift_engine::DefaultEngine;

/// Score one code file against one documentation file and print the report as JSON.
#[derive(Parser, Debug)]
#[command(name = "docdrift", version, about)]
struct Args {
    /// Source file to check
    #[arg(value_name = "CODE_FILE")]
    code: String,
    /// Documentation describing it
    #[arg(value_name = "DOC_FILE")]
    doc: String,
    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
    /// Directory holding config.toml (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<String>,
}

fn run(args: &Args) -> anyhow::Result<String> {
    let config = load_config(args.config_dir.as_deref()).map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let engine = DefaultEngine::from_config(&config)?;

    let code_path = resolve_arg(&args.code)?;
    let doc_path = resolve_arg(&args.doc)?;
    let code = fs::read(&code_path).with_context(|| format!("Failed to read {}", code_path.display()))?;
    let doc = fs::read(&doc_path).with_context(|| format!("Failed to read {}", doc_path.display()))?;

    let report = engine.analyze_bytes(&code, &doc)?;
    let json = if args.pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    Ok(json)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
