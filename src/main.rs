// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use subform::application::check_upload;
use subform::application::error_handling::ErrorResponse;
use subform::logger::init_logger;
use subform::{AppError, ValidationRules};

#[derive(Parser, Debug)]
#[command(name = "subform", version)]
#[command(about = "Check a subtitle file against the upload form rules")]
struct Args {
    /// Subtitle file to pick
    file: PathBuf,

    /// Value of the seconds field
    #[arg(long, short)]
    seconds: Option<String>,

    /// Rules file (JSON); defaults to the per-user rules file if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of alerts
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            if args.json {
                let response = match err.downcast_ref::<AppError>() {
                    Some(app_error) => ErrorResponse::from_app_error(app_error),
                    None => ErrorResponse::internal(format!("{:#}", err)),
                };
                match serde_json::to_string_pretty(&response) {
                    Ok(json) => println!("{}", json),
                    Err(_) => eprintln!("Error: {:#}", err),
                }
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::from(2)
        }
    }
}

/// Returns whether the form would be submitted
fn run(args: &Args) -> anyhow::Result<bool> {
    let rules = ValidationRules::resolve(args.config.as_deref())
        .context("Failed to load validation rules")?;

    let seconds = args.seconds.as_deref().unwrap_or_default();
    let report = check_upload(&rules, &args.file, seconds, !args.json)
        .with_context(|| format!("Failed to check {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.submitted {
        println!("OK: {} would be submitted", report.file);
    }

    Ok(report.submitted)
}
