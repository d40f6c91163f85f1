//! cnj-check
//!
//! Validates CNJ process numbers from arguments, stdin, or CSV exports.
//! Exit code: 0 when every input is valid, 1 when any is invalid, 2 when any
//! cannot be read as a 20-digit number.

mod commands;
mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cnj_identifiers::ValidationRules;
use tracing_subscriber::EnvFilter;

use commands::Verdict;
use config::CheckConfig;

#[derive(Parser, Debug)]
#[command(name = "cnj-check", version, about)]
struct Cli {
    /// Configuration file (defaults to <config dir>/cnj-check/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also reject years outside 1900-2100 and segments outside 1-9
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate process numbers (reads stdin lines when none are given)
    Check {
        numbers: Vec<String>,

        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
    },
    /// Compute check digits for an 18-digit base and print the formatted number
    Generate { base: String },
    /// Print the components of a process number as JSON
    Inspect { number: String },
    /// Validate a column of a CSV file and write a per-record report
    Batch {
        csv: PathBuf,

        /// Column holding the process numbers
        #[arg(long)]
        column: Option<String>,

        /// Report destination (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<Verdict, Box<dyn std::error::Error>> {
    let config = CheckConfig::resolve(cli.config.as_deref())?;
    let rules = if cli.strict {
        ValidationRules::strict()
    } else {
        config.rules.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let verdict = match cli.command {
        Commands::Check { numbers, json } => {
            let inputs = if numbers.is_empty() {
                commands::read_lines(io::stdin().lock())?
            } else {
                numbers
            };
            commands::check(&mut out, &inputs, &rules, json)?
        }
        Commands::Generate { base } => commands::generate(&mut out, &base)?,
        Commands::Inspect { number } => commands::inspect(&mut out, &number, &rules)?,
        Commands::Batch {
            csv,
            column,
            output,
        } => {
            let column = column.unwrap_or(config.batch.column);
            let mut err = io::stderr();
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)?;
                    commands::batch(file, &mut err, &csv, &column, &rules)?
                }
                None => commands::batch(&mut out, &mut err, &csv, &column, &rules)?,
            }
        }
    };

    out.flush()?;
    Ok(verdict)
}

fn main() -> ExitCode {
    // Logging goes to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(Verdict::Malformed.exit_code())
        }
    }
}
