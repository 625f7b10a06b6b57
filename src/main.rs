//! Topsis Rank CLI
//!
//! Ranks the rows of a delimited table with TOPSIS and writes the table back
//! out with `Topsis Score` and `Rank` columns appended.
//!
//! ```text
//! topsis data.csv "1,1,1,2" "+,+,-,+" result.csv
//! ```
//!
//! Exit code 0 on success, 1 on any failure. Failures print exactly one
//! `Error: <message>` line and never leave an output file behind.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use topsis_rank::adapters::{CsvTableSink, CsvTableSource};
use topsis_rank::application::{RankAlternativesCommand, RankAlternativesHandler};
use topsis_rank::config::{AppConfig, ConfigOverrides, LogLevel};

const USAGE: &str = "Usage: <InputDataFile> <Weights> <Impacts> <OutputResultFile>";

/// Rank alternatives against weighted criteria using TOPSIS
#[derive(Parser)]
#[command(name = "topsis")]
#[command(version)]
#[command(about = "Rank alternatives against weighted criteria using TOPSIS")]
struct Cli {
    /// Input table: identifier column followed by numeric criteria
    input: PathBuf,

    /// Comma-separated weights, one per criterion (e.g. "1,1,1,2")
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' or '-' per criterion (e.g. "+,+,-,+")
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Where to write the ranked table
    output: PathBuf,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Field delimiter for input and output tables
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<char>,

    /// Fixed number of decimals for scores
    #[arg(long, value_name = "N")]
    precision: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => return fail(USAGE),
            _ => return fail(argument_error(&err)),
        },
    };

    let overrides = ConfigOverrides {
        delimiter: cli.delimiter,
        score_precision: cli.precision,
    };
    let config = match AppConfig::load(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(err) => return fail(err),
    };
    if let Err(err) = config.validate() {
        return fail(err);
    }

    init_tracing(config.logging.effective_level(cli.verbose));

    let delimiter = match config.output.delimiter_byte() {
        Ok(delimiter) => delimiter,
        Err(err) => return fail(err),
    };

    let source = CsvTableSource::new(&cli.input).with_delimiter(delimiter);
    let sink = CsvTableSink::new(&cli.output).with_delimiter(delimiter);
    let handler = RankAlternativesHandler::new(Arc::new(source), Arc::new(sink))
        .with_score_format(config.output.score_format());

    match handler.handle(RankAlternativesCommand::new(cli.weights, cli.impacts)) {
        Ok(_) => {
            println!("Result written to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => fail(err),
    }
}

/// Prints the single failure line and returns exit code 1.
fn fail(message: impl std::fmt::Display) -> ExitCode {
    println!("Error: {}", message);
    ExitCode::from(1)
}

/// First line of clap's report, without its `error: ` prefix.
fn argument_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn init_tracing(level: LogLevel) {
    fmt()
        .with_env_filter(EnvFilter::new(level.as_str()))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
