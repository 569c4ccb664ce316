//! Solve blackhole cases from a case file.
//!
//! Usage:
//!   blackhole < cases.txt            Read cases from stdin
//!   blackhole -i cases.txt --json    One JSON object per case
//!   blackhole --epsilon 1e-6 --tight Coarser search over the tight bracket

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use blackhole_cli::{CliError, OutputFormat, read_cases, solve_cases, write_reports};
use blackhole_solver::{SearchBracket, SearchConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blackhole")]
#[command(about = "Compute the safety radius of three repelling bodies")]
struct Args {
    /// Case file to read (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Half-width of the final search bracket
    #[arg(long, default_value_t = 1e-11)]
    epsilon: f64,

    /// Start from the tight bracket instead of [0, longest side]
    #[arg(long)]
    tight: bool,

    /// Decimal places in text output (derived from epsilon by default)
    #[arg(short, long)]
    precision: Option<usize>,

    /// Emit JSON lines instead of "Case #i: r"
    #[arg(long)]
    json: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let bracket = if args.tight {
        SearchBracket::Tight
    } else {
        SearchBracket::Wide
    };
    let config = SearchConfig::default()
        .with_epsilon(args.epsilon)
        .with_bracket(bracket);

    let cases = match &args.input {
        Some(path) => read_cases(File::open(path)?)?,
        None => read_cases(io::stdin().lock())?,
    };
    info!(cases = cases.len(), "read case file");

    let reports = solve_cases(&cases, &config)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text {
            precision: args.precision.unwrap_or_else(|| config.decimal_places()),
        }
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_reports(&mut out, &reports, format)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
