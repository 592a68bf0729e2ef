use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fdcalc::application::engine::compute;
use fdcalc::application::validator::validate;
use fdcalc::domain::deposit::RawDepositInput;
use fdcalc::interfaces::csv::{RequestReader, ResultWriter};
use fdcalc::interfaces::json::write_json;
use fdcalc::interfaces::outcome::{Outcome, RowOutcome};
use fdcalc::interfaces::text::write_report;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Fixed deposit maturity calculator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate a single deposit
    Calc {
        /// Amount deposited
        #[arg(long, allow_hyphen_values = true)]
        principal: Option<String>,

        /// Annual interest rate in percent, e.g. 6.5
        #[arg(long, allow_hyphen_values = true)]
        rate: Option<String>,

        /// Tenure in years, fractions allowed
        #[arg(long, allow_hyphen_values = true)]
        tenure: Option<String>,

        /// annual, half-yearly, quarterly or monthly
        #[arg(long)]
        frequency: Option<String>,

        #[arg(long, value_enum, default_value_t = CalcFormat::Text)]
        format: CalcFormat,
    },
    /// Calculate every deposit in a CSV file
    Batch {
        /// CSV with columns principal, annualRatePercent, tenureYears, compoundingFrequency
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = BatchFormat::Csv)]
        format: BatchFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CalcFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BatchFormat {
    Csv,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Calc {
            principal,
            rate,
            tenure,
            frequency,
            format,
        } => {
            let raw = RawDepositInput {
                principal,
                annual_rate_percent: rate,
                tenure_years: tenure,
                compounding_frequency: frequency,
            };
            run_calc(&raw, format)
        }
        Command::Batch { input, format } => run_batch(input, format),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_calc(raw: &RawDepositInput, format: CalcFormat) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let request = match validate(raw) {
        Ok(request) => request,
        Err(errors) => {
            match format {
                CalcFormat::Text => {
                    for error in &errors {
                        eprintln!("Invalid input: {error}");
                    }
                }
                CalcFormat::Json => {
                    write_json(&mut out, &Outcome::Rejected { errors }).into_diagnostic()?;
                }
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = compute(request);
    info!(
        maturity_value = result.maturity_value(),
        "Calculated single deposit"
    );

    match format {
        CalcFormat::Text => write_report(&mut out, &request, &result).into_diagnostic()?,
        CalcFormat::Json => {
            write_json(&mut out, &Outcome::Calculated { result }).into_diagnostic()?
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_batch(input: PathBuf, format: BatchFormat) -> Result<ExitCode> {
    let file = File::open(&input).into_diagnostic()?;
    info!(input = %input.display(), "Processing deposit batch");

    let reader = RequestReader::new(file);
    let outcomes = reader
        .requests()
        .enumerate()
        .map(|(index, raw)| RowOutcome::evaluate(index as u64 + 1, raw));

    let stdout = io::stdout();
    match format {
        BatchFormat::Csv => {
            let mut writer = ResultWriter::new(stdout.lock());
            writer.write_outcomes(outcomes).into_diagnostic()?;
        }
        BatchFormat::Json => {
            let outcomes: Vec<RowOutcome> = outcomes.collect();
            write_json(&mut stdout.lock(), &outcomes).into_diagnostic()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
