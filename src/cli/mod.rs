//! Command-line front end for cost estimation and delivery arrangement.

mod error;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::input::{parse_arrangement_input, parse_estimation_input};
use crate::pricing::{CostEstimator, OfferTable};
use crate::report::{arrangement_report, estimation_report, render_json, render_text, PackageReport};
use crate::scheduling::DeliveryScheduler;

pub use error::CliError;

const ENV_INPUT: &str = "COURIER_INPUT";
const ENV_OFFERS: &str = "COURIER_OFFERS";
const ENV_FORMAT: &str = "COURIER_FORMAT";

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Estimate courier delivery costs and arrange deliveries across a fleet",
    version
)]
pub struct Cli {
    /// Log filter directives, e.g. `debug` or `u_courier=trace`.
    #[arg(
        long,
        global = true,
        env = "RUST_LOG",
        default_value = "warn",
        value_name = "filter"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Price each package: prints `id discount total_cost`.
    Estimate(RunArgs),
    /// Schedule deliveries: prints `id discount total_cost delivery_time`.
    Arrange(RunArgs),
}

/// Arguments shared by both subcommands.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Path to the input text file.
    #[arg(short, long, env = ENV_INPUT, value_name = "path")]
    pub input: PathBuf,
    /// Path to a JSON offer table replacing the built-in offers.
    #[arg(long, env = ENV_OFFERS, value_name = "path")]
    pub offers: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, env = ENV_FORMAT, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How result rows are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One space-separated line per package.
    #[default]
    Text,
    /// A JSON array of row objects.
    Json,
}

/// Runs `courier` with the process arguments, printing the report to stdout.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    init_logging(&cli.log_level)?;
    let output = execute(&cli.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Parses `args` (program name first) and returns the rendered report
/// without touching logging or stdout.
///
/// # Examples
///
/// ```no_run
/// let report = u_courier::cli::run_with(["courier", "estimate", "--input", "orders.txt"])?;
/// println!("{report}");
/// # Ok::<(), u_courier::cli::CliError>(())
/// ```
pub fn run_with<I, T>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    execute(&cli.command)
}

/// Executes a parsed subcommand and renders its report.
pub fn execute(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Estimate(args) => estimate(args),
        Command::Arrange(args) => arrange(args),
    }
}

/// Installs a stderr `fmt` subscriber filtered by `filter`.
///
/// Records from the `log` facade are bridged into the subscriber. Calling
/// this again after a subscriber is installed has no effect.
pub fn init_logging(filter: &str) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|source| CliError::LogFilter {
        filter: filter.to_string(),
        source,
    })?;
    // Already initialised: keep the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

fn estimate(args: &RunArgs) -> Result<String, CliError> {
    let text = read_input(&args.input)?;
    let offers = load_offers(args.offers.as_deref())?;
    let input = parse_estimation_input(&text)?;
    log::debug!("estimating {} package(s)", input.packages.len());

    let estimator = CostEstimator::new(input.base_delivery_cost, &offers);
    render(&estimation_report(&estimator, &input.packages), args.format)
}

fn arrange(args: &RunArgs) -> Result<String, CliError> {
    let text = read_input(&args.input)?;
    let offers = load_offers(args.offers.as_deref())?;
    let mut input = parse_arrangement_input(&text)?;

    let scheduler = DeliveryScheduler::new(
        input.fleet,
        CostEstimator::new(input.base_delivery_cost, &offers),
    );
    let shipments = scheduler.schedule(&mut input.packages)?;
    log::info!(
        "arranged {} package(s) in {} trip(s)",
        input.packages.len(),
        shipments.len()
    );
    render(&arrangement_report(&input.packages), args.format)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn load_offers(path: Option<&Path>) -> Result<OfferTable, CliError> {
    match path {
        Some(path) => Ok(OfferTable::load(path)?),
        None => Ok(OfferTable::standard()),
    }
}

fn render(rows: &[PackageReport], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(rows)),
        OutputFormat::Json => render_json(rows).map_err(CliError::SerializeReport),
    }
}
