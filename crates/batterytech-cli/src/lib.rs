#![forbid(unsafe_code)]

mod commands;
mod output;
mod quiz_runner;

use batterytech_query::QueryService;
use batterytech_store::StaticContent;
use clap::{error::ErrorKind, ArgAction, Parser, Subcommand};
use output::OutputMode;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;
use std::sync::Arc;

pub use quiz_runner::{run_quiz, QuizReport};

pub const CRATE_NAME: &str = "batterytech-cli";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Internal = 1,
    Usage = 2,
    NotFound = 3,
    InvalidContent = 4,
}

#[derive(Parser)]
#[command(name = "batterytech")]
#[command(about = "Browse, compare and quiz yourself on battery technologies")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Directory holding batteries.json, quizzes.json, units.json and timeline.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Batteries {
        #[command(subcommand)]
        command: BatteriesCommand,
    },
    /// Compare up to three batteries, e.g. `lithium-ion,lead-acid`.
    Compare { ids: String },
    Units,
    Timeline,
    /// Answer a unit's questions interactively on stdin.
    Quiz {
        unit: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = batterytech_query::DEFAULT_QUIZ_SAMPLE_SIZE)]
        size: usize,
    },
    /// Load and check the dataset without serving it.
    Validate,
}

#[derive(Subcommand)]
enum BatteriesCommand {
    List {
        /// primary, secondary, fuel-cell or all.
        #[arg(long = "type")]
        battery_type: Option<String>,
    },
    Show { id: String },
}

#[derive(Debug)]
pub(crate) struct CliError {
    exit_code: ExitCode,
    code: &'static str,
    message: String,
}

impl CliError {
    pub(crate) fn new(exit_code: ExitCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            code,
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: String) -> Self {
        Self::new(ExitCode::Internal, "internal_error", message)
    }

    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::new(ExitCode::Usage, "usage_error", message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ExitCode::NotFound, "not_found", message)
    }

    pub(crate) fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ExitCode::InvalidContent, "invalid_content", message)
    }
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        eprintln!("{}", json!({"code": error.code, "message": error.message}));
    } else {
        eprintln!("error: {}", error.message);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_content(data_dir: Option<&PathBuf>) -> Result<StaticContent, CliError> {
    match data_dir {
        Some(dir) => StaticContent::load_dir(dir).map_err(|e| CliError::invalid_content(e.to_string())),
        None => StaticContent::embedded().map_err(|e| CliError::invalid_content(e.to_string())),
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => return Err(CliError::usage(err.to_string())),
        },
    };
    init_logging(cli.verbose);
    let mode = OutputMode { json: cli.json };
    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;

    let content = Arc::new(load_content(cli.data_dir.as_ref())?);
    let query = QueryService::new(content.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Batteries { command } => match command {
            BatteriesCommand::List { battery_type } => {
                commands::list_batteries(&mut out, mode, &query, battery_type.as_deref())
            }
            BatteriesCommand::Show { id } => commands::show_battery(&mut out, mode, &query, &id),
        },
        Commands::Compare { ids } => commands::compare(&mut out, mode, &query, &ids),
        Commands::Units => commands::list_units(&mut out, mode, &query),
        Commands::Timeline => commands::list_timeline(&mut out, mode, &query),
        Commands::Quiz { unit, seed, size } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            commands::quiz(&mut input, &mut out, mode, &query, &unit, seed, size)
        }
        Commands::Validate => commands::validate(&mut out, mode, content.as_ref()),
    }
}
