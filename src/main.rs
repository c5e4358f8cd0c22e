//! Smart Goals CLI
//!
//! Turns a free-text goal into a structured analysis or a full SMART draft
//! and prints it as JSON on stdout. Logs go to stderr.
//!
//! # Commands
//!
//! - `analyze <text…>`: domain, intent, timeframe, metrics, constraints
//! - `generate [--user <id>] <text…>`: SMART draft plus validation report
//!
//! Exit code 1 on a goal error, 2 on a configuration error.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use smart_goals::adapters::rules::{RuleBasedGoalAnalyzer, TemplateSmartGenerator};
use smart_goals::application::{
    AnalyzeGoalCommand, AnalyzeGoalHandler, GenerateSmartGoalCommand, GenerateSmartGoalHandler,
};
use smart_goals::config::{AppConfig, ConfigError, LoggingConfig};
use smart_goals::domain::analysis::{SmartGoalDraft, SmartGoalValidator, ValidationReport};
use smart_goals::domain::foundation::{GoalError, UserId};

const EXIT_GOAL_ERROR: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;

/// Smart Goals - rule-based SMART goal synthesis
#[derive(Parser)]
#[command(name = "smart-goals")]
#[command(version)]
#[command(about = "Analyze free-text goals and turn them into SMART goals")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv); overrides the configured level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the structured analysis of a goal
    Analyze {
        /// Goal description
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print a SMART draft and its validation report
    Generate {
        /// Identifier of the user the goal belongs to
        #[arg(short, long)]
        user: Option<String>,

        /// Goal description
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[derive(Serialize)]
struct GenerateOutput {
    draft: SmartGoalDraft,
    validation: ValidationReport,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    init_tracing(&config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Analyze { text } => analyze(&config, text.join(" ")).await,
        Commands::Generate { user, text } => generate(&config, user, text.join(" ")).await,
    };

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::from(EXIT_GOAL_ERROR)
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive())),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if logging.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn analyze_handler(config: &AppConfig) -> AnalyzeGoalHandler {
    let analyzer = RuleBasedGoalAnalyzer::new()
        .with_min_description_chars(config.analysis.min_description_chars);
    AnalyzeGoalHandler::new(Arc::new(analyzer))
        .with_max_recommendations(config.analysis.max_recommendations)
}

async fn analyze(config: &AppConfig, description: String) -> Result<String, GoalError> {
    let analysis = analyze_handler(config)
        .handle(AnalyzeGoalCommand { description })
        .await?;
    to_json(&analysis)
}

async fn generate(
    config: &AppConfig,
    user: Option<String>,
    description: String,
) -> Result<String, GoalError> {
    let user_id = match user {
        Some(id) => UserId::new(id)?,
        None => UserId::anonymous(),
    };

    let handler = GenerateSmartGoalHandler::new(
        analyze_handler(config),
        Arc::new(TemplateSmartGenerator::new()),
    );
    let draft = handler
        .handle(GenerateSmartGoalCommand {
            user_id,
            description,
        })
        .await?;

    let validation = SmartGoalValidator::new(config.analysis.pass_score()).validate(&draft);
    to_json(&GenerateOutput { draft, validation })
}

fn to_json(value: &impl Serialize) -> Result<String, GoalError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| GoalError::validation_failed(format!("Could not render output: {err}")))
}

fn report(err: &GoalError) {
    error!(kind = %err.kind, recoverable = err.recoverable, "{}", err.message);
    eprintln!("{}: {}", err.kind, err.message);
    for suggestion in &err.suggestions {
        eprintln!("  - {suggestion}");
    }
}
