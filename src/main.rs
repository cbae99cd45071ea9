//! Daytrip - day-trip research and briefing generator
//!
//! CLI entry point: wires the configured provider clients into the planner
//! pipeline and drives it from either a line-prompt flow or a one-shot
//! command.

use std::fs;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use tracing::{debug, info};

use daytrip::cli::{Cli, Command, get_log_path};
use daytrip::config::Config;
use daytrip::llm::LlmClient;
use daytrip::pipeline::{Planner, TripSections};
use daytrip::search::SearchClient;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet.
    // Logs go to a file so the interactive prompt stays clean.
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = match level_str.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration and construct the injected provider clients
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    info!(
        "Daytrip loaded config: llm={} search={}",
        config.llm.provider, config.search.provider
    );

    let search: Arc<dyn SearchClient> =
        daytrip::search::create_client(&config.search).context("Failed to create search client")?;
    let llm: Arc<dyn LlmClient> = daytrip::llm::create_client(&config.llm).context("Failed to create LLM client")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Plan { city, interests }) => {
            debug!("main: matched Plan command");
            cmd_plan(&config, search, llm, &city, &interests).await
        }
        Some(Command::Interactive) | None => {
            debug!("main: matched Interactive command (or default)");
            cmd_interactive(&config, search, llm).await
        }
    }
}

/// One-shot flow: city and interests from flags, only the final document
/// is printed (the form-style front-end)
async fn cmd_plan(
    config: &Config,
    search: Arc<dyn SearchClient>,
    llm: Arc<dyn LlmClient>,
    city: &str,
    interests: &str,
) -> Result<()> {
    debug!(%city, %interests, "cmd_plan: called");
    let mut planner = Planner::new(search, llm, config.llm.max_tokens);

    planner.provide_city(city)?;
    planner.provide_interests(interests)?;
    planner.synthesize().await.context("Itinerary synthesis failed")?;

    println!("{}", planner.document());
    Ok(())
}

/// Interactive flow: line prompts for city and interests, sections printed
/// as they become available, then the full document
async fn cmd_interactive(config: &Config, search: Arc<dyn SearchClient>, llm: Arc<dyn LlmClient>) -> Result<()> {
    debug!("cmd_interactive: called");
    let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;

    println!("Welcome to the Daytrip briefing CLI!");

    let mut planner = Planner::new(search, llm, config.llm.max_tokens);

    let city = editor
        .readline("Please enter the city you want to visit for your day trip: ")
        .context("Failed to read city")?;
    planner.provide_city(city.trim())?;

    let prompt = format!(
        "Please enter your interests for the trip to {} (comma-separated): ",
        planner.state().city
    );
    let interests = editor.readline(&prompt).context("Failed to read interests")?;
    planner.provide_interests(&interests)?;

    println!("\nResearching {}...", planner.state().city);
    let sections = planner.synthesize().await.context("Itinerary synthesis failed")?;

    print_sections(&sections);

    println!("\n--- Combined briefing ---\n");
    println!("{}", planner.document());
    Ok(())
}

/// Print each labeled section in order
fn print_sections(sections: &TripSections) {
    for (heading, body) in sections.labeled() {
        println!("\n{}:", heading);
        println!("{}", body);
    }
}
