//! Blueprint CLI Entry Point
//!
//! Reads one Python snippet, builds its blueprint and prints either a text
//! dashboard or the report as JSON.

mod dashboard;

use anyhow::{Context, Result};
use blueprint_core::samples::DEMO_SNIPPET;
use blueprint_core::{AnalysisError, BlueprintAssembler, BlueprintConfig, HealthProfile};
use blueprint_llm::{engine, SummarizerBackend, SummarizerConfig};
use blueprint_utils::{init_logging, load_layered, LogLevel, LoggerConfig};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Prefix for environment overrides, e.g. `BLUEPRINT_SUMMARIZER__BACKEND=ollama`
const ENV_PREFIX: &str = "BLUEPRINT";

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Code Blueprint - metrics, security audit and summary for a Python snippet")]
#[command(version)]
struct Cli {
    /// Python file to analyze, `-` or nothing for stdin
    input: Option<PathBuf>,

    /// Analyze the bundled demo snippet instead of an input
    #[arg(long, conflicts_with = "input")]
    demo: bool,

    /// Output format
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Summarizer backend, overrides the configuration file
    #[arg(short = 's', long)]
    summarizer: Option<BackendChoice>,

    /// Summary deadline in seconds, 0 disables it
    #[arg(long)]
    deadline: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable dashboard
    Text,
    /// The blueprint report as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendChoice {
    /// Deterministic narrator, no model needed
    Template,
    /// Local model served by Ollama
    Ollama,
}

impl From<BackendChoice> for SummarizerBackend {
    fn from(choice: BackendChoice) -> Self {
        match choice {
            BackendChoice::Template => SummarizerBackend::Template,
            BackendChoice::Ollama => SummarizerBackend::Ollama,
        }
    }
}

/// Everything the binary reads from configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct CliConfig {
    analysis: BlueprintConfig,
    summarizer: SummarizerConfig,
    logging: LoggerConfig,
}

impl CliConfig {
    fn load(cli: &Cli) -> Result<Self> {
        let mut config: CliConfig = load_layered(cli.config.as_deref(), ENV_PREFIX)
            .context("Failed to load configuration")?;

        if let Some(backend) = cli.summarizer {
            config.summarizer.backend = backend.into();
        }
        if let Some(deadline) = cli.deadline {
            config.summarizer.deadline_secs = deadline;
        }
        if cli.debug {
            config.logging.level = LogLevel::Debug;
        }
        Ok(config)
    }
}

fn read_source(cli: &Cli) -> Result<String> {
    if cli.demo {
        return Ok(DEMO_SNIPPET.to_string());
    }
    match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Exit status for a failed request: 2 when the input is at fault.
/// 2 for input the analyzer refused, 1 for everything else
fn exit_status(err: &AnalysisError) -> u8 {
    if err.is_invalid_input() {
        2
    } else {
        1
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = CliConfig::load(&cli)?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let source = read_source(&cli)?;
    debug!("Read {} byte(s) of source", source.len());

    engine::init(&config.summarizer).context("Failed to start the summarizer")?;
    let outcome = match engine::handle() {
        Ok(summarizer) => {
            let assembler = BlueprintAssembler::new(summarizer).with_config(config.analysis);
            Ok(assembler.build(&source).await)
        }
        Err(err) => Err(err),
    };
    engine::teardown();

    match outcome.context("Summarizer engine unavailable")? {
        Ok(report) => {
            match cli.format {
                OutputFormat::Json => println!("{}", report.to_json_pretty()?),
                OutputFormat::Text => print!("{}", dashboard::render(&report, &HealthProfile::assess(&report))),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprint!("{}", dashboard::render_error(&err));
            Ok(ExitCode::from(exit_status(&err)))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
