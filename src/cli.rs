use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::api;
use crate::config::{Config, SourceKind};
use crate::services::log::ActivityLogger;
use crate::types::{ApiResponse, CheckReport};

#[derive(Parser)]
#[command(name = "metagen", version, about = "Open Graph / Twitter meta tag generator")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a URL would be accepted
    Validate { url: String },
    /// Scrape a URL and build its meta tags
    Check(CheckArgs),
    /// Show the activity log, newest first
    Logs(LogsArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
struct CheckArgs {
    url: String,
    /// Where to get the tags from (defaults to the configured source)
    #[arg(long, value_enum)]
    source: Option<SourceKind>,
    /// Scraping service endpoint
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,
    /// Edit a field before output, e.g. --set title="My page"
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_edit)]
    edits: Vec<(String, String)>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Skip the activity log for this run
    #[arg(long = "no-log")]
    no_log: bool,
}

#[derive(Args)]
struct LogsArgs {
    /// Only failed checks
    #[arg(long)]
    errors: bool,
    /// Only entries for this host
    #[arg(long)]
    host: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON envelope with the full report
    Json,
    /// The edited `<meta>` snippet only
    Snippet,
    /// The widget rendered as a standalone HTML page
    Html,
}

#[derive(Serialize)]
struct ConfigView {
    path: Option<String>,
    #[serde(flatten)]
    config: Config,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Validate { url } => print_json(&ApiResponse::ok(api::validate_url(&url))),
        Command::Check(args) => check_cmd(args),
        Command::Logs(args) => logs_cmd(args),
        Command::Config => {
            let config = Config::load().context("loading configuration")?;
            let path = Config::default_path().map(|p| p.display().to_string());
            print_json(&ApiResponse::ok(ConfigView { path, config }))
        }
    }
}

fn check_cmd(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = Config::load().context("loading configuration")?;
    if let Some(source) = args.source {
        config.source = source;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    let source = config.tag_source().context("building tag source")?;
    let logger = if config.activity_log && !args.no_log {
        ActivityLogger::new().ok()
    } else {
        None
    };

    let runtime = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let result = runtime.block_on(api::check_url(source, &args.url, &args.edits, logger));

    match args.format {
        OutputFormat::Json => {
            let (json, ok) = check_json(result)?;
            println!("{}", json);
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
        OutputFormat::Snippet => {
            let report = result?;
            match (report.failure, report.snippet) {
                (None, Some(snippet)) => {
                    println!("{}", snippet);
                    Ok(())
                }
                (Some(kind), _) => Err(anyhow!(kind.message())),
                (None, None) => Err(anyhow!("no tags were produced")),
            }
        }
        OutputFormat::Html => {
            print!("{}", result?.page);
            Ok(())
        }
    }
}

/// Pretty JSON envelope for a check, and whether the check succeeded.
fn check_json(result: crate::Result<CheckReport>) -> anyhow::Result<(String, bool)> {
    let (json, ok) = match result {
        Ok(report) => match report.failure {
            None => (serde_json::to_string_pretty(&ApiResponse::ok(report))?, true),
            Some(kind) => (
                serde_json::to_string_pretty(&ApiResponse::<()>::err(kind.message()))?,
                false,
            ),
        },
        Err(e) => (
            serde_json::to_string_pretty(&ApiResponse::<()>::err(e.to_string()))?,
            false,
        ),
    };
    Ok((json, ok))
}

fn logs_cmd(args: LogsArgs) -> anyhow::Result<()> {
    let logger = ActivityLogger::new().context("opening activity log")?;
    for line in logger.read_logs(args.host.as_deref(), args.errors)? {
        println!("{}", line);
    }
    Ok(())
}

fn parse_edit(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("field name must not be empty".into());
    }
    Ok((key.to_string(), value.to_string()))
}

fn print_json<T: Serialize>(val: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
