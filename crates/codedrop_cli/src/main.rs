//! Command-line client for the CodeDrop API.

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use codedrop_core::config::API_HOST_ENV;
use codedrop_core::{ApiClient, ClientError, Config, Language, Paste};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "codedrop", about = "CodeDrop CLI", version)]
struct Cli {
    /// Server URL; a bare host gets https:// prepended
    #[arg(short, long, env = API_HOST_ENV)]
    server: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Print timing for API requests
    #[arg(long, global = true)]
    timing: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Publish a paste from a file or stdin
    New {
        #[arg(short, long)]
        file: Option<String>,
        /// Language tag (see `codedrop languages`)
        #[arg(short, long, default_value = "javascript", value_parser = parse_language)]
        language: Language,
    },
    /// Print a paste's content
    Get { id: String },
    /// List the supported language tags
    Languages,
}

/// Accept any known tag or alias; unknown names are rejected rather than
/// silently published as plain text.
fn parse_language(raw: &str) -> Result<Language, String> {
    let language = Language::from_tag(raw);
    let explicit_plain = matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "plaintext" | "text" | "plain"
    );
    if language == Language::PlainText && !explicit_plain {
        return Err(format!(
            "unknown language '{}'; run `codedrop languages` for the list",
            raw
        ));
    }
    Ok(language)
}

fn log_timing(timing: bool, label: &str, duration: Duration) {
    if timing {
        eprintln!(
            "[timing] {}: {:.1} ms",
            label,
            duration.as_secs_f64() * 1000.0
        );
    }
}

fn resolve_config(server: Option<&str>, timeout: Option<u64>) -> Config {
    let mut config = Config::from_env();
    if let Some(server) = server.filter(|value| !value.trim().is_empty()) {
        config = config.with_api_base(server);
    }
    if let Some(secs) = timeout.filter(|secs| *secs > 0) {
        config.timeout = Duration::from_secs(secs);
    }
    config
}

fn format_get_output(paste: &Paste, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(paste).context("response encoding error");
    }
    Ok(paste.content.clone())
}

fn format_languages(json: bool) -> anyhow::Result<String> {
    if json {
        let tags: Vec<&str> = Language::SELECTABLE.iter().map(|l| l.tag()).collect();
        return serde_json::to_string_pretty(&tags).context("response encoding error");
    }
    let rows: Vec<String> = Language::SELECTABLE
        .iter()
        .map(|language| format!("{:<12} {}", language.tag(), language.label()))
        .collect();
    Ok(rows.join("\n"))
}

fn write_block(out: &mut impl Write, text: &str) -> io::Result<()> {
    if text.ends_with('\n') {
        write!(out, "{}", text)
    } else {
        writeln!(out, "{}", text)
    }
}

/// Execute `cli`, writing results to `out` and reading paste content from
/// `input` when no file is given.
fn run(cli: Cli, input: &mut impl Read, out: &mut impl Write) -> anyhow::Result<()> {
    let Cli {
        server,
        json,
        timing,
        timeout,
        command,
    } = cli;

    match command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, out);
            return Ok(());
        }
        Commands::Languages => {
            writeln!(out, "{}", format_languages(json)?)?;
            return Ok(());
        }
        Commands::New { .. } | Commands::Get { .. } => {}
    }

    let config = resolve_config(server.as_deref(), timeout);
    debug!(api = %config.api_base, "using server");
    let client = ApiClient::from_config(&config)?;

    match command {
        Commands::New { file, language } => {
            let content = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path))?,
                None => {
                    let mut buffer = String::new();
                    input
                        .read_to_string(&mut buffer)
                        .context("failed to read stdin")?;
                    buffer
                }
            };

            let started = Instant::now();
            let id = match client.create_paste(&content, language) {
                Ok(id) => id,
                Err(ClientError::EmptyContent) => bail!("nothing to publish: content is empty"),
                Err(err) => return Err(err).context("New failed"),
            };
            log_timing(timing, "new", started.elapsed());

            if json {
                let body = serde_json::json!({ "id": id, "language": language.tag() });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "{}", id)?;
            }
        }
        Commands::Get { id } => {
            let started = Instant::now();
            let paste = match client.fetch_paste(&id) {
                Ok(paste) => paste,
                Err(ClientError::Status { status, message }) => {
                    bail!("Get failed ({}): {}", status, message)
                }
                Err(err) => return Err(err).context("Get failed"),
            };
            log_timing(timing, "get", started.elapsed());
            write_block(out, &format_get_output(&paste, json)?)?;
        }
        Commands::Completions { .. } | Commands::Languages => {
            unreachable!("handled before client setup")
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
