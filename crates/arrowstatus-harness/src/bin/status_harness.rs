//! CLI entrypoint for arrowstatus tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arrowstatus_core::{LabelStyle, Status, StatusCode};
use arrowstatus_harness::inspect::{self, InspectStatus};
use arrowstatus_harness::resolve_label_style;
use arrowstatus_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Render, encode and inspect arrowstatus records.
#[derive(Debug, Parser)]
#[command(name = "status-harness")]
#[command(about = "Render, encode and inspect arrowstatus records")]
struct Cli {
    /// Label table: `compat` or `corrected` (overrides ARROWSTATUS_LABELS).
    #[arg(long, global = true)]
    labels: Option<String>,
    /// Structured JSONL log output path.
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the display string of a status.
    Render {
        /// Status code name (e.g. `io_error`, `KeyError`, `ok`).
        #[arg(long)]
        code: StatusCode,
        #[arg(long, default_value = "")]
        message: String,
        /// Auxiliary code (usually errno).
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        aux: i16,
    },
    /// Write a status as a packed record.
    Encode {
        /// Status code name; must not be `ok`.
        #[arg(long)]
        code: StatusCode,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        aux: i16,
        /// Output path for the packed bytes.
        #[arg(long)]
        output: PathBuf,
    },
    /// Decode a packed record file and emit an explainable report.
    Inspect {
        /// Input path holding one packed record.
        #[arg(long)]
        input: PathBuf,
        /// Output format: `json` (default) or `plain`.
        #[arg(long, default_value = "json")]
        format: String,
        /// Output file path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the label of every status code.
    Labels,
}

fn build_status(code: StatusCode, message: String, aux: i16) -> Status {
    if code == StatusCode::Ok {
        Status::OK
    } else {
        Status::new(code, message, aux)
    }
}

fn write_output(output: Option<PathBuf>, text: &str) -> std::io::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, text)
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

impl Command {
    fn event(&self) -> &'static str {
        match self {
            Self::Render { .. } => "render",
            Self::Encode { .. } => "encode",
            Self::Inspect { .. } => "inspect",
            Self::Labels => "labels",
        }
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn run(command: Command, style: LabelStyle) -> CliResult<LogEntry> {
    let entry = match command {
        Command::Render { code, message, aux } => {
            let status = build_status(code, message, aux);
            println!("{}", status.display_with(style));
            LogEntry::new("", LogLevel::Info, "render")
                .with_status(&status)
                .with_outcome(Outcome::Pass)
        }
        Command::Encode {
            code,
            message,
            aux,
            output,
        } => {
            if code == StatusCode::Ok {
                return Err("an ok status has no packed form".into());
            }
            let status = Status::new(code, message, aux);
            let bytes = status
                .to_packed()?
                .ok_or("an ok status has no packed form")?;
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, &bytes)?;
            eprintln!("Wrote {} bytes to {}", bytes.len(), output.display());
            LogEntry::new("", LogLevel::Info, "encode")
                .with_status(&status)
                .with_outcome(Outcome::Pass)
                .with_artifacts(vec![output.display().to_string()])
        }
        Command::Inspect {
            input,
            format,
            output,
        } => {
            let report = inspect::inspect_file(&input, style)?;
            let out = match format.to_ascii_lowercase().as_str() {
                "json" => serde_json::to_string_pretty(&report)? + "\n",
                "plain" => inspect::render_plain(&report),
                other => {
                    return Err(format!("Unsupported format '{other}', expected json|plain").into());
                }
            };
            write_output(output, &out)?;

            let (level, outcome) = match report.status {
                InspectStatus::Decoded => (LogLevel::Info, Outcome::Pass),
                InspectStatus::Rejected => (LogLevel::Warn, Outcome::Fail),
            };
            let mut entry = LogEntry::new("", level, "inspect")
                .with_outcome(outcome)
                .with_artifacts(vec![input.display().to_string()])
                .with_details(serde_json::json!({
                    "sha256": report.sha256,
                    "error": report.error,
                }));
            entry.code = report.code;
            entry.errno = report.auxiliary_code;
            entry
        }
        Command::Labels => {
            for code in StatusCode::ALL {
                println!("{:<16} {}", code.as_str(), code.label_for(style));
            }
            LogEntry::new("", LogLevel::Info, "labels").with_outcome(Outcome::Pass)
        }
    };
    Ok(entry)
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let style = resolve_label_style(cli.labels.as_deref());
    let mut log = match &cli.log {
        Some(path) => Some(LogEmitter::to_file(path, &format!("pid{}", std::process::id()))?),
        None => None,
    };

    let event = cli.command.event();
    let (entry, result) = match run(cli.command, style) {
        Ok(entry) => (entry, Ok(())),
        Err(err) => (
            LogEntry::new("", LogLevel::Error, event)
                .with_outcome(Outcome::Error)
                .with_details(serde_json::json!({ "error": err.to_string() })),
            Err(err),
        ),
    };

    if let Some(emitter) = log.as_mut() {
        emitter.emit_entry(entry.with_label_style(style.as_str()))?;
        emitter.flush()?;
    }
    result
}
