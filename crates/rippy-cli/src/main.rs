//! rippy - render reStructuredText tables from JSON or TOML specs.

use clap::{Args, Parser, ValueEnum};
use rippy_cli::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use rippy_cli::{CliError, ExitCode, RenderRequest};
use rippy_table::InputFormat;

use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error};

/// Render reStructuredText simple tables
#[derive(Parser)]
#[command(name = "rippy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Table spec files (.json or .toml); "-" or nothing reads stdin
    inputs: Vec<PathBuf>,

    /// Input format (auto detects from the file extension; stdin defaults to json)
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    input_format: FormatArg,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the title of a single-table input
    #[arg(long)]
    title: Option<String>,

    #[command(flatten)]
    log: LogOpts,
}

/// Logging options
#[derive(Args, Debug)]
struct LogOpts {
    /// Log level [env: RIPPY_LOG]; RUST_LOG overrides it
    #[arg(long, value_enum, ignore_case = true)]
    log_level: Option<LogLevel>,

    /// Log format [env: RIPPY_LOG_FORMAT]
    #[arg(long, value_enum, ignore_case = true)]
    log_format: Option<LogFormat>,

    /// Prefix human-format log lines with a timestamp
    #[arg(long)]
    log_timestamps: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Json,
    Toml,
}

impl FormatArg {
    fn forced(self) -> Option<InputFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Json => Some(InputFormat::Json),
            FormatArg::Toml => Some(InputFormat::Toml),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            return code.into();
        }
    };

    let log_config = LogConfig::from_env(cli.log.log_level, cli.log.log_format)
        .with_verbosity(cli.log.verbose, cli.log.quiet)
        .with_timestamps(cli.log.log_timestamps);
    let filter = init_logging(&log_config);
    debug!(%filter, format = %log_config.format, "Logging initialized");

    match run(cli) {
        Ok(()) => ExitCode::Clean.into(),
        Err(err) => {
            let code = err.exit_code();
            error!(error = %err, code = %code, "rippy failed");
            eprintln!("rippy: {}", err);
            code.into()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let rendered = RenderRequest::new(cli.inputs)
        .with_format(cli.input_format.forced())
        .with_title(cli.title)
        .execute(std::io::stdin().lock())?;

    match cli.output {
        Some(path) => std::fs::write(&path, rendered)
            .map_err(|source| CliError::Output { path, source }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Output {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}
