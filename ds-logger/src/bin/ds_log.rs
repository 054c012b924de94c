use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ds_logger::{Level, Logger, LoggerConfig};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Emit a leveled log line to stderr", long_about = None)]
struct Args {
    /// Threshold override (error, warn, info, debug)
    #[arg(short, long)]
    level: Option<String>,

    /// Read DS_LOG_LEVEL from this dotenv file
    #[arg(short, long)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Error(Emit),
    Warn(Emit),
    Info(Emit),
    Debug(Emit),
    /// Print the resolved threshold
    Threshold,
}

#[derive(clap::Args, Debug)]
struct Emit {
    message: String,
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,
}

/// Command-line argument rendered like the value it looks like.
enum CliArg {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl CliArg {
    fn parse(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            CliArg::Int(v)
        } else if let Ok(v) = raw.parse::<f64>() {
            CliArg::Float(v)
        } else if let Ok(v) = raw.parse::<bool>() {
            CliArg::Bool(v)
        } else {
            CliArg::Text(raw.to_string())
        }
    }
}

impl fmt::Debug for CliArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliArg::Int(v) => write!(f, "{:?}", v),
            CliArg::Float(v) => write!(f, "{:?}", v),
            CliArg::Bool(v) => write!(f, "{:?}", v),
            CliArg::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// `--level` beats `--env-file`, which beats `fallback` (the process env).
fn resolve_config<F>(args: &Args, fallback: F) -> Result<LoggerConfig>
where
    F: FnOnce() -> LoggerConfig,
{
    if let Some(level) = &args.level {
        return Ok(LoggerConfig::new(level.clone()));
    }
    if let Some(path) = &args.env_file {
        let config = LoggerConfig::from_env_file(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        if config.level.is_some() {
            return Ok(config);
        }
    }
    Ok(fallback())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let config = resolve_config(&args, LoggerConfig::from_env)?;
    let logger = Logger::new(&config);

    let (level, emit) = match &args.command {
        Command::Threshold => {
            println!("{}", logger.threshold());
            return Ok(());
        }
        Command::Error(emit) => (Level::Error, emit),
        Command::Warn(emit) => (Level::Warn, emit),
        Command::Info(emit) => (Level::Info, emit),
        Command::Debug(emit) => (Level::Debug, emit),
    };

    let extra: Vec<CliArg> = emit.args.iter().map(|a| CliArg::parse(a)).collect();
    let refs: Vec<&dyn fmt::Debug> = extra.iter().map(|a| a as &dyn fmt::Debug).collect();
    logger.log(level, &emit.message, &refs);

    Ok(())
}
