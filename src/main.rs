use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tagquery::{config::DEFAULT_MAX_DEPTH, format_answers, run_batch, ParserConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Answer attribute queries against tagged markup", long_about = None)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Reject end tags that do not match their start tag
    #[arg(long)]
    strict_end_tags: bool,

    /// Maximum element nesting and query depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() {
    // Logs go to stderr; stdout carries only answers
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = ParserConfig::default()
        .with_max_depth(args.max_depth)
        .with_strict_end_tags(args.strict_end_tags);

    let input = read_input(args.input.as_ref())?;
    let answers = run_batch(&input, &config).context("malformed input")?;
    info!(answers = answers.len(), "writing answers");

    write_output(args.output.as_ref(), format_answers(&answers).as_bytes())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => io::stdout()
            .write_all(data)
            .context("failed to write stdout"),
    }
}
