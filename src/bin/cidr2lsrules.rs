//! cidr2lsrules: CLI tool for converting CIDR lists into Little Snitch rule files.

use cidr2lsrules::config::{DEFAULT_FLUSH_THRESHOLD, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use cidr2lsrules::{convert_with, ConvertConfig, ConvertSummary};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cidr2lsrules")]
#[command(version)]
#[command(about = "Convert a CIDR list into Little Snitch deny rule files", long_about = None)]
struct Cli {
    /// Newline-delimited CIDR list
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Base output file; written as 1_<name>, 2_<name>, ...
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Rules per output file
    #[arg(short, long, default_value_t = DEFAULT_FLUSH_THRESHOLD)]
    threshold: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> cidr2lsrules::Result<ConvertSummary> {
    let config = ConvertConfig::new(cli.input, cli.output).with_flush_threshold(cli.threshold);
    let summary = convert_with(&config)?;

    println!(
        "Successfully converted {:?} -> {} rules in {} files",
        config.input,
        summary.rule_count,
        summary.file_count()
    );
    Ok(summary)
}
