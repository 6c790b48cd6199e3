//! asn-cidrs - list ASNs or extract their CIDR blocks from a local dataset.
//!
//! This is the command-line interface for the asn-cidrs library.

#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use asn_cidrs::{output, run_query, Dataset, OutputFormat, QueryConfig, QueryMode};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Get the version string for asn-cidrs
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the dataset query tool.
///
/// With no arguments every known ASN is listed.
#[derive(Parser, Debug)]
#[clap(author, version = get_version(), about = "List ASNs and extract their CIDR blocks from ASNs.json", long_about = None)]
struct Args {
    /// ASN whose CIDRs should be printed (e.g. AS1234)
    #[clap(conflicts_with = "cidrs")]
    asn: Option<String>,

    /// Print every CIDR in the dataset
    #[clap(long)]
    cidrs: bool,

    /// Dataset to read (default: $ASN_CIDRS_DATA, then ASNs.json next to the executable)
    #[clap(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Output results as a JSON array
    #[clap(long)]
    json: bool,

    /// Enable verbose logging on stderr (repeat for more detail)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Query selected by the arguments
    fn mode(&self) -> QueryMode {
        match (&self.asn, self.cidrs) {
            (Some(asn), _) => QueryMode::AsnCidrs(asn.clone()),
            (None, true) => QueryMode::AllCidrs,
            (None, false) => QueryMode::ListAsns,
        }
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    // A subscriber may already be installed when running under tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Log level for a `-v` count
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the configuration from command-line arguments
fn build_config(args: &Args) -> Result<QueryConfig> {
    let mut builder = QueryConfig::builder()
        .mode(args.mode())
        .format(args.format());

    if let Some(path) = &args.data {
        builder = builder.data_path(path);
    }

    builder.build().context("Invalid configuration")
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    debug!(path = %config.data_path.display(), mode = ?config.mode, "Resolved configuration");

    let dataset = Dataset::load(&config.data_path)?;
    let outcome = run_query(&dataset, &config.mode);

    if let Some(warning) = &outcome.warning {
        eprintln!("Warning: {}.", warning);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = output::render(&mut out, outcome.lines.as_slice(), config.format)
        .and_then(|()| out.flush());

    match written {
        // Output piped into something like `head` that closed early
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write results"),
    }
}
