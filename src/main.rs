//! Paramedit - edit a remote robot's parameter file from the terminal.
//!
//! # Usage
//!
//! ```bash
//! paramedit --server robot.local:8000 --fetch
//! paramedit --server 10.0.0.5:8000 --save
//! paramedit --log-file paramedit.log
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use paramedit::app::App;
use paramedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// Edit a remote parameter file in the terminal
#[derive(Parser, Debug)]
#[command(name = "paramedit", version, about, long_about = None)]
struct Cli {
    /// Server address as host:port
    #[arg(long, value_name = "HOST:PORT")]
    server: Option<String>,

    /// Path that returns the raw file
    #[arg(long, value_name = "PATH")]
    read_path: Option<String>,

    /// Path that accepts the new-data form
    #[arg(long, value_name = "PATH")]
    save_path: Option<String>,

    /// How long read/save status stays visible, in milliseconds
    #[arg(long, value_name = "MS")]
    status_ms: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Read the file as soon as the editor starts
    #[arg(long)]
    fetch: bool,

    /// Write log events to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

// The terminal is owned by the UI, so events only go somewhere when a log
// file is configured.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::sink),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;
    tracing::info!(
        server = effective.server(),
        global = %global_path.display(),
        "starting"
    );

    let mut app = App::new(effective.server())
        .with_endpoints(effective.endpoints())
        .with_status_duration(effective.status_duration())
        .with_request_timeout(effective.timeout())
        .with_fetch_on_start(effective.fetch_on_start);

    app.run().context("Application error")
}
