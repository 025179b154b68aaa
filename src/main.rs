// Entrypoint for the CLI application.
// - Parses flags, loads credentials and builds the API client.
// - Returns `anyhow::Result` so any failure is printed with its cause chain
//   to stderr and the process exits nonzero.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zvm_rpo::api::{self, ApiClient, ClientOptions};
use zvm_rpo::{config, ui};

/// Print the average ActualRPO across all VPGs on a Zerto Virtual Manager.
#[derive(Parser, Debug)]
#[command(name = "zvm-rpo", version)]
struct Cli {
    /// ZVM host name or IP, or a full base URL such as https://zvm:9669
    #[arg(long, default_value = "localhost")]
    server: String,

    /// ZVM REST API port
    #[arg(long, default_value_t = api::DEFAULT_PORT)]
    port: u16,

    /// Path to the JSON credentials file (default: ~/.zvm-rpo.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Accept invalid TLS certificates (self-signed ZVM installs)
    #[arg(long)]
    insecure: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config::default_config_path)
    }

    fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            accept_invalid_certs: self.insecure,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let creds = config::load_credentials(&cli.config_path()).context("reading config")?;
    let mut api = ApiClient::new(api::base_url(&cli.server, cli.port), &cli.client_options())?;

    let avg = ui::report_average_rpo(&mut api, &creds, !cli.quiet)?;
    println!("{}", avg);
    Ok(())
}
