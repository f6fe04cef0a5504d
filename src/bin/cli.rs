//! advlock CLI
//!
//! Command-line interface for the advisory lock service.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use advlock::{Config, LockClient};

/// advlock CLI
#[derive(Parser, Debug)]
#[command(name = "advlock-cli")]
#[command(about = "CLI for the advisory named-lock service")]
#[command(version)]
struct Args {
    /// Server endpoint (host:port or tcp://host:port)
    #[arg(short, long, default_value = "127.0.0.1:49915")]
    server: String,

    /// Connect timeout in seconds
    #[arg(long, default_value = "60")]
    connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, default_value = "4")]
    read_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Acquire the lock for a key
    Set {
        /// The lock key
        key: String,
    },

    /// Release the lock for a key
    Del {
        /// The lock key
        key: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,advlock=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .endpoint(&args.server)
        .connect_timeout(Duration::from_secs(args.connect_timeout))
        .read_timeout(Duration::from_secs(args.read_timeout))
        .build();

    let mut client = LockClient::with_config(config);

    let result = match &args.command {
        Commands::Set { key } => client.set(key.as_bytes()),
        Commands::Del { key } => client.del(key.as_bytes()),
    };

    match (result, &args.command) {
        (Ok(true), Commands::Set { key }) => {
            println!("acquired {}", key);
            ExitCode::SUCCESS
        }
        (Ok(false), Commands::Set { key }) => {
            println!("not acquired {}", key);
            ExitCode::FAILURE
        }
        (Ok(true), Commands::Del { key }) => {
            println!("released {}", key);
            ExitCode::SUCCESS
        }
        (Ok(false), Commands::Del { key }) => {
            println!("not released {}", key);
            ExitCode::FAILURE
        }
        (Err(e), _) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
