//! Savekit command line entry point
//!
//! Saves, loads and deletes JSON values by key. Storage options come from
//! flags or the `SAVEKIT_*` environment variables. Logging follows `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use savekit::config::DEFAULT_LOCAL_PATH;
use savekit::persistence::Result;
use savekit::{PersistenceManager, SerializationOptions, StorageConfig};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "savekit")]
#[command(about = "Typed key-value save/load", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding local save slots
    #[arg(long, env = "SAVEKIT_DIR", default_value = DEFAULT_LOCAL_PATH)]
    dir: PathBuf,

    /// Remote store identifier; routes all commands to the remote backend
    #[arg(long, env = "SAVEKIT_REMOTE")]
    remote: Option<String>,

    /// Pretty-print stored envelopes
    #[arg(long, env = "SAVEKIT_PRETTY", value_parser = BoolishValueParser::new())]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a JSON value under a key
    Save {
        key: String,
        #[arg(value_parser = parse_json)]
        value: Value,
    },
    /// Print the value stored under a key, or the default (null if omitted)
    Load {
        key: String,
        #[arg(value_parser = parse_json)]
        default: Option<Value>,
    },
    /// Remove the value stored under a key
    Delete { key: String },
}

fn parse_json(arg: &str) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_str(arg)
}

impl Cli {
    fn storage_config(&self) -> StorageConfig {
        let remote = self.remote.clone().filter(|r| !r.is_empty());
        StorageConfig {
            local_path: self.dir.clone(),
            use_remote: remote.is_some(),
            remote_id: remote.unwrap_or_default(),
            serialization: SerializationOptions {
                pretty: self.pretty,
            },
        }
    }
}

fn run(manager: &PersistenceManager, command: Command) -> Result<()> {
    match command {
        Command::Save { key, value } => {
            manager.save(&key, &value)?;
            log::info!("Saved '{}'", key);
        }
        Command::Load { key, default } => {
            let value: Value = manager.load(&key, default.unwrap_or(Value::Null))?;
            println!("{}", value);
        }
        Command::Delete { key } => {
            if !manager.delete(&key)? {
                log::info!("Nothing stored under '{}'", key);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let manager = PersistenceManager::new(cli.storage_config());
    log::debug!("Storage config: {:?}", manager.config());

    match run(&manager, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
