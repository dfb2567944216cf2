//! The `murmur` binary: two front ends over the same invoker.
//!
//! - `murmur transcribe <audio> [--model NAME]` — interactive path.
//!   Catches every failure and prints it; the exit status does not
//!   distinguish success from failure.
//! - `murmur handle [--event FILE]` — event-triggered path. Reads a
//!   trigger-event JSON document (file or stdin), runs the pipeline
//!   against the filesystem store, and propagates any failure to the
//!   hosting runtime as a non-zero exit.
//!
//! The asymmetry is deliberate: the two front ends have different
//! failure-reporting contracts.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use murmur_core::TriggerEvent;
use murmur_handler::{Config, handle_event};
use murmur_store::FsObjectStore;
use murmur_transcribe::{DEFAULT_MODEL, Transcriber};

#[derive(Parser)]
#[command(name = "murmur", about = "Bucket-triggered whisper transcription worker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe a local audio file and print the result.
    Transcribe {
        /// Path to the audio file.
        audio: PathBuf,
        /// Model name (artifact at models/ggml-<name>.bin).
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
    },
    /// Handle one object-created trigger event.
    Handle {
        /// Read the event JSON from this file instead of stdin.
        #[arg(long)]
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Transcribe { audio, model } => {
            let transcriber = Transcriber::from_env();
            // Broad catch: print the outcome either way, exit 0 regardless.
            match transcriber.transcribe(&audio, &model).await {
                Ok(text) => println!("{text}"),
                Err(e) => println!("Error: {e}"),
            }
            Ok(())
        }
        Command::Handle { event } => {
            let raw = match event {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    let _ = std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let event = TriggerEvent::from_json(&raw)?;

            let config = Config::from_env();
            let store = FsObjectStore::new(&config.store_root);
            let transcriber = Transcriber::new(&config.task_root, &config.model_dir);

            // No catch on this path: any failure fails the invocation.
            let response = handle_event(&store, &transcriber, &config, &event).await?;
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
    }
}
