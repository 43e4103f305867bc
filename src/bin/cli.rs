//! StackKV Interactive Shell
//!
//! Reads commands from stdin and prints results to stdout.

use std::io::{self, BufWriter};

use clap::Parser;
use stackkv::config::{DEFAULT_NULL_DISPLAY, DEFAULT_PROMPT};
use stackkv::{Config, Session, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// StackKV shell
#[derive(Parser, Debug)]
#[command(name = "stackkv")]
#[command(about = "In-memory key-value store with nested transactions")]
#[command(version)]
struct Args {
    /// Prompt printed before each command
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Text printed when GET finds no value
    #[arg(short, long, default_value = DEFAULT_NULL_DISPLAY)]
    null_display: String,

    /// Suppress the prompt (useful when piping a script)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Logs go to stderr; stdout carries command output only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stackkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("StackKV v{}", stackkv::VERSION);

    let config = Config::builder()
        .prompt(if args.quiet { String::new() } else { args.prompt })
        .null_display(args.null_display)
        .build();

    let mut store = Store::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(&mut store, config, stdin.lock(), BufWriter::new(stdout.lock()));
    match session.run() {
        Ok(executed) => tracing::info!("Session ended after {} commands", executed),
        Err(e) => {
            tracing::error!("Session error: {}", e);
            std::process::exit(1);
        }
    }
}
