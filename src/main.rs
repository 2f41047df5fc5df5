use std::{fs, process};

use clap::Parser;
use sathi::{Config, config::DEFAULT_MAX_CALL_DEPTH, run_with_config};

/// sathi runs scripts written in Sathi, a small scripting language with
/// Nepali keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the positional argument as source code instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// How many function calls may be nested before the script fails.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Path of the script to run, or the source itself with `--eval`.
    contents: String,
}

/// Installs a `tracing` subscriber writing to standard error, but only when
/// `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let script = if args.eval {
        args.contents
    } else {
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
                                              eprintln!("Failed to read file: {e}");
                                              process::exit(1);
                                          })
    };

    let config = Config { max_call_depth: args.max_call_depth };

    match run_with_config(&script, &config) {
        Ok(output) => {
            for value in output {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        },
    }
}
