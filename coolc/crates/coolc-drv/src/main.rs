//! coolc-lex CLI - scans one Cool source file into a token stream.
//!
//! Usage: `coolc-lex <file>`. On success the token stream lands in
//! `<file>-lex` and the process exits with 0; any failure exits with the
//! documented code for its kind (1 for usage errors, 2 for file I/O, 3-9
//! for lexical errors).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Lexical analyzer for Cool source files.
///
/// Writes the token stream of FILE to FILE-lex.
#[derive(Parser, Debug)]
#[command(name = "coolc-lex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for Cool source files", long_about = None)]
struct Cli {
    /// Path to the Cool source file to scan
    file: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not usage errors.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        },
    };

    init_logging();

    if let Err(e) = coolc_drv::run(&cli.file) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}

/// Initializes the logging system.
///
/// Quiet by default; `RUST_LOG=debug` traces scan progress.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
