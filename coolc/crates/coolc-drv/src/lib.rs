//! coolc-drv - Scanner driver.
//!
//! Thin I/O wrapper around [`coolc_lex`]: opens the source file, runs the
//! scan, and writes the token stream to a `<path>-lex` sidecar file. All
//! process-level concerns live here — diagnostic formatting against the
//! file name, exit-code mapping, logging — so the core stays
//! side-effect-free.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use coolc_lex::{LexError, Lexer, Token};

/// Errors surfaced by a driver run, each mapped to a process exit code.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The input file could not be opened.
    #[error("error: could not open file {}", path.display())]
    OpenInput {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The sidecar output file could not be created.
    #[error("error: could not open output file {}", path.display())]
    CreateOutput {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing to the sidecar output file failed.
    #[error("error: could not write output file {}", path.display())]
    WriteOutput {
        /// Path that failed to be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The scan itself failed.
    #[error("{}:{}: error: {}", path.display(), line, source)]
    Lex {
        /// The input file being scanned.
        path: PathBuf,
        /// Line the error was detected on.
        line: u32,
        /// The lexical or resource error.
        source: LexError,
    },
}

impl DriverError {
    /// The documented process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::OpenInput { .. }
            | DriverError::CreateOutput { .. }
            | DriverError::WriteOutput { .. } => 2,
            DriverError::Lex { source, .. } => source.exit_code(),
        }
    }
}

/// Scans `path` and writes its token stream to the `<path>-lex` sidecar.
///
/// Tokens are written one at a time as they are produced; nothing is
/// buffered beyond the output writer, and output already written before
/// an error is not guaranteed complete.
///
/// # Errors
///
/// Returns a [`DriverError`] carrying the exit code: 2 for any file
/// open/create/write failure, otherwise the scanned error's own code.
pub fn run(path: &Path) -> Result<(), DriverError> {
    let input = File::open(path).map_err(|e| DriverError::OpenInput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let out_path = sidecar_path(path);
    let output = File::create(&out_path).map_err(|e| DriverError::CreateOutput {
        path: out_path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(output);

    debug!(input = %path.display(), output = %out_path.display(), "starting scan");

    let mut lexer = Lexer::new(input);
    let mut count: usize = 0;

    loop {
        let token = match lexer.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(e) => {
                let line = e.line().unwrap_or_else(|| lexer.line());
                return Err(DriverError::Lex {
                    path: path.to_path_buf(),
                    line,
                    source: e,
                });
            },
        };

        write_token(&mut writer, &token).map_err(|e| DriverError::WriteOutput {
            path: out_path.clone(),
            source: e,
        })?;
        count += 1;
    }

    writer.flush().map_err(|e| DriverError::WriteOutput {
        path: out_path.clone(),
        source: e,
    })?;

    debug!(tokens = count, "scan complete");

    Ok(())
}

/// Returns the sidecar path for an input: the same path with `-lex`
/// appended (`main.cl` -> `main.cl-lex`).
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push("-lex");
    PathBuf::from(name)
}

/// Writes one token in the sidecar format: the line number on its own
/// line, then the canonical token name, then — for identifier, type,
/// integer and string tokens — the lexeme on a further line. String
/// content is written byte for byte, so non-ASCII values are not
/// re-encoded.
pub fn write_token<W: Write>(writer: &mut W, token: &Token) -> io::Result<()> {
    writeln!(writer, "{}", token.line)?;
    writeln!(writer, "{}", token.kind.name())?;
    if let Some(bytes) = token.kind.text_bytes() {
        writer.write_all(bytes)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
