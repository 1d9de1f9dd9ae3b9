//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use crate::annotations::Annotations;
use crate::config::OutputConfig;
use crate::lexer;
use crate::registry::{self, AnnotationRegistry, MAX_SOURCE_SIZE, RegistryError};
use crate::render;

use super::{CliError, CliResult, ExitCode};

/// Read an annotation file, rejecting oversized inputs.
fn read_source(path: &Path) -> CliResult<Vec<u8>> {
    registry::read_limited(path, MAX_SOURCE_SIZE).map_err(|err| CliError::failure(format!("Error: {err}")))
}

/// Read and parse a single annotation file, rendering failures with source context.
fn parse_file(path: &Path) -> CliResult<Annotations> {
    let source = read_source(path)?;
    Annotations::parse(&source).map_err(|err| {
        CliError::failure(render::format_error(&path.display().to_string(), &source, &err).trim_end())
    })
}

/// Load a directory as a registry, rendering parse failures with source context.
fn load_registry(dir: &Path) -> CliResult<AnnotationRegistry> {
    AnnotationRegistry::load_dir(dir).map_err(|err| match &err {
        RegistryError::Parse { path, error, .. } => match read_source(path) {
            Ok(source) => {
                CliError::failure(render::format_error(&path.display().to_string(), &source, error).trim_end())
            }
            Err(read_err) => read_err,
        },
        _ => CliError::failure(format!("Error: {err}")),
    })
}

/// Parse every file (directories are searched recursively) and report all failures.
pub fn check_paths(paths: &[PathBuf]) -> CliResult<ExitCode> {
    let mut failures = Vec::new();
    let mut checked = 0usize;

    for path in paths {
        let result = if path.is_dir() {
            load_registry(path).map(|registry| {
                registry.packages().map(|(_, annotations)| annotations.len()).sum::<usize>()
            })
        } else {
            parse_file(path).map(|annotations| annotations.len())
        };
        match result {
            Ok(entries) => {
                checked += 1;
                tracing::debug!(path = %path.display(), entries, "annotations ok");
            }
            Err(err) => failures.push(err.message),
        }
    }

    if failures.is_empty() {
        println!("✓ {checked} path(s) checked, no errors");
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(failures.join("\n\n")))
    }
}

/// Print the mapping of a file, or of every package in a directory.
pub fn dump(path: &Path, config: &OutputConfig) -> CliResult<ExitCode> {
    let rendered = if path.is_dir() {
        render::render_registry(&load_registry(path)?, config)
    } else {
        render::render_annotations(&parse_file(path)?, config)
    }
    .map_err(|e| CliError::failure(format!("Error serializing output: {e}")))?;

    print!("{rendered}");
    Ok(ExitCode::SUCCESS)
}

/// Print the signature of one symbol path.
pub fn lookup(path: &Path, symbol: &str) -> CliResult<ExitCode> {
    let annotations = parse_file(path)?;
    match annotations.get(symbol) {
        Some(signature) => {
            println!("{signature}");
            Ok(ExitCode::SUCCESS)
        }
        None => Err(CliError::failure(format!(
            "Error: no annotation for '{}' in '{}'",
            symbol,
            path.display()
        ))),
    }
}

/// Print the token stream with positions.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::tokenize(&source).map_err(|err| {
        CliError::failure(render::format_error(&path.display().to_string(), &source, &err).trim_end())
    })?;

    for token in tokens {
        println!(
            "{:>4}:{:<4} byte {:<6} rune {:<6} {:?}",
            token.line, token.column, token.byte_offset, token.rune_offset, token.rune
        );
    }
    Ok(ExitCode::SUCCESS)
}
