//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::frontend::{self, FrontendError, diagnostics};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (16 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Check one source file: lex, parse, resolve, and type check, printing
/// every diagnostic with source context. The exit code is nonzero iff the
/// error counter is nonzero.
pub fn check_file(path: &Path, dump_tokens: bool) -> CliResult<ExitCode> {
    let display_path = path.display().to_string();
    let source = load_source(path).map_err(|e| CliError::failure(e.to_string()))?;

    if dump_tokens {
        let mut diags = diagnostics::DiagnosticEngine::new();
        for token in frontend::lexer::tokenize(&source, &mut diags) {
            println!("{:?} {:?} {:?}", token.kind, token.span, token.text);
        }
        for diag in diags.diagnostics() {
            diagnostics::print_diagnostic(&display_path, &source, diag);
        }
        let code = if diags.has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
        return Ok(code);
    }

    let unit = frontend::check_source(&source);
    for diag in unit.diagnostics.diagnostics() {
        diagnostics::print_diagnostic(&display_path, &source, diag);
    }

    let errors = unit.diagnostics.error_count();
    if errors > 0 {
        eprintln!(
            "{}: {} error{}",
            display_path,
            errors,
            if errors == 1 { "" } else { "s" }
        );
        return Ok(ExitCode::FAILURE);
    }

    if let Some(module) = unit.module {
        tracing::debug!(module = %unit.ast.decl(module).name, "checked module");
    }
    Ok(ExitCode::SUCCESS)
}

/// Read a source file, enforcing the size cap.
fn load_source(path: &Path) -> Result<String, FrontendError> {
    let display_path = path.display().to_string();
    let metadata = fs::metadata(path).map_err(|source| FrontendError::Io {
        path: display_path.clone(),
        source,
    })?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(FrontendError::TooLarge {
            path: display_path,
            limit: MAX_SOURCE_SIZE,
        });
    }
    fs::read_to_string(path).map_err(|source| FrontendError::Io {
        path: display_path,
        source,
    })
}
