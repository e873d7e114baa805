//! Vela compiler frontend
//!
//! The pipeline is single-pass: the lexer turns source text into tokens,
//! and the parser recognizes the grammar while driving the semantic
//! actions inline, so the returned module is already name-resolved and
//! type-checked. All diagnostics flow through one engine; compilation is
//! considered failed iff its error counter is nonzero.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod sema;

use thiserror::Error;

use ast::{Ast, DeclId};
use diagnostics::DiagnosticEngine;

/// Failures of the compilation driver itself, as opposed to diagnostics
/// about the compiled source.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("source file {path} exceeds the maximum size of {limit} bytes")]
    TooLarge { path: String, limit: u64 },
}

/// The result of checking one source file: the arena owning every node,
/// the root module (if the header was recognized), and all diagnostics.
#[derive(Debug)]
pub struct CompilationUnit {
    pub ast: Ast,
    pub module: Option<DeclId>,
    pub diagnostics: DiagnosticEngine,
}

impl CompilationUnit {
    /// Whether the unit compiled without errors. Warnings and notes do
    /// not count.
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Run the whole front end over one source text.
pub fn check_source(source: &str) -> CompilationUnit {
    let mut diagnostics = DiagnosticEngine::new();
    let tokens = lexer::tokenize(source, &mut diagnostics);
    let (ast, module) = parser::parse(&tokens, &mut diagnostics);
    tracing::debug!(
        errors = diagnostics.error_count(),
        "front end finished"
    );
    CompilationUnit {
        ast,
        module,
        diagnostics,
    }
}
