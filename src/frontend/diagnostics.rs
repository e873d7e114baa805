//! Diagnostics and error reporting for Vela
//!
//! The catalog is a static table mapping each diagnostic id to a severity
//! and a message template; it is generated once by the `diagnostics!`
//! macro below and never mutated. The engine is the single sink for the
//! whole front end: the lexer, parser, and semantic actions all report
//! through it, and compilation is considered failed when its error counter
//! is nonzero.

use std::fmt;

use crate::frontend::ast::Span;

/// Severity of a diagnostic. Only `Error` increments the error counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

macro_rules! diagnostics {
    ($(($id:ident, $severity:ident, $template:literal),)*) => {
        /// Identifier of a catalog entry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum DiagId {
            $($id,)*
        }

        impl DiagId {
            pub fn severity(self) -> Severity {
                match self {
                    $(DiagId::$id => Severity::$severity,)*
                }
            }

            /// Message template with `{0}`, `{1}`, ... argument slots.
            pub fn template(self) -> &'static str {
                match self {
                    $(DiagId::$id => $template,)*
                }
            }
        }
    };
}

diagnostics! {
    // Lexical
    (UnexpectedCharacter, Error, "unexpected character '{0}'"),
    (UnterminatedComment, Error, "unterminated comment"),
    (IntegerTooLarge, Error, "integer literal '{0}' is out of range"),
    // Syntax
    (Expected, Error, "expected {0} but found {1}"),
    // Declarations and names
    (AlreadyDeclared, Error, "'{0}' is already declared in this scope"),
    (FirstDeclaredHere, Note, "'{0}' was first declared here"),
    (Undeclared, Error, "undeclared name '{0}'"),
    (QualifierNotModule, Error, "'{0}' is not a module and cannot be qualified"),
    (TypeNameExpected, Error, "'{0}' does not name a type"),
    (ConstantValueExpected, Error, "value of constant '{0}' is not constant"),
    (ModuleNameMismatch, Error, "module name '{1}' after END does not match '{0}'"),
    (ProcedureNameMismatch, Error, "procedure name '{1}' after END does not match '{0}'"),
    // Expressions and types
    (OperatorOperandMismatch, Error, "operand types are not compatible with operator '{0}'"),
    (VariableExpected, Error, "'{0}' cannot be used as a variable"),
    (NotCallable, Error, "'{0}' is not a procedure"),
    (NoReturnValue, Error, "procedure '{0}' does not return a value"),
    (DiscardedResult, Warning, "result of function '{0}' is discarded"),
    // Statements
    (AssignmentTypeMismatch, Error, "cannot assign this value to '{0}': the types do not match"),
    (IfConditionNotBoolean, Error, "condition of IF must be of type BOOLEAN"),
    (WhileConditionNotBoolean, Error, "condition of WHILE must be of type BOOLEAN"),
    (ReturnValueUnexpected, Error, "'{0}' does not return a value; RETURN must not carry one"),
    (ReturnValueMissing, Error, "RETURN in function '{0}' requires a value"),
    (ReturnTypeMismatch, Error, "type of RETURN value does not match the return type of '{0}'"),
    // Calls
    (ArgumentCountMismatch, Error, "wrong number of arguments in call of '{0}'"),
    (ArgumentTypeMismatch, Error, "argument {0} in call of '{1}' has the wrong type"),
    (VarArgumentNotVariable, Error, "argument {0} in call of '{1}' must be a variable (VAR parameter)"),
}

/// A reported diagnostic with its rendered message.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub id: DiagId,
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

/// Sink accumulating every diagnostic of a compilation.
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, expanding the catalog template with `args`.
    pub fn report(&mut self, span: Span, id: DiagId, args: &[&dyn fmt::Display]) {
        let severity = id.severity();
        if severity == Severity::Error {
            self.errors += 1;
        }
        self.diagnostics.push(Diagnostic {
            id,
            severity,
            span,
            message: expand_template(id.template(), args),
        });
    }

    /// Number of `Error`-severity diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Expand `{0}`, `{1}`, ... slots in a catalog template.
fn expand_template(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), &arg.to_string());
    }
    out
}

// ============================================================================
// Rendering
// ============================================================================

/// Format a diagnostic with source context as a multi-line string.
pub fn format_diagnostic(file_name: &str, source: &str, diag: &Diagnostic) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, diag.span.start);

    let red = "\x1b[31m";
    let cyan = "\x1b[36m";
    let yellow = "\x1b[33m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    let severity_color = match diag.severity {
        Severity::Error => red,
        Severity::Warning => yellow,
        Severity::Note => cyan,
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{bold}{severity_color}{severity}{reset}{bold}: {message}{reset}\n",
        severity = diag.severity,
        message = diag.message,
    ));
    out.push_str(&format!(
        "  {cyan}-->{reset} {file}:{line}:{col}\n",
        file = file_name,
        line = line_num,
        col = col_num,
    ));

    let line_num_width = line_num.to_string().len();
    out.push_str(&format!(
        "  {cyan}{:>width$} |{reset}\n",
        "",
        width = line_num_width
    ));
    out.push_str(&format!(
        "  {cyan}{:>width$} |{reset} {}\n",
        line_num,
        line_text,
        width = line_num_width
    ));

    let underline_len = diag
        .span
        .end
        .saturating_sub(diag.span.start)
        .clamp(1, line_text.len().saturating_sub(col_num - 1).max(1));
    out.push_str(&format!(
        "  {cyan}{:>width$} |{reset} {}{severity_color}{}{reset}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len),
        width = line_num_width
    ));

    out
}

/// Print a diagnostic to stderr.
pub fn print_diagnostic(file_name: &str, source: &str, diag: &Diagnostic) {
    eprint!("{}", format_diagnostic(file_name, source, diag));
}

/// Get line number, column number, and line text for a byte offset
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}
