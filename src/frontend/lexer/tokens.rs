//! Token types for the Vela lexer.
//!
//! `TokenKind` is a fieldless, `Copy` enum; identifier and literal
//! spellings travel in the token's `text` field instead of the kind. This
//! keeps kind comparison trivial and lets the parser declare its
//! synchronization sets as `const` arrays.

use crate::frontend::ast::Span;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,

    // ========== Punctuation and operators ==========
    Plus,
    Minus,
    Star,
    Slash,
    ColonEqual,
    Colon,
    Comma,
    Semi,
    Period,
    Equal,
    /// `#`, the not-equal operator.
    Hash,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LParen,
    RParen,

    // ========== Keywords ==========
    KwAnd,
    KwBegin,
    KwConst,
    KwDiv,
    KwDo,
    KwElse,
    KwEnd,
    KwFrom,
    KwIf,
    KwImport,
    KwMod,
    KwModule,
    KwNot,
    KwOr,
    KwProcedure,
    KwReturn,
    KwThen,
    KwVar,
    KwWhile,

    /// End of input. The token stream always ends with exactly one.
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics ("expected ';' but found 'END'").
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::ColonEqual => ":=",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semi => ";",
            TokenKind::Period => ".",
            TokenKind::Equal => "=",
            TokenKind::Hash => "#",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::KwAnd => "AND",
            TokenKind::KwBegin => "BEGIN",
            TokenKind::KwConst => "CONST",
            TokenKind::KwDiv => "DIV",
            TokenKind::KwDo => "DO",
            TokenKind::KwElse => "ELSE",
            TokenKind::KwEnd => "END",
            TokenKind::KwFrom => "FROM",
            TokenKind::KwIf => "IF",
            TokenKind::KwImport => "IMPORT",
            TokenKind::KwMod => "MOD",
            TokenKind::KwModule => "MODULE",
            TokenKind::KwNot => "NOT",
            TokenKind::KwOr => "OR",
            TokenKind::KwProcedure => "PROCEDURE",
            TokenKind::KwReturn => "RETURN",
            TokenKind::KwThen => "THEN",
            TokenKind::KwVar => "VAR",
            TokenKind::KwWhile => "WHILE",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its kind, source span, and (for identifiers and literals)
/// the source spelling. Fixed tokens carry an empty `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: String::new(),
        }
    }

    pub fn with_text(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }
}

/// Resolve an identifier spelling to a keyword kind, if reserved.
pub fn keyword_kind(name: &str) -> Option<TokenKind> {
    let kind = match name {
        "AND" => TokenKind::KwAnd,
        "BEGIN" => TokenKind::KwBegin,
        "CONST" => TokenKind::KwConst,
        "DIV" => TokenKind::KwDiv,
        "DO" => TokenKind::KwDo,
        "ELSE" => TokenKind::KwElse,
        "END" => TokenKind::KwEnd,
        "FROM" => TokenKind::KwFrom,
        "IF" => TokenKind::KwIf,
        "IMPORT" => TokenKind::KwImport,
        "MOD" => TokenKind::KwMod,
        "MODULE" => TokenKind::KwModule,
        "NOT" => TokenKind::KwNot,
        "OR" => TokenKind::KwOr,
        "PROCEDURE" => TokenKind::KwProcedure,
        "RETURN" => TokenKind::KwReturn,
        "THEN" => TokenKind::KwThen,
        "VAR" => TokenKind::KwVar,
        "WHILE" => TokenKind::KwWhile,
        _ => return None,
    };
    Some(kind)
}
