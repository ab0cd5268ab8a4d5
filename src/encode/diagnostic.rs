use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;

use crate::diagnostics::FixtureError;
use crate::types::{Type, join_types};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Variable,
    Function,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Function => write!(f, "function"),
        }
    }
}

/// The analyzer's error taxonomy. The `Display` text is the message part of the
/// diagnostic line, without the `line N: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    #[error("variable {name} is not defined")]
    UndefinedVariable { name: String },

    #[error("function {name} is not defined")]
    UndefinedFunction { name: String },

    /// Same-scope redeclaration, a local reusing a parameter name, or a redeclared function.
    #[error("symbol {name} is already defined")]
    DuplicateSymbol { name: String },

    /// Incompatible assignment, implicit narrowing, non-bool condition, or a return that
    /// disagrees with the function's return type.
    #[error("type mismatch")]
    TypeMismatch,

    #[error("{ty} value {value} out of range")]
    LiteralOutOfRange { ty: Type, value: i64 },

    #[error("unexpected break statement")]
    UnexpectedBreak,

    #[error("unexpected continue statement")]
    UnexpectedContinue,

    #[error("prototype mismatch, function {function} expects parameters ({})", join_types(.params))]
    PrototypeMismatch { function: String, params: Vec<Type> },

    /// `name` was used as the other kind of symbol; `actual` is what it really is.
    #[error("symbol {name} is a {actual}")]
    SymbolKindMismatch { name: String, actual: SymbolKind },

    #[error("Program has no 'void main()' function")]
    MissingMain,
}

/// A single analyzer diagnostic. Every kind except `MissingMain` carries the 1-based
/// line where the violation is detected; `MissingMain` never carries one. The fields are
/// private so the two shapes `Display` produces are the only ones that can exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    line: Option<NonZeroU32>,
    #[serde(flatten)]
    kind: DiagnosticKind,
}

impl Diagnostic {
    /// A located diagnostic. Rejects line 0 and `MissingMain`, which has no line.
    pub fn at(line: u32, kind: DiagnosticKind) -> Result<Self, FixtureError> {
        if kind == DiagnosticKind::MissingMain {
            return Err(FixtureError::invalid_diagnostic(format!("'{kind}' cannot carry a line")));
        }
        let line = NonZeroU32::new(line)
            .ok_or_else(|| FixtureError::invalid_diagnostic(format!("line 0 for '{kind}', lines are 1-based")))?;
        Ok(Self { line: Some(line), kind })
    }

    pub fn missing_main() -> Self {
        Self { line: None, kind: DiagnosticKind::MissingMain }
    }

    pub fn line(&self) -> Option<u32> {
        self.line.map(NonZeroU32::get)
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn undefined_variable(line: u32, name: &str) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::UndefinedVariable { name: name.to_string() })
    }

    pub fn undefined_function(line: u32, name: &str) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::UndefinedFunction { name: name.to_string() })
    }

    pub fn duplicate_symbol(line: u32, name: &str) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::DuplicateSymbol { name: name.to_string() })
    }

    pub fn type_mismatch(line: u32) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::TypeMismatch)
    }

    /// Fails when `value` actually fits in `ty`.
    pub fn literal_out_of_range(line: u32, ty: Type, value: i64) -> Result<Self, FixtureError> {
        if ty.literal_fits(value) {
            return Err(FixtureError::invalid_diagnostic(format!("{value} fits in {ty}")));
        }
        Self::at(line, DiagnosticKind::LiteralOutOfRange { ty, value })
    }

    pub fn unexpected_break(line: u32) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::UnexpectedBreak)
    }

    pub fn unexpected_continue(line: u32) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::UnexpectedContinue)
    }

    pub fn prototype_mismatch(line: u32, function: &str, params: &[Type]) -> Result<Self, FixtureError> {
        Self::at(
            line,
            DiagnosticKind::PrototypeMismatch { function: function.to_string(), params: params.to_vec() },
        )
    }

    pub fn symbol_is(line: u32, name: &str, actual: SymbolKind) -> Result<Self, FixtureError> {
        Self::at(line, DiagnosticKind::SymbolKindMismatch { name: name.to_string(), actual })
    }
}

/// The failure encoding: `line <N>: <message>`, or the bare message for missing main.
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
