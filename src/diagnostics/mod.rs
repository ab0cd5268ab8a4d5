use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

use crate::encode::diagnostic::Diagnostic;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("duplicate test name '{name}'")]
    DuplicateTestName { name: String },

    #[error("no test named '{name}'")]
    UnknownTest { name: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("config error: {msg}")]
    Config { msg: String, path: PathBuf },

    #[error("invalid diagnostic: {msg}")]
    InvalidDiagnostic { msg: String },

    #[error("failed to serialize catalogue: {source}")]
    Serialize { source: serde_json::Error },
}

impl FixtureError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTestName { name: name.into() }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownTest { name: name.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn config(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Config { msg: msg.into(), path }
    }

    pub fn invalid_diagnostic(msg: impl Into<String>) -> Self {
        Self::InvalidDiagnostic { msg: msg.into() }
    }
}

/// The text printed on stderr for a failed run: `error: <msg>`, followed by the offending
/// file for errors that have one.
pub fn format_error(err: &FixtureError) -> String {
    match err {
        FixtureError::Config { path, .. } => format!("error: {err}\n  --> {}", path.display()),
        _ => format!("error: {err}"),
    }
}

pub fn render_error(err: &FixtureError) {
    eprintln!("{}", format_error(err));
}

/// Byte range of the 1-based `line` in `source`, without its newline.
pub fn line_range(source: &str, line: u32) -> Option<Range<usize>> {
    let mut start = 0;
    for (i, text) in source.split('\n').enumerate() {
        if i + 1 == line as usize {
            return Some(start..start + text.len());
        }
        start += text.len() + 1;
    }
    None
}

/// Render an expected diagnostic against its fixture source with ariadne, on stderr.
/// Diagnostics without a line (missing main) are printed plainly.
pub fn render_expected(source: &str, name: &str, diag: &Diagnostic) {
    use ariadne::{Label, Report, ReportKind, Source};

    let span = diag.line().and_then(|line| line_range(source, line));
    match span {
        Some(span) => {
            let report = Report::build(ReportKind::Error, (), span.start)
                .with_message(format!("expected diagnostic for {name}"))
                .with_label(Label::new(span).with_message(diag.kind().to_string()))
                .finish();
            if let Err(err) = report.eprint(Source::from(source)) {
                eprintln!("error: {err}");
            }
        }
        None => eprintln!("expected diagnostic for {name}: {diag}"),
    }
}
