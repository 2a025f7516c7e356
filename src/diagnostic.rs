//! Diagnostics reported while parsing DDL.
//!
//! Diagnostic codes are serialized and shown to users; never rename them.

use std::fmt;

use serde::Serialize;
use unicode_width::UnicodeWidthChar;

/// 1-based line and column (in characters) of a source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// A CREATE TABLE statement could not be parsed and was skipped
    MalformedStatement,
    /// Multi-column PRIMARY KEY / FOREIGN KEY that the field model cannot hold
    CompositeConstraint,
    /// Column type not in the normalization table, stored as text
    UnknownType,
    /// Foreign key target table is not declared
    UnknownReference,
    /// Constraint names a column or table that does not exist
    UnknownColumn,
    DuplicateTable,
    DuplicateColumn,
    DuplicateForeignKey,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::MalformedStatement => "malformed-statement",
            DiagnosticCode::CompositeConstraint => "composite-constraint",
            DiagnosticCode::UnknownType => "unknown-type",
            DiagnosticCode::UnknownReference => "unknown-reference",
            DiagnosticCode::UnknownColumn => "unknown-column",
            DiagnosticCode::DuplicateTable => "duplicate-table",
            DiagnosticCode::DuplicateColumn => "duplicate-column",
            DiagnosticCode::DuplicateForeignKey => "duplicate-foreign-key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            position: None,
        }
    }

    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Render with the offending source line and a caret under the column.
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        let Some(pos) = self.position else {
            return out;
        };
        let Some(line) = source.lines().nth(pos.line.saturating_sub(1)) else {
            return out;
        };

        let gutter = pos.line.to_string();
        let blank = " ".repeat(gutter.len());

        // Wide characters (CJK identifiers) take two cells; tabs are copied as-is.
        let mut pad = String::new();
        for c in line.chars().take(pos.column.saturating_sub(1)) {
            if c == '\t' {
                pad.push('\t');
            } else {
                pad.push_str(&" ".repeat(c.width().unwrap_or(0)));
            }
        }

        out.push_str(&format!("\n {blank} |\n {gutter} | {line}\n {blank} | {pad}^"));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.severity, self.code.as_str())?;
        if let Some(pos) = self.position {
            write!(f, " {}", pos)?;
        }
        write!(f, ": {}", self.message)
    }
}
