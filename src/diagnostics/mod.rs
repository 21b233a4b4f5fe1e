pub mod error;

use std::fmt;

use crate::ast::{NodeId, Span};

pub use error::{Problem, ProblemCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A problem attached to the declaration it was found on.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub node: NodeId,
    pub span: Span,
    pub severity: Severity,
    pub problem: Problem,
}

impl Diagnostic {
    pub fn error(node: NodeId, span: Span, problem: Problem) -> Self {
        Diagnostic { node, span, severity: Severity::Error, problem }
    }

    pub fn message(&self) -> String {
        self.problem.to_string()
    }

    /// `line:col: severity: message`, positions taken from `source`.
    pub fn render(&self, source: &str) -> String {
        let (start, _) = self.span.to_pos(source);
        format!("{}: {}: {}", start, self.severity, self.problem)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.span, self.problem)
    }
}

/// Receives diagnostics from the placement validator.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
