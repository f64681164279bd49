//! Diagnostic accumulation for generation requests.
//!
//! The core never aborts a generation mid-file: malformed input degrades to a
//! best-effort classification and the problem is recorded here. The host owns
//! the reporting channel (build log, exit status); this crate only collects.

use std::fmt;

/// How serious a diagnostic is. Everything the core itself produces is a
/// warning; `Error` exists for hosts that fold their own failures into the
/// same report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// What went wrong while processing one entity description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    /// A name listed in `plain_fields`/`serialized_fields` has no entry in
    /// the `fields` mapping.
    #[error("field `{field}` is not declared on `{entity}`; using Object")]
    UnresolvedField { entity: String, field: String },

    /// `serialized_fields` and `serializers` differ in length; pairing
    /// stopped at the shorter list.
    #[error("serialized fields and serializers differ in length; unmatched: {}", unmatched.join(", "))]
    SerializerArityMismatch { unmatched: Vec<String> },

    /// A generic type descriptor carried the wrong number of type arguments.
    #[error(
        "field `{field}`: `{qualified_name}` has {actual} type argument(s), expected {expected}"
    )]
    MalformedGenericSpec {
        field: String,
        qualified_name: String,
        expected: usize,
        actual: usize,
    },

    /// Strict mode only: a serializer reference is not a dotted class token.
    #[error("serializer reference `{reference}` for field `{field}` is not a class token")]
    InvalidSerializerToken { field: String, reference: String },
}

/// One diagnostic, tagged with severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.kind)
    }
}

/// Diagnostics accumulated for a single generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, kind: DiagnosticKind) {
        self.items.push(Diagnostic {
            severity: Severity::Warning,
            kind,
        });
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if any accumulated diagnostic matches the predicate.
    pub fn any(&self, mut pred: impl FnMut(&DiagnosticKind) -> bool) -> bool {
        self.items.iter().any(|d| pred(&d.kind))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
