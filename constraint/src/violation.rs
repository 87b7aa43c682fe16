//! Invariant violation types.

use std::fmt;

/// Severity of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationSeverity {
    /// Hard rule - the change must be rejected.
    Error,
    /// Soft rule - the change is accepted as a no-op.
    Warning,
}

/// The rule a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The trailing byte of an area address must be zero.
    NselNonZero,
    /// Every area address must carry the router's system ID.
    SystemIdMismatch,
    /// Area tags are unique.
    AreaTagExists,
    /// An area lists each prefix once.
    DuplicateAreaAddress,
    /// A circuit stays in the area it was first attached to.
    CircuitReassignment,
    /// An operational circuit's level must be one its area runs.
    CircuitLevelMismatch,
    /// An interface must name a configured area.
    UnknownArea,
    /// LSPs must be refreshed well before they expire.
    LspLifetime,
    /// Password length bounds.
    PasswordLength,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::NselNonZero => "nsel-non-zero",
            Rule::SystemIdMismatch => "system-id-mismatch",
            Rule::AreaTagExists => "area-tag-exists",
            Rule::DuplicateAreaAddress => "duplicate-area-address",
            Rule::CircuitReassignment => "circuit-reassignment",
            Rule::CircuitLevelMismatch => "circuit-level-mismatch",
            Rule::UnknownArea => "unknown-area",
            Rule::LspLifetime => "lsp-lifetime",
            Rule::PasswordLength => "password-length",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: Rule,
    pub severity: ViolationSeverity,
    /// Human-readable message describing the violation.
    pub message: String,
}

impl Violation {
    pub fn new(rule: Rule, severity: ViolationSeverity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
        }
    }

    /// Create an error-level violation.
    pub fn error(rule: Rule, message: impl Into<String>) -> Self {
        Self::new(rule, ViolationSeverity::Error, message)
    }

    /// Create a warning-level violation.
    pub fn warning(rule: Rule, message: impl Into<String>) -> Self {
        Self::new(rule, ViolationSeverity::Warning, message)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, ViolationSeverity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, ViolationSeverity::Warning)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Check if there are any error-level violations.
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.is_error())
    }

    /// Check if there are only warnings.
    pub fn has_only_warnings(&self) -> bool {
        !self.violations.is_empty() && !self.has_errors()
    }

    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_warning())
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }

    /// Fail with the first error-level violation, if any.
    pub fn into_result(self) -> Result<(), Violation> {
        match self.violations.into_iter().find(Violation::is_error) {
            Some(v) => Err(v),
            None => Ok(()),
        }
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
