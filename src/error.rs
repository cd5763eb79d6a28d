//! Validation result type shared by every validator.
//!
//! A validator returns `Ok(())` when the value passes and a [`ValidationError`]
//! describing the call when it does not. Inputs that cannot be parsed at all
//! (a cron string with the wrong number of fields, a name that cannot be
//! IDNA-encoded) are reported the same way, with [`ValidationError::reason`]
//! explaining what went wrong.

use serde::Serialize;
use std::fmt;

/// Outcome of a single validation.
pub type Validated = Result<(), ValidationError>;

/// A failed validation: which validator ran, with what arguments, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    func: &'static str,
    args: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ValidationError {
    pub fn new(func: &'static str) -> Self {
        Self {
            func,
            args: Vec::new(),
            reason: None,
        }
    }

    /// Record an argument the validator was called with.
    pub fn arg(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    /// Attach a human readable reason (used for unparseable input).
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Name of the validator that rejected the value.
    pub fn func(&self) -> &'static str {
        self.func
    }

    /// Arguments the validator was called with, in call order.
    pub fn args(&self) -> &[(&'static str, String)] {
        &self.args
    }

    /// Value of a named argument, if it was recorded.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(arg, _)| *arg == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidationError(func={}, args={{", self.func)?;
        for (idx, (name, value)) in self.args.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': '{}'", name, value)?;
        }
        write!(f, "}}")?;
        if let Some(reason) = &self.reason {
            write!(f, ", reason='{}'", reason)?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ValidationError {}

/// Turn a boolean check into a [`Validated`] result.
///
/// The error is built lazily so passing values never allocate.
pub(crate) fn ensure(ok: bool, err: impl FnOnce() -> ValidationError) -> Validated {
    if ok {
        Ok(())
    } else {
        Err(err())
    }
}
