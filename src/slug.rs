//! URL slugs.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex"));

/// Lowercase alphanumerics joined by single hyphens.
pub fn slug(value: &str) -> Validated {
    ensure(!value.is_empty() && SLUG.is_match(value), || {
        ValidationError::new("slug").arg("value", value)
    })
}
