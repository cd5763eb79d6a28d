//! String length bounds.

use crate::between::between;
use crate::error::{Validated, ValidationError};

/// Check that the number of characters in `value` is within `[min, max]`.
///
/// Characters are Unicode scalar values, not bytes.
pub fn length(value: &str, min: Option<usize>, max: Option<usize>) -> Validated {
    between(value.chars().count(), min, max).map_err(|inner| {
        let mut err = ValidationError::new("length").arg("value", value);
        if let Some(min) = min {
            err = err.arg("min_val", min);
        }
        if let Some(max) = max {
            err = err.arg("max_val", max);
        }
        match inner.reason() {
            Some(reason) => err.with_reason(reason),
            None => err,
        }
    })
}
