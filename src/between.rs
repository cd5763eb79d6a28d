//! Range checks over ordered values.

use std::fmt::Display;

use crate::error::{ensure, Validated, ValidationError};

/// Check that `value` lies within `[min, max]`.
///
/// A missing bound is open on that side. At least one bound is required and
/// `min` must not exceed `max`; otherwise the failure carries a reason.
///
/// ```
/// use validators::between;
///
/// assert!(between(13.2, Some(13.0), Some(14.0)).is_ok());
/// assert!(between(500, None, Some(400)).is_err());
/// ```
pub fn between<T>(value: T, min: Option<T>, max: Option<T>) -> Validated
where
    T: PartialOrd + Display,
{
    let err = || {
        let mut err = ValidationError::new("between").arg("value", &value);
        if let Some(min) = &min {
            err = err.arg("min_val", min);
        }
        if let Some(max) = &max {
            err = err.arg("max_val", max);
        }
        err
    };

    match (&min, &max) {
        (None, None) => {
            return Err(err().with_reason(
                "At least one of either `min_val` or `max_val` must be specified",
            ))
        }
        (Some(lo), Some(hi)) if lo > hi => {
            return Err(err().with_reason("`min_val` cannot be greater than `max_val`"))
        }
        _ => {}
    }

    let above_min = min.as_ref().map_or(true, |lo| *lo <= value);
    let below_max = max.as_ref().map_or(true, |hi| value <= *hi);
    ensure(above_min && below_max, err)
}
