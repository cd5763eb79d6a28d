//! Five-field cron expressions.

use crate::error::{Validated, ValidationError};

/// Field name and inclusive bounds, in field order.
const FIELDS: [(&str, u32, u32); 5] = [
    ("minute", 0, 59),
    ("hour", 0, 23),
    ("day", 1, 31),
    ("month", 1, 12),
    ("weekday", 0, 6),
];

fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn in_range(s: &str, min: u32, max: u32) -> bool {
    parse_number(s).is_some_and(|n| (min..=max).contains(&n))
}

/// `a-b` with both ends in bounds and `a <= b`.
fn is_valid_range(s: &str, min: u32, max: u32) -> bool {
    let Some((start, end)) = s.split_once('-') else {
        return false;
    };
    match (parse_number(start), parse_number(end)) {
        (Some(start), Some(end)) => {
            (min..=max).contains(&start) && (min..=max).contains(&end) && start <= end
        }
        _ => false,
    }
}

fn is_valid_item(item: &str, min: u32, max: u32) -> bool {
    if item == "*" || in_range(item, min, max) {
        return true;
    }

    if let Some((base, step)) = item.split_once('/') {
        if !parse_number(step).is_some_and(|n| n >= 1) {
            return false;
        }
        return base == "*" || in_range(base, min, max) || is_valid_range(base, min, max);
    }

    is_valid_range(item, min, max)
}

fn is_valid_field(field: &str, min: u32, max: u32) -> bool {
    field.split(',').all(|item| is_valid_item(item, min, max))
}

/// Cron expression: minute, hour, day of month, month, day of week.
///
/// ```
/// use validators::cron;
///
/// assert!(cron("*/5 * * * *").is_ok());
/// assert!(cron("30-20 * * * *").is_err());
/// ```
pub fn cron(value: &str) -> Validated {
    let err = || ValidationError::new("cron").arg("value", value);

    if value.is_empty() {
        return Err(err());
    }

    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() != FIELDS.len() {
        return Err(err().with_reason("Badly formatted cron string"));
    }

    for (field, (name, min, max)) in fields.iter().zip(FIELDS) {
        if !is_valid_field(field, min, max) {
            tracing::trace!(field, name, "Invalid cron field");
            return Err(err());
        }
    }

    Ok(())
}
