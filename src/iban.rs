//! International Bank Account Numbers (ISO 13616).

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static IBAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2}[0-9]{2}[a-z0-9]{11,30}$").expect("iban regex"));

/// ISO 7064 mod 97-10 over the rearranged value, letters expanded to 10..=35.
fn mod_check(value: &str) -> bool {
    let (head, tail) = value.split_at(4);
    let mut remainder = 0u32;
    for c in tail.chars().chain(head.chars()) {
        let Some(v) = c.to_digit(36) else {
            return false;
        };
        remainder = if v < 10 {
            (remainder * 10 + v) % 97
        } else {
            (remainder * 100 + v) % 97
        };
    }
    remainder == 1
}

/// IBAN: country code, check digits and up to 30 alphanumerics.
///
/// ```
/// use validators::iban;
///
/// assert!(iban("DE29100500001061045672").is_ok());
/// assert!(iban("123456").is_err());
/// ```
pub fn iban(value: &str) -> Validated {
    ensure(IBAN.is_match(value) && mod_check(value), || {
        ValidationError::new("iban").arg("value", value)
    })
}
