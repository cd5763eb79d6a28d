//! Indian identity numbers.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static AADHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[2-9]\d{3}\s\d{4}\s\d{4}$").expect("aadhar regex"));
static PAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}\d{4}[A-Z]$").expect("pan regex"));

/// Aadhar number written in three groups of four digits.
///
/// ```
/// use validators::ind_aadhar;
///
/// assert!(ind_aadhar("3675 9834 6015").is_ok());
/// assert!(ind_aadhar("3675 ABVC 2133").is_err());
/// ```
pub fn ind_aadhar(value: &str) -> Validated {
    ensure(AADHAR.is_match(value), || {
        ValidationError::new("ind_aadhar").arg("value", value)
    })
}

/// Permanent account number: five letters, four digits, one letter.
///
/// ```
/// use validators::ind_pan;
///
/// assert!(ind_pan("ABCDE9999K").is_ok());
/// assert!(ind_pan("ABC5d7896B").is_err());
/// ```
pub fn ind_pan(value: &str) -> Validated {
    ensure(PAN.is_match(value), || {
        ValidationError::new("ind_pan").arg("value", value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ind_aadhar() {
        for value in ["3675 9834 6015", "2234 5678 9012"] {
            assert!(ind_aadhar(value).is_ok(), "{value}");
        }
        for value in [
            "",
            "3675 ABVC 2133",
            "1234 5678 9012",
            "367598346015",
            "3675 9834 60155",
        ] {
            assert!(ind_aadhar(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_ind_pan() {
        for value in ["ABCDE9999K", "AAAPL1234C"] {
            assert!(ind_pan(value).is_ok(), "{value}");
        }
        for value in ["", "ABC5d7896B", "abcde9999k", "ABCDE9999KX", "XABCDE9999K"] {
            assert!(ind_pan(value).is_err(), "{value}");
        }
    }
}
