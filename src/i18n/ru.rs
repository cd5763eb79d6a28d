//! Russian taxpayer identification number (INN).

use crate::error::{ensure, Validated, ValidationError};

const COMPANY_WEIGHTS: [u32; 10] = [2, 4, 10, 3, 5, 9, 4, 6, 8, 0];
const PERSON_WEIGHTS_11: [u32; 12] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0, 0];
const PERSON_WEIGHTS_12: [u32; 12] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];

/// Weighted sum mod 11, reduced mod 10.
fn control_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    sum % 11 % 10
}

fn inn_checksum(value: &str) -> bool {
    let Some(digits) = value
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    match digits.len() {
        10 => control_digit(&digits, &COMPANY_WEIGHTS) == digits[9],
        12 => {
            control_digit(&digits, &PERSON_WEIGHTS_11) == digits[10]
                && control_digit(&digits, &PERSON_WEIGHTS_12) == digits[11]
        }
        _ => false,
    }
}

/// INN: 10 digits for companies, 12 for individuals.
///
/// ```
/// use validators::ru_inn;
///
/// assert!(ru_inn("500100732259").is_ok());
/// assert!(ru_inn("7830002293").is_ok());
/// assert!(ru_inn("1234567890").is_err());
/// ```
pub fn ru_inn(value: &str) -> Validated {
    ensure(inn_checksum(value), || {
        ValidationError::new("ru_inn").arg("value", value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inn() {
        for value in ["500100732259", "7830002293", "2222058686", "7707083893"] {
            assert!(ru_inn(value).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_invalid_inn() {
        for value in [
            "",
            "1234567890",
            "500100732258",
            "500100732269",
            "78300022",
            "783000229a",
        ] {
            assert!(ru_inn(value).is_err(), "{value}");
        }
    }
}
