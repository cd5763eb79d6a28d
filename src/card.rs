//! Payment card numbers.

use crate::error::{ensure, Validated, ValidationError};
use crate::finance::luhn;

/// Digits only, passing the Luhn check.
///
/// ```
/// use validators::card_number;
///
/// assert!(card_number("4242424242424242").is_ok());
/// assert!(card_number("4242424242424241").is_err());
/// ```
pub fn card_number(value: &str) -> Validated {
    ensure(is_card_number(value), || {
        ValidationError::new("card_number").arg("value", value)
    })
}

fn is_card_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) && luhn(value)
}

fn brand(func: &'static str, value: &str, prefixes: &[&str], lengths: &[usize]) -> Validated {
    ensure(
        is_card_number(value)
            && lengths.contains(&value.len())
            && prefixes.iter().any(|p| value.starts_with(p)),
        || ValidationError::new(func).arg("value", value),
    )
}

pub fn visa(value: &str) -> Validated {
    brand("visa", value, &["4"], &[16])
}

pub fn mastercard(value: &str) -> Validated {
    brand(
        "mastercard",
        value,
        &[
            "51", "52", "53", "54", "55", "22", "23", "24", "25", "26", "27",
        ],
        &[16],
    )
}

pub fn amex(value: &str) -> Validated {
    brand("amex", value, &["34", "37"], &[15])
}

pub fn unionpay(value: &str) -> Validated {
    brand("unionpay", value, &["62"], &[16])
}

pub fn diners(value: &str) -> Validated {
    brand("diners", value, &["30", "36", "38", "39"], &[14, 16])
}

pub fn jcb(value: &str) -> Validated {
    brand("jcb", value, &["35"], &[16])
}

pub fn discover(value: &str) -> Validated {
    brand("discover", value, &["60", "64", "65"], &[16])
}

pub fn mir(value: &str) -> Validated {
    brand(
        "mir",
        value,
        &["2200", "2201", "2202", "2203", "2204"],
        &[16],
    )
}
