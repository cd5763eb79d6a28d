//! Securities identifiers: CUSIP, ISIN and SEDOL.

use crate::error::{ensure, Validated, ValidationError};

const SEDOL_WEIGHTS: [u32; 7] = [1, 3, 1, 7, 3, 9, 1];

/// Value of an alphanumeric character: `0-9` as is, letters of either case
/// from 10.
fn alnum_value(c: char) -> Option<u32> {
    c.to_digit(36)
}

fn cusip_checksum(value: &str) -> bool {
    let mut check = 0;
    for (idx, c) in value.chars().enumerate() {
        let val = match c {
            '*' => 36,
            '@' => 37,
            '#' => 38,
            c => match alnum_value(c) {
                Some(v) => v,
                None => return false,
            },
        };
        let val = if idx % 2 == 1 { val * 2 } else { val };
        check += val / 10 + val % 10;
    }
    check % 10 == 0
}

/// Luhn check over a string of ASCII digits.
pub(crate) fn luhn(digits: &str) -> bool {
    let mut sum = 0;
    for (idx, c) in digits.chars().rev().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if idx % 2 == 1 {
            let doubled = d * 2;
            doubled / 10 + doubled % 10
        } else {
            d
        };
    }
    sum % 10 == 0
}

fn isin_checksum(value: &str) -> bool {
    let mut chars = value.chars();
    let country_ok = chars.by_ref().take(2).all(|c| c.is_ascii_alphabetic());
    if !country_ok || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    let expanded: String = value
        .chars()
        .filter_map(alnum_value)
        .map(|v| v.to_string())
        .collect();
    luhn(&expanded)
}

fn sedol_checksum(value: &str) -> bool {
    let mut check = 0;
    for (c, weight) in value.chars().zip(SEDOL_WEIGHTS) {
        if "AEIOU".contains(c) {
            return false;
        }
        let val = match c {
            '0'..='9' | 'A'..='Z' => alnum_value(c).unwrap_or_default(),
            _ => return false,
        };
        check += val * weight;
    }
    check % 10 == 0
}

/// CUSIP: 9 characters with a doubled-alternate digit-sum check.
///
/// ```
/// use validators::cusip;
///
/// assert!(cusip("037833DP2").is_ok());
/// assert!(cusip("037833DP3").is_err());
/// ```
pub fn cusip(value: &str) -> Validated {
    ensure(
        value.chars().count() == 9 && cusip_checksum(value),
        || ValidationError::new("cusip").arg("value", value),
    )
}

/// ISIN: country prefix, 9 alphanumerics and a Luhn check digit.
///
/// ```
/// use validators::isin;
///
/// assert!(isin("US0378331005").is_ok());
/// assert!(isin("US0378331004").is_err());
/// ```
pub fn isin(value: &str) -> Validated {
    ensure(
        value.chars().count() == 12 && isin_checksum(value),
        || ValidationError::new("isin").arg("value", value),
    )
}

/// SEDOL: 7 characters without vowels, weighted mod-10 check.
///
/// ```
/// use validators::sedol;
///
/// assert!(sedol("2936921").is_ok());
/// assert!(sedol("29A6922").is_err());
/// ```
pub fn sedol(value: &str) -> Validated {
    ensure(
        value.chars().count() == 7 && sedol_checksum(value),
        || ValidationError::new("sedol").arg("value", value),
    )
}
