//! Spanish fiscal identifiers: CIF, NIF (DNI), NIE and the DOI umbrella.

use crate::error::{ensure, Validated, ValidationError};

const NIF_TABLE: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";
const CIF_TABLE: &[u8; 10] = b"JABCDEFGHI";

/// Shared NIF/NIE check: the first character may stand for a digit, the
/// ninth is `NIF_TABLE[number % 23]`.
fn nif_nie_checksum(value: &str, letter_digit: fn(char) -> Option<char>) -> bool {
    let value = value.to_uppercase();
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 9 {
        return false;
    }

    let first = letter_digit(chars[0]).unwrap_or(chars[0]);
    let numbers: String = std::iter::once(first)
        .chain(chars[1..8].iter().copied())
        .collect();
    if !numbers.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match numbers.parse::<usize>() {
        Ok(n) => chars[8] == char::from(NIF_TABLE[n % 23]),
        Err(_) => false,
    }
}

fn cif_checksum(value: &str) -> bool {
    let value = value.to_uppercase();
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 9 {
        return false;
    }

    let (first, body, control) = (chars[0], &chars[1..8], chars[8]);
    let mut sum = 0;
    for (idx, c) in body.iter().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if idx % 2 == 0 {
            let doubled = d * 2;
            doubled / 10 + doubled % 10
        } else {
            d
        };
    }
    let res = (10 - sum % 10) % 10;
    let digit = char::from_digit(res, 10).unwrap_or('0');
    let letter = char::from(CIF_TABLE[res as usize]);

    match first {
        'A' | 'B' | 'E' | 'H' => control == digit,
        'P' | 'S' | 'Q' | 'W' => control == letter,
        'C' | 'D' | 'F' | 'G' | 'J' | 'N' | 'R' | 'U' | 'V' => {
            control == digit || control == letter
        }
        _ => false,
    }
}

/// Company tax code (CIF).
///
/// ```
/// use validators::es_cif;
///
/// assert!(es_cif("B25162520").is_ok());
/// assert!(es_cif("B25162529").is_err());
/// ```
pub fn es_cif(value: &str) -> Validated {
    ensure(cif_checksum(value), || {
        ValidationError::new("es_cif").arg("value", value)
    })
}

/// Personal tax code (NIF/DNI); `K`, `L` and `M` prefixes count as `0`.
///
/// ```
/// use validators::es_nif;
///
/// assert!(es_nif("26643189N").is_ok());
/// assert!(es_nif("26643189X").is_err());
/// ```
pub fn es_nif(value: &str) -> Validated {
    let ok = nif_nie_checksum(value, |c| matches!(c, 'K' | 'L' | 'M').then_some('0'));
    ensure(ok, || ValidationError::new("es_nif").arg("value", value))
}

/// Foreigner identity number (NIE): `X`, `Y` or `Z` followed by the NIF form.
///
/// ```
/// use validators::es_nie;
///
/// assert!(es_nie("X0095892M").is_ok());
/// assert!(es_nie("X0095892X").is_err());
/// ```
pub fn es_nie(value: &str) -> Validated {
    let ok = value.starts_with(['X', 'Y', 'Z'])
        && nif_nie_checksum(value, |c| match c {
            'X' => Some('0'),
            'Y' => Some('1'),
            'Z' => Some('2'),
            _ => None,
        });
    ensure(ok, || ValidationError::new("es_nie").arg("value", value))
}

/// Any Spanish DOI: NIE, NIF or CIF.
pub fn es_doi(value: &str) -> Validated {
    ensure(
        es_nie(value).is_ok() || es_nif(value).is_ok() || es_cif(value).is_ok(),
        || ValidationError::new("es_doi").arg("value", value),
    )
}
