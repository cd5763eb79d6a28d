use regex::Regex;
use std::sync::LazyLock;

use super::{decode_base58, has_valid_checksum};
use crate::error::{Validated, ValidationError};

// Bech32 charset; a loose estimate of segwit validity.
static SEGWIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:bc|tb)[0-3][02-9ac-hj-np-z]{14,74}$").expect("segwit regex")
});

/// Bitcoin address: segwit (`bc`/`tb`) by pattern, P2PKH/P2SH by checksum.
///
/// ```
/// use validators::btc_address;
///
/// assert!(btc_address("3Cwgr2g7vsi1bXDUkpEnVoRLA9w4FZfC69").is_ok());
/// assert!(btc_address("1BvBMsEYstWetqTFn5Au4m4GFg7xJaNVN2").is_err());
/// ```
pub fn btc_address(value: &str) -> Validated {
    let err = || ValidationError::new("btc_address").arg("value", value);

    if value.is_empty() {
        return Err(err());
    }

    if value.starts_with("bc") || value.starts_with("tb") {
        return if SEGWIT.is_match(value) {
            Ok(())
        } else {
            Err(err())
        };
    }

    if !(25..=34).contains(&value.len()) {
        return Err(err());
    }
    let decoded = decode_base58(value).map_err(|reason| err().with_reason(reason))?;
    if has_valid_checksum(&decoded) {
        Ok(())
    } else {
        Err(err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_btc() {
        for value in [
            "bc1q5jy2lsl3tpsq6x3n5pykhvd6qrngk3u0mk35g6",
            "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
            "3Cwgr2g7vsi1bXDUkpEnVoRLA9w4FZfC69",
            "17VZNX1SN5NtKa8UQFxwQbFeFc3iqRYhem",
            "3P14159f73E4gFr7JterCCQh9QjiTjiZrG",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        ] {
            assert!(btc_address(value).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_invalid_btc() {
        for value in [
            "",
            "ff3Cwgr2g7vsi1bXDUkpEnVoRLA9w4FZfC69",
            "b3Cgwgr2g7vsi1bXyjyDUkphEnVoRLA9w4FZfC69",
            "1BvBMsEYstWetqTFn5Au4m4GFg7xJaNVN2",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb",
            "bc1q5jy2lsl3tpsq6x3n5pykhvd6qrngk3u0mk35gb",
            "bc4q5jy2lsl3tpsq6x3n5pykhvd6qrngk3u0mk35g6",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7Divf0a",
        ] {
            assert!(btc_address(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_bad_character_has_reason() {
        let err = btc_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7Divf0a").unwrap_err();
        assert!(err.reason().is_some());
    }
}
