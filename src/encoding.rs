//! Text encodings of binary data.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static BASE16: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]+$").expect("base16 regex"));
static BASE32: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z2-7]+=*$").expect("base32 regex"));
static BASE58: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]+$").expect("base58 regex"));
static BASE64: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$")
        .expect("base64 regex")
});

fn matches(func: &'static str, pattern: &Regex, value: &str) -> Validated {
    ensure(!value.is_empty() && pattern.is_match(value), || {
        ValidationError::new(func).arg("value", value)
    })
}

/// Hexadecimal digits of either case.
pub fn base16(value: &str) -> Validated {
    matches("base16", &BASE16, value)
}

/// RFC 4648 base32 alphabet with optional trailing padding.
pub fn base32(value: &str) -> Validated {
    matches("base32", &BASE32, value)
}

/// Bitcoin base58 alphabet (no `0`, `O`, `I` or `l`).
pub fn base58(value: &str) -> Validated {
    matches("base58", &BASE58, value)
}

/// RFC 4648 base64 in complete, padded quanta.
pub fn base64(value: &str) -> Validated {
    matches("base64", &BASE64, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base16() {
        for value in ["a3f4b2", "01ef", "01234567890ABCDEF"] {
            assert!(base16(value).is_ok(), "{value}");
        }
        for value in ["", "ghijkl", "12345678gh"] {
            assert!(base16(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_base32() {
        for value in ["ABCD234=", "MFRGGZDFMZTWQ2LK", "MZXW6YQ="] {
            assert!(base32(value).is_ok(), "{value}");
        }
        for value in ["", "ThisIsNotBase32", "12345!@#$%^&*()", "ABCD1890"] {
            assert!(base32(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_base58() {
        for value in [
            "cUSECaVvAiV3srWbFRvVPzm5YzcXJwPSwZfE7veYPHoXmR9h6YMQ",
            "18KToMF5ckjXBYt2HAj77qsG3GPeej3PZn",
        ] {
            assert!(base58(value).is_ok(), "{value}");
        }
        for value in [
            "",
            "ThisIsAReallyLongStringThatIsDefinitelyNotBase58Encoded",
            "0OIl",
        ] {
            assert!(base58(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_base64() {
        for value in [
            "SGVsbG8gV29ybGQ=",
            "U29tZSBkYXRhIHN0cmluZw==",
            "YW55IGNhcm5hbCBwbGVhcw==",
        ] {
            assert!(base64(value).is_ok(), "{value}");
        }
        for value in [
            "",
            "SGVsbG8gV29ybGQ",
            "U29tZSBkYXRhIHN0cmluZw",
            "YW55IGNhcm5hbCBwbGVhc",
        ] {
            assert!(base64(value).is_err(), "{value}");
        }
    }
}
