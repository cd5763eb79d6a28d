use regex::Regex;
use std::sync::LazyLock;

use super::{decode_base58, has_valid_checksum};
use crate::error::{Validated, ValidationError};

static TRX_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T[a-km-zA-HJ-NP-Z1-9]{33}$").expect("trx address regex"));

/// Version byte of mainnet Tron addresses.
const TRON_PREFIX: u8 = 0x41;

/// Tron (TRC-20) address.
///
/// ```
/// use validators::trx_address;
///
/// assert!(trx_address("TLjfbTbpZYDQ4EoA4N5CLNgGjfbF8ZWz38").is_ok());
/// assert!(trx_address("TR2G7Rm4vFqF8EpY4U5xdLdQ7XgJ2U8Vd").is_err());
/// ```
pub fn trx_address(value: &str) -> Validated {
    let err = || ValidationError::new("trx_address").arg("value", value);

    if !TRX_ADDRESS.is_match(value) {
        return Err(err());
    }

    let decoded = decode_base58(value).map_err(|reason| err().with_reason(reason))?;
    if decoded[0] == TRON_PREFIX && has_valid_checksum(&decoded) {
        Ok(())
    } else {
        Err(err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_trx() {
        for value in [
            "TLjfbTbpZYDQ4EoA4N5CLNgGjfbF8ZWz38",
            "TDQ6C92wuNqvMWE967sMptCFaXq77uj1PF",
            "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
        ] {
            assert!(trx_address(value).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_invalid_trx() {
        for value in [
            "",
            "TR2G7Rm4vFqF8EpY4U5xdLdQ7XgJ2U8Vd",
            "TXukNJ9U1h9Vj9YbBxYZMDd4hSzNQGqB3S",
            "AR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
            "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6tt",
            "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj60",
        ] {
            assert!(trx_address(value).is_err(), "{value}");
        }
    }
}
