use regex::Regex;
use sha3::{Digest, Keccak256};
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static HEX_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("eth address regex"));

/// EIP-55: a letter is upper-case iff the matching nibble of
/// Keccak-256(lower-case address) is 8 or more.
fn has_valid_checksum(hex_part: &str) -> bool {
    let hash = hex::encode(Keccak256::digest(hex_part.to_ascii_lowercase().as_bytes()));
    hex_part.chars().zip(hash.chars()).all(|(c, h)| {
        let nibble = h.to_digit(16).unwrap_or_default();
        if nibble > 7 {
            c.to_ascii_uppercase() == c
        } else {
            c.to_ascii_lowercase() == c
        }
    })
}

/// Ethereum (ERC-20) address.
///
/// ```
/// use validators::eth_address;
///
/// assert!(eth_address("0x9cc14ba4f9f68ca159ea4ebf2c292a5d5c3bc0c2").is_ok());
/// assert!(eth_address("0x8Ba1f109551bD432803012645Ac136ddd64DBa72").is_err());
/// ```
pub fn eth_address(value: &str) -> Validated {
    let ok = HEX_ADDRESS.is_match(value) && {
        let hex_part = &value[2..];
        let uniform = hex_part == hex_part.to_ascii_lowercase()
            || hex_part == hex_part.to_ascii_uppercase();
        uniform || has_valid_checksum(hex_part)
    };
    ensure(ok, || {
        ValidationError::new("eth_address").arg("value", value)
    })
}
