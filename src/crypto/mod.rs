//! Cryptocurrency addresses.
//!
//! Legacy Bitcoin and Tron addresses are base58check encoded: 25 bytes whose
//! last four are the first four bytes of a double SHA-256 over the rest.

mod bsc;
mod btc;
mod eth;
mod trx;

pub use bsc::bsc_address;
pub use btc::btc_address;
pub use eth::eth_address;
pub use trx::trx_address;

use sha2::{Digest, Sha256};

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Decoded length of a base58check address.
const ADDRESS_LEN: usize = 25;

/// Decode `value` as a big-endian base58 number into exactly 25 bytes.
fn decode_base58(value: &str) -> Result<[u8; ADDRESS_LEN], String> {
    let mut out = [0u8; ADDRESS_LEN];
    for c in value.chars() {
        let digit = BASE58_ALPHABET
            .find(c)
            .ok_or_else(|| format!("invalid base58 character {:?}", c))?;

        let mut carry = digit as u32;
        for byte in out.iter_mut().rev() {
            let acc = u32::from(*byte) * 58 + carry;
            *byte = (acc & 0xff) as u8;
            carry = acc >> 8;
        }
        if carry != 0 {
            return Err(format!("decoded value exceeds {} bytes", ADDRESS_LEN));
        }
    }
    Ok(out)
}

/// Last four bytes equal the double SHA-256 of the payload.
fn has_valid_checksum(decoded: &[u8; ADDRESS_LEN]) -> bool {
    let (payload, checksum) = decoded.split_at(ADDRESS_LEN - 4);
    let digest = Sha256::digest(Sha256::digest(payload));
    digest[..4] == *checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base58() {
        let decoded = decode_base58("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
        assert_eq!(decoded[0], 0x00);
        assert!(has_valid_checksum(&decoded));

        let decoded = decode_base58("3Cwgr2g7vsi1bXDUkpEnVoRLA9w4FZfC69").unwrap();
        assert_eq!(decoded[0], 0x05);
    }

    #[test]
    fn test_decode_base58_errors() {
        assert!(decode_base58("0OIl").is_err());
        assert!(decode_base58("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}
