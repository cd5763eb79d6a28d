use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static BSC_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("bsc address regex"));

/// Binance Smart Chain address: `0x` followed by 40 hex digits.
///
/// ```
/// use validators::bsc_address;
///
/// assert!(bsc_address("0x4e5acf9684652BEa56F2f01b7101a225Ee33d23f").is_ok());
/// assert!(bsc_address("0x4g5acf9684652BEa56F2f01b7101a225Eh33d23z").is_err());
/// ```
pub fn bsc_address(value: &str) -> Validated {
    ensure(BSC_ADDRESS.is_match(value), || {
        ValidationError::new("bsc_address").arg("value", value)
    })
}
