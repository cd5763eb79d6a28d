//! MAC address.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static MAC_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$").expect("mac address regex")
});

/// Six hex octets separated by `:` or `-`.
///
/// ```
/// use validators::mac_address;
///
/// assert!(mac_address("01:23:45:67:ab:CD").is_ok());
/// assert!(mac_address("00:00:00:00:00").is_err());
/// ```
pub fn mac_address(value: &str) -> Validated {
    ensure(!value.is_empty() && MAC_ADDRESS.is_match(value), || {
        ValidationError::new("mac_address").arg("value", value)
    })
}
