//! IPv4 and IPv6 addresses, optionally in CIDR notation.
//!
//! Parsing goes through `std::net` so leading-zero octets and out-of-range
//! groups are rejected the same way the standard library rejects them;
//! networks are assembled with `ipnet` to detect host bits.

use ipnet::{Ipv4Net, Ipv6Net};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

static PRIVATE_172: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^172\.(?:1[6-9]|2\d|3[0-1])\.").expect("private regex"));
static BROADCAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:22[4-9]|23[0-9]|24[0-9]|25[0-5])\.").expect("broadcast regex")
});

/// Prefixes treated as private, link-local, loopback or unspecified.
const PRIVATE_PREFIXES: &[&str] = &["10.", "192.168.", "169.254.", "127.", "0.0.0.0"];

/// Options for [`ipv4_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Options {
    /// Value may carry a `/prefix` (or dotted netmask).
    pub cidr: bool,
    /// Value must be in CIDR notation.
    pub strict: bool,
    /// `Some(true)`: must be private/local, `Some(false)`: must be public.
    pub private: Option<bool>,
    /// When `false`, a network with host bits set is rejected.
    pub host_bit: bool,
}

impl Default for Ipv4Options {
    fn default() -> Self {
        Self {
            cidr: true,
            strict: false,
            private: None,
            host_bit: true,
        }
    }
}

/// Options for [`ipv6_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Options {
    pub cidr: bool,
    pub strict: bool,
    pub host_bit: bool,
}

impl Default for Ipv6Options {
    fn default() -> Self {
        Self {
            cidr: true,
            strict: false,
            host_bit: true,
        }
    }
}

/// IPv4 address or network with default options.
///
/// ```
/// use validators::ipv4;
///
/// assert!(ipv4("123.0.0.7").is_ok());
/// assert!(ipv4("1.1.1.1/8").is_ok());
/// assert!(ipv4("900.80.70.11").is_err());
/// ```
pub fn ipv4(value: &str) -> Validated {
    ipv4_with(value, &Ipv4Options::default())
}

pub fn ipv4_with(value: &str, opts: &Ipv4Options) -> Validated {
    let err = || {
        let mut err = ValidationError::new("ipv4").arg("value", value);
        if let Some(private) = opts.private {
            err = err.arg("private", private);
        }
        err
    };

    if value.is_empty() {
        return Err(err());
    }

    let parsed = if opts.cidr {
        if opts.strict && value.matches('/').count() != 1 {
            Err("IPv4 address was expected in CIDR notation".to_string())
        } else {
            parse_ipv4_network(value, !opts.host_bit).map(|_| ())
        }
    } else {
        value
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    };

    match parsed {
        Ok(()) => ensure(check_private_ip(value, opts.private), err),
        Err(reason) => Err(err().with_reason(reason)),
    }
}

/// IPv6 address or network with default options.
///
/// ```
/// use validators::ipv6;
///
/// assert!(ipv6("::ffff:192.0.2.128").is_ok());
/// assert!(ipv6("::1/128").is_ok());
/// assert!(ipv6("abc.0.0.1").is_err());
/// ```
pub fn ipv6(value: &str) -> Validated {
    ipv6_with(value, &Ipv6Options::default())
}

pub fn ipv6_with(value: &str, opts: &Ipv6Options) -> Validated {
    let err = || ValidationError::new("ipv6").arg("value", value);

    if value.is_empty() {
        return Err(err());
    }

    let parsed = if opts.cidr {
        if opts.strict && value.matches('/').count() != 1 {
            Err("IPv6 address was expected in CIDR notation".to_string())
        } else {
            parse_ipv6_network(value, !opts.host_bit).map(|_| ())
        }
    } else {
        parse_ipv6_addr(value).map(|_| ())
    };

    parsed.map_err(|reason| err().with_reason(reason))
}

/// Parse `addr[/prefix]`; without a prefix the network is a single host.
fn parse_ipv4_network(value: &str, strict: bool) -> Result<Ipv4Net, String> {
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (value, None),
    };

    let addr: Ipv4Addr = addr.parse().map_err(|e| format!("{}: {}", addr, e))?;
    let prefix_len = match prefix {
        Some(prefix) => parse_ipv4_prefix(prefix)?,
        None => 32,
    };
    let net = Ipv4Net::new(addr, prefix_len).map_err(|e| e.to_string())?;

    if strict && net.network() != addr {
        return Err(format!("{} has host bits set", value));
    }

    Ok(net)
}

/// Accept a decimal prefix length, a dotted netmask or a dotted hostmask.
fn parse_ipv4_prefix(prefix: &str) -> Result<u8, String> {
    let invalid = || format!("{} is not a valid netmask", prefix);

    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
        return match prefix.parse::<u8>() {
            Ok(len) if len <= 32 => Ok(len),
            _ => Err(invalid()),
        };
    }

    let mask: Ipv4Addr = prefix.parse().map_err(|_| invalid())?;
    ipnet::ipv4_mask_to_prefix(mask)
        .or_else(|_| ipnet::ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
        .map_err(|_| invalid())
}

fn parse_ipv6_network(value: &str, strict: bool) -> Result<Ipv6Net, String> {
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (value, None),
    };

    let addr = parse_ipv6_addr(addr)?;
    let prefix_len = match prefix {
        Some(prefix) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => {
            match prefix.parse::<u8>() {
                Ok(len) if len <= 128 => len,
                _ => return Err(format!("{} is not a valid netmask", prefix)),
            }
        }
        Some(prefix) => return Err(format!("{} is not a valid netmask", prefix)),
        None => 128,
    };
    let net = Ipv6Net::new(addr, prefix_len).map_err(|e| e.to_string())?;

    if strict && net.network() != addr {
        return Err(format!("{} has host bits set", value));
    }

    Ok(net)
}

/// Parse an IPv6 address, allowing a non-empty `%zone` suffix.
fn parse_ipv6_addr(value: &str) -> Result<Ipv6Addr, String> {
    let addr = match value.split_once('%') {
        Some((addr, zone)) if !zone.is_empty() && !zone.contains('%') => addr,
        Some(_) => return Err(format!("Invalid IPv6 address zone in {}", value)),
        None => value,
    };
    addr.parse().map_err(|e| format!("{}: {}", value, e))
}

/// `None` accepts any address; otherwise the address must be private (`true`)
/// or public (`false`) as judged by its textual prefix.
fn check_private_ip(value: &str, private: Option<bool>) -> bool {
    let Some(private) = private else {
        return true;
    };

    let is_private = PRIVATE_PREFIXES.iter().any(|p| value.starts_with(p))
        || PRIVATE_172.is_match(value)
        || BROADCAST.is_match(value);

    is_private == private
}
