//! Hostnames: simple names, domains or IP addresses, with an optional port.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{domain_with, DomainOptions};
use crate::error::{Validated, ValidationError};
use crate::ip_address::{ipv4_with, ipv6_with, Ipv4Options, Ipv6Options};

static PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:6553[0-5]|655[0-2][0-9]|65[0-4][0-9]{2}|6[0-4][0-9]{3}|[1-5][0-9]{4}|[1-9][0-9]{0,3})$",
    )
    .expect("port regex")
});

// Up to 61 characters, alphanumeric at both ends.
static SIMPLE_HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9](?:[a-z0-9\-]{0,59}[a-z0-9])?$").expect("simple hostname regex")
});

/// Options for [`hostname_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostnameOptions {
    /// The host may not be an IPv6 address.
    pub skip_ipv6_addr: bool,
    /// The host may not be an IPv4 address.
    pub skip_ipv4_addr: bool,
    /// Accept a trailing `:port`.
    pub may_have_port: bool,
    /// Accept single-label names such as `localhost`.
    pub maybe_simple: bool,
    pub consider_tld: bool,
    /// Applies to IPv4 hosts only, see [`Ipv4Options::private`].
    pub private: Option<bool>,
    pub rfc_1034: bool,
    pub rfc_2782: bool,
}

impl Default for HostnameOptions {
    fn default() -> Self {
        Self {
            skip_ipv6_addr: false,
            skip_ipv4_addr: false,
            may_have_port: true,
            maybe_simple: true,
            consider_tld: false,
            private: None,
            rfc_1034: false,
            rfc_2782: false,
        }
    }
}

/// Hostname with default options.
///
/// ```
/// use validators::hostname;
///
/// assert!(hostname("ubuntu-pc:443").is_ok());
/// assert!(hostname("[::1]:22").is_ok());
/// assert!(hostname("_example.com").is_err());
/// ```
pub fn hostname(value: &str) -> Validated {
    hostname_with(value, &HostnameOptions::default())
}

pub fn hostname_with(value: &str, opts: &HostnameOptions) -> Validated {
    let err = || ValidationError::new("hostname").arg("value", value);

    if value.is_empty() {
        return Err(err());
    }

    let host = if opts.may_have_port {
        split_port(value).unwrap_or(value)
    } else {
        value
    };

    if is_valid_host(host, opts) {
        Ok(())
    } else {
        Err(err())
    }
}

/// Host segment of `host:port` or `[v6]:port` when the port is valid.
fn split_port(value: &str) -> Option<&str> {
    if value.matches("]:").count() == 1 {
        if let Some((host, port)) = value.rsplit_once(':') {
            if PORT.is_match(port) {
                let host = host.trim_start_matches('[').trim_end_matches(']');
                return Some(host).filter(|h| !h.is_empty());
            }
        }
    }
    if value.matches(':').count() == 1 {
        if let Some((host, port)) = value.rsplit_once(':') {
            if PORT.is_match(port) {
                return Some(host).filter(|h| !h.is_empty());
            }
        }
    }
    None
}

fn is_valid_host(host: &str, opts: &HostnameOptions) -> bool {
    if opts.maybe_simple && SIMPLE_HOSTNAME.is_match(host) {
        return true;
    }

    let domain_opts = DomainOptions {
        consider_tld: opts.consider_tld,
        rfc_1034: opts.rfc_1034,
        rfc_2782: opts.rfc_2782,
    };
    if domain_with(host, &domain_opts).is_ok() {
        return true;
    }

    if !opts.skip_ipv4_addr {
        let v4 = Ipv4Options {
            cidr: false,
            private: opts.private,
            ..Default::default()
        };
        if ipv4_with(host, &v4).is_ok() {
            return true;
        }
    }

    if !opts.skip_ipv6_addr {
        let v6 = Ipv6Options {
            cidr: false,
            ..Default::default()
        };
        if ipv6_with(host, &v6).is_ok() {
            return true;
        }
    }

    false
}
