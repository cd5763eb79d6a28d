//! Email addresses (RFC 5321 / RFC 5322 subset).

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Validated, ValidationError};
use crate::hostname::{hostname_with, HostnameOptions};

// Extended latin start, dot-atom, or quoted string.
static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:[\x{0100}-\x{017F}\x{0180}-\x{024F}]",
        r"|[\-!#$%&'*+/=?^_`{}|~0-9a-z]+(?:\.[\-!#$%&'*+/=?^_`{}|~0-9a-z]+)*$",
        r#"|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F!#-\[\]-\x7F]|\\[\x09.])*"$)"#,
    ))
    .expect("email local part regex")
});

/// Options for [`email_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailOptions {
    /// Accept a bracketed IPv6 literal as the domain part.
    pub ipv6_address: bool,
    /// Accept a bracketed IPv4 literal as the domain part.
    pub ipv4_address: bool,
    /// Accept a single-label domain part such as `localhost`.
    pub simple_host: bool,
    pub rfc_1034: bool,
    pub rfc_2782: bool,
}

/// Email address with default options.
///
/// ```
/// use validators::email;
///
/// assert!(email("someone@example.com").is_ok());
/// assert!(email("bogus@@").is_err());
/// ```
pub fn email(value: &str) -> Validated {
    email_with(value, &EmailOptions::default())
}

pub fn email_with(value: &str, opts: &EmailOptions) -> Validated {
    let err = || ValidationError::new("email").arg("value", value);

    if value.is_empty() || value.matches('@').count() != 1 {
        return Err(err());
    }
    let Some((local, mut domain)) = value.rsplit_once('@') else {
        return Err(err());
    };

    if local.chars().count() > 64 || domain.chars().count() > 253 {
        return Err(err());
    }

    if opts.ipv6_address || opts.ipv4_address {
        match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
            Some(literal) => domain = literal,
            None => return Err(err()),
        }
    }

    if !LOCAL_PART.is_match(local) {
        return Err(err());
    }

    let host_opts = HostnameOptions {
        skip_ipv6_addr: !opts.ipv6_address,
        skip_ipv4_addr: !opts.ipv4_address,
        may_have_port: false,
        maybe_simple: opts.simple_host,
        consider_tld: false,
        private: None,
        rfc_1034: opts.rfc_1034,
        rfc_2782: opts.rfc_2782,
    };
    hostname_with(domain, &host_opts).map_err(|_| err())
}
