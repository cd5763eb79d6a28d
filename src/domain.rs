//! Domain names.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::error::{Validated, ValidationError};
use crate::tld;

/// Compiled patterns indexed by `[rfc_2782 as usize * 2 + rfc_1034 as usize]`.
static PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        domain_regex(false, false),
        domain_regex(false, true),
        domain_regex(true, false),
        domain_regex(true, true),
    ]
});

fn domain_regex(service_record: bool, trailing_dot: bool) -> Regex {
    let sr = if service_record { "_" } else { "" };
    let end = if trailing_dot { r"\.?$" } else { "$" };
    Regex::new(&format!(
        r"(?i)^(?:[a-z0-9{sr}](?:[a-z0-9\-{sr}]{{0,61}}[a-z0-9{sr}])?\.)+[a-z0-9][a-z0-9\-_]{{0,61}}[a-z]{end}"
    ))
    .expect("domain regex")
}

/// Options for [`domain_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainOptions {
    /// The last label must be a known top-level domain.
    pub consider_tld: bool,
    /// Allow a single trailing dot (RFC 1034).
    pub rfc_1034: bool,
    /// Allow underscores, as in service records (RFC 2782).
    pub rfc_2782: bool,
}

/// Domain name with default options.
///
/// ```
/// use validators::domain;
///
/// assert!(domain("example.com").is_ok());
/// assert!(domain("xn----gtbspbbmkef.xn--p1ai").is_ok());
/// assert!(domain("example.com/").is_err());
/// ```
pub fn domain(value: &str) -> Validated {
    domain_with(value, &DomainOptions::default())
}

pub fn domain_with(value: &str, opts: &DomainOptions) -> Validated {
    let err = || ValidationError::new("domain").arg("value", value);

    if value.is_empty() {
        return Err(err());
    }

    if opts.consider_tld {
        let last = value
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .unwrap_or_default();
        if !tld::is_known(last) {
            return Err(err());
        }
    }

    if value.chars().any(char::is_whitespace) || value.contains("__") {
        return Err(err());
    }

    let ascii = to_ascii(value)
        .ok_or_else(|| err().with_reason(format!("Unable to encode/decode {}", value)))?;

    let pattern = &PATTERNS[usize::from(opts.rfc_2782) * 2 + usize::from(opts.rfc_1034)];
    if pattern.is_match(&ascii) {
        Ok(())
    } else {
        Err(err())
    }
}

/// Punycode form of an internationalised name; ASCII input is returned as is.
fn to_ascii(value: &str) -> Option<Cow<'_, str>> {
    if value.is_ascii() {
        return Some(Cow::Borrowed(value));
    }
    match ::url::Host::parse(value) {
        Ok(::url::Host::Domain(ascii)) => Some(Cow::Owned(ascii)),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!(value, error = %e, "IDNA conversion failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        for value in [
            "example.com",
            "xn----gtbspbbmkef.xn--p1ai",
            "something.versicherung",
            "someThing.versicherung",
            "11.com",
            "3.cn",
            "a.cn",
            "sub1.sub2.sample.co.uk",
            "somerandomexample.xn--fiqs8s",
            "kräuter.com",
            "über.com",
            "президент.рф",
        ] {
            assert!(domain(value).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_invalid_domains() {
        for value in [
            "",
            "example.com/",
            "example.",
            "example",
            "a......b.com",
            "a.123",
            "123.123",
            "-example.com",
            "example-.com",
            "_example.com",
            "example_.com",
            "underscore_subdomain.example.com",
            "exa mple.com",
            "example.com.",
            "example.c",
        ] {
            assert!(domain(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_rfc_flags() {
        let rfc_1034 = DomainOptions {
            rfc_1034: true,
            ..Default::default()
        };
        assert!(domain_with("example.com.", &rfc_1034).is_ok());
        assert!(domain_with("example.com..", &rfc_1034).is_err());

        let rfc_2782 = DomainOptions {
            rfc_2782: true,
            ..Default::default()
        };
        assert!(domain_with("_example.com", &rfc_2782).is_ok());
        assert!(domain_with("_sip._tcp.example.com", &rfc_2782).is_ok());
        assert!(domain_with("__example.com", &rfc_2782).is_err());
    }

    #[test]
    fn test_consider_tld() {
        let opts = DomainOptions {
            consider_tld: true,
            ..Default::default()
        };
        assert!(domain_with("example.com", &opts).is_ok());
        assert!(domain_with("example.museum", &opts).is_ok());
        assert!(domain_with("example.notatld", &opts).is_err());
    }
}
