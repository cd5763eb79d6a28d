//! URIs, dispatched on their scheme prefix.

use crate::email::email;
use crate::error::{Validated, ValidationError};
use crate::url::{url, SCHEMES};

/// Prefixes accepted without further checks.
const OPAQUE_PREFIXES: &[&str] = &["magnet:?", "tel:", "data:", "urn:", "urc:"];

/// URI: a known URL, `mailto:` address, `file:///`, `ipfs://` or one of the
/// opaque schemes (`magnet:?`, `tel:`, `data:`, `urn:`, `urc:`).
///
/// ```
/// use validators::uri;
///
/// assert!(uri("mailto:example@domain.com").is_ok());
/// assert!(uri("file:path.txt").is_err());
/// ```
pub fn uri(value: &str) -> Validated {
    let err = || ValidationError::new("uri").arg("value", value);

    if value.is_empty() {
        return Err(err());
    }

    if SCHEMES.iter().any(|scheme| value.starts_with(scheme)) {
        return url(value).map_err(|inner| with_inner_reason(err(), inner));
    }

    if let Some(address) = value.strip_prefix("mailto:") {
        return email(address).map_err(|inner| with_inner_reason(err(), inner));
    }

    let ok = if value.starts_with("file:") {
        value.starts_with("file:///")
    } else if value.starts_with("ipfs:") {
        value.starts_with("ipfs://")
    } else {
        OPAQUE_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
    };

    if ok {
        Ok(())
    } else {
        Err(err())
    }
}

fn with_inner_reason(err: ValidationError, inner: ValidationError) -> ValidationError {
    match inner.reason() {
        Some(reason) => err.with_reason(reason),
        None => err,
    }
}
