//! UUIDs in any of their textual forms.

use ::uuid::Uuid;

use crate::error::{ensure, Validated, ValidationError};

/// 32 hex digits once `urn:` and `uuid:` prefixes, surrounding braces and
/// hyphens are removed. Hyphens may sit anywhere.
///
/// ```
/// use validators::uuid;
///
/// assert!(uuid("2bc1c94f-0deb-43e9-92a1-4775189ec9f8").is_ok());
/// assert!(uuid("{2bc1c94f0deb43e992a14775189ec9f8}").is_ok());
/// assert!(uuid("2bc1c94f 0deb-43e9-92a1-4775189ec9f8").is_err());
/// ```
pub fn uuid(value: &str) -> Validated {
    ensure(
        !value.is_empty() && Uuid::try_parse(&simple_form(value)).is_ok(),
        || ValidationError::new("uuid").arg("value", value),
    )
}

fn simple_form(value: &str) -> String {
    value
        .replace("urn:", "")
        .replace("uuid:", "")
        .trim_matches(|c| c == '{' || c == '}')
        .replace('-', "")
}
