//! Hex digests of the common hash functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ensure, Validated, ValidationError};

/// Generate a validator for a case-insensitive hex digest of fixed length.
macro_rules! hex_digest {
    ($(#[$doc:meta])* $name:ident, $pattern:ident, $len:literal) => {
        static $pattern: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(concat!("(?i)^[0-9a-f]{", $len, "}$")).expect("hex digest regex")
        });

        $(#[$doc])*
        pub fn $name(value: &str) -> Validated {
            ensure(!value.is_empty() && $pattern.is_match(value), || {
                ValidationError::new(stringify!($name)).arg("value", value)
            })
        }
    };
}

hex_digest!(
    /// MD5: 32 hex characters.
    md5,
    MD5_PATTERN,
    32
);
hex_digest!(
    /// SHA-1: 40 hex characters.
    sha1,
    SHA1_PATTERN,
    40
);
hex_digest!(
    /// SHA-224: 56 hex characters.
    sha224,
    SHA224_PATTERN,
    56
);
hex_digest!(
    /// SHA-256: 64 hex characters.
    sha256,
    SHA256_PATTERN,
    64
);
hex_digest!(
    /// SHA-384: 96 hex characters.
    sha384,
    SHA384_PATTERN,
    96
);
hex_digest!(
    /// SHA-512: 128 hex characters.
    sha512,
    SHA512_PATTERN,
    128
);
