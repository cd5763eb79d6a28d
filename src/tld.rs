//! Known top-level domains.
//!
//! The bundled list is compiled into the binary. A replacement list can be
//! installed once per process (see [`install_list`]) before the first lookup.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

const BUNDLED: &str = include_str!("data/tlds.txt");

/// Environment variable that enables the process-wide TLD set.
pub const CACHE_ENV: &str = "VALIDATORS_CACHE_TLD";

/// Checked before the full list is consulted.
const POPULAR: &[&str] = &[
    "COM", "ORG", "RU", "DE", "NET", "BR", "UK", "JP", "FR", "IT", "ONION",
];

static CACHE_ENABLED: AtomicBool = AtomicBool::new(false);
static FULL_CACHE: OnceLock<HashSet<String>> = OnceLock::new();
static CUSTOM_LIST: OnceLock<String> = OnceLock::new();

/// Load the full list into a process-wide set on the next lookup.
pub fn enable_cache() {
    CACHE_ENABLED.store(true, Ordering::Relaxed);
}

/// Replace the bundled list for the rest of the process.
///
/// `contents` uses the bundled format: a header line followed by one TLD per
/// line, in any case. Returns `false`, leaving the current list in place, if
/// a list was already installed or the cache has already been loaded.
pub fn install_list(contents: String) -> bool {
    if FULL_CACHE.get().is_some() {
        return false;
    }
    CUSTOM_LIST.set(contents).is_ok()
}

/// Whether `tld` (without the leading dot, any case) is a known TLD.
///
/// ```
/// assert!(validators::tld::is_known("com"));
/// assert!(validators::tld::is_known("XN--P1AI"));
/// assert!(!validators::tld::is_known("notatld"));
/// ```
pub fn is_known(tld: &str) -> bool {
    let tld = tld.to_uppercase();
    if POPULAR.contains(&tld.as_str()) {
        return true;
    }

    if cache_enabled() {
        let cache = FULL_CACHE.get_or_init(|| {
            let set: HashSet<String> = entries().map(str::to_uppercase).collect();
            tracing::debug!(count = set.len(), "Loaded TLD cache");
            set
        });
        return cache.contains(&tld);
    }

    entries().any(|entry| entry.eq_ignore_ascii_case(&tld))
}

fn cache_enabled() -> bool {
    CACHE_ENABLED.load(Ordering::Relaxed) || crate::config::env_flag(CACHE_ENV).unwrap_or(false)
}

fn source() -> &'static str {
    CUSTOM_LIST.get().map(String::as_str).unwrap_or(BUNDLED)
}

fn entries() -> impl Iterator<Item = &'static str> {
    source()
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_popular_tlds() {
        for tld in ["com", "ORG", "onion", "Uk"] {
            assert!(is_known(tld), "{tld}");
        }
    }

    #[test]
    fn test_bundled_list() {
        assert!(is_known("aaa"));
        assert!(is_known("xn--p1ai"));
        assert!(is_known("museum"));
        assert!(!is_known("example"));
        assert!(!is_known(""));
    }

    #[test]
    fn test_header_is_skipped() {
        let header = BUNDLED.lines().next().unwrap_or_default();
        assert!(header.starts_with('#'));
        assert!(!entries().any(|entry| entry == header));
    }

    #[test]
    #[serial]
    fn test_cache_lookups() {
        enable_cache();
        assert!(cache_enabled());

        for tld in ["com", "museum", "XN--P1AI", "aaa"] {
            assert!(is_known(tld), "{tld}");
        }
        assert!(!is_known("example"));
        assert!(!is_known("notatld"));

        let cache = FULL_CACHE.get().expect("cache loaded on lookup");
        assert!(cache.contains("MUSEUM"));

        // the loaded cache cannot be swapped out
        assert!(!install_list("# late list\nexample\n".to_string()));
        assert!(!is_known("example"));
    }
}
