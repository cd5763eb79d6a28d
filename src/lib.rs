//! # Validators - string format validation
//!
//! Stateless validators for everyday string formats: network names and
//! addresses, URLs and emails, hashes and encodings, financial and national
//! identifiers, cryptocurrency addresses and cron expressions.
//!
//! Every validator is a plain function returning [`Validated`]: `Ok(())` when
//! the value passes, or a [`ValidationError`] naming the validator, the
//! arguments it was called with and, for inputs that could not be parsed at
//! all, a reason.
//!
//! ## Modules
//!
//! - [`ip_address`], [`domain`], [`hostname`], [`email`], [`url`], [`uri`] - network formats
//! - [`finance`], [`iban`], [`card`] - securities, bank and card numbers
//! - [`crypto`] - Bitcoin, Ethereum, BSC and Tron addresses
//! - [`i18n`] - Spanish, Indian and Russian identity numbers
//! - [`registry`] - run-time selection of a validator by name
//! - [`config`] - YAML configuration for the `validators` binary
//!
//! ## Example
//!
//! ```
//! use validators::{email, url, UrlOptions};
//!
//! assert!(email("someone@example.com").is_ok());
//!
//! let opts = UrlOptions {
//!     simple_host: true,
//!     ..Default::default()
//! };
//! assert!(validators::url_with("http://localhost:8080", &opts).is_ok());
//!
//! let err = url("http://example.com/\">user@example.com").unwrap_err();
//! assert_eq!(err.func(), "url");
//! ```

pub mod between;
pub mod card;
pub mod config;
pub mod cron;
pub mod crypto;
pub mod domain;
pub mod email;
pub mod encoding;
pub mod error;
pub mod finance;
pub mod hashes;
pub mod hostname;
pub mod i18n;
pub mod iban;
pub mod ip_address;
pub mod length;
pub mod mac_address;
pub mod registry;
pub mod slug;
pub mod tld;
pub mod uri;
pub mod url;
pub mod uuid;

pub use self::between::between;
pub use self::card::{amex, card_number, diners, discover, jcb, mastercard, mir, unionpay, visa};
pub use self::cron::cron;
pub use self::crypto::{bsc_address, btc_address, eth_address, trx_address};
pub use self::domain::{domain, domain_with, DomainOptions};
pub use self::email::{email, email_with, EmailOptions};
pub use self::encoding::{base16, base32, base58, base64};
pub use self::error::{Validated, ValidationError};
pub use self::finance::{cusip, isin, sedol};
pub use self::hashes::{md5, sha1, sha224, sha256, sha384, sha512};
pub use self::hostname::{hostname, hostname_with, HostnameOptions};
pub use self::i18n::{es_cif, es_doi, es_nie, es_nif, ind_aadhar, ind_pan, ru_inn};
pub use self::iban::iban;
pub use self::ip_address::{ipv4, ipv4_with, ipv6, ipv6_with, Ipv4Options, Ipv6Options};
pub use self::length::length;
pub use self::mac_address::mac_address;
pub use self::registry::{CheckOptions, ValidatorKind};
pub use self::slug::slug;
pub use self::uri::uri;
pub use self::url::{url, url_with, UrlOptions};
pub use self::uuid::uuid;
