//! Run-time selection of validators by name.
//!
//! Every validator in the crate is listed in [`ValidatorKind`], and the
//! flags shared between them are collected in [`CheckOptions`] so callers
//! that pick a validator at run time (the `validators` binary, for one) can
//! dispatch through [`ValidatorKind::check`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Validated, ValidationError};
use crate::{
    card, crypto, domain, email, encoding, finance, hashes, hostname, i18n, ip_address, url,
};

/// Flags shared across validators. Each validator reads the ones it knows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    pub consider_tld: bool,
    pub rfc_1034: bool,
    pub rfc_2782: bool,
    /// IPv4 hosts must be private (`true`) or public (`false`).
    pub private: Option<bool>,
    pub may_have_port: bool,
    /// Single-label hosts in URLs and emails.
    pub simple_host: bool,
    /// Single-label names for `hostname`, which accepts them unless cleared.
    pub maybe_simple: bool,
    /// Hosts may not be IPv4 addresses (`hostname`, `url`).
    pub skip_ipv4_addr: bool,
    /// Hosts may not be IPv6 addresses (`hostname`, `url`).
    pub skip_ipv6_addr: bool,
    pub strict_query: bool,
    pub cidr: bool,
    pub strict: bool,
    pub host_bit: bool,
    /// Email domain may be a bracketed IPv4 literal.
    pub ipv4_address: bool,
    /// Email domain may be a bracketed IPv6 literal.
    pub ipv6_address: bool,
    /// Lower bound for `between` (number) and `length` (characters).
    pub min: Option<f64>,
    /// Upper bound for `between` (number) and `length` (characters).
    pub max: Option<f64>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            consider_tld: false,
            rfc_1034: false,
            rfc_2782: false,
            private: None,
            may_have_port: true,
            simple_host: false,
            maybe_simple: true,
            skip_ipv4_addr: false,
            skip_ipv6_addr: false,
            strict_query: true,
            cidr: true,
            strict: false,
            host_bit: true,
            ipv4_address: false,
            ipv6_address: false,
            min: None,
            max: None,
        }
    }
}

impl CheckOptions {
    fn domain(&self) -> domain::DomainOptions {
        domain::DomainOptions {
            consider_tld: self.consider_tld,
            rfc_1034: self.rfc_1034,
            rfc_2782: self.rfc_2782,
        }
    }

    fn hostname(&self) -> hostname::HostnameOptions {
        hostname::HostnameOptions {
            skip_ipv6_addr: self.skip_ipv6_addr,
            skip_ipv4_addr: self.skip_ipv4_addr,
            may_have_port: self.may_have_port,
            maybe_simple: self.maybe_simple,
            consider_tld: self.consider_tld,
            private: self.private,
            rfc_1034: self.rfc_1034,
            rfc_2782: self.rfc_2782,
        }
    }

    fn email(&self) -> email::EmailOptions {
        email::EmailOptions {
            ipv6_address: self.ipv6_address,
            ipv4_address: self.ipv4_address,
            simple_host: self.simple_host,
            rfc_1034: self.rfc_1034,
            rfc_2782: self.rfc_2782,
        }
    }

    fn url(&self) -> url::UrlOptions {
        url::UrlOptions {
            skip_ipv6_addr: self.skip_ipv6_addr,
            skip_ipv4_addr: self.skip_ipv4_addr,
            may_have_port: self.may_have_port,
            simple_host: self.simple_host,
            strict_query: self.strict_query,
            consider_tld: self.consider_tld,
            private: self.private,
            rfc_1034: self.rfc_1034,
            rfc_2782: self.rfc_2782,
            ..Default::default()
        }
    }

    fn ipv4(&self) -> ip_address::Ipv4Options {
        ip_address::Ipv4Options {
            cidr: self.cidr,
            strict: self.strict,
            private: self.private,
            host_bit: self.host_bit,
        }
    }

    fn ipv6(&self) -> ip_address::Ipv6Options {
        ip_address::Ipv6Options {
            cidr: self.cidr,
            strict: self.strict,
            host_bit: self.host_bit,
        }
    }
}

/// Every validator that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidatorKind {
    Between,
    Length,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Base16,
    Base32,
    Base58,
    Base64,
    MacAddress,
    Slug,
    Uuid,
    Ipv4,
    Ipv6,
    Domain,
    Hostname,
    Email,
    Url,
    Uri,
    Cusip,
    Isin,
    Sedol,
    Iban,
    CardNumber,
    Visa,
    Mastercard,
    Amex,
    Unionpay,
    Diners,
    Jcb,
    Discover,
    Mir,
    BtcAddress,
    EthAddress,
    BscAddress,
    TrxAddress,
    EsCif,
    EsNif,
    EsNie,
    EsDoi,
    IndAadhar,
    IndPan,
    RuInn,
    Cron,
}

impl ValidatorKind {
    pub const ALL: &'static [ValidatorKind] = &[
        Self::Between,
        Self::Length,
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Base16,
        Self::Base32,
        Self::Base58,
        Self::Base64,
        Self::MacAddress,
        Self::Slug,
        Self::Uuid,
        Self::Ipv4,
        Self::Ipv6,
        Self::Domain,
        Self::Hostname,
        Self::Email,
        Self::Url,
        Self::Uri,
        Self::Cusip,
        Self::Isin,
        Self::Sedol,
        Self::Iban,
        Self::CardNumber,
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Unionpay,
        Self::Diners,
        Self::Jcb,
        Self::Discover,
        Self::Mir,
        Self::BtcAddress,
        Self::EthAddress,
        Self::BscAddress,
        Self::TrxAddress,
        Self::EsCif,
        Self::EsNif,
        Self::EsNie,
        Self::EsDoi,
        Self::IndAadhar,
        Self::IndPan,
        Self::RuInn,
        Self::Cron,
    ];

    /// Stable kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::Length => "length",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Base16 => "base16",
            Self::Base32 => "base32",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::MacAddress => "mac-address",
            Self::Slug => "slug",
            Self::Uuid => "uuid",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Domain => "domain",
            Self::Hostname => "hostname",
            Self::Email => "email",
            Self::Url => "url",
            Self::Uri => "uri",
            Self::Cusip => "cusip",
            Self::Isin => "isin",
            Self::Sedol => "sedol",
            Self::Iban => "iban",
            Self::CardNumber => "card-number",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Unionpay => "unionpay",
            Self::Diners => "diners",
            Self::Jcb => "jcb",
            Self::Discover => "discover",
            Self::Mir => "mir",
            Self::BtcAddress => "btc-address",
            Self::EthAddress => "eth-address",
            Self::BscAddress => "bsc-address",
            Self::TrxAddress => "trx-address",
            Self::EsCif => "es-cif",
            Self::EsNif => "es-nif",
            Self::EsNie => "es-nie",
            Self::EsDoi => "es-doi",
            Self::IndAadhar => "ind-aadhar",
            Self::IndPan => "ind-pan",
            Self::RuInn => "ru-inn",
            Self::Cron => "cron",
        }
    }

    /// One-line description for `validators list`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Between => "Number within --min/--max",
            Self::Length => "String length within --min/--max characters",
            Self::Md5 => "MD5 hex digest",
            Self::Sha1 => "SHA-1 hex digest",
            Self::Sha224 => "SHA-224 hex digest",
            Self::Sha256 => "SHA-256 hex digest",
            Self::Sha384 => "SHA-384 hex digest",
            Self::Sha512 => "SHA-512 hex digest",
            Self::Base16 => "Base16 (hex) encoded data",
            Self::Base32 => "Base32 encoded data",
            Self::Base58 => "Base58 encoded data",
            Self::Base64 => "Base64 encoded data",
            Self::MacAddress => "MAC address",
            Self::Slug => "URL slug",
            Self::Uuid => "UUID in any common textual form",
            Self::Ipv4 => "IPv4 address or network",
            Self::Ipv6 => "IPv6 address or network",
            Self::Domain => "Domain name",
            Self::Hostname => "Hostname, domain or IP address with optional port",
            Self::Email => "Email address",
            Self::Url => "URL",
            Self::Uri => "URI (url, mailto, file, ipfs, magnet, tel, data, urn, urc)",
            Self::Cusip => "CUSIP securities identifier",
            Self::Isin => "ISIN securities identifier",
            Self::Sedol => "SEDOL securities identifier",
            Self::Iban => "International Bank Account Number",
            Self::CardNumber => "Payment card number (Luhn)",
            Self::Visa => "Visa card number",
            Self::Mastercard => "Mastercard card number",
            Self::Amex => "American Express card number",
            Self::Unionpay => "UnionPay card number",
            Self::Diners => "Diners Club card number",
            Self::Jcb => "JCB card number",
            Self::Discover => "Discover card number",
            Self::Mir => "Mir card number",
            Self::BtcAddress => "Bitcoin address",
            Self::EthAddress => "Ethereum address (EIP-55 checksum)",
            Self::BscAddress => "Binance Smart Chain address",
            Self::TrxAddress => "Tron address",
            Self::EsCif => "Spanish company tax code (CIF)",
            Self::EsNif => "Spanish personal tax code (NIF)",
            Self::EsNie => "Spanish foreigner identity number (NIE)",
            Self::EsDoi => "Spanish DOI (NIE, NIF or CIF)",
            Self::IndAadhar => "Indian Aadhar number",
            Self::IndPan => "Indian PAN card number",
            Self::RuInn => "Russian taxpayer number (INN)",
            Self::Cron => "Five-field cron expression",
        }
    }

    /// Run this validator over `value`.
    pub fn check(self, value: &str, opts: &CheckOptions) -> Validated {
        match self {
            Self::Between => check_between(value, opts),
            Self::Length => check_length(value, opts),
            Self::Md5 => hashes::md5(value),
            Self::Sha1 => hashes::sha1(value),
            Self::Sha224 => hashes::sha224(value),
            Self::Sha256 => hashes::sha256(value),
            Self::Sha384 => hashes::sha384(value),
            Self::Sha512 => hashes::sha512(value),
            Self::Base16 => encoding::base16(value),
            Self::Base32 => encoding::base32(value),
            Self::Base58 => encoding::base58(value),
            Self::Base64 => encoding::base64(value),
            Self::MacAddress => crate::mac_address::mac_address(value),
            Self::Slug => crate::slug::slug(value),
            Self::Uuid => crate::uuid::uuid(value),
            Self::Ipv4 => ip_address::ipv4_with(value, &opts.ipv4()),
            Self::Ipv6 => ip_address::ipv6_with(value, &opts.ipv6()),
            Self::Domain => domain::domain_with(value, &opts.domain()),
            Self::Hostname => hostname::hostname_with(value, &opts.hostname()),
            Self::Email => email::email_with(value, &opts.email()),
            Self::Url => url::url_with(value, &opts.url()),
            Self::Uri => crate::uri::uri(value),
            Self::Cusip => finance::cusip(value),
            Self::Isin => finance::isin(value),
            Self::Sedol => finance::sedol(value),
            Self::Iban => crate::iban::iban(value),
            Self::CardNumber => card::card_number(value),
            Self::Visa => card::visa(value),
            Self::Mastercard => card::mastercard(value),
            Self::Amex => card::amex(value),
            Self::Unionpay => card::unionpay(value),
            Self::Diners => card::diners(value),
            Self::Jcb => card::jcb(value),
            Self::Discover => card::discover(value),
            Self::Mir => card::mir(value),
            Self::BtcAddress => crypto::btc_address(value),
            Self::EthAddress => crypto::eth_address(value),
            Self::BscAddress => crypto::bsc_address(value),
            Self::TrxAddress => crypto::trx_address(value),
            Self::EsCif => i18n::es_cif(value),
            Self::EsNif => i18n::es_nif(value),
            Self::EsNie => i18n::es_nie(value),
            Self::EsDoi => i18n::es_doi(value),
            Self::IndAadhar => i18n::ind_aadhar(value),
            Self::IndPan => i18n::ind_pan(value),
            Self::RuInn => i18n::ru_inn(value),
            Self::Cron => crate::cron::cron(value),
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown validator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown validator '{}' (run `validators list` to see all)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ValidatorKind {
    type Err = UnknownKind;

    /// Accepts the kebab-case name, or the snake_case function name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

fn check_between(value: &str, opts: &CheckOptions) -> Validated {
    match value.trim().parse::<f64>() {
        Ok(number) => crate::between::between(number, opts.min, opts.max),
        Err(_) => Err(ValidationError::new("between")
            .arg("value", value)
            .with_reason(format!("'{}' is not a number", value))),
    }
}

fn check_length(value: &str, opts: &CheckOptions) -> Validated {
    let bound = |b: Option<f64>| -> Result<Option<usize>, ValidationError> {
        match b {
            Some(b) if b < 0.0 || b.fract() != 0.0 => Err(ValidationError::new("length")
                .arg("value", value)
                .with_reason("Length bounds must be non-negative integers")),
            Some(b) => Ok(Some(b as usize)),
            None => Ok(None),
        }
    };
    crate::length::length(value, bound(opts.min)?, bound(opts.max)?)
}
