//! Error types for builder configuration and srcset validation.

use thiserror::Error;

/// Errors raised while constructing a [`UrlBuilder`](crate::UrlBuilder) or
/// loading a [`UrlConfig`](crate::UrlConfig).
///
/// Configuration errors are fatal: they surface once at construction time
/// and are never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The domain pool was empty.
    #[error("at least one domain must be supplied")]
    EmptyDomainPool,

    /// A domain failed the fully-qualified-domain-name check.
    #[error("invalid domain '{domain}': must be a fully-qualified domain name with no protocol or path element, e.g. \"example.imgix.net\"")]
    InvalidDomain { domain: String },

    /// The configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// Errors raised by srcset range and width-list validation.
///
/// Validation runs before any URL is generated; on failure no partial
/// srcset output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `begin` width value was negative.
    #[error("`begin` width value must be at least zero (got {begin})")]
    NegativeBeginWidth { begin: i32 },

    /// `end` width value was negative.
    #[error("`end` width value must be at least zero (got {end})")]
    NegativeEndWidth { end: i32 },

    /// The width range begins after it ends.
    #[error("`begin` width value ({begin}) must be less than or equal to `end` width value ({end})")]
    InvalidWidthRange { begin: i32, end: i32 },

    /// Tolerance below the one-percent floor.
    #[error("width tolerance must be at least 0.01 (one percent), got {tolerance}")]
    InvalidTolerance { tolerance: f64 },

    /// An explicit width list was empty.
    #[error("explicit width list cannot be empty")]
    EmptyWidthList,

    /// An explicit width list contained a negative value.
    #[error("width values cannot be negative (got {width})")]
    NegativeWidth { width: i32 },
}
