//! Builder configuration.
//!
//! Mirrors the programmatic [`UrlBuilder`](crate::UrlBuilder) settings as a
//! serde structure, so applications can keep their image-source settings in
//! YAML next to the rest of their configuration and validate them up front.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shard::ShardStrategy;
use crate::srcset::DprPolicy;

/// Fully-qualified domain name: lowercase labels, no scheme, no path.
const DOMAIN_PATTERN: &str =
    r"^(?:[a-z\d\-_]{1,62}\.){0,125}(?:[a-z\d](?:[a-z\d\-]{0,61}[a-z\d])?\.)[a-z\d]{1,63}$";

fn domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The bounded `{0,125}` repetition compiles to a program larger than
        // the regex crate's default 10 MiB budget, so raise the size limit.
        // The pattern itself is unchanged.
        regex::RegexBuilder::new(DOMAIN_PATTERN)
            .size_limit(1 << 28)
            .build()
            .expect("domain pattern is valid")
    })
}

/// Settings for a [`UrlBuilder`](crate::UrlBuilder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Domain pool; a single entry makes sharding a no-op.
    pub domains: Vec<String>,

    /// Emit `https` URLs (default) or `http`.
    #[serde(default = "default_use_https")]
    pub use_https: bool,

    /// Token for `s=` request signing; omit for unsigned URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_key: Option<String>,

    /// Append the `ixlib` library identifier parameter.
    #[serde(default = "default_include_library_param")]
    pub include_library_param: bool,

    /// Domain selection strategy for multi-domain pools.
    #[serde(default)]
    pub shard_strategy: ShardStrategy,

    /// Which parameter combinations switch srcset output to a DPR ladder.
    #[serde(default)]
    pub dpr_policy: DprPolicy,
}

fn default_use_https() -> bool {
    true
}

fn default_include_library_param() -> bool {
    true
}

impl UrlConfig {
    /// Single-domain configuration with all defaults.
    pub fn new(domain: impl Into<String>) -> Self {
        Self::with_domains([domain.into()])
    }

    /// Multi-domain configuration with all defaults.
    pub fn with_domains<I>(domains: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
            use_https: default_use_https(),
            sign_key: None,
            include_library_param: default_include_library_param(),
            shard_strategy: ShardStrategy::default(),
            dpr_policy: DprPolicy::default(),
        }
    }

    /// Parse a YAML document and validate the result.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: UrlConfig =
            serde_yaml::from_str(yaml).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the domain pool: non-empty, every entry a bare FQDN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domains.is_empty() {
            return Err(ConfigError::EmptyDomainPool);
        }

        for domain in &self.domains {
            if !domain_regex().is_match(domain) {
                return Err(ConfigError::InvalidDomain {
                    domain: domain.clone(),
                });
            }
        }

        Ok(())
    }
}
