//! The public URL builder.

use std::collections::HashMap;

use crate::config::UrlConfig;
use crate::constants::{LIBRARY_PARAM_KEY, TARGET_RATIOS, VERSION};
use crate::error::{ConfigError, ValidationError};
use crate::path;
use crate::query;
use crate::shard::{ShardSelector, ShardStrategy};
use crate::signature;
use crate::srcset::{self, DprPolicy, SrcsetOptions};
use crate::url;
use crate::validate;

/// Builds deterministic image-service URLs and srcset descriptor strings.
///
/// A builder is configured once (domain pool, scheme, signing key) and then
/// used for any number of `create_url` / `create_srcset` calls. Apart from
/// the round-robin shard cursor every operation is a pure computation:
/// identical inputs always yield the identical URL string.
///
/// ```
/// use std::collections::HashMap;
/// use imgix::UrlBuilder;
///
/// let mut builder = UrlBuilder::new("demo.imgix.net").unwrap();
/// builder.set_include_library_param(false);
///
/// let mut params = HashMap::new();
/// params.insert("w".to_string(), "100".to_string());
/// params.insert("h".to_string(), "100".to_string());
///
/// assert_eq!(
///     builder.create_url_with_params("bridge.png", &params),
///     "https://demo.imgix.net/bridge.png?h=100&w=100"
/// );
/// ```
#[derive(Debug)]
pub struct UrlBuilder {
    domains: Vec<String>,
    use_https: bool,
    sign_key: Option<String>,
    include_library_param: bool,
    dpr_policy: DprPolicy,
    shard: ShardSelector,
}

impl UrlBuilder {
    /// Single-domain builder: https on, no signing, library parameter on.
    pub fn new(domain: &str) -> Result<Self, ConfigError> {
        Self::from_config(&UrlConfig::new(domain))
    }

    /// Builder over a shard pool, otherwise identical defaults to [`new`].
    ///
    /// [`new`]: UrlBuilder::new
    pub fn with_domains(domains: &[&str]) -> Result<Self, ConfigError> {
        Self::from_config(&UrlConfig::with_domains(domains.iter().copied()))
    }

    pub fn from_config(config: &UrlConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        tracing::debug!(
            domains = config.domains.len(),
            strategy = ?config.shard_strategy,
            signed = config.sign_key.is_some(),
            "constructed URL builder"
        );

        Ok(Self {
            domains: config.domains.clone(),
            use_https: config.use_https,
            sign_key: config.sign_key.clone().filter(|key| !key.is_empty()),
            include_library_param: config.include_library_param,
            dpr_policy: config.dpr_policy,
            shard: ShardSelector::new(config.shard_strategy),
        })
    }

    pub fn set_use_https(&mut self, use_https: bool) {
        self.use_https = use_https;
    }

    /// An empty key disables signing.
    pub fn set_sign_key(&mut self, sign_key: &str) {
        self.sign_key = if sign_key.is_empty() {
            None
        } else {
            Some(sign_key.to_owned())
        };
    }

    pub fn set_include_library_param(&mut self, include: bool) {
        self.include_library_param = include;
    }

    /// Replaces the selector, which also resets the round-robin cursor.
    pub fn set_shard_strategy(&mut self, strategy: ShardStrategy) {
        self.shard = ShardSelector::new(strategy);
    }

    pub fn set_dpr_policy(&mut self, policy: DprPolicy) {
        self.dpr_policy = policy;
    }

    /// Build a URL with no parameters beyond the configured ones.
    pub fn create_url(&self, raw_path: &str) -> String {
        self.create_url_with_params(raw_path, &HashMap::new())
    }

    /// Build a single image URL for `raw_path` and `params`.
    ///
    /// The domain is picked from the pool against the raw path, the path is
    /// sanitized, parameters are canonicalized (ascending key order, empty
    /// values dropped), and the signature is appended when a key is
    /// configured. The caller's map is never modified.
    pub fn create_url_with_params(
        &self,
        raw_path: &str,
        params: &HashMap<String, String>,
    ) -> String {
        let host = self.shard.pick(&self.domains, raw_path);
        let sanitized = path::sanitize_path(raw_path);

        let canonical = if self.include_library_param {
            let mut merged = params.clone();
            merged.insert(LIBRARY_PARAM_KEY.to_owned(), format!("rust-{}", VERSION));
            query::canonical_query(&merged)
        } else {
            query::canonical_query(params)
        };

        let final_query = match &self.sign_key {
            Some(key) => signature::signed_query(key, &sanitized, &canonical),
            None => canonical,
        };

        url::assemble(self.scheme(), host, &sanitized, &final_query)
    }

    /// Build a srcset descriptor with the default range and tolerance.
    pub fn create_srcset(
        &self,
        raw_path: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, ValidationError> {
        self.create_srcset_with_options(raw_path, params, &SrcsetOptions::default())
    }

    /// Build a srcset descriptor over a custom range.
    ///
    /// Fixed-dimension parameter sets (per the configured [`DprPolicy`])
    /// produce a five-entry `1x`..`5x` density ladder; anything else
    /// produces a width ladder over `begin..=end`. Range and tolerance are
    /// validated before any URL is generated.
    pub fn create_srcset_with_options(
        &self,
        raw_path: &str,
        params: &HashMap<String, String>,
        options: &SrcsetOptions,
    ) -> Result<String, ValidationError> {
        if self.dpr_policy.is_dpr(params) {
            Ok(self.build_dpr_srcset(raw_path, params, options.disable_variable_quality))
        } else {
            let targets = srcset::target_widths(options.begin, options.end, options.tolerance)?;
            Ok(self.build_width_srcset(raw_path, params, &targets))
        }
    }

    /// Build a width-ladder srcset from an explicit width list.
    ///
    /// The list must be non-empty and free of negative values.
    pub fn create_srcset_from_widths(
        &self,
        raw_path: &str,
        params: &HashMap<String, String>,
        widths: &[i32],
    ) -> Result<String, ValidationError> {
        validate::validate_widths(widths)?;

        let targets: Vec<u32> = widths.iter().map(|&width| width as u32).collect();
        Ok(self.build_width_srcset(raw_path, params, &targets))
    }

    fn build_width_srcset(
        &self,
        raw_path: &str,
        params: &HashMap<String, String>,
        targets: &[u32],
    ) -> String {
        tracing::debug!(entries = targets.len(), "generating width srcset");

        let mut entry_params = params.clone();
        let mut lines = Vec::with_capacity(targets.len());
        for &width in targets {
            entry_params.insert("w".to_owned(), width.to_string());
            lines.push(format!(
                "{} {}w",
                self.create_url_with_params(raw_path, &entry_params),
                width
            ));
        }

        lines.join(",\n")
    }

    fn build_dpr_srcset(
        &self,
        raw_path: &str,
        params: &HashMap<String, String>,
        disable_variable_quality: bool,
    ) -> String {
        tracing::debug!(
            variable_quality = !disable_variable_quality,
            "generating DPR srcset"
        );

        let caller_has_quality = params.get("q").is_some_and(|value| !value.is_empty());

        let mut entry_params = params.clone();
        let mut lines = Vec::with_capacity(TARGET_RATIOS.len());
        for ratio in TARGET_RATIOS {
            entry_params.insert("dpr".to_owned(), ratio.to_string());
            if !disable_variable_quality && !caller_has_quality {
                entry_params.insert("q".to_owned(), srcset::dpr_quality(ratio).to_string());
            }
            lines.push(format!(
                "{} {}x",
                self.create_url_with_params(raw_path, &entry_params),
                ratio
            ));
        }

        lines.join(",\n")
    }

    fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }
}
