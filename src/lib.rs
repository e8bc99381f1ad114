// Imgix URL building library
//
// Everything here is pure computation: identical inputs always produce the
// identical URL string, byte for byte. Generated URLs are cached and shared
// by consumers, so encoding and signing rules must not drift.

pub mod builder;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod path;
pub mod query;
pub mod shard;
pub mod signature;
pub mod srcset;
pub mod url;
pub mod validate;

pub use builder::UrlBuilder;
pub use config::UrlConfig;
pub use error::{ConfigError, ValidationError};
pub use shard::ShardStrategy;
pub use srcset::{target_widths, DprPolicy, SrcsetOptions};
