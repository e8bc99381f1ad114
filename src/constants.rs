// Constants module - centralized default values for URL and srcset generation
//
// Signature and ladder constants are interoperability requirements: servers
// verifying `s=` parameters and clients comparing cached srcset output both
// depend on these exact values.

/// Crate version, appended to the library identifier parameter.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query key for the library identifier parameter.
pub const LIBRARY_PARAM_KEY: &str = "ixlib";

/// Query key carrying the request signature.
pub const SIGNATURE_PARAM_KEY: &str = "s";

// =============================================================================
// Srcset width ladder defaults
// =============================================================================

/// Smallest width emitted by the default ladder.
pub const MIN_SRCSET_WIDTH: u32 = 100;

/// Largest width emitted by the default ladder.
pub const MAX_SRCSET_WIDTH: u32 = 8192;

/// Default width tolerance as a fraction (0.08 = 8%).
pub const DEFAULT_WIDTH_TOLERANCE: f64 = 0.08;

/// Smallest accepted width tolerance (one percent).
pub const MIN_WIDTH_TOLERANCE: f64 = 0.01;

// =============================================================================
// Pixel-density ladder
// =============================================================================

/// Device pixel ratios emitted by the DPR ladder, in output order.
pub const TARGET_RATIOS: [u32; 5] = [1, 2, 3, 4, 5];

/// Variable output quality per DPR ratio, indexed by `ratio - 1`.
pub const DPR_QUALITIES: [u32; 5] = [75, 50, 35, 23, 20];
