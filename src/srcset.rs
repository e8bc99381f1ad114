//! Srcset ladder generation.
//!
//! Two ladder shapes exist. Fixed-dimension parameter sets get a
//! pixel-density ladder (`1x`..`5x`, optionally with per-density quality);
//! everything else gets a geometric width ladder bounded by a begin/end
//! range and a growth tolerance. Which parameter combinations count as
//! "fixed-dimension" changed across releases, so the predicate is a
//! versioned policy rather than a hard-coded rule.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_WIDTH_TOLERANCE, DPR_QUALITIES, MAX_SRCSET_WIDTH, MIN_SRCSET_WIDTH,
};
use crate::error::ValidationError;
use crate::validate;

/// Which parameter combinations switch srcset output to a DPR ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DprPolicy {
    /// A non-empty `w` or a non-empty `h` selects the DPR ladder.
    WidthOrHeight,

    /// A non-empty `w`, or a non-empty `h` together with a non-empty `ar`.
    /// This is the current rule: a bare height no longer fixes the render
    /// dimensions, so it falls back to the width ladder.
    #[default]
    WidthOrHeightAndAspectRatio,
}

impl DprPolicy {
    /// Decide whether `params` describe a fixed-dimension image.
    pub fn is_dpr(&self, params: &HashMap<String, String>) -> bool {
        let has = |key: &str| params.get(key).is_some_and(|value| !value.is_empty());

        match self {
            DprPolicy::WidthOrHeight => has("w") || has("h"),
            DprPolicy::WidthOrHeightAndAspectRatio => has("w") || (has("h") && has("ar")),
        }
    }
}

/// Range and quality settings for srcset generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SrcsetOptions {
    /// Beginning width of the ladder range, inclusive.
    pub begin: i32,
    /// Ending width of the ladder range, inclusive.
    pub end: i32,
    /// Fractional growth tolerance between ladder entries (0.08 = 8%).
    pub tolerance: f64,
    /// Suppress the per-density `q` parameter in DPR ladders.
    pub disable_variable_quality: bool,
}

impl Default for SrcsetOptions {
    fn default() -> Self {
        Self {
            begin: MIN_SRCSET_WIDTH as i32,
            end: MAX_SRCSET_WIDTH as i32,
            tolerance: DEFAULT_WIDTH_TOLERANCE,
            disable_variable_quality: false,
        }
    }
}

/// Variable output quality for a DPR ratio in `1..=5`.
pub fn dpr_quality(ratio: u32) -> u32 {
    DPR_QUALITIES[(ratio - 1) as usize]
}

/// The default ladder: 31 widths from 100 to 8192 at 8% tolerance,
/// computed once.
pub fn default_target_widths() -> &'static [u32] {
    static WIDTHS: OnceLock<Vec<u32>> = OnceLock::new();
    WIDTHS.get_or_init(|| {
        compute_target_widths(
            MIN_SRCSET_WIDTH as f64,
            MAX_SRCSET_WIDTH as f64,
            DEFAULT_WIDTH_TOLERANCE,
        )
    })
}

/// Compute the target-width ladder for a range, validating it first.
///
/// The default range returns the shared precomputed table. A range with
/// `begin == end` yields the single-element ladder `[begin]`.
pub fn target_widths(begin: i32, end: i32, tolerance: f64) -> Result<Vec<u32>, ValidationError> {
    validate::validate_range_and_tolerance(begin, end, tolerance)?;

    if is_default_range(begin, end, tolerance) {
        return Ok(default_target_widths().to_vec());
    }

    Ok(compute_target_widths(begin as f64, end as f64, tolerance))
}

fn is_default_range(begin: i32, end: i32, tolerance: f64) -> bool {
    begin == MIN_SRCSET_WIDTH as i32
        && end == MAX_SRCSET_WIDTH as i32
        && tolerance == DEFAULT_WIDTH_TOLERANCE
}

/// Geometric ladder: emit the rounded cursor, grow the unrounded cursor by
/// `1 + 2·tolerance`, and force the exact `end` value as the last element.
fn compute_target_widths(begin: f64, end: f64, tolerance: f64) -> Vec<u32> {
    if begin == end {
        return vec![begin as u32];
    }

    let max = MAX_SRCSET_WIDTH as f64;
    let mut widths = Vec::new();
    let mut cursor = begin;
    while cursor < end && cursor < max {
        // Round on emit so 115.999… becomes 116; growth stays unrounded.
        widths.push(cursor.round() as u32);
        cursor *= 1.0 + tolerance * 2.0;
    }

    if widths.last().copied().unwrap_or(0) < end as u32 {
        widths.push(end as u32);
    }

    widths
}
