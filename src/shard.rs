//! Domain shard selection.
//!
//! A builder may carry a pool of interchangeable hostnames. Which one a
//! given request uses is decided here, either deterministically from the
//! path (stable client cache affinity) or by cycling through the pool.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// How a domain is picked from the pool for each request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShardStrategy {
    /// CRC32 checksum of the raw path bytes, modulo the pool size. The
    /// same path always maps to the same domain, so browsers keep reusing
    /// the same connection for repeated requests.
    #[default]
    Crc,

    /// Advance an internal cursor by one on every call, independent of the
    /// path. The cursor pre-increments: the first call returns
    /// `pool[1 % n]`, not `pool[0]`. Consecutive calls still visit every
    /// domain once per cycle. Existing URLs were generated with this
    /// order, so it is preserved rather than corrected.
    Cycle,
}

/// Picks domains from a fixed pool according to a [`ShardStrategy`].
///
/// The cycle cursor is atomic, so sharing a selector across threads will
/// not tear the counter; the observed cycle order under concurrent callers
/// is still whatever interleaving the scheduler produces.
#[derive(Debug)]
pub struct ShardSelector {
    strategy: ShardStrategy,
    cursor: AtomicUsize,
}

impl ShardSelector {
    pub fn new(strategy: ShardStrategy) -> Self {
        Self {
            strategy,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn strategy(&self) -> ShardStrategy {
        self.strategy
    }

    /// Pick a domain for `path`. The pool is validated as non-empty at
    /// builder construction.
    pub fn pick<'a>(&self, domains: &'a [String], path: &str) -> &'a str {
        debug_assert!(!domains.is_empty());

        let index = match self.strategy {
            ShardStrategy::Crc => crc32fast::hash(path.as_bytes()) as usize % domains.len(),
            ShardStrategy::Cycle => {
                let previous = self.cursor.fetch_add(1, Ordering::SeqCst);
                previous.wrapping_add(1) % domains.len()
            }
        };

        &domains[index]
    }
}
