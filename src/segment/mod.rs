//! Segmentation service: a bounded cache in front of a pluggable oracle
//!
//! One service instance is shared across navigation calls and documents.
//! Token lists are cached per exact line text under strict LRU eviction,
//! and the whole cache is dropped whenever the active oracle changes so no
//! stale cross-oracle entry can survive a switch.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::error::{NavError, Result};

pub mod oracle;
#[cfg(feature = "jieba")]
pub mod pos;

#[cfg(feature = "jieba")]
pub use oracle::JiebaSegmenter;
pub use oracle::{OracleConfig, OracleKind, Segmenter, Token, UnicodeSegmenter};

/// Default number of cached line segmentations
pub const DEFAULT_CACHE_CAPACITY: usize = 25;

struct Inner {
    oracle: Option<Box<dyn Segmenter>>,
    cache: LruCache<String, Arc<[Token]>>,
}

/// Shared front end to the active segmentation oracle.
///
/// Owns the oracle plus an LRU cache of token lists keyed by exact line
/// text. A single mutex makes the read-check-insert sequence atomic per
/// key; cache access is nowhere near a hot enough path for finer locking.
pub struct SegmentationService {
    /* RwLock is unusable here: the LRU mutates on read */
    inner: Mutex<Inner>,
    /// Set once the first unavailability warning has been logged
    warned: AtomicBool,
}

impl SegmentationService {
    /// Create a service with no oracle; [`segment`](Self::segment) fails
    /// with `NoOracleConfigured` until [`configure`](Self::configure) runs
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a service with a custom cache capacity (entries, not bytes)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        SegmentationService {
            inner: Mutex::new(Inner {
                oracle: None,
                cache: LruCache::new(capacity),
            }),
            warned: AtomicBool::new(false),
        }
    }

    /// Activate the oracle described by `config`, dropping every cached
    /// entry. Calls issued after this returns see only the new oracle.
    pub fn configure(&self, config: OracleConfig) {
        let oracle: Box<dyn Segmenter> = match config.kind {
            OracleKind::Unicode => {
                if !config.locales.is_empty() {
                    tracing::debug!(
                        locales = ?config.locales,
                        "UAX #29 oracle applies locale-independent rules; locale list ignored"
                    );
                }
                Box::new(UnicodeSegmenter)
            }
            #[cfg(feature = "jieba")]
            OracleKind::Jieba => Box::new(JiebaSegmenter::new()),
        };
        self.install(oracle);
    }

    /// Install a caller-supplied oracle (e.g. a host-provided segmenter)
    pub fn configure_with(&self, oracle: Box<dyn Segmenter>) {
        self.install(oracle);
    }

    fn install(&self, oracle: Box<dyn Segmenter>) {
        let mut inner = self.inner.lock();
        tracing::debug!(oracle = oracle.name(), "segmentation oracle configured");
        inner.cache.clear();
        inner.oracle = Some(oracle);
        self.warned.store(false, Ordering::Relaxed);
    }

    /// Tokens for `text`, cached by exact string.
    ///
    /// A hit refreshes recency; a miss invokes the oracle and stores the
    /// result, evicting the least-recently-used entry once capacity is
    /// reached.
    ///
    /// # Errors
    /// `NoOracleConfigured` or `SegmentationUnavailable`; navigation treats
    /// both as "no CJK match" rather than failing the call.
    pub fn segment(&self, text: &str) -> Result<Arc<[Token]>> {
        let mut inner = self.inner.lock();
        if let Some(tokens) = inner.cache.get(text) {
            return Ok(Arc::clone(tokens));
        }

        let tokens: Arc<[Token]> = match inner.oracle.as_ref() {
            Some(oracle) => match oracle.segment(text) {
                Ok(tokens) => tokens.into(),
                Err(err) => return Err(self.unavailable(NavError::segmentation(err.message))),
            },
            None => return Err(self.unavailable(NavError::no_oracle())),
        };

        inner.cache.put(text.to_string(), Arc::clone(&tokens));
        Ok(tokens)
    }

    /// Log the first unavailability per configuration, then stay quiet:
    /// the caller sees this on every keystroke, the user should not
    fn unavailable(&self, err: NavError) -> NavError {
        if !self.warned.swap(true, Ordering::Relaxed) {
            tracing::warn!(%err, "segmentation unavailable; CJK word jumps degrade to no-ops");
        }
        err
    }
}

impl Default for SegmentationService {
    fn default() -> Self {
        Self::new()
    }
}
