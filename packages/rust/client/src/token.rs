//! Round-robin credential pool.
//!
//! Owned by the fetch client instance rather than living in process-global
//! state, so tests can construct pools with fixed rotation sequences.

use std::sync::atomic::{AtomicUsize, Ordering};

use talentscout_shared::{Result, TalentScoutError};

/// A pool of bearer tokens handed out in round-robin order.
///
/// `next` is an atomic rotation: concurrent callers never desynchronize the
/// cursor, though strict fairness under contention is not guaranteed.
#[derive(Debug)]
pub struct TokenPool {
    tokens: Vec<String>,
    cursor: AtomicUsize,
}

impl TokenPool {
    /// Create a pool. Fails with a config error when no tokens are provided.
    pub fn new(tokens: Vec<String>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(TalentScoutError::config(
                "credential pool is empty: at least one GitHub token is required",
            ));
        }

        Ok(Self {
            tokens,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Hand out the next token in rotation.
    pub fn next(&self) -> &str {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        &self.tokens[i % self.tokens.len()]
    }

    /// Number of tokens in the pool.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the pool holds no tokens. Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
