//! Short identifier allocation
//!
//! Identifiers are fixed-length strings over upper- and lower-case ASCII
//! letters. A candidate is only handed out after the store confirms no
//! record holds it; the retry loop is bounded so a pathological store can
//! never spin forever.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::errors::{RedlinkError, Result};
use crate::storage::LinkStore;

/// 52-letter identifier alphabet
pub const ID_ALPHABET: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Identifier length; 52^10 candidates make collisions astronomically rare
pub const ID_LENGTH: usize = 10;

/// Upper bound on collision retries before giving up
pub const MAX_GENERATE_ATTEMPTS: usize = 32;

/// Generator for fresh short identifiers
///
/// The random source is injected at construction so tests can run a seeded
/// generator deterministically.
pub struct IdGenerator {
    rng: Mutex<StdRng>,
    length: usize,
}

impl IdGenerator {
    pub fn new(length: usize) -> Self {
        Self::with_rng(StdRng::from_os_rng(), length)
    }

    pub fn with_rng(rng: StdRng, length: usize) -> Self {
        Self {
            rng: Mutex::new(rng),
            length,
        }
    }

    /// Deterministic generator for tests
    pub fn seeded(seed: u64, length: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), length)
    }

    fn candidate(&self) -> String {
        let mut rng = self.rng.lock();
        (0..self.length)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }

    /// Allocate an identifier not currently bound to any record
    ///
    /// The caller persists the new record under the returned id; this only
    /// performs existence checks.
    pub async fn generate(&self, store: &dyn LinkStore) -> Result<String> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let candidate = self.candidate();

            if !store.exists(&candidate).await? {
                return Ok(candidate);
            }

            debug!(
                "Identifier collision on attempt {}/{}: {}",
                attempt, MAX_GENERATE_ATTEMPTS, candidate
            );
        }

        Err(RedlinkError::id_space_exhausted(format!(
            "no free identifier found after {} attempts",
            MAX_GENERATE_ATTEMPTS
        )))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(ID_LENGTH)
    }
}
