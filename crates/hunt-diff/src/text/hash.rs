//! Token fingerprints.
//!
//! Tokens are compared by a 64-bit hash. Colliding tokens are treated as
//! equal, which can make a text diff suboptimal but never breaks it.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::sync::OnceLock;

use rand::Rng;

/// Maps a token to a 64-bit fingerprint.
pub trait TokenHasher {
    fn hash(&self, token: &[u8]) -> u64;
}

impl<F> TokenHasher for F
where
    F: Fn(&[u8]) -> u64,
{
    fn hash(&self, token: &[u8]) -> u64 {
        self(token)
    }
}

/// Hash keyed by an explicit seed.
///
/// Equal seeds give equal fingerprints within one build; the values are not
/// stable across compiler or crate versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededHash {
    seed: u64,
}

impl SeededHash {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TokenHasher for SeededHash {
    fn hash(&self, token: &[u8]) -> u64 {
        let mut h = DefaultHasher::new();
        h.write_u64(self.seed);
        h.write(token);
        h.finish()
    }
}

static PROCESS_SEED: OnceLock<u64> = OnceLock::new();

/// Seed of [`DefaultHash`], drawn on first use and fixed for the rest of the
/// process.
pub fn process_seed() -> u64 {
    *PROCESS_SEED.get_or_init(|| rand::thread_rng().gen())
}

/// The hash used when none is configured: a [`SeededHash`] keyed by
/// [`process_seed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHash;

impl TokenHasher for DefaultHash {
    fn hash(&self, token: &[u8]) -> u64 {
        SeededHash::new(process_seed()).hash(token)
    }
}
