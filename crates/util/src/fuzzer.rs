use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// A fuzzer for generating diff inputs.
///
/// Uses the xoshiro256** PRNG so a failing case can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use hunt_diff_util::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::new(Some([7u8; 32]));
///
/// let seq = fuzzer.sequence(0..=8, 4);
/// assert!(seq.len() <= 8);
/// assert!(seq.iter().all(|v| *v < 4));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// Generate a sequence whose length falls in `len` and whose values are
    /// drawn from `0..alphabet`.
    ///
    /// Small alphabets produce many repeated values, which is where the
    /// equivalence classes get large.
    pub fn sequence(&mut self, len: std::ops::RangeInclusive<usize>, alphabet: u64) -> Vec<u64> {
        let n = self.rng.gen_range(len);
        let alphabet = alphabet.max(1);
        (0..n).map(|_| self.rng.gen_range(0..alphabet)).collect()
    }

    /// Apply `edits` random single-element edits (delete, insert or replace)
    /// to `base`.
    ///
    /// Inserted and replacing values are drawn from `0..alphabet`.
    pub fn mutate(&mut self, base: &[u64], edits: usize, alphabet: u64) -> Vec<u64> {
        let mut out = base.to_vec();
        let alphabet = alphabet.max(1);
        for _ in 0..edits {
            let value = self.rng.gen_range(0..alphabet);
            match self.rng.gen_range(0..3u8) {
                0 if !out.is_empty() => {
                    let at = self.rng.gen_range(0..out.len());
                    out.remove(at);
                }
                1 if !out.is_empty() => {
                    let at = self.rng.gen_range(0..out.len());
                    out[at] = value;
                }
                _ => {
                    let at = self.rng.gen_range(0..=out.len());
                    out.insert(at, value);
                }
            }
        }
        out
    }

    /// Generate newline-separated text of `lines` lines, each picked from
    /// `vocabulary`.
    pub fn lines(&mut self, lines: usize, vocabulary: &[&str]) -> Vec<u8> {
        let mut out = Vec::new();
        for i in 0..lines {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(self.pick(vocabulary).as_bytes());
        }
        out
    }
}
