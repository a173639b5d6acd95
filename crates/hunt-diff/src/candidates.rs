//! Candidate chains for the longest common subsequence search.
//!
//! A candidate is a matched pair `(i, j)` of positions in the longer and the
//! shorter sequence, linked to the candidate that ends the common subsequence
//! one element shorter. Candidates live in an arena and are never modified
//! after they are pushed; the table `K` only moves its slots to newer ones.

use crate::classes::Classes;

/// Handle of a candidate inside a [`Chains`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateId(usize);

/// The sentinel that precedes every chain.
const SENTINEL: CandidateId = CandidateId(0);

/// A matched pair. Both positions are `None` for the sentinel, which orders it
/// before every real position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub longer: Option<usize>,
    pub shorter: Option<usize>,
    prev: Option<CandidateId>,
}

impl Candidate {
    /// Number of longer-sequence elements up to and including this match.
    #[inline]
    pub fn longer_end(&self) -> usize {
        self.longer.map_or(0, |i| i + 1)
    }

    /// Number of shorter-sequence elements up to and including this match.
    #[inline]
    pub fn shorter_end(&self) -> usize {
        self.shorter.map_or(0, |j| j + 1)
    }
}

/// Result of [`Chains::search`].
#[derive(Debug, Clone)]
pub struct Chains {
    arena: Vec<Candidate>,
    /// `table[k]` is the best candidate ending a common subsequence of length
    /// `k`. Its `shorter` positions are strictly increasing in `k`.
    table: Vec<CandidateId>,
}

impl Chains {
    /// Runs the candidate search of `longer` against the classes of the
    /// shorter sequence.
    ///
    /// Every match of `longer[i]` may update its own slot, so one `i` can
    /// both lower an existing slot and grow the table.
    pub fn search(longer: &[u64], classes: &Classes) -> Self {
        let entries = classes.entries();
        let first: Vec<usize> = longer.iter().map(|&v| classes.find_first(v)).collect();

        let mut chains = Chains {
            arena: vec![Candidate {
                longer: None,
                shorter: None,
                prev: None,
            }],
            table: vec![SENTINEL],
        };

        for (i, &start) in first.iter().enumerate() {
            let class = &entries[start..];
            let end = class.iter().position(|e| e.last).map_or(0, |k| k + 1);
            // Matches of one `i` are merged from the largest `j` down, so a
            // slot written for a larger `j` is never read by a smaller one.
            for entry in class[..end].iter().rev() {
                let j = Some(entry.index);
                let s = chains
                    .table
                    .partition_point(|&id| chains.arena[id.0].shorter <= j);
                let below = chains.table[s - 1];
                if chains.arena[below.0].shorter < j {
                    chains.extend(s, i, entry.index, below);
                }
            }
        }
        chains
    }

    fn extend(&mut self, slot: usize, i: usize, j: usize, prev: CandidateId) {
        let id = CandidateId(self.arena.len());
        self.arena.push(Candidate {
            longer: Some(i),
            shorter: Some(j),
            prev: Some(prev),
        });
        if slot == self.table.len() {
            self.table.push(id);
        } else {
            self.table[slot] = id;
        }
    }

    /// Length of the longest common subsequence found.
    pub fn len(&self) -> usize {
        self.table.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The candidate ending the longest chain (the sentinel when nothing
    /// matched).
    pub fn last(&self) -> &Candidate {
        self.get(self.table[self.len()])
    }

    pub fn get(&self, id: CandidateId) -> &Candidate {
        &self.arena[id.0]
    }

    /// The predecessor of `c`; the sentinel is its own predecessor.
    pub fn prev_of(&self, c: &Candidate) -> &Candidate {
        self.get(c.prev.unwrap_or(SENTINEL))
    }

    /// Matched `(longer, shorter)` pairs of the longest chain, front to back.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.len());
        let mut c = self.last();
        while let (Some(i), Some(j)) = (c.longer, c.shorter) {
            out.push((i, j));
            c = self.prev_of(c);
        }
        out.reverse();
        out
    }
}
