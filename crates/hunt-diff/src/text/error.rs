use thiserror::Error;

/// A [`Splitter`](super::Splitter) broke its contract.
///
/// Tokenizing stops at the first violation; no partial diff is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("splitter consumed nothing at offset {offset}")]
    EmptySplit { offset: usize },
    #[error(
        "splitter returned token {token} + skip {skip} at offset {offset}, \
         only {remaining} bytes remain"
    )]
    OutOfBounds {
        offset: usize,
        token: usize,
        skip: usize,
        remaining: usize,
    },
}
