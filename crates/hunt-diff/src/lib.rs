//! Hunt–McIlroy differential comparison.
//!
//! [`diff`] computes a minimal edit script between two `u64` sequences. The
//! [`text`] module reduces byte buffers to such sequences by splitting them
//! into tokens and hashing each token.

pub mod candidates;
pub mod classes;
pub mod engine;
pub mod op;
pub mod text;

pub use engine::diff;
pub use op::{common_len, positions, runs, Op, PositionedOp};
pub use text::{diff_lines, diff_text, SplitError, TextDiff, TextOp};
