//! hunt-diff-util - Test-support utilities for hunt-diff
//!
//! Seeded input generation and a reference longest-common-subsequence oracle.

pub mod fuzzer;
pub mod lcs;

pub use fuzzer::Fuzzer;
pub use lcs::{is_subsequence, lcs_len};
