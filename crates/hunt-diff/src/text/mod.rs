//! Diffing byte buffers token by token.
//!
//! Both buffers are cut into tokens by a [`Splitter`], every token is reduced
//! to a fingerprint by a [`TokenHasher`], and the fingerprint sequences go
//! through [`crate::diff`]. The resulting ops get their token text attached
//! again.

pub mod error;
pub mod hash;
pub mod split;

use serde::Serialize;
use tracing::debug;

pub use error::SplitError;
pub use hash::{process_seed, DefaultHash, SeededHash, TokenHasher};
pub use split::{SplitBytes, SplitLines, SplitLinesCrlf, Splitter};

use crate::op::Op;

/// One op of a text diff with the token it applies to.
///
/// For [`Op::Equal`] the token is taken from the right buffer. The two sides
/// only differ if their fingerprints collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextOp<'a> {
    pub op: Op,
    #[serde(with = "lossy_str")]
    pub text: &'a [u8],
}

mod lossy_str {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(text: &&[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&String::from_utf8_lossy(text))
    }
}

/// Splitter and hasher used by a text diff.
///
/// `TextDiff::new()` cuts lines with [`SplitLines`] and fingerprints them with
/// [`DefaultHash`].
///
/// ```
/// use hunt_diff::text::{SplitLinesCrlf, TextDiff};
/// use hunt_diff::Op;
///
/// let ops = TextDiff::new()
///     .with_splitter(SplitLinesCrlf)
///     .diff(b"a\r\nb\r\n", b"a\r\nc\r\n")
///     .unwrap();
/// let kinds: Vec<Op> = ops.iter().map(|t| t.op).collect();
/// assert_eq!(kinds, vec![Op::Equal, Op::InsertRight, Op::DeleteLeft]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDiff<S = SplitLines, H = DefaultHash> {
    splitter: S,
    hasher: H,
}

impl TextDiff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Splitter, H: TokenHasher> TextDiff<S, H> {
    pub fn with_splitter<S2: Splitter>(self, splitter: S2) -> TextDiff<S2, H> {
        TextDiff {
            splitter,
            hasher: self.hasher,
        }
    }

    pub fn with_hasher<H2: TokenHasher>(self, hasher: H2) -> TextDiff<S, H2> {
        TextDiff {
            splitter: self.splitter,
            hasher,
        }
    }

    /// Diffs `left` against `right`, one op per token.
    pub fn diff<'a>(
        &self,
        left: &'a [u8],
        right: &'a [u8],
    ) -> Result<Vec<TextOp<'a>>, SplitError> {
        let (left_tokens, left_hashes) = self.tokenize(left)?;
        let (right_tokens, right_hashes) = self.tokenize(right)?;

        let mut left_tokens = left_tokens.into_iter();
        let mut right_tokens = right_tokens.into_iter();
        let ops = crate::diff(&left_hashes, &right_hashes);
        let mut out = Vec::with_capacity(ops.len());
        for op in ops {
            let l = if op.consumes_left() { left_tokens.next() } else { None };
            let r = if op.consumes_right() { right_tokens.next() } else { None };
            // The op list consumes exactly as many tokens as each side has.
            if let Some(text) = r.or(l) {
                out.push(TextOp { op, text });
            }
        }
        Ok(out)
    }

    fn tokenize<'a>(&self, buf: &'a [u8]) -> Result<(Vec<&'a [u8]>, Vec<u64>), SplitError> {
        let mut tokens = Vec::new();
        let mut hashes = Vec::new();
        let mut offset = 0usize;
        while offset < buf.len() {
            let rest = &buf[offset..];
            let (token, skip) = self.splitter.split(rest);
            let consumed = token.checked_add(skip);
            match consumed {
                Some(0) => {
                    debug!(offset, "splitter consumed nothing");
                    return Err(SplitError::EmptySplit { offset });
                }
                Some(n) if n <= rest.len() => {
                    let text = &rest[..token];
                    hashes.push(self.hasher.hash(text));
                    tokens.push(text);
                    offset += n;
                }
                _ => {
                    debug!(offset, token, skip, remaining = rest.len(), "splitter overran buffer");
                    return Err(SplitError::OutOfBounds {
                        offset,
                        token,
                        skip,
                        remaining: rest.len(),
                    });
                }
            }
        }
        Ok((tokens, hashes))
    }
}

/// Diffs two buffers with the given splitter and hasher.
pub fn diff_text<'a, S, H>(
    left: &'a [u8],
    right: &'a [u8],
    splitter: S,
    hasher: H,
) -> Result<Vec<TextOp<'a>>, SplitError>
where
    S: Splitter,
    H: TokenHasher,
{
    TextDiff { splitter, hasher }.diff(left, right)
}

/// Line diff with the default splitter and hasher.
///
/// ```
/// use hunt_diff::text::{diff_lines, src, dst};
///
/// let left = b"a\nb\nc";
/// let right = b"a\nc\nd";
/// let ops = diff_lines(left, right).unwrap();
/// assert_eq!(src(&ops), vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
/// assert_eq!(dst(&ops), vec![&b"a"[..], &b"c"[..], &b"d"[..]]);
/// ```
pub fn diff_lines<'a>(left: &'a [u8], right: &'a [u8]) -> Result<Vec<TextOp<'a>>, SplitError> {
    TextDiff::new().diff(left, right)
}

/// Tokens of the left buffer, as recorded in `ops`.
pub fn src<'a>(ops: &[TextOp<'a>]) -> Vec<&'a [u8]> {
    ops.iter().filter(|t| t.op.consumes_left()).map(|t| t.text).collect()
}

/// Tokens of the right buffer, as recorded in `ops`.
pub fn dst<'a>(ops: &[TextOp<'a>]) -> Vec<&'a [u8]> {
    ops.iter().filter(|t| t.op.consumes_right()).map(|t| t.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ops: &[TextOp<'_>]) -> Vec<String> {
        ops.iter()
            .map(|t| {
                let sigil = match t.op {
                    Op::DeleteLeft => '-',
                    Op::Equal => ' ',
                    Op::InsertRight => '+',
                };
                format!("{sigil}{}", String::from_utf8_lossy(t.text))
            })
            .collect()
    }

    #[test]
    fn line_diff_example() {
        let left = b"a\nb\nc\nd\nf\ng\nh\nj\nq\nz";
        let right = b"a\nb\nc\nd\ne\nf\ng\ni\nj\nk\nr\nx\ny\nz";
        let ops = diff_lines(left, right).unwrap();
        assert_eq!(
            render(&ops),
            vec![
                " a", " b", " c", " d", "+e", " f", " g", "-h", "+i", " j", "-q", "+k", "+r",
                "+x", "+y", " z",
            ]
        );
    }

    #[test]
    fn empty_buffers() {
        assert!(diff_lines(b"", b"").unwrap().is_empty());
        assert_eq!(render(&diff_lines(b"", b"x\ny").unwrap()), vec!["+x", "+y"]);
        assert_eq!(render(&diff_lines(b"x\n", b"").unwrap()), vec!["-x"]);
    }

    #[test]
    fn equal_ops_carry_right_token_on_collision() {
        let collide = |_: &[u8]| 0u64;
        let ops = diff_text(b"left", b"right", SplitLines, collide).unwrap();
        assert_eq!(ops, vec![TextOp { op: Op::Equal, text: b"right" }]);
    }

    #[test]
    fn empty_split_is_rejected() {
        let stuck = |_: &[u8]| (0usize, 0usize);
        let err = diff_text(b"abc", b"abc", stuck, DefaultHash).unwrap_err();
        assert_eq!(err, SplitError::EmptySplit { offset: 0 });
    }

    #[test]
    fn overrunning_split_is_rejected() {
        let greedy = |buf: &[u8]| (buf.len(), 1usize);
        let err = diff_text(b"", b"abc", greedy, DefaultHash).unwrap_err();
        assert_eq!(
            err,
            SplitError::OutOfBounds {
                offset: 0,
                token: 3,
                skip: 1,
                remaining: 3,
            }
        );
        let huge = |_: &[u8]| (usize::MAX, 1usize);
        assert!(matches!(
            diff_text(b"a", b"", huge, DefaultHash),
            Err(SplitError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn serializes_text_as_string() {
        let ops = diff_lines(b"a", b"b").unwrap();
        let json = serde_json::to_string(&ops).unwrap();
        assert_eq!(
            json,
            r#"[{"op":"insert_right","text":"b"},{"op":"delete_left","text":"a"}]"#
        );
    }
}
