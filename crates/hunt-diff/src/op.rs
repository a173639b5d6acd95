use serde::{Deserialize, Serialize};

/// One step of an edit script.
///
/// The variants are ordered `DeleteLeft < Equal < InsertRight`, so "does this
/// op consume a left element" is `op < InsertRight` and "does it consume a
/// right element" is `op > DeleteLeft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// The next left element is not in the right sequence.
    DeleteLeft,
    /// The next left and right elements match.
    Equal,
    /// The next right element is not in the left sequence.
    InsertRight,
}

impl Op {
    /// Returns `true` for ops that consume one element of the left sequence.
    #[inline]
    pub fn consumes_left(self) -> bool {
        self < Op::InsertRight
    }

    /// Returns `true` for ops that consume one element of the right sequence.
    #[inline]
    pub fn consumes_right(self) -> bool {
        self > Op::DeleteLeft
    }

    /// Swaps the roles of the two sides.
    #[inline]
    pub fn mirror(self) -> Op {
        match self {
            Op::DeleteLeft => Op::InsertRight,
            Op::Equal => Op::Equal,
            Op::InsertRight => Op::DeleteLeft,
        }
    }
}

/// An op annotated with the left and right indices it consumes.
pub type PositionedOp = (Op, Option<usize>, Option<usize>);

/// Walks `ops` and attaches to each one the index of the left element and the
/// index of the right element it consumes.
///
/// ```
/// use hunt_diff::{positions, Op};
///
/// let ops = [Op::InsertRight, Op::Equal, Op::DeleteLeft];
/// assert_eq!(
///     positions(&ops),
///     vec![
///         (Op::InsertRight, None, Some(0)),
///         (Op::Equal, Some(0), Some(1)),
///         (Op::DeleteLeft, Some(1), None),
///     ]
/// );
/// ```
pub fn positions(ops: &[Op]) -> Vec<PositionedOp> {
    let (mut i, mut j) = (0usize, 0usize);
    ops.iter()
        .map(|&op| {
            let left = op.consumes_left().then(|| {
                i += 1;
                i - 1
            });
            let right = op.consumes_right().then(|| {
                j += 1;
                j - 1
            });
            (op, left, right)
        })
        .collect()
}

/// Folds consecutive ops of the same kind into `(op, count)` runs.
pub fn runs(ops: &[Op]) -> Vec<(Op, usize)> {
    let mut out: Vec<(Op, usize)> = Vec::new();
    for &op in ops {
        if let Some(last) = out.last_mut() {
            if last.0 == op {
                last.1 += 1;
                continue;
            }
        }
        out.push((op, 1));
    }
    out
}

/// Number of [`Op::Equal`] entries, i.e. the length of the common subsequence
/// the edit script keeps.
pub fn common_len(ops: &[Op]) -> usize {
    ops.iter().filter(|op| **op == Op::Equal).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_classifies_sides() {
        assert!(Op::DeleteLeft < Op::Equal && Op::Equal < Op::InsertRight);
        assert!(Op::DeleteLeft.consumes_left() && !Op::DeleteLeft.consumes_right());
        assert!(Op::Equal.consumes_left() && Op::Equal.consumes_right());
        assert!(!Op::InsertRight.consumes_left() && Op::InsertRight.consumes_right());
    }

    #[test]
    fn mirror_swaps_sides() {
        assert_eq!(Op::DeleteLeft.mirror(), Op::InsertRight);
        assert_eq!(Op::InsertRight.mirror(), Op::DeleteLeft);
        assert_eq!(Op::Equal.mirror(), Op::Equal);
    }

    #[test]
    fn runs_merge_adjacent_kinds() {
        use Op::*;
        assert!(runs(&[]).is_empty());
        assert_eq!(
            runs(&[Equal, Equal, DeleteLeft, InsertRight, InsertRight, Equal]),
            vec![(Equal, 2), (DeleteLeft, 1), (InsertRight, 2), (Equal, 1)]
        );
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&[Op::DeleteLeft, Op::Equal, Op::InsertRight]).unwrap();
        assert_eq!(json, r#"["delete_left","equal","insert_right"]"#);
        let back: Vec<Op> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Op::DeleteLeft, Op::Equal, Op::InsertRight]);
    }
}
