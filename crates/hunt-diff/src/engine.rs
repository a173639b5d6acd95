//! The integer sequence diff.

use tracing::{debug_span, trace};

use crate::candidates::Chains;
use crate::classes::Classes;
use crate::op::Op;

/// Computes a minimal edit script turning `left` into `right`.
///
/// The number of [`Op::Equal`] entries is the length of a longest common
/// subsequence of the inputs. Consuming one left element per `DeleteLeft`
/// and `Equal` op reproduces `left`; consuming one right element per
/// `InsertRight` and `Equal` op reproduces `right`.
///
/// ```
/// use hunt_diff::{diff, Op};
///
/// let ops = diff(&[10, 20, 30, 40], &[1, 10, 20, 25, 40, 45]);
/// assert_eq!(ops.iter().filter(|op| **op == Op::Equal).count(), 3);
/// ```
pub fn diff(left: &[u64], right: &[u64]) -> Vec<Op> {
    let span = debug_span!("diff", left = left.len(), right = right.len());
    let _enter = span.enter();

    let prefix = left
        .iter()
        .zip(right)
        .take_while(|(a, b)| a == b)
        .count();
    let (left, right) = (&left[prefix..], &right[prefix..]);

    let suffix = left
        .iter()
        .rev()
        .zip(right.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let left = &left[..left.len() - suffix];
    let right = &right[..right.len() - suffix];
    trace!(prefix, suffix, "trimmed common ends");

    let mut out = Vec::with_capacity(prefix + suffix + left.len() + right.len());
    out.resize(prefix, Op::Equal);
    middle(left, right, &mut out);
    out.resize(out.len() + suffix, Op::Equal);
    out
}

/// Appends the edit script for the trimmed middle block to `out`.
fn middle(left: &[u64], right: &[u64], out: &mut Vec<Op>) {
    if left.is_empty() || right.is_empty() {
        out.extend(std::iter::repeat(Op::DeleteLeft).take(left.len()));
        out.extend(std::iter::repeat(Op::InsertRight).take(right.len()));
        return;
    }

    // Index the shorter side; `swapped` remembers that the longer one is
    // actually the right input.
    let swapped = left.len() < right.len();
    let (longer, shorter) = if swapped { (right, left) } else { (left, right) };
    let longer_op = if swapped { Op::DeleteLeft.mirror() } else { Op::DeleteLeft };
    let shorter_op = longer_op.mirror();

    let classes = Classes::build(shorter);
    let chains = Chains::search(longer, &classes);
    let k = chains.len();
    trace!(swapped, longer = longer.len(), shorter = shorter.len(), lcs = k, "candidate search done");

    let start = out.len();
    out.resize(start + longer.len() + shorter.len() - k, Op::Equal);

    let (mut i, mut j) = (longer.len(), shorter.len());
    let mut c = chains.last();
    for slot in out[start..].iter_mut().rev() {
        if i > c.longer_end() {
            *slot = longer_op;
            i -= 1;
        } else if j > c.shorter_end() {
            *slot = shorter_op;
            j -= 1;
        } else {
            *slot = Op::Equal;
            i -= 1;
            j -= 1;
            c = chains.prev_of(c);
        }
    }
}
