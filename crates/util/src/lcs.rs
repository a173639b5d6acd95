/// Length of a longest common subsequence of `a` and `b`.
///
/// Plain O(n·m) dynamic programming. Slow, but simple enough to serve as the
/// oracle the fast diff is checked against.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a[i] == b[j] {
                1 + dp[i + 1][j + 1]
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }
    dp[0][0]
}

/// Returns `true` when `sub` can be obtained from `seq` by deleting elements.
pub fn is_subsequence<T: PartialEq>(sub: &[T], seq: &[T]) -> bool {
    let mut rest = seq.iter();
    sub.iter().all(|x| rest.any(|y| y == x))
}
