//! Token boundaries.
//!
//! A splitter looks at the unconsumed rest of a buffer and answers with the
//! length of the next token and the number of bytes to skip after it.

/// Finds the next token in a buffer.
///
/// `split(buf)` returns `(token, skip)`: `buf[..token]` is the next token and
/// `token + skip` bytes are consumed. At least one of them must be positive
/// and their sum must not exceed `buf.len()`.
pub trait Splitter {
    fn split(&self, buf: &[u8]) -> (usize, usize);
}

impl<F> Splitter for F
where
    F: Fn(&[u8]) -> (usize, usize),
{
    fn split(&self, buf: &[u8]) -> (usize, usize) {
        self(buf)
    }
}

/// Splits at `\n`, dropping the newline.
///
/// A trailing newline does not produce an empty last token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitLines;

impl Splitter for SplitLines {
    fn split(&self, buf: &[u8]) -> (usize, usize) {
        match buf.iter().position(|b| *b == b'\n') {
            Some(i) => (i, 1),
            None => (buf.len(), 0),
        }
    }
}

/// Like [`SplitLines`], but a `\r` right before the newline is dropped too.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitLinesCrlf;

impl Splitter for SplitLinesCrlf {
    fn split(&self, buf: &[u8]) -> (usize, usize) {
        match buf.iter().position(|b| *b == b'\n') {
            Some(i) if i > 0 && buf[i - 1] == b'\r' => (i - 1, 2),
            Some(i) => (i, 1),
            None => (buf.len(), 0),
        }
    }
}

/// Every byte is its own token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitBytes;

impl Splitter for SplitBytes {
    fn split(&self, buf: &[u8]) -> (usize, usize) {
        (buf.len().min(1), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens<'a>(s: &impl Splitter, mut buf: &'a [u8]) -> Vec<&'a [u8]> {
        let mut out = Vec::new();
        while !buf.is_empty() {
            let (tok, skip) = s.split(buf);
            assert!(tok + skip > 0 && tok + skip <= buf.len());
            out.push(&buf[..tok]);
            buf = &buf[tok + skip..];
        }
        out
    }

    #[test]
    fn split_lines_matrix() {
        let cases: &[(&str, &[&str])] = &[
            ("a", &["a"]),
            ("a\n", &["a"]),
            ("\na", &["", "a"]),
            ("a\nb", &["a", "b"]),
            ("a\nb\nc", &["a", "b", "c"]),
            ("a\n\nb", &["a", "", "b"]),
            ("a\r\nb", &["a\r", "b"]),
        ];
        for (input, want) in cases {
            let got = tokens(&SplitLines, input.as_bytes());
            let want: Vec<&[u8]> = want.iter().map(|w| w.as_bytes()).collect();
            assert_eq!(got, want, "input {input:?}");
        }
    }

    #[test]
    fn split_lines_crlf_matrix() {
        let cases: &[(&str, &[&str])] = &[
            ("a\r\nb", &["a", "b"]),
            ("a\r\n", &["a"]),
            ("\r\n", &[""]),
            ("a\nb\r\n", &["a", "b"]),
            ("a\rb", &["a\rb"]),
        ];
        for (input, want) in cases {
            let got = tokens(&SplitLinesCrlf, input.as_bytes());
            let want: Vec<&[u8]> = want.iter().map(|w| w.as_bytes()).collect();
            assert_eq!(got, want, "input {input:?}");
        }
    }

    #[test]
    fn split_bytes_yields_each_byte() {
        assert_eq!(tokens(&SplitBytes, b"abc"), vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
    }

    #[test]
    fn closures_are_splitters() {
        let pairs = |buf: &[u8]| (buf.len().min(2), 0usize);
        assert_eq!(tokens(&pairs, b"abcde"), vec![&b"ab"[..], &b"cd"[..], &b"e"[..]]);
    }
}
