//! Whitespace helpers shared by the block segmenter and the example reformatter.
//!
//! Lines keep their trailing `\n` so that indentation math is the same for
//! every line, including the last one.

/// Number of leading space/tab bytes in `line`.
pub fn indent_len(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}

/// A line is blank when it is empty or consists of a lone newline.
pub fn is_blank(line: &str) -> bool {
    line.is_empty() || line == "\n"
}

/// Longest shared prefix of `a` and `b`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let n = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..n]
}

/// The whitespace prefix common to every non-blank line.
///
/// Seeded with the first line's own indentation, even when that line is blank.
pub fn common_indent<S: AsRef<str>>(lines: &[S]) -> &str {
    let Some(first) = lines.first() else {
        return "";
    };
    let first = first.as_ref();
    let mut prefix = &first[..indent_len(first)];
    for line in lines {
        let line = line.as_ref();
        if !is_blank(line) {
            prefix = common_prefix(prefix, &line[..indent_len(line)]);
        }
    }
    prefix
}

/// Strips the common whitespace prefix from every non-blank line.
pub fn unindent(lines: &mut [String]) {
    let n = common_indent(&*lines).len();
    if n == 0 {
        return;
    }
    for line in lines.iter_mut() {
        if !is_blank(line) {
            line.drain(..n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("", 0)]
    #[case("text", 0)]
    #[case("  text", 2)]
    #[case("\t\ttext", 2)]
    #[case(" \t \n", 3)]
    fn counts_leading_whitespace(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(indent_len(line), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("\n", true)]
    #[case(" \n", false)]
    #[case("x\n", false)]
    fn blank_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_blank(line), expected);
    }

    #[test]
    fn common_prefix_stops_at_first_difference() {
        assert_eq!(common_prefix("\t\t  ", "\t\t\t"), "\t\t");
        assert_eq!(common_prefix("abc", ""), "");
        assert_eq!(common_prefix("same", "same"), "same");
    }

    #[test]
    fn unindent_removes_shared_prefix_only() {
        let mut lines = owned(&["    a\n", "      b\n", "\n", "    c\n"]);
        unindent(&mut lines);
        assert_eq!(lines, owned(&["a\n", "  b\n", "\n", "c\n"]));
    }

    #[test]
    fn unindent_uses_bytes_not_columns() {
        // A tab and four spaces share no prefix, so nothing is removed.
        let mut lines = owned(&["\ta\n", "    b\n"]);
        unindent(&mut lines);
        assert_eq!(lines, owned(&["\ta\n", "    b\n"]));
    }

    #[test]
    fn unindent_seeds_from_first_line() {
        // The first line is blank, so its empty indentation wins.
        let mut lines = owned(&["\n", "  a\n", "  b\n"]);
        unindent(&mut lines);
        assert_eq!(lines, owned(&["\n", "  a\n", "  b\n"]));
    }

    #[test]
    fn unindent_empty_set_is_noop() {
        let mut lines: Vec<String> = vec![];
        unindent(&mut lines);
        assert!(lines.is_empty());
    }
}
