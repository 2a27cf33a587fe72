//! Small text transformations used by the page layout.

use std::borrow::Cow;

use super::model::SourcePos;

/// Escapes `*` and `_` so names like `New_Reader` survive Markdown.
pub fn md_escape(s: &str) -> Cow<'_, str> {
    escape_chars(s, &['*', '_'])
}

/// Escapes square brackets so a declaration can sit inside link text.
pub fn bracket_escape(s: &str) -> Cow<'_, str> {
    escape_chars(s, &['[', ']'])
}

fn escape_chars<'a>(s: &'a str, special: &[char]) -> Cow<'a, str> {
    if !s.contains(special) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Collapses a function declaration onto one line for the index.
pub fn one_line(decl: &str) -> String {
    decl.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces leading tabs on every line with `width` spaces each.
pub fn expand_leading_tabs(text: &str, width: usize) -> Cow<'_, str> {
    if width == 0 || !text.contains('\t') {
        return Cow::Borrowed(text);
    }
    let indent = " ".repeat(width);
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let body = line.trim_start_matches('\t');
        for _ in 0..line.len() - body.len() {
            out.push_str(&indent);
        }
        out.push_str(body);
    }
    Cow::Owned(out)
}

/// Fills `{file}` and `{line}` in a source link format.
pub fn src_link(format: &str, pos: &SourcePos) -> String {
    format
        .replace("{file}", pos.file.trim_start_matches('/'))
        .replace("{line}", &pos.line.to_string())
}

/// Rewrites absolute source links to paths relative to the package
/// directory, for a README that sits next to the sources.
pub fn relative_src_links(page: &str, import_path: &str) -> String {
    let mut out = page.replace("/src/target/", "./");
    let import_path = import_path.trim_matches('/');
    if !import_path.is_empty() {
        out = out.replace(&format!("/src/{import_path}/"), "./");
    }
    out
}
