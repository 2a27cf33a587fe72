use std::{borrow::Cow, collections::HashMap, fmt, sync::LazyLock};

use regex::Regex;

use crate::options::Flavor;

const IDENT_RX: &str = r"[a-zA-Z_][a-zA-Z_0-9]*";

// scheme://host(.host|:port)*/path(.more|,more)*
const URL_RX: &str = concat!(
    r"(?:https?|ftp|file|gopher|mailto|news|nntp|telnet|wais|prospero):",
    r"//",
    r"[a-zA-Z0-9_@\-]+(?:[.:][a-zA-Z0-9_@\-]+)*/?",
    r"[a-zA-Z0-9_?%#~&/\-+=]+(?:[:.,][a-zA-Z0-9_?%#~&/\-+=]+)*",
);

static MATCH_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?P<url>{URL_RX})|(?P<ident>{IDENT_RX})")).unwrap());

static IDENT_ONLY_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{IDENT_RX}$")).unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkTableError {
    #[error("link key '{0}' is not an identifier")]
    InvalidIdentifier(String),
    #[error("link target for '{ident}' is empty")]
    EmptyUrl { ident: String },
    #[error("link target for '{ident}' contains whitespace: {url:?}")]
    InvalidUrl { ident: String, url: String },
}

/// Identifier to URL map used for auto-linking.
///
/// Read-only while rendering; entries are validated on insertion so a bad
/// table is rejected before any text is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    links: HashMap<String, String>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, LinkTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (ident, url) in pairs {
            table.insert(ident, url)?;
        }
        Ok(table)
    }

    pub fn insert(
        &mut self,
        ident: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<(), LinkTableError> {
        let ident = ident.into();
        let url = url.into();
        if !IDENT_ONLY_RX.is_match(&ident) {
            return Err(LinkTableError::InvalidIdentifier(ident));
        }
        if url.is_empty() {
            return Err(LinkTableError::EmptyUrl { ident });
        }
        if url.chars().any(char::is_whitespace) {
            return Err(LinkTableError::InvalidUrl { ident, url });
        }
        self.links.insert(ident, url);
        Ok(())
    }

    /// Copies every entry of `other` in, replacing existing targets.
    pub fn merge(&mut self, other: &LinkTable) {
        self.links
            .extend(other.links.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn get(&self, ident: &str) -> Option<&str> {
        self.links.get(ident).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Escapes prose for the given flavor.
///
/// Markdown passes through untouched: comment prose may already carry
/// Markdown of its own.
pub fn escape_text(flavor: Flavor, text: &str) -> Cow<'_, str> {
    match flavor {
        Flavor::Markdown => Cow::Borrowed(text),
        Flavor::Html => html_escape::encode_text(text),
    }
}

/// Rewrites single lines, turning URLs and known identifiers into links.
#[derive(Debug, Clone, Copy)]
pub struct Linker<'a> {
    flavor: Flavor,
    links: Option<&'a LinkTable>,
}

impl<'a> Linker<'a> {
    /// Links URLs and, when a table is given, the identifiers it maps.
    pub fn new(flavor: Flavor, links: Option<&'a LinkTable>) -> Self {
        Self { flavor, links }
    }

    /// Links URLs only.
    pub fn urls_only(flavor: Flavor) -> Self {
        Self {
            flavor,
            links: None,
        }
    }

    pub fn emphasize<W: fmt::Write>(&self, w: &mut W, line: &str) -> fmt::Result {
        let mut rest = line;
        while let Some(caps) = MATCH_RX.captures(rest) {
            let Some(m) = caps.get(0) else { break };
            w.write_str(&escape_text(self.flavor, &rest[..m.start()]))?;

            let matched = m.as_str();
            if caps.name("url").is_some() {
                self.write_url(w, matched)?;
            } else {
                match self.links.and_then(|t| t.get(matched)) {
                    Some(url) => self.write_ident_link(w, matched, url)?,
                    None => w.write_str(&escape_text(self.flavor, matched))?,
                }
            }

            rest = &rest[m.end()..];
        }
        w.write_str(&escape_text(self.flavor, rest))
    }

    fn write_url<W: fmt::Write>(&self, w: &mut W, url: &str) -> fmt::Result {
        match self.flavor {
            Flavor::Markdown => write!(w, "[{url}]({url})"),
            Flavor::Html => write!(
                w,
                "<a href=\"{}\">{}</a>",
                html_escape::encode_double_quoted_attribute(url),
                html_escape::encode_text(url)
            ),
        }
    }

    fn write_ident_link<W: fmt::Write>(&self, w: &mut W, ident: &str, url: &str) -> fmt::Result {
        match self.flavor {
            Flavor::Markdown => write!(w, "[`{ident}`]({url})"),
            Flavor::Html => write!(
                w,
                "<a href=\"{}\"><code>{ident}</code></a>",
                html_escape::encode_double_quoted_attribute(url)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn emphasize(linker: Linker<'_>, line: &str) -> String {
        let mut out = String::new();
        linker.emphasize(&mut out, line).unwrap();
        out
    }

    #[rstest]
    #[case("see http://golang.org/doc for more", "http://golang.org/doc")]
    #[case("https://example.com:8080/a/b?x=1", "https://example.com:8080/a/b?x=1")]
    #[case("mailto://someone@host/x", "mailto://someone@host/x")]
    #[case("ftp://files.example.org/pub/file.tar.gz.", "ftp://files.example.org/pub/file.tar.gz")]
    fn finds_urls(#[case] line: &str, #[case] url: &str) {
        // Plain words before the URL match as identifiers; skip past them.
        let found = MATCH_RX
            .captures_iter(line)
            .find_map(|c| c.name("url").map(|m| m.as_str().to_string()));
        assert_eq!(found.as_deref(), Some(url));
    }

    #[test]
    fn markdown_url_becomes_link() {
        let out = emphasize(
            Linker::urls_only(Flavor::Markdown),
            "Read https://go.dev/doc now.\n",
        );
        assert_eq!(out, "Read [https://go.dev/doc](https://go.dev/doc) now.\n");
    }

    #[test]
    fn html_escapes_surrounding_text() {
        let out = emphasize(Linker::urls_only(Flavor::Html), "a < b && http://x.org/y\n");
        assert_eq!(
            out,
            "a &lt; b &amp;&amp; <a href=\"http://x.org/y\">http://x.org/y</a>\n"
        );
    }

    #[test]
    fn known_identifiers_are_linked() {
        let table = LinkTable::from_pairs([("Reader", "https://pkg.go.dev/io#Reader")]).unwrap();
        let out = emphasize(
            Linker::new(Flavor::Markdown, Some(&table)),
            "Wraps a Reader and a Writer.\n",
        );
        assert_eq!(
            out,
            "Wraps a [`Reader`](https://pkg.go.dev/io#Reader) and a Writer.\n"
        );
    }

    #[test]
    fn html_identifier_link_is_styled_as_code() {
        let table = LinkTable::from_pairs([("Close", "#Close")]).unwrap();
        let out = emphasize(Linker::new(Flavor::Html, Some(&table)), "Call Close.");
        assert_eq!(out, "Call <a href=\"#Close\"><code>Close</code></a>.");
    }

    #[test]
    fn identifiers_inside_words_are_not_split() {
        let table = LinkTable::from_pairs([("Read", "#Read")]).unwrap();
        let out = emphasize(Linker::new(Flavor::Markdown, Some(&table)), "Reader ReadAll");
        assert_eq!(out, "Reader ReadAll");
    }

    #[test]
    fn line_without_matches_is_copied() {
        let out = emphasize(Linker::urls_only(Flavor::Markdown), "--- 42 ---\n");
        assert_eq!(out, "--- 42 ---\n");
    }

    #[test]
    fn merge_prefers_the_incoming_table() {
        let mut base = LinkTable::from_pairs([("Reader", "#Reader"), ("Writer", "#Writer")]).unwrap();
        let user = LinkTable::from_pairs([("Reader", "https://pkg.go.dev/io#Reader")]).unwrap();
        base.merge(&user);
        assert_eq!(base.len(), 2);
        assert_eq!(base.get("Reader"), Some("https://pkg.go.dev/io#Reader"));
        assert_eq!(base.get("Writer"), Some("#Writer"));
    }

    #[rstest]
    #[case("not ident", "u")]
    #[case("9lives", "u")]
    #[case("", "u")]
    fn rejects_bad_keys(#[case] key: &str, #[case] url: &str) {
        assert_eq!(
            LinkTable::from_pairs([(key, url)]),
            Err(LinkTableError::InvalidIdentifier(key.to_string()))
        );
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(
            LinkTable::from_pairs([("Foo", "")]),
            Err(LinkTableError::EmptyUrl {
                ident: "Foo".to_string()
            })
        );
        assert!(matches!(
            LinkTable::from_pairs([("Foo", "http://a b")]),
            Err(LinkTableError::InvalidUrl { .. })
        ));
    }
}
