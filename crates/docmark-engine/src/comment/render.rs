use std::fmt;

use crate::options::{Flavor, RenderOptions};

use super::{
    emphasis::{LinkTable, Linker, escape_text},
    segment::blocks,
    types::Block,
};

const MD_PRE: &str = "\t";
const MD_H3: &str = "### ";

/// Anchor for a comment heading.
///
/// The `hdr-` prefix keeps heading anchors apart from the anchors generated
/// for declarations, which are plain identifiers.
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len() + 4);
    id.push_str("hdr-");
    id.extend(
        text.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }),
    );
    id
}

/// Writes segmented comment blocks as Markdown or HTML.
#[derive(Debug, Clone, Copy)]
pub struct CommentRenderer<'a> {
    options: &'a RenderOptions,
    links: Option<&'a LinkTable>,
}

impl<'a> CommentRenderer<'a> {
    pub fn new(options: &'a RenderOptions, links: Option<&'a LinkTable>) -> Self {
        Self { options, links }
    }

    /// Segments `text` and writes the result.
    pub fn render_text<W: fmt::Write>(&self, w: &mut W, text: &str) -> fmt::Result {
        self.render(w, &blocks(text))
    }

    pub fn render<W: fmt::Write>(&self, w: &mut W, blocks: &[Block]) -> fmt::Result {
        for block in blocks {
            match block {
                Block::Paragraph { lines } => self.paragraph(w, lines)?,
                Block::Heading { text } => self.heading(w, text)?,
                Block::Preformatted { lines } => self.preformatted(w, lines)?,
            }
        }
        Ok(())
    }

    fn flavor(&self) -> Flavor {
        self.options.flavor
    }

    fn prose_linker(&self) -> Linker<'a> {
        if self.options.decl_links {
            Linker::new(self.flavor(), self.links)
        } else {
            Linker::urls_only(self.flavor())
        }
    }

    fn paragraph<W: fmt::Write>(&self, w: &mut W, lines: &[String]) -> fmt::Result {
        let linker = self.prose_linker();
        if self.flavor() == Flavor::Html {
            w.write_str("<p>\n")?;
        }
        for line in lines {
            linker.emphasize(w, line)?;
        }
        match self.flavor() {
            Flavor::Markdown => w.write_str("\n"),
            Flavor::Html => w.write_str("</p>\n"),
        }
    }

    fn heading<W: fmt::Write>(&self, w: &mut W, text: &str) -> fmt::Result {
        let id = anchor_id(text);
        let text = escape_text(self.flavor(), text);
        match self.flavor() {
            Flavor::Markdown => writeln!(w, "{MD_H3}<a name=\"{id}\"></a>{text}"),
            Flavor::Html => writeln!(w, "<h3 id=\"{id}\">{text}</h3>"),
        }
    }

    fn preformatted<W: fmt::Write>(&self, w: &mut W, lines: &[String]) -> fmt::Result {
        let code_linker = self
            .options
            .link_code_urls
            .then(|| Linker::urls_only(self.flavor()));

        match self.flavor() {
            Flavor::Markdown => w.write_str("\n")?,
            Flavor::Html => w.write_str("<pre>")?,
        }
        for line in lines {
            if self.flavor() == Flavor::Markdown {
                w.write_str(MD_PRE)?;
            }
            match &code_linker {
                Some(linker) => linker.emphasize(w, line)?,
                None => w.write_str(&escape_text(self.flavor(), line))?,
            }
        }
        match self.flavor() {
            Flavor::Markdown => w.write_str("\n"),
            Flavor::Html => w.write_str("</pre>\n"),
        }
    }
}

/// Renders one comment into a fresh string.
pub fn comment_to_string(
    text: &str,
    options: &RenderOptions,
    links: Option<&LinkTable>,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = CommentRenderer::new(options, links).render_text(&mut out, text);
    out
}
