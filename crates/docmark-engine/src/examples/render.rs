use std::{borrow::Cow, fmt};

use crate::{
    comment::{CommentRenderer, LinkTable},
    options::{Flavor, RenderOptions},
};

use super::{
    extract::Example,
    name::{example_anchor, example_title},
};

/// Writes extracted examples: title, doc comment, code and expected output.
#[derive(Debug, Clone, Copy)]
pub struct ExampleRenderer<'a> {
    options: &'a RenderOptions,
    links: Option<&'a LinkTable>,
}

impl<'a> ExampleRenderer<'a> {
    pub fn new(options: &'a RenderOptions, links: Option<&'a LinkTable>) -> Self {
        Self { options, links }
    }

    pub fn render<W: fmt::Write>(&self, w: &mut W, examples: &[Example]) -> fmt::Result {
        for (i, example) in examples.iter().enumerate() {
            if i > 0 {
                w.write_str("\n")?;
            }
            match self.options.flavor {
                Flavor::Markdown => self.markdown(w, example)?,
                Flavor::Html => self.html(w, example)?,
            }
        }
        Ok(())
    }

    fn output_label(example: &Example) -> &'static str {
        if example.unordered {
            "Unordered output"
        } else {
            "Output"
        }
    }

    fn doc<W: fmt::Write>(&self, w: &mut W, ex: &Example) -> fmt::Result {
        if ex.doc.is_empty() {
            return Ok(());
        }
        let doc = if ex.doc.ends_with('\n') {
            Cow::Borrowed(ex.doc.as_str())
        } else {
            Cow::Owned(format!("{}\n", ex.doc))
        };
        CommentRenderer::new(self.options, self.links).render_text(w, &doc)
    }

    fn markdown<W: fmt::Write>(&self, w: &mut W, ex: &Example) -> fmt::Result {
        writeln!(
            w,
            "##### <a name=\"{}\"></a>{}:",
            example_anchor(&ex.name),
            example_title(&ex.subject, &ex.suffix)
        )?;
        self.doc(w, ex)?;
        write!(w, "``` go\n{}\n```\n\n", ex.code)?;
        if ex.shows_output() {
            write!(
                w,
                "{}:\n\n```\n{}\n```\n\n",
                Self::output_label(ex),
                ex.output
            )?;
        }
        Ok(())
    }

    fn html<W: fmt::Write>(&self, w: &mut W, ex: &Example) -> fmt::Result {
        writeln!(
            w,
            "<div class=\"example\" id=\"{}\">\n<h5>{}</h5>",
            example_anchor(&ex.name),
            html_escape::encode_text(&example_title(&ex.subject, &ex.suffix))
        )?;
        self.doc(w, ex)?;
        writeln!(
            w,
            "<pre><code class=\"language-go\">{}</code></pre>",
            html_escape::encode_text(&ex.code)
        )?;
        if ex.shows_output() {
            writeln!(
                w,
                "<p>{}:</p>\n<pre>{}</pre>",
                Self::output_label(ex),
                html_escape::encode_text(&ex.output)
            )?;
        }
        w.write_str("</div>\n")
    }
}
