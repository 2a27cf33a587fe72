use std::fmt;

use crate::{
    comment::{CommentRenderer, LinkTable},
    examples::{ALL, Example, ExampleRenderer, collect_examples, name::example_anchor},
    options::{Flavor, RenderOptions},
};

use super::{
    model::{FuncDoc, PackageDoc, SourcePos, TypeDoc, ValueDoc},
    text::{bracket_escape, expand_leading_tabs, md_escape, one_line, src_link},
};

/// One line of the index, with nested entries for a type's functions.
#[derive(Debug)]
struct Entry {
    text: String,
    href: String,
    children: Vec<Entry>,
}

impl Entry {
    fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            children: vec![],
        }
    }
}

/// Lays out a whole package page: overview, index, examples and every
/// documented declaration.
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'a> {
    options: &'a RenderOptions,
    links: Option<&'a LinkTable>,
}

impl<'a> PageRenderer<'a> {
    /// `links` are merged over the package's own declaration links.
    pub fn new(options: &'a RenderOptions, links: Option<&'a LinkTable>) -> Self {
        Self { options, links }
    }

    pub fn render<W: fmt::Write>(&self, w: &mut W, pkg: &PackageDoc) -> fmt::Result {
        let mut links = pkg.declaration_links();
        if let Some(user) = self.links {
            links.merge(user);
        }
        let page = Page {
            options: self.options,
            pkg,
            links: &links,
        };
        page.write(w)
    }

    pub fn render_to_string(&self, pkg: &PackageDoc) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out, pkg);
        out
    }
}

struct Page<'a> {
    options: &'a RenderOptions,
    pkg: &'a PackageDoc,
    links: &'a LinkTable,
}

impl Page<'_> {
    fn md(&self) -> bool {
        self.options.flavor == Flavor::Markdown
    }

    fn write<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let pkg = self.pkg;
        match self.options.flavor {
            Flavor::Markdown => writeln!(w, "# {}", md_escape(&pkg.name))?,
            Flavor::Html => writeln!(w, "<h1>{}</h1>", html_escape::encode_text(&pkg.name))?,
        }

        if pkg.is_main {
            w.write_str("\n")?;
            return self.comment(w, &pkg.doc);
        }

        if !pkg.import_path.is_empty() {
            match self.options.flavor {
                Flavor::Markdown => writeln!(w, "`import \"{}\"`", pkg.import_path)?,
                Flavor::Html => writeln!(
                    w,
                    "<p><code>import \"{}\"</code></p>",
                    html_escape::encode_text(&pkg.import_path)
                )?,
            }
        }

        let all_examples = collect_examples(&pkg.examples, ALL, self.options);
        let mut contents = vec![
            Entry::new("Overview", "pkg-overview"),
            Entry::new("Index", "pkg-index"),
        ];
        if !all_examples.is_empty() {
            contents.push(Entry::new("Examples", "pkg-examples"));
        }
        self.list(w, &contents)?;

        self.section(w, 2, "pkg-overview", "Overview")?;
        self.comment(w, &pkg.doc)?;
        self.examples(w, "")?;

        self.section(w, 2, "pkg-index", "Index")?;
        self.list(w, &self.index())?;

        if !all_examples.is_empty() {
            self.section(w, 4, "pkg-examples", "Examples")?;
            let entries: Vec<Entry> = all_examples.iter().map(example_entry).collect();
            self.list(w, &entries)?;
        }

        if !pkg.consts.is_empty() {
            self.section(w, 2, "pkg-constants", "Constants")?;
            self.values(w, &pkg.consts)?;
        }
        if !pkg.vars.is_empty() {
            self.section(w, 2, "pkg-variables", "Variables")?;
            self.values(w, &pkg.vars)?;
        }
        for func in &pkg.funcs {
            self.func(w, 2, func, None)?;
        }
        for ty in &pkg.types {
            self.type_doc(w, ty)?;
        }
        Ok(())
    }

    fn index(&self) -> Vec<Entry> {
        let pkg = self.pkg;
        let mut entries = vec![];
        if !pkg.consts.is_empty() {
            entries.push(Entry::new("Constants", "pkg-constants"));
        }
        if !pkg.vars.is_empty() {
            entries.push(Entry::new("Variables", "pkg-variables"));
        }
        entries.extend(
            pkg.funcs
                .iter()
                .map(|f| Entry::new(one_line(&f.decl), f.name.as_str())),
        );
        for ty in &pkg.types {
            let mut entry = Entry::new(format!("type {}", ty.name), ty.name.as_str());
            entry.children.extend(
                ty.funcs
                    .iter()
                    .map(|f| Entry::new(one_line(&f.decl), f.name.as_str())),
            );
            entry.children.extend(ty.methods.iter().map(|m| {
                Entry::new(one_line(&m.decl), method_anchor(ty, m))
            }));
            entries.push(entry);
        }
        entries
    }

    fn type_doc<W: fmt::Write>(&self, w: &mut W, ty: &TypeDoc) -> fmt::Result {
        self.decl_heading(w, 2, &ty.name, "type", None, &ty.name, ty.pos.as_ref())?;
        self.decl(w, &ty.decl)?;
        self.comment(w, &ty.doc)?;
        self.values(w, &ty.consts)?;
        self.values(w, &ty.vars)?;
        self.examples(w, &ty.name)?;
        for func in &ty.funcs {
            self.func(w, 3, func, None)?;
        }
        for method in &ty.methods {
            self.func(w, 3, method, Some(ty))?;
        }
        Ok(())
    }

    fn func<W: fmt::Write>(
        &self,
        w: &mut W,
        level: usize,
        func: &FuncDoc,
        owner: Option<&TypeDoc>,
    ) -> fmt::Result {
        let (anchor, recv, subject) = match owner {
            Some(ty) => {
                let recv = if func.recv.is_empty() {
                    format!("({})", ty.name)
                } else {
                    func.recv.clone()
                };
                (
                    method_anchor(ty, func),
                    Some(recv),
                    format!("{}_{}", ty.name, func.name),
                )
            }
            None => (func.name.clone(), None, func.name.clone()),
        };
        self.decl_heading(
            w,
            level,
            &anchor,
            "func",
            recv.as_deref(),
            &func.name,
            func.pos.as_ref(),
        )?;
        self.decl(w, &func.decl)?;
        self.comment(w, &func.doc)?;
        self.examples(w, &subject)
    }

    fn values<W: fmt::Write>(&self, w: &mut W, values: &[ValueDoc]) -> fmt::Result {
        for value in values {
            self.decl(w, &value.decl)?;
            self.comment(w, &value.doc)?;
        }
        Ok(())
    }

    fn comment<W: fmt::Write>(&self, w: &mut W, text: &str) -> fmt::Result {
        CommentRenderer::new(self.options, Some(self.links)).render_text(w, text)
    }

    fn examples<W: fmt::Write>(&self, w: &mut W, subject: &str) -> fmt::Result {
        let examples = collect_examples(&self.pkg.examples, subject, self.options);
        ExampleRenderer::new(self.options, Some(self.links)).render(w, &examples)
    }

    fn section<W: fmt::Write>(&self, w: &mut W, level: usize, id: &str, title: &str) -> fmt::Result {
        if self.md() {
            write!(w, "\n{} <a name=\"{id}\">{title}</a>\n", "#".repeat(level))
        } else {
            writeln!(w, "<h{level} id=\"{id}\">{title}</h{level}>")
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn decl_heading<W: fmt::Write>(
        &self,
        w: &mut W,
        level: usize,
        anchor: &str,
        kind: &str,
        recv: Option<&str>,
        name: &str,
        pos: Option<&SourcePos>,
    ) -> fmt::Result {
        let href = pos.map(|p| src_link(&self.options.src_link_format, p));
        if self.md() {
            write!(w, "\n{} <a name=\"{anchor}\">{kind}</a> ", "#".repeat(level))?;
            if let Some(recv) = recv {
                write!(w, "{} ", md_escape(recv))?;
            }
            match href {
                Some(href) => writeln!(w, "[{}]({href})", md_escape(name)),
                None => writeln!(w, "{}", md_escape(name)),
            }
        } else {
            write!(
                w,
                "<h{level} id=\"{}\">{kind} ",
                html_escape::encode_double_quoted_attribute(anchor)
            )?;
            if let Some(recv) = recv {
                write!(w, "{} ", html_escape::encode_text(recv))?;
            }
            let name = html_escape::encode_text(name);
            match href {
                Some(href) => write!(
                    w,
                    "<a href=\"{}\">{name}</a>",
                    html_escape::encode_double_quoted_attribute(&href)
                )?,
                None => w.write_str(&name)?,
            }
            writeln!(w, "</h{level}>")
        }
    }

    fn decl<W: fmt::Write>(&self, w: &mut W, decl: &str) -> fmt::Result {
        if decl.is_empty() {
            return Ok(());
        }
        let decl = expand_leading_tabs(decl.trim_end_matches('\n'), self.options.tab_width);
        if self.md() {
            write!(w, "``` go\n{decl}\n```\n")
        } else {
            writeln!(
                w,
                "<pre><code class=\"language-go\">{}</code></pre>",
                html_escape::encode_text(&decl)
            )
        }
    }

    fn list<W: fmt::Write>(&self, w: &mut W, entries: &[Entry]) -> fmt::Result {
        if self.md() {
            w.write_str("\n")?;
            self.md_list(w, entries, 0)
        } else {
            self.html_list(w, entries)
        }
    }

    fn md_list<W: fmt::Write>(&self, w: &mut W, entries: &[Entry], depth: usize) -> fmt::Result {
        for entry in entries {
            writeln!(
                w,
                "{}* [{}](#{})",
                "  ".repeat(depth),
                bracket_escape(&md_escape(&entry.text)),
                entry.href
            )?;
            self.md_list(w, &entry.children, depth + 1)?;
        }
        Ok(())
    }

    fn html_list<W: fmt::Write>(&self, w: &mut W, entries: &[Entry]) -> fmt::Result {
        w.write_str("<ul>\n")?;
        for entry in entries {
            write!(
                w,
                "<li><a href=\"#{}\">{}</a>",
                html_escape::encode_double_quoted_attribute(&entry.href),
                html_escape::encode_text(&entry.text)
            )?;
            if !entry.children.is_empty() {
                w.write_str("\n")?;
                self.html_list(w, &entry.children)?;
            }
            w.write_str("</li>\n")?;
        }
        w.write_str("</ul>\n")
    }
}

fn method_anchor(ty: &TypeDoc, method: &FuncDoc) -> String {
    format!("{}.{}", ty.name, method.name)
}

fn example_entry(example: &Example) -> Entry {
    let subject = if example.subject.is_empty() {
        "Package"
    } else {
        example.subject.as_str()
    };
    Entry::new(
        format!("{subject}{}", example.suffix),
        example_anchor(&example.name),
    )
}
