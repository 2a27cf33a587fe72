use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{comment::indent::indent_len, options::RenderOptions};

use super::{name::split_example_name, reindent::replace_leading_indentation};

static OUTPUT_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*//[ \t]*(unordered )?output:").unwrap());

/// A code sample as handed over by the documentation provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleRecord {
    pub name: String,
    pub doc: String,
    /// Printed source: either a braced function body or a whole file.
    pub code: String,
    pub output: String,
    /// The source carried an output comment, even if the output is empty.
    pub has_output_marker: bool,
}

/// An example ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub name: String,
    pub subject: String,
    pub suffix: String,
    pub doc: String,
    pub code: String,
    pub output: String,
    pub unordered: bool,
    pub has_output_marker: bool,
    /// Whole-file examples carry their commentary inline.
    pub whole_file: bool,
}

impl Example {
    pub fn shows_output(&self) -> bool {
        !self.whole_file && (!self.output.is_empty() || self.has_output_marker)
    }
}

/// Expected output recovered from the comment lines after an output marker.
fn output_from_comment(after_marker: &str) -> String {
    let mut lines = after_marker.lines();
    let mut out: Vec<&str> = lines.next().map(str::trim).into_iter().collect();
    for line in lines {
        let Some(text) = line.trim_start().strip_prefix("//") else {
            break;
        };
        out.push(text.strip_prefix(' ').unwrap_or(text));
    }
    out.join("\n").trim_matches('\n').to_string()
}

/// The marker only counts when nothing but comments follows it.
fn ends_in_comments(after_marker: &str) -> bool {
    after_marker
        .lines()
        .skip(1)
        .all(|line| line.trim().is_empty() || line.trim_start().starts_with("//"))
}

/// Leading whitespace of the first non-blank line, which always starts
/// outside any literal.
fn body_indent(body: &str) -> &str {
    let line = body.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    &line[..indent_len(line)]
}

/// Prepares one example record for rendering.
///
/// Braced function bodies lose their braces and trailing output comment and
/// are re-indented to `options.example_indent`. Anything else is a whole-file
/// example, shown verbatim without doc or output.
pub fn extract(record: &ExampleRecord, options: &RenderOptions) -> Example {
    let (subject, suffix) = split_example_name(&record.name);
    let mut example = Example {
        name: record.name.clone(),
        subject,
        suffix,
        ..Example::default()
    };

    let code = record.code.trim_matches('\n');
    let Some(body) = code
        .strip_prefix('{')
        .and_then(|c| c.strip_suffix('}'))
        .map(|c| c.trim_matches('\n'))
    else {
        log::debug!("example {:?} is a whole file", record.name);
        example.code = code.to_string();
        example.whole_file = true;
        return example;
    };

    example.doc = record.doc.clone();
    example.output = record.output.trim_matches('\n').to_string();
    example.has_output_marker = record.has_output_marker;

    let mut body = body;
    if let Some(caps) = OUTPUT_RX
        .captures_iter(body)
        .find(|c| c.get(0).is_some_and(|m| ends_in_comments(&body[m.end()..])))
        && let Some(m) = caps.get(0)
    {
        if example.output.is_empty() {
            example.output = output_from_comment(&body[m.end()..]);
        }
        example.unordered = caps.get(1).is_some();
        example.has_output_marker = true;
        body = body[..m.start()].trim_end();
    }

    example.code = replace_leading_indentation(body, body_indent(body), &options.example_indent);
    example
}
