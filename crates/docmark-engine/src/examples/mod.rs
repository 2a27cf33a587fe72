//! # Code Examples
//!
//! Example records arrive from the documentation provider as printed source.
//! A braced function body is unwrapped, its trailing `// Output:` comment is
//! split off, and its indentation is rewritten with a small lexer that knows
//! about Go string, raw string and rune literals, so text inside literals is
//! never re-indented. Anything else is shown as a whole file.
//!
//! Example names follow the `Subject_suffix` convention: a lowercase suffix
//! distinguishes several examples for the same subject.

pub mod extract;
pub mod name;
pub mod reindent;
pub mod render;

pub use extract::{Example, ExampleRecord, extract};
pub use name::{split_example_name, strip_example_suffix};
pub use reindent::replace_leading_indentation;
pub use render::ExampleRenderer;

use crate::options::RenderOptions;

/// Wildcard subject selecting every example.
pub const ALL: &str = "*";

/// Extracts the examples for `subject` (or [`ALL`]), sorted by subject and
/// suffix. Returns nothing when examples are switched off.
pub fn collect_examples(
    records: &[ExampleRecord],
    subject: &str,
    options: &RenderOptions,
) -> Vec<Example> {
    if !options.show_examples {
        return vec![];
    }
    let mut examples: Vec<Example> = records
        .iter()
        .filter(|r| subject == ALL || strip_example_suffix(&r.name) == subject)
        .map(|r| extract(r, options))
        .collect();
    examples.sort_by(|a, b| (&a.subject, &a.suffix).cmp(&(&b.subject, &b.suffix)));
    examples
}
