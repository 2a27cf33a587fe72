//! # Comment Rendering
//!
//! Turns documentation comment text into Markdown or HTML.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): the comment is split into lines and each
//!    run of lines is classified as a paragraph, a heading or a preformatted
//!    block. Indented runs become preformatted blocks with their common
//!    indentation removed.
//!
//! 2. **Rendering** (`render`): blocks are written in order. Paragraph lines go
//!    through the `Linker`, which turns URLs (and identifiers found in a
//!    `LinkTable`) into links.
//!
//! ## Input Contract
//!
//! Comment markers are already stripped, there are no leading or trailing blank
//! lines and no trailing whitespace. Anything else still renders; it just
//! segments less cleanly. Nothing in this module can fail except the sink.

pub mod emphasis;
pub mod heading;
pub mod indent;
pub mod render;
pub mod segment;
pub mod types;

pub use emphasis::{LinkTable, LinkTableError, Linker};
pub use heading::heading;
pub use render::{CommentRenderer, anchor_id, comment_to_string};
pub use segment::blocks;
pub use types::Block;

#[cfg(test)]
mod tests;
