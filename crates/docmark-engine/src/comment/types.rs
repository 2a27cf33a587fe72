/// One classified unit of comment text.
///
/// Paragraph and preformatted lines keep their trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A run of unindented, non-blank lines.
    Paragraph { lines: Vec<String> },
    /// A single line accepted by [`heading`](super::heading::heading).
    Heading { text: String },
    /// A run of indented lines with their common indentation removed.
    Preformatted { lines: Vec<String> },
}

impl Block {
    /// The block's text without any markup.
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph { lines } | Block::Preformatted { lines } => lines.concat(),
            Block::Heading { text } => text.clone(),
        }
    }
}
