use super::{
    heading::heading,
    indent::{indent_len, is_blank, unindent},
    types::Block,
};

/// Splits comment text into paragraphs, headings and preformatted blocks.
///
/// The text is expected to have no leading or trailing blank lines and no
/// trailing whitespace; other input still segments, just less neatly.
///
/// A heading is a lone line that follows a blank line (or opens the comment),
/// is followed by exactly one blank line and then an unindented line, and is
/// accepted by the heading classifier. The first heading after another heading
/// is never taken, so two titles in a row fall back to paragraphs.
pub fn blocks(text: &str) -> Vec<Block> {
    let lines: Vec<String> = text.split_inclusive('\n').map(str::to_owned).collect();

    let mut seg = Segmenter::new(lines);
    seg.run();
    log::debug!("segmented comment into {} blocks", seg.out.len());
    seg.out
}

struct Segmenter {
    lines: Vec<String>,
    pos: usize,
    para: Vec<String>,
    out: Vec<Block>,
    last_was_blank: bool,
    last_was_heading: bool,
}

impl Segmenter {
    fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            pos: 0,
            para: vec![],
            out: vec![],
            // The start of the comment counts as a paragraph boundary.
            last_was_blank: true,
            last_was_heading: false,
        }
    }

    fn run(&mut self) {
        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];

            if is_blank(line) {
                self.flush_paragraph();
                self.pos += 1;
                self.last_was_blank = true;
                continue;
            }

            if indent_len(line) > 0 {
                self.flush_paragraph();
                self.take_preformatted();
                self.last_was_heading = false;
                continue;
            }

            if self.try_heading() {
                continue;
            }

            self.last_was_blank = false;
            self.last_was_heading = false;
            self.para.push(self.lines[self.pos].clone());
            self.pos += 1;
        }
        self.flush_paragraph();
    }

    fn flush_paragraph(&mut self) {
        if !self.para.is_empty() {
            let lines = std::mem::take(&mut self.para);
            self.out.push(Block::Paragraph { lines });
        }
    }

    /// Consumes the run of indented or blank lines starting at the cursor,
    /// minus any trailing blank lines.
    fn take_preformatted(&mut self) {
        let start = self.pos;
        let mut end = start + 1;
        while end < self.lines.len()
            && (is_blank(&self.lines[end]) || indent_len(&self.lines[end]) > 0)
        {
            end += 1;
        }
        while end > start && is_blank(&self.lines[end - 1]) {
            end -= 1;
        }

        let mut pre = self.lines[start..end].to_vec();
        unindent(&mut pre);
        self.out.push(Block::Preformatted { lines: pre });
        self.pos = end;
    }

    /// Emits a heading for the current line when the surrounding lines allow
    /// one and the classifier accepts it. Returns whether a heading was taken.
    fn try_heading(&mut self) -> bool {
        let i = self.pos;
        let opportunity = self.last_was_blank
            && !self.last_was_heading
            && i + 2 < self.lines.len()
            && is_blank(&self.lines[i + 1])
            && !is_blank(&self.lines[i + 2])
            && indent_len(&self.lines[i + 2]) == 0;
        if !opportunity {
            return false;
        }

        let Some(text) = heading(&self.lines[i]).map(str::to_owned) else {
            return false;
        };
        self.flush_paragraph();
        self.out.push(Block::Heading { text });
        self.pos += 2;
        self.last_was_heading = true;
        true
    }
}
