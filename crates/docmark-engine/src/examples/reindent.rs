/// Lexical position while scanning example source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Rune,
    InterpretedString,
    RawString,
}

impl State {
    /// Bytes that can change what happens next in this state.
    fn delimiters(self) -> &'static [char] {
        match self {
            State::Code => &['\'', '"', '`', '\n'],
            State::Rune => &['\\', '\''],
            State::InterpretedString => &['\\', '"'],
            State::RawString => &['`', '\n'],
        }
    }
}

/// Replaces `old` indentation with `new` at the start of every line of
/// `body`, except where that line starts inside a string or rune literal.
///
/// Escapes in interpreted strings and runes are copied as-is, so an escaped
/// quote does not end the literal. Inside a raw string every newline is
/// followed by `new`. A literal that never closes leaves the rest of the
/// text untouched.
pub fn replace_leading_indentation(body: &str, old: &str, new: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    // Only the first line is handled here; the rest follow a newline.
    if let Some(stripped) = rest.strip_prefix(old) {
        out.push_str(new);
        rest = stripped;
    }

    let mut state = State::Code;
    while let Some(i) = rest.find(state.delimiters()) {
        // Every delimiter is ASCII, so `i` is on a char boundary and one byte wide.
        let c = char::from(rest.as_bytes()[i]);
        out.push_str(&rest[..=i]);
        rest = &rest[i + 1..];

        state = match (state, c) {
            (State::Code, '\'') => State::Rune,
            (State::Code, '"') => State::InterpretedString,
            (State::Code, '`') => State::RawString,
            (State::Code, '\n') => {
                if let Some(stripped) = rest.strip_prefix(old) {
                    out.push_str(new);
                    rest = stripped;
                }
                State::Code
            }
            (State::Rune | State::InterpretedString, '\\') => {
                if let Some(escaped) = rest.chars().next() {
                    out.push(escaped);
                    rest = &rest[escaped.len_utf8()..];
                }
                state
            }
            (State::Rune, '\'') | (State::InterpretedString, '"') | (State::RawString, '`') => {
                State::Code
            }
            (State::RawString, '\n') => {
                out.push_str(new);
                State::RawString
            }
            (s, _) => s,
        };
    }
    out.push_str(rest);
    out
}
