/// Characters that never appear in a section heading.
const FORBIDDEN: &[char] = &[
    ',', '.', ';', ':', '!', '?', '+', '*', '/', '=', '(', ')', '[', ']', '{', '}', '_', '^', '°',
    '&', '§', '~', '%', '#', '@', '<', '"', '>', '\\',
];

/// Returns the trimmed line if it passes as a section heading.
///
/// A heading is a short run of prose: it starts with an uppercase letter,
/// ends in a letter or digit, carries no punctuation, and uses `'` only for
/// a possessive `'s`.
pub fn heading(line: &str) -> Option<&str> {
    let line = line.trim();

    let first = line.chars().next()?;
    if !first.is_alphabetic() || !first.is_uppercase() {
        return None;
    }

    let last = line.chars().next_back()?;
    if !last.is_alphanumeric() {
        return None;
    }

    if line.contains(FORBIDDEN) {
        return None;
    }

    let mut rest = line;
    while let Some(i) = rest.find('\'') {
        let after = &rest.as_bytes()[i + 1..];
        match after {
            [b's'] | [b's', b' ', ..] => rest = &rest[i + 2..],
            _ => return None,
        }
    }

    Some(line)
}
