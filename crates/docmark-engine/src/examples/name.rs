//! Example naming: `Subject_suffix` pairs, display titles and anchors.

/// Whether the first char of `s` is uppercase. False for an empty string.
pub fn starts_with_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Splits off a lowercase-led suffix after the last `_`.
fn split_raw(name: &str) -> Option<(&str, &str)> {
    let i = name.rfind('_')?;
    let suffix = &name[i + 1..];
    if suffix.is_empty() || starts_with_uppercase(suffix) {
        return None;
    }
    Some((&name[..i], suffix))
}

/// Uppercases the first letter of every word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Splits an example name into its subject and display suffix.
///
/// `Foo_bar` gives `("Foo", " (Bar)")`. `Foo_Bar` names a different exported
/// subject, so it is returned whole with an empty suffix.
pub fn split_example_name(name: &str) -> (String, String) {
    match split_raw(name) {
        Some((subject, suffix)) => (subject.to_string(), format!(" ({})", title_case(suffix))),
        None => (name.to_string(), String::new()),
    }
}

/// Drops a lowercase suffix: `Foo_braz` and `Foo_Bar_braz` lose `_braz`,
/// `Foo_Braz` is kept as-is.
pub fn strip_example_suffix(name: &str) -> &str {
    split_raw(name).map_or(name, |(subject, _)| subject)
}

/// Anchor for an example heading, e.g. `example-foo-bar` for `Foo_bar`.
pub fn example_anchor(name: &str) -> String {
    let (subject, suffix) = split_raw(name).unwrap_or((name, ""));
    let mut anchor = String::from("example");
    for part in [subject, suffix] {
        if !part.is_empty() {
            anchor.push('-');
            anchor.push_str(&part.to_lowercase().replace('_', "-"));
        }
    }
    anchor
}

/// Display title, e.g. `Example Foo (Bar)`.
pub fn example_title(subject: &str, suffix: &str) -> String {
    let mut title = String::from("Example");
    if !subject.is_empty() {
        title.push(' ');
        title.push_str(subject);
    }
    title.push_str(suffix);
    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Foo_bar", "Foo", " (Bar)")]
    #[case("Foo_Bar", "Foo_Bar", "")]
    #[case("Foo", "Foo", "")]
    #[case("Foo_", "Foo_", "")]
    #[case("T_Method_basic", "T_Method", " (Basic)")]
    #[case("_second", "", " (Second)")]
    #[case("Foo_äpfel", "Foo", " (Äpfel)")]
    fn splits_names(#[case] name: &str, #[case] subject: &str, #[case] suffix: &str) {
        assert_eq!(
            split_example_name(name),
            (subject.to_string(), suffix.to_string())
        );
    }

    #[rstest]
    #[case("Foo_braz", "Foo")]
    #[case("Foo_Bar_braz", "Foo_Bar")]
    #[case("Foo_Braz", "Foo_Braz")]
    #[case("", "")]
    fn strips_suffixes(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(strip_example_suffix(name), expected);
    }

    #[rstest]
    #[case("Foo_bar", "example-foo-bar")]
    #[case("Reader_Read", "example-reader-read")]
    #[case("", "example")]
    #[case("_tricky", "example-tricky")]
    fn anchors(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(example_anchor(name), expected);
    }

    #[test]
    fn titles() {
        assert_eq!(example_title("Foo", " (Bar)"), "Example Foo (Bar)");
        assert_eq!(example_title("", " (Bar)"), "Example (Bar)");
        assert_eq!(example_title("", ""), "Example");
    }

    #[test]
    fn title_case_starts_each_word() {
        assert_eq!(title_case("two words"), "Two Words");
        assert_eq!(title_case("snake_case"), "Snake_case");
    }
}
