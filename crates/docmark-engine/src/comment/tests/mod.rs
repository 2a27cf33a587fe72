//! Fixture tests for comment rendering.
//!
//! Each `fixtures/<name>.txt` is rendered once per flavor and compared against
//! `fixtures/<name>_<flavor>.snap`.


use crate::{
    comment::{Block, blocks, comment_to_string},
    options::{Flavor, RenderOptions},
};

#[test]
fn fixture_package_overview_markdown() {
    assert_fixture("package_overview", Flavor::Markdown);
}

#[test]
fn fixture_package_overview_html() {
    assert_fixture("package_overview", Flavor::Html);
}

fn assert_fixture(name: &str, flavor: Flavor) {
    let fixtures_dir = format!("{}/src/comment/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    invariants::check(&text, &blocks(&text));

    let options = RenderOptions {
        flavor,
        ..RenderOptions::default()
    };
    let out = comment_to_string(&text, &options, None);
    let snapshot = match flavor {
        Flavor::Markdown => format!("{name}_markdown"),
        Flavor::Html => format!("{name}_html"),
    };
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(snapshot, out);
    });
}

#[test]
fn fixture_blocks_in_order() {
    let text = std::fs::read_to_string(format!(
        "{}/src/comment/tests/fixtures/package_overview.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let kinds: Vec<&str> = blocks(&text)
        .iter()
        .map(|b| match b {
            Block::Paragraph { .. } => "p",
            Block::Heading { .. } => "h",
            Block::Preformatted { .. } => "pre",
        })
        .collect();
    assert_eq!(kinds, ["p", "h", "p", "p", "pre", "p", "h", "p", "pre"]);
}

/// Two candidate headings in a row: only the first is taken.
#[test]
fn consecutive_titles() {
    let text = "Intro.\n\nFirst Title\n\nSecond Title\n\nBody text.\n";
    let bs = blocks(text);
    invariants::check(text, &bs);
    assert_eq!(
        bs[1],
        Block::Heading {
            text: "First Title".into()
        }
    );
    assert!(matches!(bs[2], Block::Paragraph { .. }));
}

#[test]
fn empty_comment_renders_nothing() {
    assert_eq!(comment_to_string("", &RenderOptions::default(), None), "");
}
