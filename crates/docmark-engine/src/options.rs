use serde::{Deserialize, Serialize};

/// Output markup produced by the renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    Markdown,
    Html,
}

impl std::str::FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Flavor::Markdown),
            "html" => Ok(Flavor::Html),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Presentation settings for one rendering pass.
///
/// Passed by reference into every rendering call; nothing in the engine
/// holds on to it between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub flavor: Flavor,
    /// Spaces per leading tab in printed declarations. Zero keeps tabs.
    pub tab_width: usize,
    /// Indentation that replaces an example body's own indentation.
    pub example_indent: String,
    pub show_examples: bool,
    /// Link identifiers found in the link table.
    pub decl_links: bool,
    /// Run URL linking over preformatted lines as well as prose.
    pub link_code_urls: bool,
    /// Source link format with `{file}` and `{line}` placeholders.
    pub src_link_format: String,
}

pub const DEFAULT_SRC_LINK_FORMAT: &str = "/src/{file}#L{line}";

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            flavor: Flavor::Markdown,
            tab_width: 4,
            example_indent: String::new(),
            show_examples: false,
            decl_links: true,
            link_code_urls: false,
            src_link_format: DEFAULT_SRC_LINK_FORMAT.to_string(),
        }
    }
}
