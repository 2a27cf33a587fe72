use docmark_engine::{Flavor, LinkTable, LinkTableError, RenderOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid [links] table: {0}")]
    InvalidLinks(#[from] LinkTableError),
}

/// Saved rendering preferences. Every field has a default, so an empty file
/// is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: Flavor,
    pub tab_width: usize,
    /// Indentation for example code, e.g. `"  "`.
    pub example_indent: String,
    pub show_examples: bool,
    pub decl_links: bool,
    pub link_code_urls: bool,
    pub src_link_format: String,
    /// Identifier to URL, used for auto-linking in prose.
    pub links: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            format: options.flavor,
            tab_width: options.tab_width,
            example_indent: options.example_indent,
            show_examples: options.show_examples,
            decl_links: options.decl_links,
            link_code_urls: options.link_code_urls,
            src_link_format: options.src_link_format,
            links: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            flavor: self.format,
            tab_width: self.tab_width,
            example_indent: self.example_indent.clone(),
            show_examples: self.show_examples,
            decl_links: self.decl_links,
            link_code_urls: self.link_code_urls,
            src_link_format: self.src_link_format.clone(),
        }
    }

    /// Validated link table; `None` when no links are configured.
    pub fn link_table(&self) -> Result<Option<LinkTable>, ConfigError> {
        if self.links.is_empty() {
            return Ok(None);
        }
        Ok(Some(LinkTable::from_pairs(&self.links)?))
    }
}

/// Expands `~` and environment variables in a user-supplied path. Paths that
/// fail to expand are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    match shellexpand::full(&path_str) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
