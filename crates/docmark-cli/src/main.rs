use anyhow::{Context, Result};
use clap::Parser;
use docmark_config::{Config, expand_path};
use docmark_engine::{
    Flavor, LinkTable, PageRenderer, RenderOptions, comment_to_string, io, relative_src_links,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "docmark", version)]
#[command(about = "Render documentation comments and package descriptions as Markdown or HTML")]
struct Args {
    /// Package description (.json) or comment text
    input: PathBuf,

    /// Treat INPUT as raw comment text even if it ends in .json
    #[arg(long)]
    comment: bool,

    /// Config file (default ~/.config/docmark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: markdown or html
    #[arg(long)]
    format: Option<Flavor>,

    /// Spaces per leading tab in declarations
    #[arg(long)]
    tabwidth: Option<usize>,

    /// Show examples
    #[arg(long)]
    ex: bool,

    /// Disable identifier auto-linking
    #[arg(long)]
    no_links: bool,

    /// Source link format with {file} and {line} placeholders
    #[arg(long)]
    srclink: Option<String>,

    /// Rewrite source links relative to the package, for a README
    #[arg(long)]
    readme: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl Args {
    fn is_comment_input(&self) -> bool {
        self.comment || self.input.extension().is_none_or(|ext| ext != "json")
    }

    /// Flags win over the config file, which wins over built-in defaults.
    fn render_options(&self, config: &Config) -> RenderOptions {
        let mut options = config.render_options();
        if let Some(flavor) = self.format {
            options.flavor = flavor;
        }
        if let Some(tab_width) = self.tabwidth {
            options.tab_width = tab_width;
        }
        if self.ex {
            options.show_examples = true;
        }
        if self.no_links {
            options.decl_links = false;
        }
        if let Some(format) = &self.srclink {
            options.src_link_format = format.clone();
        }
        options
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = expand_path(path);
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file '{}' not found", path.display()))
        }
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn render(args: &Args, options: &RenderOptions, links: Option<&LinkTable>) -> Result<String> {
    if args.is_comment_input() {
        let text = io::read_comment(&args.input)
            .with_context(|| format!("Failed to read comment from '{}'", args.input.display()))?;
        return Ok(comment_to_string(&text, options, links));
    }

    let pkg = io::read_package(&args.input)?;
    let mut page = PageRenderer::new(options, links).render_to_string(&pkg);
    if args.readme {
        page = relative_src_links(&page, &pkg.import_path);
    }
    Ok(page)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let options = args.render_options(&config);
    let links = config.link_table()?;
    log::debug!("rendering {} with {options:?}", args.input.display());

    let output = render(&args, &options, links.as_ref())?;

    match &args.out {
        Some(out) => {
            let out = expand_path(out);
            io::write_output(&out, &output)
                .with_context(|| format!("Failed to write '{}'", out.display()))?;
        }
        None => print!("{output}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("docmark").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_json_input_is_a_package() {
        assert!(!parse(&["pkg.json"]).is_comment_input());
        assert!(parse(&["pkg.json", "--comment"]).is_comment_input());
        assert!(parse(&["doc.txt"]).is_comment_input());
        assert!(parse(&["README"]).is_comment_input());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            format: Flavor::Html,
            tab_width: 8,
            decl_links: true,
            ..Config::default()
        };
        let args = parse(&[
            "pkg.json",
            "--format",
            "markdown",
            "--tabwidth",
            "2",
            "--ex",
            "--no-links",
            "--srclink",
            "https://x.org/{file}#L{line}",
        ]);

        let options = args.render_options(&config);

        assert_eq!(options.flavor, Flavor::Markdown);
        assert_eq!(options.tab_width, 2);
        assert!(options.show_examples);
        assert!(!options.decl_links);
        assert_eq!(options.src_link_format, "https://x.org/{file}#L{line}");
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = Config {
            format: Flavor::Html,
            show_examples: true,
            ..Config::default()
        };

        let options = parse(&["pkg.json"]).render_options(&config);

        assert_eq!(options.flavor, Flavor::Html);
        assert!(options.show_examples);
        assert!(options.decl_links);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Args::try_parse_from(["docmark", "x.json", "--format", "rst"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/docmark.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
