pub mod comment;
pub mod examples;
pub mod io;
pub mod options;
pub mod page;

// Re-export key types for easier usage
pub use comment::{Block, CommentRenderer, LinkTable, LinkTableError, blocks, comment_to_string};
pub use examples::{Example, ExampleRecord, ExampleRenderer, collect_examples};
pub use io::*;
pub use options::{DEFAULT_SRC_LINK_FORMAT, Flavor, RenderOptions};
pub use page::{PackageDoc, PageRenderer, relative_src_links};
