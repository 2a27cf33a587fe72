//! # Package Pages
//!
//! Renders a whole package description: title, overview, index, examples and
//! one section per constant group, variable group, function and type. Doc
//! comments go through [`crate::comment`]; examples through
//! [`crate::examples`]. Every exported function and type name is linked to
//! its own section, with any caller-supplied link table taking precedence.

pub mod model;
pub mod render;
pub mod text;

pub use model::{FuncDoc, PackageDoc, SourcePos, TypeDoc, ValueDoc};
pub use render::PageRenderer;
pub use text::relative_src_links;
