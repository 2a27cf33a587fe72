use serde::{Deserialize, Serialize};

use crate::{comment::LinkTable, examples::ExampleRecord};

/// Where a declaration lives in the package sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePos {
    pub file: String,
    #[serde(default)]
    pub line: usize,
}

/// A `const` or `var` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueDoc {
    /// Declared identifiers, linked to the group's section.
    pub names: Vec<String>,
    pub decl: String,
    pub doc: String,
}

/// A function, or a method when `recv` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuncDoc {
    pub name: String,
    /// Receiver as written, e.g. `(b *Buffer)`.
    pub recv: String,
    pub decl: String,
    pub doc: String,
    pub pos: Option<SourcePos>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDoc {
    pub name: String,
    pub decl: String,
    pub doc: String,
    pub pos: Option<SourcePos>,
    pub consts: Vec<ValueDoc>,
    pub vars: Vec<ValueDoc>,
    /// Constructors and other functions returning this type.
    pub funcs: Vec<FuncDoc>,
    pub methods: Vec<FuncDoc>,
}

/// Everything the page renderer needs to know about one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDoc {
    pub name: String,
    #[serde(default)]
    pub import_path: String,
    #[serde(default)]
    pub doc: String,
    /// Commands render only their overview.
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub consts: Vec<ValueDoc>,
    #[serde(default)]
    pub vars: Vec<ValueDoc>,
    #[serde(default)]
    pub funcs: Vec<FuncDoc>,
    #[serde(default)]
    pub types: Vec<TypeDoc>,
    #[serde(default)]
    pub examples: Vec<ExampleRecord>,
}

impl PackageDoc {
    /// Links every documented declaration name to the place it is shown.
    ///
    /// Functions and types get their own anchor. Constants and variables
    /// point at their group: the package sections, or the owning type.
    /// Methods are left out: their anchors are `Type.Method`, which never
    /// appears as a single identifier in prose.
    pub fn declaration_links(&self) -> LinkTable {
        let values = value_targets(&self.consts, "pkg-constants")
            .chain(value_targets(&self.vars, "pkg-variables"))
            .chain(self.types.iter().flat_map(|t| {
                value_targets(&t.consts, &t.name).chain(value_targets(&t.vars, &t.name))
            }));
        let decls = self
            .funcs
            .iter()
            .map(|f| f.name.as_str())
            .chain(self.types.iter().flat_map(|t| {
                std::iter::once(t.name.as_str()).chain(t.funcs.iter().map(|f| f.name.as_str()))
            }))
            .map(|name| (name, name));

        let mut table = LinkTable::new();
        for (name, anchor) in values.chain(decls) {
            if let Err(e) = table.insert(name, format!("#{anchor}")) {
                log::warn!("not linking declaration: {e}");
            }
        }
        table
    }
}

fn value_targets<'a>(
    groups: &'a [ValueDoc],
    anchor: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    groups
        .iter()
        .flat_map(|g| g.names.iter())
        .map(move |name| (name.as_str(), anchor))
}
