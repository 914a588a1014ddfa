//! Source analysis: discover struct declarations in Rust files.
//!
//! This module is the only place that looks at Rust syntax. It produces plain
//! [`TypeDescription`] records and makes no decisions about them; selecting
//! decodable models happens in [`model`](crate::model).
//!
//! # Annotations
//!
//! Annotations live in doc comments, one per line, as `@name` optionally
//! followed by a value:
//!
//! ```ignore
//! /// The user's display name.
//! /// @json full_name
//! pub full_name: String,
//! ```
//!
//! # Limitations
//!
//! - Only structs are described (enums and unions are skipped)
//! - Derives inside `#[cfg_attr(...)]` are not seen
//! - Macro-generated items are invisible

use std::path::{Component, Path};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Fields, Item, Meta, Token};
use walkdir::{DirEntry, WalkDir};
use wirekey_core::{SourceLocation, WirekeyError, WirekeyResult};

/// Directories never scanned for models.
const SKIPPED_DIRS: &[&str] = &["target", "node_modules"];

/// A struct found in the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescription {
    /// Declared name.
    pub name: String,

    /// Shape of the struct body.
    pub kind: TypeKind,

    /// Derived traits, as written (`Deserialize`, `serde::Deserialize`, ...).
    pub inherited_types: Vec<String>,

    /// Whether the struct declares generic parameters.
    pub is_generic: bool,

    /// Named fields in declaration order.
    pub properties: Vec<PropertyInfo>,

    /// Annotations on the struct's doc comment.
    pub annotations: Annotations,

    /// Where the struct name is declared.
    pub declaration: SourceLocation,

    /// Module path relative to the scanned root (`["models", "user"]`).
    pub module_path: Vec<String>,
}

/// Shape of a struct body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `struct S { a: T }`
    Struct,

    /// `struct S(T);`
    TupleStruct,

    /// `struct S;`
    UnitStruct,
}

/// A named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: String,
    pub annotations: Annotations,
    pub declaration: SourceLocation,
}

/// One `@name value` line from a doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
}

/// Annotations attached to a declaration, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    /// Read annotations from `///` doc comments.
    pub fn from_attrs(attrs: &[Attribute]) -> Self {
        Self::from_doc_lines(extract_docs(attrs).iter().map(String::as_str))
    }

    /// Read annotations from already extracted doc lines.
    pub fn from_doc_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let annotations = lines
            .into_iter()
            .filter_map(|line| {
                let body = line.trim().strip_prefix('@')?;
                let (name, value) = match body.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (body, ""),
                };
                if name.is_empty() {
                    return None;
                }
                Some(Annotation {
                    name: name.to_string(),
                    value: (!value.is_empty()).then(|| value.to_string()),
                })
            })
            .collect();

        Self(annotations)
    }

    /// First annotation with the given name.
    pub fn get(&self, name: &str) -> Option<&Annotation> {
        self.0.iter().find(|annotation| annotation.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TypeDescription {
    /// Scan a folder (or a single file) for struct declarations.
    ///
    /// Files are visited in path order; hidden entries and build output
    /// folders are skipped.
    pub fn scan(input: &Path) -> WirekeyResult<Vec<TypeDescription>> {
        if input.is_file() {
            return Self::parse_file(input, &[]);
        }
        if !input.is_dir() {
            return Err(WirekeyError::InputNotFound(input.to_path_buf()));
        }

        let mut types = Vec::new();
        let entries = WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }

            let relative = path.strip_prefix(input).unwrap_or(path);
            let module_path = module_path_for(relative);
            tracing::debug!(file = %path.display(), "scanning");
            types.extend(Self::parse_file(path, &module_path)?);
        }

        Ok(types)
    }

    /// Parse one Rust file.
    pub fn parse_file(path: &Path, module_path: &[String]) -> WirekeyResult<Vec<TypeDescription>> {
        let content = std::fs::read_to_string(path).map_err(|err| WirekeyError::io(path, err))?;

        Self::parse_source(&content, path, module_path)
    }

    /// Parse Rust source text; `path` is only used for locations and errors.
    pub fn parse_source(
        source: &str,
        path: &Path,
        module_path: &[String],
    ) -> WirekeyResult<Vec<TypeDescription>> {
        let file = syn::parse_file(source).map_err(|err| {
            let start = err.span().start();
            WirekeyError::SourceParse {
                path: path.to_path_buf(),
                message: format!("{err} (line {}, column {})", start.line, start.column + 1),
            }
        })?;

        let mut types = Vec::new();
        collect_items(&file.items, path, module_path.to_vec(), &mut types);
        Ok(types)
    }

    /// Fully qualified path under a crate-level prefix (`crate::models::User`).
    pub fn qualified_path(&self, prefix: &str) -> String {
        let mut segments: Vec<&str> = Vec::with_capacity(self.module_path.len() + 2);
        if !prefix.is_empty() {
            segments.push(prefix);
        }
        segments.extend(self.module_path.iter().map(String::as_str));
        segments.push(&self.name);
        segments.join("::")
    }
}

fn collect_items(
    items: &[Item],
    path: &Path,
    module_path: Vec<String>,
    out: &mut Vec<TypeDescription>,
) {
    for item in items {
        match item {
            Item::Struct(s) => out.push(from_struct(s, path, &module_path)),
            Item::Mod(m) => {
                if let Some((_, nested)) = &m.content {
                    let mut nested_path = module_path.clone();
                    nested_path.push(m.ident.to_string());
                    collect_items(nested, path, nested_path, out);
                }
            }
            _ => {}
        }
    }
}

fn from_struct(s: &syn::ItemStruct, path: &Path, module_path: &[String]) -> TypeDescription {
    let (kind, properties) = match &s.fields {
        Fields::Named(fields) => (
            TypeKind::Struct,
            fields
                .named
                .iter()
                .filter_map(|field| {
                    let ident = field.ident.as_ref()?;
                    Some(PropertyInfo {
                        name: ident.unraw().to_string(),
                        annotations: Annotations::from_attrs(&field.attrs),
                        declaration: location_of(ident, path),
                    })
                })
                .collect(),
        ),
        Fields::Unnamed(_) => (TypeKind::TupleStruct, Vec::new()),
        Fields::Unit => (TypeKind::UnitStruct, Vec::new()),
    };

    TypeDescription {
        name: s.ident.to_string(),
        kind,
        inherited_types: derive_names(&s.attrs),
        is_generic: !s.generics.params.is_empty(),
        properties,
        annotations: Annotations::from_attrs(&s.attrs),
        declaration: location_of(&s.ident, path),
        module_path: module_path.to_vec(),
    }
}

/// Names listed in every `#[derive(...)]` attribute.
fn derive_names(attrs: &[Attribute]) -> Vec<String> {
    let mut names = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        if let Ok(paths) =
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
        {
            names.extend(paths.iter().map(|path| {
                path.segments
                    .iter()
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::")
            }));
        }
    }

    names
}

/// Extract documentation comments from attributes.
fn extract_docs(attrs: &[Attribute]) -> Vec<String> {
    let mut docs = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("doc") {
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let syn::Lit::Str(lit_str) = &expr_lit.lit {
                        // Block doc comments arrive as one multi-line string
                        docs.extend(
                            lit_str
                                .value()
                                .lines()
                                .map(|line| line.trim().to_string())
                                .filter(|line| !line.is_empty()),
                        );
                    }
                }
            }
        }
    }

    docs
}

fn location_of(ident: &syn::Ident, path: &Path) -> SourceLocation {
    let start = ident.span().start();
    SourceLocation::new(path, start.line, start.column + 1)
}

/// Module path of a file relative to the scanned root.
///
/// `lib.rs`, `main.rs` and `mod.rs` name their parent module.
pub fn module_path_for(relative: &Path) -> Vec<String> {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(file) = segments.pop() {
        let stem = file.strip_suffix(".rs").unwrap_or(&file);
        if !matches!(stem, "lib" | "main" | "mod") {
            segments.push(stem.to_string());
        }
    }

    segments
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || (entry.file_type().is_dir() && SKIPPED_DIRS.iter().any(|skipped| name == *skipped))
}
