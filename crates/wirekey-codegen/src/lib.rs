//! Wire-key mapping generation from Rust model types.
//!
//! # Architecture
//!
//! Generation is a one-way pipeline:
//!
//! ```text
//! Rust Source
//!     ↓
//!  [source]      scan folder, parse with syn
//!     ↓
//!  TypeDescription (name, derives, fields, doc annotations)
//!     ↓
//!  [model]       keep #[derive(Deserialize)] structs
//!     ↓
//!  ModelDescription (name, fields, optional @json keys)
//!     ↓
//!  [key_map]     one `impl WireKeys` block per model
//!     ↓
//!  [template]    object_parser.rs = runtime helpers + imports + blocks
//! ```
//!
//! Only [`key_map`] carries policy: a field without a `@json` annotation is
//! mapped to its own name and a warning is produced for it. Nothing in the
//! pipeline after parsing can fail.
//!
//! # Annotating models
//!
//! ```ignore
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! pub struct User {
//!     /// @json id
//!     pub id: i64,
//!
//!     /// Display name.
//!     /// @json full_name
//!     pub full_name: String,
//! }
//! ```
//!
//! # Programmatic use
//!
//! ```rust
//! use wirekey_codegen::{ModelDescription, PropertyDescription, compose_key_maps};
//!
//! let user = ModelDescription::new(
//!     "User",
//!     vec![
//!         PropertyDescription::new("id"),
//!         PropertyDescription::new("fullName").with_wire_key("full_name"),
//!     ],
//! );
//!
//! let output = compose_key_maps(&[user]);
//!
//! assert!(output.source.as_str().contains(r#"WireKey::new("fullName", "full_name")"#));
//! assert_eq!(output.diagnostics.len(), 1); // `id` has no explicit key
//! ```

pub mod key_map;
pub mod model;
pub mod source;
pub mod template;

pub use key_map::{
    GeneratedMappingSource, KeyMapOutput, MappingBlock, compose_block, compose_key_maps,
    resolve_wire_key,
};
pub use model::{ModelDescription, PropertyDescription};
pub use source::{Annotation, Annotations, PropertyInfo, TypeDescription, TypeKind};
pub use template::{ARTIFACT_FILE_NAME, OBJECT_PARSER_TEMPLATE, render_artifact};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GeneratedMappingSource, KeyMapOutput, ModelDescription, PropertyDescription,
        TypeDescription, compose_key_maps, render_artifact,
    };
}
