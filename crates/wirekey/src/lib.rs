//! # wirekey
//!
//! Find every instance of a model type anywhere inside a loosely shaped JSON
//! document, decoding field values from explicitly mapped wire keys.
//!
//! wirekey has two halves:
//! - A generator (`wirekey generate`) that scans your crate for
//!   `#[derive(Deserialize)]` structs and writes `object_parser.rs`, holding
//!   one [`WireKeys`] implementation per model plus parsing helpers
//! - A runtime, this crate, that the generated file (or
//!   `#[derive(WireKeys)]`) builds on
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! wirekey = "0.3"
//! ```
//!
//! ```
//! use wirekey::prelude::*;
//!
//! #[derive(Debug, PartialEq, Deserialize, WireKeys)]
//! struct User {
//!     id: i64,
//!     #[wirekey(json = "full_name")]
//!     name: String,
//! }
//!
//! let body = br#"{
//!     "page": 1,
//!     "owner": {"id": 1, "full_name": "Ann"},
//!     "members": [{"id": 2, "full_name": "Bo"}, {"id": "oops"}]
//! }"#;
//!
//! let users: Vec<User> = ObjectParser::keyed().parse_slice(body);
//!
//! assert_eq!(users.len(), 2);
//! assert_eq!(users[1].name, "Bo");
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`wirekey_core`] - Wire-key tables and the decode failure taxonomy
//! - [`wirekey_extract`] - The recursive extractor and decode functions
//! - [`wirekey_macros`] - `#[derive(WireKeys)]`

// Re-export core types
pub use wirekey_core::{DecodeContext, DecodeFailure, DecodeResult, WireKey, WireKeys};

// Re-export the extractor
pub use wirekey_extract::{
    DecodeFn, JsonInput, JsonObject, KeyedObject, KeyedParser, ObjectParser, classify_serde_error,
    decode_keyed, decode_serde, extract,
};

// Re-export macros
pub use wirekey_macros::WireKeys;

// Re-export dependencies that generated code needs
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports.
///
/// Use `use wirekey::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Extraction: `ObjectParser`, `KeyedObject`, `extract`
/// - Mapping: the `WireKeys` trait and derive
/// - Serde derive: `Deserialize`
pub mod prelude {
    pub use crate::{
        DecodeFailure, DecodeResult, JsonObject, KeyedObject, ObjectParser, WireKey, WireKeys,
        extract,
    };

    pub use serde::Deserialize;
}
