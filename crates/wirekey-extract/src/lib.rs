//! wirekey-extract - Locate and decode models inside arbitrary JSON
//!
//! This crate provides:
//! - [`ObjectParser`] which walks a JSON document depth-first and decodes
//!   every object that matches a target type, at any nesting depth
//! - [`KeyedObject`] for writing decode functions that report which key failed
//! - [`decode_serde`] and [`decode_keyed`], ready-made decode functions backed
//!   by `serde`
//!
//! # Example
//!
//! ```
//! use serde::Deserialize;
//! use wirekey_extract::ObjectParser;
//!
//! #[derive(Debug, PartialEq, Deserialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let body = br#"{"shapes": [{"x": 1, "y": 2}, {"label": "none"}, {"x": 3, "y": 4}]}"#;
//! let points: Vec<Point> = ObjectParser::serde().parse_slice(body);
//!
//! assert_eq!(points, vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
//! ```

mod keyed;
mod parser;
mod serde_decode;

pub use keyed::{KeyedObject, decode_keyed};
pub use parser::{DecodeFn, JsonInput, JsonObject, KeyedParser, ObjectParser, extract};
pub use serde_decode::{classify_serde_error, decode_serde};

pub use wirekey_core::{DecodeContext, DecodeFailure, DecodeResult, WireKey, WireKeys};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DecodeFailure, DecodeResult, JsonInput, JsonObject, KeyedObject, ObjectParser, extract,
    };
}
