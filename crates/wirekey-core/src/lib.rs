//! wirekey-core - Core types shared by the wirekey generator and runtime
//!
//! This crate provides the vocabulary both halves of wirekey agree on:
//! - [`WireKeys`] trait and [`WireKey`] entries emitted for every model
//! - [`DecodeFailure`] and [`DecodeContext`] for structured decode errors
//! - [`Diagnostic`] and [`SourceLocation`] for generation warnings
//! - [`WirekeyError`] for generation-time failures

mod decode;
mod diagnostic;
mod error;
mod keys;

pub use decode::{DecodeContext, DecodeFailure, DecodeResult};
pub use diagnostic::{Diagnostic, Severity, SourceLocation};
pub use error::{WirekeyError, WirekeyResult};
pub use keys::{WireKey, WireKeys};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DecodeContext, DecodeFailure, DecodeResult, Diagnostic, Severity, SourceLocation, WireKey,
        WireKeys, WirekeyError, WirekeyResult,
    };
}
