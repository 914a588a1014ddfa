//! Structured decode failures
//!
//! A decode failure says *why* a JSON object did not decode as the target
//! type and *where* inside the object it went wrong. The extractor never
//! propagates these; it only logs them when asked to.

use std::fmt;
use thiserror::Error;

/// Result of decoding one JSON object as `T`
pub type DecodeResult<T> = Result<T, DecodeFailure>;

/// Where a decode failure happened and a human-readable explanation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeContext {
    /// Keys (and array indices) leading from the decoded object to the failure
    pub coding_path: Vec<String>,

    /// Free-form description of what went wrong
    pub debug_description: String,
}

impl DecodeContext {
    /// Create a context with an explicit coding path
    pub fn new(coding_path: Vec<String>, debug_description: impl Into<String>) -> Self {
        Self {
            coding_path,
            debug_description: debug_description.into(),
        }
    }

    /// Create a context for a failure at a single top-level key
    pub fn at(key: impl Into<String>, debug_description: impl Into<String>) -> Self {
        Self::new(vec![key.into()], debug_description)
    }

    /// Create a context for a failure on the object itself
    pub fn root(debug_description: impl Into<String>) -> Self {
        Self::new(Vec::new(), debug_description)
    }

    /// Prefix the coding path with an enclosing key
    pub fn nested_in(mut self, parent: impl Into<String>) -> Self {
        self.coding_path.insert(0, parent.into());
        self
    }

    /// Render the coding path as a dotted string, `<root>` when empty
    pub fn path_string(&self) -> String {
        if self.coding_path.is_empty() {
            "<root>".to_string()
        } else {
            self.coding_path.join(".")
        }
    }
}

impl fmt::Display for DecodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.debug_description, self.path_string())
    }
}

/// Reason a JSON object failed to decode as the target type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// A required key is absent from the object
    #[error("key not found: {key:?}; {context}")]
    KeyNotFound { key: String, context: DecodeContext },

    /// A value is present but has the wrong JSON type
    #[error("type mismatch: expected {expected}; {context}")]
    TypeMismatch {
        expected: String,
        context: DecodeContext,
    },

    /// A key is present but its value is `null` where a value is required
    #[error("value not found: expected {expected}; {context}")]
    ValueNotFound {
        expected: String,
        context: DecodeContext,
    },

    /// The payload is structurally valid JSON but semantically invalid
    #[error("data corrupted: {context}")]
    DataCorrupted { context: DecodeContext },
}

impl DecodeFailure {
    /// A required key is missing
    pub fn key_not_found(key: impl Into<String>) -> Self {
        let key = key.into();
        let context = DecodeContext::root(format!("no value associated with key {key:?}"));
        DecodeFailure::KeyNotFound { key, context }
    }

    /// The value at `key` has the wrong type
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        debug_description: impl Into<String>,
    ) -> Self {
        DecodeFailure::TypeMismatch {
            expected: expected.into(),
            context: DecodeContext::at(key, debug_description),
        }
    }

    /// The value at `key` is `null`
    pub fn value_not_found(key: impl Into<String>, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        let context = DecodeContext::at(key, format!("expected {expected} value but found null"));
        DecodeFailure::ValueNotFound { expected, context }
    }

    /// The object is invalid as a whole
    pub fn data_corrupted(debug_description: impl Into<String>) -> Self {
        DecodeFailure::DataCorrupted {
            context: DecodeContext::root(debug_description),
        }
    }

    /// The context shared by every variant
    pub fn context(&self) -> &DecodeContext {
        match self {
            DecodeFailure::KeyNotFound { context, .. }
            | DecodeFailure::TypeMismatch { context, .. }
            | DecodeFailure::ValueNotFound { context, .. }
            | DecodeFailure::DataCorrupted { context } => context,
        }
    }

    /// Short, stable name of the failure kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeFailure::KeyNotFound { .. } => "key_not_found",
            DecodeFailure::TypeMismatch { .. } => "type_mismatch",
            DecodeFailure::ValueNotFound { .. } => "value_not_found",
            DecodeFailure::DataCorrupted { .. } => "data_corrupted",
        }
    }

    /// Prefix the coding path with an enclosing key
    pub fn nested_in(self, parent: impl Into<String>) -> Self {
        match self {
            DecodeFailure::KeyNotFound { key, context } => DecodeFailure::KeyNotFound {
                key,
                context: context.nested_in(parent),
            },
            DecodeFailure::TypeMismatch { expected, context } => DecodeFailure::TypeMismatch {
                expected,
                context: context.nested_in(parent),
            },
            DecodeFailure::ValueNotFound { expected, context } => DecodeFailure::ValueNotFound {
                expected,
                context: context.nested_in(parent),
            },
            DecodeFailure::DataCorrupted { context } => DecodeFailure::DataCorrupted {
                context: context.nested_in(parent),
            },
        }
    }
}

#[cfg(test)]
#[path = "decode/decode_tests.rs"]
mod decode_tests;
