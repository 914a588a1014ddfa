//! Models selected for generation.
//!
//! A [`ModelDescription`] is the narrow view of a type that key mapping needs:
//! its name and, for each field in declaration order, the explicit wire key
//! if one was annotated.

use crate::source::{Annotations, TypeDescription, TypeKind};
use wirekey_core::SourceLocation;

/// Annotation that carries an explicit wire key.
pub const JSON_ANNOTATION: &str = "json";

/// The key named by a `@json` annotation.
///
/// A bare `@json` line names the field itself.
pub fn annotated_wire_key(field: &str, annotations: &Annotations) -> Option<String> {
    annotations.get(JSON_ANNOTATION).map(|annotation| {
        annotation
            .value
            .clone()
            .unwrap_or_else(|| field.to_string())
    })
}

/// Derive that marks a type as decodable.
pub const DECODABLE_DERIVE: &str = "Deserialize";

/// A model type selected for key mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescription {
    /// The declared type name.
    pub name: String,

    /// Fields in declaration order.
    pub properties: Vec<PropertyDescription>,
}

/// A field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescription {
    /// Field name.
    pub name: String,

    /// Wire key from the `@json` annotation, if present.
    pub explicit_wire_key: Option<String>,

    /// Where the field is declared, used to place diagnostics.
    pub declaration: Option<SourceLocation>,
}

impl ModelDescription {
    pub fn new(name: impl Into<String>, properties: Vec<PropertyDescription>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Build a model from a parsed type, reading `@json` annotations.
    pub fn from_type(ty: &TypeDescription) -> Self {
        let properties = ty
            .properties
            .iter()
            .map(|property| PropertyDescription {
                name: property.name.clone(),
                explicit_wire_key: annotated_wire_key(&property.name, &property.annotations),
                declaration: Some(property.declaration.clone()),
            })
            .collect();

        Self {
            name: ty.name.clone(),
            properties,
        }
    }
}

impl PropertyDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit_wire_key: None,
            declaration: None,
        }
    }

    pub fn with_wire_key(mut self, wire_key: impl Into<String>) -> Self {
        self.explicit_wire_key = Some(wire_key.into());
        self
    }

    pub fn with_declaration(mut self, declaration: SourceLocation) -> Self {
        self.declaration = Some(declaration);
        self
    }
}

impl TypeDescription {
    /// Whether the type derives `Deserialize` (bare or path-qualified).
    pub fn is_decodable(&self) -> bool {
        self.inherited_types
            .iter()
            .any(|name| name.rsplit("::").next() == Some(DECODABLE_DERIVE))
    }

    /// Why this type cannot receive a key mapping, if it cannot.
    pub fn unsupported_reason(&self) -> Option<&'static str> {
        if self.kind == TypeKind::TupleStruct {
            Some("tuple structs have no named fields to map")
        } else if self.is_generic {
            Some("generic types are not supported")
        } else {
            None
        }
    }
}
