//! Field-name to wire-key mapping blocks.
//!
//! For every model this produces one `impl ::wirekey::WireKeys` block listing
//! each field with the JSON key it travels under. A field annotated with
//! `@json <key>` uses that key verbatim and a bare `@json` keeps the field
//! name; any other field uses its own name and a warning is produced for it. Mapping never fails, and duplicate or odd
//! keys are passed through unchanged.

use crate::model::{ModelDescription, PropertyDescription};
use proc_macro2::Literal;
use std::fmt;
use std::fmt::Write as _;
use wirekey_core::Diagnostic;

/// Generated mapping text: one block per model, separated by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedMappingSource(String);

impl GeneratedMappingSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedMappingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The mapping block of a single model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingBlock {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Mapping blocks for a list of models, with every warning produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMapOutput {
    pub source: GeneratedMappingSource,
    pub diagnostics: Vec<Diagnostic>,
}

/// Pick the wire key of a property.
///
/// Returns the explicit key when present; otherwise the property name and a
/// warning naming the model and property.
pub fn resolve_wire_key(
    model_name: &str,
    property: &PropertyDescription,
) -> (String, Option<Diagnostic>) {
    match &property.explicit_wire_key {
        Some(key) => (key.clone(), None),
        None => {
            let message = format!(
                "[wirekey] Property `{model_name}.{}` does not have @json annotation; \
                 property name is implicitly used as a JSON key",
                property.name
            );
            (
                property.name.clone(),
                Some(Diagnostic::warning(property.declaration.clone(), message)),
            )
        }
    }
}

/// Build the mapping block of one model.
pub fn compose_block(model: &ModelDescription) -> MappingBlock {
    let mut diagnostics = Vec::new();
    let mut source = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(source, "impl ::wirekey::WireKeys for {} {{", model.name);

    if model.properties.is_empty() {
        source.push_str("    const WIRE_KEYS: &'static [::wirekey::WireKey] = &[];\n");
    } else {
        source.push_str("    const WIRE_KEYS: &'static [::wirekey::WireKey] = &[\n");
        for property in &model.properties {
            let (wire_key, diagnostic) = resolve_wire_key(&model.name, property);
            diagnostics.extend(diagnostic);
            let _ = writeln!(
                source,
                "        ::wirekey::WireKey::new({}, {}),",
                Literal::string(&property.name),
                Literal::string(&wire_key)
            );
        }
        source.push_str("    ];\n");
    }
    source.push('}');

    MappingBlock {
        source,
        diagnostics,
    }
}

/// Build mapping blocks for every model, in input order.
///
/// Each warning is also logged.
pub fn compose_key_maps(models: &[ModelDescription]) -> KeyMapOutput {
    let mut blocks = Vec::with_capacity(models.len());
    let mut diagnostics = Vec::new();

    for model in models {
        let block = compose_block(model);
        for diagnostic in &block.diagnostics {
            tracing::warn!("{diagnostic}");
        }
        blocks.push(block.source);
        diagnostics.extend(block.diagnostics);
    }

    tracing::debug!(models = models.len(), warnings = diagnostics.len(), "composed key maps");

    KeyMapOutput {
        source: GeneratedMappingSource::new(blocks.join("\n\n")),
        diagnostics,
    }
}
