//! Generate command implementation
//!
//! Scans the input folder, keeps the `#[derive(Deserialize)]` structs, maps
//! their fields to wire keys and renders `object_parser.rs`.

use crate::config::ResolvedConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use wirekey_codegen::{ModelDescription, TypeDescription, compose_key_maps, render_artifact};
use wirekey_core::{Diagnostic, SourceLocation, WirekeyResult};

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct Generation {
    /// Complete artifact text
    pub artifact: String,

    /// Models that received a mapping, in scan order
    pub models: Vec<ModelDescription>,

    /// Every warning produced, in the order it was produced
    pub diagnostics: Vec<Diagnostic>,
}

/// Decodable models selected from the scanned types
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub models: Vec<ModelDescription>,
    pub imports: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Keep decodable, mappable types; warn about the rest
///
/// Generic types and tuple structs cannot be mapped. A second model with an
/// already used name would produce a conflicting import, so it is skipped too.
pub fn select_models(types: &[TypeDescription], module_prefix: &str) -> Selection {
    let mut selection = Selection::default();
    let mut seen: HashMap<&str, &SourceLocation> = HashMap::new();

    for ty in types.iter().filter(|ty| ty.is_decodable()) {
        let skip_reason = match (ty.unsupported_reason(), seen.get(ty.name.as_str())) {
            (Some(reason), _) => Some(reason.to_string()),
            (None, Some(first)) => Some(format!("a model with this name is already mapped at {first}")),
            (None, None) => None,
        };

        if let Some(reason) = skip_reason {
            let diagnostic = Diagnostic::warning(
                Some(ty.declaration.clone()),
                format!("[wirekey] Type `{}` is skipped: {reason}", ty.name),
            );
            tracing::warn!("{diagnostic}");
            selection.diagnostics.push(diagnostic);
            continue;
        }

        seen.insert(&ty.name, &ty.declaration);
        selection.imports.push(ty.qualified_path(module_prefix));
        selection.models.push(ModelDescription::from_type(ty));
    }

    selection
}

/// Run the pipeline and return the artifact without writing it
pub fn generate(input: &Path, module_prefix: &str) -> WirekeyResult<Generation> {
    let types = TypeDescription::scan(input)?;
    tracing::debug!(types = types.len(), "scanned input");

    let Selection {
        models,
        imports,
        mut diagnostics,
    } = select_models(&types, module_prefix);

    let key_maps = compose_key_maps(&models);
    diagnostics.extend(key_maps.diagnostics);

    Ok(Generation {
        artifact: render_artifact(&imports, &key_maps.source),
        models,
        diagnostics,
    })
}

/// Generate and write the artifact
pub fn run(config: &ResolvedConfig) -> Result<PathBuf> {
    let generation = generate(&config.input, &config.module_prefix)
        .with_context(|| format!("Failed to generate from {}", config.input.display()))?;

    std::fs::create_dir_all(&config.output).with_context(|| {
        format!("Failed to create output folder {}", config.output.display())
    })?;

    let path = config.artifact_path();
    std::fs::write(&path, &generation.artifact)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        models = generation.models.len(),
        warnings = generation.diagnostics.len(),
        "generated object parser"
    );

    Ok(path)
}

/// Generate and write the artifact to stdout
pub fn print(config: &ResolvedConfig) -> Result<()> {
    let generation = generate(&config.input, &config.module_prefix)
        .with_context(|| format!("Failed to generate from {}", config.input.display()))?;

    print!("{}", generation.artifact);
    Ok(())
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
