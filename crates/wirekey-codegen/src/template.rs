//! The generated artifact: runtime helpers followed by the mapping blocks.

use crate::key_map::GeneratedMappingSource;

/// Default file name of the artifact.
pub const ARTIFACT_FILE_NAME: &str = "object_parser.rs";

/// Static part of the artifact.
///
/// `{{imports}}` receives one `use` line per model and `{{key-maps}}` the
/// mapping blocks.
pub const OBJECT_PARSER_TEMPLATE: &str = include_str!("../templates/object_parser.rs.tmpl");

/// Render the complete artifact.
///
/// `imports` are paths such as `crate::models::User`, emitted as `use` lines
/// in the order given.
pub fn render_artifact(imports: &[String], key_maps: &GeneratedMappingSource) -> String {
    let imports: String = imports.iter().map(|path| format!("use {path};\n")).collect();
    let key_maps = if key_maps.is_empty() {
        String::new()
    } else {
        format!("\n\n{key_maps}")
    };

    OBJECT_PARSER_TEMPLATE
        .replace("{{imports}}", &imports)
        .replace("\n{{key-maps}}", &key_maps)
}
