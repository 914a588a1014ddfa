#![allow(non_snake_case)]

use super::*;
use std::fs;
use wirekey_core::Severity;

fn types(source: &str, module: &[&str]) -> Vec<TypeDescription> {
    let module: Vec<String> = module.iter().map(|s| s.to_string()).collect();
    TypeDescription::parse_source(source, Path::new("models.rs"), &module).unwrap()
}

fn resolved(input: &Path, output: &Path) -> ResolvedConfig {
    ResolvedConfig {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        file_name: "object_parser.rs".to_string(),
        module_prefix: "crate".to_string(),
    }
}

const USER: &str = r#"
#[derive(Deserialize)]
pub struct User {
    /// @json id
    pub id: i64,
    /// @json fullName
    pub full_name: String,
}
"#;

// select_models

#[test]
fn select_models___keeps_only_decodable_types() {
    let source = format!("{USER}\n#[derive(Debug)] pub struct Plain {{ pub x: u8 }}");

    let selection = select_models(&types(&source, &["models"]), "crate");

    let names: Vec<_> = selection.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["User"]);
    assert_eq!(selection.imports, ["crate::models::User"]);
    assert!(selection.diagnostics.is_empty());
}

#[test]
fn select_models___unsupported_types___skipped_with_warning() {
    let source = "#[derive(Deserialize)] pub struct Id(u64);\n\
                  #[derive(Deserialize)] pub struct Page<T> { pub items: Vec<T> }";

    let selection = select_models(&types(source, &[]), "crate");

    assert!(selection.models.is_empty());
    assert_eq!(selection.diagnostics.len(), 2);
    assert!(selection.diagnostics[0].message.contains("`Id` is skipped: tuple structs"));
    assert!(selection.diagnostics[1].message.contains("`Page` is skipped: generic"));
    assert!(selection
        .diagnostics
        .iter()
        .all(|d| d.severity == Severity::Warning && d.location.is_some()));
}

#[test]
fn select_models___duplicate_name___second_skipped() {
    let mut all = types(USER, &["v1"]);
    all.extend(types(USER, &["v2"]));

    let selection = select_models(&all, "crate");

    assert_eq!(selection.imports, ["crate::v1::User"]);
    assert_eq!(selection.diagnostics.len(), 1);
    assert!(selection.diagnostics[0].message.contains("already mapped at models.rs:3:12"));
}

#[test]
fn select_models___custom_prefix() {
    let selection = select_models(&types(USER, &["api"]), "my_app");

    assert_eq!(selection.imports, ["my_app::api::User"]);
}

// generate

#[test]
fn generate___user_scenario___artifact_and_no_warnings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("user.rs"), USER).unwrap();

    let generation = generate(dir.path(), "crate").unwrap();

    assert_eq!(generation.models.len(), 1);
    assert!(generation.diagnostics.is_empty());
    assert!(generation.artifact.contains("use crate::user::User;\n"));
    assert!(
        generation
            .artifact
            .contains(r#"::wirekey::WireKey::new("full_name", "fullName"),"#)
    );
}

#[test]
fn generate___unannotated_field___warning_at_declaration() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lib.rs"),
        "#[derive(Deserialize)]\nstruct User {\n    id: i64,\n}\n",
    )
    .unwrap();

    let generation = generate(dir.path(), "crate").unwrap();

    assert_eq!(generation.diagnostics.len(), 1);
    let diagnostic = &generation.diagnostics[0];
    assert_eq!(
        diagnostic.location,
        Some(SourceLocation::new(dir.path().join("lib.rs"), 3, 5))
    );
    assert!(diagnostic.message.contains("`User.id`"));
    assert!(generation.artifact.contains("use crate::User;\n"));
}

#[test]
fn generate___no_models___helpers_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("lib.rs"), "pub fn nothing() {}").unwrap();

    let generation = generate(dir.path(), "crate").unwrap();

    assert!(generation.models.is_empty());
    assert!(generation.artifact.contains("pub fn object_parser<T>()"));
    assert!(!generation.artifact.contains("impl ::wirekey::WireKeys"));
}

// run

#[test]
fn run___writes_artifact_creating_output_folder() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("user.rs"), USER).unwrap();
    let output = dir.path().join("out/generated");

    let path = run(&resolved(&input, &output)).unwrap();

    assert_eq!(path, output.join("object_parser.rs"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, generate(&input, "crate").unwrap().artifact);
}

#[test]
fn run___unparsable_source___error_names_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.rs"), "struct {").unwrap();

    let err = run(&resolved(dir.path(), dir.path())).unwrap_err();

    assert!(format!("{err:#}").contains("bad.rs"));
    assert!(!dir.path().join("object_parser.rs").exists());
}
