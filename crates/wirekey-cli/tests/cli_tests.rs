//! Integration tests for the wirekey binary.
//!
//! Runs the built executable against temporary source folders.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const USER: &str = r#"use serde::Deserialize;

#[derive(Deserialize)]
pub struct User {
    pub id: i64,

    /// @json full_name
    pub full_name: String,
}
"#;

fn wirekey(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wirekey"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/user.rs"), USER).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Fixture shared with the wirekey crate's end-to-end test
fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../wirekey/tests/generated")
}

mod generate {
    use super::*;

    #[test]
    fn generate___writes_artifact_and_warns() {
        let dir = project();

        let output = wirekey(&["generate", "--input", "src", "--output", "gen"], dir.path());

        assert!(output.status.success(), "{}", stderr(&output));
        let artifact = fs::read_to_string(dir.path().join("gen/object_parser.rs")).unwrap();
        assert!(artifact.contains(r#"::wirekey::WireKey::new("full_name", "full_name"),"#));
        assert!(artifact.contains(r#"::wirekey::WireKey::new("id", "id"),"#));

        let log = stderr(&output);
        assert!(log.contains("WARN"), "{log}");
        assert!(log.contains("Property `User.id` does not have @json annotation"), "{log}");
        assert!(log.contains("user.rs:5:9"), "{log}");
    }

    #[test]
    fn generate___missing_input___fails_before_generating() {
        let dir = tempfile::tempdir().unwrap();

        let output = wirekey(&["generate"], dir.path());

        assert!(!output.status.success());
        assert!(stderr(&output).contains("no input folder provided"));
        assert!(!dir.path().join("object_parser.rs").exists());
    }

    #[test]
    fn generate___nonexistent_input___fails() {
        let dir = tempfile::tempdir().unwrap();

        let output = wirekey(&["generate", "--input", "missing"], dir.path());

        assert!(!output.status.success());
        assert!(stderr(&output).contains("input folder not found"));
    }

    #[test]
    fn generate___config_file___supplies_defaults() {
        let dir = project();
        fs::write(
            dir.path().join("wirekey.toml"),
            "input = \"src\"\noutput = \"src/generated\"\nfile_name = \"keys.rs\"\n",
        )
        .unwrap();

        let output = wirekey(&["generate"], dir.path());

        assert!(output.status.success(), "{}", stderr(&output));
        assert!(dir.path().join("src/generated/keys.rs").exists());
    }

    #[test]
    fn generate___flags_override_config_file() {
        let dir = project();
        fs::write(dir.path().join("wirekey.toml"), "input = \"nowhere\"\n").unwrap();

        let output = wirekey(&["generate", "--input", "src", "--file-name", "x.rs"], dir.path());

        assert!(output.status.success(), "{}", stderr(&output));
        assert!(dir.path().join("x.rs").exists());
    }

    #[test]
    fn generate___quiet___suppresses_warnings() {
        let dir = project();

        let output = wirekey(&["generate", "-q", "--input", "src"], dir.path());

        assert!(output.status.success());
        assert!(!stderr(&output).contains("WARN"));
    }
}

mod print {
    use super::*;

    #[test]
    fn print___writes_artifact_to_stdout_only() {
        let dir = project();

        let output = wirekey(&["print", "--input", "src", "--module-prefix", "app"], dir.path());

        assert!(output.status.success(), "{}", stderr(&output));
        let text = stdout(&output);
        assert!(text.starts_with("// @generated"));
        assert!(text.contains("use app::user::User;\n"));
        assert!(!text.contains("WARN"));
        assert!(!dir.path().join("object_parser.rs").exists());
    }

    #[test]
    fn print___matches_checked_in_fixture() {
        let fixture = fixture_dir();

        let output = wirekey(&["print", "-q", "--input", "src"], &fixture);

        assert!(output.status.success(), "{}", stderr(&output));
        let expected = fs::read_to_string(fixture.join("object_parser.rs")).unwrap();
        assert_eq!(stdout(&output), expected);
    }
}

#[test]
fn help___describes_annotations() {
    let dir = tempfile::tempdir().unwrap();

    let output = wirekey(&["--help"], dir.path());

    assert!(output.status.success());
    assert!(stdout(&output).contains("@json <key>"));
}
