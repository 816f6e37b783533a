//! End-to-end tests for the `token-sync` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Path to the token-sync binary
fn token_sync_bin() -> &'static str {
    env!("CARGO_BIN_EXE_token-sync")
}

const DOCUMENT: &str = r##"{
  "primitive": {
    "color": { "blue500": { "$value": "#3b82f6", "$type": "color" } },
    "spacing": { "md": { "$value": "8", "$type": "spacing" } }
  },
  "light": { "surface": { "$value": "#ffffff", "$type": "color" } },
  "dark": { "surface": { "$value": "#0f172a", "$type": "color" } }
}"##;

fn write_document(root: &Path, contents: &str) {
    let raw = root.join("tokens/raw");
    fs::create_dir_all(&raw).expect("Failed to create raw token dir");
    fs::write(raw.join("tokens.json"), contents).expect("Failed to write token document");
}

#[test]
fn test_sync_without_arguments_uses_default_paths() {
    let temp = tempfile::tempdir().unwrap();
    write_document(temp.path(), DOCUMENT);

    let output = Command::new(token_sync_bin())
        .current_dir(temp.path())
        .env_remove("TOKEN_SYNC_INPUT")
        .env_remove("TOKEN_SYNC_OUT_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Sync should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let dist = temp.path().join("tokens/dist");
    let css = fs::read_to_string(dist.join("tokens.css")).expect("Failed to read tokens.css");
    assert!(css.contains("--color-blue-500: #3b82f6;"));
    assert!(css.contains("--spacing-md: 8px;"));
    assert!(css.contains("[data-theme=\"dark\"] {\n  --surface: #0f172a;\n}"));

    let ts = fs::read_to_string(dist.join("tokens.ts")).expect("Failed to read tokens.ts");
    assert!(ts.contains("blue500: 'var(--color-blue-500)'"));

    let json = fs::read_to_string(dist.join("tokens.json")).expect("Failed to read tokens.json");
    assert!(json.contains("\"spacing-md\""));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("token sync complete"), "stdout: {stdout}");
    assert!(stdout.contains("total=4"), "stdout: {stdout}");
}

#[test]
fn test_sync_with_explicit_paths() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("export.json");
    fs::write(&input, DOCUMENT).unwrap();
    let out_dir = temp.path().join("generated");

    let output = Command::new(token_sync_bin())
        .args([
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for name in ["tokens.css", "tokens.ts", "tokens.json"] {
        assert!(out_dir.join(name).exists(), "{name} should be generated");
    }
}

#[test]
fn test_sync_fails_on_missing_input() {
    let temp = tempfile::tempdir().unwrap();

    let output = Command::new(token_sync_bin())
        .current_dir(temp.path())
        .env_remove("TOKEN_SYNC_INPUT")
        .env_remove("TOKEN_SYNC_OUT_DIR")
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read token document"), "stderr: {stderr}");
    assert!(!temp.path().join("tokens/dist").exists());
}

#[test]
fn test_sync_fails_on_duplicate_keys() {
    let temp = tempfile::tempdir().unwrap();
    write_document(
        temp.path(),
        r#"{
          "primitive": {
            "fontSize": { "$value": "12", "$type": "fontSize" },
            "font": { "size": { "$value": "14", "$type": "fontSize" } }
          },
          "light": {},
          "dark": {}
        }"#,
    );

    let output = Command::new(token_sync_bin())
        .current_dir(temp.path())
        .env_remove("TOKEN_SYNC_INPUT")
        .env_remove("TOKEN_SYNC_OUT_DIR")
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("duplicate token `font-size` in the primitive layer"),
        "stderr: {stderr}"
    );
}
