use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn veil(config_home: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_veil"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_redact_stdin() {
    let home = tempfile::tempdir().unwrap();
    let output = veil(home.path(), &["redact"], "My SSN is 123-45-6789, please help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "My SSN is [REDACTED_SSN], please help");
}

#[test]
fn test_redact_json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = veil(
        home.path(),
        &["--level", "high", "redact", "--json"],
        "DOB: 01/02/1990",
    );

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["redactions_made"]["date_of_birth"], 1);
    assert_eq!(result["compliance_violations"].as_array().unwrap().len(), 0);
}

#[test]
fn test_strict_fails_on_residual_violation() {
    let home = tempfile::tempdir().unwrap();

    let lenient = veil(home.path(), &["--level", "low", "redact"], "DOB: 01/02/1990");
    assert!(lenient.status.success());

    let strict = veil(
        home.path(),
        &["--level", "low", "redact", "--strict"],
        "DOB: 01/02/1990",
    );
    assert!(!strict.status.success());
    let stderr = String::from_utf8(strict.stderr).unwrap();
    assert!(stderr.contains("HIPAA: Unredacted date of birth detected"));
}

#[test]
fn test_batch_files() {
    let home = tempfile::tempdir().unwrap();
    let first = home.path().join("a.txt");
    let second = home.path().join("b.txt");
    std::fs::write(&first, "mail a@b.com").unwrap();
    std::fs::write(&second, "nothing here").unwrap();

    let output = veil(
        home.path(),
        &["batch", first.to_str().unwrap(), second.to_str().unwrap()],
        "",
    );

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["result"]["redactions_made"]["email_address"], 1);
    assert_eq!(
        entries[1]["result"]["redacted_text"],
        serde_json::Value::from("nothing here")
    );
}

#[test]
fn test_export_and_reimport() {
    let home = tempfile::tempdir().unwrap();
    let rules = home.path().join("rules.json");

    let output = veil(
        home.path(),
        &["--level", "high", "export", rules.to_str().unwrap()],
        "",
    );
    assert!(output.status.success());

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&rules).unwrap()).unwrap();
    assert_eq!(raw["level"], "HIGH");
    assert_eq!(raw["rules"].as_array().unwrap().len(), 0);

    let output = veil(
        home.path(),
        &["--rules", rules.to_str().unwrap(), "rules"],
        "",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Level: HIGH"));
    assert!(stdout.contains("passport_number"));
}
