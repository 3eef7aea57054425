use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const PACKAGE_JSON: &str = r#"{"name":"x","version":"0.1.0"}"#;
const TAURI_CONF: &str = "{\n  \"productName\": \"x\",\n  \"version\": \"0.1.0\"\n}\n";
const CARGO_TOML: &str = "[package]\nname = \"x\"\nversion = \"0.9.0\"\nedition = \"2021\"\n\n[build-dependencies]\ntauri-build = { version = \"2\", features = [] }\n";

fn project() -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src-tauri")).unwrap();
    fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();
    fs::write(dir.path().join("src-tauri/tauri.conf.json"), TAURI_CONF).unwrap();
    fs::write(dir.path().join("src-tauri/Cargo.toml"), CARGO_TOML).unwrap();
    dir
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn bump(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tauri-bump"));
    cmd.env("NO_COLOR", "1").arg("--path").arg(root);
    cmd
}

fn assert_untouched(root: &Path) {
    assert_eq!(read(root, "package.json"), PACKAGE_JSON);
    assert_eq!(read(root, "src-tauri/tauri.conf.json"), TAURI_CONF);
    assert_eq!(read(root, "src-tauri/Cargo.toml"), CARGO_TOML);
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_tauri-bump"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn bumps_all_three_files() {
    let dir = project();

    bump(dir.path())
        .arg("0.2.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully bumped version to 0.2.0"))
        .stdout(predicate::str::contains("git tag v0.2.0"))
        .stdout(predicate::str::contains("git push origin main"));

    assert_eq!(
        read(dir.path(), "package.json"),
        "{\n  \"name\": \"x\",\n  \"version\": \"0.2.0\"\n}\n"
    );
    assert_eq!(
        read(dir.path(), "src-tauri/tauri.conf.json"),
        TAURI_CONF.replace("0.1.0", "0.2.0")
    );
    assert_eq!(
        read(dir.path(), "src-tauri/Cargo.toml"),
        CARGO_TOML.replace("version = \"0.9.0\"", "version = \"0.2.0\"")
    );
}

#[test]
fn prerelease_version_rewrites_manifest_line_only() {
    let dir = project();

    bump(dir.path()).arg("1.0.0-beta.1").assert().success();

    assert_eq!(
        read(dir.path(), "src-tauri/Cargo.toml"),
        CARGO_TOML.replace("version = \"0.9.0\"", "version = \"1.0.0-beta.1\"")
    );
}

#[test]
fn running_twice_is_idempotent() {
    let dir = project();

    bump(dir.path()).arg("0.3.0").assert().success();
    let first = (
        read(dir.path(), "package.json"),
        read(dir.path(), "src-tauri/tauri.conf.json"),
        read(dir.path(), "src-tauri/Cargo.toml"),
    );

    bump(dir.path())
        .arg("0.3.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("already at 0.3.0"));
    let second = (
        read(dir.path(), "package.json"),
        read(dir.path(), "src-tauri/tauri.conf.json"),
        read(dir.path(), "src-tauri/Cargo.toml"),
    );

    assert_eq!(first, second);
}

#[test]
fn missing_argument_exits_with_usage() {
    let dir = project();

    bump(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please provide a version number"))
        .stderr(predicate::str::contains("Usage:"));

    assert_untouched(dir.path());
}

#[test]
fn invalid_version_exits_without_touching_files() {
    let dir = project();

    bump(dir.path())
        .arg("abc")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid version format"))
        .stderr(predicate::str::contains("X.Y.Z or X.Y.Z-beta.1"));

    assert_untouched(dir.path());
}

#[test]
fn missing_package_json_reports_read_error() {
    let dir = project();
    fs::remove_file(dir.path().join("package.json")).unwrap();

    bump(dir.path())
        .arg("0.2.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("package.json"));

    assert_eq!(read(dir.path(), "src-tauri/tauri.conf.json"), TAURI_CONF);
    assert_eq!(read(dir.path(), "src-tauri/Cargo.toml"), CARGO_TOML);
}

#[test]
fn later_failure_keeps_earlier_updates() {
    let dir = project();
    fs::remove_file(dir.path().join("src-tauri/Cargo.toml")).unwrap();

    bump(dir.path())
        .arg("0.2.0")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Updated package.json"))
        .stderr(predicate::str::contains("Cargo.toml"));

    assert!(read(dir.path(), "package.json").contains("\"version\": \"0.2.0\""));
    assert!(read(dir.path(), "src-tauri/tauri.conf.json").contains("\"version\": \"0.2.0\""));
}

#[test]
fn strict_mode_fails_on_manifest_without_version_line() {
    let dir = project();
    fs::write(
        dir.path().join("src-tauri/Cargo.toml"),
        "[package]\nname = \"x\"\nversion.workspace = true\n",
    )
    .unwrap();

    bump(dir.path())
        .args(["--strict", "0.2.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));

    bump(dir.path()).arg("0.2.1").assert().success();
}

#[test]
fn dry_run_writes_nothing() {
    let dir = project();

    bump(dir.path())
        .args(["--dry-run", "0.2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update package.json"))
        .stdout(predicate::str::contains("Nothing was written"));

    assert_untouched(dir.path());
}

#[test]
fn custom_branch_and_no_hints() {
    let dir = project();

    bump(dir.path())
        .args(["--branch", "develop", "0.2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git push origin develop"));

    bump(dir.path())
        .args(["--no-hints", "0.2.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps").not());
}

#[test]
fn downgrade_prints_warning() {
    let dir = project();

    bump(dir.path())
        .arg("0.0.1")
        .assert()
        .success()
        .stdout(predicate::str::contains("is not newer than the current 0.1.0"));
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = project();

    bump(dir.path())
        .args(["--verbose", "0.2.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[VERBOSE] Read"));
}

#[test]
fn invalid_root_fails() {
    let dir = tempdir().unwrap();

    bump(&dir.path().join("missing"))
        .arg("0.2.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project validation failed"));
}

#[test]
fn hyphen_led_versions_are_invalid_format() {
    let dir = project();

    for input in ["-1.0.0", "-x"] {
        bump(dir.path())
            .arg(input)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid version format"));
    }

    assert_untouched(dir.path());
}

#[test]
fn extra_positional_argument_exits_one() {
    let dir = project();

    bump(dir.path())
        .args(["0.2.0", "extra"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("extra"));

    assert_untouched(dir.path());
}

#[test]
fn version_flag_still_succeeds() {
    Command::new(env!("CARGO_BIN_EXE_tauri-bump"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tauri-bump"));
}

#[cfg(unix)]
#[test]
fn symlinked_package_json_is_bumped_in_both_modes() {
    let dir = project();
    let shared = tempdir().unwrap();
    let target = shared.path().join("package.json");
    fs::write(&target, PACKAGE_JSON).unwrap();
    fs::remove_file(dir.path().join("package.json")).unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("package.json")).unwrap();

    bump(dir.path())
        .args(["--dry-run", "0.2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update package.json"));
    assert_eq!(fs::read_to_string(&target).unwrap(), PACKAGE_JSON);

    bump(dir.path())
        .arg("0.2.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated package.json"));
    assert!(
        fs::read_to_string(&target)
            .unwrap()
            .contains("\"version\": \"0.2.0\"")
    );
}
