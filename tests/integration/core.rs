use crate::common::{make_temp_dir, normalized_lines, run_with_input, write_valid_config};

#[test]
fn main_exits_successfully_with_valid_config() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
}

#[test]
fn main_creates_default_config_when_missing() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    assert!(
        dir.join("config.json").exists(),
        "a default config.json should be written"
    );
}

#[test]
fn startup_prints_banner_and_paths() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "exit\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("C O U R S E P L A N"));
    assert!(stdout.contains("Config path: config.json"));
    assert!(stdout.contains("Exports path: exports"));
}

#[test]
fn main_rejects_unknown_cli_flags() {
    let output = std::process::Command::new(crate::common::binary_path())
        .arg("--frobnicate")
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|l| l.contains("Unknown argument: --frobnicate")),
        "stderr was: {stderr_lines:?}"
    );
}

#[test]
fn main_fails_on_invalid_config_json() {
    let dir = make_temp_dir("core");
    std::fs::write(dir.join("config.json"), "not-json").unwrap();
    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines.iter().any(|l| l.contains("Invalid JSON")),
        "stderr was: {stderr_lines:?}"
    );
}
