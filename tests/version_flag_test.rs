use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_calcpad");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("calcpad {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_calcpad"))
        .arg("-V")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("calcpad "));
}

#[test]
fn test_help_flag_lists_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_calcpad"))
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--theme"));
    assert!(stdout.contains("--log"));
}

#[test]
fn test_invalid_theme_exits_with_message() {
    let output = Command::new(env!("CARGO_BIN_EXE_calcpad"))
        .args(["--theme", "neon"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("neon"), "{}", stderr);
}
