/// Smoke tests to verify the binary runs without panicking
use std::process::{Command, Output};

fn gridlife(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute cargo run")
}

#[test]
fn binary_shows_help() {
    let output = gridlife(&["--help"]);

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gridlife"), "Help output should mention gridlife");
}

#[test]
fn binary_shows_version() {
    let output = gridlife(&["--version"]);

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = gridlife(&["nonexistent-command"]);

    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn step_prints_next_generation_of_pattern() {
    let path = std::env::temp_dir().join(format!("gridlife-smoke-{}.txt", std::process::id()));
    std::fs::write(&path, ". 1 .\n1 . 1\n. . .\n").unwrap();

    let output = gridlife(&["step", "--pattern", path.to_str().unwrap()]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), ". . . \n. 1 . \n. . . \n\n");
}

#[test]
fn bounded_run_is_reproducible() {
    let args = ["run", "--seed", "7", "--generations", "3", "--interval", "0"];
    let first = gridlife(&args);
    let second = gridlife(&args);

    assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));
    assert_eq!(first.stdout, second.stdout);

    // seed frame plus three generations, each closed by a blank line
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert_eq!(stdout.matches("\n\n").count(), 4);
}

#[test]
fn negative_board_size_is_rejected() {
    let output = gridlife(&["step", "--min-size", "-3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked at"));
}
