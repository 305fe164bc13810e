//! End-to-end tests driving the shell binary over piped standard input.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn shell_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tiny_shell")
}

/// Run the shell with `args`, feed it `script` and collect everything it printed.
fn run_script(args: &[&str], script: &str) -> Output {
    let mut child = Command::new(shell_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start shell");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write script");
    child.wait_with_output().expect("failed to wait for shell")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn exit_ends_with_success() {
    let output = run_script(&[], "exit\nhelp\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "> ");
}

#[test]
fn end_of_input_ends_with_success() {
    let output = run_script(&[], "help\n");
    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.starts_with("> Shell's Help\n"), "stdout was: {out}");
    assert!(out.ends_with("> "), "stdout was: {out}");
}

#[test]
fn help_lists_builtins() {
    let output = run_script(&[], "help\nexit\n");
    let out = stdout_of(&output);
    for name in [" cd\n", " help\n", " exit\n"] {
        assert!(out.contains(name), "missing {name:?} in {out}");
    }
}

#[test]
#[cfg(unix)]
fn external_program_output_is_inherited() {
    let output = run_script(&[], "echo hi there\nexit\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "> hi there\n> ");
}

#[test]
#[cfg(unix)]
fn child_exit_code_does_not_leak() {
    let output = run_script(&[], "false\nsh -c false\nexit\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
#[cfg(unix)]
fn cd_is_seen_by_later_children() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let canonical = std::fs::canonicalize(dir.path()).unwrap();
    let script = format!("cd {}\npwd\nexit\n", canonical.display());
    let output = run_script(&[], &script);
    let out = stdout_of(&output);
    assert!(
        out.contains(&format!("{}\n", canonical.display())),
        "stdout was: {out}"
    );
}

#[test]
fn diagnostics_go_to_stderr() {
    let output = run_script(
        &[],
        "cd\ncd /nonexistent-path-for-tiny-shell\nno-such-program-for-tiny-shell\nexit\n",
    );
    assert!(output.status.success());
    let err = stderr_of(&output);
    assert!(err.contains("shell: expected argument to \"cd\"\n"), "stderr was: {err}");
    assert!(
        err.contains("shell: no-such-program-for-tiny-shell: "),
        "stderr was: {err}"
    );
    assert_eq!(err.lines().filter(|l| l.starts_with("shell: ")).count(), 3);
}

#[test]
fn custom_prompt() {
    let output = run_script(&["--prompt", "$ "], "\n\nexit\n");
    assert_eq!(stdout_of(&output), "$ $ $ ");
}

#[test]
fn bad_flag_is_rejected() {
    let output = run_script(&["--no-such-flag"], "");
    assert!(!output.status.success());
}
