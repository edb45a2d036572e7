use std::{os::unix::fs::PermissionsExt, path::PathBuf};

use tempfile::TempDir;

use crate::{
    error::ExecError,
    exit::EXIT_SIGNAL_BASE,
    launch::{Launch, ProcessLauncher, StageRequest},
};

/// Constructs a request for running `args` without input, stderr or overrides.
fn request(args: &[&str]) -> StageRequest {
    StageRequest {
        command: args.join(" "),
        args: args.iter().map(|arg| arg.to_string()).collect(),
        input: None,
        working_directory: None,
        include_stderr: false,
        home: None,
    }
}

#[test]
fn it_captures_stdout_and_status() {
    let output = ProcessLauncher.launch(request(&["echo", "hello"])).unwrap();
    assert!(output.success());
    assert_eq!(output.output, b"hello\n");

    let output = ProcessLauncher
        .launch(request(&["sh", "-c", "printf partial; exit 4"]))
        .unwrap();
    assert_eq!(output.status, 4);
    assert_eq!(output.output, b"partial");
}

#[test]
fn it_feeds_input_to_stdin() {
    let mut req = request(&["tr", "a-z", "A-Z"]);
    req.input = Some(b"hello\n".to_vec());

    let output = ProcessLauncher.launch(req).unwrap();
    assert_eq!(output.output, b"HELLO\n");
}

#[test]
fn it_closes_stdin_without_input() {
    // Would block forever if stdin was inherited or left open.
    let output = ProcessLauncher.launch(request(&["cat"])).unwrap();
    assert!(output.success());
    assert!(output.output.is_empty());
}

#[test]
fn it_pumps_large_streams_without_deadlock() {
    // Larger than any OS pipe buffer in both directions.
    let input = vec![b'x'; 4 * 1024 * 1024];
    let mut req = request(&["cat"]);
    req.input = Some(input.clone());

    let output = ProcessLauncher.launch(req).unwrap();
    assert_eq!(output.output.len(), input.len());
}

#[test]
fn it_tolerates_unread_input() {
    let mut req = request(&["true"]);
    req.input = Some(vec![b'x'; 1024 * 1024]);

    let output = ProcessLauncher.launch(req).unwrap();
    assert!(output.success());
}

#[test]
fn it_merges_stderr_on_request() {
    let script = ["sh", "-c", "echo out; echo err 1>&2"];

    let output = ProcessLauncher.launch(request(&script)).unwrap();
    assert_eq!(output.output, b"out\n");

    let mut req = request(&script);
    req.include_stderr = true;
    let output = String::from_utf8(ProcessLauncher.launch(req).unwrap().output).unwrap();
    assert!(output.contains("out\n"));
    assert!(output.contains("err\n"));
    assert_eq!(output.len(), "out\nerr\n".len());
}

#[test]
fn it_runs_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let mut req = request(&["pwd"]);
    req.working_directory = Some(dir.path().to_path_buf());

    let output = String::from_utf8(ProcessLauncher.launch(req).unwrap().output).unwrap();
    assert_eq!(
        PathBuf::from(output.trim_end()).canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn it_runs_relative_programs_from_working_directory() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("hello.sh");
    std::fs::write(&script, "#!/bin/sh\necho from script\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let mut req = request(&["./hello.sh"]);
    req.working_directory = Some(dir.path().to_path_buf());

    let output = ProcessLauncher.launch(req).unwrap();
    assert_eq!(output.output, b"from script\n");
}

#[test]
fn it_runs_relative_programs_from_relative_working_directory() {
    // Created below the current directory, so that its path is relative.
    let dir = TempDir::new_in(".").unwrap();
    assert!(dir.path().is_relative());

    let script = dir.path().join("hello.sh");
    std::fs::write(&script, "#!/bin/sh\necho from script\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let mut req = request(&["./hello.sh"]);
    req.working_directory = Some(dir.path().to_path_buf());

    let output = ProcessLauncher.launch(req).unwrap();
    assert_eq!(output.output, b"from script\n");
}

#[test]
fn it_overrides_home() {
    let mut req = request(&["sh", "-c", "printf %s \"$HOME\""]);
    req.home = Some(PathBuf::from("/srv/homes/alice"));

    let output = ProcessLauncher.launch(req).unwrap();
    assert_eq!(output.output, b"/srv/homes/alice");
}

#[test]
fn it_reports_signals_as_status() {
    let output = ProcessLauncher
        .launch(request(&["sh", "-c", "kill -9 $$"]))
        .unwrap();
    assert_eq!(output.status, EXIT_SIGNAL_BASE + 9);
}

#[test]
fn it_fails_to_launch_unknown_programs() {
    let result = ProcessLauncher.launch(request(&["nonexistent-binary-xyz", "arg"]));
    match result {
        Err(ExecError::Launch { command, source }) => {
            assert_eq!(command, "nonexistent-binary-xyz arg");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected a launch error, got {other:?}"),
    }
}

#[test]
fn it_fails_to_launch_in_missing_directory() {
    let dir = TempDir::new().unwrap();
    let mut req = request(&["true"]);
    req.working_directory = Some(dir.path().join("missing"));

    assert!(matches!(
        ProcessLauncher.launch(req),
        Err(ExecError::Launch { .. })
    ));
}
