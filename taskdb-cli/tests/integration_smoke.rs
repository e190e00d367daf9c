//! Smoke tests to verify command wiring

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{self, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("taskdb").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("taskdb").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_check_help_hides_password_env_value() {
    let mut cmd = Command::cargo_bin("taskdb").unwrap();
    cmd.arg("check").arg("--help").env("DB_PASSWORD", "hunter2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-password"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_check_fails_on_unreachable_database() {
    let mut cmd = Command::cargo_bin("taskdb").unwrap();
    cmd.args([
        "check",
        "--db-host",
        "127.0.0.1",
        "--db-port",
        "1",
        "--db-acquire-timeout",
        "1",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot reach"));
}

#[test]
fn test_rejects_unknown_command() {
    let mut cmd = Command::cargo_bin("taskdb").unwrap();
    cmd.arg("migrate");

    cmd.assert().failure();
}

#[test]
fn test_serve_listens_while_database_check_is_pending() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut child = process::Command::new(env!("CARGO_BIN_EXE_taskdb"))
        .args([
            "serve",
            "--bind",
            &format!("127.0.0.1:{port}"),
            "--db-host",
            "127.0.0.1",
            "--db-port",
            "1",
            "--db-acquire-timeout",
            "30",
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Well inside the 30 s acquire timeout, so the check is still running.
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut stream = loop {
        match TcpStream::connect(("127.0.0.1", port)) {
            Ok(stream) => break Some(stream),
            Err(_) if Instant::now() < deadline => thread::sleep(Duration::from_millis(50)),
            Err(_) => break None,
        }
    };

    let response = stream.as_mut().map(|stream| {
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    });

    child.kill().ok();
    child.wait().ok();

    let response = response.expect("serve did not start listening");
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""backend":"mysql""#), "{response}");
}
