//! CLI tests for `sip tests` and `sip check`.
//!
//! Spawns the sip binary against temporary packages and checks output and
//! exit codes.

use std::process::{Command, Output};

use sip::exit_codes;
use sip::test_support::TempPackage;

fn sip(package: &TempPackage, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sip"))
        .arg("--package")
        .arg(package.root())
        .args(args)
        .output()
        .expect("run sip")
}

#[test]
fn tests_lists_static_and_generated() {
    let package = TempPackage::new();
    package.write("utils/gen.cpp", "");
    package.write_sipfile("static = [\"0\"]\ngen = [\"1a-b gen 100\", \"2 sh:echo 7\"]\n");

    let output = sip(&package, &["tests"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "static 0",
            "gen 1a utils/gen.cpp 100",
            "gen 1b utils/gen.cpp 100",
            "gen 2 sh:echo 7",
        ]
    );
}

#[test]
fn tests_json_reports_generator_kind() {
    let package = TempPackage::new();
    package.write_sipfile("gen = [\"3 sh:seq 5\"]\n");

    let output = sip(&package, &["tests", "--json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["gen_tests"]["3"]["generator"]["kind"], "shell_command");
    assert_eq!(json["gen_tests"]["3"]["generator"]["value"], "seq");
    assert_eq!(json["gen_tests"]["3"]["args"], "5");
}

#[test]
fn invalid_sipfile_exits_invalid() {
    let package = TempPackage::new();
    package.write_sipfile("static = [\"5c-5a\"]\n");

    let output = sip(&package, &["tests"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("5c-5a"), "stderr: {stderr}");
}

#[test]
fn check_reports_undeclared_inputs() {
    let package = TempPackage::new();
    package.write_sipfile("static = [\"1a-b\"]\n");
    package.write("tests/1a.in", "");
    package.write("tests/1b.in", "");
    package.write("tests/2.in", "");

    let output = sip(&package, &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::UNSPECIFIED_TESTS));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("`2`"));
    assert!(!stdout.contains("`1a`"));
}

#[test]
fn check_passes_when_everything_is_declared() {
    let package = TempPackage::new();
    package.write_sipfile("static = [\"1\"]\n");
    package.write("tests/1.in", "");

    let output = sip(&package, &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
}
