// End-to-end checks of stdout and exit codes against the built binary.
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bcc-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run bcc-cli")
}

fn run_on(file: &Path, extra: &[&str]) -> Output {
    let f = file.to_str().unwrap();
    let mut args = vec!["-f", f];
    args.extend_from_slice(extra);
    run(&args)
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("UserConfigCommunity.json");
    std::fs::write(&p, content).unwrap();
    (dir, p)
}

#[test]
fn prints_first_array_match() {
    let (_d, p) = fixture(r#"{"a": {"b": [{"c": 1}, {"c": 2}]}}"#);
    let out = run_on(&p, &["a.b.c"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "1\n");
}

#[test]
fn prints_null_and_strings_plainly() {
    let (_d, p) = fixture(r#"{"a": null, "s": "socks", "o": {"k": [true]}}"#);
    assert_eq!(stdout(&run_on(&p, &["a"])), "null\n");
    assert_eq!(stdout(&run_on(&p, &["s"])), "socks\n");
    assert_eq!(stdout(&run_on(&p, &["o"])), "{\"k\":[true]}\n");
}

#[test]
fn arguments_after_key_are_ignored() {
    let (_d, p) = fixture(r#"{"a": 1, "b": 2}"#);
    let out = run_on(&p, &["a", "b", "c.d"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "1\n");
}

#[test]
fn verbose_found_report() {
    let (_d, p) = fixture("{\n  \"proxy\": {\n    \"enabled\": false\n  }\n}\n");
    let out = run_on(&p, &["-v", "proxy.enabled"]);
    assert_eq!(out.status.code(), Some(0));
    let expected = format!(
        "Reading from: {}\nFound on line: 3\nSetting Key: proxy.enabled\nSetting Value: false\n",
        p.display()
    );
    assert_eq!(stdout(&out), expected);
}

#[test]
fn verbose_null_value() {
    let (_d, p) = fixture(r#"{"a": null}"#);
    let out = run_on(&p, &["-v", "a"]);
    assert!(stdout(&out).ends_with("Setting Value: null\n"));
}

#[test]
fn not_found_is_silent_unless_verbose() {
    let (_d, p) = fixture("{}");
    let out = run_on(&p, &["missing.key"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "");

    let out = run_on(&p, &["-v", "missing.key"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "Setting not found.\n");
}

#[test]
fn missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_on(&dir.path().join("absent.json"), &["a"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Failed to read file"));
}

#[test]
fn malformed_json_exits_one() {
    let (_d, p) = fixture("{\"a\": [1,");
    let out = run_on(&p, &["a"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Failed to parse JSON"));
}

#[test]
fn help_and_missing_key_exit_zero() {
    let out = run(&["-h"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Usage"));

    let out = run(&[]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("Usage"));
    assert!(text.contains("project_options.connections.proxy.enabled"));
}

#[test]
fn help_flag_wins_over_other_arguments() {
    let out = run(&["-f", "/nonexistent/bcc/config.json", "a.b", "-h"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("Usage"));
    assert!(!text.contains("Failed to read file"));
}
