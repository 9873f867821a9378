use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_session(data_path: &Path, script: &str) -> String {
    let output = cargo_bin_cmd!("abook")
        .args(["--data-path", data_path.to_str().expect("data path")])
        .write_stdin(script.to_string())
        .output()
        .expect("run session");
    assert!(output.status.success(), "session failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn full_session_add_show_search_delete() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("abook.json");

    let script = "\
add
ada lovelace
+380441234567
1815-12-10
ada@example.com
London
show all
search ada
delete ada
search ada
good bye
";
    let stdout = run_session(&data_path, script);

    assert!(stdout.contains("Contact Ada Lovelace has been added."));
    assert!(stdout.contains("Contacts:"));
    assert!(stdout.contains("ada@example.com"));
    assert!(stdout.contains("Contact Ada Lovelace successfully deleted"));
    assert!(stdout.contains("Contact not found."));
    assert!(stdout.contains("Good bye!"));
}

#[test]
fn contacts_persist_across_sessions() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("abook.json");

    let add = "add\ngrace\n\n1906-12-09\n\n\nexit\n";
    run_session(&data_path, add);
    assert!(data_path.exists());

    let stdout = run_session(&data_path, "search grace\nexit\n");
    assert!(stdout.contains("Grace: phone -, birthday 1906-12-09"));
}

#[test]
fn birthday_query_reports_no_matches_on_empty_book() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("abook.json");

    let stdout = run_session(&data_path, "birthday 5\nexit\n");
    assert!(stdout.contains("No birthdays in next 5 days"));
}

#[test]
fn corrupt_snapshot_is_fatal_at_startup() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("abook.json");
    fs::write(&data_path, "not json").expect("write");

    let output = cargo_bin_cmd!("abook")
        .args(["--data-path", data_path.to_str().expect("data path")])
        .write_stdin("exit\n".to_string())
        .output()
        .expect("run session");
    assert!(!output.status.success());
}

#[test]
fn invalid_field_input_does_not_end_the_session() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("abook.json");

    let script = "add\nada\nphone-with-letters\nhello\nexit\n";
    let stdout = run_session(&data_path, script);
    assert!(stdout.contains("Invalid input."));
    assert!(stdout.contains("How can I help you?"));
}
