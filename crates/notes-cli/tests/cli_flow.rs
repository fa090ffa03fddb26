use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const PASSWORD: &str = "test-password-123";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_notes"))
}

/// Scratch XDG homes with a config that keeps scrypt cheap.
struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("config").join("notes");
        std::fs::create_dir_all(&config).expect("create config dir");
        std::fs::write(config.join("config.toml"), "[cipher]\nwork_factor = 10\n")
            .expect("write config");
        Self { dir }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("notes.json")
    }

    fn command(&self, password: &str) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("NOTES_FILE", self.data_file())
            .env("NOTES_PASSWORD", password)
            .env("NO_COLOR", "1")
            .env_remove("NOTES_CONFIG")
            .env_remove("NOTES_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_password(PASSWORD, args)
    }

    fn run_with_password(&self, password: &str, args: &[&str]) -> Output {
        self.command(password)
            .args(args)
            .output()
            .expect("run notes")
    }

    fn add(&self, date: &str, title: &str, body: &str) {
        let output = self.run(&["add", "--date", date, "--title", title, "--body", body]);
        assert_success(&output, "add");
    }
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} failed: stdout={}, stderr={}",
        what,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn list_json(env: &Env) -> serde_json::Value {
    let output = env.run(&["list", "--json"]);
    assert_success(&output, "list");
    serde_json::from_slice(&output.stdout).expect("parse list json")
}

fn titles(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("list is an array")
        .iter()
        .map(|note| note["title"].as_str().expect("title").to_string())
        .collect()
}

fn file_text(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read notes file")
}

#[test]
fn test_cli_add_then_list_in_date_order() {
    let env = Env::new();
    env.add("01.01.2021", "A", "x");
    env.add("05.05.2020", "B", "y");

    let value = list_json(&env);
    assert_eq!(titles(&value), vec!["B", "A"]);
    assert_eq!(value[0]["number"], 1);
    assert_eq!(value[0]["date"], "05.05.2020");

    let plain = env.run(&["list", "--format", "plain"]);
    assert_success(&plain, "list plain");
    assert_eq!(
        String::from_utf8_lossy(&plain.stdout).trim_end(),
        "1 05.05.2020 B\n2 01.01.2021 A"
    );

    let text = file_text(&env.data_file());
    assert!(!text.contains("\"A\""));
    assert!(text.contains("01.01.2021"));
}

#[test]
fn test_cli_show_json() {
    let env = Env::new();
    env.add("11.07.2021", "Groceries", "Milk and eggs");

    let output = env.run(&["show", "1", "--json"]);
    assert_success(&output, "show");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse show json");
    assert_eq!(value["number"], 1);
    assert_eq!(value["date"], "11.07.2021");
    assert_eq!(value["title"], "Groceries");
    assert_eq!(value["body"], "Milk and eggs");
}

#[test]
fn test_cli_edit_date_reorders() {
    let env = Env::new();
    env.add("01.01.2020", "first", "x");
    env.add("01.01.2021", "second", "y");

    let output = env.run(&["edit", "1", "--date", "01.01.2022", "--title", "moved"]);
    assert_success(&output, "edit");
    assert!(String::from_utf8_lossy(&output.stdout).contains("now note 2"));

    assert_eq!(titles(&list_json(&env)), vec!["second", "moved"]);
}

#[test]
fn test_cli_remove() {
    let env = Env::new();
    env.add("01.01.2020", "keep", "x");
    env.add("01.01.2021", "drop", "y");

    let output = env.run(&["remove", "2"]);
    assert_success(&output, "remove");
    assert_eq!(titles(&list_json(&env)), vec!["keep"]);
}

#[test]
fn test_cli_missing_file_lists_nothing() {
    let env = Env::new();
    let value = list_json(&env);
    assert_eq!(value, serde_json::json!([]));
    assert!(!env.data_file().exists());
}

#[test]
fn test_cli_wrong_password_exits_5() {
    let env = Env::new();
    env.add("01.01.2021", "secret", "x");

    let output = env.run_with_password("not-the-password", &["list"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Incorrect password"));
}

#[test]
fn test_cli_bad_number_exits_3() {
    let env = Env::new();
    env.add("01.01.2021", "only", "x");

    let output = env.run(&["show", "4"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Note 4 does not exist"));
}

#[test]
fn test_cli_note_zero_exits_3() {
    let env = Env::new();
    env.add("01.01.2021", "only", "x");

    for args in [&["show", "0"][..], &["remove", "0"][..], &["edit", "0", "--title", "t"][..]] {
        let output = env.run(args);
        assert_eq!(output.status.code(), Some(3), "{:?}", args);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Note 0 does not exist"));
    }
    assert_eq!(titles(&list_json(&env)), vec!["only"]);
}

#[test]
fn test_cli_invalid_date_exits_4() {
    let env = Env::new();
    let output = env.run(&["add", "--date", "31.02.2021", "--title", "t", "--body", "b"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!env.data_file().exists());
}

#[test]
fn test_cli_malformed_file_exits_6() {
    let env = Env::new();
    std::fs::write(env.data_file(), "not json").expect("write garbage");

    let output = env.run(&["list"]);
    assert_eq!(output.status.code(), Some(6));
    assert_eq!(file_text(&env.data_file()), "not json");
}

#[test]
fn test_cli_menu_requires_terminal() {
    let env = Env::new();
    let output = env.run(&[]);
    assert_eq!(output.status.code(), Some(4));
}
