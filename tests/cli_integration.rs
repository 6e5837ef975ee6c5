//! CLI integration tests for nodo
//!
//! These tests run the `nodo` binary against a database in a temporary
//! directory and check what it prints.

use predicates::prelude::*;
use tempfile::TempDir;

/// A temporary database location for one test
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Get a command instance for the nodo binary, pointed at this workspace
    fn nodo(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("nodo"));
        cmd.env_remove("NODO_DB")
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .arg("--db")
            .arg(self.dir.path().join("nodo.db"));
        cmd
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.nodo().args(args).assert().success();
        String::from_utf8_lossy(&output.get_output().stdout).into_owned()
    }

    /// Runs a setup step that must succeed with exactly `expected`
    fn given(&self, args: &[&str], expected: &str) {
        assert_eq!(self.run(args), format!("{}\n", expected), "setup step {:?}", args);
    }

    fn config(&self, contents: &str) {
        let config_dir = self.dir.path().join("config").join("nodo");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), contents).unwrap();
    }
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn test_no_arguments_shows_help() {
    let ws = Workspace::new();

    ws.nodo()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: nodo <action> [arguments]"));
}

#[test]
fn test_help_flags() {
    let ws = Workspace::new();

    for flag in ["-h", "--help", "help"] {
        ws.nodo()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("nodo move <task_id> <list_name>"));
    }
}

#[test]
fn test_version_flags() {
    let ws = Workspace::new();

    for flag in ["-v", "--version", "version"] {
        ws.nodo()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("The Simple Command Line Task Manager"))
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_help_and_version_skip_the_database() {
    let ws = Workspace::new();

    ws.nodo().arg("help").assert().success();
    ws.nodo().arg("version").assert().success();

    assert!(!ws.dir.path().join("nodo.db").exists());
}

#[test]
fn test_unknown_command_falls_back_to_help() {
    let ws = Workspace::new();

    ws.nodo()
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: nodo"))
        .stderr(predicate::str::is_empty());
}

// =============================================================================
// Lists and Tasks
// =============================================================================

#[test]
fn test_groceries_workflow() {
    let ws = Workspace::new();

    assert_eq!(ws.run(&["add", "list", "Groceries"]), "Added list Groceries\n");
    assert_eq!(
        ws.run(&["add", "Groceries", "Buy milk"]),
        "Task #1 added to list Groceries\n"
    );

    ws.nodo()
        .args(["ls", "lists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries (1)"));

    assert_eq!(ws.run(&["done", "1"]), "Task #1 marked as done\n");

    ws.nodo()
        .args(["ls", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::is_match(r"\d{1,2}/\d{1,2}/\d{4}").unwrap());

    assert_eq!(ws.run(&["rm", "1"]), "Task #1 removed\n");

    ws.nodo()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk").not());

    ws.nodo()
        .args(["ls", "removed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn test_ls_shows_overview() {
    let ws = Workspace::new();
    ws.given(&["add", "list", "Work"], "Added list Work");
    ws.given(&["add", "Work", "Write", "report"], "Task #1 added to list Work");

    assert_eq!(ws.run(&["ls"]), "Work:\n   1  Write report\n");
}

#[test]
fn test_bare_id_shows_task() {
    let ws = Workspace::new();
    ws.given(&["add", "Read book"], "Task #1 added to list todo");
    ws.given(&["star", "1"], "Task #1 marked as important");

    let shown = ws.run(&["1"]);
    assert_eq!(shown, ws.run(&["show", "1"]));
    assert!(shown.contains("Name: Read book"));
    assert!(shown.contains("Important: yes"));
    assert!(shown.contains("Done Date: none"));
}

#[test]
fn test_missing_task_is_reported_not_failed() {
    let ws = Workspace::new();

    assert_eq!(ws.run(&["done", "42"]), "Task #42 does not exist.\n");
    assert_eq!(ws.run(&["undo"]), "No task identifier specified.\n");
    assert_eq!(ws.run(&["42"]), "Task #42 does not exist.\n");
}

#[test]
fn test_move_task() {
    let ws = Workspace::new();
    ws.given(&["add", "list", "Home"], "Added list Home");
    ws.given(&["add", "Fix sink"], "Task #1 added to list todo");

    assert_eq!(ws.run(&["move", "1", "Home"]), "Task #1 moved to list Home\n");
    assert_eq!(ws.run(&["ls", "Home"]), "   1  Fix sink\n");
    assert_eq!(ws.run(&["move", "1", "Attic"]), "List Attic does not exist.\n");
}

#[test]
fn test_remove_and_restore_list() {
    let ws = Workspace::new();
    ws.given(&["add", "list", "Someday"], "Added list Someday");
    ws.given(&["add", "Someday", "Learn piano"], "Task #1 added to list Someday");

    assert_eq!(ws.run(&["delete", "list", "Someday"]), "List Someday removed\n");
    assert_eq!(ws.run(&["ls"]), "Nothing to show.\n");

    assert_eq!(ws.run(&["restore", "list", "Someday"]), "List Someday restored\n");
    assert_eq!(ws.run(&["ls"]), "Someday:\n   1  Learn piano\n");
}

#[test]
fn test_verbose_goes_to_stderr() {
    let ws = Workspace::new();

    ws.nodo()
        .args(["--verbose", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to show."))
        .stderr(predicate::str::contains("[verbose:dispatch]"));
}

#[test]
fn test_default_list_from_config() {
    let ws = Workspace::new();
    ws.config("default_list = \"inbox\"\n");

    let added = ws.run(&["add", "Answer mail"]);
    if cfg!(target_os = "linux") {
        assert_eq!(added, "Task #1 added to list inbox\n");
    } else {
        assert!(added.starts_with("Task #1 added to list"));
    }
}

#[test]
fn test_broken_config_still_answers_help_and_version() {
    let ws = Workspace::new();
    ws.config("default_list = [\n");

    let cases: [&[&str]; 3] = [&["help"], &["--version"], &["frobnicate"]];
    for args in cases {
        ws.nodo().args(args).assert().success();
    }

    if cfg!(target_os = "linux") {
        ws.nodo()
            .arg("ls")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}

#[test]
fn test_list_with_spaces() {
    let ws = Workspace::new();
    ws.given(&["add", "list", "Side", "Projects"], "Added list Side Projects");
    ws.given(&["add", "Side Projects", "Blog"], "Task #1 added to list Side Projects");

    assert_eq!(ws.run(&["ls", "Side", "Projects"]), "   1  Blog\n");
}

#[test]
fn test_oversized_id_matches_show() {
    let ws = Workspace::new();
    let huge = "99999999999999999999";

    assert_eq!(ws.run(&[huge]), ws.run(&["show", huge]));
    assert_eq!(ws.run(&[huge]), format!("Task #{} does not exist.\n", huge));
}
