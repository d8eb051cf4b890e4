//! CLI integration tests for treescribe

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join("proj");
        fs::create_dir(&root).expect("Failed to create root");
        Self { _dir: dir, root }
    }

    fn add_file(&self, path: &str, content: &str) -> &Self {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(full_path, content).expect("Failed to write file");
        self
    }

    fn path(&self) -> &Path {
        &self.root
    }
}

fn treescribe() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treescribe"));
    cmd.env_remove("TREESCRIBE_PATH").env_remove("TREESCRIBE_LOG");
    cmd
}

#[test]
fn test_tree_of_explicit_path() {
    let fixture = Fixture::new();
    fixture.add_file("a.txt", "").add_file("src/main.go", "");

    treescribe()
        .args(["-p"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("proj/\n└── a.txt\n└── src/\n    └── main.go\n"));
}

#[test]
fn test_tree_of_current_directory() {
    let fixture = Fixture::new();
    fixture.add_file("a.txt", "");

    treescribe()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("proj/\n└── a.txt\n"));
}

#[test]
fn test_hidden_scenario() {
    let fixture = Fixture::new();
    fixture.add_file("a.txt", "").add_file(".cache/secret.txt", "");

    treescribe()
        .arg("--path")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("proj/\n└── a.txt\n"));

    treescribe()
        .arg("--path")
        .arg(fixture.path())
        .arg("--include-hidden")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "proj/\n└── .cache/\n    └── secret.txt\n└── a.txt\n",
        ));
}

#[test]
fn test_node_modules_never_listed() {
    let fixture = Fixture::new();
    fixture
        .add_file("node_modules/pkg/index.js", "")
        .add_file("main.js", "");

    for extra in [&[][..], &["--ignore", "unrelated"][..]] {
        treescribe()
            .arg("-p")
            .arg(fixture.path())
            .args(extra)
            .arg("-i")
            .assert()
            .success()
            .stdout(predicate::str::contains("main.js"))
            .stdout(predicate::str::contains("node_modules").not())
            .stdout(predicate::str::contains("index.js").not());
    }
}

#[test]
fn test_ignore_flag_merges_with_defaults() {
    let fixture = Fixture::new();
    fixture
        .add_file("dist/bundle.js", "")
        .add_file("target/app", "")
        .add_file("venv/lib.py", "")
        .add_file("src/lib.rs", "");

    treescribe()
        .arg("-p")
        .arg(fixture.path())
        .args(["--ignore", "dist,target"])
        .assert()
        .success()
        .stdout(predicate::str::diff("proj/\n└── src/\n    └── lib.rs\n"));
}

#[test]
fn test_output_contents_single_file() {
    let fixture = Fixture::new();
    fixture.add_file("readme.md", "hello");

    treescribe()
        .arg("-p")
        .arg(fixture.path())
        .arg("--output-contents")
        .assert()
        .success()
        .stdout(predicate::str::diff("readme.md:\n\n```\nhello\n```\n\n"));
}

#[test]
fn test_output_contents_skips_other_extensions() {
    let fixture = Fixture::new();
    fixture
        .add_file("notes.md", "keep")
        .add_file("image.png", "binary")
        .add_file(".hidden/inner.png", "binary");

    treescribe()
        .arg("-p")
        .arg(fixture.path())
        .args(["--output-contents", "--include-hidden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.md:"))
        .stdout(predicate::str::contains("png").not());
}

#[test]
fn test_missing_path_reports_error() {
    let fixture = Fixture::new();
    let missing = fixture.path().join("missing");

    treescribe()
        .arg("-p")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("no such file or directory"));
}

#[test]
fn test_file_path_reports_not_a_directory() {
    let fixture = Fixture::new();
    fixture.add_file("plain.txt", "text");

    treescribe()
        .arg("-p")
        .arg(fixture.path().join("plain.txt"))
        .arg("--output-contents")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("is not a directory"));
}

#[test]
fn test_output_file() {
    let fixture = Fixture::new();
    fixture.add_file("a.txt", "");
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("tree.txt");

    treescribe()
        .arg("-p")
        .arg(fixture.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "proj/\n└── a.txt\n"
    );
}

#[test]
fn test_bars_style() {
    let fixture = Fixture::new();
    fixture.add_file("src/main.go", "");

    treescribe()
        .arg("-p")
        .arg(fixture.path())
        .args(["--style", "bars"])
        .assert()
        .success()
        .stdout(predicate::str::diff("proj/\n├── src/\n│   └── main.go\n"));
}

#[test]
fn test_help_does_not_traverse() {
    treescribe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--include-hidden"))
        .stdout(predicate::str::contains("--output-contents"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let fixture = Fixture::new();
    fixture.add_file("a.txt", "");

    treescribe()
        .arg("-p")
        .arg(fixture.path())
        .arg("-vv")
        .assert()
        .success()
        .stdout(predicate::str::diff("proj/\n└── a.txt\n"))
        .stderr(predicate::str::contains("Rendering tree of"));
}

#[test]
fn test_closed_pipe_exits_cleanly() {
    use std::io::{BufRead, BufReader};
    use std::process::Stdio;

    let fixture = Fixture::new();
    for i in 0..3000 {
        fixture.add_file(&format!("entry_with_a_fairly_long_name_{i:05}.txt"), "");
    }

    let mut child = treescribe()
        .arg("-p")
        .arg(fixture.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn treescribe");

    // Read the first line, then hang up like `head -1` would.
    let mut first = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut first)
        .unwrap();
    assert_eq!(first, "proj/\n");

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}

#[test]
fn test_empty_path_prints_usage() {
    treescribe()
        .args(["-p", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
