//! Integration tests for mirroring a Markdown tree through the CLI
//!
//! Covers:
//! - Directory traversal and structure preservation
//! - File filtering (case-sensitive `.md` only)
//! - Page boilerplate and heading anchors
//! - Reruns over an existing output tree

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use mdmirror::{HTML_END, HTML_START};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use walkdir::WalkDir;

fn run_mdmirror(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_mdmirror"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run mdmirror");

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    (stdout, stderr, output.status.success())
}

fn mirror(input: &Path, output: &Path) -> (String, String, bool) {
    run_mdmirror(&[
        "--in-dir",
        input.to_str().unwrap(),
        "--out-dir",
        output.to_str().unwrap(),
    ])
}

fn relative_dirs(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[test]
fn test_readme_heading_anchor() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("inputs");
    let output = tmp.path().join("dist");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("README.md"), "# Hi").unwrap();

    let (stdout, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("Wrote file:"), "stdout: {}", stdout);

    let page = fs::read_to_string(output.join("README.html")).unwrap();
    assert_eq!(page, format!("{HTML_START}<h1 id=\"hi\">Hi</h1>\n{HTML_END}"));
}

#[test]
fn test_non_markdown_files_are_skipped() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("inputs");
    let output = tmp.path().join("dist");
    fs::create_dir_all(input.join("sub")).unwrap();
    fs::write(input.join("sub/a.md"), "*a*").unwrap();
    fs::write(input.join("sub/notes.txt"), "not markdown").unwrap();
    fs::write(input.join("sub/SHOUT.MD"), "# loud").unwrap();
    fs::write(input.join("sub/long.markdown"), "# long").unwrap();

    let (stdout, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("Ignoring non-markdown file"), "stdout: {}", stdout);
    assert!(stdout.contains("notes.txt"));

    assert!(output.join("sub").is_dir());
    assert_eq!(
        relative_files(&output),
        BTreeSet::from([PathBuf::from("sub/a.html")])
    );
}

#[test]
fn test_directory_structure_is_mirrored() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("inputs");
    let output = tmp.path().join("dist");

    fs::create_dir_all(input.join("level1/level2/level3")).unwrap();
    fs::create_dir_all(input.join("assets/img")).unwrap();
    fs::create_dir_all(input.join("empty")).unwrap();
    fs::write(input.join("root.md"), "# Root").unwrap();
    fs::write(input.join("level1/mid.md"), "## Mid").unwrap();
    fs::write(input.join("level1/level2/level3/deep.md"), "### Deep").unwrap();
    fs::write(input.join("assets/img/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let (_, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);

    assert_eq!(relative_dirs(&input), relative_dirs(&output));
    assert_eq!(
        relative_files(&output),
        BTreeSet::from([
            PathBuf::from("root.html"),
            PathBuf::from("level1/mid.html"),
            PathBuf::from("level1/level2/level3/deep.html"),
        ])
    );

    let deep = fs::read_to_string(output.join("level1/level2/level3/deep.html")).unwrap();
    assert!(deep.contains("<h3 id=\"deep\">Deep</h3>"));
}

#[test]
fn test_empty_input_directory() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("inputs");
    let output = tmp.path().join("dist");
    fs::create_dir(&input).unwrap();

    let (_, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);

    assert!(output.is_dir());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("inputs");
    let output = tmp.path().join("dist");
    fs::create_dir_all(input.join("guide")).unwrap();
    fs::write(
        input.join("guide/setup.md"),
        "# Setup\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n```sh\ncargo build\n```\n",
    )
    .unwrap();

    let (_, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);
    let first = fs::read(output.join("guide/setup.html")).unwrap();

    let (_, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);
    let second = fs::read(output.join("guide/setup.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_is_overwritten() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("inputs");
    let output = tmp.path().join("dist");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    fs::write(input.join("page.md"), "new").unwrap();
    fs::write(output.join("page.html"), "stale content that is much longer than the new page body").unwrap();
    fs::write(output.join("unrelated.txt"), "kept").unwrap();

    let (_, stderr, success) = mirror(&input, &output);
    assert!(success, "stderr: {}", stderr);

    let page = fs::read_to_string(output.join("page.html")).unwrap();
    assert_eq!(page, format!("{HTML_START}<p>new</p>\n{HTML_END}"));
    assert_eq!(fs::read_to_string(output.join("unrelated.txt")).unwrap(), "kept");
}
