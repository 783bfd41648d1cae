#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{ChildPath, FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> ChildPath {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write file");
    file
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Leading marker of every printed record
pub fn markers(output: &str) -> String {
    output
        .lines()
        .filter_map(|line| line.chars().next())
        .collect()
}
