#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn cmstag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cmstag").unwrap();
    cmd.env_remove("CMSTAG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a block file under `<root>/blocks/`
pub fn write_block(root: &Path, identifier: &str, content: &str) {
    let dir = root.join("blocks");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.html", identifier)), content).unwrap();
}

/// Write a snippet file under `<root>/snippets/`
pub fn write_snippet(root: &Path, identifier: &str, content: &str) {
    let dir = root.join("snippets");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.html", identifier)), content).unwrap();
}
