//! Integration tests for render and blocks commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{cmstag_cmd, write_block, write_snippet};

fn init_site(temp: &TempDir) {
    cmstag_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_render_expands_nested_blocks() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_block(temp.path(), "content", "Hello {{ cms:page:name }}!");
    write_block(temp.path(), "name", "World");
    fs::write(
        temp.path().join("index.html"),
        "<main>{{ cms:page:content }}</main>",
    )
    .unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout("<main>Hello World!</main>");
}

#[test]
fn test_render_keeps_unknown_signature() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    fs::write(
        temp.path().join("index.html"),
        "before {{ cms:unknown:foo }} after",
    )
    .unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout("before {{ cms:unknown:foo }} after");
}

#[test]
fn test_render_self_reference_terminates() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_block(temp.path(), "loop", "a{{ cms:page:loop }}b");
    fs::write(temp.path().join("index.html"), "{{ cms:page:loop }}").unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout("ab");
}

#[test]
fn test_render_escapes_scripts_by_default() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_block(temp.path(), "code", "<%= secret %>");
    fs::write(
        temp.path().join("index.html"),
        "{{ cms:page:code }}|{{ cms:helper:today }}",
    )
    .unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout("&lt;%= secret %&gt;|<%= today() %>");

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html", "--allow-script"])
        .assert()
        .success()
        .stdout("<%= secret %>|<%= today() %>");
}

#[test]
fn test_render_max_depth_exceeded() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_block(temp.path(), "a", "{{ cms:page:b }}");
    write_block(temp.path(), "b", "{{ cms:page:c }}");
    write_block(temp.path(), "c", "deep");
    fs::write(temp.path().join("index.html"), "{{ cms:page:a }}").unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html", "--max-depth", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("deeper than 2 levels"));

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html", "--max-depth", "3"])
        .assert()
        .success()
        .stdout("deep");
}

#[test]
fn test_render_lists_tags() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_block(temp.path(), "title", "Home");
    write_snippet(temp.path(), "footer", "Bye");
    fs::write(
        temp.path().join("index.html"),
        "{{ cms:page:title level:1 }} {{ cms:snippet:footer }}{{ cms:field:meta }}",
    )
    .unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html", "--tags"])
        .assert()
        .success()
        .stdout("Home Bye\n--- tags ---\npage_title  [block]  {level:1}\nsnippet_footer\nfield_meta  [block missing]\n");
}

#[test]
fn test_render_missing_file() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "nope.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_blocks_listing() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    cmstag_cmd()
        .current_dir(temp.path())
        .arg("blocks")
        .assert()
        .success()
        .stdout(predicate::str::contains("No blocks found"));

    write_block(temp.path(), "sidebar.about", "x");
    write_block(temp.path(), "content", "y");
    write_snippet(temp.path(), "footer", "z");

    cmstag_cmd()
        .current_dir(temp.path())
        .arg("blocks")
        .assert()
        .success()
        .stdout("block    content\nblock    sidebar.about\nsnippet  footer\n");
}

#[test]
fn test_render_helper_option_keys_cannot_inject() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    fs::write(
        temp.path().join("index.html"),
        r#"{{ cms:helper:h "x) %><% evil %><%= y(":1, label:Home }}"#,
    )
    .unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout("<%= h(label: \"Home\") %>");
}

#[test]
fn test_render_non_ascii_identifier_stays_literal() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_block(temp.path(), "caf", "wrong block");
    fs::write(temp.path().join("index.html"), "{{ cms:page:café }}").unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout("{{ cms:page:café }}");
}
