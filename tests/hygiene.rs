//! Hygiene — source-level standards for the production modules.
//!
//! Every behavior runs inside someone else's page, so a panic or a silently
//! dropped error takes the whole page's scripting down with it. These tests
//! scan `src/` (test files excluded) and hold each antipattern to a budget of
//! zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Lines containing `pattern`, as `path:line` locations.
fn offenders(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(move |(_, line)| line.contains(pattern))
                .map(move |(i, _)| format!("{}:{}", file.path, i + 1))
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let hits = offenders(&source_files(), pattern);
    assert!(hits.is_empty(), "`{pattern}` found ({why}):\n  {}", hits.join("\n  "));
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "panics abort page scripting");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "panics abort page scripting");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "panics abort page scripting");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "panics abort page scripting");
}

#[test]
fn no_todo_or_unimplemented() {
    assert_absent("todo!(", "stubs panic when reached");
    assert_absent("unimplemented!(", "stubs panic when reached");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "route DOM results through dom::report");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "log the error before dropping it");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code instead");
}
