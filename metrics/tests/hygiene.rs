//! Hygiene - scans `metrics/src/` for patterns the simulators must not ship with.
//!
//! The simulators run inside timer callbacks on the browser event loop; a
//! panic there freezes every card for the rest of the page's life. Every
//! budget is zero and stays zero.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, label, budget)
const BUDGETS: &[(&str, &str, usize)] = &[
    (".unwrap()", "unwrap", 0),
    (".expect(", "expect", 0),
    ("panic!(", "panic", 0),
    ("unreachable!(", "unreachable", 0),
    ("todo!(", "todo", 0),
    ("unimplemented!(", "unimplemented", 0),
    ("let _ =", "silent discard", 0),
    (".ok()", "dot ok", 0),
    ("#[allow(dead_code)]", "allow dead_code", 0),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(sources: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
        })
        .collect()
}

fn check(pattern: &str) {
    let Some((_, label, budget)) = BUDGETS.iter().find(|(p, _, _)| *p == pattern) else {
        return;
    };
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found; run from the crate root");
    let found = hits(&sources, pattern);
    assert!(
        found.len() <= *budget,
        "{label} budget exceeded: found {}, max {budget}.\n{}",
        found.len(),
        found.join("\n")
    );
}

#[test]
fn no_unwrap() {
    check(".unwrap()");
}

#[test]
fn no_expect() {
    check(".expect(");
}

#[test]
fn no_panic() {
    check("panic!(");
}

#[test]
fn no_unreachable() {
    check("unreachable!(");
}

#[test]
fn no_todo() {
    check("todo!(");
}

#[test]
fn no_unimplemented() {
    check("unimplemented!(");
}

#[test]
fn no_silent_discard() {
    check("let _ =");
}

#[test]
fn no_dot_ok() {
    check(".ok()");
}

#[test]
fn no_allow_dead_code() {
    check("#[allow(dead_code)]");
}
