//! Library-level tests over the graphs shipped in `demos/`.
//!
//! Every `demos/*.graph` must render, and render identically twice. Every
//! `demos/invalid/*.graph` must fail with a user error.

use std::fs;
use std::path::{Path, PathBuf};

use circle_graph::{Canvas, ErrorClass, RenderSettings, Stage, render_source};

fn graphs_in(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut found: Vec<(String, PathBuf)> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", dir, e))
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("graph"))
        .map(|path| {
            let name = path.file_stem().unwrap().to_string_lossy().to_string();
            (name, path)
        })
        .collect();
    found.sort();
    found
}

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

#[test]
fn test_demos_render_deterministically() {
    let demos = graphs_in(&demos_dir());
    assert!(!demos.is_empty(), "No demos found in {:?}", demos_dir());

    let settings = RenderSettings::default();
    let mut failures = Vec::new();
    for (name, path) in &demos {
        let src = fs::read_to_string(path).unwrap();
        let mut first = Canvas::new(300.0, 300.0);
        let mut second = Canvas::new(300.0, 300.0);
        match (
            render_source(&src, &settings, &mut first),
            render_source(&src, &settings, &mut second),
        ) {
            (Ok(()), Ok(())) if first.commands() == second.commands() => {}
            (Ok(()), Ok(())) => failures.push(format!("{name}: output differs between runs")),
            (Err(e), _) | (_, Err(e)) => failures.push(format!("{name}: {e}")),
        }
    }
    assert!(failures.is_empty(), "Demo failures:\n{}", failures.join("\n"));
}

#[test]
fn test_invalid_demos_fail_with_user_errors() {
    let invalid = graphs_in(&demos_dir().join("invalid"));
    assert!(!invalid.is_empty());

    for (name, path) in &invalid {
        let src = fs::read_to_string(path).unwrap();
        let mut canvas = Canvas::new(300.0, 300.0);
        let err = render_source(&src, &RenderSettings::default(), &mut canvas)
            .err()
            .unwrap_or_else(|| panic!("{name} rendered but should have failed"));
        assert_eq!(err.class(), ErrorClass::UserError, "{name}: {err}");
        let expected_stage = if name == "invisible_edge" { Stage::Render } else { Stage::Parse };
        assert_eq!(err.stage(), expected_stage, "{name}: {err}");
        assert!(canvas.commands().is_empty(), "{name} left a partial drawing");
    }
}
