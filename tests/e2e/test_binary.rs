//! Integration tests for the circle-graph binary.
//!
//! These tests run the compiled binary against the graphs under `demos/` and
//! check its exit status, output format and error reporting.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled binary, provided by cargo for integration tests.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_circle-graph"))
}

fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

// ─── Output format ──────────────────────────────────────────────────────────

#[test]
fn test_stdin_to_svg() {
    let svg = stdout_of(&run_binary("a,b,c\na-b-c-a\n", &[]));
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<line ").count(), 3);
}

#[test]
fn test_surface_size_flags() {
    let svg = stdout_of(&run_binary("a", &["--width", "640", "--height", "480"]));
    assert!(svg.contains(r#"width="640" height="480""#));
}

#[test]
fn test_paint_flags() {
    let svg = stdout_of(&run_binary(
        "a,b\na-b",
        &["--background", "navy", "--vertex-color", "gold", "--edge-color", "red"],
    ));
    assert!(svg.contains(r#"fill="navy""#));
    assert!(svg.contains(r#"fill="gold""#));
    assert!(svg.contains(r#"stroke="red""#));
}

#[test]
fn test_commands_flag_lists_draw_commands() {
    let out = stdout_of(&run_binary("-d\na,b\na-b", &["--commands"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Background"));
    assert!(lines[1].starts_with("Line"));
    assert!(lines[2].starts_with("Polygon"));
    assert!(lines[3].starts_with("Circle"));
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn test_user_error_exits_nonzero() {
    let output = run_binary("a,b\na-c\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'c' is not defined"), "stderr: {stderr}");
    assert!(!stderr.contains("please report"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invisible_edge_is_render_error() {
    let output = run_binary("a,_b\na-_b\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("render error"), "stderr: {stderr}");
    assert!(stderr.contains("invisible vertices"));
}

// ─── Files ──────────────────────────────────────────────────────────────────

#[test]
fn test_every_demo_renders() {
    let mut rendered = 0;
    for entry in fs::read_dir(demos_dir()).expect("demos directory").flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("graph") {
            continue;
        }
        let output = Command::new(binary_path())
            .arg(&path)
            .output()
            .expect("Failed to run binary");
        let svg = stdout_of(&output);
        assert!(svg.starts_with("<svg"), "{:?} produced no SVG", path);
        rendered += 1;
    }
    assert!(rendered > 0, "no demos found in {:?}", demos_dir());
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("circle_graph_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("out.svg");

    let output = run_binary("a,b\na-b\n", &["--output", out_file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("<svg"));

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}
