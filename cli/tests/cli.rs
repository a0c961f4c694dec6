use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn matrix_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spmv-bfs")).args(args).env_remove("RUST_LOG").output().unwrap()
}

#[test]
fn prints_result_table() {
    let file = matrix_file("4 4\n0 1 0 0\n0 0 1 0\n0 0 0 1\n0 0 0 0\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Breadth first search on the graph using SpMV ... done\n"));
    assert!(stdout.contains("Vert\tCol\tDis\n0\t2\t0\n1\t2\t1\n2\t2\t2\n3\t2\t3\n"));
}

#[test]
fn dump_includes_transposed_matrix() {
    let file = matrix_file("2 2\n0 1\n0 0\n");
    let output = run(&["--dump", "--source", "0", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("This matrix is 2 x 2\n0 0 \n1 0 \n"));
}

#[test]
fn debug_verbosity_logs_engine_dumps() {
    let file = matrix_file("3 3\n0 1 0\n0 0 1\n0 0 0\n");
    let output = run(&["-vv", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("---- Print Matrix ----"), "{stderr}");
    assert!(stderr.contains("This matrix is 3 x 3"), "{stderr}");
    assert!(stderr.contains("---- Print BFS Matrix Result ----"), "{stderr}");
}

#[test]
fn default_verbosity_keeps_stderr_quiet() {
    let file = matrix_file("2 2\n0 1\n0 0\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn non_square_matrix_exits_with_failure() {
    let file = matrix_file("2 3\n0 1 0\n0 0 1\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not an adjacency matrix"));
}

#[test]
fn out_of_range_source_exits_with_failure() {
    let file = matrix_file("2 2\n0 1\n1 0\n");
    let output = run(&["-s", "5", file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid source vertex 5"));
}

#[test]
fn missing_file_exits_with_failure() {
    let output = run(&["/nonexistent/matrix.txt"]);
    assert!(!output.status.success());
}
