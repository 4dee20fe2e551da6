use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use anyhow::Result;
use tempfile::TempDir;

fn run_with_stdin(input: &[u8], args: &[&str]) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_longroute"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)?;
    Ok(child.wait_with_output()?)
}

#[test]
fn prints_longest_route_with_crlf() -> Result<()> {
    let out = run_with_stdin(b"1,2,1.0\n2,3,1.0\n3,1,1.0\n", &[])?;
    assert!(out.status.success());
    assert_eq!(out.stdout, b"1\r\n2\r\n3\r\n");
    Ok(())
}

#[test]
fn mixed_line_breaks_and_noise() -> Result<()> {
    let input = b"1,2,8.0\r\n garbage line \\r\\n2,3, 0.5\n\n4,5\n5,6,x\n";
    let out = run_with_stdin(input, &[])?;
    assert!(out.status.success());
    assert_eq!(out.stdout, b"1\r\n2\r\n3\r\n");
    Ok(())
}

#[test]
fn empty_or_malformed_input_still_succeeds() -> Result<()> {
    for input in [&b""[..], b"\n\n", b"a,b,c\n1;2;3\n", b"\xff\xfe1,2"] {
        let out = run_with_stdin(input, &[])?;
        assert!(out.status.success());
        assert_eq!(out.stdout, b"\r\n");
        assert!(out.stderr.is_empty());
    }
    Ok(())
}

#[test]
fn show_weight_goes_to_stderr_only() -> Result<()> {
    let out = run_with_stdin(b"1,2,5.0\n", &["--show-weight"])?;
    assert!(out.status.success());
    assert_eq!(out.stdout, b"1\r\n2\r\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("distance: 5"));
    Ok(())
}

#[test]
fn reads_edge_list_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let file = dir.path().join("edges.csv");
    fs::write(&file, "10,11,1\n1,2,5\n2,3,5\n")?;

    let out = Command::new(env!("CARGO_BIN_EXE_longroute"))
        .arg(&file)
        .output()?;
    assert!(out.status.success());
    assert_eq!(out.stdout, b"1\r\n2\r\n3\r\n");
    Ok(())
}

#[test]
fn missing_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let out = Command::new(env!("CARGO_BIN_EXE_longroute"))
        .arg(dir.path().join("nope.csv"))
        .output()?;
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    Ok(())
}
