use std::{
    io::Write as _,
    path::PathBuf,
    process::{Command, Stdio},
};

fn bin_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_bitscarf")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "bitscarf.exe"
            } else {
                "bitscarf"
            });
            p
        })
}

#[test]
fn cli_writes_png_with_computed_dimensions() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let text_path = dir.join("input.txt");
    let out_path = dir.join("out.png");
    let _ = std::fs::remove_file(&out_path);
    std::fs::write(&text_path, "hello world\n").unwrap();

    let status = Command::new(bin_exe())
        .args(["--out"])
        .arg(&out_path)
        .arg(&text_path)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());

    // Defaults: columns 3, spacing 2, stitch 2x3, border 2. Width is
    // (3*7 + 4*2)*2 = 58. "hello world" is 11 chars, rows = ceil(11/3) = 4;
    // top = 18, last row y = 18 + 3*3 = 27, so height = 27 + 3 + 18 = 48.
    let (w, h) = image::image_dimensions(&out_path).unwrap();
    assert_eq!((w, h), (58, 48));
}

#[test]
fn cli_reads_stdin_when_no_file_given() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("stdin.png");
    let _ = std::fs::remove_file(&out_path);

    let mut child = Command::new(bin_exe())
        .args(["--out"])
        .arg(&out_path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"AB").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(out_path.exists());
}

#[test]
fn cli_rejects_whitespace_only_stdin() {
    let mut child = Command::new(bin_exe())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b" \n\t \n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty after filtering"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_bad_color_literal() {
    let mut child = Command::new(bin_exe())
        .args(["--color-a", "0xzz0000"])
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"AB").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("color error:"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_zero_columns_with_usage() {
    let mut child = Command::new(bin_exe())
        .args(["--columns", "0"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"AB").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout: {stdout}");
}

#[test]
fn cli_dump_layout_emits_json() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("dump.png");

    let mut child = Command::new(bin_exe())
        .args(["--dump-layout", "--out"])
        .arg(&out_path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"AB").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let json_start = stderr.find('[').unwrap();
    let json_end = stderr.rfind(']').unwrap();
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&stderr[json_start..=json_end]).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["value"], u64::from(b'A'));
}
