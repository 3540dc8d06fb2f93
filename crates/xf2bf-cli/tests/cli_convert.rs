// crates/xf2bf-cli/tests/cli_convert.rs

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn xf2bf<S: AsRef<OsStr>>(args: &[S]) -> Output {
    run_exit_zero(Command::new(env!("CARGO_BIN_EXE_xf2bf")).args(args))
}

/// Same as `xf2bf`, with relative file names resolved against `cwd`.
fn xf2bf_in<S: AsRef<OsStr>>(cwd: &Path, args: &[S]) -> Output {
    run_exit_zero(Command::new(env!("CARGO_BIN_EXE_xf2bf")).current_dir(cwd).args(args))
}

fn run_exit_zero(cmd: &mut Command) -> Output {
    let out = cmd.env_remove("RUST_LOG").output().expect("spawn xf2bf");
    assert_eq!(
        out.status.code(),
        Some(0),
        "xf2bf must always exit 0\nstderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn no_arguments_prints_notice() {
    let out = xf2bf::<&str>(&[]);
    assert_eq!(stderr(&out), "No filename arguments given.\n");
    assert!(out.stdout.is_empty());
}

#[test]
fn converts_each_file_to_sibling_out() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "0xAB cd 0xgg 1 0x1").unwrap();
    fs::write(&b, "DE\nad\n").unwrap();

    let out = xf2bf(&[&a, &b]);
    assert_eq!(stderr(&out), "");

    assert_eq!(fs::read(dir.path().join("a.txt.out")).unwrap(), [0xAB, 0xCD]);
    assert_eq!(fs::read(dir.path().join("b.txt.out")).unwrap(), [0xDE, 0xAD]);
}

#[test]
fn failures_are_reported_and_do_not_stop_other_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let good = dir.path().join("good.txt");
    fs::write(&good, "01 02").unwrap();

    let out = xf2bf(&[&good, &missing]);
    let err = stderr(&out);

    let expected = format!("File \"{}\" failed with error: ", missing.display());
    assert!(err.starts_with(&expected), "stderr: {err}");
    assert!(err.trim_end().ends_with('!'), "stderr: {err}");
    assert!(!err.contains("os error"), "stderr: {err}");

    assert!(!dir.path().join("missing.txt.out").exists());
    assert_eq!(fs::read(dir.path().join("good.txt.out")).unwrap(), [1, 2]);
}

#[test]
fn files_are_processed_last_argument_first() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    let out = xf2bf(&[&first, &second]);
    let lines: Vec<String> = stderr(&out).lines().map(str::to_owned).collect();

    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[0].contains(&second.display().to_string()));
    assert!(lines[1].contains(&first.display().to_string()));
}

#[test]
fn empty_input_gives_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    xf2bf(&[&input]);
    assert_eq!(fs::read(dir.path().join("empty.txt.out")).unwrap(), Vec::<u8>::new());
}

#[test]
fn hyphen_leading_file_name_is_converted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("-x.txt"), "ab").unwrap();

    let out = xf2bf_in(dir.path(), &["-x.txt"]);
    assert_eq!(stderr(&out), "");
    assert_eq!(fs::read(dir.path().join("-x.txt.out")).unwrap(), [0xAB]);
}

#[test]
fn flags_after_the_first_file_are_file_names() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "01").unwrap();
    fs::write(dir.path().join("-v"), "02").unwrap();
    fs::write(dir.path().join("--help"), "03").unwrap();

    let out = xf2bf_in(dir.path(), &["a.txt", "-v", "--help"]);
    assert_eq!(stderr(&out), "");
    assert!(out.stdout.is_empty());

    assert_eq!(fs::read(dir.path().join("a.txt.out")).unwrap(), [0x01]);
    assert_eq!(fs::read(dir.path().join("-v.out")).unwrap(), [0x02]);
    assert_eq!(fs::read(dir.path().join("--help.out")).unwrap(), [0x03]);
}

#[test]
fn verbose_before_files_still_works() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "0xff").unwrap();

    let out = xf2bf_in(dir.path(), &["-v", "a.txt"]);
    assert!(stderr(&out).contains("a.txt"), "stderr: {}", stderr(&out));
    assert!(!dir.path().join("-v.out").exists());
    assert_eq!(fs::read(dir.path().join("a.txt.out")).unwrap(), [0xFF]);
}
