use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output},
};
use tempfile::{NamedTempFile, TempDir};

/// latch 4 (reset 0) takes `4 ^ 2` with input 2, bad is the latch
const TOGGLE: &str = "aag 5 1 1 0 3 1\n2\n4 10\n4\n6 4 2\n8 5 3\n10 7 9\n";

/// latch 2 keeps its reset value 0, bad is the latch
const STUCK: &str = "aag 1 0 1 0 0 1\n2 2\n2\n";

fn model(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn rbmc(args: &[&str], model: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rbmc"))
        .args(args)
        .arg(model)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// frames of the `<k> <seconds>` lines
fn progress(out: &Output) -> Vec<usize> {
    stdout(out)
        .lines()
        .filter_map(|l| {
            let (k, time) = l.split_once(' ')?;
            time.parse::<f64>().ok()?;
            k.parse().ok()
        })
        .collect()
}

#[test]
fn violation_reports_sat() {
    let m = model(TOGGLE);
    let out = rbmc(&[], m.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(progress(&out), vec![0, 1]);
    assert_eq!(stdout(&out).lines().last(), Some("c SAT"));
}

#[test]
fn certified_witness_file() {
    let m = model(TOGGLE);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("toggle.cex");
    let out = Command::new(env!("CARGO_BIN_EXE_rbmc"))
        .arg("--certify")
        .arg("10")
        .arg(m.path())
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("c SAT\n"));
    assert!(text.contains(&format!("c Witness written to {}\n", path.display())));
    assert!(stderr(&out).contains("witness certified"));
    let witness = fs::read_to_string(&path).unwrap();
    assert!(witness.starts_with("1\nb0\n0\n1\n"));
    assert!(witness.ends_with("\n.\n"));
    assert_eq!(witness.lines().count(), 6);
}

#[test]
fn bound_exhausted() {
    let m = model(STUCK);
    let out = rbmc(&["3"], m.path());
    assert_eq!(out.status.code(), Some(124));
    assert_eq!(progress(&out), vec![0, 1, 2]);
    assert_eq!(stdout(&out).lines().last(), Some("c reached max bound 3"));
}

#[test]
fn quiet_without_progress() {
    let m = model(STUCK);
    let out = rbmc(&["-v", "0", "2"], m.path());
    assert_eq!(out.status.code(), Some(124));
    assert_eq!(stdout(&out), "c reached max bound 2\n");
}

#[test]
fn unknown_solver_option() {
    let m = model(TOGGLE);
    let out = rbmc(&["-S", "elim=0"], m.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("cannot parse option: elim=0"));
    assert!(!stdout(&out).contains("c SAT"));
}

#[test]
fn usage_errors_exit_one() {
    let m = model(TOGGLE);
    let out = rbmc(&["--elim=0"], m.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--elim"));
    let out = Command::new(env!("CARGO_BIN_EXE_rbmc")).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let out = Command::new(env!("CARGO_BIN_EXE_rbmc"))
        .arg("--version")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).starts_with("rbmc "));
}

#[test]
fn unreadable_models_exit_one() {
    let dir = TempDir::new().unwrap();
    let out = rbmc(&[], &dir.path().join("missing.aag"));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("missing.aag"));
    // undefined literal 4
    let m = model("aag 1 1 0 1 0\n2\n4\n");
    assert_eq!(rbmc(&[], m.path()).status.code(), Some(1));
    let m = model("aag 2 1 0 1 0\n2\n2\n");
    let out = rbmc(&[], m.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("exceeds I + L + A"));
}

#[test]
fn diagnose_warnings() {
    // two bads, the second one is the input
    let m = model("aag 1 1 0 0 0 2\n2\n0\n2\n");
    let out = rbmc(&["2"], m.path());
    assert!(stderr(&out).contains("multiple properties, using bad0"));
    assert_eq!(out.status.code(), Some(124));
    let m = model("aag 1 1 0 0 0 0 0 1\n2\n1\n2\n");
    let out = rbmc(&["2"], m.path());
    assert!(stderr(&out).contains("justice and fairness are not supported"));
    assert_eq!(out.status.code(), Some(124));
}
