use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scical")).args(args)
                                              .output()
                                              .unwrap_or_else(|e| panic!("Failed to run scical: {e}"))
}

fn assert_prints(args: &[&str], expected: &str) {
    let output = run(args);
    assert!(output.status.success(),
            "scical {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected, "scical {args:?}");
}

#[test]
fn expression_argument() {
    assert_prints(&["2 + 3 * 4"], "14.0\n");
    assert_prints(&["foo(1)"], "Error\n");
}

#[test]
fn expression_may_start_with_a_sign() {
    assert_prints(&["-2^2"], "-4.0\n");
    assert_prints(&["-1/0"], "-Infinity\n");
    assert_prints(&["-pi"], "-3.141592653589793\n");
    assert_prints(&["-e"], "-2.718281828459045\n");
    assert_prints(&["+3"], "3.0\n");
}

#[test]
fn flags_still_apply_before_a_signed_expression() {
    assert_prints(&["-v", "-2^2"], "-4.0\n");
    assert_prints(&["--max-depth", "2", "-((1))"], "Error\n");
    assert_prints(&["--max-depth", "2", "-1"], "-1.0\n");
}

#[test]
fn key_sequence() {
    assert_prints(&["--keys", "2 + 3 * 4 ="], "14.0\n");
    assert_prints(&["-k", "1 2 3 DEL"], "12\n");
}

#[test]
fn unknown_key_fails() {
    let output = run(&["--keys", "2 % 3"]);
    assert!(!output.status.success());
}

#[test]
fn expressions_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scical")).stdin(Stdio::piped())
                                                              .stdout(Stdio::piped())
                                                              .spawn()
                                                              .expect("Failed to run scical");
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(b"1+1\n\n-2^2\nfoo\n")
         .expect("Failed to write to scical");

    let output = child.wait_with_output().expect("scical did not finish");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.0\n-4.0\nError\n");
}
