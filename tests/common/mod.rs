#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

pub fn run_goofy(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_goofy"));
    command.args(args);
    command.output().expect("failed to run goofy binary")
}

pub fn run_goofy_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_goofy"));
    command.args(args);
    command.stdin(Stdio::piped());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = command.spawn().expect("failed to spawn goofy binary");
    let mut stdin = child.stdin.take().expect("stdin should be available");
    stdin.write_all(input).expect("stdin write should succeed");
    drop(stdin);
    child
        .wait_with_output()
        .expect("failed to read process output")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr should be utf-8")
}
