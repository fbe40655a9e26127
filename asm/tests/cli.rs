use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn scratch(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("hackasm-{}-{}", std::process::id(), name));
    path
}

fn run(input: &PathBuf, output: &PathBuf, dump: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hackasm"));
    cmd.arg(input).arg(output);
    if dump {
        cmd.arg("--dump");
    }
    cmd.output().expect("failed to spawn hackasm")
}

#[test]
fn malformed_input_aborts_before_any_output() {
    let input = scratch("bad.asm");
    let output = scratch("bad.hack");
    fs::write(&input, "@2\nD=D+D\n@3\nwat\n").unwrap();

    let result = run(&input, &output, false);
    let stdout = String::from_utf8_lossy(&result.stdout);

    assert!(!result.status.success());
    // every offending line is reported with its location
    assert!(stdout.contains(&format!("{}:2", input.display())));
    assert!(stdout.contains(&format!("{}:4", input.display())));
    assert!(stdout.contains("2 line(s) could not be parsed"));
    // nothing was written for a broken source
    assert!(!output.exists());

    fs::remove_file(&input).ok();
}

#[test]
fn dump_does_not_affect_the_output_file() {
    let input = scratch("sum.asm");
    let plain = scratch("sum-plain.hack");
    let dumped = scratch("sum-dumped.hack");
    fs::write(&input, "@2\nD=A\n(LOOP)\n@LOOP\nD=D+A // note\n@var\nM=D\n").unwrap();

    let first = run(&input, &plain, false);
    let second = run(&input, &dumped, true);
    assert!(first.status.success());
    assert!(second.status.success());

    // the dump table goes to stdout only
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("1110000010010000"));
    assert_eq!(fs::read(&plain).unwrap(), fs::read(&dumped).unwrap());

    fs::remove_file(&input).ok();
    fs::remove_file(&plain).ok();
    fs::remove_file(&dumped).ok();
}
