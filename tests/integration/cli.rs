// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::{dog_cmd, fixture_dir};

use simple_test_case::test_case;

#[test_case(&["bark"], "Woof!\n"; "bark")]
#[test_case(&["sit"], "The dog is sitting.\n"; "sit")]
#[test_case(&["bark", "-t", "2"], "Woof!\nWoof!\n"; "bark twice")]
#[test_case(&["do", "bark", "sit"], "Woof!\nThe dog is sitting.\n"; "sequence")]
#[test]
fn dog_stdout_is_exact(args: &[&str], expect: &str) {
    dog_cmd().args(args).assert().success().stdout(expect.to_string());
}

#[test]
fn dog_times_from_env() {
    dog_cmd().env("DOG_TIMES", "2").arg("sit").assert().success().stdout(
        "The dog is sitting.\nThe dog is sitting.\n",
    );
}

#[test]
fn dog_times_from_config_file() {
    let path = fixture_dir("config_file").join("dog.toml");
    std::fs::write(&path, "times = 3\n").unwrap();
    dog_cmd()
        .arg("--config")
        .arg(&path)
        .arg("bark")
        .assert()
        .success()
        .stdout("Woof!\nWoof!\nWoof!\n");
}

#[test]
fn dog_missing_config_file_is_config_error() {
    let path = fixture_dir("missing_config").join("nope.toml");
    dog_cmd()
        .arg("--config")
        .arg(&path)
        .arg("bark")
        .assert()
        .code(exitcode::CONFIG)
        .stdout("");
}

#[test]
fn dog_zero_times_is_config_error() {
    dog_cmd().args(["sit", "--times", "0"]).assert().code(exitcode::CONFIG).stdout("");
}

#[test]
fn dog_unknown_command_fails() {
    dog_cmd().arg("roll-over").assert().failure().stdout("");
}
