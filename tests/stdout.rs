// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Exact standard output of [`Dog::bark`] and [`Dog::sit`].
//!
//! Standard output cannot be captured in-process, and the default test harness adds its own
//! lines to it. So this target runs without a harness: it re-executes itself once per scenario,
//! and checks the bytes the child writes.

use dog::model::Dog;

use assert_cmd::Command;

const SCENARIO_ENV: &str = "DOG_STDOUT_SCENARIO";

/// Scenario name, what the child does, and the exact bytes it must write.
const SCENARIOS: &[(&str, fn(), &str)] = &[
    ("bark", bark as fn(), "Woof!\n"),
    ("sit", sit as fn(), "The dog is sitting.\n"),
    ("bark_twice", bark_twice as fn(), "Woof!\nWoof!\n"),
    ("two_dogs", two_dogs as fn(), "Woof!\nThe dog is sitting.\nWoof!\n"),
    ("construct_only", construct_only as fn(), ""),
];

fn bark() {
    Dog::new().bark();
}

fn sit() {
    Dog::new().sit();
}

fn bark_twice() {
    let fido = Dog::new();
    fido.bark();
    fido.bark();
}

fn two_dogs() {
    let fido = Dog::new();
    let rex = Dog::new();
    fido.bark();
    rex.sit();
    fido.bark();
}

fn construct_only() {
    let _ = Dog::new();
}

fn main() {
    if let Ok(name) = std::env::var(SCENARIO_ENV) {
        let (_, run, _) = SCENARIOS
            .iter()
            .find(|(scenario, _, _)| *scenario == name)
            .unwrap_or_else(|| panic!("Unknown scenario {name:?}"));
        run();
        return;
    }

    let exe = std::env::current_exe().unwrap();
    for (name, _, expect) in SCENARIOS {
        eprintln!("stdout scenario {name}");
        Command::new(&exe)
            .env(SCENARIO_ENV, name)
            .assert()
            .success()
            .stdout(*expect);
    }
}
