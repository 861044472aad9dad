// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use double_cola::{Shell, ShellConfig};

/// Run the shell on `input` with the given config and return everything it
/// wrote.
pub fn run_shell_with(config: ShellConfig, input: &str) -> String {
    let shell = Shell::new(config);
    let mut out = Vec::new();
    shell
        .run(input.as_bytes(), &mut out)
        .expect("shell should accept input");
    String::from_utf8(out).expect("shell output is UTF-8")
}

/// Run the shell with the default config.
pub fn run_shell(input: &str) -> String {
    run_shell_with(ShellConfig::default(), input)
}

/// Strip the prompt that precedes whatever the shell prints.
pub fn after_prompt(output: &str) -> &str {
    output
        .strip_prefix(double_cola::queue::PROMPT)
        .expect("output starts with the prompt")
}

/// Sample positions spread over several orders of magnitude.
pub fn sample_positions() -> Vec<u64> {
    let mut positions: Vec<u64> = (0..2_000).collect();
    let mut n = 2_000u64;
    while let Some(next) = n.checked_mul(3) {
        positions.push(next);
        positions.push(next - 1);
        n = next;
    }
    positions.push(u64::MAX);
    positions
}
