//! Subprocess seam for external command invocation
//!
//! The client talks to `pactl` through this trait so tests can script
//! command results instead of spawning processes.

use std::process::{Command, Output};

/// Trait for running external commands (enables testing with scripted
/// outputs). This is public so integration tests can implement fakes.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<Output>;
}

/// Default runner that spawns the real command and captures its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<Output> {
        Command::new(program).args(args).output()
    }
}
