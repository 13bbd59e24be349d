//! An injectable wrapper around external command invocation.
//!
//! Both tools shell out exactly once per run (`pidof` for `membar`, `du` for
//! `dubar`). Routing those calls through a trait keeps the collectors testable
//! without a live process table or file system.

use std::process::{Command, Output};

pub trait CommandRunner {
    fn run(&mut self, cmd_name: &str, args: &[&str]) -> std::io::Result<Output>;
}

/// Runs commands for real via [`std::process::Command`], capturing output.
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&mut self, cmd_name: &str, args: &[&str]) -> std::io::Result<Output> {
        Command::new(cmd_name).args(args).output()
    }
}
