//! Shared library for the `membar` and `dubar` binaries.
//!
//! Both tools follow the same three stages: resolve arguments into a config,
//! collect raw numbers (from `/proc` or an external command), and format a
//! bar-chart report line per subject. Everything except the actual file reads
//! and subprocess invocations is a pure transform, and lives here so it can
//! be tested without a live system.

#![warn(rust_2018_idioms)]

pub mod canvas;
pub mod collection;
pub mod command_runner;
pub mod options;
pub mod utils {
    pub mod data_units;
    pub mod logging;
}

/// A process ID, as read from the process-lookup utility or `/proc`.
pub type Pid = u32;
