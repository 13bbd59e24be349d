//! Disk usage data collection by shelling out to `du`.
//!
//! `du -k -d 1 <target>` prints one `<size>\t<path>` line per immediate child
//! directory, in kibibytes thanks to `-k`, plus a final line for the target
//! itself. Emission order is part of the report, so parsed rows keep it.

use anyhow::{Context, anyhow, bail};
use indexmap::IndexMap;

use crate::command_runner::CommandRunner;

/// The parsed output of one `du` run: per-subdirectory rows in emission
/// order, and the target's own total to divide by.
#[derive(Debug, Clone)]
pub struct DuReport {
    /// `(path, size in KiB)` per immediate subdirectory of the target.
    pub rows: Vec<(String, u64)>,
    /// The target's total size in KiB.
    pub total_kib: u64,
}

impl DuReport {
    /// Returns `kib` as a fraction of the target's total. An all-zero report
    /// reads as 0 rather than dividing by zero.
    #[inline]
    pub fn ratio_of(&self, kib: u64) -> f64 {
        if self.total_kib == 0 {
            0.0
        } else {
            kib as f64 / self.total_kib as f64
        }
    }
}

/// Runs the disk-usage utility one level deep under `target` and returns its
/// raw stdout.
///
/// Unlike the lookup utility, a `du` failure is a real error: the target not
/// existing or not being readable should stop the run with a message, not a
/// stack trace.
pub fn du_output(runner: &mut dyn CommandRunner, target: &str) -> anyhow::Result<String> {
    let output = runner
        .run("du", &["-k", "-d", "1", target])
        .context("unable to invoke `du`")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("`du` failed for '{target}': {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parses `<size>\t<path>` lines into a path-to-KiB mapping that preserves
/// `du`'s emission order.
pub fn parse_du_output(output: &str) -> anyhow::Result<IndexMap<String, u64>> {
    let mut usage = IndexMap::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        let (size, path) = line
            .split_once('\t')
            .ok_or_else(|| anyhow!("malformed `du` line (no tab): {line:?}"))?;
        let size = size
            .parse::<u64>()
            .with_context(|| format!("malformed `du` size in line {line:?}"))?;

        usage.insert(path.to_owned(), size);
    }

    Ok(usage)
}

/// Splits parsed `du` output into subdirectory rows and the total to chart
/// against.
///
/// `du` echoes the target path back as its final, all-inclusive line; that
/// line is the denominator, not a row. If it is absent (some `du` variants
/// can omit it under `-d`), the sum of the rows stands in for it.
pub fn subdir_report(usage: &IndexMap<String, u64>, target: &str) -> DuReport {
    let target = target.trim_end_matches('/');

    let rows: Vec<(String, u64)> = usage
        .iter()
        .filter(|(path, _)| path.trim_end_matches('/') != target)
        .map(|(path, size)| (path.clone(), *size))
        .collect();

    let total_kib = usage
        .iter()
        .find(|(path, _)| path.trim_end_matches('/') == target)
        .map(|(_, size)| *size)
        .unwrap_or_else(|| rows.iter().map(|(_, size)| size).sum());

    DuReport { rows, total_kib }
}
