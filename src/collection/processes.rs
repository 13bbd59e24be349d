//! Per-process memory data collection via `pidof` and `/proc/<PID>/smaps`.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::PathBuf,
};

use anyhow::Context;

use crate::{Pid, command_runner::CommandRunner};

/// Looks up every PID of the named program through the process-lookup
/// utility.
///
/// Any failure here (the utility is missing, exits non-zero, prints nothing,
/// or prints something that is not a PID) collapses to an empty list; the
/// caller reports "no PIDs found" rather than an error, since an unknown
/// program name and a lookup failure are indistinguishable to the user.
pub fn pids_of_program(runner: &mut dyn CommandRunner, name: &str) -> Vec<Pid> {
    let Ok(output) = runner.run("pidof", &[name]) else {
        return Vec::new();
    };

    if !output.status.success() {
        return Vec::new();
    }

    // The utility prints nothing but whitespace-separated PIDs; anything
    // else means its output can't be trusted, so the whole lookup is
    // treated as a failure rather than a partial result.
    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .map(|token| token.parse::<Pid>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

/// Sums the `Rss:` fields of an smaps-style stream, in kB. A process maps
/// many regions; its resident set size is the total across all of them.
pub fn parse_smaps_rss<R: BufRead>(mut reader: R) -> anyhow::Result<u64> {
    let mut rss_total = 0;
    let mut buffer = String::new();

    while let Ok(bytes) = reader.read_line(&mut buffer) {
        if bytes == 0 {
            break;
        }

        let mut parts = buffer.split_whitespace();
        if let (Some("Rss:"), Some(value)) = (parts.next(), parts.next()) {
            rss_total += value.parse::<u64>()?;
        }

        buffer.clear();
    }

    Ok(rss_total)
}

/// Returns the resident set size of `pid` in kB, summed over every mapped
/// region in `/proc/<PID>/smaps`.
///
/// PIDs can disappear between lookup and read; a missing smaps file is that
/// benign race, not an error, and reads as 0.
pub fn rss_of_pid(pid: Pid) -> anyhow::Result<u64> {
    let path: PathBuf = ["/proc", &pid.to_string(), "smaps"].iter().collect();

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err).with_context(|| format!("unable to open {}", path.display())),
    };

    parse_smaps_rss(BufReader::new(file))
        .with_context(|| format!("unable to parse {}", path.display()))
}
