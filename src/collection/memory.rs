//! Memory data collection from `/proc/meminfo`.
//!
//! The pseudo-file is one `Key:  value unit` pair per line, values in kB. We
//! only care about `MemTotal` and `MemAvailable`; everything else is skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::NonZeroU64,
};

use anyhow::{Context, anyhow};

const PROC_MEMINFO: &str = "/proc/meminfo";

/// A snapshot of system memory usage, in kibibytes.
///
/// The total is a [`NonZeroU64`] so a used/total ratio can never divide by
/// zero; a meminfo with a missing or zero `MemTotal` fails at construction
/// instead.
#[derive(Debug, Clone)]
pub struct MemReading {
    used_kib: u64,
    total_kib: NonZeroU64,
}

impl MemReading {
    /// Builds a reading from raw total/available figures. Returns [`None`] if
    /// the total is zero.
    pub fn from_parts(total_kib: u64, avail_kib: u64) -> Option<MemReading> {
        NonZeroU64::new(total_kib).map(|total_kib| MemReading {
            used_kib: total_kib.get().saturating_sub(avail_kib),
            total_kib,
        })
    }

    #[inline]
    pub fn used_kib(&self) -> u64 {
        self.used_kib
    }

    #[inline]
    pub fn total_kib(&self) -> u64 {
        self.total_kib.get()
    }

    /// Returns the used fraction, in `[0, 1]`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio_of(self.used_kib)
    }

    /// Returns `kib` as a fraction of total memory.
    #[inline]
    pub fn ratio_of(&self, kib: u64) -> f64 {
        kib as f64 / self.total_kib.get() as f64
    }
}

/// Scans a meminfo-style stream for `MemTotal` and `MemAvailable`, returning
/// the two values in kB. A missing key yields 0 for that field.
pub fn parse_meminfo<R: BufRead>(mut reader: R) -> anyhow::Result<(u64, u64)> {
    enum Fields {
        Total,
        Available,
    }

    let mut total_kib = 0;
    let mut avail_kib = 0;
    let mut buffer = String::new();

    // This saves us from doing a string allocation on each iteration compared
    // to `lines()`.
    while let Ok(bytes) = reader.read_line(&mut buffer) {
        if bytes == 0 {
            break;
        }

        let mut parts = buffer.split_whitespace();
        if let Some(field) = parts.next() {
            let curr_field = match field {
                "MemTotal:" => Fields::Total,
                "MemAvailable:" => Fields::Available,
                _ => {
                    buffer.clear();
                    continue;
                }
            };

            let value = parts
                .next()
                .ok_or_else(|| anyhow!("missing value for {field}"))?
                .parse::<u64>()?;

            match curr_field {
                Fields::Total => total_kib = value,
                Fields::Available => avail_kib = value,
            }
        }

        buffer.clear();
    }

    Ok((total_kib, avail_kib))
}

/// Reads a fresh [`MemReading`] from `/proc/meminfo`.
pub fn sys_mem_reading() -> anyhow::Result<MemReading> {
    let file = File::open(PROC_MEMINFO).with_context(|| format!("unable to open {PROC_MEMINFO}"))?;
    let (total_kib, avail_kib) = parse_meminfo(BufReader::new(file))
        .with_context(|| format!("unable to parse {PROC_MEMINFO}"))?;

    MemReading::from_parts(total_kib, avail_kib)
        .ok_or_else(|| anyhow!("MemTotal is missing or zero in {PROC_MEMINFO}"))
}
