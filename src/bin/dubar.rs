//! `dubar` — reports per-subdirectory disk usage as a bar chart.

#![warn(rust_2018_idioms)]

use clap::Parser;
use usage_bars::{
    canvas::{Rounding, disk_row, percent_to_bar},
    collection::disks,
    command_runner::RealCommandRunner,
    options::DubarArgs,
    utils::data_units::kib_to_human,
};

fn main() -> anyhow::Result<()> {
    let args = DubarArgs::parse();

    #[cfg(all(feature = "logging", debug_assertions))]
    usage_bars::utils::logging::init_logger(
        log::LevelFilter::Debug,
        std::ffi::OsStr::new("debug.log"),
    )?;

    let width = args.length as usize;
    let mut runner = RealCommandRunner;

    let output = disks::du_output(&mut runner, &args.target)?;
    let usage = disks::parse_du_output(&output)?;
    let report = disks::subdir_report(&usage, &args.target);

    for (path, size_kib) in &report.rows {
        let ratio = report.ratio_of(*size_kib);
        let bar = percent_to_bar(ratio, width, Rounding::Nearest);
        let size = if args.human_readable {
            kib_to_human(*size_kib, 2)
        } else {
            format!("{size_kib} KiB")
        };

        println!("{}", disk_row(path, &bar, &size));
    }

    Ok(())
}
