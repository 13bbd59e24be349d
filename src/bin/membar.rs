//! `membar` — reports system or per-process memory usage as a bar chart.

#![warn(rust_2018_idioms)]

use clap::Parser;
use usage_bars::{
    canvas::{Rounding, memory_row, percent_to_bar},
    collection::{memory, processes},
    command_runner::RealCommandRunner,
    options::MembarArgs,
    utils::data_units::kib_to_human,
};

/// Formats a kB amount either raw or humanized, per the `-H` flag.
fn format_kib(kib: u64, human_readable: bool) -> String {
    if human_readable {
        kib_to_human(kib, 2)
    } else {
        format!("{kib} kB")
    }
}

fn main() -> anyhow::Result<()> {
    let args = MembarArgs::parse();

    #[cfg(all(feature = "logging", debug_assertions))]
    usage_bars::utils::logging::init_logger(
        log::LevelFilter::Debug,
        std::ffi::OsStr::new("debug.log"),
    )?;

    let width = args.length as usize;
    let reading = memory::sys_mem_reading()?;

    match &args.program {
        None => {
            let bar = percent_to_bar(reading.ratio(), width, Rounding::Floor);
            let used = format_kib(reading.used_kib(), args.human_readable);
            let total = format_kib(reading.total_kib(), args.human_readable);

            println!("{}", memory_row("Memory", &bar, reading.ratio(), &used, &total));
        }
        Some(program) => {
            let mut runner = RealCommandRunner;
            let pids = processes::pids_of_program(&mut runner, program);

            if pids.is_empty() {
                println!("No PIDs found for program '{program}'");
                return Ok(());
            }

            // Total memory does not change between rows; read it once and
            // reuse it for every PID.
            let total = format_kib(reading.total_kib(), args.human_readable);

            for pid in pids {
                let rss_kib = processes::rss_of_pid(pid)?;
                let ratio = reading.ratio_of(rss_kib);
                let bar = percent_to_bar(ratio, width, Rounding::Floor);
                let rss = format_kib(rss_kib, args.human_readable);

                println!("{}", memory_row(&pid.to_string(), &bar, ratio, &rss, &total));
            }
        }
    }

    Ok(())
}
