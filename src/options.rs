// Argument parsing via clap.
//
// Note that this file is `include!`d by the build script, so it must stay
// self-contained: no `crate::` paths, and no `//!` inner docs (they are
// illegal at the inclusion point).

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const MEMBAR_USAGE: &str = "membar [OPTIONS] [PROGRAM]";
const DUBAR_USAGE: &str = "dubar [OPTIONS] <TARGET>";

/// The arguments for `membar`.
#[derive(Parser, Debug)]
#[command(
    name = "membar",
    version = crate_version!(),
    author = crate_authors!(),
    about = "Memory Visualiser -- see memory usage as a bar chart.",
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = MEMBAR_USAGE,
)]
pub struct MembarArgs {
    #[arg(
        short = 'l',
        long,
        value_name = "N",
        default_value_t = 20,
        value_parser = value_parser!(u32).range(1..),
        help = "Length of the bar graph. Defaults to 20."
    )]
    pub length: u32,

    #[arg(
        short = 'H',
        long,
        help = "Prints sizes in a human readable format (KiB, MiB, ...)."
    )]
    pub human_readable: bool,

    #[arg(
        value_name = "PROGRAM",
        help = "Show memory use of every process of this program. Shows total system use if omitted."
    )]
    pub program: Option<String>,
}

/// The arguments for `dubar`.
#[derive(Parser, Debug)]
#[command(
    name = "dubar",
    version = crate_version!(),
    author = crate_authors!(),
    about = "DU Improved -- see disk usage per subdirectory as a bar chart.",
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = DUBAR_USAGE,
)]
pub struct DubarArgs {
    #[arg(
        short = 'l',
        long,
        value_name = "N",
        default_value_t = 20,
        value_parser = value_parser!(u32).range(1..),
        help = "Length of the bar graph. Defaults to 20."
    )]
    pub length: u32,

    #[arg(
        short = 'H',
        long,
        help = "Prints sizes in a human readable format (KiB, MiB, ...)."
    )]
    pub human_readable: bool,

    #[arg(value_name = "TARGET", help = "The target directory to report on.")]
    pub target: String,
}
