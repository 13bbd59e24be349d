//! Bar rendering and report-line formatting.

/// How a fractional fill count maps onto whole bar characters.
///
/// The two tools have never agreed on this: the memory report truncates while
/// the disk report rounds to nearest. Whether that divergence was ever
/// deliberate is an open question, so it is an explicit parameter here rather
/// than something one caller silently inherits from the other.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Rounding {
    /// Truncate, i.e. `filled = floor(ratio * width)`.
    Floor,
    /// Round half away from zero, i.e. `filled = round(ratio * width)`.
    Nearest,
}

/// Turns a ratio in `[0, 1]` into a bar of exactly `width` characters, `#`
/// for filled and space for the rest.
///
/// Out-of-range ratios are clamped rather than left to overflow the bar; the
/// result is always exactly `width` characters long.
pub fn percent_to_bar(ratio: f64, width: usize, rounding: Rounding) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let scaled = ratio * width as f64;

    let filled = match rounding {
        Rounding::Floor => scaled.floor(),
        Rounding::Nearest => scaled.round(),
    } as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width);
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..width {
        bar.push(' ');
    }

    bar
}

/// Formats one memory report row: a left-padded label, the bar, the rounded
/// percentage, and the used/total amounts.
pub fn memory_row(label: &str, bar: &str, ratio: f64, used: &str, total: &str) -> String {
    format!("{label:<15} [{bar} | {:.0}%] {used}/{total}", ratio * 100.0)
}

/// Formats one disk report row: the directory, its bar, and its size.
pub fn disk_row(path: &str, bar: &str, size: &str) -> String {
    format!("{path}: {bar} ({size})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_always_exactly_width_chars() {
        for width in 1..64 {
            for tenths in 0..=10 {
                let ratio = f64::from(tenths) / 10.0;
                for rounding in [Rounding::Floor, Rounding::Nearest] {
                    let bar = percent_to_bar(ratio, width, rounding);
                    assert_eq!(bar.len(), width);
                    assert!(bar.chars().all(|c| c == '#' || c == ' '));
                }
            }
        }
    }

    #[test]
    fn floor_truncates_the_fill() {
        // 0.6 * 20 = 12 exactly.
        assert_eq!(
            percent_to_bar(0.6, 20, Rounding::Floor),
            "############        "
        );
        // 0.7 * 5 = 3.5 truncates to 3.
        assert_eq!(percent_to_bar(0.7, 5, Rounding::Floor), "###  ");
    }

    #[test]
    fn nearest_rounds_the_fill() {
        // 0.7 * 5 = 3.5 rounds up to 4, where floor gives 3.
        assert_eq!(percent_to_bar(0.7, 5, Rounding::Nearest), "#### ");
        // 0.25 * 4 = 1 and 0.75 * 4 = 3.
        assert_eq!(percent_to_bar(0.25, 4, Rounding::Nearest), "#   ");
        assert_eq!(percent_to_bar(0.75, 4, Rounding::Nearest), "### ");
    }

    #[test]
    fn out_of_range_ratios_are_clamped() {
        assert_eq!(percent_to_bar(1.5, 4, Rounding::Floor), "####");
        assert_eq!(percent_to_bar(-0.5, 4, Rounding::Nearest), "    ");
        assert_eq!(percent_to_bar(f64::NAN, 4, Rounding::Floor), "    ");
    }

    #[test]
    fn empty_and_full_bars() {
        assert_eq!(percent_to_bar(0.0, 8, Rounding::Nearest), "        ");
        assert_eq!(percent_to_bar(1.0, 8, Rounding::Floor), "########");
    }

    #[test]
    fn memory_row_layout() {
        let bar = percent_to_bar(0.6, 20, Rounding::Floor);
        assert_eq!(
            memory_row("Memory", &bar, 0.6, "600 kB", "1000 kB"),
            "Memory          [############         | 60%] 600 kB/1000 kB"
        );
    }

    #[test]
    fn disk_row_layout() {
        assert_eq!(disk_row("/x/a", "#   ", "100 KiB"), "/x/a: #    (100 KiB)");
    }
}
