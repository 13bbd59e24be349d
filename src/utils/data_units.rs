//! Binary (1024-based) unit conversion for report amounts.

pub const KIBI_LIMIT: u64 = 1024;
pub const KIBI_LIMIT_F64: f64 = 1024.0;

/// The binary suffix table. Sources report kibibytes, so it starts at KiB.
const SUFFIXES: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

/// Turns a kibibyte count into a human-readable string, e.g. `1048576` into
/// `1024.00 MiB`.
///
/// Promotion to the next unit happens only while the running value is
/// *strictly greater* than 1024, so exactly 1024 KiB stays `1024.00 KiB`
/// rather than becoming `1.00 MiB`. That boundary is long-standing observable
/// behavior and is kept as is. The suffix index stops at PiB no matter how
/// large the input is.
pub fn kib_to_human(kib: u64, decimal_places: usize) -> String {
    let mut value = kib as f64;
    let mut index = 0;

    while value > KIBI_LIMIT_F64 && index < SUFFIXES.len() - 1 {
        value /= KIBI_LIMIT_F64;
        index += 1;
    }

    format!("{value:.decimal_places$} {}", SUFFIXES[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_stay_in_kib() {
        assert_eq!(kib_to_human(0, 2), "0.00 KiB");
        assert_eq!(kib_to_human(500, 2), "500.00 KiB");
    }

    #[test]
    fn exactly_1024_is_not_promoted() {
        assert_eq!(kib_to_human(1024, 2), "1024.00 KiB");
    }

    #[test]
    fn just_past_the_boundary_is_promoted() {
        assert_eq!(kib_to_human(1025, 2), "1.00 MiB");
    }

    #[test]
    fn promotes_per_1024_step() {
        assert_eq!(kib_to_human(2048, 2), "2.00 MiB");
        assert_eq!(kib_to_human(3 * 1024 * 1024, 2), "3.00 GiB");
        assert_eq!(kib_to_human(1024 * 1024 * 1024 * 1024, 2), "1024.00 TiB");
    }

    #[test]
    fn suffixes_stop_at_pib() {
        // 1024^5 KiB: five divisions would walk off the table; the index
        // stops at PiB and the value keeps growing instead.
        assert_eq!(
            kib_to_human(1024 * 1024 * 1024 * 1024 * 1024, 2),
            "1024.00 PiB"
        );
    }

    #[test]
    fn respects_decimal_places() {
        assert_eq!(kib_to_human(1536, 1), "1.5 MiB");
        assert_eq!(kib_to_human(500, 0), "500 KiB");
    }
}
