//! Fixed discretization tables and their human-readable formatters.
//!
//! Parameters select into these tables by index rather than by raw value.
//! That keeps input controls and persisted state compact, and restricts
//! quantities to tiers the pricing engine supports. All tables are
//! monotonically increasing.

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

const K: u64 = 1000;
const M: u64 = 1000 * K;
const B: u64 = 1000 * M;

/// Storage size choices, in bytes.
pub const STORAGE_VALUES: &[u64] = &[
    100 * KB,
    MB,
    10 * MB,
    100 * MB,
    GB,
    10 * GB,
    100 * GB,
];

/// Executed instruction count choices.
pub const INSTRUCTION_VALUES: &[u64] = &[0, 100 * K, 500 * K, M, 10 * M, 100 * M, B, 10 * B, 100 * B];

/// Message payload size choices, in bytes.
pub const NETWORK_VALUES: &[u64] = &[0, 256, 512, KB, 10 * KB, 100 * KB, MB, 2 * MB];

/// Compute allocation choices, in percent of an execution core.
pub const PERCENT_VALUES: &[u64] = &[0, 1, 5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Repeat frequency choices as repetitions per day; 0 means "once".
pub const REPEAT: &[(f64, &str)] = &[
    (0.0, "Once"),
    (1.0 / 30.0, "Every month"),
    (1.0 / 7.0, "Every week"),
    (1.0, "Every day"),
    (24.0, "Every hour"),
    (24.0 * 60.0, "Every minute"),
];

/// The repeat table without its labels.
pub fn repeat_values() -> Vec<f64> {
    REPEAT.iter().map(|&(value, _)| value).collect()
}

/// Resolve a table entry by index, clamping to the last tier.
///
/// An out-of-range index is a programming error (parameter setters are bound
/// to the tables), so this asserts in debug builds and clamps in release.
pub fn pick<T: Copy>(table: &[T], index: usize) -> T {
    debug_assert!(index < table.len(), "index {} out of range", index);
    table[index.min(table.len() - 1)]
}

pub fn bytes_to_string(bytes: u64) -> String {
    if bytes >= GB {
        format!("{} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{}", bytes)
    }
}

pub fn count_to_string(value: u64) -> String {
    if value >= B {
        format!("{} B", value / B)
    } else if value >= M {
        format!("{} M", value / M)
    } else if value >= K {
        format!("{} K", value / K)
    } else {
        format!("{}", value)
    }
}

pub fn percent_to_string(percent: u64) -> String {
    format!("{}%", percent)
}

pub fn repeat_to_string(value: f64) -> String {
    REPEAT
        .iter()
        .find(|&&(v, _)| v == value)
        .map(|&(_, label)| label.to_string())
        .unwrap_or_else(|| "Once".to_string())
}

/// Choice lists for range fields.
pub fn storage_choices() -> Vec<String> {
    STORAGE_VALUES.iter().copied().map(bytes_to_string).collect()
}

pub fn instruction_choices() -> Vec<String> {
    INSTRUCTION_VALUES
        .iter()
        .copied()
        .map(count_to_string)
        .collect()
}

pub fn network_choices() -> Vec<String> {
    NETWORK_VALUES.iter().copied().map(bytes_to_string).collect()
}

pub fn percent_choices() -> Vec<String> {
    PERCENT_VALUES
        .iter()
        .copied()
        .map(percent_to_string)
        .collect()
}

pub fn repeat_choices() -> Vec<String> {
    REPEAT.iter().map(|&(_, label)| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_monotone() {
        for table in [STORAGE_VALUES, INSTRUCTION_VALUES, NETWORK_VALUES, PERCENT_VALUES] {
            for pair in table.windows(2) {
                assert!(pair[0] < pair[1], "table not monotone: {:?}", table);
            }
        }
        for pair in repeat_values().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_bytes_to_string() {
        assert_eq!(bytes_to_string(100), "100");
        assert_eq!(bytes_to_string(100 * 1024), "100 KB");
        assert_eq!(bytes_to_string(10 * 1024 * 1024), "10 MB");
        assert_eq!(bytes_to_string(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn test_count_to_string() {
        assert_eq!(count_to_string(500), "500");
        assert_eq!(count_to_string(100_000), "100 K");
        assert_eq!(count_to_string(10_000_000), "10 M");
        assert_eq!(count_to_string(1_000_000_000), "1 B");
    }

    #[test]
    fn test_repeat_to_string() {
        assert_eq!(repeat_to_string(0.0), "Once");
        assert_eq!(repeat_to_string(1.0), "Every day");
        assert_eq!(repeat_to_string(24.0), "Every hour");
        assert_eq!(repeat_to_string(0.123), "Once");
    }

    #[test]
    fn test_pick_clamps() {
        assert_eq!(pick(PERCENT_VALUES, 2), 5);
        // Release behavior: out of range clamps to the last tier.
        #[cfg(not(debug_assertions))]
        assert_eq!(pick(PERCENT_VALUES, 999), 100);
    }
}
