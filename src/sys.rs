// src/sys.rs

//! Process introspection helpers.

/// Virtual memory size of the current process, in bytes.
///
/// Reads `/proc/self/stat`, so this only answers on Linux; other
/// platforms, and any read or parse problem, yield `None`.
#[cfg(target_os = "linux")]
pub fn memory_usage_bytes() -> Option<u64> {
    let stat = std::fs::read_to_string("/proc/self/stat").ok()?;
    parse_vsize(&stat)
}

/// Virtual memory size of the current process, in bytes.
///
/// Only implemented on Linux; always `None` here.
#[cfg(not(target_os = "linux"))]
pub fn memory_usage_bytes() -> Option<u64> {
    None
}

/// Extract the vsize field (field 23) from a `/proc/<pid>/stat` line.
///
/// The comm field may contain spaces and parentheses, so fields are
/// counted from the last closing paren.
#[cfg(target_os = "linux")]
fn parse_vsize(stat: &str) -> Option<u64> {
    let rest = stat.rsplit_once(')')?.1;
    // field 3 (state) is the first one after the comm; vsize is field 23
    rest.split_whitespace().nth(20)?.parse().ok()
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn parses_a_stat_line_with_spaces_in_comm() {
        let stat = "1234 (my (weird) proc) S 1 1234 1234 0 -1 4194304 \
                    100 0 0 0 2 1 0 0 20 0 1 0 12345 987654321 150 \
                    18446744073709551615 1 1 0 0 0 0 0 0 0 0 0 0 17 1 0 0 0 0 0";
        assert_eq!(parse_vsize(stat), Some(987_654_321));
    }

    #[test]
    fn own_memory_usage_is_nonzero() {
        let vsize = memory_usage_bytes().expect("stat should parse on linux");
        assert!(vsize > 0);
    }
}
