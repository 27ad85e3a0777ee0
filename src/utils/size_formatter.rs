const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Format a byte count for display.
///
/// Zero means "no limit" for Redis `maxmemory`, hence `"unlimited"`. Larger
/// values are divided step by step as floats and printed without rounding, so
/// `1536` becomes `"1.5 KB"` and `1048576` becomes `"1 MB"`.
///
/// # Examples
///
/// ```
/// use rediboard::utils::human_size;
///
/// assert_eq!(human_size(0), "unlimited");
/// assert_eq!(human_size(512), "512 B");
/// assert_eq!(human_size(1536), "1.5 KB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let n = bytes as f64;
    if bytes == 0 {
        "unlimited".to_string()
    } else if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{} KB", n / 1024.0)
    } else if bytes < GB {
        format!("{} MB", n / 1024.0 / 1024.0)
    } else {
        format!("{} GB", n / 1024.0 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(MB - 1), "1023.9990234375 KB");
        assert_eq!(human_size(MB), "1 MB");
        assert_eq!(human_size(GB), "1 GB");
    }

    #[test]
    fn test_is_idempotent() {
        assert_eq!(human_size(123_456_789), human_size(123_456_789));
    }
}
