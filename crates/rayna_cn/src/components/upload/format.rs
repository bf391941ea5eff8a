//! Size and timestamp formatting for upload rows

use chrono::NaiveDateTime;

const KIB: f64 = 1024.0;

/// Compact size with one decimal: `512 B`, `1.5 KB`, `2.5 MB`
pub fn format_file_size(bytes: u64) -> String {
    let b = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KB", b / KIB)
    } else {
        format!("{:.1} MB", b / (KIB * KIB))
    }
}

/// Size with up to two decimals and trailing zeros dropped: `1.5 KB`, `2 MB`
pub fn format_file_size_long(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= KIB && unit < UNITS.len() - 1 {
        value /= KIB;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// `Mar 5, 2025 | 3:07 pm`
pub fn format_upload_time(at: NaiveDateTime) -> String {
    at.format("%b %-d, %Y | %-I:%M %P").to_string()
}

/// `05 Mar, 2025 | 15:07`
pub fn format_list_time(at: NaiveDateTime) -> String {
    at.format("%d %b, %Y | %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_compact_sizes() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024 / 2), "2.5 MB");
        assert_eq!(format_file_size(13 * 1024 * 1024), "13.0 MB");
    }

    #[test]
    fn test_long_sizes() {
        assert_eq!(format_file_size_long(0), "0 Bytes");
        assert_eq!(format_file_size_long(1000), "1000 Bytes");
        assert_eq!(format_file_size_long(1024), "1 KB");
        assert_eq!(format_file_size_long(1536), "1.5 KB");
        assert_eq!(format_file_size_long(1_234_567), "1.18 MB");
        assert_eq!(format_file_size_long(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_timestamps() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 5)
            .and_then(|d| d.and_hms_opt(15, 7, 0))
            .unwrap();
        assert_eq!(format_upload_time(at), "Mar 5, 2025 | 3:07 pm");
        assert_eq!(format_list_time(at), "05 Mar, 2025 | 15:07");
    }
}
