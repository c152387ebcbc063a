/// Форматирует размер в байтах для логов запросов
///
/// ```text
/// 512      -> "512 B"
/// 1536     -> "1.5 KB"
/// 3145728  -> "3.0 MB"
/// ```
pub fn format_byte_size(n: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = n as f64;
    if value < KB {
        format!("{} B", n)
    } else if value < MB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_byte_size() {
        assert_eq!(format_byte_size(0), "0 B");
        assert_eq!(format_byte_size(1023), "1023 B");
        assert_eq!(format_byte_size(1024), "1.0 KB");
        assert_eq!(format_byte_size(1536), "1.5 KB");
        assert_eq!(format_byte_size(3 * 1024 * 1024), "3.0 MB");
    }
}
