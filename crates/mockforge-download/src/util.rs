/// Basename of the URL path, when it looks like a real filename (has
/// an extension). Query strings and fragments are ignored.
pub fn filename_from_url(url: &str) -> Option<String> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let path = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);
    let basename = path.rsplit('/').next()?;
    if basename.is_empty() || !basename.contains('.') {
        return None;
    }
    Some(basename.to_string())
}

const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte size, two decimal places.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut index = 0;
    while size >= 1024.0 && index < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        index += 1;
    }
    if index == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.2} {}", SIZE_UNITS[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_extraction() {
        assert_eq!(
            filename_from_url("https://example.com/images/cat.jpg?v=2"),
            Some("cat.jpg".to_string())
        );
        assert_eq!(filename_from_url("https://picsum.photos/640/480"), None);
        assert_eq!(filename_from_url("https://example.com/"), None);
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }
}
