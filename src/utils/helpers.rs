use chrono::Local;

/// Timestamp slug used in generated artifact file names (e.g. "20260823_141502")
pub fn timestamp_slug() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Appends `.extension` to `name` unless it already ends with it
pub fn ensure_extension(name: &str, extension: &str) -> String {
    let suffix = format!(".{}", extension);
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_appended_only_when_missing() {
        assert_eq!(ensure_extension("notes", "txt"), "notes.txt");
        assert_eq!(ensure_extension("notes.txt", "txt"), "notes.txt");
        assert_eq!(ensure_extension("archive.tar", "gz"), "archive.tar.gz");
    }

    #[test]
    fn slug_is_fixed_width_and_sortable() {
        let slug = timestamp_slug();
        assert_eq!(slug.len(), 15);
        assert_eq!(slug.as_bytes()[8], b'_');
        assert!(slug.chars().all(|c| c.is_ascii_digit() || c == '_'));
    }
}
