//! Summary line

/// `"N directories, M files"`, singular only for a count of exactly one.
pub fn format_summary(directories: usize, files: usize) -> String {
    format!(
        "{} director{}, {} file{}",
        directories,
        if directories == 1 { "y" } else { "ies" },
        files,
        if files == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralization() {
        assert_eq!(format_summary(1, 2), "1 directory, 2 files");
        assert_eq!(format_summary(0, 0), "0 directories, 0 files");
        assert_eq!(format_summary(2, 1), "2 directories, 1 file");
        assert_eq!(format_summary(1, 1), "1 directory, 1 file");
    }
}
