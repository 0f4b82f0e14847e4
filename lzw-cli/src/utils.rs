//! Presentation helpers for the CLI's one-line summaries.

use std::time::Duration;

/// Format a byte count in human-readable form.
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.1} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{size} B")
    }
}

/// Format the space saved by compression as a percentage.
pub fn format_ratio(original: u64, compressed: u64) -> String {
    if original == 0 {
        return "-".to_string();
    }
    format!(
        "{:.1}%",
        (1.0 - compressed as f64 / original as f64) * 100.0
    )
}

/// Format an elapsed duration in milliseconds with three decimal places.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:.3}s", elapsed.as_secs_f64())
}

/// Derive a default output path for `compress`: append `.lzw`.
pub fn default_compressed_path(input: &std::path::Path) -> std::path::PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".lzw");
    path.into()
}

/// Derive a default output path for `decompress`: strip a trailing
/// `.lzw` extension, or append `.out` if there isn't one.
pub fn default_decompressed_path(input: &std::path::Path) -> std::path::PathBuf {
    if input.extension().is_some_and(|ext| ext == "lzw") {
        input.with_extension("")
    } else {
        let mut path = input.as_os_str().to_owned();
        path.push(".out");
        path.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn formats_size_buckets() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }

    #[test]
    fn formats_ratio_against_zero() {
        assert_eq!(format_ratio(0, 0), "-");
        assert_eq!(format_ratio(100, 50), "50.0%");
    }

    #[test]
    fn default_paths_round_trip_the_lzw_suffix() {
        let input = Path::new("notes.txt");
        let compressed = default_compressed_path(input);
        assert_eq!(compressed, Path::new("notes.txt.lzw"));
        assert_eq!(default_decompressed_path(&compressed), Path::new("notes.txt"));
    }
}
