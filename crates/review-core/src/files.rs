//! Upload accept list and file size labels

use std::path::Path;

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Whether the upload control accepts `filename` (case-insensitive extension)
pub fn is_accepted(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

pub fn content_type_for(filename: &str) -> &'static str {
    match extension(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Human-readable size: `"512 B"`, `"64.8 KB"`, `"2.4 MB"`
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    // Round to the printed precision before picking the unit
    let tenths = |unit: f64| (bytes as f64 / unit * 10.0).round() / 10.0;

    if bytes < 1024 {
        format!("{} B", bytes)
    } else if tenths(KB) < 1024.0 {
        format!("{:.1} KB", tenths(KB))
    } else {
        format!("{:.1} MB", tenths(MB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted("sld.pdf"));
        assert!(is_accepted("SLD.PDF"));
        assert!(is_accepted("photo.jpeg"));
        assert!(is_accepted("scan.Png"));
        assert!(!is_accepted("grounding_plan.dwg"));
        assert!(!is_accepted("README"));
        assert!(!is_accepted(".pdf"));
        assert!(!is_accepted("notes.pdf.txt"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("a.pdf"), "application/pdf");
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.png"), "image/png");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(66_355), "64.8 KB");
        assert_eq!(format_file_size(2_516_582), "2.4 MB");
    }

    #[test]
    fn test_format_file_size_unit_boundary() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1_048_524), "1023.9 KB");
        assert_eq!(format_file_size(1_048_575), "1.0 MB");
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
    }
}
