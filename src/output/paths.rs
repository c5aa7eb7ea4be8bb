// src/output/paths.rs
//! Pure functions for filename and path calculations.

use std::path::{Path, PathBuf};

/// Sanitizes a string to be safe for use as a filename. Digest anchors
/// reuse the same character rules.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Output path for one book's outline document.
pub fn book_file_path(output_dir: &Path, title: &str) -> PathBuf {
    output_dir.join(format!("{}.md", sanitize_filename(title)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_filename_characters_become_underscores() {
        assert_eq!(sanitize_filename("a/b:c*d?e"), "a_b_c_d_e");
        assert_eq!(sanitize_filename("  spaced  "), "spaced");
    }

    #[test]
    fn book_path_keeps_unicode_titles() {
        let path = book_file_path(Path::new("out"), "活着");
        assert_eq!(path, PathBuf::from("out/活着.md"));
    }
}
