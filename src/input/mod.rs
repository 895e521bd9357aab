//! Line-oriented URL list input.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read each line of a URL-list file.
///
/// Empty lines and lines starting with `#` are skipped. LF and CRLF line
/// endings are both accepted.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(content: &str) -> Vec<String> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, content).unwrap();
        read_lines(&path).unwrap()
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let lines = read_str("a\n\n# comment\nb\n\nc\n");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let lines = read_str("a\r\nb\r\n# c\r\n\r\nd");
        assert_eq!(lines, vec!["a", "b", "d"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_lines(Path::new("/nonexistent/urls.txt")).is_err());
    }
}
