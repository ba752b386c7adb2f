//! Local naming for courses and materials.
//!
//! Turns catalog titles and file names into safe path segments and composes the
//! destination path `base / course title / file name`. Also decides which
//! materials are folder placeholders rather than real files.

mod sanitize;

use std::path::{Path, PathBuf};

pub use sanitize::{sanitize_filename, sanitize_segment, DEFAULT_DISALLOWED_CHARS, REPLACEMENT};

/// Directory holding one course's files: `base / sanitize(title)`.
///
/// Titles are not unique; courses with the same sanitized title share a directory.
pub fn course_dir(base: &Path, title: &str, disallowed: &[char]) -> PathBuf {
    base.join(sanitize_segment(title, disallowed))
}

/// Destination of one material: `course_dir / sanitize(file_name)`.
pub fn destination_path(course_dir: &Path, file_name: &str, disallowed: &[char]) -> PathBuf {
    course_dir.join(sanitize_segment(file_name, disallowed))
}

/// True if the material should not be downloaded.
///
/// A material is a placeholder when its link is empty, or when the link ends with
/// the owning course's uuid (the catalog's way of listing a folder). This suffix
/// test can also match a real file URL that happens to end with the uuid, and an
/// empty uuid matches every link.
pub fn is_placeholder(link: &str, course_uuid: &str) -> bool {
    link.is_empty() || link.ends_with(course_uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_and_destination_paths() {
        let base = Path::new("downloads");
        let dir = course_dir(base, "Algo 101", &DEFAULT_DISALLOWED_CHARS);
        assert_eq!(dir, Path::new("downloads/Algo 101"));
        let dest = destination_path(&dir, "notes:1.pdf", &DEFAULT_DISALLOWED_CHARS);
        assert_eq!(dest, Path::new("downloads/Algo 101/notes_1.pdf"));
    }

    #[test]
    fn slash_in_title_stays_one_segment() {
        let dir = course_dir(Path::new("out"), "Math/Physics", &DEFAULT_DISALLOWED_CHARS);
        assert_eq!(dir, Path::new("out/Math_Physics"));
        assert_eq!(dir.components().count(), 2);
    }

    #[test]
    fn placeholder_detection() {
        assert!(is_placeholder("", "u1"));
        assert!(is_placeholder("", ""));
        assert!(is_placeholder("http://x/u1", "u1"));
        assert!(is_placeholder("http://x/folder/abcu1", "u1"));
        assert!(!is_placeholder("http://x/notes1.pdf", "u1"));
        assert!(!is_placeholder("http://x/u1/file.pdf", "u1"));
    }

    #[test]
    fn empty_uuid_marks_every_link_placeholder() {
        assert!(is_placeholder("http://x/notes1.pdf", ""));
        assert!(is_placeholder("http://x/a.pdf", ""));
    }
}
