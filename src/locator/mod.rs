//! Source file enumeration under a root directory

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Enumerates candidate source files under a root directory.
///
/// Only files whose extension matches the configured suffix are returned.
/// Traversal order is unspecified. Unreadable subtrees are logged and
/// skipped without aborting sibling traversal, and a non-existent root
/// yields an empty list rather than an error.
pub struct SourceLocator {
    root: PathBuf,
    extension: String,
}

impl SourceLocator {
    pub fn new(root: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: extension.into(),
        }
    }

    /// Collect all matching file paths under the root
    pub fn locate(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            tracing::warn!("Source root does not exist or is not a directory: {:?}", self.root);
            return Vec::new();
        }

        let mut files = Vec::new();

        // Ignore files do not apply: every matching file under the root is a
        // candidate, even when the surrounding repository gitignores it
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(false)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension));
            if matches {
                files.push(path.to_path_buf());
            }
        }

        tracing::debug!("Located {} {} files under {:?}", files.len(), self.extension, self.root);
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_locates_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("nested/B.java"), "class B {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "not source").unwrap();

        let locator = SourceLocator::new(dir.path(), "java");
        let mut found: Vec<String> = locator
            .locate()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        found.sort();

        assert_eq!(found, vec!["A.java", "B.java"]);
    }

    #[test]
    fn test_gitignored_files_are_still_located() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.java\ngenerated/\n").unwrap();
        fs::create_dir(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("generated/B.java"), "class B {}").unwrap();

        let locator = SourceLocator::new(dir.path(), "java");
        assert_eq!(locator.locate().len(), 2);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Weird.JAVA"), "class Weird {}").unwrap();

        let locator = SourceLocator::new(dir.path(), "java");
        assert_eq!(locator.locate().len(), 1);
    }

    #[test]
    fn test_nonexistent_root_yields_empty_list() {
        let locator = SourceLocator::new("/definitely/not/a/real/path", "java");
        assert!(locator.locate().is_empty());
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let locator = SourceLocator::new(dir.path(), "java");
        assert!(locator.locate().is_empty());
    }

    #[test]
    fn test_file_as_root_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("A.java");
        fs::write(&file, "class A {}").unwrap();

        let locator = SourceLocator::new(&file, "java");
        assert!(locator.locate().is_empty());
    }
}
