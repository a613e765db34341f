use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finder for C# source files in a directory
pub struct SourceFinder {
    /// Root directory to scan
    root: PathBuf,
    /// Patterns to exclude
    exclude_patterns: Vec<String>,
}

impl SourceFinder {
    /// Create a new finder
    pub fn new(root: PathBuf, exclude_patterns: Vec<String>) -> Self {
        SourceFinder {
            root,
            exclude_patterns,
        }
    }

    /// Find all C# source files under the root
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        let mut cs_files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e.path()))
        {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.is_csharp_file(path) {
                cs_files.push(path.to_path_buf());
            }
        }

        Ok(cs_files)
    }

    /// Check if a path is a C# source file
    fn is_csharp_file(&self, path: &Path) -> bool {
        path.extension().map(|ext| ext == "cs").unwrap_or(false)
    }

    /// Check if a path should be excluded
    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if path_str.contains(pattern) {
                return true;
            }

            if let Some(name) = path.file_name() {
                if name.to_string_lossy() == *pattern {
                    return true;
                }
            }
        }

        false
    }
}
