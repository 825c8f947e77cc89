//! In-memory directory source.

use super::{DirectorySource, Listing};
use crate::error::{DirpickError, Result};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
struct Folder {
    directories: BTreeSet<String>,
    files: BTreeSet<String>,
}

/// A directory tree held in memory.
///
/// Paths are absolute and `/`-separated; a trailing `/` marks a directory.
/// Every ancestor of an inserted path exists implicitly.
#[derive(Debug, Clone)]
pub struct MemorySource {
    folders: BTreeMap<String, Folder>,
    listing: Listing,
    show_directories: bool,
}

impl MemorySource {
    /// Create a tree containing only the root directory.
    pub fn new() -> Self {
        let mut folders = BTreeMap::new();
        folders.insert("/".to_string(), Folder::default());
        Self {
            folders,
            listing: Listing::default(),
            show_directories: true,
        }
    }

    /// Build a tree from a list of paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut source = Self::new();
        for path in paths {
            source.insert(path.as_ref());
        }
        source
    }

    /// Set whether directories are listed.
    pub fn with_directories(mut self, show: bool) -> Self {
        self.show_directories = show;
        self
    }

    /// Insert a file, or a directory when `path` ends with `/`.
    pub fn insert(&mut self, path: &str) {
        let is_dir = path.ends_with('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut current = String::from("/");
        for (i, segment) in segments.iter().enumerate() {
            let last = i + 1 == segments.len();
            let folder = self.folders.entry(current.clone()).or_default();
            if last && !is_dir {
                folder.files.insert((*segment).to_string());
                return;
            }
            folder.directories.insert((*segment).to_string());
            current.push_str(segment);
            current.push('/');
        }
        self.folders.entry(current).or_default();
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectorySource for MemorySource {
    fn browse(&mut self, path: &str) -> Result<()> {
        self.listing.clear();

        let key = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };
        let folder = self
            .folders
            .get(&key)
            .ok_or_else(|| DirpickError::unknown_path(path))?;

        let directories = if self.show_directories {
            folder.directories.iter().cloned().collect()
        } else {
            Vec::new()
        };
        let files = folder.files.iter().cloned().collect();
        self.listing = Listing::new(directories, files, self.show_directories && key != "/");
        Ok(())
    }

    fn size(&self) -> usize {
        self.listing.len()
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.listing.name_at(index)
    }

    fn is_directory(&self, index: usize) -> bool {
        self.listing.is_directory(index)
    }

    fn directory_names(&self) -> &[String] {
        self.listing.directories()
    }

    fn show_directories(&self) -> bool {
        self.show_directories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_ancestors() {
        let mut source = MemorySource::from_paths(["/home/user/a.txt", "/home/user/Music/"]);

        source.browse("/home").unwrap();
        assert_eq!(source.size(), 2);
        assert_eq!(source.name_at(1), Some("user"));

        source.browse("/home/user/").unwrap();
        assert_eq!(source.directory_names(), ["..", "Music"]);
        assert_eq!(source.name_at(2), Some("a.txt"));

        source.browse("/").unwrap();
        assert_eq!(source.directory_names(), ["home"]);
    }

    #[test]
    fn test_unknown_path_fails_empty() {
        let mut source = MemorySource::from_paths(["/a/b.txt"]);
        source.browse("/a/").unwrap();
        assert!(source.browse("/nope/").is_err());
        assert_eq!(source.size(), 0);
    }
}
