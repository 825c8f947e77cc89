//! Filesystem directory source.

use super::{DirectorySource, Listing};
use crate::error::{DirpickError, Result};
use std::fs;
use std::path::Path;

/// Lists real directories.
#[derive(Debug, Clone)]
pub struct FileLister {
    listing: Listing,
    /// List directories (and the parent marker) alongside files.
    pub show_directories: bool,
    /// Include dot-prefixed entries.
    pub show_hidden: bool,
    /// Lowercase file extensions to keep; empty keeps every file.
    pub filter: Vec<String>,
}

impl FileLister {
    /// Create a lister that shows directories and hides dot-entries.
    pub fn new() -> Self {
        Self {
            listing: Listing::default(),
            show_directories: true,
            show_hidden: false,
            filter: Vec::new(),
        }
    }

    /// Set whether directories are listed.
    pub fn with_directories(mut self, show: bool) -> Self {
        self.show_directories = show;
        self
    }

    /// Set whether dot-entries are listed.
    pub fn with_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Only list files with one of these extensions.
    pub fn with_filter<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    fn accepts_file(&self, path: &Path) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.filter.iter().any(|f| *f == ext))
    }
}

impl Default for FileLister {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectorySource for FileLister {
    fn browse(&mut self, path: &str) -> Result<()> {
        self.listing.clear();

        let dir_entries = fs::read_dir(path).map_err(|e| DirpickError::unreadable(path, e))?;

        let mut directories = Vec::new();
        let mut files = Vec::new();
        for entry in dir_entries.flatten() {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            // Symlinks are classified by their final target.
            let is_dir = entry_path.metadata().map(|m| m.is_dir()).unwrap_or(false);

            if is_dir {
                if self.show_directories {
                    directories.push(name);
                }
            } else if self.accepts_file(&entry_path) {
                files.push(name);
            }
        }

        let parent = self.show_directories && path != "/";
        self.listing = Listing::new(directories, files, parent);
        tracing::debug!(path, entries = self.listing.len(), "listed directory");
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
