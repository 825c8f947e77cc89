//! Directory sources - where the entries of the browsed directory come from.
//!
//! The browse dialog never touches the filesystem itself. It asks a
//! [`DirectorySource`] to list a path and then reads names and kinds by index.
//! Every source lists the parent marker first, then directories, then files,
//! so the position of a name in [`DirectorySource::directory_names`] is also
//! its position in the full list.

mod file_lister;
mod memory;

pub use file_lister::FileLister;
pub use memory::MemorySource;

use crate::error::Result;
use std::cmp::Ordering;

/// Name of the synthetic entry that stands for the parent directory.
pub const PARENT_MARKER: &str = "..";

/// Kind of an entry in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The `..` entry.
    ParentMarker,
    /// A directory.
    Directory,
    /// Anything that is not a directory.
    File,
}

/// Capability to enumerate and classify the entries of a directory.
pub trait DirectorySource {
    /// List `path`. On failure the source must expose an empty list.
    fn browse(&mut self, path: &str) -> Result<()>;

    /// Number of entries in the current listing.
    fn size(&self) -> usize;

    /// Name of the entry at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Whether the entry at `index` is a directory (the parent marker included).
    fn is_directory(&self, index: usize) -> bool;

    /// Directory names of the current listing, in list order.
    fn directory_names(&self) -> &[String];

    /// Whether directories are part of the listing at all.
    fn show_directories(&self) -> bool;

    /// Whether the entry at `index` is a file.
    fn is_file(&self, index: usize) -> bool {
        index < self.size() && !self.is_directory(index)
    }

    /// Classify the entry at `index`.
    fn kind_at(&self, index: usize) -> Option<EntryKind> {
        let name = self.name_at(index)?;
        Some(if !self.is_directory(index) {
            EntryKind::File
        } else if name == PARENT_MARKER {
            EntryKind::ParentMarker
        } else {
            EntryKind::Directory
        })
    }
}

/// Ordered listing shared by the bundled sources.
#[derive(Debug, Clone, Default)]
pub(crate) struct Listing {
    directories: Vec<String>,
    files: Vec<String>,
}

impl Listing {
    /// Build a listing, sorting each group case-insensitively.
    pub(crate) fn new(mut directories: Vec<String>, mut files: Vec<String>, parent: bool) -> Self {
        directories.sort_by(|a, b| compare_names(a, b));
        files.sort_by(|a, b| compare_names(a, b));
        if parent {
            directories.insert(0, PARENT_MARKER.to_string());
        }
        Self { directories, files }
    }

    pub(crate) fn clear(&mut self) {
        self.directories.clear();
        self.files.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub(crate) fn name_at(&self, index: usize) -> Option<&str> {
        match index.checked_sub(self.directories.len()) {
            None => self.directories.get(index),
            Some(file_index) => self.files.get(file_index),
        }
        .map(String::as_str)
    }

    pub(crate) fn is_directory(&self, index: usize) -> bool {
        index < self.directories.len()
    }

    pub(crate) fn directories(&self) -> &[String] {
        &self.directories
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
