//! Current directory and the transitions between directories.
//!
//! Paths are `/`-separated strings that always end in `/`. Changing
//! directory replaces the path and the listing together, and the selection
//! is fixed up before anything else reads it.

use super::hooks::BrowseHooks;
use super::navigator::Navigator;
use crate::source::DirectorySource;

/// The filesystem root.
pub const ROOT: &str = "/";

/// Append the trailing separator if it is missing.
pub fn normalize(path: &str) -> String {
    let mut path = path.to_string();
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Resolve `path` to an absolute directory path ending in `/`.
///
/// Relative paths are taken from `base`. Empty and `.` segments are dropped
/// and `..` removes the previous segment, never climbing above the root.
pub fn resolve(path: &str, base: &str) -> String {
    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{}", base, path)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            name => segments.push(name),
        }
    }

    let mut resolved = String::from(ROOT);
    for segment in segments {
        resolved.push_str(segment);
        resolved.push('/');
    }
    resolved
}

/// Parent of a directory path; the root is its own parent.
pub fn parent_dir(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => ROOT.to_string(),
    }
}

/// Path of the directory `name` inside `path`.
pub fn child_dir(path: &str, name: &str) -> String {
    format!("{}{}/", normalize(path), name)
}

/// Name of the directory that was left when moving from `old` up to `new`.
pub fn departed_name<'a>(old: &'a str, new: &str) -> Option<&'a str> {
    old.strip_prefix(new)?
        .strip_suffix('/')
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

/// The directory being browsed.
#[derive(Debug, Clone, Default)]
pub struct Location {
    path: String,
}

impl Location {
    /// Create a location with no path yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current path, with a trailing separator.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the current path is the root.
    pub fn is_root(&self) -> bool {
        self.path == ROOT
    }

    /// Open `requested`, falling back to `default` when it is empty.
    ///
    /// The path is resolved first, so `.` and `..` segments never reach the
    /// source and relative paths are taken from `default`.
    ///
    /// Unreadable paths are replaced by their parent until one opens or the
    /// root is reached. Only runs once, at startup.
    pub fn open_initial<D, H>(
        &mut self,
        requested: &str,
        default: &str,
        source: &mut D,
        hooks: &mut H,
        nav: &mut Navigator,
    ) where
        D: DirectorySource + ?Sized,
        H: BrowseHooks + ?Sized,
    {
        let requested = if requested.is_empty() { default } else { requested };
        let mut path = resolve(requested, default);

        // The source has to be listed at least once.
        while !list(&path, source, hooks) && source.show_directories() && path != ROOT {
            let parent = parent_dir(&path);
            tracing::warn!(from = %path, to = %parent, "falling back to parent directory");
            path = parent;
        }

        self.set_path(&path, hooks);
        nav.jump_to(0, source.size());
    }

    /// Descend into the directory `name` of the current listing.
    pub fn enter<D, H>(&mut self, name: &str, source: &mut D, hooks: &mut H, nav: &mut Navigator)
    where
        D: DirectorySource + ?Sized,
        H: BrowseHooks + ?Sized,
    {
        let new_path = child_dir(&self.path, name);
        tracing::debug!(path = %new_path, "entering directory");

        self.set_path(&new_path, hooks);
        list(&new_path, source, hooks);
        nav.reset(source.size());
    }

    /// Move to the parent directory, selecting the directory just left.
    ///
    /// Returns `false` when already at the root.
    pub fn up<D, H>(&mut self, source: &mut D, hooks: &mut H, nav: &mut Navigator) -> bool
    where
        D: DirectorySource + ?Sized,
        H: BrowseHooks + ?Sized,
    {
        if self.is_root() {
            return false;
        }

        let old_path = std::mem::take(&mut self.path);
        let new_path = parent_dir(&old_path);
        tracing::debug!(from = %old_path, to = %new_path, "leaving directory");

        self.set_path(&new_path, hooks);
        list(&new_path, source, hooks);

        let selected = departed_name(&old_path, &new_path)
            .and_then(|name| source.directory_names().iter().position(|dir| dir == name))
            .unwrap_or(0);
        nav.jump_to(selected, source.size());
        true
    }

    fn set_path<H: BrowseHooks + ?Sized>(&mut self, path: &str, hooks: &mut H) {
        self.path = normalize(path);
        hooks.on_path_changed(&self.path);
    }
}

/// List `path`; a failure leaves the source empty and is only logged.
fn list<D, H>(path: &str, source: &mut D, hooks: &mut H) -> bool
where
    D: DirectorySource + ?Sized,
    H: BrowseHooks + ?Sized,
{
    hooks.before_listing(path);
    match source.browse(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{}", e);
            false
        },
    }
}
