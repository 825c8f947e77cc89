//! Customization points for embedders of the browse dialog.

/// Callbacks invoked around directory changes.
pub trait BrowseHooks {
    /// The current path was set to `path`.
    fn on_path_changed(&mut self, _path: &str) {}

    /// `path` is about to be listed.
    fn before_listing(&mut self, _path: &str) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl BrowseHooks for NoHooks {}

/// Records every hook call; handy for asserting on directory changes.
#[derive(Debug, Clone, Default)]
pub struct RecordingHooks {
    /// Paths passed to [`BrowseHooks::on_path_changed`], in order.
    pub paths: Vec<String>,
    /// Paths passed to [`BrowseHooks::before_listing`], in order.
    pub listings: Vec<String>,
}

impl BrowseHooks for RecordingHooks {
    fn on_path_changed(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }

    fn before_listing(&mut self, path: &str) {
        self.listings.push(path.to_string());
    }
}

impl<H: BrowseHooks + ?Sized> BrowseHooks for &mut H {
    fn on_path_changed(&mut self, path: &str) {
        (**self).on_path_changed(path);
    }

    fn before_listing(&mut self, path: &str) {
        (**self).before_listing(path);
    }
}
