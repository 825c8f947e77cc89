//! Dialog configuration.

use crate::source::EntryKind;

/// Which kinds of entry the user may confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selectable {
    /// Regular files can be confirmed.
    pub files: bool,
    /// Directories can be confirmed.
    pub directories: bool,
}

impl Selectable {
    /// Only files can be confirmed.
    pub const FILES: Self = Self {
        files: true,
        directories: false,
    };
    /// Only directories can be confirmed.
    pub const DIRECTORIES: Self = Self {
        files: false,
        directories: true,
    };
    /// Files and directories can be confirmed.
    pub const BOTH: Self = Self {
        files: true,
        directories: true,
    };
    /// Nothing can be confirmed; the dialog is a pure viewer.
    pub const NONE: Self = Self {
        files: false,
        directories: false,
    };

    /// Check whether an entry of the given kind can be confirmed.
    ///
    /// The parent marker is never confirmable.
    pub fn contains(self, kind: EntryKind) -> bool {
        match kind {
            EntryKind::File => self.files,
            EntryKind::Directory => self.directories,
            EntryKind::ParentMarker => false,
        }
    }
}

impl Default for Selectable {
    fn default() -> Self {
        Self::FILES
    }
}

/// Layout constants for the entry list.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Extra height added to the icon when sizing rows.
    pub icon_margin: u16,
    /// Width reserved for the icon column when directories are shown.
    pub icon_column: u16,
    /// Width reserved left of the label when directories are hidden.
    pub name_indent: u16,
    /// Width reserved right of the label for the scrollbar.
    pub scrollbar_gutter: u16,
    /// Horizontal scroll step for long labels.
    pub name_scroll_step: u16,
    /// Ceiling applied to measured label widths.
    pub name_width_limit: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_margin: 0, // terminal cells already include line spacing
            icon_column: 3,
            name_indent: 1,
            scrollbar_gutter: 1,
            name_scroll_step: 5,
            name_width_limit: 32767,
        }
    }
}

/// Browse dialog configuration.
#[derive(Debug, Clone, Default)]
pub struct BrowseConfig {
    /// Title shown at the top of the dialog.
    pub title: String,
    /// Subtitle shown below the title.
    pub subtitle: String,
    /// Initial directory; empty means the current working directory.
    pub start_path: String,
    /// Entry kinds the user may confirm.
    pub selectable: Selectable,
    /// List layout.
    pub layout: LayoutConfig,
}

impl BrowseConfig {
    /// Create a configuration with a title and defaults for everything else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the initial directory.
    pub fn with_start_path(mut self, path: impl Into<String>) -> Self {
        self.start_path = path.into();
        self
    }

    /// Set which entry kinds can be confirmed.
    pub fn with_selectable(mut self, selectable: Selectable) -> Self {
        self.selectable = selectable;
        self
    }

    /// Replace the layout constants.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}
