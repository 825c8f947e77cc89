//! User interface rendering.
//!
//! The browse dialog describes each frame as a [`BrowseView`] and hands it to
//! a [`Surface`]. [`TerminalSurface`] draws it with ratatui;
//! [`RecordingSurface`] keeps it for inspection.

mod action_bar;
mod browser;
mod theme;

pub use browser::TerminalSurface;
pub use theme::{Theme, ThemeColors};

use crate::browser::ActionSet;
use crate::error::Result;
use crate::source::EntryKind;

/// Area available to the entry list, in surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentArea {
    /// Offset of the list from the top of the surface.
    pub top: u16,
    /// Height of the list.
    pub height: u16,
    /// Width of the list, scrollbar included.
    pub width: u16,
}

/// One visible entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRow<'a> {
    /// Entry name.
    pub name: &'a str,
    /// Entry kind.
    pub kind: EntryKind,
    /// Whether this row is the selection.
    pub selected: bool,
}

/// Everything needed to draw one frame of the dialog.
#[derive(Debug, Clone)]
pub struct BrowseView<'a> {
    /// Dialog title.
    pub title: &'a str,
    /// Dialog subtitle.
    pub subtitle: &'a str,
    /// Current directory.
    pub path: &'a str,
    /// Visible entries, top to bottom.
    pub rows: Vec<ViewRow<'a>>,
    /// Number of entries in the whole listing.
    pub total: usize,
    /// Index of the first visible entry.
    pub first_element: usize,
    /// Rows that fit in the content area.
    pub num_rows: usize,
    /// Height of one row.
    pub row_height: u16,
    /// Unused height above the first row.
    pub top_padding: u16,
    /// Horizontal offset of the selected label.
    pub name_scroll: u16,
    /// Offset of the labels from the left edge of the list.
    pub label_x: u16,
    /// Width of the label clip area.
    pub label_width: u16,
    /// Whether entry icons are drawn.
    pub show_icons: bool,
    /// Actions for the action bar.
    pub actions: &'a ActionSet,
}

impl BrowseView<'_> {
    /// Whether the listing is empty and a placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Capability to measure text and draw frames.
pub trait Surface {
    /// Area the entry list may occupy.
    fn content_area(&self) -> ContentArea;

    /// Height of one line of text.
    fn line_height(&self) -> u16;

    /// Height of the entry icons, if the surface has any.
    fn icon_height(&self) -> Option<u16>;

    /// Width of `text` once drawn.
    fn text_width(&self, text: &str) -> u16;

    /// Draw a complete frame.
    fn present(&mut self, view: &BrowseView<'_>) -> Result<()>;
}

/// Replace characters that would corrupt the display.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// A frame captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    /// Current directory.
    pub path: String,
    /// Names of the visible rows.
    pub names: Vec<String>,
    /// Absolute index of the selected row, if it was visible.
    pub selected: Option<usize>,
    /// Index of the first visible entry.
    pub first_element: usize,
    /// Rows that fit.
    pub num_rows: usize,
    /// Size of the whole listing.
    pub total: usize,
    /// Horizontal offset of the selected label.
    pub name_scroll: u16,
    /// Action bar contents.
    pub actions: ActionSet,
}

impl RecordedFrame {
    /// Whether the placeholder was requested.
    pub fn is_placeholder(&self) -> bool {
        self.total == 0
    }
}

/// A fixed-size surface that records frames instead of drawing them.
///
/// Text is measured one unit per character.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    area: ContentArea,
    icon_height: Option<u16>,
    /// Every frame presented so far.
    pub frames: Vec<RecordedFrame>,
}

impl RecordingSurface {
    /// Create a surface with room for `rows` lines of `width` characters.
    pub fn new(rows: u16, width: u16) -> Self {
        Self {
            area: ContentArea {
                top: 0,
                height: rows,
                width,
            },
            icon_height: Some(1),
            frames: Vec::new(),
        }
    }

    /// Change the content area, as a terminal resize would.
    pub fn resize(&mut self, rows: u16, width: u16) {
        self.area.height = rows;
        self.area.width = width;
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Surface for RecordingSurface {
    fn content_area(&self) -> ContentArea {
        self.area
    }

    fn line_height(&self) -> u16 {
        1
    }

    fn icon_height(&self) -> Option<u16> {
        self.icon_height
    }

    fn text_width(&self, text: &str) -> u16 {
        u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
    }

    fn present(&mut self, view: &BrowseView<'_>) -> Result<()> {
        let selected = view
            .rows
            .iter()
            .position(|row| row.selected)
            .map(|i| view.first_element + i);
        self.frames.push(RecordedFrame {
            path: view.path.to_string(),
            names: view.rows.iter().map(|row| row.name.to_string()).collect(),
            selected,
            first_element: view.first_element,
            num_rows: view.num_rows,
            total: view.total,
            name_scroll: view.name_scroll,
            actions: view.actions.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("bad\nname\t.txt"), "bad?name?.txt");
        assert_eq!(sanitize_name("ok é.txt"), "ok é.txt");
    }
}
