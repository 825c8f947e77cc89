//! Selection movement within the current listing.

use super::name_scroll::NameScroll;
use super::viewport::Viewport;

/// Selection index plus the viewport and label scroll that follow it.
///
/// Every movement is a no-op on an empty list. Single steps wrap around,
/// pages clamp at the ends.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    selected: usize,
    /// Visible window.
    pub viewport: Viewport,
    /// Horizontal scroll of the selected label.
    pub name_scroll: NameScroll,
}

impl Navigator {
    /// Create a navigator at the top of the list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select the previous entry, wrapping to the last.
    pub fn move_up(&mut self, list_size: usize) {
        if list_size == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            list_size - 1
        } else {
            self.selected - 1
        };
        self.follow(list_size);
    }

    /// Select the next entry, wrapping to the first.
    pub fn move_down(&mut self, list_size: usize) {
        if list_size == 0 {
            return;
        }
        self.selected = if self.selected + 1 >= list_size {
            0
        } else {
            self.selected + 1
        };
        self.follow(list_size);
    }

    /// Jump back by one page, stopping at the first entry.
    pub fn page_up(&mut self, list_size: usize) {
        if list_size == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(self.page_size());
        self.follow(list_size);
    }

    /// Jump forward by one page, stopping at the last entry.
    pub fn page_down(&mut self, list_size: usize) {
        if list_size == 0 {
            return;
        }
        self.selected = (self.selected + self.page_size()).min(list_size - 1);
        self.follow(list_size);
    }

    /// Select `index` after a directory change and re-center on it.
    pub fn jump_to(&mut self, index: usize, list_size: usize) {
        self.selected = index;
        self.validate(list_size);
        self.viewport.center_selection(self.selected, list_size);
        self.name_scroll.reset();
    }

    /// Select the first entry after entering a directory.
    pub fn reset(&mut self, list_size: usize) {
        self.selected = 0;
        self.follow(list_size);
    }

    /// Clamp the selection into a list that may have changed size.
    pub fn validate(&mut self, list_size: usize) {
        if self.selected >= list_size {
            self.selected = list_size.saturating_sub(1);
        }
    }

    /// Entries skipped by a page jump; one row of overlap at each end, but
    /// always at least one entry.
    fn page_size(&self) -> usize {
        self.viewport.num_rows().saturating_sub(2).max(1)
    }

    fn follow(&mut self, list_size: usize) {
        self.viewport.adjust_selection(self.selected, list_size);
        self.name_scroll.reset();
    }
}
