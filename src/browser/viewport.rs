//! Visible window over the entry list.

/// Which slice of the list is on screen and how tall each row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    first_element: usize,
    num_rows: usize,
    row_height: u16,
    top_padding: u16,
}

impl Viewport {
    /// Create a single-row viewport; call [`Viewport::configure`] before use.
    pub fn new() -> Self {
        Self {
            first_element: 0,
            num_rows: 1,
            row_height: 1,
            top_padding: 0,
        }
    }

    /// Fit as many whole rows as possible into `visible_height`.
    ///
    /// Rows are as tall as a text line, or as the icon plus `icon_margin`
    /// when icons are shown. Leftover height is spread over the rows, and
    /// whatever still does not divide evenly becomes top padding.
    pub fn configure(
        &mut self,
        visible_height: u16,
        line_height: u16,
        icon: Option<(u16, u16)>,
    ) {
        let mut row_height = line_height.max(1);
        if let Some((icon_height, icon_margin)) = icon {
            row_height = row_height.max(icon_height.saturating_add(icon_margin));
        }

        let rows = (visible_height / row_height).max(1);
        self.num_rows = usize::from(rows);
        self.row_height = (visible_height / rows).max(1);
        self.top_padding = visible_height.saturating_sub(self.row_height * rows) / 2;
    }

    /// Place the selection in the middle of the viewport.
    pub fn center_selection(&mut self, selection: usize, list_size: usize) {
        let num_rows = self.num_rows;
        if list_size <= num_rows || selection <= num_rows / 2 {
            self.first_element = 0;
        } else {
            let last_element = list_size.min(selection + (num_rows - num_rows / 2));
            self.first_element = last_element - num_rows;
        }
    }

    /// Scroll just enough to keep the selection out of the outer quarters.
    pub fn adjust_selection(&mut self, selection: usize, list_size: usize) {
        let buffer_rows = self.num_rows / 4;
        if selection < self.first_element + buffer_rows {
            self.first_element = selection.max(buffer_rows) - buffer_rows;
        } else if selection + buffer_rows >= self.first_element + self.num_rows {
            self.first_element = (selection + buffer_rows + 1)
                .min(list_size)
                .saturating_sub(self.num_rows);
        }
    }

    /// Pull the window back inside a list that may have shrunk.
    pub fn clamp_to_list_size(&mut self, list_size: usize) {
        if self.first_element + self.num_rows > list_size {
            self.first_element = list_size.max(self.num_rows) - self.num_rows;
        }
    }

    /// Index of the first visible entry.
    pub fn first_element(&self) -> usize {
        self.first_element
    }

    /// One past the last visible entry of a list of `list_size` entries.
    pub fn last_element(&self, list_size: usize) -> usize {
        (self.first_element + self.num_rows).min(list_size)
    }

    /// Number of rows that fit.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Height of one row.
    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    /// Unused height above the first row.
    pub fn top_padding(&self) -> u16 {
        self.top_padding
    }

    /// Whether `selection` is on screen.
    pub fn contains(&self, selection: usize) -> bool {
        self.first_element <= selection && selection < self.first_element + self.num_rows
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(rows: u16) -> Viewport {
        let mut viewport = Viewport::new();
        viewport.configure(rows, 1, None);
        viewport
    }

    #[test]
    fn test_configure_redistributes_height() {
        let mut viewport = Viewport::new();
        viewport.configure(100, 12, Some((16, 2)));
        assert_eq!(viewport.num_rows(), 5);
        assert_eq!(viewport.row_height(), 20);
        assert_eq!(viewport.top_padding(), 0);

        viewport.configure(100, 12, None);
        assert_eq!(viewport.num_rows(), 8);
        assert_eq!(viewport.row_height(), 12);
        assert_eq!(viewport.top_padding(), 2);
    }

    #[test]
    fn test_configure_never_zero_rows() {
        let mut viewport = Viewport::new();
        viewport.configure(5, 12, None);
        assert_eq!(viewport.num_rows(), 1);
        assert_eq!(viewport.row_height(), 5);

        viewport.configure(0, 12, None);
        assert_eq!(viewport.num_rows(), 1);
        assert_eq!(viewport.row_height(), 1);
    }

    #[test]
    fn test_center_selection() {
        let mut viewport = viewport(10);
        viewport.center_selection(3, 100);
        assert_eq!(viewport.first_element(), 0);

        viewport.center_selection(50, 100);
        assert_eq!(viewport.first_element(), 45);
        assert!(viewport.contains(50));

        viewport.center_selection(98, 100);
        assert_eq!(viewport.first_element(), 90);

        viewport.center_selection(7, 8);
        assert_eq!(viewport.first_element(), 0);
    }

    #[test]
    fn test_adjust_selection_dead_zone() {
        let mut viewport = viewport(10);
        viewport.center_selection(50, 100);
        let first = viewport.first_element();

        viewport.adjust_selection(49, 100);
        assert_eq!(viewport.first_element(), first);

        viewport.adjust_selection(53, 100);
        assert_eq!(viewport.first_element(), 46);

        viewport.adjust_selection(47, 100);
        assert_eq!(viewport.first_element(), 45);
    }

    #[test]
    fn test_adjust_selection_idempotent() {
        let mut viewport = viewport(10);
        for selection in [0, 9, 42, 99, 50, 3] {
            viewport.adjust_selection(selection, 100);
            let once = viewport.first_element();
            viewport.adjust_selection(selection, 100);
            assert_eq!(viewport.first_element(), once);
            assert!(viewport.contains(selection));
        }
    }

    #[test]
    fn test_adjust_selection_small_list() {
        let mut viewport = viewport(10);
        viewport.adjust_selection(4, 5);
        assert_eq!(viewport.first_element(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut viewport = viewport(10);
        viewport.center_selection(95, 100);
        assert_eq!(viewport.first_element(), 90);

        viewport.clamp_to_list_size(30);
        assert_eq!(viewport.first_element(), 20);

        viewport.clamp_to_list_size(4);
        assert_eq!(viewport.first_element(), 0);
        assert_eq!(viewport.last_element(4), 4);

        viewport.clamp_to_list_size(0);
        assert_eq!(viewport.first_element(), 0);
    }
}
