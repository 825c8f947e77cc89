//! Horizontal scrolling of the selected label.

/// Scroll direction for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Reveal the start of the label.
    Left,
    /// Reveal the end of the label.
    Right,
}

/// Offset into the selected entry's label.
///
/// Only meaningful for the label it was computed against, so it must be
/// reset whenever the selection or the directory changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameScroll {
    offset: u16,
}

impl NameScroll {
    /// Create a scroller at offset zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by `step`, staying within the part of the label that overflows.
    ///
    /// `label_width` is capped at `width_limit` before use.
    pub fn scroll(
        &mut self,
        direction: ScrollDirection,
        label_width: u16,
        visible_width: u16,
        step: u16,
        width_limit: u16,
    ) {
        let max_offset = label_width.min(width_limit).saturating_sub(visible_width);
        let offset = match direction {
            ScrollDirection::Left => self.offset.saturating_sub(step),
            ScrollDirection::Right => self.offset.saturating_add(step),
        };
        self.offset = offset.min(max_offset);
    }

    /// Return to the start of the label.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Current offset.
    pub fn offset(&self) -> u16 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_saturates_at_overflow() {
        let mut scroll = NameScroll::new();
        for _ in 0..20 {
            scroll.scroll(ScrollDirection::Right, 200, 150, 5, 32767);
            assert!(scroll.offset() <= 50);
        }
        assert_eq!(scroll.offset(), 50);

        scroll.scroll(ScrollDirection::Left, 200, 150, 5, 32767);
        assert_eq!(scroll.offset(), 45);
    }

    #[test]
    fn test_short_label_never_scrolls() {
        let mut scroll = NameScroll::new();
        scroll.scroll(ScrollDirection::Right, 100, 150, 5, 32767);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll(ScrollDirection::Left, 100, 150, 5, 32767);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_width_limit_and_reset() {
        let mut scroll = NameScroll::new();
        for _ in 0..10 {
            scroll.scroll(ScrollDirection::Right, 60_000, 10, 7, 20);
        }
        assert_eq!(scroll.offset(), 10);

        scroll.reset();
        assert_eq!(scroll.offset(), 0);
    }
}
