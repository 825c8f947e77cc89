//! Browse dialog rendering on a terminal.

use super::{action_bar::draw_action_bar, sanitize_name, BrowseView, ContentArea, Surface};
use super::{Theme, ThemeColors};
use crate::error::{DirpickError, Result};
use crate::source::EntryKind;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame, Terminal,
};
use unicode_width::UnicodeWidthStr;

/// Screen regions of the dialog.
#[derive(Debug, Clone, Copy)]
struct Regions {
    header: Rect,
    list: Rect,
    inner: Rect,
    bar: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    Regions {
        header: chunks[0],
        list: chunks[1],
        inner: Block::default().borders(Borders::ALL).inner(chunks[1]),
        bar: chunks[2],
    }
}

/// Draws the browse dialog with ratatui.
#[derive(Debug)]
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    colors: ThemeColors,
}

impl<B: Backend> TerminalSurface<B> {
    /// Wrap a terminal.
    pub fn new(terminal: Terminal<B>, theme: Theme) -> Self {
        Self {
            terminal,
            colors: ThemeColors::from_theme(theme),
        }
    }

    /// Give the terminal back.
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn area(&self) -> Rect {
        self.terminal
            .size()
            .map(|size| Rect::new(0, 0, size.width, size.height))
            .unwrap_or_default()
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn content_area(&self) -> ContentArea {
        let inner = regions(self.area()).inner;
        ContentArea {
            top: inner.y,
            height: inner.height,
            width: inner.width,
        }
    }

    fn line_height(&self) -> u16 {
        1
    }

    fn icon_height(&self) -> Option<u16> {
        Some(1)
    }

    fn text_width(&self, text: &str) -> u16 {
        u16::try_from(sanitize_name(text).width()).unwrap_or(u16::MAX)
    }

    fn present(&mut self, view: &BrowseView<'_>) -> Result<()> {
        let colors = &self.colors;
        self.terminal
            .draw(|f| draw_browse(f, view, colors))
            .map_err(|e| DirpickError::terminal(e.to_string()))?;
        Ok(())
    }
}

/// Draw one frame of the dialog.
fn draw_browse(f: &mut Frame<'_>, view: &BrowseView<'_>, colors: &ThemeColors) {
    let regions = regions(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            view.title.to_string(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(view.subtitle.to_string(), Style::default().fg(colors.muted)),
    ]))
    .style(Style::default().bg(colors.bg));
    f.render_widget(header, regions.header);

    let block = Block::default()
        .title(format!(" {} ", view.path))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    f.render_widget(block, regions.list);

    if view.is_empty() {
        draw_placeholder(f, view, regions.inner, colors);
    } else {
        draw_rows(f, view, regions.inner, colors);
        draw_scrollbar(f, view, regions.inner, colors);
    }

    draw_action_bar(f, regions.bar, view.actions, colors);
}

fn row_rect(view: &BrowseView<'_>, inner: Rect, row: usize) -> Rect {
    let offset = u16::try_from(row)
        .unwrap_or(u16::MAX)
        .saturating_mul(view.row_height);
    Rect {
        x: inner.x,
        y: inner.y.saturating_add(view.top_padding).saturating_add(offset),
        width: inner.width,
        height: view.row_height,
    }
    .intersection(inner)
}

fn draw_placeholder(f: &mut Frame<'_>, view: &BrowseView<'_>, inner: Rect, colors: &ThemeColors) {
    let row = row_rect(view, inner, 0);
    let line = Rect {
        y: row.y + row.height / 2,
        height: row.height.min(1),
        ..row
    };
    let placeholder = Paragraph::new("(no items)")
        .style(Style::default().fg(colors.muted))
        .alignment(Alignment::Left);
    f.render_widget(placeholder, line);
}

fn draw_rows(f: &mut Frame<'_>, view: &BrowseView<'_>, inner: Rect, colors: &ThemeColors) {
    for (i, row) in view.rows.iter().enumerate() {
        let rect = row_rect(view, inner, i);
        if rect.height == 0 {
            break;
        }
        let text_y = rect.y + rect.height / 2;

        let style = if row.selected {
            let bar = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            f.render_widget(
                Block::default().style(Style::default().bg(colors.cursor_bg)),
                bar,
            );
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else if row.kind == EntryKind::File {
            Style::default().fg(colors.text)
        } else {
            Style::default().fg(colors.directory)
        };

        if view.show_icons {
            let icon = match row.kind {
                EntryKind::ParentMarker => "↑",
                EntryKind::Directory => "📁",
                EntryKind::File => "📄",
            };
            let icon_rect = Rect::new(rect.x, text_y, view.label_x.min(rect.width), 1);
            f.render_widget(Paragraph::new(icon).style(style), icon_rect);
        }

        let clip = Rect::new(
            rect.x.saturating_add(view.label_x),
            text_y,
            view.label_width,
            1,
        )
        .intersection(inner);
        let scroll = if row.selected { view.name_scroll } else { 0 };
        let label = Paragraph::new(sanitize_name(row.name))
            .style(style)
            .scroll((0, scroll));
        f.render_widget(label, clip);
    }
}

fn draw_scrollbar(f: &mut Frame<'_>, view: &BrowseView<'_>, inner: Rect, colors: &ThemeColors) {
    if view.total <= view.num_rows {
        return;
    }

    let mut state = ScrollbarState::new(view.total.saturating_sub(view.num_rows) + 1)
        .viewport_content_length(view.num_rows)
        .position(view.first_element);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(colors.border));
    f.render_stateful_widget(scrollbar, inner, &mut state);
}
