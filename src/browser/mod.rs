//! Browse dialog - a scroll-aware directory browser.
//!
//! The dialog owns all navigation state (path, selection, viewport, label
//! scroll) and reaches the outside world only through the capabilities in
//! [`BrowseContext`]: a [`DirectorySource`] for listings, a [`Surface`] for
//! measuring and drawing, and an [`InputSource`] for button presses.
//!
//! ```ignore
//! use dirpick::browser::{BrowseContext, BrowseDialog};
//! use dirpick::config::BrowseConfig;
//!
//! let context = BrowseContext::new(source, surface, input);
//! let mut dialog = BrowseDialog::new(context, BrowseConfig::new("Open"));
//! if dialog.run()? {
//!     println!("{}", dialog.selected_path().unwrap_or_default());
//! }
//! ```

mod actions;
mod directory;
mod hooks;
mod name_scroll;
mod navigator;
mod viewport;

pub use actions::{
    available_actions, transition, ActionContext, ActionSet, AvailableAction, BarAction,
    Transition,
};
pub use directory::{child_dir, departed_name, normalize, parent_dir, resolve, Location, ROOT};
pub use hooks::{BrowseHooks, NoHooks, RecordingHooks};
pub use name_scroll::{NameScroll, ScrollDirection};
pub use navigator::Navigator;
pub use viewport::Viewport;

use crate::config::BrowseConfig;
use crate::error::Result;
use crate::input::{Action, InputSource};
use crate::source::DirectorySource;
use crate::ui::{BrowseView, ContentArea, Surface, ViewRow};

/// The capabilities the dialog is allowed to use.
#[derive(Debug)]
pub struct BrowseContext<D, S, I> {
    /// Where listings come from.
    pub source: D,
    /// Where frames are drawn.
    pub surface: S,
    /// Where button presses come from.
    pub input: I,
}

impl<D, S, I> BrowseContext<D, S, I> {
    /// Bundle the capabilities.
    pub fn new(source: D, surface: S, input: I) -> Self {
        Self {
            source,
            surface,
            input,
        }
    }
}

/// Interactive directory browser.
#[derive(Debug)]
pub struct BrowseDialog<D, S, I, H = NoHooks> {
    context: BrowseContext<D, S, I>,
    hooks: H,
    config: BrowseConfig,
    location: Location,
    nav: Navigator,
    configured_for: Option<ContentArea>,
    label_x: u16,
    label_width: u16,
}

impl<D, S, I> BrowseDialog<D, S, I, NoHooks>
where
    D: DirectorySource,
    S: Surface,
    I: InputSource,
{
    /// Create a dialog without hooks.
    pub fn new(context: BrowseContext<D, S, I>, config: BrowseConfig) -> Self {
        Self::with_hooks(context, config, NoHooks)
    }
}

impl<D, S, I, H> BrowseDialog<D, S, I, H>
where
    D: DirectorySource,
    S: Surface,
    I: InputSource,
    H: BrowseHooks,
{
    /// Create a dialog that reports directory changes to `hooks`.
    pub fn with_hooks(context: BrowseContext<D, S, I>, config: BrowseConfig, hooks: H) -> Self {
        Self {
            context,
            hooks,
            config,
            location: Location::new(),
            nav: Navigator::new(),
            configured_for: None,
            label_x: 0,
            label_width: 0,
        }
    }

    /// Run until the user confirms or closes.
    ///
    /// Returns `true` when a selection was confirmed.
    pub fn run(&mut self) -> Result<bool> {
        self.initialize();
        tracing::info!(path = %self.location.path(), "browse dialog started");

        let confirmed = loop {
            self.render()?;
            let button = self.context.input.wait_for_button()?;
            if let Some(confirmed) = self.apply(Action::from_button(button)) {
                break confirmed;
            }
        };

        tracing::info!(
            confirmed,
            path = %self.location.path(),
            selection = ?self.current_selection(),
            "browse dialog closed"
        );
        Ok(confirmed)
    }

    /// Size the list and open the start directory.
    pub fn initialize(&mut self) {
        self.configure();

        let default = std::env::current_dir()
            .map(|dir| dir.to_string_lossy().to_string())
            .unwrap_or_else(|_| ROOT.to_string());
        self.location.open_initial(
            &self.config.start_path,
            &default,
            &mut self.context.source,
            &mut self.hooks,
            &mut self.nav,
        );
    }

    /// Snapshot of the state that decides which actions apply.
    pub fn action_context(&self) -> ActionContext {
        let source = &self.context.source;
        ActionContext {
            selection: source.kind_at(self.nav.selected()),
            show_directories: source.show_directories(),
            at_root: self.location.is_root(),
            selectable: self.config.selectable,
        }
    }

    /// Perform `action`. Returns the dialog result once it should close.
    pub fn apply(&mut self, action: Action) -> Option<bool> {
        let size = self.context.source.size();
        let step = transition(&self.action_context(), action);
        tracing::debug!(?action, ?step, selected = self.nav.selected(), "input");

        match step {
            Transition::MoveUp => self.nav.move_up(size),
            Transition::MoveDown => self.nav.move_down(size),
            Transition::PageUp => self.nav.page_up(size),
            Transition::PageDown => self.nav.page_down(size),
            Transition::ScrollLeft => self.scroll_name(ScrollDirection::Left),
            Transition::ScrollRight => self.scroll_name(ScrollDirection::Right),
            Transition::DirectoryUp => {
                self.location
                    .up(&mut self.context.source, &mut self.hooks, &mut self.nav);
            },
            Transition::DirectoryEnter => self.enter_selected(),
            Transition::Confirm => return Some(true),
            Transition::Quit => return Some(false),
            Transition::Ignore => {},
        }
        None
    }

    /// Draw the current state.
    pub fn render(&mut self) -> Result<()> {
        if self.configured_for != Some(self.context.surface.content_area()) {
            self.configure();
            self.nav
                .viewport
                .center_selection(self.nav.selected(), self.context.source.size());
        }

        let source = &self.context.source;
        let size = source.size();
        self.nav.validate(size);
        self.nav.viewport.clamp_to_list_size(size);

        let actions = available_actions(&self.action_context());
        let viewport = self.nav.viewport;
        let selected = self.nav.selected();
        let rows = (viewport.first_element()..viewport.last_element(size))
            .filter_map(|i| {
                Some(ViewRow {
                    name: source.name_at(i)?,
                    kind: source.kind_at(i)?,
                    selected: i == selected,
                })
            })
            .collect();

        let view = BrowseView {
            title: &self.config.title,
            subtitle: &self.config.subtitle,
            path: self.location.path(),
            rows,
            total: size,
            first_element: viewport.first_element(),
            num_rows: viewport.num_rows(),
            row_height: viewport.row_height(),
            top_padding: viewport.top_padding(),
            name_scroll: self.nav.name_scroll.offset(),
            label_x: self.label_x,
            label_width: self.label_width,
            show_icons: source.show_directories(),
            actions: &actions,
        };
        self.context.surface.present(&view)
    }

    /// Current directory, with a trailing separator.
    pub fn current_path(&self) -> &str {
        self.location.path()
    }

    /// Name of the selected entry.
    pub fn current_selection(&self) -> Option<&str> {
        self.context.source.name_at(self.nav.selected())
    }

    /// Full path of the selected entry.
    pub fn selected_path(&self) -> Option<String> {
        self.current_selection()
            .map(|name| format!("{}{}", self.location.path(), name))
    }

    /// Index of the selected entry.
    pub fn selected_index(&self) -> usize {
        self.nav.selected()
    }

    /// Visible window.
    pub fn viewport(&self) -> &Viewport {
        &self.nav.viewport
    }

    /// Horizontal offset of the selected label.
    pub fn name_scroll(&self) -> u16 {
        self.nav.name_scroll.offset()
    }

    /// Access the capabilities.
    pub fn context(&self) -> &BrowseContext<D, S, I> {
        &self.context
    }

    /// Mutable access to the capabilities, for embedders driving the dialog themselves.
    pub fn context_mut(&mut self) -> &mut BrowseContext<D, S, I> {
        &mut self.context
    }

    /// Access the hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Give the capabilities back.
    pub fn into_context(self) -> BrowseContext<D, S, I> {
        self.context
    }

    fn configure(&mut self) {
        let surface = &self.context.surface;
        let area = surface.content_area();
        let layout = &self.config.layout;
        let show_icons = self.context.source.show_directories();

        let icon = if show_icons {
            surface
                .icon_height()
                .map(|height| (height, layout.icon_margin))
        } else {
            None
        };
        self.nav
            .viewport
            .configure(area.height, surface.line_height(), icon);

        self.label_x = if show_icons {
            layout.icon_column
        } else {
            layout.name_indent
        };
        self.label_width = area
            .width
            .saturating_sub(self.label_x)
            .saturating_sub(layout.scrollbar_gutter);
        self.configured_for = Some(area);

        tracing::debug!(
            rows = self.nav.viewport.num_rows(),
            row_height = self.nav.viewport.row_height(),
            label_width = self.label_width,
            "configured list geometry"
        );
    }

    fn scroll_name(&mut self, direction: ScrollDirection) {
        let Some(name) = self.context.source.name_at(self.nav.selected()) else {
            return;
        };
        let width = self.context.surface.text_width(name);
        let layout = &self.config.layout;
        self.nav.name_scroll.scroll(
            direction,
            width,
            self.label_width,
            layout.name_scroll_step,
            layout.name_width_limit,
        );
    }

    fn enter_selected(&mut self) {
        let Some(name) = self
            .context
            .source
            .name_at(self.nav.selected())
            .map(str::to_string)
        else {
            return;
        };
        self.location
            .enter(&name, &mut self.context.source, &mut self.hooks, &mut self.nav);
    }
}
