//! What the user can do right now, and what each action does.
//!
//! Both functions here are pure: they look at an [`ActionContext`] snapshot
//! and never touch dialog state. The controller rebuilds the snapshot after
//! every change.

use crate::config::Selectable;
use crate::input::{Action, Button};
use crate::source::EntryKind;

/// The parts of dialog state that decide which actions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    /// Kind of the selected entry; `None` for an empty listing.
    pub selection: Option<EntryKind>,
    /// Whether directories are listed.
    pub show_directories: bool,
    /// Whether the current path is the root.
    pub at_root: bool,
    /// Entry kinds that can be confirmed.
    pub selectable: Selectable,
}

impl ActionContext {
    /// Whether the selected entry can be confirmed.
    pub fn can_select(&self) -> bool {
        self.selection
            .is_some_and(|kind| self.selectable.contains(kind))
    }

    fn can_go_up(&self) -> bool {
        self.show_directories && !self.at_root
    }
}

/// Logical action advertised on the action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAction {
    /// Go to the parent directory.
    GoUp,
    /// Enter the selected directory (or the parent, for `..`).
    Enter,
    /// Accept confirms the selected entry.
    Confirm,
    /// Explicit confirm button.
    Select,
    /// Dismiss the dialog.
    Dismiss,
    /// Exit the dialog.
    Close,
}

/// One action bar slot: a button, what it does, and an optional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableAction {
    /// Button that triggers the action.
    pub button: Button,
    /// What the button does.
    pub action: BarAction,
    /// Text shown next to the button hint.
    pub label: Option<&'static str>,
}

impl AvailableAction {
    fn new(button: Button, action: BarAction, label: Option<&'static str>) -> Self {
        Self {
            button,
            action,
            label,
        }
    }
}

/// Ordered set of actions available in the current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet(Vec<AvailableAction>);

impl ActionSet {
    /// Whether `action` is available.
    pub fn contains(&self, action: BarAction) -> bool {
        self.0.iter().any(|a| a.action == action)
    }

    /// Actions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &AvailableAction> {
        self.0.iter()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute the action bar for `ctx`.
pub fn available_actions(ctx: &ActionContext) -> ActionSet {
    let mut actions = Vec::new();

    // Cancel goes up a directory; Accept does too when ".." is selected.
    if ctx.can_go_up() {
        if ctx.selection == Some(EntryKind::ParentMarker) {
            actions.push(AvailableAction::new(Button::Accept, BarAction::Enter, None));
        }
        actions.push(AvailableAction::new(
            Button::Cancel,
            BarAction::GoUp,
            Some("Up one folder"),
        ));
    }

    // Accept enters a directory, or else confirms a selectable entry.
    if ctx.selection != Some(EntryKind::ParentMarker) {
        if ctx.selection == Some(EntryKind::Directory) {
            actions.push(AvailableAction::new(
                Button::Accept,
                BarAction::Enter,
                Some("Enter"),
            ));
        } else if ctx.can_select() {
            actions.push(AvailableAction::new(Button::Accept, BarAction::Confirm, None));
        }
    }

    if ctx.can_select() {
        actions.push(AvailableAction::new(
            Button::Settings,
            BarAction::Select,
            Some("Select"),
        ));
    }

    if !ctx.show_directories {
        actions.push(AvailableAction::new(Button::Cancel, BarAction::Dismiss, None));
    }
    actions.push(AvailableAction::new(Button::Menu, BarAction::Close, Some("Exit")));

    ActionSet(actions)
}

/// State change requested by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Select the previous entry.
    MoveUp,
    /// Select the next entry.
    MoveDown,
    /// Page towards the start.
    PageUp,
    /// Page towards the end.
    PageDown,
    /// Scroll the selected label left.
    ScrollLeft,
    /// Scroll the selected label right.
    ScrollRight,
    /// Go to the parent directory.
    DirectoryUp,
    /// Enter the selected directory.
    DirectoryEnter,
    /// Close with the current selection as the result.
    Confirm,
    /// Close without a result.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Decide what `action` does in `ctx`.
///
/// Accept on `..` means going up. Going up without directories (or the
/// dismiss button) closes the dialog. Accept on anything but a directory is
/// a confirm, and confirming an entry that is not selectable does nothing.
pub fn transition(ctx: &ActionContext, action: Action) -> Transition {
    let action = match (action, ctx.selection) {
        (Action::Select, Some(EntryKind::ParentMarker)) => Action::GoUp,
        _ => action,
    };

    match action {
        Action::Up
        | Action::Down
        | Action::PageUp
        | Action::PageDown
        | Action::ScrollLeft
        | Action::ScrollRight
            if ctx.selection.is_none() =>
        {
            Transition::Ignore
        },
        Action::Up => Transition::MoveUp,
        Action::Down => Transition::MoveDown,
        Action::PageUp => Transition::PageUp,
        Action::PageDown => Transition::PageDown,
        Action::ScrollLeft => Transition::ScrollLeft,
        Action::ScrollRight => Transition::ScrollRight,
        Action::GoUp if !ctx.show_directories => Transition::Quit,
        Action::GoUp if ctx.at_root => Transition::Ignore,
        Action::GoUp => Transition::DirectoryUp,
        Action::Close => Transition::Quit,
        Action::Select if ctx.selection == Some(EntryKind::Directory) => {
            Transition::DirectoryEnter
        },
        Action::Select | Action::Confirm if ctx.can_select() => Transition::Confirm,
        Action::Select | Action::Confirm => Transition::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(selection: Option<EntryKind>) -> ActionContext {
        ActionContext {
            selection,
            show_directories: true,
            at_root: false,
            selectable: Selectable::FILES,
        }
    }

    #[test]
    fn test_parent_marker_actions() {
        let actions = available_actions(&ctx(Some(EntryKind::ParentMarker)));
        assert!(actions.contains(BarAction::GoUp));
        assert!(actions.contains(BarAction::Enter));
        assert!(!actions.contains(BarAction::Select));
        assert!(!actions.contains(BarAction::Confirm));
        assert!(actions.contains(BarAction::Close));
    }

    #[test]
    fn test_directory_actions() {
        let actions = available_actions(&ctx(Some(EntryKind::Directory)));
        let labels: Vec<_> = actions.iter().filter_map(|a| a.label).collect();
        assert_eq!(labels, ["Up one folder", "Enter", "Exit"]);

        let mut both = ctx(Some(EntryKind::Directory));
        both.selectable = Selectable::BOTH;
        let actions = available_actions(&both);
        assert!(actions.contains(BarAction::Enter));
        assert!(actions.contains(BarAction::Select));
        assert!(!actions.contains(BarAction::Confirm));
    }

    #[test]
    fn test_file_actions() {
        let actions = available_actions(&ctx(Some(EntryKind::File)));
        assert!(actions.contains(BarAction::Confirm));
        assert!(actions.contains(BarAction::Select));
        assert!(!actions.contains(BarAction::Enter));
    }

    #[test]
    fn test_empty_list_only_closes() {
        let mut empty = ctx(None);
        empty.at_root = true;
        let actions = available_actions(&empty);
        assert_eq!(actions.len(), 1);
        assert!(actions.contains(BarAction::Close));
    }

    #[test]
    fn test_files_only_adds_dismiss() {
        let mut files_only = ctx(Some(EntryKind::File));
        files_only.show_directories = false;
        let actions = available_actions(&files_only);
        assert!(!actions.contains(BarAction::GoUp));
        assert!(actions.contains(BarAction::Dismiss));
        assert_eq!(transition(&files_only, Action::GoUp), Transition::Quit);
    }

    #[test]
    fn test_select_equivalences() {
        assert_eq!(
            transition(&ctx(Some(EntryKind::ParentMarker)), Action::Select),
            Transition::DirectoryUp
        );
        assert_eq!(
            transition(&ctx(Some(EntryKind::Directory)), Action::Select),
            Transition::DirectoryEnter
        );
        assert_eq!(
            transition(&ctx(Some(EntryKind::File)), Action::Select),
            Transition::Confirm
        );
        assert_eq!(
            transition(&ctx(Some(EntryKind::Directory)), Action::Confirm),
            Transition::Ignore
        );
        assert_eq!(
            transition(&ctx(Some(EntryKind::ParentMarker)), Action::Confirm),
            Transition::Ignore
        );
    }

    #[test]
    fn test_go_up_at_root_and_close() {
        let mut root = ctx(Some(EntryKind::Directory));
        root.at_root = true;
        assert_eq!(transition(&root, Action::GoUp), Transition::Ignore);
        assert_eq!(transition(&root, Action::Close), Transition::Quit);
        assert!(!available_actions(&root).contains(BarAction::GoUp));
    }

    #[test]
    fn test_navigation_ignored_when_empty() {
        for action in [Action::Up, Action::Down, Action::PageUp, Action::ScrollRight] {
            assert_eq!(transition(&ctx(None), action), Transition::Ignore);
        }
        assert_eq!(transition(&ctx(None), Action::Select), Transition::Ignore);
        assert_eq!(transition(&ctx(Some(EntryKind::File)), Action::Up), Transition::MoveUp);
    }
}
