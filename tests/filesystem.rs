use dirpick::browser::{BrowseContext, BrowseDialog};
use dirpick::config::{BrowseConfig, Selectable};
use dirpick::input::{Button, ScriptedInput};
use dirpick::source::FileLister;
use dirpick::ui::RecordingSurface;
use std::fs;
use tempfile::TempDir;

type Dialog = BrowseDialog<FileLister, RecordingSurface, ScriptedInput>;

/// Layout:
/// ```text
/// root/
///   Docs/guide.md
///   music/
///   image.png
///   notes.txt
/// ```
fn fixture() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Docs")).unwrap();
    fs::write(dir.path().join("Docs").join("guide.md"), "# guide").unwrap();
    fs::create_dir(dir.path().join("music")).unwrap();
    fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();
    fs::write(dir.path().join("notes.txt"), "notes").unwrap();
    let root = format!("{}/", dir.path().display());
    (dir, root)
}

fn open_dialog(
    lister: FileLister,
    start: &str,
    selectable: Selectable,
    buttons: impl IntoIterator<Item = Button>,
) -> Dialog {
    let context = BrowseContext::new(
        lister,
        RecordingSurface::new(10, 40),
        ScriptedInput::new(buttons),
    );
    let config = BrowseConfig::new("Open")
        .with_start_path(start)
        .with_selectable(selectable);
    BrowseDialog::new(context, config)
}

#[test]
fn test_confirm_returns_full_path() {
    let (_dir, root) = fixture();
    // "..", "Docs", "music", "image.png", "notes.txt"
    let buttons = [Button::Down, Button::Down, Button::Down, Button::Accept];
    let mut dialog = open_dialog(FileLister::new(), &root, Selectable::FILES, buttons);

    assert!(dialog.run().unwrap());
    assert_eq!(dialog.current_path(), root);
    assert_eq!(dialog.selected_path(), Some(format!("{}image.png", root)));
}

#[test]
fn test_missing_start_falls_back_to_existing_ancestor() {
    let (_dir, root) = fixture();
    let start = format!("{}missing/deeper", root);
    let mut dialog = open_dialog(FileLister::new(), &start, Selectable::FILES, std::iter::empty());

    assert!(!dialog.run().unwrap());
    assert_eq!(dialog.current_path(), root);
    assert_eq!(dialog.context().surface.frames[0].total, 5);
}

#[test]
fn test_enter_and_leave_real_directory() {
    let (_dir, root) = fixture();
    let buttons = [Button::Down, Button::Accept, Button::Down];
    let mut dialog = open_dialog(FileLister::new(), &root, Selectable::FILES, buttons);

    dialog.run().unwrap();
    assert_eq!(dialog.current_path(), format!("{}Docs/", root));
    assert_eq!(dialog.current_selection(), Some("guide.md"));

    let buttons = [Button::Down, Button::Down, Button::Accept, Button::Cancel];
    let mut dialog = open_dialog(FileLister::new(), &root, Selectable::FILES, buttons);

    dialog.run().unwrap();
    assert_eq!(dialog.current_path(), root);
    assert_eq!(dialog.current_selection(), Some("music"));
}

#[test]
fn test_directory_selection() {
    let (_dir, root) = fixture();
    let buttons = [Button::Down, Button::Settings];
    let mut dialog = open_dialog(FileLister::new(), &root, Selectable::DIRECTORIES, buttons);

    assert!(dialog.run().unwrap());
    assert_eq!(dialog.selected_path(), Some(format!("{}Docs", root)));
}

#[test]
fn test_files_only_with_filter() {
    let (_dir, root) = fixture();
    let lister = FileLister::new().with_directories(false).with_filter(["txt"]);
    let mut dialog = open_dialog(lister, &root, Selectable::FILES, [Button::Accept]);

    assert!(dialog.run().unwrap());
    let frame = &dialog.context().surface.frames[0];
    assert_eq!(frame.names, ["notes.txt"]);
    assert_eq!(dialog.selected_path(), Some(format!("{}notes.txt", root)));
}

#[test]
fn test_start_path_with_dot_segments() {
    let (_dir, root) = fixture();
    let start = format!("{}Docs/../music/.", root);
    let mut dialog = open_dialog(FileLister::new(), &start, Selectable::FILES, [Button::Cancel]);

    dialog.run().unwrap();

    assert_eq!(dialog.context().surface.frames[0].path, format!("{}music/", root));
    assert_eq!(dialog.current_path(), root);
    assert_eq!(dialog.current_selection(), Some("music"));
}
