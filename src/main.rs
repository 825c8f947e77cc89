//! Dirpick - pick a file or directory from the terminal.
//!
//! Prints the chosen path on stdout and exits with status 0, or exits with
//! status 1 when the dialog is closed without a selection.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dirpick::browser::{BrowseContext, BrowseDialog};
use dirpick::config::{BrowseConfig, Selectable};
use dirpick::input::CrosstermInput;
use dirpick::source::FileLister;
use dirpick::ui::{TerminalSurface, Theme};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Entry kinds that can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SelectMode {
    /// Regular files.
    Files,
    /// Directories.
    Dirs,
    /// Files and directories.
    Both,
}

impl From<SelectMode> for Selectable {
    fn from(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Files => Selectable::FILES,
            SelectMode::Dirs => Selectable::DIRECTORIES,
            SelectMode::Both => Selectable::BOTH,
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Gruvbox dark.
    Dark,
    /// Gruvbox light.
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirpick", version)]
#[command(about = "A scroll-aware terminal file and directory picker", long_about = None)]
struct Args {
    /// Directory to start browsing in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Which entries can be picked
    #[arg(long, value_enum, default_value = "files")]
    select: SelectMode,

    /// Hide directories and list only the files of the start directory
    #[arg(long)]
    files_only: bool,

    /// Only list files with these extensions (comma separated)
    #[arg(long, value_delimiter = ',')]
    filter: Vec<String>,

    /// Include entries whose name starts with a dot
    #[arg(long)]
    hidden: bool,

    /// Dialog title
    #[arg(long, default_value = "Browse")]
    title: String,

    /// Dialog subtitle
    #[arg(long, default_value = "")]
    subtitle: String,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeArg,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        // The writer appends, so start each session with an empty file.
        std::fs::File::create(log_path)?;
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Dirpick");
    }

    let start_path = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => std::env::current_dir()?.join(path),
        None => std::env::current_dir()?,
    };
    let config = BrowseConfig::new(args.title.clone())
        .with_subtitle(args.subtitle.clone())
        .with_start_path(start_path.to_string_lossy())
        .with_selectable(args.select.into());
    let source = FileLister::new()
        .with_directories(!args.files_only)
        .with_hidden(args.hidden)
        .with_filter(&args.filter);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let theme: Theme = args.theme.into();
    tracing::debug!(theme = theme.name(), start = %start_path.display(), "opening dialog");
    let surface = TerminalSurface::new(terminal, theme);

    // Run dialog
    let context = BrowseContext::new(source, surface, CrosstermInput::new());
    let mut dialog = BrowseDialog::new(context, config);
    let res = dialog.run();
    let selection = dialog.selected_path();

    // Restore terminal
    let mut terminal = dialog.into_context().surface.into_terminal();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(true) => {
            if let Some(path) = selection {
                println!("{}", path);
            }
            tracing::info!("Dirpick exited with a selection");
            Ok(())
        },
        Ok(false) => {
            tracing::info!("Dirpick exited without a selection");
            std::process::exit(1);
        },
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        },
    }
}
