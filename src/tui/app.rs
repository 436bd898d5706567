use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, ItemKey};
use crate::store::{StoreError, StoreEvent, TodoStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// Inline edit of one item's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Item being edited (stable across reorders)
    pub key: ItemKey,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
    /// Text before editing started
    pub original: String,
}

/// Transient message shown in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    store_events: mpsc::Receiver<StoreEvent>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Index of the focused item
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub edit: Option<EditState>,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Text for items created with `n`
    pub placeholder: String,
}

impl App {
    pub fn new(mut store: TodoStore, config: &Config) -> Self {
        let store_events = store.subscribe();
        App {
            store,
            store_events,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            edit: None,
            status: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            placeholder: config.store.placeholder.clone(),
        }
    }

    /// Name shown in the header
    pub fn file_name(&self) -> String {
        self.store
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Keep the cursor on an existing item
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    /// Surface a store failure in the status row. Failures never stop the
    /// session; they are already logged by the store.
    pub fn report(&mut self, err: &StoreError) {
        self.set_error(err.to_string());
    }

    /// Apply pending store notifications to UI state
    pub fn drain_store_events(&mut self) {
        while let Ok(event) = self.store_events.try_recv() {
            match event {
                StoreEvent::Saved => {
                    if self.status.is_none() {
                        self.set_status("saved");
                    }
                }
                StoreEvent::SaveFailed { message } => self.set_error(message),
                StoreEvent::Loaded { .. } | StoreEvent::Removed { .. } => self.clamp_cursor(),
                StoreEvent::Inserted { .. }
                | StoreEvent::Updated { .. }
                | StoreEvent::Moved { .. } => {}
            }
        }
    }
}

/// Load `path` into a fresh store, keeping the session alive on failure
pub fn open_store(path: &Path, config: &Config) -> (TodoStore, Option<StatusMessage>) {
    let mut store = TodoStore::with_header(config.store.header.clone());
    let notice = match store.load(path) {
        Ok(_) => None,
        Err(StoreError::Load(e)) if e.is_not_found() => Some(StatusMessage {
            text: format!("new file: {}", path.display()),
            is_error: false,
        }),
        Err(e) => Some(StatusMessage {
            text: e.to_string(),
            is_error: true,
        }),
    };
    (store, notice)
}

/// Run the TUI application
pub fn run(path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (store, notice) = open_store(path, config);
    let mut app = App::new(store, config);
    app.status = notice;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    log::info!("exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.drain_store_events();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
