//! Terminal front-ends
//!
//! - [`Ui`]: where action results and informational lines go
//! - [`ConsoleUi`]: one-shot commands printing to stdout/stderr
//! - [`ShellApp`]: the interactive ratatui shell
//! - [`SilentUi`]: discards everything

mod components;
mod shell;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

use crate::actions::{ActionError, ActionResult, Notice};
use crate::session::Session;
use crate::storage::KeyValueStore;

pub use components::LogPanel;
pub use shell::{ShellState, Tab};

/// Sink for action outcomes - lets commands run against a real terminal,
/// the interactive shell or a test recorder
pub trait Ui {
    fn notify(&mut self, notice: &Notice);
    fn reject(&mut self, error: &ActionError);
    fn log(&mut self, message: impl Into<String>);

    /// Route an action result to `notify` or `reject`
    fn report(&mut self, result: &ActionResult) {
        match result {
            Ok(notice) => self.notify(notice),
            Err(error) => self.reject(error),
        }
    }
}

/// Plain stdout/stderr output for one-shot commands
#[derive(Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for ConsoleUi {
    fn notify(&mut self, notice: &Notice) {
        println!("{}\n  {}", notice.title, notice.message);
    }

    fn reject(&mut self, error: &ActionError) {
        eprintln!("{}\n  {}", error.title(), error);
    }

    fn log(&mut self, message: impl Into<String>) {
        println!("{}", message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn notify(&mut self, _notice: &Notice) {}
    fn reject(&mut self, _error: &ActionError) {}
    fn log(&mut self, _message: impl Into<String>) {}
}

/// Interactive shell - full TUI implementation
pub struct ShellApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: ShellState,
}

impl ShellApp {
    /// Create the shell and enter the alternate screen
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: ShellState::new(),
        })
    }

    /// Run until the player quits, then restore the terminal
    pub fn run<S: KeyValueStore>(mut self, session: &mut Session<S>) -> Result<()> {
        self.state.log("Welcome aboard. Tab switches screens, q quits.");

        while !self.state.should_quit() {
            self.draw(session)?;

            if event::poll(Duration::from_millis(250))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(key.code, session);
                    }
                }
            }
        }

        self.restore()
    }

    fn draw<S: KeyValueStore>(&mut self, session: &Session<S>) -> Result<()> {
        let state = &self.state;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4), // Status header
                    Constraint::Length(3), // Tabs
                    Constraint::Min(8),    // Screen content
                    Constraint::Length(7), // Activity log
                ])
                .split(area);

            components::render_status(frame, chunks[0], session);
            components::render_tabs(frame, chunks[1], state.tab());
            components::render_screen(frame, chunks[2], state, session);
            state.log_panel().render(frame, chunks[3]);
        })?;

        Ok(())
    }

    /// Restore terminal
    pub fn restore(mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for ShellApp {
    fn drop(&mut self) {
        // Best effort cleanup
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}
