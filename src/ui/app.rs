//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::dashboard::{POLL_INTERVAL, SPLASH_DURATION};
use crate::events::Event as WorkerEvent;
use crate::sos::Snapshot;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub source_label: String,
    pub refresh_secs: u64,
}

impl UIConfig {
    pub fn new(with_background_color: bool, source_label: String, refresh_secs: u64) -> Self {
        Self {
            with_background_color,
            source_label,
            refresh_secs,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// District dashboard.
    Dashboard,
}

/// What a key press asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Continue,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state, fed while the splash screen is still up.
    dashboard: DashboardState,

    /// Receives events from the refresh worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives fresh snapshots from the refresh worker.
    snapshot_receiver: mpsc::Receiver<Snapshot>,

    /// Broadcasts shutdown signal to the refresh worker.
    shutdown_sender: broadcast::Sender<()>,

    /// Asks the refresh worker for an immediate refresh.
    refresh_sender: mpsc::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<WorkerEvent>,
        snapshot_receiver: mpsc::Receiver<Snapshot>,
        shutdown_sender: broadcast::Sender<()>,
        refresh_sender: mpsc::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(&ui_config),
            event_receiver,
            snapshot_receiver,
            shutdown_sender,
            refresh_sender,
        }
    }

    /// Drains worker channels without blocking.
    pub fn drain_channels(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_to_activity_log(event);
        }
        while let Ok(snapshot) = self.snapshot_receiver.try_recv() {
            self.dashboard.apply_snapshot(snapshot);
        }
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyAction {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
            let _ = self.shutdown_sender.send(());
            return KeyAction::Quit;
        }

        match self.current_screen {
            // Any other key skips the splash screen
            Screen::Splash => self.current_screen = Screen::Dashboard,
            Screen::Dashboard => match code {
                KeyCode::Tab | KeyCode::Right => self.dashboard.next_tab(),
                KeyCode::BackTab | KeyCode::Left => self.dashboard.previous_tab(),
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    // A full queue already means a refresh is on its way.
                    let _ = self.refresh_sender.try_send(());
                }
                _ => {}
            },
        }
        KeyAction::Continue
    }

    pub fn screen(&self) -> Screen {
        self.current_screen
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.drain_channels();
        terminal.draw(|f| render(f, &app))?;

        if app.screen() == Screen::Splash && splash_start.elapsed() >= SPLASH_DURATION {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, app.dashboard()),
    }
}
