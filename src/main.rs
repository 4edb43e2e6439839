// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # MagicBlock Records player.
//!
//! A terminal player for a fixed three track playlist.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! MPV backed media surface.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the playback state, manages the terminal
//!   lifecycle and renders the UI.
//! * The **Media Surface Worker** drives libmpv and reports playback progress.
//! * **Input and Tick Threads** capture keyboard and mouse input and trigger
//!   periodic redraws.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. All threads talk
//! to the main thread over a single `std::sync::mpsc` channel, so state
//! changes happen one event at a time.

mod catalog;
mod config;
mod events;
mod logging;
mod playback;
mod render;
mod surface;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info, warn};

use crate::{
    catalog::Catalog,
    config::AppConfig,
    events::{AppEvent, process_events},
    playback::Controller,
    render::ViewState,
    surface::{MediaSurface, MpvSurface},
    theme::Theme,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: Controller,
    pub surface: Box<dyn MediaSurface>,

    pub view: ViewState,
}

impl App {
    /// Create a new instance of application state, backed by MPV.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let surface = MpvSurface::new(config.mpv_options(), event_tx.clone());

        Self::with_surface(config, Box::new(surface), event_tx, event_rx)
    }

    /// Create application state around an existing media surface.
    pub fn with_surface(
        config: &AppConfig,
        surface: Box<dyn MediaSurface>,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
    ) -> Result<Self> {
        let catalog = Catalog::builtin().context("Invalid track catalog")?;

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller: Controller::new(catalog, config.initial_volume),
            surface,
            view: ViewState::new(config.layout, config.wide_min_width),
        })
    }

    /// Hands the first track, paused, to the media surface.
    pub fn start(&mut self) -> Result<()> {
        let commands = self.controller.startup_commands();
        surface::apply(self.surface.as_ref(), &commands).context("Failed to start media surface")
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Logging is best effort, the player works without it
    let log_result = logging::init(&config);
    if let Err(e) = &loaded {
        warn!("Invalid configuration, using defaults: {}", e);
    }

    let mut app = App::new(&config).context("Failed to initalise application")?;
    app.start()?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = log_result {
        eprintln!("Logging disabled: {:#}", e);
    }

    match &res {
        Ok(()) => info!("Exiting"),
        Err(e) => error!("Application error: {:#}", e),
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture for clicks, drags and hover.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    AppEvent::Key(key)
                }
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!("Terminal input failed: {}", e);
                    break;
                }
            };
            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
