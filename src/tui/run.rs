//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Architecture: an input reader thread feeds a single mpsc channel.
//! The event loop blocks on that channel until either an event arrives
//! or the earliest timer deadline passes, then fires due timers.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::content::Section;
use crate::error::{Error, Result};

use super::state::{Action, App, AppEvent, Effect};
use super::update::{fire_due_timers, handle_action};
use super::view::{hit_test, render};

/// Upper bound on a single wait when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_secs(1);

/// Settings for an interactive session.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Capture pointer events so splash buttons and the close control are clickable.
    pub mouse: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Shortcuts are
/// plain lowercase letters; a held Ctrl or Alt disqualifies them.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Close),
        KeyCode::Char('o') => Some(Action::OpenLink),
        KeyCode::Char(c) => Section::from_key(c).map(Action::Shortcut),
        _ => None,
    }
}

/// Map a pointer event to the Action of the control under it.
///
/// Only a left-button press counts as a click.
pub fn map_mouse(mouse: MouseEvent, app: &App, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(app, area, Position::new(mouse.column, mouse.row))
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal(config: &RunConfig) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    if config.mouse {
        io::stdout().execute(EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    // Harmless when capture was never enabled
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INPUT THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
///
/// Key releases and repeats are dropped so each physical press routes once.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue, // focus, paste, key release
                Err(e) => {
                    warn!(error = %e, "input reader stopped");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the portfolio view until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the input reader, and runs the event loop.
pub fn run(config: RunConfig) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal(&config).map_err(Error::Terminal)?;

    let result = event_loop(&mut terminal);

    restore_terminal().map_err(Error::Terminal)?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let clock = Instant::now();
    let mut app = App::mount(clock.elapsed());
    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_input_reader(tx);
    info!("view mounted");

    loop {
        let area = terminal
            .draw(|frame| render(&app, frame))
            .map_err(Error::Terminal)?
            .area;

        if app.should_quit {
            break;
        }

        let now = clock.elapsed();
        let wait = app
            .next_deadline()
            .map_or(IDLE_WAIT, |due| due.saturating_sub(now));

        match rx.recv_timeout(wait) {
            Ok(event) => {
                let action = match event {
                    AppEvent::Key(key) => map_key(key),
                    AppEvent::Mouse(mouse) => map_mouse(mouse, &app, area),
                    AppEvent::Resize => None,
                };
                if let Some(action) = action {
                    debug!(?action, "input");
                    if let Some(effect) = handle_action(&mut app, &action, clock.elapsed()) {
                        handle_effect(effect);
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        fire_due_timers(&mut app, clock.elapsed());
    }

    app.unmount();
    info!("view unmounted");
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
///
/// Failures are logged; the view state is unaffected either way.
fn handle_effect(effect: Effect) {
    match effect {
        Effect::OpenLink { url } => match open_link(url) {
            Ok(()) => info!(url, "link opened"),
            Err(e) => warn!(error = %e, "could not open link"),
        },
    }
}

fn open_link(url: &'static str) -> Result<()> {
    open::that_detached(url).map_err(|source| Error::OpenLink { url, source })
}

// ============================================================================
// TESTS
// ============================================================================
