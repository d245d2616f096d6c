//! TUI state algebra: pure types, zero effects.
//!
//! These types define the whole view state space. The transition layer
//! (`update`) and the rendering layer (`view`) both program against them.
//!
//! Design principle: only primary state is stored. Anything the screen
//! shows that can be computed from it (which view is up, the panel's
//! entering/exiting style, the visibility phase) is derived on demand.

use std::time::Duration;

use crossterm::event::{KeyEvent, MouseEvent};

use crate::content::{Section, BLINK_INTERVAL, PHRASES};

use super::timer::Timers;
use super::typewriter::Typewriter;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The input reader thread is the only producer. Timer deadlines are not
/// events: the loop wakes for them via `recv_timeout`.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press from the crossterm reader thread.
    Key(KeyEvent),
    /// A pointer event, hit-tested against the current layout.
    Mouse(MouseEvent),
    /// Terminal resized; the next frame picks up the new size.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Open panel. `None` means the splash screen is shown.
    pub active: Option<Section>,

    /// Whether the panel is mounted. Lags `active` by the close grace period.
    pub show_terminal: bool,

    /// Blink phase of the typewriter cursor.
    pub cursor_visible: bool,

    pub typewriter: Typewriter,

    pub timers: Timers,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Panel transition style, derived from (show_terminal, active).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    Entering,
    Exiting,
}

/// Where the panel is in its mount/unmount cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not mounted.
    Closed,
    /// Mounted with a section active.
    Opening,
    /// Section cleared, still mounted for the grace period.
    Closing,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
///
/// The effects layer maps input to Actions. The transition function
/// decides what each Action means for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A section shortcut (`a`, `p`, `l`) or a click on its splash button.
    Shortcut(Section),
    /// `q` or a click on the panel's close control.
    Close,
    /// Open the active panel's outbound link (`o`).
    OpenLink,
    /// Exit the program (Ctrl+C).
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of routing an Action.
///
/// Pure code describes WHAT should happen; the effects boundary decides HOW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current section unchanged.
    Stay,
    /// Set the active section (`None` closes the panel).
    Section(Option<Section>),
    /// Quit the application.
    Quit,
    /// Execute a side effect without changing view state.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a URL to the system browser.
    OpenLink { url: &'static str },
}

// ============================================================================
// CONSTRUCTORS AND DERIVED STATE
// ============================================================================

impl App {
    /// Mount the view at `now`: splash screen, typewriter at the first
    /// phrase, blink and typewriter timers armed.
    pub fn mount(now: Duration) -> Self {
        let typewriter = Typewriter::new(PHRASES);
        let mut timers = Timers::default();
        timers.blink.schedule(now + BLINK_INTERVAL);
        timers.typewriter.schedule(now + typewriter.delay());

        App {
            active: None,
            show_terminal: false,
            cursor_visible: true,
            typewriter,
            timers,
            should_quit: false,
        }
    }

    /// True when the splash screen is the visible view.
    pub fn on_splash(&self) -> bool {
        self.active.is_none()
    }

    pub fn panel_style(&self) -> PanelStyle {
        if self.show_terminal && self.active.is_some() {
            PanelStyle::Entering
        } else {
            PanelStyle::Exiting
        }
    }

    pub fn visibility(&self) -> Visibility {
        match (self.show_terminal, self.active) {
            (false, _) => Visibility::Closed,
            (true, Some(_)) => Visibility::Opening,
            (true, None) => Visibility::Closing,
        }
    }

    /// Earliest pending timer deadline, for the event loop's wait.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Tear down: release every timer so nothing fires afterwards.
    pub fn unmount(&mut self) {
        self.timers.cancel_all();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::REVEAL_DELAY;

    #[test]
    fn mount_lands_on_splash() {
        let app = App::mount(Duration::ZERO);
        assert!(app.on_splash());
        assert!(!app.show_terminal);
        assert!(app.cursor_visible);
        assert_eq!(app.typewriter.typed_text(), "");
        assert!(!app.should_quit);
    }

    #[test]
    fn mount_arms_blink_and_typewriter_only() {
        let start = Duration::from_secs(3);
        let app = App::mount(start);
        assert_eq!(app.timers.blink.due(), Some(start + BLINK_INTERVAL));
        assert_eq!(app.timers.typewriter.due(), Some(start + REVEAL_DELAY));
        assert!(!app.timers.close.is_pending());
        assert_eq!(app.next_deadline(), Some(start + REVEAL_DELAY));
    }

    #[test]
    fn panel_style_requires_both_flags() {
        let mut app = App::mount(Duration::ZERO);
        assert_eq!(app.panel_style(), PanelStyle::Exiting);

        app.active = Some(Section::About);
        app.show_terminal = true;
        assert_eq!(app.panel_style(), PanelStyle::Entering);

        app.active = None;
        assert_eq!(app.panel_style(), PanelStyle::Exiting);
    }

    #[test]
    fn visibility_is_derived_from_stored_flags() {
        let mut app = App::mount(Duration::ZERO);
        assert_eq!(app.visibility(), Visibility::Closed);

        app.active = Some(Section::Links);
        app.show_terminal = true;
        assert_eq!(app.visibility(), Visibility::Opening);

        app.active = None;
        assert_eq!(app.visibility(), Visibility::Closing);
    }

    #[test]
    fn unmount_releases_timers() {
        let mut app = App::mount(Duration::ZERO);
        app.unmount();
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Section(Some(Section::About));
        let t2 = Transition::Quit;
        let t3 = Transition::Effect(Effect::OpenLink { url: "https://example.com" });

        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
        assert_ne!(t1, Transition::Stay);
    }
}
