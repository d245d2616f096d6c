//! Pure state transitions.
//!
//! This is the core logic of the TUI. Fully testable without a terminal:
//! every function takes `now` explicitly instead of reading a clock.
//!
//! - [`update`]: route an Action for the current mode (splash or panel)
//! - [`apply`]: commit a Transition, driving the panel's visibility timer
//! - [`fire_due_timers`]: run blink, typewriter and close deadlines

use std::time::Duration;

use tracing::{debug, info};

use crate::content::{Section, BLINK_INTERVAL, CLOSE_GRACE};

use super::state::{Action, App, Effect, Transition};
use super::timer::TimerKind;

/// Pure routing function.
///
/// Two input modes, selected only by whether a section is active:
/// on the splash screen shortcuts open panels; inside a panel only
/// Close (and the panel's own link) do anything. Quit works everywhere.
pub fn update(active: Option<Section>, action: &Action) -> Transition {
    match active {
        None => update_splash(action),
        Some(section) => update_panel(section, action),
    }
}

/// Splash: section shortcuts open their panel.
fn update_splash(action: &Action) -> Transition {
    match action {
        Action::Shortcut(section) => Transition::Section(Some(*section)),
        Action::Quit => Transition::Quit,
        Action::Close | Action::OpenLink => Transition::Stay,
    }
}

/// Panel: close, follow the panel's link, or quit. Shortcuts are ignored.
fn update_panel(section: Section, action: &Action) -> Transition {
    match action {
        Action::Close => Transition::Section(None),
        Action::OpenLink => match section.content().link() {
            Some(url) => Transition::Effect(Effect::OpenLink { url }),
            None => Transition::Stay,
        },
        Action::Quit => Transition::Quit,
        Action::Shortcut(_) => Transition::Stay,
    }
}

/// Commit a transition to the app. Returns the effect to execute, if any.
pub fn apply(app: &mut App, transition: Transition, now: Duration) -> Option<Effect> {
    match transition {
        Transition::Stay => None,
        Transition::Section(section) => {
            set_section(app, section, now);
            None
        }
        Transition::Quit => {
            app.should_quit = true;
            None
        }
        Transition::Effect(effect) => Some(effect),
    }
}

/// Route and commit in one step.
pub fn handle_action(app: &mut App, action: &Action, now: Duration) -> Option<Effect> {
    let transition = update(app.active, action);
    apply(app, transition, now)
}

/// Set the active section and drive the panel mount state.
///
/// Opening mounts the panel immediately and discards any pending close.
/// Closing a mounted panel keeps it mounted for the grace period.
pub fn set_section(app: &mut App, section: Option<Section>, now: Duration) {
    if app.active == section {
        return;
    }
    app.active = section;

    match section {
        Some(section) => {
            app.timers.close.cancel();
            app.show_terminal = true;
            info!(%section, visibility = ?app.visibility(), "section opened");
        }
        None => {
            if app.show_terminal {
                app.timers.close.schedule(now + CLOSE_GRACE);
            }
            info!(visibility = ?app.visibility(), "section closed");
        }
    }
}

/// Fire every timer whose deadline is at or before `now`, earliest first.
///
/// Rescheduling is relative to the deadline that fired, so a late wakeup
/// catches up instead of drifting.
pub fn fire_due_timers(app: &mut App, now: Duration) {
    while let Some(kind) = app.timers.earliest_due(now) {
        match kind {
            TimerKind::Blink => {
                if let Some(at) = app.timers.blink.fire(now) {
                    app.cursor_visible = !app.cursor_visible;
                    app.timers.blink.schedule(at + BLINK_INTERVAL);
                }
            }
            TimerKind::Typewriter => {
                if let Some(at) = app.timers.typewriter.fire(now) {
                    app.typewriter.advance();
                    app.timers.typewriter.schedule(at + app.typewriter.delay());
                }
            }
            TimerKind::Close => {
                if app.timers.close.fire(now).is_some() {
                    app.show_terminal = false;
                    debug!(visibility = ?app.visibility(), "panel unmounted");
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HOLD_DELAY, PHRASES, RESET_DELAY, REVEAL_DELAY};
    use crate::tui::state::Visibility;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn splash() -> App {
        App::mount(Duration::ZERO)
    }

    fn with_panel(section: Section) -> App {
        let mut app = splash();
        set_section(&mut app, Some(section), Duration::ZERO);
        app
    }

    // -- Routing: splash --

    #[test]
    fn splash_shortcuts_open_matching_section() {
        for section in Section::ALL {
            assert_eq!(
                update(None, &Action::Shortcut(section)),
                Transition::Section(Some(section))
            );
        }
    }

    #[test]
    fn splash_ignores_close_and_link() {
        assert_eq!(update(None, &Action::Close), Transition::Stay);
        assert_eq!(update(None, &Action::OpenLink), Transition::Stay);
    }

    #[test]
    fn quit_works_in_both_modes() {
        assert_eq!(update(None, &Action::Quit), Transition::Quit);
        assert_eq!(update(Some(Section::About), &Action::Quit), Transition::Quit);
    }

    // -- Routing: panel --

    #[test]
    fn panel_close_clears_section() {
        for section in Section::ALL {
            assert_eq!(update(Some(section), &Action::Close), Transition::Section(None));
        }
    }

    #[test]
    fn panel_ignores_shortcuts() {
        for active in Section::ALL {
            for pressed in Section::ALL {
                assert_eq!(update(Some(active), &Action::Shortcut(pressed)), Transition::Stay);
            }
        }
    }

    #[test]
    fn open_link_only_in_links_panel() {
        assert_eq!(
            update(Some(Section::Links), &Action::OpenLink),
            Transition::Effect(Effect::OpenLink {
                url: crate::content::GITHUB_URL
            })
        );
        assert_eq!(update(Some(Section::About), &Action::OpenLink), Transition::Stay);
        assert_eq!(update(Some(Section::Projects), &Action::OpenLink), Transition::Stay);
    }

    #[test]
    fn handle_action_returns_effect_without_changing_section() {
        let mut app = with_panel(Section::Links);
        let effect = handle_action(&mut app, &Action::OpenLink, ms(10));
        assert!(matches!(effect, Some(Effect::OpenLink { .. })));
        assert_eq!(app.active, Some(Section::Links));
    }

    #[test]
    fn handle_action_quit_sets_flag() {
        let mut app = splash();
        assert_eq!(handle_action(&mut app, &Action::Quit, ms(0)), None);
        assert!(app.should_quit);
    }

    // -- Terminal visibility --

    #[test]
    fn open_mounts_panel_without_delay() {
        let mut app = splash();
        handle_action(&mut app, &Action::Shortcut(Section::About), ms(42));
        assert_eq!(app.active, Some(Section::About));
        assert!(app.show_terminal);
        assert_eq!(app.visibility(), Visibility::Opening);
        assert!(!app.timers.close.is_pending());
    }

    #[test]
    fn close_keeps_panel_mounted_for_grace_period() {
        let mut app = with_panel(Section::Projects);
        handle_action(&mut app, &Action::Close, ms(1000));
        assert!(app.on_splash());
        assert!(app.show_terminal);
        assert_eq!(app.visibility(), Visibility::Closing);

        fire_due_timers(&mut app, ms(1299));
        assert!(app.show_terminal);

        fire_due_timers(&mut app, ms(1300));
        assert!(!app.show_terminal);
        assert_eq!(app.visibility(), Visibility::Closed);
    }

    #[test]
    fn reopen_during_grace_discards_close_timer() {
        let mut app = with_panel(Section::Projects);
        handle_action(&mut app, &Action::Close, ms(1000));
        handle_action(&mut app, &Action::Shortcut(Section::Links), ms(1100));
        assert!(!app.timers.close.is_pending());

        fire_due_timers(&mut app, ms(5000));
        assert!(app.show_terminal);
        assert_eq!(app.active, Some(Section::Links));
    }

    #[test]
    fn close_when_not_mounted_schedules_nothing() {
        let mut app = splash();
        set_section(&mut app, None, ms(0));
        assert!(!app.timers.close.is_pending());
    }

    // -- Cursor blink --

    #[test]
    fn blink_toggles_twice_per_second() {
        let mut app = splash();
        let mut toggles = 0;
        let mut last = app.cursor_visible;
        for t in (0..=1000).step_by(10) {
            fire_due_timers(&mut app, ms(t));
            if app.cursor_visible != last {
                toggles += 1;
                last = app.cursor_visible;
            }
        }
        assert_eq!(toggles, 2);
        assert!(app.cursor_visible);
    }

    #[test]
    fn blink_is_independent_of_panel_state() {
        let mut app = with_panel(Section::About);
        fire_due_timers(&mut app, BLINK_INTERVAL);
        assert!(!app.cursor_visible);
        handle_action(&mut app, &Action::Close, BLINK_INTERVAL);
        fire_due_timers(&mut app, BLINK_INTERVAL * 2);
        assert!(app.cursor_visible);
    }

    #[test]
    fn late_wakeup_catches_up_blinks() {
        let mut app = splash();
        fire_due_timers(&mut app, ms(1500));
        // Three toggles from a visible start
        assert!(!app.cursor_visible);
        assert_eq!(app.timers.blink.due(), Some(ms(2000)));
    }

    // -- Typewriter --

    #[test]
    fn typewriter_reveals_first_phrase_then_resets() {
        let mut app = splash();
        let phrase = PHRASES[0];
        let reveal_done = REVEAL_DELAY * phrase.len() as u32;

        fire_due_timers(&mut app, reveal_done);
        assert_eq!(app.typewriter.typed_text(), phrase);
        assert!(app.typewriter.typing());

        let hold_done = reveal_done + HOLD_DELAY;
        fire_due_timers(&mut app, hold_done);
        assert!(!app.typewriter.typing());
        assert_eq!(app.typewriter.typed_text(), phrase);

        fire_due_timers(&mut app, hold_done + RESET_DELAY);
        assert_eq!(app.typewriter.typed_text(), "");
        assert!(app.typewriter.typing());
        assert_eq!(app.typewriter.phrase_index(), 1 % PHRASES.len());
    }

    #[test]
    fn typewriter_keeps_exactly_one_pending_timer() {
        let mut app = splash();
        for t in (0..5000).step_by(37) {
            fire_due_timers(&mut app, ms(t));
            let due = app.timers.typewriter.due().expect("typewriter always armed");
            assert!(due > ms(t));
        }
    }

    #[test]
    fn typewriter_cycle_returns_to_first_phrase() {
        let mut app = splash();
        let cycle: Duration = PHRASES
            .iter()
            .map(|p| REVEAL_DELAY * p.len() as u32 + HOLD_DELAY + RESET_DELAY)
            .sum();
        fire_due_timers(&mut app, cycle);
        assert_eq!(app.typewriter.phrase_index(), 0);
        assert_eq!(app.typewriter.typed_text(), "");
    }

    #[test]
    fn unmounted_app_fires_nothing() {
        let mut app = splash();
        app.unmount();
        let before = app.clone();
        fire_due_timers(&mut app, ms(10_000));
        assert_eq!(app, before);
    }
}
