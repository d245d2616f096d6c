//! Typewriter animation as an explicit state machine.
//!
//! ```text
//!   Typing ──(last char revealed)──▶ Pausing ──(hold)──▶ Resetting
//!     ▲                                                     │
//!     └──────────────(clear, next phrase)───────────────────┘
//! ```
//!
//! The machine never touches a clock. [`Typewriter::delay`] says how long the
//! current phase waits; the caller schedules one timer for that and calls
//! [`Typewriter::advance`] when it fires.

use std::time::Duration;

use crate::content::{HOLD_DELAY, RESET_DELAY, REVEAL_DELAY};

/// Where the animation is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing one character per step.
    Typing,
    /// Whole phrase shown, waiting before the reset.
    Pausing,
    /// Typing has stopped; next step clears the line.
    Resetting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    /// Number of characters (not bytes) revealed.
    revealed: usize,
    phase: Phase,
}

impl Typewriter {
    /// Start at the first phrase with nothing revealed.
    pub fn new(phrases: &'static [&'static str]) -> Self {
        let mut tw = Typewriter {
            phrases,
            index: 0,
            revealed: 0,
            phase: Phase::Typing,
        };
        tw.settle();
        tw
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// True while revealing or holding; false once the reset is pending.
    pub fn typing(&self) -> bool {
        self.phase != Phase::Resetting
    }

    /// The phrase currently being typed.
    pub fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    /// The revealed prefix of the current phrase.
    pub fn typed_text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.revealed)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// How long the current phase waits before the next step.
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => REVEAL_DELAY,
            Phase::Pausing => HOLD_DELAY,
            Phase::Resetting => RESET_DELAY,
        }
    }

    /// Perform the step the current phase was waiting for.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::Typing => {
                self.revealed += 1;
                self.settle();
            }
            Phase::Pausing => self.phase = Phase::Resetting,
            Phase::Resetting => {
                self.revealed = 0;
                self.index = (self.index + 1) % self.phrases.len().max(1);
                self.phase = Phase::Typing;
                self.settle();
            }
        }
    }

    /// A fully revealed phrase (including an empty one) goes straight to Pausing.
    fn settle(&mut self) {
        if self.phase == Phase::Typing && self.revealed >= self.phrase().chars().count() {
            self.phase = Phase::Pausing;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
