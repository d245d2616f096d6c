//! TUI color semantics and style constants.
//!
//! Tokyo Night palette, matching the colors of the web version of the site.
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Blue: interactive elements (shortcut keys, buttons, links)
//! - Green: banner and prompt
//! - Red / yellow / green dots: decorative window controls
//! - Dim: hints and metadata

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

pub const FG: Color = Color::Rgb(0xc0, 0xca, 0xf5);
pub const BLUE: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const GREEN: Color = Color::Rgb(0x9e, 0xce, 0x6a);
pub const COMMENT: Color = Color::Rgb(0x56, 0x5f, 0x89);

/// Header dots, left to right.
pub const DOT_COLORS: [Color; 3] = [
    Color::Rgb(0xf7, 0x76, 0x8e),
    Color::Rgb(0xe0, 0xaf, 0x68),
    Color::Rgb(0x9e, 0xce, 0x6a),
];

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

pub const STYLE_BANNER: Style = Style::new().fg(GREEN);

pub const STYLE_TEXT: Style = Style::new().fg(FG);

pub const STYLE_CURSOR: Style = Style::new().fg(BLUE).add_modifier(Modifier::BOLD);

/// Shortcut key inside a button: `[a]`.
pub const STYLE_KEY: Style = Style::new().fg(BLUE).add_modifier(Modifier::BOLD);

pub const STYLE_BUTTON_BORDER: Style = Style::new().fg(COMMENT);

pub const STYLE_HINT: Style = Style::new().fg(COMMENT);

/// Panel title: `nathan@perso:~/about`.
pub const STYLE_TITLE: Style = Style::new().fg(GREEN).add_modifier(Modifier::BOLD);

pub const STYLE_HEADING: Style = Style::new().fg(BLUE).add_modifier(Modifier::BOLD);

pub const STYLE_LINK: Style = Style::new().fg(BLUE).add_modifier(Modifier::UNDERLINED);

pub const STYLE_CLOSE: Style = Style::new().fg(COMMENT);

/// Panel border while entering.
pub const STYLE_PANEL_IN: Style = Style::new().fg(BLUE);

/// Panel border while exiting.
pub const STYLE_PANEL_OUT: Style = Style::new().fg(COMMENT).add_modifier(Modifier::DIM);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_use_the_window_control_palette() {
        assert_eq!(DOT_COLORS[0], Color::Rgb(247, 118, 142));
        assert_eq!(DOT_COLORS[1], Color::Rgb(224, 175, 104));
        assert_eq!(DOT_COLORS[2], Color::Rgb(158, 206, 106));
    }

    #[test]
    fn panel_styles_differ_by_transition() {
        assert_ne!(STYLE_PANEL_IN, STYLE_PANEL_OUT);
        assert!(STYLE_PANEL_OUT.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn links_are_underlined() {
        assert!(STYLE_LINK.add_modifier.contains(Modifier::UNDERLINED));
    }
}
