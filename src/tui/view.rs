//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` shows exactly one of two views: the splash screen when no
//! section is active, the terminal panel otherwise. Layout is computed by
//! standalone functions so the effects layer can hit-test pointer clicks
//! against the same rectangles that were drawn.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{
    BodyKind, Section, SectionContent, BANNER, CLOSE_LABEL, CURSOR_GLYPH, SPLASH_HINT,
};

use super::state::{Action, App, PanelStyle};
use super::theme;

const BUTTON_WIDTH: u16 = 16;
const BUTTON_SPACING: u16 = 2;
const PANEL_WIDTH: u16 = 80;
const PANEL_HEIGHT: u16 = 20;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current view to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let [content, help] = screen_layout(frame.area());

    match app.active {
        None => render_splash(app, frame, content),
        Some(section) => render_panel(app, section, frame, content),
    }

    frame.render_widget(render_help(app.active), help);
}

/// Map a pointer press to the Action of the control under it.
pub fn hit_test(app: &App, area: Rect, position: Position) -> Option<Action> {
    let [content, _] = screen_layout(area);

    match app.active {
        None => Section::ALL
            .into_iter()
            .zip(splash_layout(content).buttons)
            .find(|(_, rect)| rect.contains(position))
            .map(|(section, _)| Action::Shortcut(section)),
        Some(_) => panel_layout(content)
            .close
            .contains(position)
            .then_some(Action::Close),
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Content on top, one help line at the bottom.
fn screen_layout(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area)
}

/// Rectangles of the splash screen, vertically centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashLayout {
    pub banner: Rect,
    pub typed: Rect,
    /// One per section, in [`Section::ALL`] order.
    pub buttons: [Rect; 3],
    pub hint: Rect,
}

/// Splash button rectangles for a full-screen `area`.
pub fn splash_buttons(area: Rect) -> [Rect; 3] {
    let [content, _] = screen_layout(area);
    splash_layout(content).buttons
}

pub fn splash_layout(area: Rect) -> SplashLayout {
    let [banner, _, typed, _, buttons, _, hint] = Layout::vertical([
        Constraint::Length(BANNER.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    let buttons = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 3])
        .flex(Flex::Center)
        .spacing(BUTTON_SPACING)
        .areas(buttons);

    SplashLayout {
        banner,
        typed,
        buttons,
        hint,
    }
}

/// Rectangles of the terminal panel, centered in `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Outer bordered window.
    pub window: Rect,
    /// Dots and title.
    pub header: Rect,
    /// `[q] Quit` control at the right end of the header.
    pub close: Rect,
    pub body: Rect,
}

pub fn panel_layout(area: Rect) -> PanelLayout {
    let width = area.width.min(PANEL_WIDTH);
    let height = area.height.min(PANEL_HEIGHT);
    let window = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let inner = window.inner(Margin::new(2, 1));
    let [header, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let close_width = (CLOSE_LABEL.chars().count() as u16).min(header.width);
    let close = Rect {
        x: header.right() - close_width,
        y: header.y,
        width: close_width,
        height: header.height,
    };

    PanelLayout {
        window,
        header,
        close,
        body,
    }
}

// ============================================================================
// SPLASH
// ============================================================================

fn render_splash(app: &App, frame: &mut Frame, area: Rect) {
    let layout = splash_layout(area);

    let banner: Vec<Line> = BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme::STYLE_BANNER)))
        .collect();
    frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), layout.banner);

    frame.render_widget(
        Paragraph::new(typed_line(app)).alignment(Alignment::Center),
        layout.typed,
    );

    for (section, rect) in Section::ALL.into_iter().zip(layout.buttons) {
        frame.render_widget(section_button(section), rect);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(SPLASH_HINT, theme::STYLE_HINT)).alignment(Alignment::Center),
        layout.hint,
    );
}

/// Typed text plus the cursor. A hidden cursor is a space so the width holds.
fn typed_line(app: &App) -> Line<'static> {
    let cursor = if app.cursor_visible { CURSOR_GLYPH } else { " " };
    Line::from(vec![
        Span::styled(app.typewriter.typed_text(), theme::STYLE_TEXT),
        Span::styled(cursor, theme::STYLE_CURSOR),
    ])
}

fn section_button(section: Section) -> Paragraph<'static> {
    let label = Line::from(vec![
        Span::styled(format!("[{}]", section.key()), theme::STYLE_KEY),
        Span::raw(" "),
        Span::styled(section.label(), theme::STYLE_TEXT),
    ]);

    Paragraph::new(label).alignment(Alignment::Center).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::STYLE_BUTTON_BORDER),
    )
}

// ============================================================================
// TERMINAL PANEL
// ============================================================================

fn render_panel(app: &App, section: Section, frame: &mut Frame, area: Rect) {
    let layout = panel_layout(area);

    let border = match app.panel_style() {
        PanelStyle::Entering => theme::STYLE_PANEL_IN,
        PanelStyle::Exiting => theme::STYLE_PANEL_OUT,
    };
    frame.render_widget(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border),
        layout.window,
    );

    frame.render_widget(Paragraph::new(header_line(section)), layout.header);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, theme::STYLE_CLOSE)),
        layout.close,
    );

    let body = Paragraph::new(body_lines(section.content())).wrap(Wrap { trim: false });
    frame.render_widget(body, layout.body);
}

fn header_line(section: Section) -> Line<'static> {
    let mut spans: Vec<Span> = theme::DOT_COLORS
        .iter()
        .flat_map(|&color| [Span::styled("●", color), Span::raw(" ")])
        .collect();
    spans.push(Span::raw(" "));
    spans.push(Span::styled(section.title(), theme::STYLE_TITLE));
    Line::from(spans)
}

fn body_lines(content: &SectionContent) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(content.heading, theme::STYLE_HEADING)),
        Line::from(""),
    ];

    for entry in content.entries {
        let line = match entry.href {
            Some(url) => {
                let (prefix, label) = match entry.text.strip_prefix("~ ") {
                    Some(label) => ("~ ", label),
                    None => ("", entry.text),
                };
                Line::from(vec![
                    Span::styled(prefix, theme::STYLE_TEXT),
                    Span::styled(label, theme::STYLE_LINK),
                    Span::styled(format!("  {}", url), theme::STYLE_HINT),
                ])
            }
            None => Line::from(Span::styled(entry.text, theme::STYLE_TEXT)),
        };
        lines.push(line);

        if content.kind == BodyKind::Prose {
            lines.push(Line::from(""));
        }
    }

    lines
}

// ============================================================================
// HELP LINE
// ============================================================================

fn render_help(active: Option<Section>) -> Paragraph<'static> {
    let help_text = match active {
        None => "[a] about  [p] projects  [l] links  ^C exit",
        Some(section) if section.content().link().is_some() => {
            "[q] close  [o] open link  ^C exit"
        }
        Some(_) => "[q] close  ^C exit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// TESTS
// ============================================================================
