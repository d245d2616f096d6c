//! Portfolio content: sections, phrases, banner and timing.
//!
//! Everything here is fixed literal data baked into the binary.
//! Nothing is read from disk or the environment.

use std::time::Duration;

use serde::Serialize;

// ============================================================================
// TIMING
// ============================================================================

/// Cursor blink period. Each elapsed period flips the cursor once.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Delay before revealing the next character of a phrase.
pub const REVEAL_DELAY: Duration = Duration::from_millis(90);

/// How long a fully typed phrase stays on screen.
pub const HOLD_DELAY: Duration = Duration::from_millis(1200);

/// Pause after the hold before the line is cleared for the next phrase.
pub const RESET_DELAY: Duration = Duration::from_millis(500);

/// Grace period the panel stays mounted after it is closed.
pub const CLOSE_GRACE: Duration = Duration::from_millis(300);

// ============================================================================
// SPLASH
// ============================================================================

/// Block-letter banner shown on the splash screen.
pub const BANNER: [&str; 6] = [
    "███╗   ██╗ █████╗ ████████╗██╗  ██╗ █████╗ ███╗   ██╗",
    "████╗  ██║██╔══██╗╚══██╔══╝██║  ██║██╔══██╗████╗  ██║",
    "██╔██╗ ██║███████║   ██║   ███████║███████║██╔██╗ ██║",
    "██║╚██╗██║██╔══██║   ██║   ██╔══██║██╔══██║██║╚██╗██║",
    "██║ ╚████║██║  ██║   ██║   ██║  ██║██║  ██║██║ ╚████║",
    "╚═╝  ╚═══╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝",
];

/// Phrases cycled by the typewriter line, in order.
pub const PHRASES: &[&str] = &["CS Student", "Lover of computers", "Use Neovim btw"];

/// Glyph drawn after the typed text.
pub const CURSOR_GLYPH: &str = "|";

/// Hint under the splash buttons.
pub const SPLASH_HINT: &str = "Press a, p, l or click a button like a noob";

/// Label of the panel's close control.
pub const CLOSE_LABEL: &str = "[q] Quit";

const PROMPT: &str = "nathan@perso";

// ============================================================================
// SECTIONS
// ============================================================================

/// One of the navigable panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Projects,
    Links,
}

impl Section {
    /// All sections in splash-button order.
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Links];

    /// Shortcut key that opens this section from the splash screen.
    pub fn key(self) -> char {
        match self {
            Section::About => 'a',
            Section::Projects => 'p',
            Section::Links => 'l',
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Links => "Links",
        }
    }

    /// Stable identifier, used in the panel title.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Links => "links",
        }
    }

    /// Reverse lookup from a shortcut key. Case-sensitive.
    pub fn from_key(key: char) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Fixed body shown when this section's panel is open.
    pub fn content(self) -> &'static SectionContent {
        match self {
            Section::About => &ABOUT,
            Section::Projects => &PROJECTS,
            Section::Links => &LINKS,
        }
    }

    /// Synthetic shell-prompt title: `nathan@perso:~/projects`.
    pub fn title(self) -> String {
        format!("{}:~/{}", PROMPT, self.id())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// PANEL BODIES
// ============================================================================

/// How a section's entries are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Paragraphs separated by a blank line.
    Prose,
    /// One entry per line.
    List,
}

/// A line of panel content, optionally pointing somewhere outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

/// Everything rendered in a panel body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionContent {
    pub heading: &'static str,
    pub kind: BodyKind,
    pub entries: &'static [Entry],
}

impl SectionContent {
    /// First outbound link in this body, if any.
    pub fn link(&self) -> Option<&'static str> {
        self.entries.iter().find_map(|e| e.href)
    }
}

const fn text(text: &'static str) -> Entry {
    Entry { text, href: None }
}

static ABOUT: SectionContent = SectionContent {
    heading: "About",
    kind: BodyKind::Prose,
    entries: &[
        text(
            "~ 3rd year Computer Science student, passionate about software \
             development and low-level systems.",
        ),
        text("~ I use Neovim btw."),
    ],
};

static PROJECTS: SectionContent = SectionContent {
    heading: "Projects",
    kind: BodyKind::List,
    entries: &[
        text("~ Game dev: doodle jump like in C/C++"),
        text("~ Desktop dev: matrix solver in C++ (using Qt)"),
        text("~ Http server in C"),
        text("~ Other... (learning Rust btw)"),
    ],
};

/// Profile link rendered in the Links panel.
pub const GITHUB_URL: &str = "https://github.com/nathbns";

static LINKS: SectionContent = SectionContent {
    heading: "Links",
    kind: BodyKind::List,
    entries: &[Entry {
        text: "~ GitHub",
        href: Some(GITHUB_URL),
    }],
};

// ============================================================================
// TESTS
// ============================================================================
