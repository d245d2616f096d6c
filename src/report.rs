//! Non-interactive section output.
//!
//! Pure functions: (Section, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::content::{BodyKind, Section, SectionContent};
use crate::error::Result;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, laid out like the panel body.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// JSON shape of a section.
#[derive(Debug, Serialize)]
struct SectionDoc<'a> {
    id: Section,
    title: String,
    #[serde(flatten)]
    content: &'a SectionContent,
}

/// Format one section for output.
pub fn format_section(section: Section, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(section)),
        OutputFormat::Json => format_json(section),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(section: Section) -> String {
    let content = section.content();
    let mut out = String::new();

    out.push_str(&format!("$ {}\n\n", section.title()));
    out.push_str(&format!("=== {} ===\n", content.heading));

    for entry in content.entries {
        match entry.href {
            Some(url) => out.push_str(&format!("{} <{}>\n", entry.text, url)),
            None => out.push_str(&format!("{}\n", entry.text)),
        }
        if content.kind == BodyKind::Prose {
            out.push('\n');
        }
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(section: Section) -> Result<String> {
    let doc = SectionDoc {
        id: section,
        title: section.title(),
        content: section.content(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ============================================================================
// TESTS
// ============================================================================
