//! Section renderers — each produces the lines for one anchored block of
//! the page.

pub mod contact;
pub mod decisions;
pub mod outcomes;
pub mod profile;
pub mod signals;
pub mod work;

use ratatui::text::{Line, Span};

use folio_core::Section;

use crate::app::AppState;
use crate::theme;

pub fn render(section: Section, app: &AppState, width: u16) -> Vec<Line<'static>> {
    match section {
        Section::Profile => profile::render(app, width),
        Section::Work => work::render(app, width),
        Section::Signals => signals::render(app, width),
        Section::Decisions => decisions::render(app, width),
        Section::Outcomes => outcomes::render(app, width),
        Section::Contact => contact::render(app, width),
    }
}

/// Section heading with its anchor name.
pub(crate) fn heading(section: Section) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("§ {}", section.label()), theme::heading()),
            Span::styled(format!("  #{}", section.anchor()), theme::muted()),
        ]),
        Line::from(""),
    ]
}

/// Greedy word wrap. Paragraph wrapping would hide line counts from the
/// scroll math, so the page wraps its own text. Width is counted in chars,
/// not bytes, so non-ASCII catalog overrides wrap against columns.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_cols = 0;
    for word in text.split_whitespace() {
        let word_cols = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_cols = word_cols;
        } else if current_cols + 1 + word_cols <= width {
            current.push(' ');
            current.push_str(word);
            current_cols += 1 + word_cols;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_cols = word_cols;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five six seven eight", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 12);
        }
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap("superlongunbreakableword ok", 8);
        assert_eq!(lines[0], "superlongunbreakableword");
    }

    #[test]
    fn wrap_empty_text_is_one_blank_line() {
        assert_eq!(wrap("", 40), vec![String::new()]);
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        // "métier métier" is 13 chars but 15 bytes; byte counting would
        // split after the first word.
        let lines = wrap("métier métier métier", 13);
        assert_eq!(lines, vec!["métier métier".to_string(), "métier".to_string()]);
    }
}
