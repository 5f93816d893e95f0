//! §profile — name, role, and bio.

use ratatui::text::{Line, Span};

use folio_core::Section;

use crate::app::AppState;
use crate::theme;
use crate::ui::sections::{heading, wrap};

pub fn render(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let profile = &app.catalog.profile;
    let mut lines = heading(Section::Profile);

    lines.push(Line::from(Span::styled(
        profile.name.clone(),
        theme::accent_bold(),
    )));
    lines.push(Line::from(vec![
        Span::styled(profile.role.clone(), theme::text()),
        Span::styled(format!("  ·  {}", profile.location), theme::muted()),
    ]));
    lines.push(Line::from(""));
    for row in wrap(&profile.summary, width.saturating_sub(2) as usize) {
        lines.push(Line::from(Span::styled(row, theme::text())));
    }
    lines
}
