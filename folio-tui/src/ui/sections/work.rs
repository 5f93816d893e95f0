//! §work — project summaries.

use ratatui::text::{Line, Span};

use folio_core::Section;

use crate::app::AppState;
use crate::theme;
use crate::ui::sections::{heading, wrap};

pub fn render(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Work);

    for project in &app.catalog.projects {
        lines.push(Line::from(vec![
            Span::styled(project.title.clone(), theme::accent()),
            Span::styled(format!("  [{}]", project.stack.join(", ")), theme::muted()),
        ]));
        for row in wrap(&project.summary, width.saturating_sub(4) as usize) {
            lines.push(Line::from(Span::styled(format!("  {row}"), theme::text())));
        }
        lines.push(Line::from(""));
    }
    lines.pop(); // no trailing blank; the page builder adds the separator
    lines
}
