//! §outcomes — headline figures.

use ratatui::text::{Line, Span};

use folio_core::Section;

use crate::app::AppState;
use crate::theme;
use crate::ui::sections::heading;

pub fn render(app: &AppState, _width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Outcomes);

    for outcome in &app.catalog.outcomes {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>10}  ", outcome.figure), theme::accent_bold()),
            Span::styled(outcome.caption.clone(), theme::text()),
        ]));
    }
    lines
}
