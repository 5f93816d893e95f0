//! §signals — working principles.

use ratatui::text::{Line, Span};

use folio_core::Section;

use crate::app::AppState;
use crate::theme;
use crate::ui::sections::{heading, wrap};

pub fn render(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Signals);

    for signal in &app.catalog.signals {
        lines.push(Line::from(vec![
            Span::styled("• ", theme::accent()),
            Span::styled(signal.label.clone(), theme::accent()),
        ]));
        for row in wrap(&signal.detail, width.saturating_sub(4) as usize) {
            lines.push(Line::from(Span::styled(format!("  {row}"), theme::muted())));
        }
    }
    lines
}
