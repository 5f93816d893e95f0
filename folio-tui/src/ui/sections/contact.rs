//! §contact — external one-shot destinations. Rendered for copying; the
//! page never follows them itself.

use ratatui::text::{Line, Span};

use folio_core::Section;

use crate::app::AppState;
use crate::theme;
use crate::ui::sections::heading;

pub fn render(app: &AppState, _width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Contact);

    for link in &app.catalog.contacts {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>10}  ", link.label), theme::accent()),
            Span::styled(link.url.clone(), theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "select a URL with your terminal to open it",
        theme::muted(),
    )));
    lines
}
