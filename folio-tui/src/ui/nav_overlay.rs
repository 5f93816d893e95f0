//! Collapsible navigation overlay — height and opacity follow the
//! disclosure's reveal fraction, so opening and closing animate and rapid
//! toggles retarget mid-flight.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use folio_core::Section;

use crate::app::AppState;
use crate::theme;

/// Rows inside the box: one per section plus a footer hint.
const NATURAL_HEIGHT: u16 = Section::ALL.len() as u16 + 3;
const OVERLAY_WIDTH: u16 = 28;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let reveal = app.nav.reveal();
    let height = revealed_height(reveal, area.height);
    if height == 0 {
        return;
    }

    let popup = Rect {
        x: area.x,
        y: area.y,
        width: OVERLAY_WIDTH.min(area.width),
        height,
    };
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::faded(theme::overlay_border(), reveal))
        .title(" sections ")
        .title_style(theme::faded(theme::overlay_border(), reveal));

    let mut lines: Vec<Line> = Vec::new();
    for section in Section::ALL {
        let marker = if section == app.nav.cursor() { "▸ " } else { "  " };
        let style = if section == app.nav.cursor() {
            theme::faded(theme::accent(), reveal).add_modifier(Modifier::BOLD)
        } else {
            theme::faded(theme::text(), reveal)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}  #{}", section.label(), section.anchor()),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        "  Enter:jump  Esc:close",
        theme::faded(theme::muted(), reveal),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn revealed_height(reveal: f64, available: u16) -> u16 {
    let natural = NATURAL_HEIGHT.min(available);
    (f64::from(natural) * reveal.clamp(0.0, 1.0)).round() as u16
}
