//! Full-page line builder — six sections concatenated into one scrollable
//! column. The whole page is rebuilt every frame; at this size partial
//! updates buy nothing.

use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::layout::Rect;

use folio_core::Section;

use crate::app::AppState;
use crate::ui::sections;

/// The rendered page: its lines plus the start offset of each section.
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub offsets: Vec<(Section, usize)>,
}

/// Build the page for a given terminal width.
pub fn build(app: &AppState, width: u16) -> PageLayout {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut offsets = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        offsets.push((section, lines.len()));
        lines.extend(sections::render(section, app, width));
        lines.push(Line::from(""));
    }

    PageLayout { lines, offsets }
}

/// Render the slice of the page under the scroll offset.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let layout = build(app, area.width);
    let start = app.scroll_offset.min(layout.lines.len());
    let end = (start + area.height as usize).min(layout.lines.len());
    let visible: Vec<Line> = layout.lines[start..end].to_vec();
    f.render_widget(Paragraph::new(visible), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Catalog;

    #[test]
    fn sections_appear_in_anchor_order() {
        let app = AppState::new(Catalog::embedded());
        let layout = build(&app, 80);
        let order: Vec<Section> = layout.offsets.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::ALL.to_vec());
        // Offsets are strictly increasing: every section renders something.
        for pair in layout.offsets.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
        assert!(layout.lines.len() > layout.offsets.last().unwrap().1);
    }

    #[test]
    fn narrow_width_still_builds() {
        let app = AppState::new(Catalog::embedded());
        let layout = build(&app, 20);
        assert!(!layout.lines.is_empty());
    }
}
