//! §decisions — the single-selection decision panel.
//!
//! A tab row lists every record; the slot below shows exactly one, faded by
//! the selector's swap transition. Records with a metric draw two bars
//! (baseline, after) whose fill animates once the panel has settled and is
//! within the viewport.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use folio_core::{DecisionRecord, DecisionSelector, Section};

use crate::app::AppState;
use crate::theme;
use crate::ui::sections::{heading, wrap};

const BAR_WIDTH: usize = 24;

pub fn render(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(Section::Decisions);

    lines.push(tab_row(&app.catalog.decisions, &app.decisions));
    lines.push(Line::from(Span::styled(
        "  h/l to switch",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    // Exactly one record occupies the slot each frame.
    let record = &app.catalog.decisions[app.decisions.visible()];
    let alpha = app.decisions.panel_alpha();

    lines.push(Line::from(Span::styled(
        record.question.clone(),
        theme::faded(theme::text(), alpha).add_modifier(Modifier::BOLD),
    )));
    for row in wrap(&record.answer, width.saturating_sub(2) as usize) {
        lines.push(Line::from(Span::styled(
            row,
            theme::faded(theme::text(), alpha),
        )));
    }

    if let Some(metric) = &record.metric {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            metric.label.clone(),
            theme::faded(theme::muted(), alpha),
        )));
        lines.push(metric_bar(
            "baseline",
            metric.baseline_pct,
            &app.decisions,
            theme::baseline_bar(),
            alpha,
        ));
        lines.push(metric_bar(
            "after",
            metric.after_pct,
            &app.decisions,
            theme::after_bar(),
            alpha,
        ));
    }

    lines
}

fn tab_row(records: &[DecisionRecord], selector: &DecisionSelector) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, record) in records.iter().enumerate() {
        let style = if i == selector.selected() {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("[{}]", record.id), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// One width-filling bar, animating from empty toward its percentage.
fn metric_bar(
    label: &str,
    pct: u8,
    selector: &DecisionSelector,
    style: ratatui::style::Style,
    alpha: f64,
) -> Line<'static> {
    let filled = fill_cells(selector.bar_fraction(pct), BAR_WIDTH);
    Line::from(vec![
        Span::styled(format!("{label:>10}  "), theme::faded(theme::muted(), alpha)),
        Span::styled("█".repeat(filled), theme::faded(style, alpha)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            theme::faded(theme::muted(), alpha),
        ),
        Span::styled(format!("  {pct:>3}%"), theme::faded(theme::muted(), alpha)),
    ])
}

fn fill_cells(fraction: f64, width: usize) -> usize {
    ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width)
}
