//! End-to-end flow over the real embedded catalog: default selection,
//! decision swaps with interruption, nav overlay, and scroll progress.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{Catalog, Section, Transition};
use folio_tui::app::AppState;
use folio_tui::{input, ui};

/// Build an app with real page geometry: 80 columns, 20-row viewport.
fn app() -> AppState {
    let mut app = AppState::new(Catalog::embedded());
    let page = ui::page::build(&app, 80);
    app.set_layout(page.lines.len(), 20, page.offsets);
    app
}

fn key(app: &mut AppState, code: KeyCode) {
    input::handle_key(app, KeyEvent::from(code));
}

fn settle(app: &mut AppState, seconds: f64) {
    let steps = (seconds / 0.05).ceil() as usize;
    for _ in 0..steps {
        app.tick(0.05);
    }
}

#[test]
fn initial_load_selects_first_decision() {
    let app = app();
    let selected = &app.catalog.decisions[app.decisions.selected()];
    assert_eq!(selected.id, "constraint");
    let metric = selected.metric.as_ref().unwrap();
    assert_eq!(metric.baseline_pct, 45);
    assert_eq!(metric.after_pct, 100);
}

#[test]
fn clicking_through_decisions_swaps_panels() {
    let mut app = app();
    key(&mut app, KeyCode::Char('4'));
    assert_eq!(app.active_section(), Section::Decisions);

    // Second record: significance, 25% -> 61%.
    key(&mut app, KeyCode::Char('l'));
    settle(&mut app, 0.5);
    let visible = &app.catalog.decisions[app.decisions.visible()];
    assert_eq!(visible.id, "significance");
    let metric = visible.metric.as_ref().unwrap();
    assert_eq!((metric.baseline_pct, metric.after_pct), (25, 61));

    // Bars fill once the swap settles and the slot is in view.
    settle(&mut app, 1.0);
    assert!((app.decisions.bar_fraction(61) - 0.61).abs() < 1e-9);

    // Third record: equity, textual answer only.
    key(&mut app, KeyCode::Char('l'));
    settle(&mut app, 0.5);
    let visible = &app.catalog.decisions[app.decisions.visible()];
    assert_eq!(visible.id, "equity");
    assert!(visible.metric.is_none());
}

#[test]
fn interrupting_a_swap_discards_the_superseded_pair() {
    let mut app = app();
    key(&mut app, KeyCode::Char('4'));

    key(&mut app, KeyCode::Char('l')); // -> significance
    app.tick(0.05); // still exiting constraint
    key(&mut app, KeyCode::Char('l')); // -> equity, mid-flight

    match app.decisions.transition() {
        Transition::Swapping { from, to, .. } => {
            assert_eq!(from, 0); // restarted from what was on screen
            assert_eq!(to, 2);
        }
        Transition::Idle => panic!("expected an in-flight swap"),
    }

    settle(&mut app, 0.5);
    assert_eq!(app.catalog.decisions[app.decisions.visible()].id, "equity");
    assert!(!app.decisions.is_swapping());
}

#[test]
fn nav_overlay_selection_closes_and_jumps() {
    let mut app = app();
    key(&mut app, KeyCode::Char('n'));
    assert!(app.nav.is_open());
    for _ in 0..5 {
        key(&mut app, KeyCode::Char('j'));
    }
    key(&mut app, KeyCode::Enter);
    assert!(!app.nav.is_open());
    assert_eq!(app.active_section(), Section::Contact);
}

#[test]
fn scroll_progress_reaches_full_at_page_end() {
    let mut app = app();
    assert!(app.max_scroll() > 0, "embedded page should overflow 30 rows");
    key(&mut app, KeyCode::Char('G'));
    assert_eq!(app.scroll.raw(), 1.0);
    settle(&mut app, 3.0);
    assert!((app.scroll.smoothed() - 1.0).abs() < 1e-3);
}
