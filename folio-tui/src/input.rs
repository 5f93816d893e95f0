//! Keyboard input dispatch — nav overlay first, then global keys, then
//! section-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_core::Section;

use crate::app::AppState;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The open nav overlay consumes input first.
    if app.nav.is_open() {
        handle_nav_overlay(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('n') => {
            app.nav.toggle();
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(section) = Section::from_index(c as usize - '1' as usize) {
                app.jump_to(section);
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.jump_to(app.active_section().prev());
            } else {
                app.jump_to(app.active_section().next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.jump_to(app.active_section().prev());
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_by(1);
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_by(-1);
            return;
        }
        KeyCode::Char('d') | KeyCode::PageDown => {
            app.scroll_by(app.half_page());
            return;
        }
        KeyCode::Char('u') | KeyCode::PageUp => {
            app.scroll_by(-app.half_page());
            return;
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.scroll_to(0);
            return;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_to(app.max_scroll());
            return;
        }
        _ => {}
    }

    // 3. Section-specific keys.
    if app.active_section() == Section::Decisions {
        handle_decisions_key(app, key);
    }
}

fn handle_nav_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => {
            app.nav.toggle();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.nav.cursor_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.nav.cursor_up();
        }
        KeyCode::Enter => {
            // Selecting a destination always closes the overlay.
            let section = app.nav.select_item();
            app.jump_to(section);
        }
        _ => {}
    }
}

fn handle_decisions_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.decisions.select_prev();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.decisions.select_next();
        }
        _ => {}
    }
}

/// Key bindings for the status bar and nav overlay footer.
pub fn key_hints() -> &'static str {
    " 1-6:jump  Tab:next  n:menu  j/k:scroll  d/u:half page  g/G:ends  q:quit"
}
