//! Keyboard handling for the App.
//!
//! The search input is always focused, so printable characters go to the
//! filter and navigation lives on keys that never collide with typing
//! (arrows, Esc, Ctrl+C).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

/// Handle a key press. Returns `true` if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return true;
        }
        KeyCode::Left => {
            app.prev_page();
        }
        KeyCode::Right => {
            app.next_page();
        }
        KeyCode::Up => {
            app.scroll = app.scroll.saturating_sub(1);
            app.mark_dirty();
        }
        KeyCode::Down => {
            app.scroll = app.scroll.saturating_add(1);
            app.mark_dirty();
        }
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.apply_search();
            }
        }
        KeyCode::Backspace => {
            if app.search_input.pop().is_some() {
                app.apply_search();
            }
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.apply_search();
        }
        _ => {}
    }
    false
}
