use crate::ui::app::{App, Focus};
use crate::ui::search_bar::SearchBarIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows skipped by PageUp/PageDown in the gallery.
const PAGE_STEP: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The preview overlay captures input until closed
    if app.preview_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_preview(),
            KeyCode::Char('y') => app.copy_preview_url(),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::SearchBar => handle_search_bar_key(app, key),
        Focus::Gallery => handle_gallery_key(app, key),
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus() == Focus::SearchBar && !app.preview_visible() {
        app.edit_query(SearchBarIntent::Paste(text.to_string()));
    }
}

fn handle_search_bar_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.edit_query(SearchBarIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit(),
        KeyCode::Down => app.toggle_focus(),
        KeyCode::Backspace => app.edit_query(SearchBarIntent::Backspace),
        KeyCode::Delete => app.edit_query(SearchBarIntent::Delete),
        KeyCode::Left => app.edit_query(SearchBarIntent::MoveLeft),
        KeyCode::Right => app.edit_query(SearchBarIntent::MoveRight),
        KeyCode::Home => app.edit_query(SearchBarIntent::Home),
        KeyCode::End => app.edit_query(SearchBarIntent::End),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_query(SearchBarIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('/') => app.toggle_focus(),
        KeyCode::Up | KeyCode::Char('k') => {
            if app.selection() == 0 {
                app.toggle_focus();
            } else {
                app.move_selection(-1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_selection(PAGE_STEP),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter => app.activate_selection(),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
