use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::contact::ContactIntent;
use crate::ui::app::{App, Page};

/// Lines moved per Up/Down press on scrollable pages.
const SCROLL_STEP: u16 = 1;
const PAGE_STEP: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_theme();
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.next_page();
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.prev_page();
        return;
    }

    if app.page() == Page::Contact {
        handle_contact_key(app, key);
    } else {
        handle_browse_key(app, key);
    }
}

/// Keys on the read-only pages. Plain letters are free here because there
/// is no text input.
fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.set_page(Page::ALL[index]);
        }
        KeyCode::Tab => app.next_page(),
        KeyCode::BackTab => app.prev_page(),
        KeyCode::Left if app.page() == Page::Projects => app.prev_filter(),
        KeyCode::Right if app.page() == Page::Projects => app.next_filter(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(SCROLL_STEP),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(SCROLL_STEP),
        KeyCode::PageUp => app.scroll_up(PAGE_STEP),
        KeyCode::PageDown => app.scroll_down(PAGE_STEP),
        _ => {}
    }
}

fn handle_contact_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_contact();
        return;
    }

    match key.code {
        KeyCode::Esc => app.set_page(Page::Home),
        KeyCode::Tab | KeyCode::Down => app.dispatch_contact(ContactIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_contact(ContactIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_contact(ContactIntent::Backspace),
        KeyCode::Enter => {
            if app.contact_snapshot().focused.is_multiline() {
                app.dispatch_contact(ContactIntent::InsertChar('\n'));
            } else {
                app.dispatch_contact(ContactIntent::FocusNext);
            }
        }
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_contact(ContactIntent::InsertChar(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
