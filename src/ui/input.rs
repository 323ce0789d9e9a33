use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Page};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab {
        app.next_page();
        return;
    }

    match app.page() {
        Page::Welcome => match key.code {
            KeyCode::Enter => app.go_to(Page::Products),
            KeyCode::Char('o') => app.log_out(),
            _ => {}
        },
        Page::Products => match key.code {
            KeyCode::Up => app.select_prev(),
            KeyCode::Down => app.select_next(),
            KeyCode::Char('c') => app.toggle_product_code(),
            KeyCode::Char('n') => app.new_product(),
            KeyCode::Char('r') => app.reload(),
            KeyCode::Esc => app.clear_current_product(),
            _ => {}
        },
        Page::Login => match key.code {
            KeyCode::F(2) => app.toggle_mask(),
            KeyCode::Enter => app.submit_login(),
            KeyCode::Up | KeyCode::Down => app.login_mut().focus_next(),
            KeyCode::Backspace => app.login_mut().backspace(),
            KeyCode::Esc => app.login_mut().clear(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.login_mut().push_char(ch)
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c == ch)
}
