use crate::ui::app::App;
use crate::ui::nav::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.nav().confirm_clear {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_clear(true),
            _ => app.confirm_clear(false),
        }
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.retry();
        return;
    }

    match key.code {
        KeyCode::Tab => return app.next_tab(),
        KeyCode::Up => return app.move_selection(-1),
        KeyCode::Down => return app.move_selection(1),
        KeyCode::PageUp => return app.move_selection(-10),
        KeyCode::PageDown => return app.move_selection(10),
        _ => {}
    }

    if app.nav().in_detail() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => app.leave_detail(),
            KeyCode::Char('r') => app.retry(),
            KeyCode::Char('f') => app.toggle_favorite(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    if app.nav().tab == Tab::Search {
        match key.code {
            KeyCode::Enter => app.open_selected(),
            KeyCode::Esc => app.clear_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_search_char(ch)
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('1') => app.switch_tab(Tab::Popular),
        KeyCode::Char('2') => app.switch_tab(Tab::Search),
        KeyCode::Char('3') => app.switch_tab(Tab::Favorites),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('f') => app.toggle_favorite(),
        KeyCode::Char('d') => app.remove_selected_favorite(),
        KeyCode::Char('C') => app.ask_clear_favorites(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
