use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::slider::Clock;

/// Interval step for `+` / `-`.
pub const INTERVAL_STEP_MS: i64 = 500;

pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('n') | KeyCode::Right => app.next_slide(),
        KeyCode::Char('p') => app.pause(),
        KeyCode::Char('r') => app.resume(),
        KeyCode::Char('s') => app.stop(),
        KeyCode::Char(' ') | KeyCode::Enter => app.start(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_interval(INTERVAL_STEP_MS),
        KeyCode::Char('-') => app.adjust_interval(-INTERVAL_STEP_MS),
        KeyCode::Char('d') => app.destroy_slider(),
        KeyCode::Char('i') => app.init_slider(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // 1-based on the keyboard.
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 {
                app.go_to_slide(index - 1);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
