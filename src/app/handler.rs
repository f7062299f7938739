use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::DownloadProgress(update) => {
            state.apply_progress(&update);
            vec![]
        }
        AppEvent::DownloadFinished { path } => state.finish_download(path),
        AppEvent::DownloadFailed(error) => state.fail_download(&error),
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep the activity indicator moving while yt-dlp runs
            if state.is_downloading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Paste(text) => {
            handle_paste(state, &text);
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_paste(state: &mut AppState, text: &str) {
    if state.message.is_some() {
        return;
    }
    if state.save_dialog.visible {
        state.save_dialog.input.insert_str(text);
        return;
    }
    state.focus = FocusPanel::Link;
    state.link.insert_str(text);
    state.on_link_edited();
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Message dialog captures all input when visible
    if state.message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.dismiss_dialog();
        }
        return vec![];
    }

    // Save dialog captures all input when visible
    if state.save_dialog.visible {
        return handle_save_dialog_key(state, key);
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        KeyCode::Esc => {
            if !state.is_downloading() {
                return vec![Action::Quit];
            }
            state.status_message = Some("Download in progress (Ctrl+C to abort and quit)".into());
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Platform => match key.code {
            KeyCode::Left | KeyCode::Up => state.cycle_platform(false),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => state.cycle_platform(true),
            KeyCode::Enter => state.focus = FocusPanel::Link,
            _ => {}
        },
        FocusPanel::Link => {
            if key.code == KeyCode::Enter {
                state.start_download();
            } else if edit_input(&mut state.link, key) {
                state.on_link_edited();
            }
        }
        FocusPanel::DownloadButton => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.start_download();
            }
        }
    }
    vec![]
}

fn handle_save_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => state.confirm_save().into_iter().collect(),
        KeyCode::Esc => {
            state.cancel_save();
            vec![]
        }
        _ => {
            edit_input(&mut state.save_dialog.input, key);
            vec![]
        }
    }
}

/// Apply a line-editing key. Returns whether the text changed.
fn edit_input(input: &mut InputState, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char('a') if ctrl => {
            input.move_home();
            return false;
        }
        KeyCode::Char('e') if ctrl => {
            input.move_end();
            return false;
        }
        KeyCode::Char(_) if ctrl => return false,
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => {
            input.move_left();
            return false;
        }
        KeyCode::Right => {
            input.move_right();
            return false;
        }
        KeyCode::Home => {
            input.move_home();
            return false;
        }
        KeyCode::End => {
            input.move_end();
            return false;
        }
        _ => return false,
    }
    true
}
