//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Keyboard contract: right arrow or enter advances, left arrow retreats.
//! `g` opens the go-to prompt, `q` and Ctrl+C quit. Everything else is
//! ignored.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, GotoPrompt};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(Event::Key(key)) => handle_key(app, key),
        // Resizes redraw on the next pass; nothing to mutate.
        UiEvent::Terminal(_) => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    if app.goto.is_some() {
        return handle_goto_key(app, key);
    }

    match key.code {
        KeyCode::Right | KeyCode::Enter => {
            app.navigator.next();
        }
        KeyCode::Left => {
            app.navigator.previous();
        }
        KeyCode::Char('g') => {
            app.goto = Some(GotoPrompt::default());
        }
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        _ => {}
    }
    vec![]
}

/// Keys while the go-to prompt is open.
///
/// Submitting routes the buffer through `sync_from_fragment`, the sole
/// external-navigation re-entry: an empty or malformed buffer lands on
/// slide 0, same as a bad startup fragment.
fn handle_goto_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.goto = None;
        }
        KeyCode::Enter => {
            if let Some(prompt) = app.goto.take() {
                app.navigator.sync_from_fragment(&prompt.buffer);
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = app.goto.as_mut() {
                prompt.buffer.pop();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '#' || c == '/' => {
            if let Some(prompt) = app.goto.as_mut() {
                prompt.buffer.push(c);
            }
        }
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use slidephant_core::deck::Deck;
    use slidephant_core::navigator::Navigator;

    use super::*;
    use crate::theme::Theme;

    fn app(slides: usize, fragment: &str) -> AppState {
        let mut builder = Deck::builder();
        for i in 0..slides {
            builder.push_slide(format!("# Slide {}", i + 1));
        }
        AppState::new(
            Navigator::with_fragment(builder.build(), fragment),
            Theme::default(),
        )
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    #[test]
    fn test_right_arrow_advances_and_clamps() {
        // Start fragment #2/3, then two right-arrow presses.
        let mut app = app(3, "#2/3");
        assert_eq!(app.navigator.current_index(), 1);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.navigator.fragment().to_string(), "#3/3");

        press(&mut app, KeyCode::Right);
        assert_eq!(app.navigator.fragment().to_string(), "#3/3");
    }

    #[test]
    fn test_enter_advances_like_right_arrow() {
        let mut app = app(2, "");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current_index(), 1);
    }

    #[test]
    fn test_left_arrow_retreats_and_clamps() {
        let mut app = app(3, "#2/3");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.current_index(), 0);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = app(3, "#2/3");
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.navigator.current_index(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(2, "");
        assert_eq!(press(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let effects = update(&mut app, UiEvent::Terminal(Event::Key(ctrl_c)));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn test_goto_prompt_navigates() {
        let mut app = app(5, "");
        press(&mut app, KeyCode::Char('g'));
        assert!(app.goto.is_some());

        press(&mut app, KeyCode::Char('#'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert!(app.goto.is_none());
        assert_eq!(app.navigator.current_index(), 3);
    }

    #[test]
    fn test_goto_prompt_invalid_lands_on_first_slide() {
        let mut app = app(5, "#3/5");
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn test_goto_prompt_escape_keeps_position() {
        let mut app = app(5, "#3/5");
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Esc);
        assert!(app.goto.is_none());
        assert_eq!(app.navigator.current_index(), 2);
    }

    #[test]
    fn test_goto_prompt_backspace_edits_buffer() {
        let mut app = app(5, "");
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.goto.as_ref().unwrap().buffer, "1");
    }

    #[test]
    fn test_goto_prompt_swallows_navigation_keys() {
        let mut app = app(5, "#2/5");
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.current_index(), 1);
        assert!(app.goto.is_some());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app(3, "");
        let mut release = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert_eq!(app.navigator.current_index(), 0);
    }
}
