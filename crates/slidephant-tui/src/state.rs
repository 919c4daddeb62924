//! TUI application state.
//!
//! The navigator is the single owner of the navigation position; everything
//! else here is view-only concern (theme, the go-to prompt, quit flag).

use slidephant_core::navigator::Navigator;

use crate::theme::Theme;

pub struct AppState {
    /// The navigation state machine.
    pub navigator: Navigator,
    /// Resolved theme colors.
    pub theme: Theme,
    /// Active go-to prompt, if any.
    pub goto: Option<GotoPrompt>,
    /// Flag indicating the app should quit.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(navigator: Navigator, theme: Theme) -> Self {
        Self {
            navigator,
            theme,
            goto: None,
            should_quit: false,
        }
    }
}

/// Input buffer for the go-to prompt (`g`).
///
/// The submitted buffer goes through the navigator's fragment parsing, so it
/// accepts the same shapes as the startup fragment (`3`, `#3`, `#3/7`).
#[derive(Debug, Default)]
pub struct GotoPrompt {
    pub buffer: String,
}
