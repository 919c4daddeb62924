//! Full-screen TUI for presenting a slide deck.

pub mod effects;
pub mod events;
pub mod markdown;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::Runtime;
use slidephant_core::config::Config;
use slidephant_core::deck::Deck;
use slidephant_core::navigator::Navigator;

use crate::state::AppState;
use crate::theme::Theme;

/// Presents a deck until the viewer quits.
///
/// This is the explicit entry point: the caller builds the deck and decides
/// the starting fragment; nothing auto-initializes. A malformed or missing
/// fragment starts at the first slide.
pub fn present(config: &Config, deck: Deck, fragment: Option<&str>) -> Result<()> {
    // Presenting requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("Presenting requires a terminal.");
    }

    let navigator = match fragment {
        Some(raw) => Navigator::with_fragment(deck, raw),
        None => Navigator::new(deck),
    };
    let theme = Theme::from_config(&config.theme);

    let mut runtime = Runtime::new(AppState::new(navigator, theme))?;
    runtime.run()
}
