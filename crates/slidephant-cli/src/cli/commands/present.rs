//! Present command handler.

use std::path::Path;

use anyhow::{Context, Result};
use slidephant_core::config::Config;
use slidephant_core::deck::Deck;
use slidephant_core::logging;
use tracing::info;

pub fn run(deck_path: &Path, fragment: Option<&str>) -> Result<()> {
    let config = Config::load().context("load config")?;
    let _guard = logging::init().context("init logging")?;

    let deck = Deck::load(deck_path)
        .with_context(|| format!("load deck from {}", deck_path.display()))?;
    info!(
        slides = deck.len(),
        deck = %deck_path.display(),
        "presenting deck"
    );

    slidephant_tui::present(&config, deck, fragment).context("presentation failed")
}
