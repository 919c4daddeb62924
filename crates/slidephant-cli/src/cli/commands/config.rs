//! Config command handlers.

use anyhow::{Context, Result};
use slidephant_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn theme(field: &str, color: &str) -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::save_theme_color_to(&config_path, field, color)
        .with_context(|| format!("update config at {}", config_path.display()))?;
    println!("Set theme.{field} = {color}");
    Ok(())
}
