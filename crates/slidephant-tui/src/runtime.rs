//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: the reducer stays pure and produces
//! effects; this module executes them. All mutations happen on discrete
//! terminal events, so the loop is synchronous: block on input, reduce,
//! redraw.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll timeout while waiting for input. Nothing animates between events,
/// so a long timeout keeps the idle loop cheap.
const POLL_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Last fragment written to the terminal title.
    last_fragment: Option<String>,
}

impl Runtime {
    /// Creates the runtime: installs the panic hook, then takes the terminal.
    pub fn new(state: AppState) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("setup terminal")?;
        Ok(Self {
            terminal,
            state,
            last_fragment: None,
        })
    }

    /// Runs the main event loop until the viewer quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                self.sync_title();
                dirty = false;
            }

            if event::poll(POLL_TIMEOUT)? {
                let event = UiEvent::Terminal(event::read()?);
                let effects = update::update(&mut self.state, event);
                dirty = true;
                self.execute_effects(effects);
            }
        }

        Ok(())
    }

    /// Writes the fragment to the terminal title, skipping unchanged values.
    fn sync_title(&mut self) {
        let fragment = self.state.navigator.fragment().to_string();
        if self.last_fragment.as_deref() != Some(fragment.as_str()) {
            let _ = terminal::set_title(&fragment);
            self.last_fragment = Some(fragment);
        }
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => self.state.should_quit = true,
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
