//! UI event types consumed by the reducer.

use crossterm::event::Event;

/// Events fed to `update`.
///
/// All input arrives as discrete terminal events; there is no background
/// work, so there is nothing else to collect.
#[derive(Debug)]
pub enum UiEvent {
    Terminal(Event),
}
