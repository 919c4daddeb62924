//! Core slidephant library (deck model, navigation, fragment codec, config).

pub mod config;
pub mod deck;
pub mod fragment;
pub mod logging;
pub mod navigator;
