//! Rspotty - Search Spotify and control playback from the terminal
//!
//! This library provides the Spotify client wrapper, the flag dispatcher,
//! the search/action flow and the interactive menu used by the `rspotty`
//! binary.

/// Command-line flags and dispatch
pub mod cli;
/// Client modules for interacting with the Spotify Web API
pub mod clients;
/// Formatting of results and profiles
pub mod display;
/// Interactive menu
pub mod menu;
/// Search and act on the results
pub mod search;
/// Terminal input helpers
pub mod terminal;
