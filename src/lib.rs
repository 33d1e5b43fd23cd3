//! skycast - city weather lookup TUI
//!
//! Type a city name, press Enter, and the panel shows the current
//! temperature, wind speed, and humidity from OpenWeatherMap.
//!
//! The app follows the dispatch pattern:
//! 1. Terminal event -> component `handle_event()` -> actions
//! 2. Actions dispatched to the store
//! 3. The reducer updates state and declares effects
//! 4. Effects spawn async work (the HTTP fetch) that feeds result actions
//!    back into the loop
//! 5. If state changed, re-render
//!
//! There is exactly one fetch per trigger (startup or submit): no retry, no
//! app-level timeout, and no cancellation of superseded requests - when two
//! fetches overlap, the one that resolves last wins.

pub mod action;
pub mod api;
pub mod component;
pub mod components;
pub mod config;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod store;
pub mod testing;
