//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! All state mutations happen here. No side effects - async work is declared
//! as [`Effect`]s and performed by the runtime's effect handler.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::AppState;

/// Handle all state transitions.
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        Action::QueryChange(value) => {
            state.query = value;
            DispatchResult::changed()
        }

        Action::WeatherFetch => {
            // Busy from dispatch until the matching Did* action settles it.
            state.is_busy = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                city: state.query.clone(),
            })
        }

        Action::WeatherDidLoad(reading) => {
            // Replace, never merge: all four fields come from this response.
            state.reading = Some(reading);
            state.is_busy = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(_) => {
            // The previous reading stays visible; only the alert signals
            // failure. The error text itself is already logged upstream.
            state.is_busy = false;
            state.alert_open = true;
            DispatchResult::changed()
        }

        Action::AlertDismiss => {
            if state.alert_open {
                state.alert_open = false;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner animates on ticks.
            if state.is_busy {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is handled in the main loop, not here.
            DispatchResult::unchanged()
        }
    }
}
