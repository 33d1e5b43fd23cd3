//! Centralized state store with reducer pattern

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::state::AppState;

/// The reducer signature: mutate state, report changes and effects.
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

/// Holds the application state and provides the single point for state
/// mutations through [`Store::dispatch`].
pub struct Store {
    state: AppState,
    reducer: Reducer,
}

impl Store {
    /// Create a new store with initial state and reducer.
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self { state, reducer }
    }

    /// Dispatch an action to the store.
    #[inline]
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        (self.reducer)(&mut self.state, action)
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Middleware trait for intercepting actions.
///
/// Implement this to add logging or other cross-cutting concerns.
pub trait Middleware {
    /// Called before the action is dispatched to the reducer.
    fn before(&mut self, action: &Action);

    /// Called after the action is processed by the reducer.
    fn after(&mut self, action: &Action, state_changed: bool);
}

/// A no-op middleware that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl Middleware for NoopMiddleware {
    fn before(&mut self, _action: &Action) {}
    fn after(&mut self, _action: &Action, _state_changed: bool) {}
}

/// Middleware that logs every dispatched action via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn before(&mut self, _action: &Action) {}

    fn after(&mut self, action: &Action, state_changed: bool) {
        tracing::debug!(
            action = %action.summary(),
            state_changed,
            "action processed"
        );
    }
}

/// Store with middleware hooks around each dispatch.
pub struct StoreWithMiddleware<M: Middleware> {
    store: Store,
    middleware: M,
}

impl<M: Middleware> StoreWithMiddleware<M> {
    /// Create a new store with middleware.
    pub fn new(state: AppState, reducer: Reducer, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Dispatch an action through middleware and store.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Get a reference to the middleware.
    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::reducer;

    #[test]
    fn store_dispatch_runs_reducer() {
        let mut store = Store::new(AppState::default(), reducer);

        let result = store.dispatch(Action::QueryChange("Tokyo".into()));

        assert!(result.changed);
        assert_eq!(store.state().query, "Tokyo");
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
    }

    impl Middleware for CountingMiddleware {
        fn before(&mut self, _action: &Action) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &Action, _state_changed: bool) {
            self.after_count += 1;
        }
    }

    #[test]
    fn middleware_sees_every_dispatch() {
        let mut store = StoreWithMiddleware::new(
            AppState::default(),
            reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(Action::Tick);
        store.dispatch(Action::WeatherFetch);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert!(store.state().is_busy);
    }
}
