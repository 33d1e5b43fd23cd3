//! Effects - side effects declared by the reducer
//!
//! Effects are declarative descriptions of work, not the work itself. The
//! reducer returns them inside a [`DispatchResult`]; the runtime hands them
//! to the effect handler, which spawns the actual async tasks.

/// Side effects that can be triggered by actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch current weather for the given city.
    FetchWeather { city: String },
}

/// Result of dispatching an action: did state change, and what side effects
/// should be processed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Whether the state was modified by this action (triggers a re-render).
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Whether there are effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let r = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(!r.has_effects());

        let r = DispatchResult::changed();
        assert!(r.changed);
        assert!(r.effects.is_empty());

        let r = DispatchResult::changed_with(Effect::FetchWeather {
            city: "London".into(),
        });
        assert!(r.changed);
        assert!(r.has_effects());
        assert_eq!(r.effects.len(), 1);
    }
}
