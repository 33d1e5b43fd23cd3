//! The event/action loop
//!
//! Wires the store, the crossterm event poller, and the effect handler into
//! one `tokio::select!` loop. All state mutation happens on this loop; async
//! work runs as detached tasks that send result actions back over the
//! unbounded action channel.

use std::future::Future;
use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::effect::Effect;
use crate::event::{process_raw_event, spawn_event_poller, EventKind, PollerConfig, RawEvent};
use crate::state::AppState;
use crate::store::{Middleware, StoreWithMiddleware};

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Actions to enqueue.
    pub actions: Vec<Action>,
    /// Whether to force a re-render (e.g. after a resize).
    pub needs_render: bool,
}

impl EventOutcome {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// No actions, but request a render.
    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    /// Create from any iterator of actions.
    pub fn from_actions(iter: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }
}

/// Context passed to the effect handler.
///
/// Effects spawn their async work through [`EffectContext::spawn`]. Spawned
/// tasks are deliberately untracked: nothing cancels an in-flight request
/// when a new one starts, so overlapping fetches settle in whatever order
/// the network produces.
pub struct EffectContext<'a> {
    action_tx: &'a mpsc::UnboundedSender<Action>,
}

impl EffectContext<'_> {
    /// Send an action directly.
    pub fn emit(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Spawn a detached task whose resulting action is fed back into the
    /// loop. If the loop has already shut down, the result is dropped.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });
    }
}

/// Runtime for an effect-emitting store.
pub struct Runtime<M: Middleware> {
    store: StoreWithMiddleware<M>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    poller_config: PollerConfig,
    intervals: Vec<AbortHandle>,
    should_render: bool,
}

impl<M: Middleware> Runtime<M> {
    /// Create a runtime from an existing store.
    pub fn from_store(store: StoreWithMiddleware<M>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store,
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            intervals: Vec::new(),
            should_render: true,
        }
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Access the current state.
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Emit an action at a fixed interval (spinner tick). The task is
    /// aborted when the loop exits.
    pub fn every(&mut self, period: Duration, action_fn: fn() -> Action) {
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // Skip the first immediate tick.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });
        self.intervals.push(handle.abort_handle());
    }

    /// Run the event/action loop until quit.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &AppState),
        FEvent: FnMut(&EventKind, &AppState) -> EventOutcome,
        FQuit: FnMut(&Action) -> bool,
        FEffect: FnMut(Effect, &mut EffectContext<'_>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, self.poller_config, cancel_token.clone());

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);

                    let outcome = map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext { action_tx: &self.action_tx };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    self.should_render = result.changed;
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        for interval in self.intervals.drain(..) {
            interval.abort();
        }

        Ok(())
    }
}
