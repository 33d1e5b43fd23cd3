//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::event::EventKind;

/// A pure UI component that renders based on props and emits actions.
///
/// Rules:
/// 1. Props contain ALL read-only data needed for rendering.
/// 2. `handle_event` returns actions, never mutates external state.
/// 3. `render` is a pure function of props (plus internal UI state such as
///    the input cursor position).
///
/// Focus is passed through props, keeping components decoupled from the
/// event routing in `main`.
pub trait Component {
    /// Data required to render the component (read-only).
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any type implementing `IntoIterator<Item = Action>`:
    /// `None`, `Some(action)`, or `vec![...]`.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
