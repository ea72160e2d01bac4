//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State only changes by passing an intent through a pure reducer. Effects
//! (gateway calls, persistence) run outside the reducer and report their
//! outcome as another intent.

/// Something that happened: a key press, a page arriving, a failed write.
pub trait Intent: Send + 'static {}

/// State held by a container or a screen.
///
/// `Default` is the zero value a container starts from and returns to on
/// reset. `Clone` lets callers snapshot it and render outside the lock.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// `(State, Intent) -> State`, with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
