//! Unidirectional state plumbing shared by the search bar and the search
//! controller.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                     │
//!    │                     └──→ outbox (fetch request, notices)
//!    └──── fetch outcome ──────────┘
//! ```
//!
//! A reducer never performs I/O. When a transition needs the outside
//! world, it leaves a request in the state's outbox and whoever owns the
//! state drains it after the call.

/// State owned by one reducer.
///
/// `Default` lets callers move the state out with `std::mem::take` while
/// reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// An input to a reducer: a key press turned into an action, or a fetch
/// outcome delivered back from the runtime.
pub trait Intent: Send + 'static {}

pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
