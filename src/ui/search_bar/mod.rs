//! Query input line.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Text and cursor
//! - `intent.rs` - Editing actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::SearchBarIntent;
pub use reducer::SearchBarReducer;
pub use state::SearchBarState;
