//! Search controller feature module.
//!
//! Owns query, pagination, results and the preview overlay.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Search session state plus fetch/notice outboxes
//! - `intent.rs` - User actions and fetch outcomes
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `notice.rs` - Toast-style messages raised by the reducer
//!
//! Fetches are performed by the owner of the state: the reducer only
//! queues a `FetchRequest` tagged with a generation, and outcomes come
//! back as intents carrying that generation.

mod intent;
mod notice;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use notice::{Notice, NoticeLevel, EMPTY_QUERY, END_OF_RESULTS, NO_RESULTS};
pub use reducer::SearchReducer;
pub use state::{FetchRequest, PreviewState, SearchState};
