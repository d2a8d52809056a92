//! Terminal image search over the Pixabay API.
//!
//! The search controller lives in [`ui::search`] as an MVI reducer; the
//! TUI ([`ui::runtime`]) and headless mode ([`headless`]) both drive it.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod headless;
pub mod logging;
pub mod session;
pub mod ui;
