//! Intents for the search controller.

use crate::api::SearchPage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// User submitted the search form.
    Submit { text: String },

    /// User asked for the next page.
    LoadMore,

    /// A fetch returned a page.
    FetchSucceeded { generation: u64, page: SearchPage },

    /// A fetch failed.
    FetchFailed { generation: u64, message: String },

    /// A fetch finished, whatever the outcome.
    FetchSettled { generation: u64 },

    /// User picked a gallery item.
    SelectImage { full_size_url: String, tags: String },

    /// User dismissed the preview.
    ClosePreview,
}

impl Intent for SearchIntent {}
