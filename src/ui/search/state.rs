//! State of the search controller.

use crate::api::ImageItem;
use crate::config::{DEFAULT_PER_PAGE, PER_PAGE_RANGE};
use crate::ui::mvi::UiState;

use super::notice::Notice;

/// Full-size preview overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewState {
    pub visible: bool,
    pub full_size_url: String,
    pub tags: String,
}

/// A fetch the owner of the state must perform.
///
/// `generation` identifies the request; responses carrying an older
/// generation are dropped by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

/// Query, pagination and results of the current search session.
///
/// `pending` and `notices` are outboxes: the reducer fills them and the
/// owner drains them after each dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    /// 1-based page of the most recent request.
    pub page: u32,
    pub per_page: u32,
    pub images: Vec<ImageItem>,
    pub total_count: usize,
    pub is_loading: bool,
    pub error: Option<String>,
    pub preview: PreviewState,
    /// Generation of the latest request issued.
    pub generation: u64,
    pub pending: Option<FetchRequest>,
    pub notices: Vec<Notice>,
}

impl UiState for SearchState {}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl SearchState {
    /// `per_page` is clamped to the range the API accepts, so page
    /// arithmetic matches what the server actually returned.
    pub fn new(per_page: u32) -> Self {
        Self {
            query: String::new(),
            page: 1,
            per_page: per_page.clamp(*PER_PAGE_RANGE.start(), *PER_PAGE_RANGE.end()),
            images: Vec::new(),
            total_count: 0,
            is_loading: false,
            error: None,
            preview: PreviewState::default(),
            generation: 0,
            pending: None,
            notices: Vec::new(),
        }
    }

    /// Whether the "load more" button should be shown.
    pub fn show_load_more(&self) -> bool {
        !self.images.is_empty() && self.images.len() != self.total_count && !self.is_loading
    }

    /// Whether a `LoadMore` intent would start a fetch.
    pub fn can_load_more(&self) -> bool {
        !self.query.is_empty()
            && !self.images.is_empty()
            && self.images.len() < self.total_count
            && !self.is_loading
    }

    /// Number of pages for the current `total_count`.
    pub fn total_pages(&self) -> u32 {
        let per_page = self.per_page.max(1) as usize;
        let pages = self.total_count.div_ceil(per_page);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn is_last_page(&self) -> bool {
        self.total_count > 0 && self.page == self.total_pages()
    }

    /// Take the fetch the last reduction asked for, if any.
    pub fn take_pending(&mut self) -> Option<FetchRequest> {
        self.pending.take()
    }

    /// Take all notices raised since the last drain.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
