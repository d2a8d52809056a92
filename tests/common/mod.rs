//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_pixabay;

use async_trait::async_trait;
use pixseek::api::{FetchError, ImageItem, ImageSource, SearchPage};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Build `count` images with ids starting at `first_id`.
pub fn images(first_id: u64, count: usize) -> Vec<ImageItem> {
    (first_id..first_id + count as u64)
        .map(|id| ImageItem {
            id,
            thumbnail_url: format!("https://cdn.example/{}_640.jpg", id),
            full_size_url: format!("https://cdn.example/{}_1280.jpg", id),
            tags: format!("cat, animal, {}", id),
        })
        .collect()
}

pub fn page(first_id: u64, count: usize, total_hits: usize) -> SearchPage {
    SearchPage {
        hits: images(first_id, count),
        total_hits,
    }
}

/// A call made to `ScriptedSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCall {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

/// `ImageSource` that replays queued outcomes in order.
///
/// Answers with an empty page once the script runs out.
#[derive(Default)]
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<SearchPage, FetchError>>>,
    calls: Mutex<Vec<SourceCall>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_page(self, page: SearchPage) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(page));
        self
    }

    pub fn then_error(self, error: FetchError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSource for ScriptedSource {
    async fn fetch_images(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, FetchError> {
        self.calls.lock().unwrap().push(SourceCall {
            query: query.to_string(),
            page,
            per_page,
        });
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchPage::default()))
    }
}
