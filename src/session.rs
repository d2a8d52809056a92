//! Sequential driver for the search controller.
//!
//! `SearchSession` owns a `SearchState` and an `ImageSource` and performs
//! each queued fetch inline by awaiting it. Used by headless mode and by
//! integration tests; the TUI performs fetches on the runtime instead.

use crate::api::ImageSource;
use crate::ui::mvi::Reducer;
use crate::ui::search::{Notice, SearchIntent, SearchReducer, SearchState};

pub struct SearchSession<S> {
    source: S,
    state: SearchState,
}

impl<S: ImageSource> SearchSession<S> {
    pub fn new(source: S, per_page: u32) -> Self {
        Self {
            source,
            state: SearchState::new(per_page),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reduce without performing any queued fetch.
    pub fn dispatch(&mut self, intent: SearchIntent) {
        self.state = SearchReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Submit `text`, wait for the first page, return the notices raised.
    pub async fn submit(&mut self, text: &str) -> Vec<Notice> {
        self.dispatch(SearchIntent::Submit {
            text: text.to_string(),
        });
        self.run_pending().await;
        self.state.drain_notices()
    }

    /// Load the next page if allowed, return the notices raised.
    pub async fn load_more(&mut self) -> Vec<Notice> {
        self.dispatch(SearchIntent::LoadMore);
        self.run_pending().await;
        self.state.drain_notices()
    }

    pub fn select_image(&mut self, full_size_url: &str, tags: &str) {
        self.dispatch(SearchIntent::SelectImage {
            full_size_url: full_size_url.to_string(),
            tags: tags.to_string(),
        });
    }

    pub fn close_preview(&mut self) {
        self.dispatch(SearchIntent::ClosePreview);
    }

    /// Perform the fetch the last reduction queued, if any.
    ///
    /// `FetchSettled` is dispatched from a scope guard, so loading is
    /// cleared on success, on failure and if this future is dropped
    /// mid-request.
    async fn run_pending(&mut self) {
        let Some(request) = self.state.take_pending() else {
            return;
        };
        let generation = request.generation;

        let mut session = scopeguard::guard(self, move |session| {
            session.dispatch(SearchIntent::FetchSettled { generation });
        });

        let intent = match session
            .source
            .fetch_images(&request.query, request.page, request.per_page)
            .await
        {
            Ok(page) => SearchIntent::FetchSucceeded { generation, page },
            Err(err) => SearchIntent::FetchFailed {
                generation,
                message: err.to_string(),
            },
        };
        session.dispatch(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, SearchPage};
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl ImageSource for Unreachable {
        async fn fetch_images(
            &self,
            _query: &str,
            _page: u32,
            _per_page: u32,
        ) -> Result<SearchPage, FetchError> {
            Err(FetchError::InvalidRequest("offline".into()))
        }
    }

    #[tokio::test]
    async fn failed_fetch_settles_and_notifies() {
        let mut session = SearchSession::new(Unreachable, 12);
        let notices = session.submit("cats").await;

        assert_eq!(notices, vec![Notice::error("Invalid request: offline")]);
        assert!(!session.state().is_loading);
        assert_eq!(
            session.state().error.as_deref(),
            Some("Invalid request: offline")
        );
        assert!(session.state().images.is_empty());
    }

    #[tokio::test]
    async fn load_more_without_results_does_nothing() {
        let mut session = SearchSession::new(Unreachable, 12);
        let notices = session.load_more().await;
        assert!(notices.is_empty());
        assert_eq!(session.state().page, 1);
        assert_eq!(session.state().generation, 0);
    }
}
