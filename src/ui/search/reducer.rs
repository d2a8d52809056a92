//! Reducer for the search controller.

use crate::api::SearchPage;
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::notice::{Notice, EMPTY_QUERY, END_OF_RESULTS, NO_RESULTS};
use super::state::{FetchRequest, PreviewState, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Submit { text } => {
                let text = text.trim();
                if text.is_empty() {
                    state.notices.push(Notice::warning(EMPTY_QUERY));
                    return state;
                }
                state.query = text.to_string();
                state.page = 1;
                state.images.clear();
                state.total_count = 0;
                state.error = None;
                request_fetch(state)
            }

            SearchIntent::LoadMore => {
                if !state.can_load_more() {
                    return state;
                }
                state.page += 1;
                request_fetch(state)
            }

            SearchIntent::FetchSucceeded { generation, page } => {
                if generation != state.generation {
                    return state;
                }
                apply_page(state, page)
            }

            SearchIntent::FetchFailed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                state.notices.push(Notice::error(message.clone()));
                state.error = Some(message);
                state
            }

            SearchIntent::FetchSettled { generation } => {
                if generation == state.generation {
                    state.is_loading = false;
                }
                state
            }

            SearchIntent::SelectImage {
                full_size_url,
                tags,
            } => {
                state.preview = PreviewState {
                    visible: true,
                    full_size_url,
                    tags,
                };
                state
            }

            SearchIntent::ClosePreview => {
                state.preview.visible = false;
                state
            }
        }
    }
}

/// Start a new generation and queue a fetch for the current query/page.
fn request_fetch(mut state: SearchState) -> SearchState {
    state.generation = state.generation.wrapping_add(1);
    state.is_loading = true;
    state.pending = Some(FetchRequest {
        generation: state.generation,
        query: state.query.clone(),
        page: state.page,
        per_page: state.per_page,
    });
    state
}

fn apply_page(mut state: SearchState, page: SearchPage) -> SearchState {
    let hit_count = page.hits.len();
    // A later page may report fewer hits than already loaded; never let the
    // total drop below what is on screen.
    let shrunk = page.total_hits < state.images.len();
    state.total_count = page.total_hits.max(state.images.len());

    let room = state.total_count.saturating_sub(state.images.len());
    state.images.extend(page.hits.into_iter().take(room));

    if hit_count == 0 {
        state.notices.push(Notice::error(NO_RESULTS));
        return state;
    }

    if state.page == 1 {
        state.notices.push(Notice::found(state.total_count));
    }

    if state.is_last_page() || (shrunk && state.images.len() == state.total_count) {
        state.notices.push(Notice::info(END_OF_RESULTS));
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ImageItem;

    fn page_of(ids: std::ops::Range<u64>, total_hits: usize) -> SearchPage {
        SearchPage {
            hits: ids
                .map(|id| ImageItem {
                    id,
                    thumbnail_url: format!("t{}", id),
                    full_size_url: format!("f{}", id),
                    tags: format!("tag{}", id),
                })
                .collect(),
            total_hits,
        }
    }

    fn submitted(text: &str) -> SearchState {
        SearchReducer::reduce(
            SearchState::new(12),
            SearchIntent::Submit { text: text.into() },
        )
    }

    #[test]
    fn submit_trims_and_requests_first_page() {
        let mut state = submitted("  cats ");
        assert_eq!(state.query, "cats");
        assert!(state.is_loading);

        let request = state.take_pending().expect("fetch requested");
        assert_eq!(request.query, "cats");
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 12);
        assert_eq!(request.generation, state.generation);
    }

    #[test]
    fn blank_submit_only_warns() {
        let mut state = submitted("   ");
        assert!(state.query.is_empty());
        assert!(!state.is_loading);
        assert!(state.take_pending().is_none());
        assert_eq!(state.drain_notices(), vec![Notice::warning(EMPTY_QUERY)]);
    }

    #[test]
    fn failure_stores_error_and_notifies() {
        let state = submitted("cats");
        let generation = state.generation;
        let mut state = SearchReducer::reduce(
            state,
            SearchIntent::FetchFailed {
                generation,
                message: "Request timeout after 15s".into(),
            },
        );

        assert_eq!(state.error.as_deref(), Some("Request timeout after 15s"));
        assert_eq!(
            state.drain_notices(),
            vec![Notice::error("Request timeout after 15s")]
        );
        // still loading until the fetch settles
        assert!(state.is_loading);

        let state = SearchReducer::reduce(state, SearchIntent::FetchSettled { generation });
        assert!(!state.is_loading);
    }

    #[test]
    fn excess_hits_are_truncated_to_total() {
        let state = submitted("cats");
        let generation = state.generation;
        let state = SearchReducer::reduce(
            state,
            SearchIntent::FetchSucceeded {
                generation,
                page: page_of(0..12, 5),
            },
        );
        assert_eq!(state.images.len(), 5);
        assert_eq!(state.total_count, 5);
    }

    #[test]
    fn single_page_result_reports_found_and_end() {
        let state = submitted("rare");
        let generation = state.generation;
        let mut state = SearchReducer::reduce(
            state,
            SearchIntent::FetchSucceeded {
                generation,
                page: page_of(0..5, 5),
            },
        );
        assert_eq!(
            state.drain_notices(),
            vec![Notice::found(5), Notice::info(END_OF_RESULTS)]
        );
    }
}
