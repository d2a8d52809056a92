mod common;

use common::page;
use pixseek::api::SearchPage;
use pixseek::ui::mvi::Reducer;
use pixseek::ui::search::{
    Notice, NoticeLevel, SearchIntent, SearchReducer, SearchState, END_OF_RESULTS, NO_RESULTS,
};

fn reduce(state: SearchState, intent: SearchIntent) -> SearchState {
    SearchReducer::reduce(state, intent)
}

fn submit(state: SearchState, text: &str) -> SearchState {
    reduce(state, SearchIntent::Submit { text: text.into() })
}

/// Deliver `page` for the current generation and settle it.
fn complete(state: SearchState, page: SearchPage) -> SearchState {
    let generation = state.generation;
    let state = reduce(state, SearchIntent::FetchSucceeded { generation, page });
    reduce(state, SearchIntent::FetchSettled { generation })
}

fn count_notice(notices: &[Notice], message: &str) -> usize {
    notices.iter().filter(|n| n.message == message).count()
}

#[test]
fn submit_resets_images_and_page() {
    let mut state = complete(submit(SearchState::new(12), "dogs"), page(0, 12, 40));
    state = reduce(state, SearchIntent::LoadMore);
    state = complete(state, page(12, 12, 40));
    state.error = Some("old failure".into());
    assert_eq!(state.page, 2);
    assert_eq!(state.images.len(), 24);

    let mut state = submit(state, "cats");
    assert_eq!(state.query, "cats");
    assert_eq!(state.page, 1);
    assert!(state.images.is_empty());
    assert!(state.error.is_none());

    let request = state.take_pending().expect("fetch requested");
    assert_eq!((request.query.as_str(), request.page), ("cats", 1));
}

#[test]
fn first_page_of_many_reports_found_but_not_end() {
    let state = submit(SearchState::new(12), "cats");
    let mut state = complete(state, page(0, 12, 40));

    assert_eq!(state.images.len(), 12);
    assert_eq!(state.total_count, 40);
    assert!(!state.is_loading);
    assert!(state.show_load_more());

    let notices = state.drain_notices();
    assert_eq!(notices, vec![Notice::found(40)]);
    assert_eq!(notices[0].message, "Hooray! We found 40 images.");
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

#[test]
fn paging_to_the_end_reports_end_exactly_once() {
    let mut state = complete(submit(SearchState::new(12), "cats"), page(0, 12, 40));
    let mut notices = state.drain_notices();

    let mut next_id = 12;
    for (expected_page, hits) in [(2u32, 12usize), (3, 10), (4, 6)] {
        state = reduce(state, SearchIntent::LoadMore);
        assert_eq!(state.page, expected_page);
        let request = state.take_pending().expect("fetch requested");
        assert_eq!(request.page, expected_page);

        state = complete(state, page(next_id, hits, 40));
        next_id += hits as u64;
        notices.extend(state.drain_notices());
    }

    assert_eq!(state.images.len(), 40);
    assert_eq!(state.images.len(), state.total_count);
    assert_eq!(count_notice(&notices, END_OF_RESULTS), 1);
    assert_eq!(notices.last().map(|n| n.level), Some(NoticeLevel::Info));
    assert!(!state.show_load_more());
}

#[test]
fn zero_hits_reports_no_results_and_keeps_images() {
    let mut state = complete(submit(SearchState::new(12), "cats"), page(0, 12, 40));
    state.drain_notices();
    let before = state.images.clone();

    state = reduce(state, SearchIntent::LoadMore);
    state = complete(
        state,
        SearchPage {
            hits: Vec::new(),
            total_hits: 40,
        },
    );

    assert_eq!(state.images, before);
    assert_eq!(state.drain_notices(), vec![Notice::error(NO_RESULTS)]);
}

#[test]
fn zero_hits_on_first_page_only_reports_no_results() {
    let state = submit(SearchState::new(12), "qwzxv");
    let mut state = complete(state, page(0, 0, 0));

    assert!(state.images.is_empty());
    assert_eq!(state.drain_notices(), vec![Notice::error(NO_RESULTS)]);
    assert!(!state.show_load_more());
}

#[test]
fn load_more_is_noop_when_everything_is_loaded() {
    let mut state = complete(submit(SearchState::new(12), "cats"), page(0, 5, 5));
    state.drain_notices();
    let generation = state.generation;

    let mut state = reduce(state, SearchIntent::LoadMore);
    assert_eq!(state.page, 1);
    assert_eq!(state.generation, generation);
    assert!(state.take_pending().is_none());
    assert!(!state.is_loading);
}

#[test]
fn load_more_is_noop_while_loading() {
    let mut state = submit(SearchState::new(12), "cats");
    state.take_pending();
    let generation = state.generation;
    let state = reduce(
        state,
        SearchIntent::FetchSucceeded {
            generation,
            page: page(0, 12, 40),
        },
    );
    assert!(state.is_loading);

    let mut state = reduce(state, SearchIntent::LoadMore);
    assert_eq!(state.page, 1);
    assert!(state.take_pending().is_none());
}

#[test]
fn load_more_before_any_search_is_noop() {
    let mut state = reduce(SearchState::new(12), SearchIntent::LoadMore);
    assert_eq!(state.page, 1);
    assert!(state.take_pending().is_none());
}

#[test]
fn stale_responses_are_discarded() {
    let state = submit(SearchState::new(12), "dogs");
    let stale = state.generation;
    let state = submit(state, "cats");
    let current = state.generation;
    assert_ne!(stale, current);

    let state = reduce(
        state,
        SearchIntent::FetchSucceeded {
            generation: stale,
            page: page(100, 12, 99),
        },
    );
    let state = reduce(
        state,
        SearchIntent::FetchFailed {
            generation: stale,
            message: "late failure".into(),
        },
    );
    let mut state = reduce(state, SearchIntent::FetchSettled { generation: stale });

    assert!(state.images.is_empty());
    assert!(state.error.is_none());
    assert!(state.is_loading);
    assert!(state.drain_notices().is_empty());

    let mut state = complete(state, page(0, 12, 40));
    assert_eq!(state.images[0].id, 0);
    assert!(!state.is_loading);
    assert_eq!(state.drain_notices(), vec![Notice::found(40)]);
}

#[test]
fn select_and_close_preview() {
    let state = reduce(
        SearchState::new(12),
        SearchIntent::SelectImage {
            full_size_url: "https://cdn.example/1_1280.jpg".into(),
            tags: "cat, animal".into(),
        },
    );
    assert!(state.preview.visible);
    assert_eq!(state.preview.full_size_url, "https://cdn.example/1_1280.jpg");
    assert_eq!(state.preview.tags, "cat, animal");

    let state = reduce(state, SearchIntent::ClosePreview);
    assert!(!state.preview.visible);
    assert_eq!(state.preview.full_size_url, "https://cdn.example/1_1280.jpg");
    assert_eq!(state.preview.tags, "cat, animal");

    let state = reduce(
        state,
        SearchIntent::SelectImage {
            full_size_url: "https://cdn.example/2_1280.jpg".into(),
            tags: "dog".into(),
        },
    );
    assert!(state.preview.visible);
    assert_eq!(state.preview.tags, "dog");
}

#[test]
fn error_survives_until_next_submission() {
    let state = submit(SearchState::new(12), "cats");
    let generation = state.generation;
    let state = reduce(
        state,
        SearchIntent::FetchFailed {
            generation,
            message: "Request timeout after 15s".into(),
        },
    );
    let state = reduce(state, SearchIntent::FetchSettled { generation });
    let state = reduce(state, SearchIntent::ClosePreview);
    assert_eq!(state.error.as_deref(), Some("Request timeout after 15s"));

    let state = submit(state, "cats");
    assert!(state.error.is_none());
}

#[test]
fn smaller_total_on_later_page_keeps_loaded_images_consistent() {
    let mut state = complete(submit(SearchState::new(12), "cats"), page(0, 12, 40));
    state.drain_notices();

    state = reduce(state, SearchIntent::LoadMore);
    assert!(state.take_pending().is_some());
    let mut state = complete(state, page(12, 12, 10));

    // Already-loaded images are kept and the total never drops below them
    assert_eq!(state.images.len(), 12);
    assert_eq!(state.total_count, 12);
    assert!(state.images.len() <= state.total_count);
    assert_eq!(state.show_load_more(), state.can_load_more());
    assert!(!state.show_load_more());
    assert_eq!(state.drain_notices(), vec![Notice::info(END_OF_RESULTS)]);

    let mut state = reduce(state, SearchIntent::LoadMore);
    assert!(state.take_pending().is_none());
}

#[test]
fn smaller_total_still_leaves_room_for_new_hits() {
    let state = complete(submit(SearchState::new(12), "cats"), page(0, 12, 40));
    let state = reduce(state, SearchIntent::LoadMore);
    let mut state = complete(state, page(12, 12, 20));

    assert_eq!(state.images.len(), 20);
    assert_eq!(state.total_count, 20);
    assert!(!state.show_load_more());
    let notices = state.drain_notices();
    assert_eq!(count_notice(&notices, END_OF_RESULTS), 1);
}
