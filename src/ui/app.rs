use crate::api::{ImageItem, SearchPage};
use crate::clipboard::TextSink;
use crate::config::GalleryConfig;
use crate::ui::fetcher::Fetcher;
use crate::ui::mvi::Reducer;
use crate::ui::search::{Notice, SearchIntent, SearchReducer, SearchState};
use crate::ui::search_bar::{SearchBarIntent, SearchBarReducer, SearchBarState};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most toasts kept on screen at once; older ones are dropped first.
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    SearchBar,
    Gallery,
}

/// A notice on screen with its expiry time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Search controller state (MVI pattern).
    search: SearchState,
    /// Query input (MVI pattern).
    search_bar: SearchBarState,
    /// Gallery cursor. `images.len()` addresses the load-more row.
    selection: usize,
    toasts: VecDeque<Toast>,
    notice_ttl: Duration,
    spinner_tick: u8,
    /// Fetch runner (resource, managed outside MVI).
    fetcher: Option<Fetcher>,
    clipboard: Option<Box<dyn TextSink>>,
}

impl App {
    pub fn new(gallery: &GalleryConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::SearchBar,
            search: SearchState::new(gallery.per_page),
            search_bar: SearchBarState::default(),
            selection: 0,
            toasts: VecDeque::new(),
            notice_ttl: Duration::from_millis(gallery.notice_ttl_ms),
            spinner_tick: 0,
            fetcher: None,
            clipboard: None,
        }
    }

    pub fn attach_fetcher(&mut self, fetcher: Fetcher) {
        self.fetcher = Some(fetcher);
    }

    pub fn attach_clipboard(&mut self, clipboard: Box<dyn TextSink>) {
        self.clipboard = Some(clipboard);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar if !self.search.images.is_empty() => Focus::Gallery,
            _ => Focus::SearchBar,
        };
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_bar(&self) -> &SearchBarState {
        &self.search_bar
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_image(&self) -> Option<&ImageItem> {
        self.search.images.get(self.selection)
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn preview_visible(&self) -> bool {
        self.search.preview.visible
    }

    /// Run the search reducer and carry out what it queued.
    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);

        if let Some(request) = self.search.take_pending() {
            tracing::info!(
                query = %request.query,
                page = request.page,
                generation = request.generation,
                "starting fetch"
            );
            match self.fetcher.as_mut() {
                Some(fetcher) => fetcher.start(request),
                None => tracing::warn!("no fetcher attached, request dropped"),
            }
        }

        for notice in self.search.drain_notices() {
            self.push_notice(notice);
        }
    }

    pub fn edit_query(&mut self, intent: SearchBarIntent) {
        dispatch_mvi!(self, search_bar, SearchBarReducer, intent);
    }

    /// Submit the text currently in the search bar.
    pub fn submit(&mut self) {
        let text = self.search_bar.text.clone();
        let before = self.search.generation;
        self.dispatch_search(SearchIntent::Submit { text });
        if self.search.generation != before {
            self.selection = 0;
        }
    }

    /// Put `text` in the search bar and submit it.
    pub fn submit_text(&mut self, text: &str) {
        self.edit_query(SearchBarIntent::Clear);
        self.edit_query(SearchBarIntent::Paste(text.to_string()));
        self.submit();
    }

    pub fn load_more(&mut self) {
        self.dispatch_search(SearchIntent::LoadMore);
    }

    pub fn on_fetch_completed(&mut self, generation: u64, result: Result<SearchPage, String>) {
        let intent = match result {
            Ok(page) => SearchIntent::FetchSucceeded { generation, page },
            Err(message) => SearchIntent::FetchFailed {
                generation,
                message,
            },
        };
        self.dispatch_search(intent);
    }

    pub fn on_fetch_settled(&mut self, generation: u64) {
        self.dispatch_search(SearchIntent::FetchSettled { generation });
    }

    /// Number of selectable gallery rows, including the load-more row.
    fn gallery_rows(&self) -> usize {
        self.search.images.len() + usize::from(self.search.show_load_more())
    }

    pub fn move_selection(&mut self, delta: isize) {
        let rows = self.gallery_rows();
        if rows == 0 {
            self.selection = 0;
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.clamp(0, rows as isize - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selection = 0;
    }

    pub fn select_last(&mut self) {
        self.selection = self.gallery_rows().saturating_sub(1);
    }

    /// Enter on the gallery: open the preview, or load more when the
    /// cursor is on the load-more row.
    pub fn activate_selection(&mut self) {
        if let Some(image) = self.selected_image() {
            let intent = SearchIntent::SelectImage {
                full_size_url: image.full_size_url.clone(),
                tags: image.tags.clone(),
            };
            self.dispatch_search(intent);
        } else if self.search.show_load_more() {
            self.load_more();
        }
    }

    pub fn close_preview(&mut self) {
        self.dispatch_search(SearchIntent::ClosePreview);
    }

    /// Copy the previewed image's full-size URL.
    pub fn copy_preview_url(&mut self) {
        let url = self.search.preview.full_size_url.clone();
        if url.is_empty() {
            return;
        }
        let notice = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.copy_text(&url) {
                Ok(()) => Notice::success("Image URL copied to clipboard."),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard copy failed");
                    Notice::warning(err)
                }
            },
            None => Notice::warning("Clipboard unavailable"),
        };
        self.push_notice(notice);
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.push_notice_at(notice, Instant::now());
    }

    fn push_notice_at(&mut self, notice: Notice, now: Instant) {
        tracing::debug!(level = notice.level.label(), message = %notice.message, "notice");
        self.toasts.push_back(Toast {
            notice,
            expires_at: now + self.notice_ttl,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    fn on_tick_at(&mut self, now: Instant) {
        if self.search.is_loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
        self.toasts.retain(|toast| toast.expires_at > now);
    }
}
