//! Image search API client.
//!
//! `ImageSource` is the seam between the search controller and the
//! network: the TUI and headless mode use `PixabayClient`, tests plug in
//! scripted sources.

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;

pub use client::{PixabayClient, TimeoutConfig};
pub use error::FetchError;
pub use types::{ImageItem, RawHit, RawSearchResponse, SearchPage};

/// Anything that can answer a paginated image search.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch one page of results for `query`.
    ///
    /// `page` is 1-based. Failures of any kind come back as `FetchError`.
    async fn fetch_images(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, FetchError>;
}
