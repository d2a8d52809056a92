//! Wire types of the Pixabay search endpoint and their domain forms.

use serde::Deserialize;

/// One raw image record as returned by the API.
///
/// Only the fields the gallery needs are decoded; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawHit {
    pub id: u64,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(default)]
    pub tags: String,
}

/// Body of a successful search response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResponse {
    /// Total matches on the service side (may exceed what is reachable).
    #[serde(default)]
    pub total: u64,
    /// Number of hits reachable through pagination.
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// A gallery entry. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub id: u64,
    pub thumbnail_url: String,
    pub full_size_url: String,
    pub tags: String,
}

impl From<RawHit> for ImageItem {
    fn from(hit: RawHit) -> Self {
        Self {
            id: hit.id,
            thumbnail_url: hit.webformat_url,
            full_size_url: hit.large_image_url,
            tags: hit.tags,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub hits: Vec<ImageItem>,
    pub total_hits: usize,
}

impl From<RawSearchResponse> for SearchPage {
    fn from(raw: RawSearchResponse) -> Self {
        Self {
            hits: raw.hits.into_iter().map(ImageItem::from).collect(),
            total_hits: usize::try_from(raw.total_hits).unwrap_or(usize::MAX),
        }
    }
}
