use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Connection settings for the image search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint the search GET is sent to (e.g., "https://pixabay.com/api/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Pixabay API key. `PIXABAY_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// "all", "photo", "illustration" or "vector".
    #[serde(default = "default_image_type")]
    pub image_type: String,
    /// "all", "horizontal" or "vertical".
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_safesearch")]
    pub safesearch: bool,
}

/// Gallery presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Number of hits requested per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// How long a notice stays on screen, in milliseconds.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

pub const DEFAULT_PER_PAGE: u32 = 12;

fn default_base_url() -> String {
    "https://pixabay.com/api/".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_image_type() -> String {
    "photo".to_string()
}

fn default_orientation() -> String {
    "horizontal".to_string()
}

fn default_safesearch() -> bool {
    true
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_notice_ttl_ms() -> u64 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            image_type: default_image_type(),
            orientation: default_orientation(),
            safesearch: default_safesearch(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}
