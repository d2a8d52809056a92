mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::{ConfigError, API_KEY_ENV, PER_PAGE_RANGE};
pub use types::{ApiConfig, Config, GalleryConfig, DEFAULT_PER_PAGE};
