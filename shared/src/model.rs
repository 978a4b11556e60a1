//! Application state: image records, search progress, navigation, and the
//! two persisted collections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::ImageList;
use crate::{BROWSE_TITLE, DOWNLOADS_TITLE, FAVORITES_TITLE, SEARCH_ENDPOINT};

/// Identifier assigned to an image by the external API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub String);

impl ImageId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One search result. Immutable once fetched; shared by value between the
/// results, favorites, and downloads collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub thumbnail_url: String,
    pub full_url: String,
    pub alt_description: String,
}

/// The three mutually exclusive screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[default]
    Browse,
    Favorites,
    Downloads,
}

impl View {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Browse => BROWSE_TITLE,
            Self::Favorites => FAVORITES_TITLE,
            Self::Downloads => DOWNLOADS_TITLE,
        }
    }
}

/// Fixed search categories offered on the browse screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Nature,
    Animals,
    Architecture,
    Technology,
}

impl Preset {
    pub const ALL: [Self; 4] = [
        Self::Nature,
        Self::Animals,
        Self::Architecture,
        Self::Technology,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nature => "Nature",
            Self::Animals => "Animals",
            Self::Architecture => "Architecture",
            Self::Technology => "Technology",
        }
    }

    /// The query text sent to the API for this category.
    #[must_use]
    pub const fn query(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Animals => "Animals",
            Self::Architecture => "Architecture",
            Self::Technology => "Technology",
        }
    }
}

/// Progress and outcome of the current search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// 1-based; reset to 1 whenever the query changes.
    pub page: u32,
    /// 0 until a search has succeeded.
    pub total_pages: u32,
    pub results: Vec<ImageRecord>,
    pub loading: bool,
    /// Set when a search settles with a failure; cleared on dispatch and on
    /// success. Never set while `loading` is true.
    pub error: Option<AppError>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Where and how to reach the image API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// API credential, supplied at build time.
    pub access_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: SEARCH_ENDPOINT.to_string(),
            access_key: option_env!("UNSPLASH_ACCESS_KEY")
                .unwrap_or_default()
                .to_string(),
        }
    }
}

// Redact debug output because this carries the API credential.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("access_key_present", &!self.access_key.is_empty())
            .finish()
    }
}

/// The complete application state. Mutated only by `App::update`.
#[derive(Debug, Default)]
pub struct Model {
    // Navigation
    pub view: View,

    // Search
    pub search: SearchState,
    /// Sequence number of the most recently dispatched search. Responses
    /// carrying an older number are stale and dropped.
    pub search_seq: u64,

    // Persisted collections
    pub favorites: ImageList,
    pub downloads: ImageList,

    // External API access
    pub api: ApiConfig,
}

impl Model {
    /// Looks an id up in the current results first, then the collections.
    #[must_use]
    pub fn find_record(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.search
            .results
            .iter()
            .find(|record| &record.id == id)
            .or_else(|| self.favorites.get(id))
            .or_else(|| self.downloads.get(id))
    }
}
