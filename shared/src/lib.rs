//! Shared core of SearchPix: search an image API, browse paginated
//! results, keep favorites and downloads in persisted collections.
//!
//! The crate is a headless Crux app. Shells drive it with [`Event`]s,
//! execute the effects it requests (HTTP, key-value storage, file saves,
//! repaints), and render [`ViewModel`] snapshots.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod error;
pub mod event;
pub mod model;
pub mod search;
pub mod store;

pub use app::{App, ImageCard, PresetView, ViewModel};
pub use capabilities::{Capabilities, Effect};
pub use error::{AppError, ErrorKind};
pub use event::Event;
pub use model::{ApiConfig, ImageId, ImageRecord, Model, Preset, SearchState, View};
pub use store::ImageList;

pub use crux_core::Core;

/// Endpoint queried for images.
pub const SEARCH_ENDPOINT: &str = "https://api.unsplash.com/search/photos";
/// Results requested per page.
pub const IMAGES_PER_PAGE: u32 = 20;

/// Storage key holding the favorites collection.
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key holding the downloads collection.
pub const DOWNLOADS_KEY: &str = "downloads";

/// Shown for any surfaced search failure, regardless of cause.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching images. Try again later.";

// UI strings shared with the shells.
pub const BROWSE_TITLE: &str = "SearchPix";
pub const FAVORITES_TITLE: &str = "Favorite Images";
pub const DOWNLOADS_TITLE: &str = "Downloaded Images";
pub const NO_FAVORITES_MESSAGE: &str = "No favorite images.";
pub const NO_DOWNLOADS_MESSAGE: &str = "No downloaded images yet.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const SEARCH_PLACEHOLDER: &str = "Type something to search...";
