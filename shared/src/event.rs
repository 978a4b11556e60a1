//! Input alphabet of the app core.
//!
//! UI-facing events are serializable so shells can construct them over the
//! FFI boundary. The capability callbacks at the bottom are core-internal
//! and excluded from that surface.

use crux_kv::error::KeyValueError;
use serde::{Deserialize, Serialize};

use crate::capabilities::FileSaverResult;
use crate::model::{ImageId, Preset, View};
use crate::search::SearchResponse;

#[derive(Serialize, Deserialize)]
pub enum Event {
    // ----- Lifecycle -----
    /// First event after boot: hydrates both persisted collections.
    Start,

    // ----- Browse controller -----
    SetQuery(String),
    SelectPreset(Preset),
    NextPage,
    PreviousPage,

    // ----- Navigation -----
    Navigate(View),

    // ----- Collections -----
    ToggleFavorite(ImageId),
    Download(ImageId),
    RemoveDownload(ImageId),

    // ----- Capability callbacks (core-internal) -----
    #[serde(skip)]
    SearchCompleted {
        /// Sequence number the request was dispatched with; stale responses
        /// are recognized by comparing it against the model.
        seq: u64,
        response: Box<crux_http::Result<crux_http::Response<SearchResponse>>>,
    },
    #[serde(skip)]
    FavoritesLoaded(Result<Option<Vec<u8>>, KeyValueError>),
    #[serde(skip)]
    DownloadsLoaded(Result<Option<Vec<u8>>, KeyValueError>),
    #[serde(skip)]
    ListPersisted {
        key: &'static str,
        result: Result<Option<Vec<u8>>, KeyValueError>,
    },
    #[serde(skip)]
    FileSaved(FileSaverResult),
}

impl Event {
    /// Stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::SetQuery(_) => "SetQuery",
            Self::SelectPreset(_) => "SelectPreset",
            Self::NextPage => "NextPage",
            Self::PreviousPage => "PreviousPage",
            Self::Navigate(_) => "Navigate",
            Self::ToggleFavorite(_) => "ToggleFavorite",
            Self::Download(_) => "Download",
            Self::RemoveDownload(_) => "RemoveDownload",
            Self::SearchCompleted { .. } => "SearchCompleted",
            Self::FavoritesLoaded(_) => "FavoritesLoaded",
            Self::DownloadsLoaded(_) => "DownloadsLoaded",
            Self::ListPersisted { .. } => "ListPersisted",
            Self::FileSaved(_) => "FileSaved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_size_is_reasonable() {
        assert!(std::mem::size_of::<Event>() <= 128);
    }

    #[test]
    fn ui_events_roundtrip_through_serde() {
        let json = serde_json::to_string(&Event::SelectPreset(Preset::Animals)).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name(), "SelectPreset");
    }

    #[test]
    fn navigation_event_carries_the_target_view() {
        let json = serde_json::to_string(&Event::Navigate(View::Downloads)).unwrap();

        assert!(json.contains("Downloads"));
    }
}
