//! The application core: event handling and view assembly.
//!
//! `update` is the only place state changes. Every arm mutates the model,
//! asks the shell for whatever side effects it needs, and requests a
//! repaint. `view` is a pure projection of the model for the active screen.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crux_kv::error::KeyValueError;

use crate::capabilities::Capabilities;
use crate::error::AppError;
use crate::event::Event;
use crate::model::{ImageId, ImageRecord, Model, Preset, View};
use crate::search::{self, SearchResponse};
use crate::store::ImageList;
use crate::{DOWNLOADS_KEY, FAVORITES_KEY, NO_DOWNLOADS_MESSAGE, NO_FAVORITES_MESSAGE};

/// One image as the active screen shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCard {
    pub id: ImageId,
    pub thumbnail_url: String,
    pub full_url: String,
    pub alt_description: String,
    pub is_favorite: bool,
}

impl ImageCard {
    fn new(record: &ImageRecord, favorites: &ImageList) -> Self {
        Self {
            id: record.id.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            full_url: record.full_url.clone(),
            alt_description: record.alt_description.clone(),
            is_favorite: favorites.contains(&record.id),
        }
    }
}

/// A preset category button on the browse screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetView {
    pub label: String,
    pub preset: Preset,
}

/// Snapshot of everything the active screen needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub view: View,
    pub title: String,
    pub images: Vec<ImageCard>,
    pub loading: bool,
    /// The generic fetch-failure message, present only after a search has
    /// settled with a surfaced error.
    pub error_message: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub presets: Vec<PresetView>,
    /// Caption for an empty favorites or downloads screen.
    pub empty_message: Option<String>,
}

#[derive(Default)]
pub struct App;

impl App {
    /// Fires the search for the current query and page. An empty query is
    /// ignored without touching loading or error state.
    fn dispatch_search(model: &mut Model, caps: &Capabilities) {
        if model.search.query.is_empty() {
            debug!("ignoring search with an empty query");
            return;
        }

        let url = match search::search_url(&model.api, &model.search.query, model.search.page) {
            Ok(url) => url,
            Err(err) => {
                error!(%err, "could not build search request");
                model.search.loading = false;
                model.search.error = Some(err);
                return;
            }
        };

        model.search.loading = true;
        model.search.error = None;
        model.search_seq += 1;
        let seq = model.search_seq;
        info!(query = %model.search.query, page = model.search.page, seq, "dispatching search");

        caps.http
            .get(url.as_str())
            .expect_json::<SearchResponse>()
            .send(move |response| Event::SearchCompleted {
                seq,
                response: Box::new(response),
            });
    }

    /// Applies a settled search outcome. On failure the previous results
    /// and page bounds are kept.
    fn apply_search_outcome(
        model: &mut Model,
        response: crux_http::Result<crux_http::Response<SearchResponse>>,
    ) {
        model.search.loading = false;
        match Self::decode_search_response(response) {
            Ok((records, total_pages)) => {
                info!(count = records.len(), total_pages, "search succeeded");
                model.search.results = records;
                model.search.total_pages = total_pages;
                model.search.error = None;
            }
            Err(err) => {
                error!(%err, "search failed");
                model.search.error = Some(err);
            }
        }
    }

    fn decode_search_response(
        response: crux_http::Result<crux_http::Response<SearchResponse>>,
    ) -> Result<(Vec<ImageRecord>, u32), AppError> {
        let mut response = response?;
        if !response.status().is_success() {
            return Err(AppError::api(format!(
                "search returned status {}",
                response.status()
            )));
        }
        let body = response
            .take_body()
            .ok_or_else(|| AppError::api("search response had no body"))?;
        body.into_records()
    }

    /// Writes a collection back to storage under `key`. Serialization
    /// failures are logged and swallowed; the write outcome comes back as
    /// [`Event::ListPersisted`].
    fn persist_list(key: &'static str, list: &ImageList, caps: &Capabilities) {
        match list.to_bytes() {
            Ok(bytes) => {
                caps.key_value
                    .set(key.to_string(), bytes, move |result| Event::ListPersisted {
                        key,
                        result,
                    });
            }
            Err(err) => warn!(key, %err, "could not serialize list, skipping persist"),
        }
    }

    /// Decodes a loaded collection, failing soft to an empty list.
    fn decode_loaded_list(
        key: &'static str,
        result: Result<Option<Vec<u8>>, KeyValueError>,
    ) -> ImageList {
        match result {
            Ok(Some(bytes)) => {
                let list = ImageList::from_bytes(&bytes);
                debug!(key, count = list.len(), "loaded stored list");
                list
            }
            Ok(None) => ImageList::default(),
            Err(err) => {
                warn!(key, %err, "could not read stored list, starting empty");
                ImageList::default()
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(event = event.name(), "handling event");

        match event {
            Event::Start => {
                caps.key_value
                    .get(FAVORITES_KEY.to_string(), Event::FavoritesLoaded);
                caps.key_value
                    .get(DOWNLOADS_KEY.to_string(), Event::DownloadsLoaded);
                caps.render.render();
            }

            Event::SetQuery(query) => {
                model.search.query = query;
                model.search.page = 1;
                Self::dispatch_search(model, caps);
                caps.render.render();
            }

            Event::SelectPreset(preset) => {
                model.search.query = preset.query().to_string();
                model.search.page = 1;
                Self::dispatch_search(model, caps);
                caps.render.render();
            }

            Event::NextPage => {
                if model.search.page >= model.search.total_pages {
                    return;
                }
                model.search.page += 1;
                Self::dispatch_search(model, caps);
                caps.render.render();
            }

            Event::PreviousPage => {
                if model.search.page <= 1 {
                    return;
                }
                model.search.page -= 1;
                Self::dispatch_search(model, caps);
                caps.render.render();
            }

            Event::Navigate(view) => {
                model.view = view;
                caps.render.render();
            }

            Event::ToggleFavorite(id) => {
                let Some(record) = model.find_record(&id).cloned() else {
                    warn!(%id, "toggle-favorite for an unknown image");
                    return;
                };
                if model.favorites.contains(&id) {
                    model.favorites.remove(&id);
                } else {
                    model.favorites.add(record);
                }
                Self::persist_list(FAVORITES_KEY, &model.favorites, caps);
                caps.render.render();
            }

            Event::Download(id) => {
                let Some(record) = model.find_record(&id).cloned() else {
                    warn!(%id, "download for an unknown image");
                    return;
                };
                let filename = format!("image-{}.jpg", record.id);
                caps.file_saver
                    .save(record.full_url.clone(), filename, Event::FileSaved);
                model.downloads.add(record);
                Self::persist_list(DOWNLOADS_KEY, &model.downloads, caps);
                caps.render.render();
            }

            Event::RemoveDownload(id) => {
                model.downloads.remove(&id);
                Self::persist_list(DOWNLOADS_KEY, &model.downloads, caps);
                caps.render.render();
            }

            Event::SearchCompleted { seq, response } => {
                if seq != model.search_seq {
                    debug!(seq, current = model.search_seq, "dropping stale search response");
                    return;
                }
                Self::apply_search_outcome(model, *response);
                caps.render.render();
            }

            Event::FavoritesLoaded(result) => {
                model.favorites = Self::decode_loaded_list(FAVORITES_KEY, result);
                caps.render.render();
            }

            Event::DownloadsLoaded(result) => {
                model.downloads = Self::decode_loaded_list(DOWNLOADS_KEY, result);
                caps.render.render();
            }

            Event::ListPersisted { key, result } => {
                if let Err(err) = result {
                    warn!(key, %err, "failed to persist list");
                }
            }

            Event::FileSaved(result) => match result {
                Ok(output) => debug!(filename = output.filename(), "file save accepted"),
                Err(err) => warn!(%err, "file save failed"),
            },
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let browse = model.view == View::Browse;

        let images: Vec<ImageCard> = match model.view {
            View::Browse => model
                .search
                .results
                .iter()
                .map(|record| ImageCard::new(record, &model.favorites))
                .collect(),
            View::Favorites => model
                .favorites
                .iter()
                .map(|record| ImageCard::new(record, &model.favorites))
                .collect(),
            View::Downloads => model
                .downloads
                .iter()
                .map(|record| ImageCard::new(record, &model.favorites))
                .collect(),
        };

        let empty_message = match model.view {
            View::Favorites if model.favorites.is_empty() => {
                Some(NO_FAVORITES_MESSAGE.to_string())
            }
            View::Downloads if model.downloads.is_empty() => {
                Some(NO_DOWNLOADS_MESSAGE.to_string())
            }
            _ => None,
        };

        let presets = if browse {
            Preset::ALL
                .iter()
                .map(|preset| PresetView {
                    label: preset.label().to_string(),
                    preset: *preset,
                })
                .collect()
        } else {
            Vec::new()
        };

        ViewModel {
            view: model.view,
            title: model.view.title().to_string(),
            images,
            loading: browse && model.search.loading,
            error_message: if browse {
                model
                    .search
                    .error
                    .as_ref()
                    .and_then(AppError::user_message)
                    .map(str::to_string)
            } else {
                None
            },
            page: model.search.page,
            total_pages: model.search.total_pages,
            can_go_previous: browse && model.search.page > 1,
            can_go_next: browse && model.search.page < model.search.total_pages,
            presets,
            empty_message,
        }
    }
}
