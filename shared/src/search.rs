//! External image-search API: wire schema, validation, and request URLs.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AppError;
use crate::model::{ApiConfig, ImageId, ImageRecord};
use crate::IMAGES_PER_PAGE;

/// Response body of the search endpoint. Deserialization is strict: a
/// payload missing `results` or `total_pages` is malformed and fails to
/// decode, which the caller reports as an API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ApiImage>,
    pub total_pages: u32,
}

/// One image object as the API returns it, trimmed to the fields the app
/// reads. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiImage {
    pub id: String,
    pub urls: ApiImageUrls,
    pub alt_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiImageUrls {
    pub small: String,
    pub full: String,
}

impl SearchResponse {
    /// Validates the payload and maps it into image records.
    ///
    /// The API is not trusted to be well formed: a record with an empty id
    /// or an empty image URL poisons the whole response.
    pub fn into_records(self) -> Result<(Vec<ImageRecord>, u32), AppError> {
        let mut records = Vec::with_capacity(self.results.len());
        for image in self.results {
            if image.id.is_empty() {
                return Err(AppError::api("search result with an empty id"));
            }
            if image.urls.small.is_empty() || image.urls.full.is_empty() {
                return Err(AppError::api(format!(
                    "search result {} is missing image urls",
                    image.id
                )));
            }
            records.push(ImageRecord {
                id: ImageId(image.id),
                thumbnail_url: image.urls.small,
                full_url: image.urls.full,
                alt_description: image.alt_description.unwrap_or_default(),
            });
        }
        Ok((records, self.total_pages))
    }
}

/// Builds the GET URL for one results page.
pub fn search_url(config: &ApiConfig, query: &str, page: u32) -> Result<Url, AppError> {
    let mut url = Url::parse(&config.base_url).map_err(|err| {
        AppError::api(format!(
            "invalid search endpoint {:?}: {err}",
            config.base_url
        ))
    })?;
    url.query_pairs_mut()
        .append_pair("query", query)
        .append_pair("page", &page.to_string())
        .append_pair("per_page", &IMAGES_PER_PAGE.to_string())
        .append_pair("client_id", &config.access_key);
    Ok(url)
}
