use crate::error::{ConfigError, TransportFailure};
use crate::query::SearchQuery;
use crate::results::{ImageResult, SearchResultPage};
use crate::services::service::{ImageService, SearchFuture};
use crate::utils::{body_excerpt, redact_credential};
use serde::Deserialize;
use url::Url;

/// Default photo search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

/// Response envelope of the search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<PhotoRecord>,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    id: String,
    urls: PhotoUrls,
    #[serde(default)]
    alt_description: Option<String>,
    links: PhotoLinks,
    #[serde(default)]
    color: Option<String>,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    #[serde(default)]
    regular: Option<String>,
    #[serde(default)]
    small: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoLinks {
    download: String,
}

impl PhotoRecord {
    fn into_image(self) -> Result<ImageResult, TransportFailure> {
        let display_url = self.urls.regular.or(self.urls.small).ok_or_else(|| {
            TransportFailure::MalformedPayload(format!("photo {} has no display URL", self.id))
        })?;

        Ok(ImageResult {
            id: self.id,
            display_url,
            download_url: self.links.download,
            alt_text: self.alt_description.unwrap_or_default(),
            dominant_color: self.color.unwrap_or_default(),
            width: self.width,
            height: self.height,
        })
    }
}

/// Decode a search response body answering `page`
pub fn parse_search_response(body: &str, page: u32) -> Result<SearchResultPage, TransportFailure> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| TransportFailure::MalformedPayload(e.to_string()))?;

    let results = response
        .results
        .into_iter()
        .map(PhotoRecord::into_image)
        .collect::<Result<Vec<_>, _>>()?;

    let result_page = SearchResultPage::new(page, response.total_pages, results);
    result_page.check_invariants()?;
    Ok(result_page)
}

/// HTTP client for the Unsplash photo search API
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    endpoint: Url,
    access_key: String,
}

impl UnsplashClient {
    /// Create a client for `endpoint` authorized with `access_key`.
    ///
    /// The key is not checked here; an empty or wrong key surfaces as an
    /// authentication failure from the service.
    pub fn new(endpoint: &str, access_key: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ConfigError::Endpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            access_key: access_key.into(),
        })
    }

    /// Build the full request URL for a query
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query.text())
            .append_pair("page", &query.page().to_string())
            .append_pair("per_page", &query.page_size().to_string())
            .append_pair("content_filter", query.safe_search().as_str())
            .append_pair("client_id", &self.access_key);
        url
    }
}

impl ImageService for UnsplashClient {
    fn search(&self, query: SearchQuery) -> SearchFuture {
        let http = self.http.clone();
        let url = self.request_url(&query);

        Box::pin(async move {
            ::log::debug!("GET {}", redact_credential(&url));

            let response = http
                .get(url)
                .header("Accept-Version", "v1")
                .send()
                .await
                .map_err(|e| TransportFailure::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportFailure::Network(e.to_string()))?;

            if !status.is_success() {
                return Err(TransportFailure::Status {
                    status: status.as_u16(),
                    body: body_excerpt(&body),
                });
            }

            let page = parse_search_response(&body, query.page())?;
            ::log::debug!(
                "Received {} images for '{}' (page {} of {})",
                page.len(),
                query.text(),
                page.page,
                page.total_pages
            );
            Ok(page)
        })
    }
}
