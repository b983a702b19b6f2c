//! # piano-api
//!
//! REST client for the piano teacher backend.
//!
//! One [`ApiClient`] per process. Every operation takes the caller's
//! [`SessionContext`] explicitly; the client itself holds no identity.
//! Successful GET responses are cached for the configured TTL under
//! `"{endpoint}_{METHOD}"`, and any successful write drops the cached reads of
//! the collection it touched.
//!
//! Resource operations live in per-resource modules:
//! - students
//! - schedules (including scheduling suggestions)
//! - lessons
//! - homework
//! - dashboard (concurrent aggregate counts)

pub mod confirm;
pub mod dashboard;
pub mod generation;
pub mod homework;
pub mod lessons;
pub mod schedules;
pub mod students;

mod error;
mod http;

pub use confirm::{AlwaysConfirm, Confirm, DeleteOutcome, confirm_delete};
pub use error::ApiError;
pub use generation::{Generation, Generations, Latest};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use piano_auth::SessionContext;
use piano_cache::TtlCache;
use piano_config::{ApiConfig, CacheConfig};
use piano_core::validation::RequiredFields;
use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{check_response, read_json};

type ResponseCache = TtlCache<String, Value>;

/// Cache key for a request: `"{endpoint}_{METHOD}"`, e.g. `students_GET`.
#[must_use]
pub fn cache_key(endpoint: &str, method: &Method) -> String {
    format!("{endpoint}_{method}")
}

/// Collection an endpoint belongs to: `"schedules?date=.."` → `"schedules"`.
fn collection_of(endpoint: &str) -> &str {
    endpoint
        .split(['/', '?'])
        .next()
        .unwrap_or(endpoint)
}

/// Percent-encode an id for use as a path segment.
fn id_segment(id: &impl std::fmt::Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

/// HTTP client for the piano teacher backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Option<Arc<Mutex<ResponseCache>>>,
    ttl: Duration,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `api.base_url` is not an
    /// absolute http(s) URL, or [`ApiError::Http`] if the HTTP client cannot
    /// be constructed.
    pub fn new(api: &ApiConfig, cache_config: &CacheConfig) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&api.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent("piano-teacher/0.1");
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }

        let cache = cache_config
            .enabled
            .then(|| Arc::new(Mutex::new(ResponseCache::new())));
        if cache.is_none() {
            tracing::debug!("response cache disabled");
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            cache,
            ttl: cache_config.ttl(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of cached responses, including expired ones not yet swept.
    #[must_use]
    pub fn cached_responses(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| lock(cache).len())
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            lock(cache).clear();
        }
    }

    /// Sweep expired cache entries every `interval` on a background task.
    ///
    /// Returns `None` when caching is disabled. Abort the returned handle to
    /// stop sweeping.
    #[must_use]
    pub fn spawn_cache_sweeper(&self, interval: Duration) -> Option<tokio::task::JoinHandle<()>> {
        let cache = Arc::clone(self.cache.as_ref()?);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                lock(&cache).sweep();
            }
        }))
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    fn request(
        &self,
        method: Method,
        endpoint: &str,
        session: &SessionContext,
    ) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_LANGUAGE, session.language());
        match session.auth_header() {
            Some(header) => builder.header(AUTHORIZATION, header),
            None => {
                tracing::warn!(endpoint, "no credentials in session; sending request without Authorization");
                builder
            }
        }
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        method: &Method,
        endpoint: &str,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(%method, endpoint, "sending request");
        let resp = builder.send().await.map_err(|error| {
            tracing::warn!(%method, endpoint, %error, "request failed");
            ApiError::Http(error)
        })?;
        check_response(resp, endpoint).await
    }

    /// GET `endpoint`, answering from the cache when a live entry exists.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        session: &SessionContext,
    ) -> Result<T, ApiError> {
        let key = cache_key(endpoint, &Method::GET);
        if let Some(hit) = self.cached(&key) {
            tracing::debug!(key, "cache hit");
            return serde_json::from_value(hit)
                .map_err(|e| ApiError::Parse(format!("{endpoint}: {e}")));
        }

        let resp = self
            .send(self.request(Method::GET, endpoint, session), &Method::GET, endpoint)
            .await?;
        let value: Value = read_json(resp, endpoint).await?;
        let parsed = serde_json::from_value(value.clone())
            .map_err(|e| ApiError::Parse(format!("{endpoint}: {e}")))?;
        self.store(key, value);
        Ok(parsed)
    }

    /// Validate `record`, then POST or PUT it and decode the saved record.
    pub(crate) async fn save<T>(
        &self,
        method: Method,
        endpoint: &str,
        record: &T,
        session: &SessionContext,
    ) -> Result<T, ApiError>
    where
        T: RequiredFields + Serialize + DeserializeOwned,
    {
        if let Err(error) = record.ensure_complete() {
            tracing::warn!(endpoint, %error, "not saving incomplete record");
            return Err(error.into());
        }
        let builder = self.request(method.clone(), endpoint, session).json(record);
        let resp = self.send(builder, &method, endpoint).await?;
        self.invalidate(endpoint);
        read_json(resp, endpoint).await
    }

    /// PUT a record without local validation (used when only server-owned
    /// fields change, e.g. a status toggle on a fetched record).
    pub(crate) async fn put_value<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        session: &SessionContext,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, endpoint, session).json(body);
        let resp = self.send(builder, &Method::PUT, endpoint).await?;
        self.invalidate(endpoint);
        read_json(resp, endpoint).await
    }

    pub(crate) async fn delete(
        &self,
        endpoint: &str,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.send(
            self.request(Method::DELETE, endpoint, session),
            &Method::DELETE,
            endpoint,
        )
        .await?;
        self.invalidate(endpoint);
        Ok(())
    }

    fn cached(&self, key: &str) -> Option<Value> {
        let cache = self.cache.as_ref()?;
        lock(cache).get(key).cloned()
    }

    fn store(&self, key: String, value: Value) {
        if let Some(cache) = &self.cache {
            lock(cache).set(key, value, self.ttl);
        }
    }

    /// Drop cached reads of the collection `endpoint` belongs to.
    fn invalidate(&self, endpoint: &str) {
        let Some(cache) = &self.cache else { return };
        let collection = collection_of(endpoint);
        let dropped = lock(cache).retain_keys(|key| !key.starts_with(collection));
        if dropped > 0 {
            tracing::debug!(collection, dropped, "invalidated cached reads");
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("cache_enabled", &self.cache.is_some())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn lock(cache: &Mutex<ResponseCache>) -> MutexGuard<'_, ResponseCache> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("students", Method::GET, "students_GET")]
    #[case("schedules?date=2024-05-01", Method::GET, "schedules?date=2024-05-01_GET")]
    #[case("lessons/7", Method::PUT, "lessons/7_PUT")]
    fn cache_key_format(#[case] endpoint: &str, #[case] method: Method, #[case] expected: &str) {
        assert_eq!(cache_key(endpoint, &method), expected);
    }

    #[rstest]
    #[case("students", "students")]
    #[case("students/3", "students")]
    #[case("schedules?date=2024-05-01", "schedules")]
    #[case("schedules/suggestions?studentId=1", "schedules")]
    fn collection_of_endpoint(#[case] endpoint: &str, #[case] expected: &str) {
        assert_eq!(collection_of(endpoint), expected);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/api/").unwrap(),
            "http://localhost:8080/api"
        );
    }

    #[rstest]
    #[case("")]
    #[case("localhost:8080/api")]
    #[case("ftp://example.com/api")]
    fn rejects_bad_base_urls(#[case] raw: &str) {
        assert!(matches!(
            normalize_base_url(raw),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn id_segment_is_percent_encoded() {
        assert_eq!(id_segment(&"a b/c"), "a%20b%2Fc");
        assert_eq!(id_segment(&42), "42");
    }

    #[test]
    fn disabled_cache_reports_nothing() {
        let cache = CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        };
        let client = ApiClient::new(&ApiConfig::default(), &cache).unwrap();
        assert_eq!(client.cached_responses(), 0);
        assert!(format!("{client:?}").contains("cache_enabled: false"));
    }
}
