use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::cache::{ResponseCache, TokenCache};
use super::models::{ExchangeRequest, ExchangeResponse, ReviewsQuery};
use super::ReviewError;
use crate::config::ReviewSettings;

/// Read-only client for the external review service.
pub struct ReviewClient {
    http: Client,
    base_url: Url,
    company_id: String,
    state_token: Option<String>,
    token_ttl: Duration,
    tokens: TokenCache,
    responses: Option<ResponseCache>,
}

impl ReviewClient {
    pub fn new(settings: &ReviewSettings) -> Result<Self, ReviewError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_millis))
            .build()?;
        let responses = (settings.cache_ttl_seconds > 0)
            .then(|| ResponseCache::new(Duration::from_secs(settings.cache_ttl_seconds)));
        let base_url = Url::parse(&settings.base_url).map_err(|e| ReviewError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ReviewError::InvalidUrl(settings.base_url.clone()));
        }

        let state_token = settings.state_token.clone().filter(|s| !s.is_empty());
        if state_token.is_none() {
            warn!("Review service state token is not configured, requests go out unauthenticated");
        }

        Ok(ReviewClient {
            http,
            base_url,
            company_id: settings.company_id.clone(),
            state_token,
            token_ttl: Duration::from_secs(settings.token_ttl_seconds),
            tokens: TokenCache::new(),
            responses,
        })
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// The storefront's own company on the review service.
    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// `{base}/a/b/...` with every segment percent-encoded, so a segment can
    /// never introduce a query, fragment or extra path level.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, ReviewError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ReviewError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Exchanges the configured state credential for a bearer token.
    pub async fn exchange_token(&self, state: &str) -> Result<String, ReviewError> {
        let response = self
            .http
            .post(self.endpoint(["exchange-token"])?)
            .json(&ExchangeRequest { state })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Status(status.as_u16()));
        }

        let body: ExchangeResponse = response.json().await?;
        match (body.token, body.error) {
            (_, Some(error)) => Err(ReviewError::TokenRejected(error)),
            (Some(token), None) => Ok(token),
            (None, None) => Err(ReviewError::TokenRejected(
                "response carried no token".to_string(),
            )),
        }
    }

    /// The cached token, refreshed through [`Self::exchange_token`] once it
    /// expires. `None` means requests go out unauthenticated.
    pub async fn bearer_token(&self) -> Option<String> {
        if let Some(token) = self.tokens.get() {
            return Some(token);
        }

        let state = self.state_token.as_deref()?;

        match self.exchange_token(state).await {
            Ok(token) => {
                debug!("Exchanged state token for a bearer token");
                self.tokens.set(token.clone(), self.token_ttl);
                Some(token)
            }
            Err(e) => {
                warn!(error = %e, "Token exchange failed");
                None
            }
        }
    }

    #[instrument(name = "reviews::rating", skip(self))]
    pub async fn rating(&self, company_id: &str) -> Result<Value, ReviewError> {
        let key = format!("rating_{}", company_id);
        let url = self.endpoint(["integration", "companies", company_id, "rating"])?;
        self.cached_get(key, self.http.get(url)).await
    }

    #[instrument(name = "reviews::reviews", skip(self))]
    pub async fn reviews(&self, company_id: &str, query: &ReviewsQuery) -> Result<Value, ReviewError> {
        let key = format!(
            "reviews_{}_{}_{}_{}",
            company_id,
            query.page,
            query.size,
            query
                .rating_filter()
                .map_or_else(|| "all".to_string(), |r| r.to_string())
        );
        let url = self.endpoint(["integration", "companies", company_id, "reviews"])?;
        self.cached_get(key, self.http.get(url).query(query)).await
    }

    async fn cached_get(&self, key: String, request: RequestBuilder) -> Result<Value, ReviewError> {
        if let Some(hit) = self.responses.as_ref().and_then(|cache| cache.get(&key)) {
            debug!(%key, "Serving review data from cache");
            return Ok(hit);
        }

        let request = match self.bearer_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Review service returned an error status");
            return Err(ReviewError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        if let Some(cache) = &self.responses {
            cache.set(key, body.clone());
        }
        Ok(body)
    }
}
