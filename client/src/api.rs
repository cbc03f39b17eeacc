//! HTTP client for the weather routing backend.
//!
//! Every call is a single GET against the backend: no caching, no retries.
//! Failures (transport, non-2xx status, undecodable body) are returned to the
//! caller with the originating `reqwest::Error` kept in the error chain.

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use shared::{ForecastReport, GribFile, HealthResponse, ReportFormat, ReportQuery, Route};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the backend served at `base_url`.
    ///
    /// The base URL may carry a deployment prefix (e.g. `https://host/app/wx/`),
    /// request paths are appended below it.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid API URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("API URL cannot be a base: {}", base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /health`
    pub async fn get_health(&self) -> Result<HealthResponse> {
        let url = self.endpoint(&["health"])?;
        self.get_json(self.client.get(url)).await
    }

    /// `GET /routes`
    pub async fn get_routes(&self) -> Result<Vec<Route>> {
        let url = self.endpoint(&["routes"])?;
        self.get_json(self.client.get(url)).await
    }

    /// `GET /api/latest-report/{route_id}?model={model}&fmt=json`
    ///
    /// `model` defaults to `gfs`.
    pub async fn get_latest_report(
        &self,
        route_id: &str,
        model: Option<&str>,
    ) -> Result<ForecastReport> {
        let request = self.latest_report_request(route_id, model, ReportFormat::Json)?;
        self.get_json(request).await
    }

    /// Same endpoint as [`ApiClient::get_latest_report`], rendered by the backend as HTML.
    pub async fn get_latest_report_html(
        &self,
        route_id: &str,
        model: Option<&str>,
    ) -> Result<String> {
        let request = self.latest_report_request(route_id, model, ReportFormat::Html)?;
        let (url, response) = self.send(request).await?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read body: GET {}", url))
    }

    /// `GET /api/grib-files`
    pub async fn get_grib_files(&self) -> Result<Vec<GribFile>> {
        let url = self.endpoint(&["api", "grib-files"])?;
        self.get_json(self.client.get(url)).await
    }

    fn latest_report_request(
        &self,
        route_id: &str,
        model: Option<&str>,
        fmt: ReportFormat,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint(&["api", "latest-report", route_id])?;
        Ok(self.client.get(url).query(&ReportQuery::new(model, fmt)))
    }

    /// Append path segments to the base URL. Each segment is percent-encoded
    /// on its own, so a route id never spans more than one segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let (url, response) = self.send(request).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Invalid response body: GET {}", url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<(Url, Response)> {
        let request = request.build().context("Failed to build request")?;
        let url = request.url().clone();

        log::debug!("GET {}", url);

        let response = self
            .client
            .execute(request)
            .await
            .with_context(|| format!("Request failed: GET {}", url))?
            .error_for_status()
            .with_context(|| format!("Unexpected status: GET {}", url))?;

        Ok((url, response))
    }
}
