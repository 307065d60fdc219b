use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::error::Error as _;

use crate::config::{ApiConfig, STATS_ENDPOINT, SUBMISSIONS_ENDPOINT, SUBMIT_ENDPOINT};
use crate::shared::types::{Statistics, SubmissionPage, SubmissionRequest, SubmissionResult};
use crate::state::PageQuery;

// No timeouts: requests run until the transport gives up.
static CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// The three calls the portal makes against the external API.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResult>;
    async fn list_submissions(&self, query: PageQuery) -> Result<SubmissionPage>;
    async fn statistics(&self) -> Result<Statistics>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: String,
        method: Method,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = resolve_origin(url)?;
        info!("[api] {} {}", method.as_str(), url);
        let method_s = method.as_str().to_string();
        let mut req = CLIENT
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Cache-Control", "no-store");
        if let Some(b) = body {
            req = req.json(&b);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("[api] request error on {} {}: {}", method_s, url, e);
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    warn!("[api] error chain: {}", chain.join(" -> "));
                }
                return Err(anyhow!("{}", e));
            }
        };
        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            warn!(
                "[api] {} {} failed: status={} body=\n{}",
                method_s, url, status, text
            );
            return Err(status_error(status.as_u16()));
        }
        let bytes = res
            .bytes()
            .await
            .with_context(|| format!("reading body from {} {}", method_s, url))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let snip = String::from_utf8_lossy(&bytes);
            let snip = snip.chars().take(300).collect::<String>();
            warn!(
                "[api] decoding JSON from {} {} failed: {}\nBody snippet: {}",
                method_s, url, e, snip
            );
            anyhow!("Unexpected response from server: {}", e)
        })
    }
}

impl PortalApi for HttpApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResult> {
        let body = serde_json::to_value(request)?;
        self.fetch_json(self.config.url(SUBMIT_ENDPOINT), Method::POST, Some(body))
            .await
    }

    async fn list_submissions(&self, query: PageQuery) -> Result<SubmissionPage> {
        let url = format!(
            "{}?limit={}&offset={}",
            self.config.url(SUBMISSIONS_ENDPOINT),
            query.rows_per_page,
            query.offset()
        );
        self.fetch_json(url, Method::GET, None).await
    }

    async fn statistics(&self) -> Result<Statistics> {
        self.fetch_json(self.config.url(STATS_ENDPOINT), Method::GET, None)
            .await
    }
}

pub fn status_error(status: u16) -> anyhow::Error {
    anyhow!("HTTP error! status: {}", status)
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// The HTTP client only accepts absolute URLs; relative ones are anchored
/// on the page origin in the browser.
#[cfg(feature = "web")]
fn resolve_origin(url: String) -> Result<String> {
    if is_absolute(&url) {
        return Ok(url);
    }
    let origin = crate::platform::page_origin()
        .ok_or_else(|| anyhow!("cannot resolve relative API URL {url}: no page origin"))?;
    Ok(crate::config::build_url(&origin, &url))
}

#[cfg(not(feature = "web"))]
fn resolve_origin(url: String) -> Result<String> {
    if is_absolute(&url) {
        Ok(url)
    } else {
        Err(anyhow!(
            "relative API URL {url} needs an absolute {} on this platform",
            crate::config::API_URL_VAR
        ))
    }
}
