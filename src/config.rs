/// Environment variable selecting the API base URL.
pub const API_URL_VAR: &str = "PORTAL_API_URL";

/// Base used when nothing is configured: ingress-style deployment where the
/// API is mounted under `/api` on the same origin.
pub const DEFAULT_API_BASE: &str = "/api";

pub const SUBMIT_ENDPOINT: &str = "/submit";
pub const SUBMISSIONS_ENDPOINT: &str = "/submissions";
pub const STATS_ENDPOINT: &str = "/stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolves the base from the environment. Browser bundles only see the
    /// value baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_value(configured_base())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(v.trim()),
            _ => Self::default(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        build_url(&self.base_url, endpoint)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_base() -> Option<String> {
    std::env::var(API_URL_VAR)
        .ok()
        .or_else(|| option_env!("PORTAL_API_URL").map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn configured_base() -> Option<String> {
    option_env!("PORTAL_API_URL").map(str::to_string)
}

/// Joins a logical endpoint onto a configured base.
///
/// - empty base: the endpoint is returned as is (same-origin relative)
/// - root-relative base (`/api`): `"/api/" + "submit"`
/// - absolute base (`https://h/api/`): `"https://h/api" + "/submit"`
///
/// The join point never carries more than one slash.
pub fn build_url(base: &str, endpoint: &str) -> String {
    if base.is_empty() {
        return endpoint.to_string();
    }
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    if base.is_empty() {
        // base was "/" (or a run of slashes)
        return format!("/{endpoint}");
    }
    format!("{base}/{endpoint}")
}
