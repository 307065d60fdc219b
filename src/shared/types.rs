use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub message: String,
}

/// One row of the reporting table, as returned by `GET /submissions`.
///
/// Nullable database columns arrive as `null`; they decode to empty values
/// instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub submission_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub processing_time: f64, // seconds
    #[serde(default)]
    pub created_at: Option<String>, // ISO-8601
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPage {
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSubmission {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// Every field is defaulted: the API serves both the full database-backed
// snapshot and a bare `{total_messages, api_version, status}` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_submissions: u64,
    pub total_messages: u64,
    pub recent_submissions: u64,
    pub avg_processing_time: f64,
    pub latest_submission: Option<LatestSubmission>,
    pub api_version: String,
    pub status: String,
    pub debug_mode: bool,
    pub last_submission: Option<String>,
    pub uptime_seconds: f64,
}
