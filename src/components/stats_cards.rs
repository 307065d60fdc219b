use dioxus::prelude::*;

use crate::shared::types::Statistics;
use crate::utils::format::{format_processing_time, format_timestamp};

#[allow(non_snake_case)]
#[component]
pub fn StatsCards(stats: Statistics) -> Element {
    let latest_name = stats
        .latest_submission
        .as_ref()
        .map(|l| l.name.clone())
        .unwrap_or_else(|| "None".to_string());
    let latest_time = stats
        .latest_submission
        .as_ref()
        .and_then(|l| l.timestamp.as_deref())
        .map(format_timestamp);

    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                div { class: "stat-label", "Total Submissions" }
                div { class: "stat-value accent", "{stats.total_submissions}" }
            }
            div { class: "stat-card",
                div { class: "stat-label", "Recent (24h)" }
                div { class: "stat-value secondary", "{stats.recent_submissions}" }
            }
            div { class: "stat-card",
                div { class: "stat-label", "Avg Processing Time" }
                div { class: "stat-value", "{format_processing_time(stats.avg_processing_time)}" }
            }
            div { class: "stat-card",
                div { class: "stat-label", "Latest Submission" }
                div { class: "stat-name", "{latest_name}" }
                if let Some(ts) = latest_time {
                    div { class: "muted small", "{ts}" }
                }
            }
        }
    }
}
