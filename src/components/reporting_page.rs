use dioxus::prelude::*;

use crate::api::{HttpApi, PortalApi};
use crate::components::StatsCards;
use crate::state::{ReportingState, ROWS_PER_PAGE_OPTIONS};
use crate::utils::format::{format_optional_timestamp, format_page_range, format_processing_time};

#[allow(non_snake_case)]
#[component]
pub fn Reporting() -> Element {
    let api = use_context::<HttpApi>();
    let mut reporting = use_signal(ReportingState::new);
    // Only pagination changes re-trigger the fetches, not their results
    let query = use_memo(move || reporting.read().query());

    use_effect(move || {
        let _ = query();
        let tag = reporting.write().begin_page_fetch();
        let ticket = reporting.write().begin_stats_fetch();

        let page_api = api.clone();
        spawn(async move {
            let outcome = page_api.list_submissions(tag).await;
            reporting.write().finish_page_fetch(tag, outcome);
        });
        let stats_api = api.clone();
        spawn(async move {
            let outcome = stats_api.statistics().await;
            reporting.write().finish_stats_fetch(ticket, outcome);
        });
    });

    let state = reporting.read().clone();
    if state.show_spinner() {
        return rsx! {
            div { class: "center-box",
                span { class: "spinner" }
            }
        };
    }

    let page = state.page();
    let last_page = state.page_count().saturating_sub(1);
    let per_page = state.rows_per_page();
    let range = format_page_range(page, per_page, state.rows().len(), state.total());

    rsx! {
        div { class: "container-wide",
            h1 { class: "page-title", "Submissions Reporting" }

            if let Some(err) = state.error() {
                div { class: "alert alert-error", role: "alert", "{err}" }
            }

            if let Some(stats) = state.statistics() {
                StatsCards { stats: stats.clone() }
            }

            div { class: "panel panel-flush",
                div { class: "table-header",
                    h2 { "Submission Details" }
                    if state.is_loading() {
                        span { class: "spinner spinner-sm" }
                    }
                    label { class: "select-field",
                        span { "Rows per page" }
                        select {
                            value: "{per_page}",
                            onchange: move |e| {
                                if let Ok(n) = e.value().parse::<usize>() {
                                    reporting.write().set_rows_per_page(n);
                                }
                            },
                            for n in ROWS_PER_PAGE_OPTIONS {
                                option { value: "{n}", selected: n == per_page, "{n}" }
                            }
                        }
                    }
                }
                div { class: "table-scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Submission ID" }
                                th { "Name" }
                                th { "Message" }
                                th { "Batch ID" }
                                th { "Processing Time" }
                                th { "Created At" }
                            }
                        }
                        tbody {
                            for row in state.rows().iter() {
                                tr { key: "{row.submission_id}",
                                    td {
                                        span { class: "chip chip-mono", "{row.submission_id}" }
                                    }
                                    td { class: "strong", "{row.first_name} {row.last_name}" }
                                    td {
                                        div { class: "ellipsis", title: "{row.message}", "{row.message}" }
                                    }
                                    td {
                                        if let Some(batch) = &row.batch_id {
                                            span { class: "chip chip-accent", "{batch}" }
                                        } else {
                                            span { class: "muted", "—" }
                                        }
                                    }
                                    td { class: "mono", "{format_processing_time(row.processing_time)}" }
                                    td { "{format_optional_timestamp(row.created_at.as_deref())}" }
                                }
                            }
                            if state.is_empty_result() {
                                tr {
                                    td { class: "empty-row", colspan: "6", "No submissions found" }
                                }
                            }
                        }
                    }
                }
                div { class: "pagination",
                    span { class: "muted", "{range}" }
                    button {
                        class: "icon-button",
                        aria_label: "First page",
                        disabled: page == 0,
                        onclick: move |_| reporting.write().set_page(0),
                        "«"
                    }
                    button {
                        class: "icon-button",
                        aria_label: "Previous page",
                        disabled: page == 0,
                        onclick: move |_| reporting.write().set_page(page.saturating_sub(1)),
                        "‹"
                    }
                    button {
                        class: "icon-button",
                        aria_label: "Next page",
                        disabled: page >= last_page,
                        onclick: move |_| reporting.write().set_page(page + 1),
                        "›"
                    }
                    button {
                        class: "icon-button",
                        aria_label: "Last page",
                        disabled: page >= last_page,
                        onclick: move |_| reporting.write().set_page(last_page),
                        "»"
                    }
                }
            }
        }
    }
}
