use dioxus::logger::tracing::{debug, info, warn};

use crate::shared::types::{Statistics, Submission, SubmissionPage};

pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_ROWS_PER_PAGE: usize = ROWS_PER_PAGE_OPTIONS[0];
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch submissions";

/// Pagination parameters. Also serves as the tag of an in-flight page
/// request: a response is only applied while its tag is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl PageQuery {
    /// Saturates so a runaway page index cannot overflow the request.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.rows_per_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsTicket(u64);

/// Paged submissions plus the aggregate statistics shown above them.
///
/// The two fetches are independent: statistics can describe a different
/// moment of server state than the rows on screen. A fresh state counts as
/// loading, since the first page fetch starts on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportingState {
    query: PageQuery,
    rows: Vec<Submission>,
    total: u64,
    loading: bool,
    error: Option<String>,
    stats: Option<Statistics>,
    stats_issued: u64,
    stats_applied: u64,
}

impl Default for ReportingState {
    fn default() -> Self {
        Self {
            query: PageQuery::default(),
            rows: Vec::new(),
            total: 0,
            loading: true,
            error: None,
            stats: None,
            stats_issued: 0,
            stats_applied: 0,
        }
    }
}

impl ReportingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> PageQuery {
        self.query
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.query.rows_per_page
    }

    pub fn rows(&self) -> &[Submission] {
        &self.rows
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Full-page spinner only before the first rows arrive, so later page
    /// turns keep the old table on screen.
    pub fn show_spinner(&self) -> bool {
        self.loading && self.rows.is_empty()
    }

    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.rows.is_empty()
    }

    pub fn page_count(&self) -> usize {
        let per = self.query.rows_per_page.max(1) as u64;
        self.total.div_ceil(per) as usize
    }

    /// Out-of-range pages are left for the server to clamp.
    pub fn set_page(&mut self, page: usize) {
        self.query.page = page;
    }

    /// Switches page size and rewinds to the first page. Sizes outside
    /// [`ROWS_PER_PAGE_OPTIONS`] are ignored and `false` is returned.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> bool {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page) {
            warn!("[reporting] ignoring unsupported page size {rows_per_page}");
            return false;
        }
        self.query = PageQuery {
            page: 0,
            rows_per_page,
        };
        true
    }

    pub fn begin_page_fetch(&mut self) -> PageQuery {
        self.loading = true;
        self.error = None;
        self.query
    }

    /// Applies a page response if `tag` still matches the current query.
    /// Returns whether the response was applied.
    pub fn finish_page_fetch(
        &mut self,
        tag: PageQuery,
        outcome: anyhow::Result<SubmissionPage>,
    ) -> bool {
        if tag != self.query {
            debug!(
                "[reporting] dropping stale page response for page={} size={}",
                tag.page, tag.rows_per_page
            );
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                info!(
                    "[reporting] page {} loaded: {} rows of {}",
                    tag.page,
                    page.submissions.len(),
                    page.total
                );
                self.rows = page.submissions;
                self.total = page.total;
            }
            Err(e) => {
                warn!("[reporting] page fetch failed: {e:#}");
                let text = e.to_string();
                self.error = Some(if text.trim().is_empty() {
                    FETCH_FALLBACK_MESSAGE.to_string()
                } else {
                    text
                });
            }
        }
        true
    }

    pub fn begin_stats_fetch(&mut self) -> StatsTicket {
        self.stats_issued += 1;
        StatsTicket(self.stats_issued)
    }

    /// Failures are logged only; the stat cards keep whatever they showed.
    pub fn finish_stats_fetch(
        &mut self,
        ticket: StatsTicket,
        outcome: anyhow::Result<Statistics>,
    ) -> bool {
        match outcome {
            Ok(stats) => {
                if ticket.0 < self.stats_applied {
                    debug!("[reporting] dropping stale statistics #{}", ticket.0);
                    return false;
                }
                self.stats_applied = ticket.0;
                self.stats = Some(stats);
                true
            }
            Err(e) => {
                warn!("Failed to fetch statistics: {e:#}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::status_error;

    fn row(id: &str) -> Submission {
        Submission {
            submission_id: id.into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            message: "Welcome!".into(),
            batch_id: None,
            processing_time: 0.1,
            created_at: Some("2025-03-01T10:00:00Z".into()),
        }
    }

    fn page_of(n: usize, total: u64) -> SubmissionPage {
        SubmissionPage {
            submissions: (0..n).map(|i| row(&format!("s-{i}"))).collect(),
            total,
        }
    }

    #[test]
    fn offset_is_page_times_size() {
        let q = PageQuery {
            page: 3,
            rows_per_page: 25,
        };
        assert_eq!(q.offset(), 75);
        assert_eq!(PageQuery::default().offset(), 0);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let q = PageQuery {
            page: usize::MAX,
            rows_per_page: 100,
        };
        assert_eq!(q.offset(), usize::MAX);
    }

    #[test]
    fn fresh_state_shows_spinner_not_empty_table() {
        let state = ReportingState::new();
        assert!(state.is_loading());
        assert!(state.show_spinner());
        assert!(!state.is_empty_result());
    }

    #[test]
    fn page_count_rounds_up() {
        let mut state = ReportingState::new();
        let tag = state.begin_page_fetch();
        state.finish_page_fetch(tag, Ok(page_of(5, 42)));
        assert_eq!(state.page_count(), 5);
        assert_eq!(state.rows().len(), 5);
        assert_eq!(state.total(), 42);
    }

    #[test]
    fn changing_page_size_rewinds_to_first_page() {
        let mut state = ReportingState::new();
        state.set_page(4);
        assert!(state.set_rows_per_page(50));
        assert_eq!(state.page(), 0);
        assert_eq!(state.begin_page_fetch().offset(), 0);
    }

    #[test]
    fn unsupported_page_size_is_rejected() {
        let mut state = ReportingState::new();
        state.set_page(2);
        assert!(!state.set_rows_per_page(7));
        assert_eq!(state.rows_per_page(), DEFAULT_ROWS_PER_PAGE);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn failed_page_fetch_keeps_previous_rows() {
        let mut state = ReportingState::new();
        let tag = state.begin_page_fetch();
        state.finish_page_fetch(tag, Ok(page_of(10, 30)));

        state.set_page(1);
        let tag = state.begin_page_fetch();
        assert!(!state.show_spinner());
        state.finish_page_fetch(tag, Err(status_error(502)));
        assert_eq!(state.error(), Some("HTTP error! status: 502"));
        assert_eq!(state.rows().len(), 10);
        assert_eq!(state.total(), 30);
        assert!(!state.is_loading());
    }

    #[test]
    fn spinner_only_before_first_rows() {
        let mut state = ReportingState::new();
        let tag = state.begin_page_fetch();
        assert!(state.show_spinner());
        state.finish_page_fetch(tag, Ok(page_of(0, 0)));
        assert!(!state.show_spinner());
        assert!(state.is_empty_result());
    }

    #[test]
    fn stale_page_response_is_discarded() {
        let mut state = ReportingState::new();
        let first = state.begin_page_fetch();
        state.set_page(1);
        let second = state.begin_page_fetch();

        assert!(state.finish_page_fetch(second, Ok(page_of(3, 13))));
        assert!(!state.finish_page_fetch(first, Ok(page_of(10, 13))));
        assert_eq!(state.rows().len(), 3);
        assert_eq!(state.rows()[0].submission_id, "s-0");
    }

    #[test]
    fn older_statistics_do_not_overwrite_newer() {
        let mut state = ReportingState::new();
        let old = state.begin_stats_fetch();
        let new = state.begin_stats_fetch();
        let fresh = Statistics {
            total_submissions: 9,
            ..Default::default()
        };
        assert!(state.finish_stats_fetch(new, Ok(fresh)));
        assert!(!state.finish_stats_fetch(old, Ok(Statistics::default())));
        assert_eq!(state.statistics().map(|s| s.total_submissions), Some(9));
    }

    #[test]
    fn statistics_failure_is_silent() {
        let mut state = ReportingState::new();
        let t = state.begin_stats_fetch();
        assert!(!state.finish_stats_fetch(t, Err(status_error(500))));
        assert!(state.statistics().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn page_tag_carries_limit_and_offset_of_current_page() {
        let mut state = ReportingState::new();
        state.set_rows_per_page(25);
        state.set_page(1);
        let tag = state.begin_page_fetch();
        let ticket = state.begin_stats_fetch();
        assert_eq!(tag.rows_per_page, 25);
        assert_eq!(tag.offset(), 25);

        assert!(state.finish_page_fetch(tag, Ok(page_of(5, 42))));
        assert!(state.finish_stats_fetch(ticket, Ok(Statistics::default())));
        assert_eq!(state.rows().len(), 5);
        assert!(state.statistics().is_some());
    }

    #[test]
    fn page_turn_mid_flight_discards_slower_earlier_response() {
        let mut state = ReportingState::new();
        let first = state.begin_page_fetch();
        let first_stats = state.begin_stats_fetch();

        state.set_page(2);
        let second = state.begin_page_fetch();
        let second_stats = state.begin_stats_fetch();
        assert_eq!(second.offset(), 20);

        assert!(state.finish_page_fetch(second, Ok(page_of(4, 24))));
        assert!(state.finish_stats_fetch(second_stats, Ok(Statistics::default())));
        assert!(!state.finish_page_fetch(first, Err(status_error(500))));
        assert!(!state.finish_stats_fetch(first_stats, Ok(Statistics::default())));
        assert_eq!(state.rows().len(), 4);
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn stats_failure_does_not_mask_page_error() {
        let mut state = ReportingState::new();
        let tag = state.begin_page_fetch();
        let ticket = state.begin_stats_fetch();
        state.finish_stats_fetch(ticket, Err(status_error(503)));
        state.finish_page_fetch(tag, Err(status_error(500)));
        assert_eq!(state.error(), Some("HTTP error! status: 500"));
        assert!(state.statistics().is_none());
    }
}
