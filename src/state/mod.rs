pub mod reporting;
pub mod submission;
pub mod theme;

pub use reporting::{PageQuery, ReportingState, ROWS_PER_PAGE_OPTIONS};
pub use submission::SubmissionForm;
pub use theme::{ThemeMode, ThemeStore};

