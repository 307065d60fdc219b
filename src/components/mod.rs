pub mod breadcrumbs;
pub mod home_page;
pub mod nav_shell;
pub mod reporting_page;
pub mod stats_cards;
pub mod videos_page;

pub use breadcrumbs::Breadcrumbs;
pub use home_page::Home;
pub use nav_shell::NavShell;
pub use reporting_page::Reporting;
pub use stats_cards::StatsCards;
pub use videos_page::{PageNotFound, Videos};
