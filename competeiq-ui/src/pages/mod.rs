//! Pages
//!
//! Top-level page components for each route.

pub mod brief_detail;
pub mod create_brief;
pub mod dashboard;
pub mod research;

pub use brief_detail::BriefDetail;
pub use create_brief::CreateBrief;
pub use dashboard::Dashboard;
pub use research::Research;
