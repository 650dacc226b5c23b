//! UI Components
//!
//! Reusable Leptos components for the brief workspace.

pub mod brief_card;
pub mod nav;
pub mod toast;

pub use brief_card::BriefCard;
pub use nav::Sidebar;
pub use toast::Toast;
