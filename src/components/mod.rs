//! UI Components
//!
//! Reusable Leptos components shared by the page sections.

pub mod activity_select;
pub mod message;
pub mod nav;
pub mod section;

pub use activity_select::ActivitySelect;
pub use message::{EmptyPlaceholder, ErrorBlock, FlashBanner, StatusMessage};
pub use nav::Nav;
pub use section::SectionContainer;
