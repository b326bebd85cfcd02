//! Pages
//!
//! One component per section of the page.

pub mod activities;
pub mod attendance;
pub mod dashboard;
pub mod notifications;
pub mod profile;
pub mod signup;
pub mod waitlist;

pub use activities::Activities;
pub use attendance::{AttendanceHistory, AttendanceMark};
pub use dashboard::Dashboard;
pub use notifications::{NotificationHistory, NotificationSend};
pub use profile::StudentProfilePage;
pub use signup::Signup;
pub use waitlist::Waitlist;
