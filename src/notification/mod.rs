//! Transient notifications
//!
//! A single message line shown at the bottom of the screen until it expires.
//! Search failures and voice advisories end up here.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
