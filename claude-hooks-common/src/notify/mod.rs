//! Desktop notifications for hook events.
//!
//! - [`request`]: turns flags and an optional stdin payload into a title and message
//! - [`terminal`]: finds the terminal application that launched the hook
//! - [`dispatch`]: delivers the notification, falling back to a scripting host

pub mod dispatch;
pub mod request;
pub mod terminal;

pub use dispatch::{Delivery, Notifier};
pub use request::{NotificationOverrides, NotificationRequest};
pub use terminal::{ProcessTableResolver, TerminalApp, TerminalResolver};
