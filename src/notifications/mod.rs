//! Daily packet reminders for DSAFlow
//!
//! This module provides:
//! - Time parsing and slot computation across the waking window
//! - The `NotificationHost` seam and reminder scheduling on top of it
//! - A file-backed host for the CLI
//! - A background loop that fires reminders as their times arrive

pub mod daemon;
pub mod local;
pub mod reminders;
pub mod slots;

pub use daemon::{start_reminder_loop, ReminderLoop, ReminderLoopMessage};
pub use local::LocalNotificationHost;
pub use reminders::{
    daily_reminders, next_occurrence, schedule_reminders, DailyReminder, NotificationError,
    NotificationHost, PermissionStatus,
};
pub use slots::{
    compute_slots, parse_or_default, slots_between, ClockTime, ReminderSlot, TimeParseError,
    DEFAULT_SLEEP, DEFAULT_WAKE,
};
