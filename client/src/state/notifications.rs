//! Toast notifications that dismiss themselves.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components push into the shared `RwSignal<NotificationsState>`;
//! `NotificationStack` renders the queue and [`notify`] schedules removal
//! after [`DISMISS_AFTER`].

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::time::Duration;

use leptos::prelude::*;

pub const DISMISS_AFTER: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn background_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500",
            Self::Error => "bg-red-500",
            Self::Info => "bg-blue-500",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle mr-2",
            Self::Error | Self::Info => "fas fa-exclamation-circle mr-2",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn class(&self) -> String {
        format!(
            "fixed top-4 right-4 px-6 py-3 rounded-lg shadow-lg text-white animate-fade-in z-50 {}",
            self.kind.background_class()
        )
    }
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Append a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message: message.into(), kind });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Show a notification and schedule its removal.
pub fn notify(state: RwSignal<NotificationsState>, message: impl Into<String>, kind: NotificationKind) {
    let mut id = 0;
    state.update(|s| id = s.push(message, kind));
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(
            u32::try_from(DISMISS_AFTER.as_millis()).unwrap_or(u32::MAX),
            move || {
                let _ = state.try_update(|s| s.dismiss(id));
            },
        )
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
