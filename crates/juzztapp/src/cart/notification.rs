use crate::model::{Record, RecordId};
use serde::Serialize;
use std::time::Duration;

/// What the user can do from a notification. The presentation layer decides
/// how to honour it (open the cart view, print a hint, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationAction {
    ViewCart,
}

impl NotificationAction {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationAction::ViewCart => "View Cart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
}

/// Transient signal queued by the cart store after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Added {
        record_id: RecordId,
        title: String,
        artist: String,
        price: f64,
        image_url: Option<String>,
        action: NotificationAction,
    },
    Removed {
        record_id: RecordId,
        title: String,
    },
    Cleared,
}

impl Notification {
    pub(crate) fn added(record: &Record) -> Self {
        Notification::Added {
            record_id: record.id,
            title: record.title.clone(),
            artist: record.artist_or_default().to_string(),
            price: record.price,
            image_url: record.image_url.clone(),
            action: NotificationAction::ViewCart,
        }
    }

    pub(crate) fn removed(record: &Record) -> Self {
        Notification::Removed {
            record_id: record.id,
            title: record.title.clone(),
        }
    }

    pub fn level(&self) -> NotificationLevel {
        match self {
            Notification::Added { .. } => NotificationLevel::Success,
            Notification::Removed { .. } | Notification::Cleared => NotificationLevel::Info,
        }
    }

    /// How long a UI should keep the notification on screen.
    pub fn auto_close(&self) -> Duration {
        match self {
            Notification::Added { .. } => Duration::from_millis(4000),
            Notification::Removed { .. } | Notification::Cleared => Duration::from_millis(3000),
        }
    }

    pub fn action(&self) -> Option<NotificationAction> {
        match self {
            Notification::Added { action, .. } => Some(*action),
            _ => None,
        }
    }

    /// One-line human readable text.
    pub fn message(&self) -> String {
        match self {
            Notification::Added {
                title,
                artist,
                price,
                ..
            } => format!("Added to Cart: {} by {} (${:.2})", title, artist, price),
            Notification::Removed { title, .. } => format!("Removed \"{}\" from cart", title),
            Notification::Cleared => "Your cart has been cleared".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_applies_record_defaults() {
        let record = Record::new(4, "Mingus Ah Um", 0.0);
        let n = Notification::added(&record);
        assert_eq!(
            n.message(),
            "Added to Cart: Mingus Ah Um by Unknown Artist ($0.00)"
        );
        assert_eq!(n.action(), Some(NotificationAction::ViewCart));
        assert_eq!(n.level(), NotificationLevel::Success);
        assert_eq!(n.auto_close(), Duration::from_secs(4));
    }

    #[test]
    fn test_removed_and_cleared_are_informational() {
        let record = Record::new(4, "Mingus Ah Um", 12.0);
        let removed = Notification::removed(&record);
        assert_eq!(removed.message(), "Removed \"Mingus Ah Um\" from cart");
        assert_eq!(removed.level(), NotificationLevel::Info);
        assert_eq!(removed.action(), None);

        assert_eq!(Notification::Cleared.message(), "Your cart has been cleared");
        assert_eq!(Notification::Cleared.auto_close(), Duration::from_secs(3));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let value = serde_json::to_value(Notification::Cleared).unwrap();
        assert_eq!(value["kind"], "cleared");

        let added = Notification::added(&Record::new(1, "A", 5.0).with_artist("B"));
        let value = serde_json::to_value(added).unwrap();
        assert_eq!(value["kind"], "added");
        assert_eq!(value["action"], "view_cart");
    }
}
