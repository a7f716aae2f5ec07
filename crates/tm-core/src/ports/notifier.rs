use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Error,
}

/// User-facing message box.
///
/// `message_key` is a stable localization key, never free-form text.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, kind: NoticeKind, message_key: &str);
}
