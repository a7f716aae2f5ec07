use tm_core::ports::{NoticeKind, NotifierPort};
use tracing::warn;

/// English fallback text for message keys. Unknown keys print verbatim.
fn message_text(message_key: &str) -> &str {
    match message_key {
        "error-failed-to-load-snapshot" => "Failed to load snapshot",
        other => other,
    }
}

/// Prints notices to stderr.
pub struct ConsoleNotifier;

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message_key: &str) {
        if kind == NoticeKind::Error {
            warn!(message_key, "User-facing error");
        }
        let label = match kind {
            NoticeKind::Info => "info",
            NoticeKind::Error => "error",
        };
        eprintln!("[{}] {}", label, message_text(message_key));
    }
}
