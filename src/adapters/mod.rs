//! Terminal presentation adapters.

mod console_notifier;
mod console_renderer;

pub use console_notifier::ConsoleNotifier;
pub use console_renderer::{ConsoleRenderer, MapSummary};
