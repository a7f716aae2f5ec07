//! TimeMachine viewer
//!
//! 快照时间机器查看器

pub mod adapters;
pub mod bootstrap;
pub mod shell;

use anyhow::Context;
use tm_app::{read_initial_selection, NavigationController};
use tm_core::ports::LocationPort;
use tm_core::Selection;
use tracing::info;

/// Pick the selection to open with: a command-line argument wins over the
/// persisted location.
///
/// The argument may be a query (`?viewing-snapshot=3,7`) or a bare id list (`3,7`).
pub fn initial_selection(
    arg: Option<&str>,
    location: &dyn LocationPort,
) -> anyhow::Result<Selection> {
    if let Some(arg) = arg {
        let parsed = if arg.trim_start().starts_with('?') {
            Selection::from_query(arg)
        } else {
            arg.parse()
        };
        return parsed.with_context(|| format!("Invalid selection argument: {}", arg));
    }

    read_initial_selection(location).ok_or_else(|| {
        anyhow::anyhow!("No snapshot selected; pass an id (e.g. `5` or `3,7`) or a viewing-snapshot query")
    })
}

/// Wire the viewer from configuration and run the shell until it exits.
pub async fn run(arg: Option<String>) -> anyhow::Result<()> {
    let config = bootstrap::resolve_config()?;
    let viewer = bootstrap::wire_viewer(&config)?;
    let selection = initial_selection(arg.as_deref(), viewer.location.as_ref())?;

    info!(selection = %selection, "Opening viewer");
    let (controller, _initial_load) = NavigationController::start(viewer.deps, selection);

    shell::run_shell(controller, viewer.list_snapshots).await
}
