//! Navigation state machine.
//! 导航状态机。

mod controller;
mod state;

pub use controller::{read_initial_selection, NavigationController, PipelineOutcome};
pub use state::{NavigationState, ResolvedView};
