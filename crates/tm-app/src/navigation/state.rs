use tm_core::{Selection, SnapshotDescriptor};

use crate::error::NavigationError;

/// Descriptor(s) resolved for a selection, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView {
    Single(SnapshotDescriptor),
    Pair(SnapshotDescriptor, SnapshotDescriptor),
}

impl ResolvedView {
    /// Descriptor whose neighbors drive prev/next navigation.
    pub fn base(&self) -> &SnapshotDescriptor {
        match self {
            Self::Single(descriptor) | Self::Pair(descriptor, _) => descriptor,
        }
    }
}

/// Controller state as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    /// Nothing selected yet.
    Idle,
    Loading {
        selection: Selection,
    },
    Ready {
        selection: Selection,
        view: ResolvedView,
    },
    Failed {
        selection: Selection,
        reason: NavigationError,
    },
}

impl NavigationState {
    pub fn selection(&self) -> Option<Selection> {
        match self {
            Self::Idle => None,
            Self::Loading { selection }
            | Self::Ready { selection, .. }
            | Self::Failed { selection, .. } => Some(*selection),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
