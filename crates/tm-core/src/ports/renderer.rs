use crate::map::FogMap;

/// Rendering surface. Fire-and-forget from the engine's perspective.
pub trait MapRendererPort: Send + Sync {
    /// Replace the currently displayed map.
    fn replace_map(&self, map: FogMap);

    /// Announce whether the displayed map reflects the current selection.
    fn set_ready(&self, ready: bool);
}
