//! # Navigation Controller / 导航控制器
//!
//! Owns the current selection and drives resolve → fetch → compose for it.
//!
//! Every pipeline run is tagged with the generation that was current when it
//! started. Results are published only if that generation is still current,
//! so a superseded run can never overwrite a newer selection's state or map.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use tm_core::ports::{LocationPort, MapRendererPort, NoticeKind, NotifierPort};
use tm_core::{FogMap, Selection, SnapshotDescriptor};

use crate::cache::SnapshotContentCache;
use crate::deps::NavigationDeps;
use crate::error::NavigationError;
use crate::usecases::{MapComposer, MetadataResolver};

use super::state::{NavigationState, ResolvedView};

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The map and descriptors were published.
    Published,
    /// The run failed and the failure was reported.
    Failed,
    /// A newer selection started first; the result was dropped.
    Superseded,
}

/// Read the persisted selection once, at startup.
pub fn read_initial_selection(location: &dyn LocationPort) -> Option<Selection> {
    let query = location.read()?;
    match Selection::from_query(&query) {
        Ok(selection) => Some(selection),
        Err(err) => {
            warn!(query = %query, error = %err, "Ignoring unreadable persisted selection");
            None
        }
    }
}

/// Mutable bookkeeping, guarded together so that "is this run still current?"
/// and "publish" happen as one step.
struct Tracking {
    generation: u64,
    /// Generation of the view currently on screen.
    published: u64,
    last_view: Option<ResolvedView>,
}

struct Inner {
    resolver: MetadataResolver,
    cache: Arc<SnapshotContentCache>,
    composer: MapComposer,
    renderer: Arc<dyn MapRendererPort>,
    location: Arc<dyn LocationPort>,
    notifier: Arc<dyn NotifierPort>,
    tracking: Mutex<Tracking>,
    /// Serializes location writes so they land in publish order.
    persist_lock: tokio::sync::Mutex<()>,
    state_tx: watch::Sender<NavigationState>,
}

/// Navigation state machine: `Idle → Loading → Ready | Failed → Loading → ...`
///
/// Cheap to clone; clones drive the same session.
#[derive(Clone)]
pub struct NavigationController {
    inner: Arc<Inner>,
}

impl NavigationController {
    /// Build the controller and immediately start loading `initial`.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(deps: NavigationDeps, initial: Selection) -> (Self, JoinHandle<PipelineOutcome>) {
        let controller = Self::new(deps);
        let handle = controller.select(initial);
        (controller, handle)
    }

    /// Build an `Idle` controller. Nothing is loaded until [`select`](Self::select).
    pub fn new(deps: NavigationDeps) -> Self {
        let (state_tx, _) = watch::channel(NavigationState::Idle);
        Self {
            inner: Arc::new(Inner {
                resolver: MetadataResolver::new(deps.metadata),
                cache: deps.cache,
                composer: MapComposer::new(deps.decoder),
                renderer: deps.renderer,
                location: deps.location,
                notifier: deps.notifier,
                tracking: Mutex::new(Tracking {
                    generation: 0,
                    published: 0,
                    last_view: None,
                }),
                persist_lock: tokio::sync::Mutex::new(()),
                state_tx,
            }),
        }
    }

    /// Switch to `selection`, superseding any run still in flight.
    ///
    /// The transition to `Loading` and the readiness reset happen before this
    /// returns; the pipeline itself runs on a spawned task.
    pub fn select(&self, selection: Selection) -> JoinHandle<PipelineOutcome> {
        let generation = {
            let mut tracking = self.inner.tracking();
            tracking.generation += 1;
            self.inner.renderer.set_ready(false);
            self.inner
                .state_tx
                .send_replace(NavigationState::Loading { selection });
            tracking.generation
        };
        info!(selection = %selection, base = %selection.base(), generation, "Loading selection");

        tokio::spawn(run_pipeline(self.inner.clone(), selection, generation))
    }

    /// Step to the previous snapshot of the displayed view's base.
    ///
    /// Returns `None` when nothing has been displayed yet or there is no
    /// earlier snapshot.
    pub fn go_prev(&self) -> Option<JoinHandle<PipelineOutcome>> {
        let prev = self.current_descriptor()?.prev?;
        Some(self.select(Selection::Single(prev.id)))
    }

    /// Step to the next snapshot of the displayed view's base.
    pub fn go_next(&self) -> Option<JoinHandle<PipelineOutcome>> {
        let next = self.current_descriptor()?.next?;
        Some(self.select(Selection::Single(next.id)))
    }

    pub fn state(&self) -> NavigationState {
        self.inner.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.inner.state_tx.subscribe()
    }

    pub fn current_selection(&self) -> Option<Selection> {
        self.inner.state_tx.borrow().selection()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state_tx.borrow().is_loading()
    }

    /// Descriptor(s) of the view currently on screen. Survives later failures.
    pub fn current_view(&self) -> Option<ResolvedView> {
        self.inner.tracking().last_view.clone()
    }

    /// Base descriptor of the view currently on screen.
    pub fn current_descriptor(&self) -> Option<SnapshotDescriptor> {
        self.current_view().map(|view| view.base().clone())
    }
}

impl Inner {
    fn tracking(&self) -> MutexGuard<'_, Tracking> {
        // Tracking holds plain values; a panic elsewhere cannot leave it half-written.
        self.tracking
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.tracking().generation == generation
    }

    async fn load(
        &self,
        selection: Selection,
        generation: u64,
    ) -> Result<Option<(FogMap, ResolvedView)>, NavigationError> {
        match selection {
            Selection::Single(id) => {
                let descriptor = self
                    .resolver
                    .resolve_one(id)
                    .await
                    .map_err(NavigationError::MetadataUnavailable)?;
                let content = self
                    .cache
                    .get_content(&descriptor)
                    .await
                    .map_err(NavigationError::ContentUnavailable)?;

                if !self.is_current(generation) {
                    return Ok(None);
                }
                let map = self.composer.compose_single(&content).await?;
                Ok(Some((map, ResolvedView::Single(descriptor))))
            }
            Selection::Pair(first, second) => {
                let (base, overlay) = self
                    .resolver
                    .resolve_pair(first, second)
                    .await
                    .map_err(NavigationError::MetadataUnavailable)?;
                let (base_content, overlay_content) = tokio::join!(
                    self.cache.get_content(&base),
                    self.cache.get_content(&overlay)
                );
                let base_content = base_content.map_err(NavigationError::ContentUnavailable)?;
                let overlay_content =
                    overlay_content.map_err(NavigationError::ContentUnavailable)?;

                if !self.is_current(generation) {
                    return Ok(None);
                }
                let map = self
                    .composer
                    .compose_overlay(&base_content, &overlay_content)
                    .await?;
                Ok(Some((map, ResolvedView::Pair(base, overlay))))
            }
        }
    }

    /// Write `selection` to the location unless a newer view was published
    /// in the meantime. Runs after the tracking lock is released; the write
    /// itself may block, so it goes to the blocking pool.
    async fn persist_location(&self, selection: Selection, generation: u64) {
        let _persisting = self.persist_lock.lock().await;
        if self.tracking().published != generation {
            debug!("Skipping location write for a view that is no longer shown");
            return;
        }

        let location = self.location.clone();
        let query = selection.to_query();
        match tokio::task::spawn_blocking(move || location.replace(&query)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(error = %err, "Failed to persist selection to location"),
            Err(err) => warn!(error = %err, "Location write task failed"),
        }
    }

    fn finish(
        &self,
        selection: Selection,
        generation: u64,
        result: Result<Option<(FogMap, ResolvedView)>, NavigationError>,
    ) -> PipelineOutcome {
        let mut tracking = self.tracking();
        if tracking.generation != generation {
            debug!(
                current_generation = tracking.generation,
                "Discarding result of superseded selection"
            );
            return PipelineOutcome::Superseded;
        }

        match result {
            Ok(None) => PipelineOutcome::Superseded,
            Ok(Some((map, view))) => {
                self.renderer.replace_map(map);
                self.renderer.set_ready(true);
                tracking.published = generation;
                tracking.last_view = Some(view.clone());
                self.state_tx
                    .send_replace(NavigationState::Ready { selection, view });
                info!("Selection ready");
                PipelineOutcome::Published
            }
            Err(err) => {
                warn!(
                    error = %err,
                    unknown_transport = err.is_unknown_transport(),
                    "Failed to load selection"
                );
                self.notifier.notify(NoticeKind::Error, err.message_key());
                // The previous map is still on screen and still valid.
                if tracking.last_view.is_some() {
                    self.renderer.set_ready(true);
                }
                self.state_tx.send_replace(NavigationState::Failed {
                    selection,
                    reason: err,
                });
                PipelineOutcome::Failed
            }
        }
    }
}

#[tracing::instrument(
    name = "navigation.pipeline",
    skip(inner, selection),
    fields(selection = %selection)
)]
async fn run_pipeline(inner: Arc<Inner>, selection: Selection, generation: u64) -> PipelineOutcome {
    let result = inner.load(selection, generation).await;
    let outcome = inner.finish(selection, generation, result);
    if outcome == PipelineOutcome::Published {
        inner.persist_location(selection, generation).await;
    }
    outcome
}
