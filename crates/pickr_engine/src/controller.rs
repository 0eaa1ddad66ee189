use std::sync::{Mutex, PoisonError};

use pickr_core::{update, Effect, FeedModel, FeedState, Msg, PaginationRequest, DEFAULT_PER_PAGE};
use pickr_logging::{pickr_debug, pickr_error, pickr_info};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::FeedRepository;

/// Drives the photo feed for one screen.
///
/// Operations are `async` and meant to be run as independent tasks against a
/// shared (`Arc`) controller. At most one page fetch is in flight: a fetch
/// triggered while another runs is dropped, not queued. State is published on
/// a watch channel, so observers always see the latest value but may miss
/// intermediate ones.
pub struct FeedController {
    repository: FeedRepository,
    model: Mutex<FeedModel>,
    fetch_gate: tokio::sync::Mutex<()>,
    state_tx: watch::Sender<FeedState>,
    cancel: CancellationToken,
}

impl FeedController {
    pub fn new(repository: FeedRepository) -> Self {
        Self::with_per_page(repository, DEFAULT_PER_PAGE)
    }

    /// Controller whose first-page requests ask for `per_page` photos.
    pub fn with_per_page(repository: FeedRepository, per_page: u32) -> Self {
        let model = FeedModel::new(per_page);
        let (state_tx, _) = watch::channel(model.state().clone());
        Self {
            repository,
            model: Mutex::new(model),
            fetch_gate: tokio::sync::Mutex::new(()),
            state_tx,
            cancel: CancellationToken::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> FeedState {
        self.state_tx.borrow().clone()
    }

    /// Request the next scroll-triggered fetch would use.
    pub fn cursor(&self) -> Option<PaginationRequest> {
        self.lock_model().cursor().cloned()
    }

    /// Loads the first page of recent photos unless photos are already shown.
    pub async fn load_recent(&self, force_refresh: bool) {
        let effects = self.dispatch(Msg::LoadRecent { force_refresh });
        self.run_effects(effects).await;
    }

    /// Replaces the feed with the first page of results for `query`.
    pub async fn search(&self, query: impl Into<String>) {
        let effects = self.dispatch(Msg::Search(query.into()));
        self.run_effects(effects).await;
    }

    /// Fetches the next page when the visible indices get close to the end.
    pub async fn on_scroll_position_changed(&self, visible: &[usize]) {
        let effects = self.dispatch(Msg::ScrollPositionChanged(visible.to_vec()));
        self.run_effects(effects).await;
    }

    /// Ends the controller's scope: cancels the in-flight fetch, if any, and
    /// skips later ones. The in-flight slot is released either way. Also runs
    /// on drop.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    fn lock_model(&self) -> std::sync::MutexGuard<'_, FeedModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `msg` and publishes the new state if it changed.
    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let mut model = self.lock_model();
        let (mut next, effects) = update(std::mem::take(&mut *model), msg);
        if next.consume_dirty() {
            self.state_tx.send_replace(next.state().clone());
        }
        *model = next;
        effects
    }

    async fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(request) => self.fetch_page(request).await,
            }
        }
    }

    async fn fetch_page(&self, request: PaginationRequest) {
        let Ok(_in_flight) = self.fetch_gate.try_lock() else {
            pickr_debug!("Dropped fetch of {:?}, another fetch is in flight", request);
            return;
        };
        if self.cancel.is_cancelled() {
            pickr_debug!("Skipped fetch of {:?}, controller closed", request);
            return;
        }

        self.dispatch(Msg::FetchStarted);
        let result = tokio::select! {
            _ = self.cancel.cancelled() => {
                pickr_debug!("Cancelled fetch of {:?}", request);
                self.dispatch(Msg::FetchCancelled);
                return;
            }
            result = self.repository.retrieve(&request) => result,
        };

        match result {
            Ok(page) => {
                pickr_info!(
                    "Loaded page {} with {} photos",
                    request.page(),
                    page.photos.len()
                );
                self.dispatch(Msg::PageLoaded(page));
            }
            Err(err) => {
                pickr_error!("Error retrieving photos for {:?}: {}", request, err);
                self.dispatch(Msg::PageFailed);
            }
        }
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
