use pickr_logging::pickr_debug;

use crate::{should_prefetch, Effect, FeedModel, FeedState, Msg, PaginationRequest, FEED_ERROR_MESSAGE};

/// Pure update function: applies a message to the feed and returns any effects.
pub fn update(mut model: FeedModel, msg: Msg) -> (FeedModel, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRecent { force_refresh } => {
            if !force_refresh && !model.is_empty() {
                pickr_debug!("LoadRecent ignored, {} photos already loaded", model.len());
                return (model, Vec::new());
            }
            let request = PaginationRequest::recent().with_per_page(model.per_page());
            restart(&mut model, request)
        }
        Msg::Search(query) => {
            let request = PaginationRequest::search(query).with_per_page(model.per_page());
            restart(&mut model, request)
        }
        Msg::ScrollPositionChanged(visible) => {
            if !should_prefetch(&visible, model.len()) {
                return (model, Vec::new());
            }
            match model.cursor() {
                Some(next) => vec![Effect::FetchPage(next.clone())],
                None => Vec::new(),
            }
        }
        Msg::FetchStarted => {
            if !model.is_empty() {
                model.set_ready(true);
            }
            Vec::new()
        }
        Msg::PageLoaded(page) => {
            let added = model.merge(page.photos);
            pickr_debug!(
                "Merged {} new photos, {} total, next={:?}",
                added,
                model.len(),
                page.next_request
            );
            model.set_cursor(page.next_request);
            model.set_ready(false);
            Vec::new()
        }
        Msg::PageFailed => {
            if model.is_empty() {
                model.set_state(FeedState::Error {
                    message: FEED_ERROR_MESSAGE.to_string(),
                });
            } else {
                model.set_ready(false);
            }
            Vec::new()
        }
        Msg::FetchCancelled => {
            if !model.is_empty() {
                model.set_ready(false);
            }
            Vec::new()
        }
    };

    (model, effects)
}

fn restart(model: &mut FeedModel, request: PaginationRequest) -> Vec<Effect> {
    model.clear();
    model.set_state(FeedState::Loading);
    vec![Effect::FetchPage(request)]
}
