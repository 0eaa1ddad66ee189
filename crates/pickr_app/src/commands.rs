use std::sync::Arc;

use anyhow::bail;
use futures_util::StreamExt;
use pickr_core::{FeedState, PhotoDetails};
use pickr_engine::{
    DetailAggregator, DetailCache, FeedController, FeedRepository, PhotoApi, ReqwestPhotoApi,
};
use pickr_logging::pickr_debug;

use crate::cli::Command;
use crate::config::AppConfig;

pub async fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let api: Arc<dyn PhotoApi> = Arc::new(ReqwestPhotoApi::new(config.client_settings())?);
    let cache = Arc::new(DetailCache::new());
    let repository = FeedRepository::new(api.clone(), cache.clone(), config.retry_policy());
    let controller = Arc::new(FeedController::with_per_page(repository, config.per_page()));

    let mut updates = controller.subscribe();
    let progress = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            report_progress(&state);
        }
    });

    let result = match command {
        Command::Recent { pages } => {
            controller.load_recent(false).await;
            browse(&controller, pages).await
        }
        Command::Search { query, pages } => {
            controller.search(query).await;
            browse(&controller, pages).await
        }
        Command::Detail { photo_id, query } => {
            match query {
                Some(query) => controller.search(query).await,
                None => controller.load_recent(false).await,
            }
            show_details(&DetailAggregator::new(api, cache), &photo_id).await
        }
    };

    controller.close();
    progress.abort();
    result
}

/// Scrolls to the end of the feed until `pages` pages are loaded or none remain.
async fn browse(controller: &FeedController, pages: u32) -> anyhow::Result<()> {
    for _ in 1..pages {
        if controller.cursor().is_none() {
            break;
        }
        let loaded = controller.state().photos().len();
        let window = loaded.saturating_sub(12)..loaded;
        controller
            .on_scroll_position_changed(&window.collect::<Vec<_>>())
            .await;
    }

    let state = controller.state();
    if let FeedState::Error { message } = &state {
        bail!("{message}");
    }
    for (index, photo) in state.photos().iter().enumerate() {
        println!("{:>4}  {:<14} {}", index + 1, photo.id(), photo.title());
        println!("      {}", photo.image_url());
    }
    println!("{} photos", state.photos().len());
    Ok(())
}

async fn show_details(aggregator: &DetailAggregator, photo_id: &str) -> anyhow::Result<()> {
    let mut details = aggregator.observe(photo_id);
    while let Some(value) = details.next().await {
        match value {
            None => bail!("photo {photo_id} is not part of the loaded feed"),
            Some(details) => print_details(&details),
        }
    }
    Ok(())
}

fn print_details(details: &PhotoDetails) {
    let photo = &details.photo;
    match (&details.exif, &details.info) {
        (None, None) => {
            println!("{} {}", photo.id(), photo.title());
            println!("  {}", photo.image_url());
        }
        (exif, info) => {
            if let Some(info) = info {
                println!(
                    "  by {} ({}) taken {}, {} views",
                    info.owner.username, info.owner.real_name, info.dates.taken, info.views
                );
                if let Some(location) = &info.owner.location {
                    println!("  location: {location}");
                }
                let tags: Vec<_> = info.tags.tag.iter().map(|tag| tag.raw.as_str()).collect();
                if !tags.is_empty() {
                    println!("  tags: {}", tags.join(", "));
                }
            }
            if let Some(exif) = exif {
                println!("  camera: {}", exif.camera);
                for tag in &exif.exif {
                    let value = tag.clean.as_ref().unwrap_or(&tag.raw);
                    println!("    {:<24} {}", tag.label, value.content);
                }
            }
        }
    }
}

fn report_progress(state: &FeedState) {
    match state {
        FeedState::Loading => pickr_debug!("Loading photos"),
        FeedState::Ready {
            photos,
            is_loading_more: true,
        } => pickr_debug!("{} photos shown, loading more", photos.len()),
        FeedState::Ready { photos, .. } => pickr_debug!("{} photos shown", photos.len()),
        FeedState::Error { message } => pickr_debug!("Feed error: {}", message),
    }
}
