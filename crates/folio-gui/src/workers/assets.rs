use std::sync::mpsc;

use folio_core::assets::{load_image, ImageCache, ImagePolicy, ImageSource};
use tracing::warn;

use crate::messages::WorkerResult;

use super::send;

/// Load the hero image on its own thread so a slow network never delays page rendering.
pub fn spawn_hero_image_load(
    source: ImageSource,
    policy: ImagePolicy,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let cache = ImageCache::new(ImageCache::default_dir(), policy.cache_ttl());
    let spawned = std::thread::Builder::new()
        .name("folio-hero-image".into())
        .spawn(move || {
            let result = match load_image(&source, &policy, &cache) {
                Ok(image) => WorkerResult::HeroImageLoaded { image },
                Err(e) => {
                    warn!(error = %e, "Hero image unavailable");
                    WorkerResult::HeroImageFailed {
                        message: e.to_string(),
                    }
                }
            };
            send(&tx, &ctx, result);
        });

    if let Err(e) = spawned {
        warn!(error = %e, "Failed to spawn hero image thread");
    }
}
