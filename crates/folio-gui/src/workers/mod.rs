mod assets;
mod dispatch;
mod document;

pub use assets::spawn_hero_image_load;
pub use dispatch::{spawn_worker, WorkerHandle};
pub(crate) use dispatch::send;
