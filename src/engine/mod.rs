//! Threaded driver for the computer opponent.

mod background;

use thiserror::Error;

pub use background::BackgroundSearch;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to spawn search thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Search thread panicked")]
    WorkerPanicked,
}
