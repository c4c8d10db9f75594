//! Background loading of the scene assets.
//!
//! Loads run on a detached thread and hand their result back through a
//! one-shot channel wrapped in a [`PendingAsset`]. The main loop polls it once
//! per tick and never blocks.

pub use self::error::LoadError;
pub use self::model::{load_model, load_model_from_slice, spawn_model};
pub use self::pending::{AssetPoll, Completer, PendingAsset};
pub use self::texture::{load_texture, spawn_texture, texture_from_memory, TextureData};

mod error;
mod model;
mod pending;
mod texture;
