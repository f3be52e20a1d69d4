//! Minimal prelude for SDK consumers.

pub use crate::config::{scene_settings, SceneSettings};
pub use crate::sdk::GreetingSceneBuilder;
pub use crate::{RevealPhase, RevealState};
