mod overlay;
mod reveal;
mod stats;

pub use overlay::reveal_plugin;
pub use reveal::{
    reveal_transition_system, scene_is_live, RevealPhase, RevealState, REVEAL_SECONDS,
};
pub use stats::stats_plugin;
