pub mod assets;
pub mod input;
pub mod status;

pub use assets::{AssetId, AssetSet};
pub use input::InputState;
pub use status::{DelayedTick, LoopDriver, LoopEvent, LoopStatus};
