mod arena;
mod audio;
mod ball;
mod collisions;
mod core;
mod hud;
mod input;
mod paddle;
mod state;

pub use arena::ArenaPlugin;
pub use audio::CuePlugin;
pub use ball::BallPlugin;
pub use collisions::CollisionPlugin;
pub use core::CorePlugin;
pub(crate) use core::UpdateSet;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use paddle::PaddlePlugin;
