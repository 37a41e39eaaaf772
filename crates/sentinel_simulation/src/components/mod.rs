//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: Enemy, Player, PursuitTarget
//! - movement: NavAgent (контракт с navigation host)
//! - animation: AnimatorParams (контракт с animation host)
//! - sight: SightLine, SightBlocker (контракт с physics host)

pub mod actor;
pub mod animation;
pub mod movement;
pub mod sight;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use movement::*;
pub use sight::*;
