pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
pub use crate::games::mystery::{GameEngine, GameState, SubmitResult};
