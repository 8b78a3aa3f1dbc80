pub mod engine;
pub mod game;
pub mod renderer; // Drawing kept apart from game logic
