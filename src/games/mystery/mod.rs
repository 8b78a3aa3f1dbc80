/// Mystery number game module
pub mod game;
pub mod renderer;
pub mod state;

pub use game::{GuessAction, MysteryGame, Popup};
pub use renderer::MysteryRenderer;
pub use state::{
    Feedback, GameEngine, GameState, HintWindow, Phase, SubmitResult, Target, HINT_RADIUS,
    MAX_TARGET, MIN_TARGET,
};
