/// Core game interface for the terminal framework
use crossterm::event::KeyEvent;
use std::ops::ControlFlow;
use tokio::sync::mpsc::UnboundedSender;

/// Handle a game uses to queue actions for the engine.
///
/// Actions are applied one at a time, in the order they were dispatched.
pub struct Context<A> {
    pub(crate) tx: UnboundedSender<A>,
}

impl<A> Context<A> {
    pub fn new(tx: UnboundedSender<A>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: A) {
        // Only fails once the engine loop is gone, at which point nobody cares.
        let _ = self.tx.send(action);
    }
}

/// Main game trait that every game driven by [`crate::core::engine::Engine`] implements
pub trait Game {
    /// Everything the player can ask the game to do
    type Action: Send + 'static;

    /// Translate a key press into actions. `Break` ends the session.
    fn handle_key(&self, key: KeyEvent, ctx: &Context<Self::Action>) -> ControlFlow<()>;

    /// Apply a single action, producing the next state
    fn apply(&mut self, action: Self::Action);

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
