use crate::core::game::{Context, Game};
use crate::core::renderer::GameRenderer;
use crate::games::mystery::renderer::MysteryRenderer;
use crate::games::mystery::state::{Feedback, GameEngine, GameState, HintWindow, SubmitResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use tracing::debug;

/// The input box holds at most this many characters.
pub const MAX_INPUT_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessAction {
    /// Replace the pending guess text
    Edit(String),
    Submit,
    Restart,
    Hint,
    /// Close the open popup
    Dismiss,
}

/// Modal message shown on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    InvalidInput,
    OutOfRange,
    Hint(HintWindow),
}

impl Popup {
    pub fn title(&self) -> &'static str {
        match self {
            Popup::InvalidInput => "Invalid input",
            Popup::OutOfRange => "Out of range",
            Popup::Hint(_) => "Hint",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Popup::InvalidInput => "Please enter a number between 1 and 100.".to_string(),
            Popup::OutOfRange => "Guess must be between 1 and 100.".to_string(),
            Popup::Hint(window) => {
                format!("The number is between {} and {}.", window.low, window.high)
            }
        }
    }
}

/// Line shown in the feedback box, if any.
pub fn feedback_message(feedback: Feedback) -> Option<&'static str> {
    match feedback {
        Feedback::None => None,
        Feedback::TooLow => Some("Too low! Try again."),
        Feedback::TooHigh => Some("Too high! Try again."),
        Feedback::Correct => Some("Congratulations! You've guessed the correct number!"),
    }
}

pub struct MysteryGame<R = StdRng> {
    engine: GameEngine<R>,
    state: GameState,
    popup: Option<Popup>,
}

impl<R: Rng> MysteryGame<R> {
    pub fn new(mut engine: GameEngine<R>) -> Self {
        let state = engine.new_round();
        Self {
            engine,
            state,
            popup: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn popup(&self) -> Option<Popup> {
        self.popup
    }

    fn submit(&mut self) {
        let (next, result) = self.state.clone().submit_guess();
        self.state = next;
        self.popup = match result {
            SubmitResult::InvalidInput => Some(Popup::InvalidInput),
            SubmitResult::OutOfRange => Some(Popup::OutOfRange),
            SubmitResult::Continue | SubmitResult::Won => None,
        };
        debug!(?result, attempts = self.state.attempts(), "submit applied");
    }
}

impl<R: Rng> Game for MysteryGame<R> {
    type Action = GuessAction;

    fn handle_key(&self, key: KeyEvent, ctx: &Context<GuessAction>) -> ControlFlow<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                ctx.dispatch(GuessAction::Dismiss);
            }
            return ControlFlow::Continue(());
        }

        let over = self.state.is_over();
        match key.code {
            KeyCode::Esc => return ControlFlow::Break(()),
            KeyCode::Char('c') if ctrl => return ControlFlow::Break(()),
            KeyCode::Char('r') if ctrl => ctx.dispatch(GuessAction::Restart),
            KeyCode::Tab if !over => ctx.dispatch(GuessAction::Hint),
            KeyCode::Enter if !over => ctx.dispatch(GuessAction::Submit),
            KeyCode::Backspace if !over => {
                let mut text = self.state.pending_guess().to_string();
                if text.pop().is_some() {
                    ctx.dispatch(GuessAction::Edit(text));
                }
            }
            KeyCode::Char(c) if !over && !ctrl => {
                let text = self.state.pending_guess();
                if text.chars().count() < MAX_INPUT_LEN {
                    ctx.dispatch(GuessAction::Edit(format!("{text}{c}")));
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn apply(&mut self, action: GuessAction) {
        match action {
            GuessAction::Edit(text) => {
                self.state = self.state.clone().with_pending_guess(text);
            }
            GuessAction::Submit => self.submit(),
            GuessAction::Restart => {
                self.state = self.engine.new_round();
                self.popup = None;
            }
            GuessAction::Hint => self.popup = Some(Popup::Hint(self.state.hint_range())),
            GuessAction::Dismiss => self.popup = None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        MysteryRenderer.render(self, frame);
    }
}
