//! Pure game state for the mystery number game.
//!
//! Every transition takes the current [`GameState`] by value and hands back the
//! next one, so callers never observe a half-applied update.
use std::fmt;
use std::num::IntErrorKind;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

/// Smallest value the target (and any valid guess) can take.
pub const MIN_TARGET: u8 = 1;
/// Largest value the target (and any valid guess) can take.
pub const MAX_TARGET: u8 = 100;
/// Half-width of the hint window around the target.
pub const HINT_RADIUS: u8 = 10;

/// The secret number. Always inside `[MIN_TARGET, MAX_TARGET]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Target(u8);

impl Target {
    pub fn new(value: u8) -> Option<Self> {
        (MIN_TARGET..=MAX_TARGET).contains(&value).then_some(Self(value))
    }

    /// Uniform draw over the closed interval.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(MIN_TARGET..=MAX_TARGET))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Target {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("target {value} outside {MIN_TARGET}..={MAX_TARGET}"))
    }
}

impl From<Target> for u8 {
    fn from(target: Target) -> Self {
        target.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of the most recent valid guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    None,
    TooLow,
    TooHigh,
    Correct,
}

/// What a call to [`GameState::submit_guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitResult {
    /// The pending text is not an integer. Nothing changed.
    InvalidInput,
    /// The pending text is an integer outside the target range. Nothing changed.
    OutOfRange,
    /// Counted as an attempt, but missed.
    Continue,
    /// Counted as an attempt and hit the target. The round is over.
    Won,
}

/// Kind of round the state is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won,
}

/// Clamped interval around the target, handed out as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintWindow {
    pub low: u8,
    pub high: u8,
}

impl HintWindow {
    pub fn around(target: Target) -> Self {
        let t = target.get();
        Self {
            low: t.saturating_sub(HINT_RADIUS).max(MIN_TARGET),
            high: t.saturating_add(HINT_RADIUS).min(MAX_TARGET),
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// A parsed guess, or the reason the pending text could not become one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsedGuess {
    Valid(u8),
    Invalid,
    OutOfRange,
}

fn parse_guess(text: &str) -> ParsedGuess {
    match text.trim().parse::<i64>() {
        Ok(n) => match u8::try_from(n) {
            Ok(n) if (MIN_TARGET..=MAX_TARGET).contains(&n) => ParsedGuess::Valid(n),
            _ => ParsedGuess::OutOfRange,
        },
        Err(e) => match e.kind() {
            // Still a number, it just does not fit.
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParsedGuess::OutOfRange,
            _ => ParsedGuess::Invalid,
        },
    }
}

/// One round of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    target: Target,
    attempts: u32,
    last_feedback: Feedback,
    pending_guess: String,
}

impl GameState {
    /// Fresh round around a known target.
    pub fn with_target(target: Target) -> Self {
        Self {
            target,
            attempts: 0,
            last_feedback: Feedback::None,
            pending_guess: String::new(),
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn last_feedback(&self) -> Feedback {
        self.last_feedback
    }

    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    pub fn is_over(&self) -> bool {
        self.last_feedback == Feedback::Correct
    }

    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::Won
        } else {
            Phase::InProgress
        }
    }

    /// Replace the pending text. Clearing it also clears the feedback of an
    /// unfinished round; a won round keeps its `Correct` until restart.
    pub fn with_pending_guess(mut self, text: impl Into<String>) -> Self {
        self.pending_guess = text.into();
        if self.pending_guess.is_empty() && !self.is_over() {
            self.last_feedback = Feedback::None;
        }
        debug!(pending = %self.pending_guess, feedback = ?self.last_feedback, "pending guess updated");
        self
    }

    /// Validate and score the pending guess.
    pub fn submit_guess(mut self) -> (Self, SubmitResult) {
        if self.is_over() {
            debug!(attempts = self.attempts, "guess ignored, round already won");
            return (self, SubmitResult::Won);
        }

        let guess = match parse_guess(&self.pending_guess) {
            ParsedGuess::Valid(n) => n,
            ParsedGuess::Invalid => {
                warn!(input = %self.pending_guess, "rejected guess: not a number");
                return (self, SubmitResult::InvalidInput);
            }
            ParsedGuess::OutOfRange => {
                warn!(input = %self.pending_guess, "rejected guess: out of range");
                return (self, SubmitResult::OutOfRange);
            }
        };

        self.attempts += 1;
        let target = self.target.get();
        let result = if guess == target {
            self.last_feedback = Feedback::Correct;
            info!(attempts = self.attempts, "target found");
            SubmitResult::Won
        } else {
            self.last_feedback = if guess < target {
                Feedback::TooLow
            } else {
                Feedback::TooHigh
            };
            SubmitResult::Continue
        };
        debug!(guess, attempts = self.attempts, feedback = ?self.last_feedback, "guess scored");
        (self, result)
    }

    pub fn hint_range(&self) -> HintWindow {
        HintWindow::around(self.target)
    }
}

/// Source of new rounds.
pub struct GameEngine<R = StdRng> {
    rng: R,
}

impl GameEngine<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence of targets.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn new_round(&mut self) -> GameState {
        let target = Target::random(&mut self.rng);
        trace!(%target, "target drawn");
        info!("new round started");
        GameState::with_target(target)
    }
}
