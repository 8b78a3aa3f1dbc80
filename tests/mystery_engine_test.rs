//! Behaviour of the mystery number state machine through the public API.

use mystery_number::games::mystery::{
    Feedback, GameEngine, GameState, HintWindow, Phase, SubmitResult, Target, MAX_TARGET,
    MIN_TARGET,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn round(target: u8) -> GameState {
    GameState::with_target(Target::new(target).expect("target in range"))
}

fn guess(state: GameState, text: &str) -> (GameState, SubmitResult) {
    state.with_pending_guess(text).submit_guess()
}

#[test]
fn test_full_round_against_42() {
    let state = round(42);

    let (state, result) = guess(state, "abc");
    assert_eq!(result, SubmitResult::InvalidInput);
    assert_eq!(state.attempts(), 0);

    let (state, result) = guess(state, "150");
    assert_eq!(result, SubmitResult::OutOfRange);
    assert_eq!(state.attempts(), 0);

    let (state, result) = guess(state, "10");
    assert_eq!(result, SubmitResult::Continue);
    assert_eq!(state.last_feedback(), Feedback::TooLow);
    assert_eq!(state.attempts(), 1);

    let (state, result) = guess(state, "80");
    assert_eq!(result, SubmitResult::Continue);
    assert_eq!(state.last_feedback(), Feedback::TooHigh);
    assert_eq!(state.attempts(), 2);

    let (state, result) = guess(state, "42");
    assert_eq!(result, SubmitResult::Won);
    assert!(state.is_over());
    assert_eq!(state.phase(), Phase::Won);
    assert_eq!(state.attempts(), 3);

    let before = state.clone();
    let (state, result) = guess(state, "42");
    assert_eq!(result, SubmitResult::Won);
    assert_eq!(state.attempts(), 3);
    assert_eq!(state.last_feedback(), before.last_feedback());
}

#[test]
fn test_submit_after_win_leaves_state_untouched() {
    let (won, _) = guess(round(7), "7");
    let (after, result) = won.clone().submit_guess();
    assert_eq!(result, SubmitResult::Won);
    assert_eq!(after, won);

    // Even a wrong guess is ignored once the round is over.
    let (after, _) = after.with_pending_guess("8").submit_guess();
    assert_eq!(after.attempts(), 1);
    assert_eq!(after.last_feedback(), Feedback::Correct);
}

#[test]
fn test_hint_examples() {
    assert_eq!(round(42).hint_range(), HintWindow { low: 32, high: 52 });
    assert_eq!(round(5).hint_range(), HintWindow { low: 1, high: 15 });
    assert_eq!(round(95).hint_range(), HintWindow { low: 85, high: 100 });
}

#[test]
fn test_hint_correct_for_every_target() {
    for t in MIN_TARGET..=MAX_TARGET {
        let state = round(t);
        let hint = state.hint_range();
        assert_eq!(hint.low, t.saturating_sub(10).max(1), "target {t}");
        assert_eq!(hint.high, (t + 10).min(100), "target {t}");
        assert!(hint.contains(t));
        assert!(hint.low >= MIN_TARGET && hint.high <= MAX_TARGET);
        // Hints never touch the round.
        assert_eq!(state, round(t));
    }
}

#[test]
fn test_feedback_matches_comparison() {
    let target = 60;
    for g in MIN_TARGET..=MAX_TARGET {
        let (state, result) = guess(round(target), &g.to_string());
        match g.cmp(&target) {
            std::cmp::Ordering::Less => {
                assert_eq!(result, SubmitResult::Continue);
                assert_eq!(state.last_feedback(), Feedback::TooLow);
            }
            std::cmp::Ordering::Greater => {
                assert_eq!(result, SubmitResult::Continue);
                assert_eq!(state.last_feedback(), Feedback::TooHigh);
            }
            std::cmp::Ordering::Equal => {
                assert_eq!(result, SubmitResult::Won);
                assert_eq!(state.last_feedback(), Feedback::Correct);
            }
        }
        assert_eq!(state.attempts(), 1);
    }
}

#[test]
fn test_rejected_input_is_not_an_attempt() {
    let cases = [
        ("", SubmitResult::InvalidInput),
        ("  ", SubmitResult::InvalidInput),
        ("12abc", SubmitResult::InvalidInput),
        ("4.2", SubmitResult::InvalidInput),
        ("0", SubmitResult::OutOfRange),
        ("101", SubmitResult::OutOfRange),
        ("-3", SubmitResult::OutOfRange),
        ("123456789012345678901234567890", SubmitResult::OutOfRange),
    ];
    for (text, expected) in cases {
        let start = round(50).with_pending_guess(text);
        let (state, result) = start.clone().submit_guess();
        assert_eq!(result, expected, "{text:?}");
        assert_eq!(state, start, "{text:?}");
    }
}

#[test]
fn test_whitespace_around_guess_is_ignored() {
    let (state, result) = guess(round(33), "  33 ");
    assert_eq!(result, SubmitResult::Won);
    assert_eq!(state.attempts(), 1);
}

#[test]
fn test_attempts_only_grow_on_valid_guesses() {
    let inputs = ["5", "x", "99", "", "500", "50", "  ", "51", "-1", "49"];
    let mut state = round(73);
    let mut expected = 0;
    for text in inputs {
        let before = state.attempts();
        state = state.with_pending_guess(text);
        assert_eq!(state.attempts(), before);
        let _ = state.hint_range();

        let (next, result) = state.submit_guess();
        if result == SubmitResult::Continue || result == SubmitResult::Won {
            expected += 1;
        }
        assert!(next.attempts() >= before);
        assert_eq!(next.attempts(), expected, "after {text:?}");
        state = next;
    }
    assert_eq!(expected, 5);
}

#[test]
fn test_clearing_input_clears_feedback() {
    let (state, _) = guess(round(20), "90");
    assert_eq!(state.last_feedback(), Feedback::TooHigh);

    // New digits keep the previous feedback on screen.
    let state = state.with_pending_guess("9");
    assert_eq!(state.last_feedback(), Feedback::TooHigh);

    let state = state.with_pending_guess("");
    assert_eq!(state.last_feedback(), Feedback::None);
    assert_eq!(state.attempts(), 1);
}

#[test]
fn test_new_round_is_fresh_and_in_range() {
    let mut engine = GameEngine::seeded(2024);
    for _ in 0..1_000 {
        let state = engine.new_round();
        let t = state.target().get();
        assert!((MIN_TARGET..=MAX_TARGET).contains(&t));
        assert_eq!(state.attempts(), 0);
        assert!(!state.is_over());
        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.last_feedback(), Feedback::None);
        assert!(state.pending_guess().is_empty());
    }
}

#[test]
fn test_new_round_reaches_both_endpoints() {
    let mut engine = GameEngine::new(StdRng::seed_from_u64(1));
    let mut seen = [false; 101];
    for _ in 0..20_000 {
        seen[engine.new_round().target().get() as usize] = true;
    }
    assert!(!seen[0]);
    assert!(seen[1..].iter().all(|&s| s), "every value 1..=100 should come up");
}

#[test]
fn test_restart_after_win() {
    let mut engine = GameEngine::seeded(5);
    let state = engine.new_round();
    let target = state.target().to_string();
    let (won, result) = guess(state, &target);
    assert_eq!(result, SubmitResult::Won);

    let fresh = engine.new_round();
    assert!(won.is_over());
    assert!(!fresh.is_over());
    assert_eq!(fresh.attempts(), 0);
}

#[test]
fn test_state_serializes_for_presentation() {
    let (state, _) = guess(round(42), "10");
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["target"], 42);
    assert_eq!(json["attempts"], 1);
    assert_eq!(json["last_feedback"], "TooLow");
    assert_eq!(json["pending_guess"], "10");

    let back: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
