//! Property-based tests for scoring and the game state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::collections::HashMap;
use wordle_clone::comparator::{CompareError, PositionalComparator, score_letters};
use wordle_clone::core::Verdict;
use wordle_clone::game::{Game, GameError, Rules, WordGame, WordList};

const WORDS: [&str; 4] = ["apple", "berry", "melon", "lemon"];
const MISSES: [&str; 3] = ["berry", "melon", "lemon"];

fn game(rules: Rules, seed: u64) -> WordGame {
    Game::seeded(WordList::new(WORDS), PositionalComparator, rules, seed)
        .unwrap()
        .with_target("apple".to_string())
}

prop_compose! {
    /// Two lowercase strings of the same length
    fn equal_length_pair()(pairs in prop::collection::vec((b'a'..=b'f', b'a'..=b'f'), 1..10))
        -> (String, String)
    {
        pairs
            .into_iter()
            .map(|(g, t)| (char::from(g), char::from(t)))
            .unzip()
    }
}

prop_compose! {
    fn miss()(index in 0..MISSES.len()) -> &'static str {
        MISSES[index]
    }
}

proptest! {
    #[test]
    fn verdicts_match_guess_length((guess, target) in equal_length_pair()) {
        let verdicts = score_letters(&guess, &target).unwrap();
        prop_assert_eq!(verdicts.len(), guess.chars().count());
    }

    #[test]
    fn correct_marks_exactly_equal_positions((guess, target) in equal_length_pair()) {
        let verdicts = score_letters(&guess, &target).unwrap();
        for ((g, t), verdict) in guess.chars().zip(target.chars()).zip(&verdicts) {
            prop_assert_eq!(g == t, *verdict == Verdict::Correct);
        }
    }

    #[test]
    fn letters_are_never_credited_more_than_target_holds((guess, target) in equal_length_pair()) {
        let verdicts = score_letters(&guess, &target).unwrap();

        let mut available: HashMap<char, usize> = HashMap::new();
        for c in target.chars() {
            *available.entry(c).or_default() += 1;
        }
        let mut credited: HashMap<char, usize> = HashMap::new();
        for (c, verdict) in guess.chars().zip(&verdicts) {
            if matches!(verdict, Verdict::Correct | Verdict::Partial) {
                *credited.entry(c).or_default() += 1;
            }
        }
        for (c, count) in credited {
            prop_assert!(count <= available.get(&c).copied().unwrap_or(0));
        }
    }

    #[test]
    fn guess_against_itself_is_all_correct(word in "[a-z]{1,12}") {
        let verdicts = score_letters(&word, &word).unwrap();
        prop_assert!(verdicts.iter().all(|v| *v == Verdict::Correct));
    }

    #[test]
    fn disjoint_alphabets_are_all_incorrect(
        pairs in prop::collection::vec((b'a'..=b'm', b'n'..=b'z'), 1..10)
    ) {
        let (guess, target): (String, String) = pairs
            .into_iter()
            .map(|(g, t)| (char::from(g), char::from(t)))
            .unzip();
        let verdicts = score_letters(&guess, &target).unwrap();
        prop_assert!(verdicts.iter().all(|v| *v == Verdict::Incorrect));
    }

    #[test]
    fn different_lengths_always_fail(guess in "[a-z]{0,8}", target in "[a-z]{0,8}") {
        prop_assume!(guess.len() != target.len());
        let result = score_letters(&guess, &target);
        let is_length_mismatch = matches!(result, Err(CompareError::LengthMismatch { .. }));
        prop_assert!(is_length_mismatch);
    }

    #[test]
    fn rejected_guesses_leave_game_untouched(raw in "[a-z]{0,8}", seed in any::<u64>()) {
        prop_assume!(!WORDS.contains(&raw.as_str()));
        let mut game = game(Rules::bounded(6), seed);
        game.play("berry").unwrap();

        prop_assert!(game.play(&raw).is_err());
        prop_assert_eq!(game.tries_used(), 1);
        prop_assert_eq!(game.board().len(), 1);
        prop_assert!(!game.is_finished());
    }

    #[test]
    fn bounded_game_is_lost_after_budget(
        max_tries in 1u32..10,
        misses in prop::collection::vec(miss(), 10),
    ) {
        let mut game = game(Rules::bounded(max_tries), 0);
        for guess in misses.iter().take(max_tries as usize) {
            game.play(guess).unwrap();
        }

        prop_assert!(game.is_finished());
        prop_assert!(!game.has_won());
        prop_assert_eq!(game.play("apple").unwrap_err(), GameError::GameOver);
        prop_assert_eq!(game.tries_used(), max_tries);
    }

    #[test]
    fn zen_game_only_ends_on_win(misses in prop::collection::vec(miss(), 1..40)) {
        let mut game = game(Rules::zen(), 0);
        for guess in &misses {
            game.play(guess).unwrap();
            prop_assert!(!game.is_finished());
        }

        game.play("apple").unwrap();
        prop_assert!(game.is_finished());
        prop_assert!(game.has_won());
    }

    #[test]
    fn endless_game_ends_when_lives_run_out(lives in 1u32..8, bonus in 0u32..3) {
        let mut game = game(Rules::endless(lives, bonus), 0);
        for _ in 0..lives {
            game.play("berry").unwrap();
        }

        prop_assert!(game.is_finished());
        prop_assert_eq!(game.lives(), Some(0));
        prop_assert!(game.play("berry").is_err());
        prop_assert_eq!(game.board().len(), lives as usize);
    }

    #[test]
    fn commit_without_win_is_noop(misses in prop::collection::vec(miss(), 0..3)) {
        let mut game = game(Rules::endless(5, 1), 0);
        for guess in &misses {
            game.play(guess).unwrap();
        }
        let lives = game.lives();

        prop_assert!(!game.commit_round().unwrap());
        prop_assert_eq!(game.lives(), lives);
        prop_assert_eq!(game.score(), Some(0));
        prop_assert_eq!(game.board().len(), misses.len());
    }

    #[test]
    fn reset_clears_board_and_draws_listed_target(
        guesses in prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..10),
        seed in any::<u64>(),
    ) {
        let mut game = game(Rules::zen(), seed);
        for guess in &guesses {
            if game.is_finished() {
                break;
            }
            game.play(guess).unwrap();
        }

        game.reset().unwrap();
        prop_assert!(game.board().is_empty());
        prop_assert_eq!(game.tries_used(), 0);
        prop_assert!(!game.is_finished());
        prop_assert!(WORDS.contains(&game.target().as_str()));
    }
}

#[test]
fn repeated_letters_use_multiset_counts() {
    let verdicts = score_letters("aabb", "abab").unwrap();
    let correct = verdicts.iter().filter(|v| **v == Verdict::Correct).count();
    let partial = verdicts.iter().filter(|v| **v == Verdict::Partial).count();
    assert_eq!((correct, partial), (2, 2));
}

#[test]
fn endless_scenario() {
    let mut game = game(Rules::endless(3, 1), 42);

    game.play("berry").unwrap();
    assert!(!game.board().is_empty());
    assert_eq!(game.lives(), Some(2));
    assert_eq!(game.score(), Some(0));

    game.play("apple").unwrap();
    assert!(game.is_round_complete());
    assert_eq!(game.score(), Some(0));

    assert!(game.commit_round().unwrap());
    assert!(game.board().is_empty());
    assert_eq!(game.lives(), Some(3));
    assert_eq!(game.score(), Some(1));
}
