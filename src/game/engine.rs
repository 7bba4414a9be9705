//! The game state machine
//!
//! One [`Game`] type covers every mode. What varies between modes is injected
//! at construction:
//! - a [`TargetSource`] (word list, random letters, record list)
//! - a [`Comparator`] for that source's unit type
//! - [`Rules`]: try budget and round policy
//!
//! A guess goes through convert → validate → compare before any counter moves,
//! so a rejected guess leaves the game exactly as it was.
//!
//! In endless games only a miss costs a life; the winning guess of a round is free.

use super::{Board, BoardEntry, GameError, RoundPolicy, Rules, TargetSource, TriesLeft, TryBudget};
use crate::comparator::Comparator;
use crate::core::all_correct;
use crate::highscore::ScoreKeeper;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Round bookkeeping for endless games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EndlessState {
    initial_lives: u32,
    bonus_lives: u32,
    lives: u32,
    score: u32,
    round_complete: bool,
    attempts_taken: u32,
}

impl EndlessState {
    const fn new(initial_lives: u32, bonus_lives: u32) -> Self {
        Self {
            initial_lives,
            bonus_lives,
            lives: initial_lives,
            score: 0,
            round_complete: false,
            attempts_taken: 0,
        }
    }
}

/// A guessing game over targets drawn from `S`, scored by `C`
pub struct Game<S: TargetSource, C> {
    source: S,
    comparator: C,
    rules: Rules,
    rng: StdRng,
    target: S::Unit,
    board: Board<S::Unit>,
    tries_used: u32,
    finished: bool,
    won: bool,
    endless: Option<EndlessState>,
    score_keeper: Option<Box<dyn ScoreKeeper>>,
}

impl<S, C> Game<S, C>
where
    S: TargetSource,
    C: Comparator<S::Unit>,
{
    /// Create a game and draw its first target
    ///
    /// # Errors
    /// Returns [`GameError::EmptySource`] if the source has nothing to draw from;
    /// no game is created in that case.
    pub fn new(source: S, comparator: C, rules: Rules) -> Result<Self, GameError> {
        Self::with_rng(source, comparator, rules, StdRng::from_os_rng())
    }

    /// Create a game whose target draws are reproducible
    ///
    /// # Errors
    /// Returns [`GameError::EmptySource`] if the source has nothing to draw from.
    pub fn seeded(source: S, comparator: C, rules: Rules, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(source, comparator, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: S, comparator: C, rules: Rules, mut rng: StdRng) -> Result<Self, GameError> {
        let target = source.select(&mut rng)?;
        let endless = match rules.rounds {
            RoundPolicy::Single => None,
            RoundPolicy::Endless {
                initial_lives,
                bonus_lives,
            } => Some(EndlessState::new(initial_lives, bonus_lives)),
        };

        info!(
            target = %source.label(&target),
            endless = endless.is_some(),
            "new game"
        );

        Ok(Self {
            source,
            comparator,
            rules,
            rng,
            target,
            board: Board::new(),
            tries_used: 0,
            finished: false,
            won: false,
            endless,
            score_keeper: None,
        })
    }

    /// Replace the current target (fixed puzzles, tests)
    #[must_use]
    pub fn with_target(mut self, target: S::Unit) -> Self {
        self.target = target;
        self
    }

    /// Attach a high score keeper, updated whenever a round is banked
    #[must_use]
    pub fn with_score_keeper(mut self, keeper: Box<dyn ScoreKeeper>) -> Self {
        self.score_keeper = Some(keeper);
        self
    }

    /// Score a raw guess against the current target
    ///
    /// In endless games only a miss costs a life. The guess that wins a round
    /// is free, so a round won on the first try leaves lives untouched.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game has already finished
    /// - [`GameError::RoundPending`] if an endless round is won but not yet committed
    /// - a conversion, validation or comparison error for a bad guess
    ///
    /// On error nothing about the game changes.
    pub fn play(&mut self, raw: &str) -> Result<&BoardEntry<S::Unit>, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if self.is_round_complete() {
            return Err(GameError::RoundPending);
        }

        let guess = self.source.convert(raw)?;
        self.source.validate(&guess, &self.target)?;
        let verdicts = self.comparator.compare(&guess, &self.target)?;

        let hit = all_correct(&verdicts);
        self.tries_used += 1;

        debug!(
            guess = %self.source.label(&guess),
            tries_used = self.tries_used,
            hit,
            "scored guess"
        );

        match self.endless.as_mut() {
            Some(state) => {
                if hit {
                    state.round_complete = true;
                    state.attempts_taken = self.tries_used;
                    info!(attempts = self.tries_used, lives = state.lives, "round won");
                } else {
                    state.lives = state.lives.saturating_sub(1);
                    if state.lives == 0 {
                        self.finished = true;
                        self.won = false;
                        info!(score = state.score, "out of lives");
                    }
                }
            }
            None => {
                self.won = hit;
                self.finished = hit
                    || matches!(self.rules.budget, TryBudget::Bounded(max) if self.tries_used >= max);
                if self.finished {
                    info!(won = self.won, tries_used = self.tries_used, "game finished");
                }
            }
        }

        Ok(self.board.push(verdicts, guess))
    }

    /// Bank a won endless round and start the next one
    ///
    /// Adds a point and the bonus lives, then draws a new target on a fresh board.
    /// Lives and score carry over. Returns `false` (and does nothing) unless a
    /// round is waiting to be committed.
    ///
    /// # Errors
    /// Returns [`GameError::EmptySource`] if a new target cannot be drawn.
    pub fn commit_round(&mut self) -> Result<bool, GameError> {
        let Some(state) = self.endless.as_mut() else {
            return Ok(false);
        };
        if !state.round_complete {
            return Ok(false);
        }

        let target = self.source.select(&mut self.rng)?;

        state.score += 1;
        state.lives += state.bonus_lives;
        state.round_complete = false;
        let (score, lives) = (state.score, state.lives);

        self.target = target;
        self.board = Board::new();
        self.tries_used = 0;

        if let Some(keeper) = self.score_keeper.as_mut() {
            keeper.update_high_score(score);
        }

        info!(score, lives, "round committed");
        Ok(true)
    }

    /// Start over with the same configuration
    ///
    /// Clears the board and counters and draws a new target. Endless games also
    /// restore their starting lives and zero their score.
    ///
    /// # Errors
    /// Returns [`GameError::EmptySource`] if a new target cannot be drawn.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.target = self.source.select(&mut self.rng)?;
        self.board = Board::new();
        self.tries_used = 0;
        self.finished = false;
        self.won = false;
        if let Some(state) = self.endless.as_mut() {
            *state = EndlessState::new(state.initial_lives, state.bonus_lives);
        }

        info!(target = %self.source.label(&self.target), "game reset");
        Ok(())
    }
}

impl<S: TargetSource, C> Game<S, C> {
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn board(&self) -> &Board<S::Unit> {
        &self.board
    }

    #[must_use]
    pub const fn target(&self) -> &S::Unit {
        &self.target
    }

    /// The target's human name (the word, or a record's display key)
    #[must_use]
    pub fn target_label(&self) -> String {
        self.source.label(&self.target)
    }

    /// Guesses made this game (this round, for endless games)
    #[must_use]
    pub const fn tries_used(&self) -> u32 {
        self.tries_used
    }

    /// Remaining budget: lives for endless games, tries otherwise
    #[must_use]
    pub const fn tries_left(&self) -> TriesLeft {
        match (&self.endless, self.rules.budget) {
            (Some(state), _) => TriesLeft::Finite(state.lives),
            (None, TryBudget::Bounded(max)) => TriesLeft::Finite(max.saturating_sub(self.tries_used)),
            (None, TryBudget::Unbounded) => TriesLeft::Unbounded,
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the player won a single-round game; always `false` for endless games
    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn is_endless(&self) -> bool {
        self.endless.is_some()
    }

    #[must_use]
    pub const fn lives(&self) -> Option<u32> {
        match &self.endless {
            Some(state) => Some(state.lives),
            None => None,
        }
    }

    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        match &self.endless {
            Some(state) => Some(state.score),
            None => None,
        }
    }

    #[must_use]
    pub const fn bonus_lives(&self) -> Option<u32> {
        match &self.endless {
            Some(state) => Some(state.bonus_lives),
            None => None,
        }
    }

    /// Whether an endless round has been won and awaits [`Game::commit_round`]
    #[must_use]
    pub const fn is_round_complete(&self) -> bool {
        matches!(&self.endless, Some(state) if state.round_complete)
    }

    /// Guesses the last won endless round took
    #[must_use]
    pub const fn attempts_taken(&self) -> Option<u32> {
        match &self.endless {
            Some(state) => Some(state.attempts_taken),
            None => None,
        }
    }

    #[must_use]
    pub fn high_score(&self) -> Option<u32> {
        self.score_keeper.as_ref().map(|keeper| keeper.high_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{KeyedComparator, PositionalComparator};
    use crate::core::{Record, Verdict};
    use crate::game::{RandomLetters, RecordList, WordList};
    use crate::highscore::MemoryScoreKeeper;

    type WordGame = Game<WordList, PositionalComparator>;

    fn fruit() -> WordList {
        WordList::new(["apple", "berry", "melon", "lemon"])
    }

    fn simple(max_tries: u32) -> WordGame {
        Game::seeded(fruit(), PositionalComparator, Rules::bounded(max_tries), 1)
            .unwrap()
            .with_target("apple".to_string())
    }

    fn endless(lives: u32, bonus: u32) -> WordGame {
        Game::seeded(fruit(), PositionalComparator, Rules::endless(lives, bonus), 1)
            .unwrap()
            .with_target("apple".to_string())
    }

    #[test]
    fn empty_source_fails_construction() {
        let result = Game::new(
            WordList::new(Vec::<String>::new()),
            PositionalComparator,
            Rules::default(),
        );
        assert!(matches!(result, Err(GameError::EmptySource)));
    }

    #[test]
    fn initial_target_comes_from_source() {
        let game = Game::new(fruit(), PositionalComparator, Rules::default()).unwrap();
        assert!(game.source().contains(game.target()));
        assert!(game.board().is_empty());
        assert_eq!(game.tries_used(), 0);
    }

    #[test]
    fn winning_guess_finishes_game() {
        let mut game = simple(6);
        let entry = game.play("apple").unwrap();
        assert!(entry.is_win());

        assert!(game.is_finished());
        assert!(game.has_won());
        assert_eq!(game.tries_used(), 1);
        assert_eq!(game.tries_left(), TriesLeft::Finite(5));
    }

    #[test]
    fn zero_max_tries_never_runs_out() {
        let mut game = simple(0);
        assert_eq!(game.tries_left(), TriesLeft::Unbounded);

        for guess in ["berry", "melon", "lemon"] {
            game.play(guess).unwrap();
        }
        assert!(!game.is_finished());
        assert_eq!(game.tries_left(), TriesLeft::Unbounded);

        game.play("apple").unwrap();
        assert!(game.has_won());
    }

    #[test]
    fn input_is_normalised_before_validation() {
        let mut game = simple(6);
        game.play("  APPLE ").unwrap();
        assert!(game.has_won());
    }

    #[test]
    fn exhausting_tries_loses() {
        let mut game = simple(3);
        for guess in ["berry", "melon", "lemon"] {
            assert!(!game.is_finished());
            game.play(guess).unwrap();
        }

        assert!(game.is_finished());
        assert!(!game.has_won());
        assert_eq!(game.tries_left(), TriesLeft::Finite(0));
        assert_eq!(game.board().len(), 3);
    }

    #[test]
    fn finished_game_rejects_play() {
        let mut game = simple(1);
        game.play("berry").unwrap();
        assert_eq!(game.play("apple").unwrap_err(), GameError::GameOver);
        assert_eq!(game.board().len(), 1);
        assert_eq!(game.tries_used(), 1);
    }

    #[test]
    fn rejected_guesses_change_nothing() {
        let mut game = simple(6);
        game.play("berry").unwrap();
        let board_before = game.board().clone();

        assert!(matches!(
            game.play("kiwi"),
            Err(GameError::LengthMismatch { .. })
        ));
        assert!(matches!(game.play("mango"), Err(GameError::NotInList { .. })));

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.tries_used(), 1);
        assert!(!game.is_finished());
    }

    #[test]
    fn board_records_verdicts() {
        let mut game = simple(6);
        game.play("lemon").unwrap();

        let last = game.board().last().unwrap();
        assert_eq!(last.guess(), "lemon");
        assert_eq!(
            last.verdicts(),
            [
                Verdict::Partial,
                Verdict::Partial,
                Verdict::Incorrect,
                Verdict::Incorrect,
                Verdict::Incorrect
            ]
        );
    }

    #[test]
    fn zen_never_finishes_without_win() {
        let mut game = Game::seeded(fruit(), PositionalComparator, Rules::zen(), 9)
            .unwrap()
            .with_target("apple".to_string());

        for _ in 0..50 {
            game.play("melon").unwrap();
            assert!(!game.is_finished());
        }
        assert_eq!(game.tries_left(), TriesLeft::Unbounded);

        game.play("apple").unwrap();
        assert!(game.is_finished());
        assert!(game.has_won());
    }

    #[test]
    fn reset_clears_progress() {
        let mut game = simple(2);
        game.play("berry").unwrap();
        game.play("melon").unwrap();
        assert!(game.is_finished());

        game.reset().unwrap();
        assert!(game.board().is_empty());
        assert_eq!(game.tries_used(), 0);
        assert!(!game.is_finished());
        assert!(!game.has_won());
        assert!(game.source().contains(game.target()));
    }

    #[test]
    fn endless_scenario() {
        let mut game = endless(3, 1);

        game.play("berry").unwrap();
        assert!(!game.board().is_empty());
        assert_eq!(game.lives(), Some(2));
        assert_eq!(game.score(), Some(0));

        game.play("apple").unwrap();
        assert!(game.is_round_complete());
        assert_eq!(game.attempts_taken(), Some(2));
        assert_eq!(game.score(), Some(0));
        assert!(!game.is_finished());

        assert!(game.commit_round().unwrap());
        assert!(game.board().is_empty());
        assert_eq!(game.lives(), Some(3));
        assert_eq!(game.score(), Some(1));
        assert_eq!(game.tries_used(), 0);
        assert!(!game.is_round_complete());
    }

    #[test]
    fn only_misses_cost_lives() {
        let mut game = endless(3, 1);
        game.play("berry").unwrap();
        assert_eq!(game.lives(), Some(2));
        game.play("apple").unwrap();
        assert_eq!(game.lives(), Some(2));
        game.commit_round().unwrap();
        assert_eq!(game.lives(), Some(3));
    }

    #[test]
    fn commit_without_win_is_noop() {
        let mut game = endless(3, 1);
        game.play("berry").unwrap();
        let board_before = game.board().clone();

        assert!(!game.commit_round().unwrap());
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.lives(), Some(2));
        assert_eq!(game.score(), Some(0));

        let mut single = simple(6);
        assert!(!single.commit_round().unwrap());
    }

    #[test]
    fn pending_round_blocks_play() {
        let mut game = endless(3, 1);
        game.play("apple").unwrap();
        assert_eq!(game.play("berry").unwrap_err(), GameError::RoundPending);
        assert_eq!(game.lives(), Some(3));
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn endless_ends_when_lives_run_out() {
        let mut game = endless(2, 1);
        game.play("berry").unwrap();
        game.play("melon").unwrap();

        assert!(game.is_finished());
        assert!(!game.has_won());
        assert_eq!(game.lives(), Some(0));
        assert_eq!(game.play("apple").unwrap_err(), GameError::GameOver);
        assert_eq!(game.board().len(), 2);
    }

    #[test]
    fn winning_on_last_life_keeps_game_alive() {
        let mut game = endless(1, 0);
        game.play("apple").unwrap();
        assert!(game.is_round_complete());
        assert!(!game.is_finished());

        game.commit_round().unwrap();
        assert_eq!(game.score(), Some(1));
        assert_eq!(game.lives(), Some(1));
        assert!(!game.is_finished());
    }

    #[test]
    fn endless_reset_restores_lives_and_score() {
        let mut game = endless(3, 2);
        game.play("apple").unwrap();
        game.commit_round().unwrap();
        assert_eq!(game.lives(), Some(5));

        game.reset().unwrap();
        assert_eq!(game.lives(), Some(3));
        assert_eq!(game.score(), Some(0));
        assert!(game.board().is_empty());
        assert!(!game.is_round_complete());
    }

    #[test]
    fn commit_updates_high_score() {
        let mut game = endless(3, 1).with_score_keeper(Box::new(MemoryScoreKeeper::new(1)));
        assert_eq!(game.high_score(), Some(1));

        game.play("apple").unwrap();
        game.commit_round().unwrap();
        let next = game.target().clone();
        game.play(&next).unwrap();
        game.commit_round().unwrap();

        assert_eq!(game.score(), Some(2));
        assert_eq!(game.high_score(), Some(2));
    }

    #[test]
    fn single_round_games_have_no_endless_state() {
        let game = simple(6);
        assert_eq!(game.lives(), None);
        assert_eq!(game.score(), None);
        assert_eq!(game.attempts_taken(), None);
        assert_eq!(game.high_score(), None);
        assert!(!game.is_round_complete());
    }

    #[test]
    fn random_game_accepts_any_letters() {
        let mut game = Game::seeded(
            RandomLetters::new(4),
            PositionalComparator,
            Rules::bounded(6),
            5,
        )
        .unwrap()
        .with_target("abcd".to_string());

        game.play("zzzz").unwrap();
        assert_eq!(
            game.play("ab-d").unwrap_err(),
            GameError::InvalidCharacter { letter: '-' }
        );
        game.play("ABCD").unwrap();
        assert!(game.has_won());
        assert_eq!(game.tries_used(), 2);
    }

    #[test]
    fn seeded_games_draw_the_same_targets() {
        let a = Game::seeded(RandomLetters::new(6), PositionalComparator, Rules::zen(), 77).unwrap();
        let b = Game::seeded(RandomLetters::new(6), PositionalComparator, Rules::zen(), 77).unwrap();
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn object_game_scores_records() {
        let records = vec![
            Record::new().with("name", "Rust").with("year", 2015_i64),
            Record::new().with("name", "Go").with("year", 2009_i64),
        ];
        let target = records[0].clone();
        let mut game = Game::seeded(
            RecordList::new(records, "name"),
            KeyedComparator,
            Rules::bounded(6),
            3,
        )
        .unwrap()
        .with_target(target);

        let entry = game.play("go").unwrap();
        assert_eq!(entry.verdicts(), [Verdict::Incorrect, Verdict::TooLow]);
        assert!(matches!(game.play("Cobol"), Err(GameError::NotInList { .. })));

        game.play("RUST").unwrap();
        assert!(game.has_won());
        assert_eq!(game.target_label(), "Rust");
    }
}
