//! Game modes and their constructors
//!
//! Each mode is a preset combination of target source, comparator and rules.

use super::{
    DEFAULT_BONUS_LIVES, DEFAULT_LIVES, DEFAULT_MAX_TRIES, DEFAULT_WORD_LENGTH, Game, GameError,
    RandomLetters, RecordList, Rules, Session, TargetSource, WordList,
};
use crate::comparator::{Comparator, KeyedComparator, PositionalComparator};
use crate::highscore::ScoreKeeper;
use std::fmt;
use std::str::FromStr;

/// A game over a fixed word list
pub type WordGame = Game<WordList, PositionalComparator>;

/// A game over randomly generated letter strings
pub type RandomGame = Game<RandomLetters, PositionalComparator>;

/// A game over structured records
pub type ObjectGame = Game<RecordList, KeyedComparator>;

/// Menu-selectable modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Simple,
    Endless,
    Zen,
    Random,
    EndlessRandom,
    ZenRandom,
}

impl GameMode {
    pub const ALL: [Self; 6] = [
        Self::Simple,
        Self::Endless,
        Self::Zen,
        Self::Random,
        Self::EndlessRandom,
        Self::ZenRandom,
    ];

    /// Menu option number
    #[must_use]
    pub const fn option(self) -> &'static str {
        match self {
            Self::Simple => "1",
            Self::Endless => "2",
            Self::Zen => "3",
            Self::Random => "4",
            Self::EndlessRandom => "5",
            Self::ZenRandom => "6",
        }
    }

    #[must_use]
    pub fn from_option(option: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.option() == option.trim())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Endless => "endless",
            Self::Zen => "zen",
            Self::Random => "random",
            Self::EndlessRandom => "endless-random",
            Self::ZenRandom => "zen-random",
        }
    }

    #[must_use]
    pub const fn is_endless(self) -> bool {
        matches!(self, Self::Endless | Self::EndlessRandom)
    }

    /// Random modes generate targets instead of drawing from a list
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Random | Self::EndlessRandom | Self::ZenRandom)
    }

    /// The rules this mode plays by under `config`
    #[must_use]
    pub const fn rules(self, config: &GameConfig) -> Rules {
        match self {
            Self::Simple | Self::Random => Rules::bounded(config.max_tries),
            Self::Endless | Self::EndlessRandom => {
                Rules::endless(config.lives, config.bonus_lives)
            }
            Self::Zen | Self::ZenRandom => Rules::zen(),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    /// Accepts a mode name (`endless-random`) or its menu number (`5`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        Self::from_option(&needle)
            .or_else(|| Self::ALL.into_iter().find(|mode| mode.name() == needle))
            .ok_or_else(|| format!("Unknown game mode: {s}"))
    }
}

/// Tunable game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_tries: u32,
    pub lives: u32,
    pub bonus_lives: u32,
    pub word_length: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            lives: DEFAULT_LIVES,
            bonus_lives: DEFAULT_BONUS_LIVES,
            word_length: DEFAULT_WORD_LENGTH,
            seed: None,
        }
    }
}

/// What a session guesses: words from a list, random letters, or records
#[derive(Debug, Clone)]
pub enum Material {
    Words(WordList),
    Records(RecordList),
}

fn build<S, C>(
    source: S,
    comparator: C,
    rules: Rules,
    seed: Option<u64>,
) -> Result<Game<S, C>, GameError>
where
    S: TargetSource,
    C: Comparator<S::Unit>,
{
    match seed {
        Some(seed) => Game::seeded(source, comparator, rules, seed),
        None => Game::new(source, comparator, rules),
    }
}

/// Bounded game over a word list
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `words` is empty.
pub fn simple_game(words: WordList, max_tries: u32) -> Result<WordGame, GameError> {
    Game::new(words, PositionalComparator, Rules::bounded(max_tries))
}

/// Unbounded game over a word list
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `words` is empty.
pub fn zen_game(words: WordList) -> Result<WordGame, GameError> {
    Game::new(words, PositionalComparator, Rules::zen())
}

/// Endless rounds over a word list
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `words` is empty.
pub fn endless_game(
    words: WordList,
    initial_lives: u32,
    bonus_lives: u32,
) -> Result<WordGame, GameError> {
    Game::new(
        words,
        PositionalComparator,
        Rules::endless(initial_lives, bonus_lives),
    )
}

/// Bounded game over random `length`-letter targets
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `length` is 0.
pub fn random_game(length: usize, max_tries: u32) -> Result<RandomGame, GameError> {
    Game::new(
        RandomLetters::new(length),
        PositionalComparator,
        Rules::bounded(max_tries),
    )
}

/// Unbounded game over random `length`-letter targets
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `length` is 0.
pub fn zen_random_game(length: usize) -> Result<RandomGame, GameError> {
    Game::new(RandomLetters::new(length), PositionalComparator, Rules::zen())
}

/// Endless rounds over random `length`-letter targets
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `length` is 0.
pub fn endless_random_game(
    length: usize,
    initial_lives: u32,
    bonus_lives: u32,
) -> Result<RandomGame, GameError> {
    Game::new(
        RandomLetters::new(length),
        PositionalComparator,
        Rules::endless(initial_lives, bonus_lives),
    )
}

/// Bounded game over records
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `records` is empty.
pub fn object_game(records: RecordList, max_tries: u32) -> Result<ObjectGame, GameError> {
    Game::new(records, KeyedComparator, Rules::bounded(max_tries))
}

/// Unbounded game over records
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `records` is empty.
pub fn zen_object_game(records: RecordList) -> Result<ObjectGame, GameError> {
    Game::new(records, KeyedComparator, Rules::zen())
}

/// Endless rounds over records
///
/// # Errors
/// Returns [`GameError::EmptySource`] if `records` is empty.
pub fn endless_object_game(
    records: RecordList,
    initial_lives: u32,
    bonus_lives: u32,
) -> Result<ObjectGame, GameError> {
    Game::new(
        records,
        KeyedComparator,
        Rules::endless(initial_lives, bonus_lives),
    )
}

/// Build a session for `mode`
///
/// Random modes ignore `material` and generate `config.word_length` letter
/// targets. Record material is played with the keyed comparator. The score
/// keeper is attached to endless modes only.
///
/// # Errors
/// Returns [`GameError::EmptySource`] if there is nothing to draw a target from.
pub fn build_session(
    mode: GameMode,
    config: &GameConfig,
    material: Material,
    score_keeper: Option<Box<dyn ScoreKeeper>>,
) -> Result<Box<dyn Session>, GameError> {
    let rules = mode.rules(config);
    let keeper = score_keeper.filter(|_| mode.is_endless());

    if mode.is_random() {
        let game = build(
            RandomLetters::new(config.word_length),
            PositionalComparator,
            rules,
            config.seed,
        )?;
        return Ok(attach(game, keeper));
    }

    match material {
        Material::Words(words) => {
            let game = build(words, PositionalComparator, rules, config.seed)?;
            Ok(attach(game, keeper))
        }
        Material::Records(records) => {
            let game = build(records, KeyedComparator, rules, config.seed)?;
            Ok(attach(game, keeper))
        }
    }
}

fn attach<S, C>(game: Game<S, C>, keeper: Option<Box<dyn ScoreKeeper>>) -> Box<dyn Session>
where
    S: TargetSource + 'static,
    C: Comparator<S::Unit> + 'static,
{
    match keeper {
        Some(keeper) => Box::new(game.with_score_keeper(keeper)),
        None => Box::new(game),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::game::TriesLeft;
    use crate::highscore::MemoryScoreKeeper;

    fn words() -> WordList {
        WordList::new(["apple", "berry", "melon"])
    }

    #[test]
    fn options_round_trip() {
        for mode in GameMode::ALL {
            assert_eq!(GameMode::from_option(mode.option()), Some(mode));
            assert_eq!(mode.name().parse::<GameMode>(), Ok(mode));
        }
        assert_eq!(GameMode::from_option("7"), None);
        assert_eq!("ZEN_RANDOM".parse::<GameMode>(), Ok(GameMode::ZenRandom));
        assert_eq!("5".parse::<GameMode>(), Ok(GameMode::EndlessRandom));
        assert!("hard".parse::<GameMode>().is_err());
    }

    #[test]
    fn mode_flags() {
        assert!(GameMode::Endless.is_endless());
        assert!(GameMode::EndlessRandom.is_endless());
        assert!(!GameMode::Zen.is_endless());
        assert!(GameMode::ZenRandom.is_random());
        assert!(!GameMode::Simple.is_random());
    }

    #[test]
    fn rules_follow_config() {
        let config = GameConfig {
            max_tries: 4,
            lives: 2,
            bonus_lives: 3,
            ..GameConfig::default()
        };
        assert_eq!(GameMode::Simple.rules(&config), Rules::bounded(4));
        assert_eq!(GameMode::Random.rules(&config), Rules::bounded(4));
        assert_eq!(GameMode::Endless.rules(&config), Rules::endless(2, 3));
        assert_eq!(GameMode::ZenRandom.rules(&config), Rules::zen());
    }

    #[test]
    fn constructors_reject_empty_sources() {
        let empty = WordList::new(Vec::<String>::new());
        assert!(matches!(
            simple_game(empty.clone(), 6),
            Err(GameError::EmptySource)
        ));
        assert!(matches!(zen_game(empty.clone()), Err(GameError::EmptySource)));
        assert!(matches!(
            endless_game(empty, 3, 1),
            Err(GameError::EmptySource)
        ));
        assert!(matches!(random_game(0, 6), Err(GameError::EmptySource)));
        assert!(matches!(
            object_game(RecordList::new(Vec::new(), "name"), 6),
            Err(GameError::EmptySource)
        ));
    }

    #[test]
    fn constructors_apply_rules() {
        assert_eq!(
            simple_game(words(), 6).unwrap().tries_left(),
            TriesLeft::Finite(6)
        );
        assert_eq!(zen_game(words()).unwrap().tries_left(), TriesLeft::Unbounded);
        assert_eq!(endless_game(words(), 3, 1).unwrap().lives(), Some(3));
        assert_eq!(random_game(7, 6).unwrap().target().len(), 7);
        assert_eq!(
            zen_random_game(4).unwrap().tries_left(),
            TriesLeft::Unbounded
        );
        let endless = endless_random_game(5, 2, 1).unwrap();
        assert_eq!(endless.bonus_lives(), Some(1));

        let records = RecordList::new(vec![Record::new().with("name", "Rust")], "name");
        assert_eq!(
            zen_object_game(records.clone()).unwrap().target_label(),
            "Rust"
        );
        assert_eq!(
            endless_object_game(records, 1, 1).unwrap().lives(),
            Some(1)
        );
    }

    #[test]
    fn build_session_for_random_mode_ignores_material() {
        let config = GameConfig {
            word_length: 3,
            seed: Some(4),
            ..GameConfig::default()
        };
        let session = build_session(
            GameMode::Random,
            &config,
            Material::Words(WordList::new(Vec::<String>::new())),
            None,
        )
        .unwrap();
        assert_eq!(session.target_label().len(), 3);
    }

    #[test]
    fn build_session_attaches_keeper_to_endless_only() {
        let config = GameConfig::default();
        let endless = build_session(
            GameMode::Endless,
            &config,
            Material::Words(words()),
            Some(Box::new(MemoryScoreKeeper::new(9))),
        )
        .unwrap();
        assert_eq!(endless.status().high_score, Some(9));

        let simple = build_session(
            GameMode::Simple,
            &config,
            Material::Words(words()),
            Some(Box::new(MemoryScoreKeeper::new(9))),
        )
        .unwrap();
        assert_eq!(simple.status().high_score, None);
    }

    #[test]
    fn build_session_plays_records() {
        let records = RecordList::new(
            vec![
                Record::new().with("name", "Rust").with("year", 2015_i64),
                Record::new().with("name", "Go").with("year", 2009_i64),
            ],
            "name",
        );
        let mut session = build_session(
            GameMode::Zen,
            &GameConfig::default(),
            Material::Records(records),
            None,
        )
        .unwrap();

        let row = session.play("rust").unwrap();
        assert_eq!(row.guess, "Rust");
        assert_eq!(row.cells[0].text, "name: Rust");
    }
}
