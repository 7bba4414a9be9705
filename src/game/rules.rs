//! Try budget and round policies
//!
//! Every game mode is one combination of a [`TryBudget`] and a [`RoundPolicy`]:
//!
//! | mode    | budget         | rounds                    |
//! |---------|----------------|---------------------------|
//! | simple  | `Bounded(n)`   | `Single`                  |
//! | zen     | `Unbounded`    | `Single`                  |
//! | endless | (lives)        | `Endless { .. }`          |

use std::fmt;

/// Default number of tries for bounded games
pub const DEFAULT_MAX_TRIES: u32 = 6;

/// Default starting lives for endless games
pub const DEFAULT_LIVES: u32 = 6;

/// Default lives awarded per banked round
pub const DEFAULT_BONUS_LIVES: u32 = 1;

/// Default length of random-letter targets
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// How many guesses a single-round game allows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryBudget {
    Bounded(u32),
    /// Zen: the game only ends on a win
    Unbounded,
}

impl TryBudget {
    /// Budget as a plain number, 0 meaning unbounded
    #[must_use]
    pub const fn max_tries(self) -> u32 {
        match self {
            Self::Bounded(n) => n,
            Self::Unbounded => 0,
        }
    }
}

/// Whether a win ends the game or just the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPolicy {
    Single,
    /// Rounds continue until lives run out; each banked win adds `bonus_lives`
    Endless { initial_lives: u32, bonus_lives: u32 },
}

/// The policy pair a game is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub budget: TryBudget,
    pub rounds: RoundPolicy,
}

impl Rules {
    /// Single round with `max_tries` guesses; 0 means unbounded, as in [`Rules::zen`]
    #[must_use]
    pub const fn bounded(max_tries: u32) -> Self {
        let budget = if max_tries == 0 {
            TryBudget::Unbounded
        } else {
            TryBudget::Bounded(max_tries)
        };
        Self {
            budget,
            rounds: RoundPolicy::Single,
        }
    }

    #[must_use]
    pub const fn zen() -> Self {
        Self {
            budget: TryBudget::Unbounded,
            rounds: RoundPolicy::Single,
        }
    }

    /// Endless rounds; lives replace the try budget
    #[must_use]
    pub const fn endless(initial_lives: u32, bonus_lives: u32) -> Self {
        Self {
            budget: TryBudget::Bounded(initial_lives),
            rounds: RoundPolicy::Endless {
                initial_lives,
                bonus_lives,
            },
        }
    }

    #[must_use]
    pub const fn is_endless(&self) -> bool {
        matches!(self.rounds, RoundPolicy::Endless { .. })
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_TRIES)
    }
}

/// Remaining tries as reported to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriesLeft {
    Finite(u32),
    Unbounded,
}

impl fmt::Display for TriesLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("Infinite (feel the /Z E N/)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zen_reports_zero_budget() {
        assert_eq!(Rules::zen().budget.max_tries(), 0);
        assert_eq!(Rules::bounded(4).budget.max_tries(), 4);
    }

    #[test]
    fn zero_tries_is_unbounded() {
        assert_eq!(Rules::bounded(0), Rules::zen());
        assert_eq!(Rules::bounded(1).budget, TryBudget::Bounded(1));
    }

    #[test]
    fn endless_rules() {
        let rules = Rules::endless(3, 1);
        assert!(rules.is_endless());
        assert!(!Rules::default().is_endless());
        assert_eq!(
            rules.rounds,
            RoundPolicy::Endless {
                initial_lives: 3,
                bonus_lives: 1
            }
        );
    }

    #[test]
    fn unbounded_tries_display_symbolically() {
        assert_eq!(TriesLeft::Finite(3).to_string(), "3");
        assert_eq!(
            TriesLeft::Unbounded.to_string(),
            "Infinite (feel the /Z E N/)"
        );
    }
}
