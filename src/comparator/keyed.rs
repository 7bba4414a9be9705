//! Field-by-field scoring for record guesses

use super::{CompareError, Comparator};
use crate::core::{FieldValue, Record, Verdict};

/// Keyed comparator for object games
///
/// Walks the target's fields in sorted key order and asks each pair of values,
/// in turn: equal, higher, lower, partial. The first predicate that holds decides
/// the verdict; if none holds the field is `Incorrect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyedComparator;

impl Comparator<Record> for KeyedComparator {
    fn compare(&self, guess: &Record, target: &Record) -> Result<Vec<Verdict>, CompareError> {
        if guess.len() != target.len() {
            return Err(CompareError::SizeMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        target
            .iter()
            .map(|(key, target_value)| {
                let guess_value = guess
                    .get(key)
                    .ok_or_else(|| CompareError::MissingKey { key: key.clone() })?;

                if guess_value.kind() != target_value.kind() {
                    return Err(CompareError::FieldTypeMismatch {
                        key: key.clone(),
                        guess: guess_value.kind(),
                        target: target_value.kind(),
                    });
                }

                Ok(score_field(guess_value, target_value))
            })
            .collect()
    }
}

fn score_field(guess: &FieldValue, target: &FieldValue) -> Verdict {
    if guess.equal(target) {
        Verdict::Correct
    } else if guess.higher(target) {
        Verdict::TooHigh
    } else if guess.lower(target) {
        Verdict::TooLow
    } else if guess.partial(target) {
        Verdict::Partial
    } else {
        Verdict::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DATETIME_FORMAT, FieldKind};
    use chrono::NaiveDateTime;
    use Verdict::{Correct, Incorrect, Partial, TooHigh, TooLow};

    fn date(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).unwrap()
    }

    fn language(
        name: &str,
        year: i64,
        typing: &str,
        paradigms: &[&str],
        rating: f64,
        released: &str,
    ) -> Record {
        Record::new()
            .with("name", name)
            .with("year", year)
            .with("typing", typing)
            .with("paradigms", FieldValue::set(paradigms.iter().copied()))
            .with("rating", rating)
            .with("released", date(released))
    }

    #[test]
    fn identical_records_are_all_correct() {
        let rust = language("Rust", 2015, "static", &["functional"], 9.5, "2015-05-15 00:00");
        let verdicts = KeyedComparator.compare(&rust, &rust).unwrap();
        assert_eq!(verdicts, vec![Correct; 6]);
    }

    #[test]
    fn verdicts_follow_sorted_keys() {
        let guess = language(
            "Go",
            2009,
            "static strong",
            &["concurrent", "imperative"],
            8.0,
            "2009-11-10 00:00",
        );
        let target = language(
            "Rust",
            2015,
            "static",
            &["functional", "imperative"],
            9.5,
            "2015-05-15 00:00",
        );

        // Keys: name, paradigms, rating, released, typing, year
        let verdicts = KeyedComparator.compare(&guess, &target).unwrap();
        assert_eq!(verdicts, [Incorrect, Partial, TooLow, TooLow, Partial, TooLow]);
    }

    #[test]
    fn ordered_fields_report_direction() {
        let guess = Record::new().with("year", 2020_i64).with("rating", 1.0);
        let target = Record::new().with("year", 2010_i64).with("rating", 2.0);

        // Keys: rating, year
        let verdicts = KeyedComparator.compare(&guess, &target).unwrap();
        assert_eq!(verdicts, [TooLow, TooHigh]);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let guess = Record::new().with("name", "C");
        let target = Record::new().with("name", "C").with("year", 1972_i64);

        assert_eq!(
            KeyedComparator.compare(&guess, &target),
            Err(CompareError::SizeMismatch {
                guess: 1,
                target: 2
            })
        );
    }

    #[test]
    fn missing_key_is_rejected() {
        let guess = Record::new().with("title", "C");
        let target = Record::new().with("name", "C");

        assert_eq!(
            KeyedComparator.compare(&guess, &target),
            Err(CompareError::MissingKey { key: "name".into() })
        );
    }

    #[test]
    fn mismatched_field_types_are_rejected() {
        let guess = Record::new().with("year", "1972");
        let target = Record::new().with("year", 1972_i64);

        assert_eq!(
            KeyedComparator.compare(&guess, &target),
            Err(CompareError::FieldTypeMismatch {
                key: "year".into(),
                guess: FieldKind::Text,
                target: FieldKind::Integer,
            })
        );
    }
}
