//! # Database File Codec
//!
//! Converts creatures to and from the flat text format:
//!
//! ```text
//! 1|Bulbasaur|Grass|Poison|N
//! 6|Charizard|Fire|Flying|N
//! 25|Pikachu|Electric||Y
//! ```
//!
//! One record per line, fields in the fixed order `id|name|primary|secondary|caught`.
//! Every line carries exactly four delimiters, even when the secondary type is empty.
//!
//! Parsing is all-or-nothing: the first bad line aborts with a [`CodecError`]
//! naming its 1-based line number. Callers rely on this to keep their current
//! records when a file turns out to be broken.
//!
//! The codec never escapes. [`Creature`] refuses values containing the delimiter
//! or a line break, so anything it serializes parses back to the same records.

use crate::error::CodecError;
use crate::model::{CaughtStatus, Creature, CreatureId, Field, DELIMITER};

const FIELD_COUNT: usize = 5;

pub fn serialize<'a, I>(creatures: I) -> String
where
    I: IntoIterator<Item = &'a Creature>,
{
    let mut out = String::new();
    for creature in creatures {
        out.push_str(&serialize_line(creature));
        out.push('\n');
    }
    out
}

fn serialize_line(creature: &Creature) -> String {
    let caught = creature.caught().as_flag().to_string();
    [
        creature.id().as_str(),
        creature.name(),
        creature.primary_type(),
        creature.secondary_type(),
        caught.as_str(),
    ]
    .join(&DELIMITER.to_string())
}

pub fn parse(text: &str) -> Result<Vec<Creature>, CodecError> {
    let mut creatures = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        creatures.push(parse_line(raw, line)?);
    }
    Ok(creatures)
}

fn parse_line(raw: &str, line: usize) -> Result<Creature, CodecError> {
    let fields: Vec<&str> = raw.split(DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(CodecError::MalformedRow { line });
    }
    if fields.len() > FIELD_COUNT {
        log::warn!(
            "line {}: ignoring {} extra field(s)",
            line,
            fields.len() - FIELD_COUNT
        );
    }

    let id: CreatureId = fields[0].parse().map_err(|e| invalid(line, Field::Id, e))?;

    let flag = fields[4].trim_end();
    let caught = CaughtStatus::from_flag(flag).ok_or_else(|| CodecError::InvalidField {
        line,
        field: Field::Caught,
        reason: format!("expected 'Y' or 'N', found {:?}", flag),
    })?;

    Creature::new(id, fields[1], fields[2], fields[3], caught)
        .map_err(|e| invalid(line, e.field(), e))
}

fn invalid(line: usize, field: Field, reason: impl ToString) -> CodecError {
    CodecError::InvalidField {
        line,
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1|Bulbasaur|Grass|Poison|N\n6|Charizard|Fire|Flying|N\n25|Pikachu|Electric||Y\n";

    fn creature(id: u64, name: &str, t1: &str, t2: &str, caught: bool) -> Creature {
        Creature::new(CreatureId::new(id).unwrap(), name, t1, t2, caught.into()).unwrap()
    }

    #[test]
    fn parses_sample_file() {
        let parsed = parse(SAMPLE).unwrap();
        assert_eq!(parsed.len(), 3);

        let pikachu = parsed.iter().find(|c| c.id().as_str() == "25").unwrap();
        assert_eq!(pikachu.name(), "Pikachu");
        assert_eq!(pikachu.secondary_type(), "");
        assert_eq!(pikachu.caught(), CaughtStatus::Caught);
    }

    #[test]
    fn serializes_with_four_delimiters_per_line() {
        let out = serialize(&[
            creature(1, "Bulbasaur", "Grass", "Poison", false),
            creature(25, "Pikachu", "Electric", "", true),
        ]);
        assert_eq!(out, "1|Bulbasaur|Grass|Poison|N\n25|Pikachu|Electric||Y\n");
        for line in out.lines() {
            assert_eq!(line.matches('|').count(), 4);
        }
    }

    #[test]
    fn serialize_empty_is_empty() {
        assert_eq!(serialize(&[] as &[Creature]), "");
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn round_trips_created_records() {
        let records = vec![
            creature(6, "Charizard", "Fire", "Flying", false),
            creature(25, "Pikachu", "Electric", "", true),
        ];
        let parsed = parse(&serialize(&records)).unwrap();
        assert_eq!(parsed, records);
        assert_eq!(parsed[1].secondary_type(), "");
    }

    #[test]
    fn round_trip_keeps_id_text() {
        let parsed = parse("007|Squirtle|Water||N\n").unwrap();
        assert_eq!(parsed[0].id().value(), 7);
        assert_eq!(serialize(&parsed), "007|Squirtle|Water||N\n");
    }

    #[test]
    fn short_row_is_malformed() {
        assert_eq!(
            parse("5|OnlyTwoFields").unwrap_err(),
            CodecError::MalformedRow { line: 1 }
        );
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        let text = "1|Bulbasaur|Grass|Poison|N\n\n4|Charmander\n";
        assert_eq!(
            parse(text).unwrap_err(),
            CodecError::MalformedRow { line: 3 }
        );
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let text = "\r\n1|Bulbasaur|Grass|Poison|N\r\n   \r\n25|Pikachu|Electric||Y  \r\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].caught(), CaughtStatus::Caught);
    }

    #[test]
    fn rejects_bad_caught_flag() {
        let err = parse("1|Bulbasaur|Grass|Poison|maybe\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidField {
                line: 1,
                field: Field::Caught,
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_ids() {
        for text in ["abc|A|B||N", "0|A|B||N", "-3|A|B||N"] {
            let err = parse(text).unwrap_err();
            assert!(
                matches!(
                    err,
                    CodecError::InvalidField {
                        line: 1,
                        field: Field::Id,
                        ..
                    }
                ),
                "unexpected error for {:?}: {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn rejects_empty_required_fields() {
        let err = parse("1| |Grass||N").unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidField {
                field: Field::Name,
                ..
            }
        ));
    }

    #[test]
    fn ignores_extra_fields() {
        let parsed = parse("1|Bulbasaur|Grass|Poison|N|extra\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].caught(), CaughtStatus::NotCaught);
    }
}
