use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Separates fields in the database file.
pub const DELIMITER: char = '|';

/// Characters that would break the one-record-per-line file layout.
const FORBIDDEN: [char; 3] = [DELIMITER, '\n', '\r'];

/// The fields of a [`Creature`], in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    PrimaryType,
    SecondaryType,
    Caught,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::PrimaryType => "primary type",
            Field::SecondaryType => "secondary type",
            Field::Caught => "caught status",
        };
        f.write_str(label)
    }
}

/// Stable identity of a stored record.
///
/// Handles are issued by the store and survive edits of every field,
/// including the user-facing [`CreatureId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(Uuid);

impl Handle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positive integer id that remembers how it was written.
///
/// `007` and `7` compare equal numerically (lookups, sorting) but the
/// original text is what gets written back to disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatureId {
    value: u64,
    text: String,
}

impl CreatureId {
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::NotPositive(Field::Id));
        }
        Ok(Self {
            value,
            text: value.to_string(),
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for CreatureId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed: i64 = text
            .parse()
            .map_err(|_| ValidationError::NotAnInteger(Field::Id))?;
        if parsed <= 0 {
            return Err(ValidationError::NotPositive(Field::Id));
        }
        Ok(Self {
            value: parsed as u64,
            text: text.to_string(),
        })
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaughtStatus {
    Caught,
    NotCaught,
}

impl CaughtStatus {
    /// The single-character form used in the database file.
    pub fn as_flag(&self) -> char {
        match self {
            CaughtStatus::Caught => 'Y',
            CaughtStatus::NotCaught => 'N',
        }
    }

    /// Strict parse of the file flag: exactly `Y` or `N`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "Y" => Some(CaughtStatus::Caught),
            "N" => Some(CaughtStatus::NotCaught),
            _ => None,
        }
    }

    /// Lenient parse of a user answer (`y`, `Yes`, `no`, ...).
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(CaughtStatus::Caught),
            "n" | "no" => Some(CaughtStatus::NotCaught),
            _ => None,
        }
    }

    pub fn is_caught(&self) -> bool {
        matches!(self, CaughtStatus::Caught)
    }
}

impl From<bool> for CaughtStatus {
    fn from(caught: bool) -> Self {
        if caught {
            CaughtStatus::Caught
        } else {
            CaughtStatus::NotCaught
        }
    }
}

/// Trims `value` and checks it can be stored in `field`.
///
/// Required fields must be non-empty after trimming. No field may contain
/// the delimiter or a line break.
pub fn validate_text(field: Field, value: &str, required: bool) -> Result<String, ValidationError> {
    let value = value.trim();
    if required && value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    if let Some(found) = value.chars().find(|c| FORBIDDEN.contains(c)) {
        return Err(ValidationError::ForbiddenCharacter { field, found });
    }
    Ok(value.to_string())
}

/// One record in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    id: CreatureId,
    name: String,
    primary_type: String,
    secondary_type: String,
    caught: CaughtStatus,
}

impl Creature {
    pub fn new(
        id: CreatureId,
        name: &str,
        primary_type: &str,
        secondary_type: &str,
        caught: CaughtStatus,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: validate_text(Field::Name, name, true)?,
            primary_type: validate_text(Field::PrimaryType, primary_type, true)?,
            secondary_type: validate_text(Field::SecondaryType, secondary_type, false)?,
            caught,
        })
    }

    pub fn id(&self) -> &CreatureId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    /// Empty when the creature has a single type.
    pub fn secondary_type(&self) -> &str {
        &self.secondary_type
    }

    pub fn caught(&self) -> CaughtStatus {
        self.caught
    }

    /// Replaces everything except the caught status.
    ///
    /// All values are validated first; on error the record is left as it was.
    pub fn set_details(
        &mut self,
        id: CreatureId,
        name: &str,
        primary_type: &str,
        secondary_type: &str,
    ) -> Result<(), ValidationError> {
        let name = validate_text(Field::Name, name, true)?;
        let primary_type = validate_text(Field::PrimaryType, primary_type, true)?;
        let secondary_type = validate_text(Field::SecondaryType, secondary_type, false)?;
        self.id = id;
        self.name = name;
        self.primary_type = primary_type;
        self.secondary_type = secondary_type;
        Ok(())
    }

    pub fn set_caught(&mut self, caught: CaughtStatus) {
        self.caught = caught;
    }
}

/// Orderings offered by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    PrimaryType,
    SecondaryType,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::PrimaryType,
        SortKey::SecondaryType,
    ];

    /// Maps the 1-based menu choice used by the interactive listing.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Id => "ID",
            SortKey::Name => "name",
            SortKey::PrimaryType => "primary type",
            SortKey::SecondaryType => "secondary type",
        };
        f.write_str(label)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "primary" | "type1" | "primary-type" => Ok(SortKey::PrimaryType),
            "secondary" | "type2" | "secondary-type" => Ok(SortKey::SecondaryType),
            other => Err(format!(
                "unknown sort key '{}' (expected id, name, primary or secondary)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> CreatureId {
        CreatureId::new(n).unwrap()
    }

    #[test]
    fn id_keeps_original_text() {
        let parsed: CreatureId = " 007 ".parse().unwrap();
        assert_eq!(parsed.value(), 7);
        assert_eq!(parsed.as_str(), "007");
        assert_eq!(parsed.to_string(), "007");
    }

    #[test]
    fn id_rejects_zero_and_negatives() {
        assert_eq!(
            "0".parse::<CreatureId>(),
            Err(ValidationError::NotPositive(Field::Id))
        );
        assert_eq!(
            "-4".parse::<CreatureId>(),
            Err(ValidationError::NotPositive(Field::Id))
        );
        assert_eq!(
            CreatureId::new(0),
            Err(ValidationError::NotPositive(Field::Id))
        );
    }

    #[test]
    fn id_rejects_non_integers() {
        assert_eq!(
            "Pikachu".parse::<CreatureId>(),
            Err(ValidationError::NotAnInteger(Field::Id))
        );
        assert_eq!(
            "1.5".parse::<CreatureId>(),
            Err(ValidationError::NotAnInteger(Field::Id))
        );
    }

    #[test]
    fn creature_trims_and_validates() {
        let c = Creature::new(id(1), "  Bulbasaur ", "Grass", " ", CaughtStatus::NotCaught)
            .unwrap();
        assert_eq!(c.name(), "Bulbasaur");
        assert_eq!(c.secondary_type(), "");
    }

    #[test]
    fn creature_requires_name_and_primary_type() {
        assert_eq!(
            Creature::new(id(1), "   ", "Grass", "", CaughtStatus::Caught),
            Err(ValidationError::Empty(Field::Name))
        );
        assert_eq!(
            Creature::new(id(1), "Bulbasaur", "", "", CaughtStatus::Caught),
            Err(ValidationError::Empty(Field::PrimaryType))
        );
    }

    #[test]
    fn creature_rejects_delimiter_and_newlines() {
        assert_eq!(
            Creature::new(id(1), "Mr|Mime", "Psychic", "", CaughtStatus::Caught),
            Err(ValidationError::ForbiddenCharacter {
                field: Field::Name,
                found: '|'
            })
        );
        assert_eq!(
            Creature::new(id(1), "Mew", "Psychic", "Fairy\nx", CaughtStatus::Caught),
            Err(ValidationError::ForbiddenCharacter {
                field: Field::SecondaryType,
                found: '\n'
            })
        );
    }

    #[test]
    fn set_details_is_all_or_nothing() {
        let mut c = Creature::new(id(4), "Charmander", "Fire", "", CaughtStatus::Caught).unwrap();
        let err = c.set_details(id(5), "Charmeleon", "", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty(Field::PrimaryType));
        assert_eq!(c.id().value(), 4);
        assert_eq!(c.name(), "Charmander");

        c.set_details(id(5), "Charmeleon", "Fire", "").unwrap();
        assert_eq!(c.id().value(), 5);
        assert_eq!(c.name(), "Charmeleon");
        assert_eq!(c.caught(), CaughtStatus::Caught);
    }

    #[test]
    fn caught_flags() {
        assert_eq!(CaughtStatus::from_flag("Y"), Some(CaughtStatus::Caught));
        assert_eq!(CaughtStatus::from_flag("N"), Some(CaughtStatus::NotCaught));
        assert_eq!(CaughtStatus::from_flag("y"), None);
        assert_eq!(CaughtStatus::from_answer(" y "), Some(CaughtStatus::Caught));
        assert_eq!(CaughtStatus::from_answer("No"), Some(CaughtStatus::NotCaught));
        assert_eq!(CaughtStatus::from_answer("maybe"), None);
        assert_eq!(CaughtStatus::Caught.as_flag(), 'Y');
    }

    #[test]
    fn sort_key_choices() {
        assert_eq!(SortKey::from_choice(1), Some(SortKey::Id));
        assert_eq!(SortKey::from_choice(4), Some(SortKey::SecondaryType));
        assert_eq!(SortKey::from_choice(0), None);
        assert_eq!(SortKey::from_choice(5), None);
        assert_eq!("Primary".parse::<SortKey>(), Ok(SortKey::PrimaryType));
        assert!("colour".parse::<SortKey>().is_err());
    }
}
