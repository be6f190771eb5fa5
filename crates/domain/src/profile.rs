use std::{collections::BTreeSet, slice::Iter};

use derive_more::{AsRef, Display, Into};
use strum::{AsRefStr, EnumString};

use crate::{Equipment, Level, ParseError, Property};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: Name,
    pub goal: Goal,
    pub experience: Level,
    pub equipment: BTreeSet<Equipment>,
    pub days_per_week: DaysPerWeek,
}

impl UserProfile {
    /// Builds a profile from wire tokens, failing on the first invalid field.
    pub fn new(
        name: &str,
        goal: &str,
        experience: &str,
        equipment: &[impl AsRef<str>],
        days_per_week: i64,
    ) -> Result<Self, ProfileError> {
        let name = Name::new(name)?;
        let goal = Goal::from_token(goal)?;
        let experience = Level::from_token(experience)?;
        let equipment = equipment
            .iter()
            .map(|token| Equipment::from_token(token.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        if equipment.is_empty() {
            return Err(ProfileError::NoEquipment);
        }

        Ok(Self {
            name,
            goal,
            experience,
            equipment,
            days_per_week: DaysPerWeek::new(days_per_week)?,
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    DaysPerWeek(#[from] DaysPerWeekError),
    #[error("Equipment must contain at least one entry (use \"bodyweight\" for none)")]
    NoEquipment,
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 100 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Client name must not be empty")]
    Empty,
    #[error("Client name must be 100 characters or fewer ({0} > 100)")]
    TooLong(usize),
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaysPerWeek(u32);

impl DaysPerWeek {
    pub fn new(value: i64) -> Result<Self, DaysPerWeekError> {
        match u32::try_from(value) {
            Ok(days @ 1..=7) => Ok(Self(days)),
            _ => Err(DaysPerWeekError::OutOfRange(value)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DaysPerWeekError {
    #[error("Days per week must be in the range 1 to 7 ({0})")]
    OutOfRange(i64),
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Strength,
    Flexibility,
}

impl Property for Goal {
    const KIND: &'static str = "goal";

    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 5] = [
            Goal::WeightLoss,
            Goal::MuscleGain,
            Goal::Endurance,
            Goal::Strength,
            Goal::Flexibility,
        ];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Endurance => "Endurance",
            Goal::Strength => "Strength",
            Goal::Flexibility => "Flexibility",
        }
    }
}
