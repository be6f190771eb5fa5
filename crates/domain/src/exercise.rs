use std::{fmt, slice::Iter};

use strum::{AsRefStr, EnumString};

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: String,
    pub equipment: Equipment,
    pub exercise_type: ExerciseType,
    pub level: Level,
    pub muscle_group: MuscleGroup,
    pub sets: Option<u32>,
    pub reps: Option<Reps>,
    pub duration: Option<String>,
}

impl ExerciseTemplate {
    #[must_use]
    pub fn needs_equipment(&self) -> bool {
        self.equipment != Equipment::None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reps {
    Count(u32),
    /// Qualitative rep scheme such as "AMRAP" or "10 each side".
    Scheme(String),
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reps::Count(count) => write!(f, "{count}"),
            Reps::Scheme(scheme) => write!(f, "{scheme}"),
        }
    }
}

pub trait Property: Clone + Copy + Sized + AsRef<str> + 'static {
    const KIND: &'static str;

    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;

    /// Parses a wire token. Case, surrounding whitespace and the separators
    /// ' ' and '-' are not significant.
    fn from_token(token: &str) -> Result<Self, ParseError>
    where
        Self: std::str::FromStr,
    {
        normalize(token).parse().map_err(|_| ParseError::Unknown {
            kind: Self::KIND,
            value: token.to_string(),
            expected: Self::iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase().replace([' ', '-'], "_")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown {kind} \"{value}\" (expected one of: {expected})")]
    Unknown {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

/// `None` is the canonical marker for exercises that need no equipment. The
/// catalog variants "bodyweight" and "no equipment" both parse to it.
#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    #[strum(to_string = "none", serialize = "bodyweight", serialize = "no_equipment")]
    None,
    Barbell,
    Bench,
    Box,
    Cable,
    #[strum(to_string = "dumbbell", serialize = "dumbbells")]
    Dumbbell,
    ExerciseBall,
    EzBar,
    JumpRope,
    #[strum(to_string = "kettlebell", serialize = "kettlebells")]
    Kettlebell,
    Machine,
    MedicineBall,
    PullUpBar,
    #[strum(to_string = "resistance_band", serialize = "resistance_bands")]
    ResistanceBand,
    TrapBar,
}

impl Property for Equipment {
    const KIND: &'static str = "equipment";

    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 15] = [
            Equipment::None,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Box,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::ExerciseBall,
            Equipment::EzBar,
            Equipment::JumpRope,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::MedicineBall,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::ExerciseBall => "Exercise Ball",
            Equipment::EzBar => "EZ Bar",
            Equipment::JumpRope => "Jump Rope",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum ExerciseType {
    #[strum(to_string = "warmup", serialize = "warm_up")]
    Warmup,
    Main,
    #[strum(to_string = "cooldown", serialize = "cool_down")]
    Cooldown,
}

impl Property for ExerciseType {
    const KIND: &'static str = "exercise type";

    fn iter() -> Iter<'static, ExerciseType> {
        static EXERCISE_TYPE: [ExerciseType; 3] = [
            ExerciseType::Warmup,
            ExerciseType::Main,
            ExerciseType::Cooldown,
        ];
        EXERCISE_TYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseType::Warmup => "Warm-Up",
            ExerciseType::Main => "Main",
            ExerciseType::Cooldown => "Cool-Down",
        }
    }
}

/// Difficulty of an exercise and experience of a client.
#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Whether a client at this level may be given an exercise of `level`.
    #[must_use]
    pub fn admits(self, level: Level) -> bool {
        match self {
            Level::Beginner => level == Level::Beginner,
            Level::Intermediate => matches!(level, Level::Beginner | Level::Intermediate),
            Level::Advanced => true,
        }
    }
}

impl Property for Level {
    const KIND: &'static str = "level";

    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Back,
    Arms,
    Legs,
    Core,
    Other,
}

impl Property for MuscleGroup {
    const KIND: &'static str = "muscle group";

    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUP: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::Other,
        ];
        MUSCLE_GROUP.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Back => "Back",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::Other => "Other",
        }
    }
}
