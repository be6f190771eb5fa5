use derive_more::Deref;

use crate::{Equipment, ExerciseTemplate, ExerciseType, Level, MuscleGroup, ReadError, Reps};

pub trait CatalogRepository {
    fn read_catalog(&self) -> Result<Catalog, ReadError>;
}

/// Read-only collection of exercise templates in a stable order.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<ExerciseTemplate>);

impl Catalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self(EXERCISES.clone())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExerciseTemplate> {
        self.0.iter().find(|e| e.name == name)
    }
}

impl From<Vec<ExerciseTemplate>> for Catalog {
    fn from(value: Vec<ExerciseTemplate>) -> Self {
        Self(value)
    }
}

impl From<&BaseExercise> for ExerciseTemplate {
    fn from(value: &BaseExercise) -> Self {
        ExerciseTemplate {
            name: value.name.to_string(),
            equipment: value.equipment,
            exercise_type: value.exercise_type,
            level: value.level,
            muscle_group: value.muscle_group,
            sets: value.sets,
            reps: value.reps.map(|reps| match reps {
                BaseReps::Count(count) => Reps::Count(count),
                BaseReps::Scheme(scheme) => Reps::Scheme(scheme.to_string()),
            }),
            duration: value.duration.map(str::to_string),
        }
    }
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum BaseReps {
    Count(u32),
    Scheme(&'static str),
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct BaseExercise {
    pub name: &'static str,
    pub equipment: Equipment,
    pub exercise_type: ExerciseType,
    pub level: Level,
    pub muscle_group: MuscleGroup,
    pub sets: Option<u32>,
    pub reps: Option<BaseReps>,
    pub duration: Option<&'static str>,
}

impl BaseExercise {
    const fn default() -> Self {
        Self {
            name: "",
            equipment: Equipment::None,
            exercise_type: ExerciseType::Main,
            level: Level::Beginner,
            muscle_group: MuscleGroup::Other,
            sets: None,
            reps: None,
            duration: None,
        }
    }
}

pub static EXERCISES: std::sync::LazyLock<Vec<ExerciseTemplate>> =
    std::sync::LazyLock::new(|| BASE_EXERCISES.iter().map(Into::into).collect());

const BASE_EXERCISES: [BaseExercise; 51] = [
    BaseExercise {
        name: "Arm Circles",
        exercise_type: ExerciseType::Warmup,
        muscle_group: MuscleGroup::Other,
        duration: Some("30s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Band Pull Apart",
        equipment: Equipment::ResistanceBand,
        muscle_group: MuscleGroup::Back,
        sets: Some(3),
        reps: Some(BaseReps::Count(15)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Barbell Back Squat",
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Legs,
        sets: Some(4),
        reps: Some(BaseReps::Count(8)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Barbell Bench Press",
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Chest,
        sets: Some(4),
        reps: Some(BaseReps::Count(8)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Barbell Curl",
        equipment: Equipment::Barbell,
        muscle_group: MuscleGroup::Arms,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Barbell Overhead Press",
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Shoulders,
        sets: Some(4),
        reps: Some(BaseReps::Count(6)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Bent Over Barbell Row",
        equipment: Equipment::Barbell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Back,
        sets: Some(4),
        reps: Some(BaseReps::Count(8)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Bicycle Crunch",
        muscle_group: MuscleGroup::Core,
        sets: Some(3),
        reps: Some(BaseReps::Count(20)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Bird Dog",
        muscle_group: MuscleGroup::Core,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Bodyweight Squat",
        muscle_group: MuscleGroup::Legs,
        sets: Some(3),
        reps: Some(BaseReps::Count(15)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Box Jump",
        equipment: Equipment::Box,
        level: Level::Advanced,
        muscle_group: MuscleGroup::Legs,
        sets: Some(4),
        reps: Some(BaseReps::Count(6)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Cable Face Pull",
        equipment: Equipment::Cable,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Shoulders,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Cat Cow Stretch",
        exercise_type: ExerciseType::Cooldown,
        muscle_group: MuscleGroup::Other,
        duration: Some("60s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Child's Pose",
        exercise_type: ExerciseType::Cooldown,
        muscle_group: MuscleGroup::Other,
        duration: Some("60s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Chin Up",
        equipment: Equipment::PullUpBar,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Back,
        sets: Some(3),
        reps: Some(BaseReps::Count(8)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Deadlift",
        equipment: Equipment::Barbell,
        level: Level::Advanced,
        muscle_group: MuscleGroup::Back,
        sets: Some(4),
        reps: Some(BaseReps::Count(5)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Decline Push Up",
        level: Level::Advanced,
        muscle_group: MuscleGroup::Chest,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Diamond Push Up",
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Arms,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dumbbell Bench Press",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Chest,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dumbbell Bicep Curl",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Arms,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dumbbell Chest Fly",
        equipment: Equipment::Dumbbell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Chest,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dumbbell Lateral Raise",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Shoulders,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dumbbell Romanian Deadlift",
        equipment: Equipment::Dumbbell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Legs,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Dumbbell Shoulder Press",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Shoulders,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Legs,
        sets: Some(3),
        reps: Some(BaseReps::Count(15)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Hamstring Stretch",
        exercise_type: ExerciseType::Cooldown,
        muscle_group: MuscleGroup::Other,
        duration: Some("45s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Handstand Push Up",
        level: Level::Advanced,
        muscle_group: MuscleGroup::Shoulders,
        sets: Some(3),
        reps: Some(BaseReps::Count(5)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        equipment: Equipment::PullUpBar,
        level: Level::Advanced,
        muscle_group: MuscleGroup::Core,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "High Knees",
        exercise_type: ExerciseType::Warmup,
        muscle_group: MuscleGroup::Other,
        duration: Some("30s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Hollow Body Hold",
        level: Level::Advanced,
        muscle_group: MuscleGroup::Core,
        duration: Some("30s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Inchworm",
        exercise_type: ExerciseType::Warmup,
        muscle_group: MuscleGroup::Other,
        sets: Some(2),
        reps: Some(BaseReps::Count(5)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Jump Rope",
        equipment: Equipment::JumpRope,
        exercise_type: ExerciseType::Warmup,
        muscle_group: MuscleGroup::Other,
        duration: Some("60s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Jumping Jacks",
        exercise_type: ExerciseType::Warmup,
        muscle_group: MuscleGroup::Other,
        duration: Some("45s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Kettlebell Goblet Squat",
        equipment: Equipment::Kettlebell,
        muscle_group: MuscleGroup::Legs,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Kettlebell Swing",
        equipment: Equipment::Kettlebell,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Legs,
        sets: Some(3),
        reps: Some(BaseReps::Count(15)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Leg Swings",
        exercise_type: ExerciseType::Warmup,
        muscle_group: MuscleGroup::Other,
        sets: Some(2),
        reps: Some(BaseReps::Scheme("10 each leg")),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Mountain Climbers",
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Core,
        duration: Some("30s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Pike Push Up",
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Shoulders,
        sets: Some(3),
        reps: Some(BaseReps::Count(8)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Plank",
        muscle_group: MuscleGroup::Core,
        duration: Some("45s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Pull Up",
        equipment: Equipment::PullUpBar,
        level: Level::Advanced,
        muscle_group: MuscleGroup::Back,
        sets: Some(3),
        reps: Some(BaseReps::Scheme("AMRAP")),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Push Up",
        muscle_group: MuscleGroup::Chest,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Quad Stretch",
        exercise_type: ExerciseType::Cooldown,
        muscle_group: MuscleGroup::Other,
        duration: Some("45s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Resistance Band Row",
        equipment: Equipment::ResistanceBand,
        muscle_group: MuscleGroup::Back,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Reverse Lunge",
        muscle_group: MuscleGroup::Legs,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Russian Twist",
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Core,
        sets: Some(3),
        reps: Some(BaseReps::Count(20)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Shoulder Stretch",
        exercise_type: ExerciseType::Cooldown,
        muscle_group: MuscleGroup::Other,
        duration: Some("30s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Single Arm Dumbbell Row",
        equipment: Equipment::Dumbbell,
        muscle_group: MuscleGroup::Back,
        sets: Some(3),
        reps: Some(BaseReps::Count(10)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Standing Forward Fold",
        exercise_type: ExerciseType::Cooldown,
        muscle_group: MuscleGroup::Other,
        duration: Some("45s"),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Tricep Bench Dip",
        equipment: Equipment::Bench,
        muscle_group: MuscleGroup::Arms,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "Wide Push Up",
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Chest,
        sets: Some(3),
        reps: Some(BaseReps::Count(12)),
        ..BaseExercise::default()
    },
    BaseExercise {
        name: "World's Greatest Stretch",
        exercise_type: ExerciseType::Warmup,
        level: Level::Intermediate,
        muscle_group: MuscleGroup::Other,
        duration: Some("60s"),
        ..BaseExercise::default()
    },
];
