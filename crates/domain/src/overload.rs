use crate::{ExerciseTemplate, ExerciseType, Level, Reps};

pub const REST: &str = "60s";
pub const TEMPO: &str = "2-1-1";

/// An exercise with concrete targets for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescribedExercise {
    pub name: String,
    pub sets: Option<u32>,
    pub reps: Option<Reps>,
    pub duration: Option<String>,
    pub rest: Option<String>,
    pub tempo: Option<String>,
}

/// Applies progressive overload for the given week (1-based).
///
/// Sets grow by one from week 3 on, numeric reps by two per week. Rep
/// schemes and durations are kept as they are.
#[must_use]
pub fn prescribe(template: &ExerciseTemplate, week: u32) -> PrescribedExercise {
    let is_main = template.exercise_type == ExerciseType::Main;

    PrescribedExercise {
        name: template.name.clone(),
        sets: template
            .sets
            .map(|sets| if week >= 3 { sets.saturating_add(1) } else { sets }),
        reps: template.reps.as_ref().map(|reps| match reps {
            Reps::Count(count) => {
                Reps::Count(count.saturating_add(week.saturating_sub(1).saturating_mul(2)))
            }
            Reps::Scheme(_) => reps.clone(),
        }),
        duration: template.duration.clone(),
        rest: is_main.then(|| REST.to_string()),
        tempo: (is_main && template.level != Level::Beginner).then(|| TEMPO.to_string()),
    }
}
