use std::collections::BTreeSet;

use crate::{Equipment, ExerciseTemplate, ExerciseType, Level, MuscleGroup};

/// Eligibility of catalog entries. Criteria left at `None` do not restrict.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub equipment: BTreeSet<Equipment>,
    pub exercise_type: Option<ExerciseType>,
    pub level: Option<Level>,
    pub muscle_group: Option<MuscleGroup>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn new(equipment: &BTreeSet<Equipment>) -> Self {
        Self {
            equipment: equipment.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn exercise_type(mut self, exercise_type: ExerciseType) -> Self {
        self.exercise_type = Some(exercise_type);
        self
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn muscle_group(mut self, muscle_group: MuscleGroup) -> Self {
        self.muscle_group = Some(muscle_group);
        self
    }

    #[must_use]
    pub fn matches(&self, exercise: &ExerciseTemplate) -> bool {
        (!exercise.needs_equipment() || self.equipment.contains(&exercise.equipment))
            && self
                .exercise_type
                .is_none_or(|exercise_type| exercise.exercise_type == exercise_type)
            && self.level.is_none_or(|level| level.admits(exercise.level))
            && self
                .muscle_group
                .is_none_or(|muscle_group| exercise.muscle_group == muscle_group)
    }

    /// Eligible exercises in catalog order.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl IntoIterator<Item = &'a ExerciseTemplate>,
    ) -> Vec<&'a ExerciseTemplate> {
        exercises.into_iter().filter(|e| self.matches(e)).collect()
    }
}

#[must_use]
pub fn filter<'a>(
    catalog: &'a [ExerciseTemplate],
    equipment: &BTreeSet<Equipment>,
    exercise_type: Option<ExerciseType>,
    level: Option<Level>,
    muscle_group: Option<MuscleGroup>,
) -> Vec<&'a ExerciseTemplate> {
    ExerciseFilter {
        equipment: equipment.clone(),
        exercise_type,
        level,
        muscle_group,
    }
    .exercises(catalog)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(
        name: &str,
        equipment: Equipment,
        exercise_type: ExerciseType,
        level: Level,
        muscle_group: MuscleGroup,
    ) -> ExerciseTemplate {
        ExerciseTemplate {
            name: name.to_string(),
            equipment,
            exercise_type,
            level,
            muscle_group,
            sets: Some(3),
            reps: None,
            duration: None,
        }
    }

    static CATALOG: std::sync::LazyLock<Vec<ExerciseTemplate>> = std::sync::LazyLock::new(|| {
        vec![
            exercise(
                "A",
                Equipment::None,
                ExerciseType::Main,
                Level::Beginner,
                MuscleGroup::Chest,
            ),
            exercise(
                "B",
                Equipment::Dumbbell,
                ExerciseType::Main,
                Level::Intermediate,
                MuscleGroup::Chest,
            ),
            exercise(
                "C",
                Equipment::Barbell,
                ExerciseType::Main,
                Level::Advanced,
                MuscleGroup::Back,
            ),
            exercise(
                "D",
                Equipment::None,
                ExerciseType::Warmup,
                Level::Advanced,
                MuscleGroup::Other,
            ),
            exercise(
                "E",
                Equipment::Dumbbell,
                ExerciseType::Cooldown,
                Level::Beginner,
                MuscleGroup::Other,
            ),
        ]
    });

    fn names(exercises: &[&ExerciseTemplate]) -> Vec<String> {
        exercises.iter().map(|e| e.name.clone()).collect()
    }

    #[rstest]
    #[case(&[], vec!["A", "D"])]
    #[case(&[Equipment::None], vec!["A", "D"])]
    #[case(&[Equipment::Dumbbell], vec!["A", "B", "D", "E"])]
    #[case(&[Equipment::Barbell, Equipment::Dumbbell], vec!["A", "B", "C", "D", "E"])]
    fn test_filter_equipment(#[case] equipment: &[Equipment], #[case] expected: Vec<&str>) {
        let equipment = equipment.iter().copied().collect::<BTreeSet<_>>();
        assert_eq!(
            names(&filter(&CATALOG, &equipment, None, None, None)),
            expected
        );
    }

    #[rstest]
    #[case(Level::Beginner, vec!["A", "E"])]
    #[case(Level::Intermediate, vec!["A", "B", "E"])]
    #[case(Level::Advanced, vec!["A", "B", "C", "D", "E"])]
    fn test_filter_level(#[case] level: Level, #[case] expected: Vec<&str>) {
        let equipment = BTreeSet::from([Equipment::Barbell, Equipment::Dumbbell]);
        assert_eq!(
            names(&filter(&CATALOG, &equipment, None, Some(level), None)),
            expected
        );
    }

    #[rstest]
    #[case(ExerciseType::Warmup, vec!["D"])]
    #[case(ExerciseType::Main, vec!["A", "B", "C"])]
    #[case(ExerciseType::Cooldown, vec!["E"])]
    fn test_filter_exercise_type(#[case] exercise_type: ExerciseType, #[case] expected: Vec<&str>) {
        let equipment = BTreeSet::from([Equipment::Barbell, Equipment::Dumbbell]);
        assert_eq!(
            names(&filter(&CATALOG, &equipment, Some(exercise_type), None, None)),
            expected
        );
    }

    #[test]
    fn test_filter_composition() {
        let equipment = BTreeSet::from([Equipment::Dumbbell]);
        assert_eq!(
            names(&filter(
                &CATALOG,
                &equipment,
                Some(ExerciseType::Main),
                Some(Level::Intermediate),
                Some(MuscleGroup::Chest),
            )),
            vec!["A", "B"]
        );
        assert_eq!(
            names(&filter(
                &CATALOG,
                &equipment,
                Some(ExerciseType::Main),
                Some(Level::Beginner),
                Some(MuscleGroup::Back),
            )),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_exercise_filter_builder() {
        let equipment = BTreeSet::from([Equipment::Barbell]);
        let filter = ExerciseFilter::new(&equipment)
            .exercise_type(ExerciseType::Main)
            .level(Level::Advanced)
            .muscle_group(MuscleGroup::Back);

        assert_eq!(
            filter,
            ExerciseFilter {
                equipment,
                exercise_type: Some(ExerciseType::Main),
                level: Some(Level::Advanced),
                muscle_group: Some(MuscleGroup::Back),
            }
        );
        assert_eq!(names(&filter.exercises(CATALOG.iter())), vec!["C"]);
        assert!(ExerciseFilter::default().exercises(CATALOG.iter()).len() == 2);
    }
}
