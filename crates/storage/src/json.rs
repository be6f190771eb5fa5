use std::str::FromStr;

use chrono::NaiveDate;
use regimen_domain::{self as domain, CatalogError, Property};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Scheme(String),
}

impl From<&domain::Reps> for Reps {
    fn from(value: &domain::Reps) -> Self {
        match value {
            domain::Reps::Count(count) => Reps::Count(*count),
            domain::Reps::Scheme(scheme) => Reps::Scheme(scheme.clone()),
        }
    }
}

impl From<Reps> for domain::Reps {
    fn from(value: Reps) -> Self {
        match value {
            Reps::Count(count) => domain::Reps::Count(count),
            Reps::Scheme(scheme) => domain::Reps::Scheme(scheme),
        }
    }
}

/// A catalog record as found in an exercise file. Every field is optional on
/// the wire; missing required fields are reported by the conversion.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Exercise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<Reps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl From<&domain::ExerciseTemplate> for Exercise {
    fn from(value: &domain::ExerciseTemplate) -> Self {
        Self {
            name: Some(value.name.clone()),
            equipment: Some(value.equipment.as_ref().to_string()),
            exercise_type: Some(value.exercise_type.as_ref().to_string()),
            level: Some(value.level.as_ref().to_string()),
            muscle_group: Some(value.muscle_group.as_ref().to_string()),
            sets: value.sets,
            reps: value.reps.as_ref().map(Reps::from),
            duration: value.duration.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseTemplate {
    type Error = CatalogError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let name = match value.name.map(|name| name.trim().to_string()) {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(CatalogError::MissingField {
                    exercise: String::new(),
                    field: "name",
                });
            }
        };

        Ok(Self {
            equipment: property(&name, "equipment", value.equipment)?,
            exercise_type: property(&name, "type", value.exercise_type)?,
            level: property(&name, "level", value.level)?,
            muscle_group: property(&name, "muscle_group", value.muscle_group)?,
            sets: value.sets,
            reps: value.reps.map(domain::Reps::from),
            duration: value.duration,
            name,
        })
    }
}

fn property<T: Property + FromStr>(
    exercise: &str,
    field: &'static str,
    value: Option<String>,
) -> Result<T, CatalogError> {
    let value = value.ok_or_else(|| CatalogError::MissingField {
        exercise: exercise.to_string(),
        field,
    })?;
    T::from_token(&value).map_err(|_| CatalogError::InvalidValue {
        exercise: exercise.to_string(),
        field,
        value,
    })
}

/// Converts the records of a catalog file, rejecting the whole catalog on the
/// first invalid record.
pub fn catalog(exercises: Vec<Exercise>) -> Result<domain::Catalog, CatalogError> {
    exercises
        .into_iter()
        .enumerate()
        .map(|(index, exercise)| {
            domain::ExerciseTemplate::try_from(exercise).map_err(|err| match err {
                CatalogError::MissingField { field: "name", .. } => CatalogError::Unnamed(index + 1),
                err => err,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(domain::Catalog::from)
}

/// A client profile. Fields not listed here are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub goal: String,
    pub experience: String,
    pub equipment: Vec<String>,
    pub days_per_week: i64,
}

impl From<&domain::UserProfile> for Profile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            name: value.name.to_string(),
            goal: value.goal.as_ref().to_string(),
            experience: value.experience.as_ref().to_string(),
            equipment: value
                .equipment
                .iter()
                .map(|e| e.as_ref().to_string())
                .collect(),
            days_per_week: i64::from(u32::from(value.days_per_week)),
        }
    }
}

impl TryFrom<Profile> for domain::UserProfile {
    type Error = domain::ProfileError;

    fn try_from(value: Profile) -> Result<Self, Self::Error> {
        domain::UserProfile::new(
            &value.name,
            &value.goal,
            &value.experience,
            value.equipment.as_slice(),
            value.days_per_week,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub client_name: String,
    pub goal: String,
    pub experience: String,
    pub sessions: Vec<Session>,
}

impl From<&domain::WorkoutPlan> for Plan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            client_name: value.client_name.to_string(),
            goal: value.goal.as_ref().to_string(),
            experience: value.experience.as_ref().to_string(),
            sessions: value.sessions.iter().map(Session::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session: u32,
    pub date: NaiveDate,
    pub sections: Sections,
}

impl From<&domain::WorkoutSession> for Session {
    fn from(value: &domain::WorkoutSession) -> Self {
        Self {
            session: value.session_number,
            date: value.date,
            sections: Sections::from(&value.sections),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub warmup: Vec<PrescribedExercise>,
    pub main: Vec<PrescribedExercise>,
    pub cooldown: Vec<PrescribedExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit: Option<Vec<PrescribedExercise>>,
}

impl From<&domain::Sections> for Sections {
    fn from(value: &domain::Sections) -> Self {
        let exercises = |exercises: &[domain::PrescribedExercise]| -> Vec<PrescribedExercise> {
            exercises.iter().map(PrescribedExercise::from).collect()
        };
        Self {
            warmup: exercises(&value.warmup),
            main: exercises(&value.main),
            cooldown: exercises(&value.cooldown),
            circuit: value.circuit.as_deref().map(exercises),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrescribedExercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<Reps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
}

impl From<&domain::PrescribedExercise> for PrescribedExercise {
    fn from(value: &domain::PrescribedExercise) -> Self {
        Self {
            name: value.name.clone(),
            sets: value.sets,
            reps: value.reps.as_ref().map(Reps::from),
            duration: value.duration.clone(),
            rest: value.rest.clone(),
            tempo: value.tempo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn push_up() -> serde_json::Value {
        json!({
            "name": "Push Up",
            "equipment": "bodyweight",
            "type": "main",
            "level": "beginner",
            "muscle_group": "chest",
            "sets": 3,
            "reps": 10
        })
    }

    fn parse(value: serde_json::Value) -> Result<domain::Catalog, CatalogError> {
        catalog(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_catalog() {
        let catalog = parse(json!([
            push_up(),
            {
                "name": "Pull Up",
                "equipment": "pull up bar",
                "type": "main",
                "level": "Intermediate",
                "muscle_group": "back",
                "sets": 3,
                "reps": "AMRAP"
            },
            {
                "name": "Child's Pose",
                "equipment": "none",
                "type": "cooldown",
                "level": "beginner",
                "muscle_group": "other",
                "duration": "45s"
            }
        ]))
        .unwrap();

        assert_eq!(
            catalog.to_vec(),
            vec![
                domain::ExerciseTemplate {
                    name: String::from("Push Up"),
                    equipment: domain::Equipment::None,
                    exercise_type: domain::ExerciseType::Main,
                    level: domain::Level::Beginner,
                    muscle_group: domain::MuscleGroup::Chest,
                    sets: Some(3),
                    reps: Some(domain::Reps::Count(10)),
                    duration: None,
                },
                domain::ExerciseTemplate {
                    name: String::from("Pull Up"),
                    equipment: domain::Equipment::PullUpBar,
                    exercise_type: domain::ExerciseType::Main,
                    level: domain::Level::Intermediate,
                    muscle_group: domain::MuscleGroup::Back,
                    sets: Some(3),
                    reps: Some(domain::Reps::Scheme(String::from("AMRAP"))),
                    duration: None,
                },
                domain::ExerciseTemplate {
                    name: String::from("Child's Pose"),
                    equipment: domain::Equipment::None,
                    exercise_type: domain::ExerciseType::Cooldown,
                    level: domain::Level::Beginner,
                    muscle_group: domain::MuscleGroup::Other,
                    sets: None,
                    reps: None,
                    duration: Some(String::from("45s")),
                },
            ]
        );
    }

    #[rstest]
    #[case("equipment")]
    #[case("type")]
    #[case("level")]
    #[case("muscle_group")]
    fn test_catalog_missing_field(#[case] field: &'static str) {
        let mut exercise = push_up();
        exercise.as_object_mut().unwrap().remove(field);

        assert_eq!(
            parse(json!([exercise])),
            Err(CatalogError::MissingField {
                exercise: String::from("Push Up"),
                field,
            })
        );
    }

    #[rstest]
    #[case("equipment", "rowing_machine")]
    #[case("type", "stretch")]
    #[case("level", "expert")]
    #[case("muscle_group", "glutes")]
    fn test_catalog_invalid_value(#[case] field: &'static str, #[case] value: &str) {
        let mut exercise = push_up();
        exercise[field] = json!(value);

        assert_eq!(
            parse(json!([exercise])),
            Err(CatalogError::InvalidValue {
                exercise: String::from("Push Up"),
                field,
                value: value.to_string(),
            })
        );
    }

    #[rstest]
    #[case(json!({"equipment": "none"}))]
    #[case(json!({"name": "  ", "equipment": "none"}))]
    fn test_catalog_unnamed(#[case] exercise: serde_json::Value) {
        assert_eq!(
            parse(json!([push_up(), exercise])),
            Err(CatalogError::Unnamed(2))
        );
    }

    #[test]
    fn test_exercise_from_template() {
        let builtin = domain::Catalog::builtin();
        let pull_up = builtin.get("Pull Up").unwrap();

        assert_eq!(
            serde_json::to_value(Exercise::from(pull_up)).unwrap(),
            json!({
                "name": "Pull Up",
                "equipment": "pull_up_bar",
                "type": "main",
                "level": pull_up.level.as_ref(),
                "muscle_group": "back",
                "sets": 3,
                "reps": "AMRAP"
            })
        );
        assert_eq!(
            catalog(builtin.iter().map(Exercise::from).collect()).unwrap(),
            builtin
        );
    }

    #[test]
    fn test_profile() {
        let profile: Profile = serde_json::from_value(json!({
            "name": " Alice ",
            "age": 34,
            "gender": "female",
            "goal": "muscle_gain",
            "experience": "intermediate",
            "equipment": ["dumbbells", "bodyweight"],
            "days_per_week": 4
        }))
        .unwrap();

        let profile = domain::UserProfile::try_from(profile).unwrap();

        assert_eq!(profile.name.as_ref(), "Alice");
        assert_eq!(profile.goal, domain::Goal::MuscleGain);
        assert_eq!(profile.experience, domain::Level::Intermediate);
        assert_eq!(
            profile.equipment,
            BTreeSet::from([domain::Equipment::None, domain::Equipment::Dumbbell])
        );
        assert_eq!(u32::from(profile.days_per_week), 4);
        assert_eq!(
            Profile::from(&profile),
            Profile {
                name: String::from("Alice"),
                goal: String::from("muscle_gain"),
                experience: String::from("intermediate"),
                equipment: vec![String::from("none"), String::from("dumbbell")],
                days_per_week: 4,
            }
        );
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"age": 5, "gender": "unknown"}))]
    #[case(json!({"age": 120}))]
    fn test_profile_demographics_ignored(#[case] extra: serde_json::Value) {
        let mut profile = json!({
            "name": "Dora",
            "goal": "flexibility",
            "experience": "beginner",
            "equipment": ["none"],
            "days_per_week": 2
        });
        for (key, value) in extra.as_object().unwrap() {
            profile[key] = value.clone();
        }
        let profile: Profile = serde_json::from_value(profile).unwrap();

        let profile = domain::UserProfile::try_from(profile).unwrap();

        assert_eq!(profile.goal, domain::Goal::Flexibility);
        assert_eq!(u32::from(profile.days_per_week), 2);
    }

    #[rstest]
    #[case(json!({"days_per_week": 0}), "days per week")]
    #[case(json!({"goal": "bulk"}), "goal")]
    #[case(json!({"equipment": []}), "equipment")]
    #[case(json!({"name": ""}), "name")]
    fn test_profile_invalid(#[case] change: serde_json::Value, #[case] mentions: &str) {
        let mut profile = json!({
            "name": "Alice",
            "goal": "strength",
            "experience": "beginner",
            "equipment": ["none"],
            "days_per_week": 3
        });
        for (key, value) in change.as_object().unwrap() {
            profile[key] = value.clone();
        }
        let profile: Profile = serde_json::from_value(profile).unwrap();

        let err = domain::UserProfile::try_from(profile).unwrap_err();

        assert!(
            err.to_string().to_lowercase().contains(mentions),
            "{err}"
        );
    }

    #[test]
    fn test_plan() {
        let template = |name: &str| domain::PrescribedExercise {
            name: name.to_string(),
            sets: None,
            reps: None,
            duration: Some(String::from("30s")),
            rest: None,
            tempo: None,
        };
        let plan = domain::WorkoutPlan {
            client_name: domain::Name::new("Alice").unwrap(),
            goal: domain::Goal::WeightLoss,
            experience: domain::Level::Advanced,
            sessions: vec![domain::WorkoutSession {
                session_number: 1,
                date: NaiveDate::from_ymd_opt(2026, 10, 26).unwrap(),
                sections: domain::Sections {
                    warmup: vec![template("Jumping Jacks")],
                    main: vec![domain::PrescribedExercise {
                        name: String::from("Deadlift"),
                        sets: Some(4),
                        reps: Some(domain::Reps::Count(8)),
                        duration: None,
                        rest: Some(String::from("60s")),
                        tempo: Some(String::from("2-1-1")),
                    }],
                    cooldown: vec![template("Cobra Stretch")],
                    circuit: None,
                },
            }],
        };

        assert_eq!(
            serde_json::to_value(Plan::from(&plan)).unwrap(),
            json!({
                "client_name": "Alice",
                "goal": "weight_loss",
                "experience": "advanced",
                "sessions": [{
                    "session": 1,
                    "date": "2026-10-26",
                    "sections": {
                        "warmup": [{"name": "Jumping Jacks", "duration": "30s"}],
                        "main": [{
                            "name": "Deadlift",
                            "sets": 4,
                            "reps": 8,
                            "rest": "60s",
                            "tempo": "2-1-1"
                        }],
                        "cooldown": [{"name": "Cobra Stretch", "duration": "30s"}]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_plan_circuit() {
        let sections = domain::Sections {
            circuit: Some(vec![]),
            ..domain::Sections::default()
        };

        assert_eq!(
            serde_json::to_value(Sections::from(&sections)).unwrap(),
            json!({"warmup": [], "main": [], "cooldown": [], "circuit": []})
        );
    }
}
