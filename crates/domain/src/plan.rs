use chrono::NaiveDate;
use log::info;
use rand::Rng;

use crate::{
    ExerciseTemplate, Goal, Level, Name, PrescribedExercise, Role, ScheduledSession, Split,
    UserProfile, has_circuit, prescribe, schedule, select,
};

pub const WARMUP_COUNT: usize = 3;
pub const COOLDOWN_COUNT: usize = 3;
pub const CIRCUIT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub client_name: Name,
    pub goal: Goal,
    pub experience: Level,
    pub sessions: Vec<WorkoutSession>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub session_number: u32,
    pub date: NaiveDate,
    pub sections: Sections,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sections {
    pub warmup: Vec<PrescribedExercise>,
    pub main: Vec<PrescribedExercise>,
    pub cooldown: Vec<PrescribedExercise>,
    pub circuit: Option<Vec<PrescribedExercise>>,
}

impl Split {
    /// Roles and exercise counts making up the main block.
    #[must_use]
    pub fn composition(self) -> &'static [(Role, usize)] {
        match self {
            Split::Push => &[(Role::Push, 3), (Role::Core, 1)],
            Split::Pull => &[(Role::Pull, 3), (Role::Core, 1)],
            Split::Legs => &[(Role::Legs, 3), (Role::Core, 1)],
            Split::Upper => &[(Role::Push, 2), (Role::Pull, 2), (Role::Core, 1)],
            Split::Lower => &[(Role::Legs, 4), (Role::Core, 1)],
            Split::Full => &[
                (Role::Push, 1),
                (Role::Pull, 1),
                (Role::Legs, 1),
                (Role::Core, 1),
            ],
        }
    }
}

/// Generates the complete plan for `profile`.
pub fn generate<R: Rng + ?Sized>(
    catalog: &[ExerciseTemplate],
    profile: &UserProfile,
    today: NaiveDate,
    rng: &mut R,
) -> WorkoutPlan {
    let sessions = schedule(profile.days_per_week, today)
        .iter()
        .map(|scheduled| assemble(catalog, profile, scheduled, rng))
        .collect::<Vec<_>>();

    info!(
        "generated {} sessions for {} starting {}",
        sessions.len(),
        profile.name,
        sessions
            .first()
            .map_or_else(|| String::from("-"), |s| s.date.to_string())
    );

    WorkoutPlan {
        client_name: profile.name.clone(),
        goal: profile.goal,
        experience: profile.experience,
        sessions,
    }
}

fn assemble<R: Rng + ?Sized>(
    catalog: &[ExerciseTemplate],
    profile: &UserProfile,
    scheduled: &ScheduledSession,
    rng: &mut R,
) -> WorkoutSession {
    let mut pick = |role: Role, count: usize| -> Vec<PrescribedExercise> {
        select(
            catalog,
            &profile.equipment,
            profile.experience,
            role,
            count,
            rng,
        )
        .into_iter()
        .map(|template| prescribe(template, scheduled.week))
        .collect()
    };

    let main = scheduled
        .split
        .composition()
        .iter()
        .flat_map(|(role, count)| pick(*role, *count))
        .collect();
    let warmup = pick(Role::Warmup, WARMUP_COUNT);
    let cooldown = pick(Role::Cooldown, COOLDOWN_COUNT);
    let circuit = has_circuit(profile.experience, scheduled.session_number)
        .then(|| pick(Role::Core, CIRCUIT_COUNT));

    WorkoutSession {
        session_number: scheduled.session_number,
        date: scheduled.date,
        sections: Sections {
            warmup,
            main,
            cooldown,
            circuit,
        },
    }
}
