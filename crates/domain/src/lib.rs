#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod filter;
mod overload;
mod plan;
mod profile;
mod schedule;
mod selection;
mod service;

pub use catalog::{Catalog, CatalogRepository};
pub use error::{CatalogError, GenerateError, ReadError, StorageError};
pub use exercise::{
    Equipment, ExerciseTemplate, ExerciseType, Level, MuscleGroup, ParseError, Property, Reps,
};
pub use filter::{ExerciseFilter, filter};
pub use overload::{PrescribedExercise, REST, TEMPO, prescribe};
pub use plan::{
    CIRCUIT_COUNT, COOLDOWN_COUNT, Sections, WARMUP_COUNT, WorkoutPlan, WorkoutSession, generate,
};
pub use profile::{
    DaysPerWeek, DaysPerWeekError, Goal, Name, NameError, ProfileError, UserProfile,
};
pub use schedule::{
    ScheduledSession, Split, WEEKS, has_circuit, schedule, session_date, start_date,
};
pub use selection::{Role, select};
pub use service::{PlanService, Service};
