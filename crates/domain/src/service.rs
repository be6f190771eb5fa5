use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use log::{debug, error};
use rand::Rng;

use crate::{
    Catalog, CatalogRepository, ExerciseFilter, ExerciseTemplate, GenerateError, ReadError,
    UserProfile, WorkoutPlan, generate,
};

pub trait PlanService {
    fn get_catalog(&self) -> Result<&Catalog, ReadError>;

    fn get_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<&ExerciseTemplate>, ReadError> {
        Ok(filter.exercises(self.get_catalog()?.iter()))
    }

    fn generate_plan_at<G: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
        rng: &mut G,
    ) -> Result<WorkoutPlan, GenerateError> {
        Ok(generate(self.get_catalog()?, profile, today, rng))
    }

    fn generate_plan<G: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut G,
    ) -> Result<WorkoutPlan, GenerateError> {
        self.generate_plan_at(profile, Local::now().date_naive(), rng)
    }
}

/// Loads the catalog on first use and keeps it for all later requests.
pub struct Service<R> {
    repository: R,
    catalog: OnceLock<Catalog>,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            catalog: OnceLock::new(),
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: CatalogRepository> PlanService for Service<R> {
    fn get_catalog(&self) -> Result<&Catalog, ReadError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }

        let catalog = log_on_error!(self.repository.read_catalog(), "read", "catalog")?;
        debug!("loaded catalog with {} exercises", catalog.len());

        Ok(self.catalog.get_or_init(|| catalog))
    }
}
