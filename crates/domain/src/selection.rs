use std::collections::BTreeSet;

use log::debug;
use rand::{Rng, seq::IndexedRandom};

use crate::{Equipment, ExerciseFilter, ExerciseTemplate, ExerciseType, Level, MuscleGroup};

/// Logical position of an exercise within a session.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Role {
    Push,
    Pull,
    Legs,
    Core,
    Warmup,
    Cooldown,
}

impl Role {
    #[must_use]
    pub fn exercise_type(self) -> ExerciseType {
        match self {
            Role::Push | Role::Pull | Role::Legs | Role::Core => ExerciseType::Main,
            Role::Warmup => ExerciseType::Warmup,
            Role::Cooldown => ExerciseType::Cooldown,
        }
    }

    /// Primary and secondary muscle group with the number of exercises drawn
    /// from each before topping up.
    fn balance(self) -> Option<[(MuscleGroup, usize); 2]> {
        match self {
            Role::Push => Some([(MuscleGroup::Chest, 2), (MuscleGroup::Shoulders, 1)]),
            Role::Pull => Some([(MuscleGroup::Back, 2), (MuscleGroup::Arms, 1)]),
            Role::Legs | Role::Core | Role::Warmup | Role::Cooldown => None,
        }
    }

    fn filter(self, equipment: &BTreeSet<Equipment>, level: Level) -> ExerciseFilter {
        let filter = ExerciseFilter::new(equipment).exercise_type(self.exercise_type());
        match self {
            Role::Push | Role::Pull => filter.level(level),
            Role::Legs => filter.level(level).muscle_group(MuscleGroup::Legs),
            Role::Core => filter.level(level).muscle_group(MuscleGroup::Core),
            Role::Warmup | Role::Cooldown => filter,
        }
    }
}

/// Picks up to `count` distinct exercises for `role`.
///
/// Fewer exercises are returned if the catalog does not offer enough
/// eligible ones.
pub fn select<'a, R: Rng + ?Sized>(
    catalog: &'a [ExerciseTemplate],
    equipment: &BTreeSet<Equipment>,
    level: Level,
    role: Role,
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseTemplate> {
    let filter = role.filter(equipment, level);
    let selected = match role.balance() {
        Some(balance) => select_balanced(catalog, &filter, balance, count, rng),
        None => filter
            .exercises(catalog)
            .choose_multiple(rng, count)
            .copied()
            .collect(),
    };

    if selected.len() < count {
        debug!(
            "only {} of {count} {role:?} exercises available for {level:?}",
            selected.len()
        );
    }

    selected
}

fn select_balanced<'a, R: Rng + ?Sized>(
    catalog: &'a [ExerciseTemplate],
    filter: &ExerciseFilter,
    balance: [(MuscleGroup, usize); 2],
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseTemplate> {
    let groups = balance.map(|(muscle_group, _)| {
        filter
            .clone()
            .muscle_group(muscle_group)
            .exercises(catalog)
    });
    let mut selected = Vec::with_capacity(count);

    for ((_, quota), candidates) in balance.iter().zip(&groups) {
        let amount = (*quota).min(count.saturating_sub(selected.len()));
        selected.extend(candidates.choose_multiple(rng, amount).copied());
    }

    let remaining = groups
        .concat()
        .into_iter()
        .filter(|e| !selected.contains(e))
        .collect::<Vec<_>>();
    let missing = count.saturating_sub(selected.len());
    selected.extend(remaining.choose_multiple(rng, missing).copied());

    selected
}
