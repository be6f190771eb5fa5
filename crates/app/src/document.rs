use std::fmt;

use regimen_domain::{CIRCUIT_COUNT, PrescribedExercise, Property, WorkoutPlan, WorkoutSession};

/// Separates the pages of a rendered document.
pub const PAGE_BREAK: char = '\u{c}';

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
}

impl Page {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }
}

/// A printable rendition of a workout plan: a title page followed by one
/// page per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    #[must_use]
    pub fn render(plan: &WorkoutPlan) -> Self {
        let mut title = Page::default();
        title.push(format!("Workout Plan for {}", plan.client_name));
        title.blank();
        title.push(format!("Goal: {}", plan.goal.name()));
        title.push(format!("Experience: {}", plan.experience.name()));

        let mut pages = vec![title];
        pages.extend(plan.sessions.iter().map(session_page));

        Self { pages }
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.pages.len();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, "{PAGE_BREAK}")?;
            }
            for line in &page.lines {
                writeln!(f, "{line}")?;
            }
            writeln!(f)?;
            writeln!(f, "Page {} of {count}", i + 1)?;
        }
        Ok(())
    }
}

fn session_page(session: &WorkoutSession) -> Page {
    let sections = &session.sections;
    let mut page = Page::default();
    page.push(format!(
        "Session {} - {}",
        session.session_number,
        session.date.format("%Y-%m-%d")
    ));

    section(&mut page, "Warm-Up", &sections.warmup, warmup_line);
    section(&mut page, "Main Exercises", &sections.main, main_line);
    if let Some(circuit) = sections.circuit.as_ref().filter(|c| !c.is_empty()) {
        section(
            &mut page,
            &format!("Circuit (Complete {CIRCUIT_COUNT} rounds)"),
            circuit,
            circuit_line,
        );
    }
    section(&mut page, "Cool-Down", &sections.cooldown, cooldown_line);

    page
}

fn section(
    page: &mut Page,
    header: &str,
    exercises: &[PrescribedExercise],
    line: fn(&PrescribedExercise) -> String,
) {
    page.blank();
    page.push(header);
    for exercise in exercises {
        page.push(format!("  {}", line(exercise)));
    }
}

fn sets_and_reps(exercise: &PrescribedExercise) -> Option<String> {
    match (exercise.sets, &exercise.reps) {
        (Some(sets), Some(reps)) => Some(format!("{sets} sets x {reps} reps")),
        _ => None,
    }
}

fn warmup_line(exercise: &PrescribedExercise) -> String {
    match (sets_and_reps(exercise), &exercise.duration) {
        (Some(volume), _) => format!("{} - {volume}", exercise.name),
        (None, Some(duration)) => format!("{} - {duration}", exercise.name),
        (None, None) => exercise.name.clone(),
    }
}

fn main_line(exercise: &PrescribedExercise) -> String {
    let Some(volume) = sets_and_reps(exercise) else {
        return exercise.name.clone();
    };
    let mut line = format!("{} - {volume}", exercise.name);
    if let Some(rest) = &exercise.rest {
        line.push_str(&format!(", Rest: {rest}"));
    }
    if let Some(tempo) = &exercise.tempo {
        line.push_str(&format!(", Tempo: {tempo}"));
    }
    line
}

fn circuit_line(exercise: &PrescribedExercise) -> String {
    match (exercise.sets, &exercise.reps, &exercise.duration) {
        (Some(_), Some(reps), _) => format!("{} - {reps} reps", exercise.name),
        (_, _, Some(duration)) => format!("{} - {duration}", exercise.name),
        _ => exercise.name.clone(),
    }
}

fn cooldown_line(exercise: &PrescribedExercise) -> String {
    match &exercise.duration {
        Some(duration) => format!("{} - {duration}", exercise.name),
        None => exercise.name.clone(),
    }
}
