#![warn(clippy::pedantic)]

use std::{collections::BTreeSet, path::PathBuf, str::FromStr, sync::Arc};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug, info};
use rand::{SeedableRng, rngs::StdRng};
use regimen_app::{
    Document, Settings, SettingsService,
    log::{self as app_log, Service as _},
};
use regimen_domain::{
    Equipment, ExerciseFilter, ExerciseType, Level, MuscleGroup, PlanService, Property,
};
use regimen_storage::{CatalogSource, LogFile, SettingsFile};

#[derive(Parser)]
#[command(name = "regimen", about = "Personalized four-week workout plan generator")]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = "regimen.json")]
    settings: PathBuf,

    /// Exercise catalog in JSON (the built-in catalog is used if none is configured)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible exercise selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout plan for a client profile
    Generate {
        /// Client profile in JSON
        #[arg(long)]
        profile: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List catalog exercises eligible for the given criteria
    Catalog {
        /// Available equipment (exercises needing none are always listed)
        #[arg(long, value_parser = parse::<Equipment>)]
        equipment: Vec<Equipment>,
        /// Experience level; easier exercises are included
        #[arg(long, value_parser = parse::<Level>)]
        level: Option<Level>,
        /// Exercise type
        #[arg(long = "type", value_parser = parse::<ExerciseType>)]
        exercise_type: Option<ExerciseType>,
        /// Muscle group
        #[arg(long, value_parser = parse::<MuscleGroup>)]
        muscle_group: Option<MuscleGroup>,
        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recorded log entries, newest first
    Log,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Document,
}

fn parse<T: Property + FromStr>(token: &str) -> Result<T, String> {
    T::from_token(token).map_err(|err| err.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = regimen_app::Service::new(SettingsFile::new(&cli.settings))
        .get_settings()
        .with_context(|| format!("failed to load settings from {}", cli.settings.display()))?;
    let settings = resolve(&cli, settings);

    init_logging(&settings, cli.verbose);
    debug!("using settings {settings:?}");

    match cli.command {
        Commands::Generate {
            profile,
            format,
            output,
        } => generate(&settings, &profile, format, output),
        Commands::Catalog {
            equipment,
            level,
            exercise_type,
            muscle_group,
            json,
        } => {
            let mut filter = ExerciseFilter::new(&equipment.into_iter().collect::<BTreeSet<_>>());
            filter.level = level;
            filter.exercise_type = exercise_type;
            filter.muscle_group = muscle_group;
            catalog(&settings, &filter, json)
        }
        Commands::Log => show_log(&settings),
    }
}

/// Command line options take precedence over the settings file.
fn resolve(cli: &Cli, settings: Settings) -> Settings {
    Settings {
        catalog: cli.catalog.clone().or(settings.catalog),
        seed: cli.seed.or(settings.seed),
        ..settings
    }
}

fn init_logging(settings: &Settings, verbose: u8) {
    let level = LevelFilter::from(settings.log_level.increase(verbose));
    let repository = settings
        .log_file
        .as_ref()
        .map(|path| Arc::new(LogFile::new(path)) as Arc<dyn app_log::Repository>);
    let _ = app_log::init(level, repository);
}

fn generate(
    settings: &Settings,
    profile: &std::path::Path,
    format: Format,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let profile = regimen_storage::read_profile(profile)?;
    let service = regimen_domain::Service::new(CatalogSource::from(settings.catalog.clone()));
    let mut rng = settings
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let plan = service.generate_plan(&profile, &mut rng)?;

    let text = match format {
        Format::Json => regimen_storage::plan_to_string(&plan)? + "\n",
        Format::Document => Document::render(&plan).to_string(),
    };

    match output {
        Some(path) => {
            regimen_storage::write_text(&path, &text)?;
            info!("wrote plan to {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn catalog(settings: &Settings, filter: &ExerciseFilter, as_json: bool) -> anyhow::Result<()> {
    let service = regimen_domain::Service::new(CatalogSource::from(settings.catalog.clone()));
    let exercises = service
        .get_exercises(filter)
        .context("failed to load exercise catalog")?;

    if as_json {
        let records = exercises
            .iter()
            .map(|e| regimen_storage::json::Exercise::from(*e))
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for exercise in exercises {
        println!(
            "{:<28} {:<16} {:<9} {:<13} {}",
            exercise.name,
            exercise.equipment.name(),
            exercise.exercise_type.name(),
            exercise.level.name(),
            exercise.muscle_group.name(),
        );
    }

    Ok(())
}

fn show_log(settings: &Settings) -> anyhow::Result<()> {
    let Some(path) = &settings.log_file else {
        bail!("no log file configured (set \"log_file\" in the settings file)");
    };

    let entries = regimen_app::Service::new(LogFile::new(path))
        .get_log_entries()
        .with_context(|| format!("failed to read log entries from {}", path.display()))?;

    for entry in entries {
        println!("{entry}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use regimen_app::LogLevel;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "regimen",
            "generate",
            "--profile",
            "alice.json",
            "--format",
            "document",
            "--seed",
            "42",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.settings, PathBuf::from("regimen.json"));
        assert!(matches!(
            cli.command,
            Commands::Generate {
                format: Format::Document,
                output: None,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_catalog() {
        let cli = Cli::try_parse_from([
            "regimen",
            "catalog",
            "--equipment",
            "dumbbells",
            "--equipment",
            "bodyweight",
            "--type",
            "main",
            "--muscle-group",
            "Legs",
        ])
        .unwrap();

        let Commands::Catalog {
            equipment,
            exercise_type,
            muscle_group,
            level,
            json,
        } = cli.command
        else {
            panic!("expected catalog command");
        };
        assert_eq!(equipment, vec![Equipment::Dumbbell, Equipment::None]);
        assert_eq!(exercise_type, Some(ExerciseType::Main));
        assert_eq!(muscle_group, Some(MuscleGroup::Legs));
        assert_eq!(level, None);
        assert!(!json);
    }

    #[rstest]
    #[case(&["regimen", "catalog", "--equipment", "rowing machine"])]
    #[case(&["regimen", "catalog", "--level", "expert"])]
    #[case(&["regimen", "generate"])]
    fn test_parse_invalid(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_resolve() {
        let settings = Settings {
            catalog: Some(PathBuf::from("settings.json")),
            seed: Some(1),
            log_level: LogLevel::Info,
            log_file: None,
        };

        let cli = Cli::try_parse_from(["regimen", "--seed", "9", "log"]).unwrap();
        assert_eq!(
            resolve(&cli, settings.clone()),
            Settings {
                seed: Some(9),
                ..settings.clone()
            }
        );

        let cli = Cli::try_parse_from(["regimen", "--catalog", "cli.json", "log"]).unwrap();
        assert_eq!(
            resolve(&cli, settings.clone()),
            Settings {
                catalog: Some(PathBuf::from("cli.json")),
                ..settings
            }
        );
    }
}
