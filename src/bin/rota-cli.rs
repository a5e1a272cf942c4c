#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rotaplan::{
    config::{load_config_from_file, RotaConfig},
    holidays::{FileHolidayFeed, HolidaySource},
    io,
    notification::{prepare_confirmation, TextConfirmation},
    scheduler::{short_date, week_index, weekday_abbrev, ManagerRule, ScheduleWindow, Scheduler},
    storage::{CsvSink, JsonSink, RotaSink},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Génère le planning bureau/télétravail des 4 prochaines semaines
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning
    Generate {
        /// CSV des réponses au formulaire de préférences
        #[arg(long)]
        responses: String,
        /// Grille CSV de sortie
        #[arg(long)]
        out: Option<String>,
        /// Export JSON complet
        #[arg(long)]
        json: Option<String>,
        /// Date de référence YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Jours fériés depuis un fichier au format du flux gov.uk
        #[arg(long)]
        holidays_file: Option<String>,
        /// always | daily-presence
        #[arg(long)]
        manager_rule: Option<String>,
    },

    /// Afficher la fenêtre de 20 jours et les index de semaine
    Window {
        #[arg(long)]
        date: Option<String>,
    },

    /// Lister les jours fériés tombant dans la fenêtre
    Holidays {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        holidays_file: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut config = match &cli.config {
        Some(path) => load_config_from_file(path)?,
        None => RotaConfig::default(),
    };

    match cli.cmd {
        Commands::Generate {
            responses,
            out,
            json,
            date,
            seed,
            holidays_file,
            manager_rule,
        } => {
            if let Some(rule) = manager_rule {
                config.manager_rule = rule.parse::<ManagerRule>().map_err(anyhow::Error::msg)?;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            let reference = reference_date(date)?;

            // tout est chargé et calculé avant de toucher aux sorties
            let directory = io::import_directory_csv(&responses, config.responses)?;
            let holidays = holiday_source(&config, holidays_file).fetch()?;
            let scheduler = Scheduler::new(directory, holidays, config.assign_options());
            let mut rng = match config.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let rota = scheduler.generate(reference, &mut rng)?;

            let marker = config.holiday_marker.as_str();
            let mut sinks: Vec<Box<dyn RotaSink>> = Vec::new();
            if let Some(path) = out {
                sinks.push(Box::new(CsvSink::open(path)));
            }
            if let Some(path) = json {
                sinks.push(Box::new(JsonSink::open(path)));
            }
            if sinks.is_empty() {
                for row in rota.rows(marker) {
                    println!("{}", row.join(" | "));
                }
            }
            for sink in &sinks {
                sink.publish(&rota, marker)?;
            }

            let confirmation = prepare_confirmation(&rota, &TextConfirmation);
            print!("{}", confirmation.content);
        }
        Commands::Window { date } => {
            let window = ScheduleWindow::from_reference(reference_date(date)?);
            for day in window.iter() {
                println!(
                    "{} {} {} week {}",
                    day,
                    weekday_abbrev(day),
                    short_date(day),
                    week_index(day)
                );
            }
        }
        Commands::Holidays {
            date,
            holidays_file,
        } => {
            let window = ScheduleWindow::from_reference(reference_date(date)?);
            let holidays = holiday_source(&config, holidays_file).fetch()?;
            let found = holidays.within(&window);
            if found.is_empty() {
                println!("no bank holiday between {} and {}", window.start(), window.end());
            }
            for day in found {
                println!("{} {} {}", day, weekday_abbrev(day), short_date(day));
            }
        }
    }

    Ok(())
}

fn reference_date(raw: Option<String>) -> Result<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid date: {s}")),
        None => Ok(Local::now().date_naive()),
    }
}

fn holiday_source(config: &RotaConfig, file: Option<String>) -> Box<dyn HolidaySource> {
    match file {
        Some(path) => Box::new(FileHolidayFeed::open(path)),
        None => config.holiday_source(),
    }
}
