#![forbid(unsafe_code)]
//! Rotaplan — génération d'un planning bureau/télétravail sur 4 semaines.
//!
//! - Fenêtre de 20 jours ouvrés à partir du lundi suivant.
//! - Quota de jours au bureau par employé et par semaine du mois.
//! - Priorité manager, jours fériés (flux gov.uk) marqués sur toute la colonne.
//! - Tout est calculé en mémoire avant écriture (CSV/JSON, écriture atomique).

pub mod config;
pub mod error;
pub mod grid;
pub mod holidays;
pub mod io;
pub mod model;
pub mod notification;
pub mod scheduler;
pub mod storage;

pub use config::{load_config_from_file, HolidayConfig, RotaConfig};
pub use error::RotaError;
pub use grid::{Cell, Rota, RotaGrid, DEFAULT_HOLIDAY_MARKER};
pub use holidays::{
    parse_feed, FileHolidayFeed, HolidaySet, HolidaySource, HttpHolidayFeed, StaticHolidays,
};
pub use model::{Employee, EmployeeDirectory, Location, RotaId, ShiftAssignment, ShiftType};
pub use notification::{prepare_confirmation, Confirmation, ConfirmationRenderer, TextConfirmation};
pub use scheduler::{
    generate_rota, week_index, AssignOptions, ManagerRule, QuotaTracker, ScheduleWindow,
    Scheduler,
};
pub use storage::{CsvSink, JsonSink, RotaSink};
