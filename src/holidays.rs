//! Jours fériés : source HTTP (flux gov.uk) ou fichier local de même format.
//!
//! Les dates sont manipulées en `NaiveDate` (année, mois, jour), sans heure ni
//! fuseau, pour que la comparaison avec les jours de la fenêtre soit exacte.

use crate::error::RotaError;
use crate::scheduler::ScheduleWindow;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://www.gov.uk/bank-holidays.json";
pub const DEFAULT_REGION: &str = "england-and-wales";

/// Ensemble de jours fériés d'une région.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.dates.contains(&day)
    }
    pub fn len(&self) -> usize {
        self.dates.len()
    }
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Jours fériés qui tombent sur un jour de la fenêtre.
    pub fn within(&self, window: &ScheduleWindow) -> Vec<NaiveDate> {
        self.dates
            .range(window.start()..=window.end())
            .copied()
            .filter(|d| window.contains(*d))
            .collect()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Division {
    events: Vec<FeedEvent>,
}

#[derive(Debug, Deserialize)]
struct FeedEvent {
    date: String,
}

/// Parse le JSON `{ "<région>": { "events": [ { "date": "YYYY-MM-DD", .. } ] } }`.
pub fn parse_feed(json: &str, region: &str) -> Result<HolidaySet, RotaError> {
    let mut divisions: HashMap<String, Division> =
        serde_json::from_str(json).map_err(|e| RotaError::FeedShape(e.to_string()))?;
    let division = divisions
        .remove(region)
        .ok_or_else(|| RotaError::FeedShape(format!("region {region} not found")))?;

    division
        .events
        .iter()
        .map(|ev| {
            NaiveDate::parse_from_str(ev.date.trim(), "%Y-%m-%d")
                .map_err(|e| RotaError::FeedShape(format!("invalid event date {:?}: {e}", ev.date)))
        })
        .collect()
}

pub trait HolidaySource {
    /// Charge les jours fériés. Un échec interrompt le run.
    fn fetch(&self) -> Result<HolidaySet, RotaError>;
}

/// Flux HTTP JSON. Une seule requête, sans retry.
#[derive(Debug, Clone)]
pub struct HttpHolidayFeed {
    url: String,
    timeout: Option<Duration>,
}

impl HttpHolidayFeed {
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpHolidayFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

impl HolidaySource for HttpHolidayFeed {
    fn fetch(&self) -> Result<HolidaySet, RotaError> {
        tracing::info!(url = %self.url, "fetching holiday feed");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let body = client.get(&self.url).send()?.error_for_status()?.text()?;
        let set = parse_feed(&body, DEFAULT_REGION)?;
        tracing::info!(count = set.len(), "holiday feed loaded");
        Ok(set)
    }
}

/// Même format que le flux, lu depuis un fichier.
#[derive(Debug, Clone)]
pub struct FileHolidayFeed {
    path: PathBuf,
}

impl FileHolidayFeed {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HolidaySource for FileHolidayFeed {
    fn fetch(&self) -> Result<HolidaySet, RotaError> {
        let body = fs::read_to_string(&self.path).map_err(|e| {
            RotaError::MissingData(format!("holiday file {}: {e}", self.path.display()))
        })?;
        parse_feed(&body, DEFAULT_REGION)
    }
}

/// Ensemble fixe, déjà en mémoire.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays(pub HolidaySet);

impl HolidaySource for StaticHolidays {
    fn fetch(&self) -> Result<HolidaySet, RotaError> {
        Ok(self.0.clone())
    }
}
