use crate::error::RotaError;
use crate::grid::DEFAULT_HOLIDAY_MARKER;
use crate::holidays::{FileHolidayFeed, HolidaySource, HttpHolidayFeed, DEFAULT_FEED_URL};
use crate::io::ResponseColumns;
use crate::scheduler::{AssignOptions, ManagerRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration d'un run, chargée depuis un fichier JSON (tous les champs sont optionnels).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotaConfig {
    #[serde(default)]
    pub holidays: HolidayConfig,
    #[serde(default)]
    pub responses: ResponseColumns,
    #[serde(default = "default_office_days")]
    pub office_days_per_week: u32,
    #[serde(default)]
    pub manager_rule: ManagerRule,
    #[serde(default = "default_marker")]
    pub holiday_marker: String,
    /// Graine du tirage des shifts ; absente = aléatoire.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Fichier local au format du flux, prioritaire sur `url`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_office_days() -> u32 {
    2
}
fn default_marker() -> String {
    DEFAULT_HOLIDAY_MARKER.to_string()
}
fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            file: None,
            timeout_secs: None,
        }
    }
}

impl Default for RotaConfig {
    fn default() -> Self {
        Self {
            holidays: HolidayConfig::default(),
            responses: ResponseColumns::default(),
            office_days_per_week: default_office_days(),
            manager_rule: ManagerRule::default(),
            holiday_marker: default_marker(),
            seed: None,
        }
    }
}

impl RotaConfig {
    pub fn validate(&self) -> Result<(), RotaError> {
        if self.holiday_marker.trim().is_empty() {
            return Err(RotaError::Config("holiday_marker cannot be empty".into()));
        }
        if self.office_days_per_week > 5 {
            return Err(RotaError::Config(
                "office_days_per_week must be between 0 and 5".into(),
            ));
        }
        if self.responses.name == self.responses.manager {
            return Err(RotaError::Config(
                "name and manager columns must differ".into(),
            ));
        }
        if self.holidays.file.is_none() && self.holidays.url.trim().is_empty() {
            return Err(RotaError::Config("holiday feed url cannot be empty".into()));
        }
        if self.holidays.timeout_secs == Some(0) {
            return Err(RotaError::Config("timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    pub fn assign_options(&self) -> AssignOptions {
        AssignOptions {
            office_days_per_week: self.office_days_per_week,
            manager_rule: self.manager_rule,
        }
    }

    /// Source de jours fériés : fichier local si configuré, sinon flux HTTP.
    pub fn holiday_source(&self) -> Box<dyn HolidaySource> {
        match &self.holidays.file {
            Some(path) => Box::new(FileHolidayFeed::open(path)),
            None => Box::new(
                HttpHolidayFeed::new(self.holidays.url.clone())
                    .with_timeout(self.holidays.timeout_secs.map(Duration::from_secs)),
            ),
        }
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RotaConfig, RotaError> {
    let path = path.as_ref();
    let data = fs::read(path)
        .map_err(|e| RotaError::MissingData(format!("config {}: {e}", path.display())))?;
    let config: RotaConfig = serde_json::from_slice(&data)?;
    config.validate()?;
    Ok(config)
}
