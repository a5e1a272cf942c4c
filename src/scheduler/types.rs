use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Règle de priorité manager.
///
/// - `Always` : tout manager est placé au bureau chaque jour non férié, quel
///   que soit son quota (comportement historique, actif par défaut).
/// - `DailyPresence` : un manager n'est forcé au bureau que si aucun autre
///   manager n'y a encore été placé ce jour-là.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerRule {
    #[default]
    Always,
    DailyPresence,
}

impl ManagerRule {
    pub fn as_str(self) -> &'static str {
        match self {
            ManagerRule::Always => "always",
            ManagerRule::DailyPresence => "daily-presence",
        }
    }
}

impl fmt::Display for ManagerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManagerRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "always" => Ok(ManagerRule::Always),
            "daily-presence" => Ok(ManagerRule::DailyPresence),
            other => Err(format!("unknown manager rule: {other}")),
        }
    }
}

/// Options d'assignation
#[derive(Debug, Clone, Copy)]
pub struct AssignOptions {
    pub office_days_per_week: u32,
    pub manager_rule: ManagerRule,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            office_days_per_week: 2,
            manager_rule: ManagerRule::default(),
        }
    }
}
