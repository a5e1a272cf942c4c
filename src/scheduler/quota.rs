use crate::model::EmployeeDirectory;
use std::collections::BTreeMap;

/// Semaines suivies par le compteur de jours au bureau.
pub const TRACKED_WEEKS: std::ops::RangeInclusive<i64> = 1..=4;

/// Compteurs de jours au bureau par (employé, index de semaine).
///
/// Seules les semaines 1 à 4 existent ; les index hors plage renvoyés par
/// `week_index` n'ont pas de compteur. Jamais décrémenté, aucun plafond ici :
/// c'est à l'appelant de comparer au quota.
#[derive(Debug, Clone, Default)]
pub struct QuotaTracker {
    counts: BTreeMap<(String, i64), u32>,
}

impl QuotaTracker {
    pub fn new(directory: &EmployeeDirectory) -> Self {
        let counts = directory
            .employees()
            .iter()
            .flat_map(|e| TRACKED_WEEKS.map(move |w| ((e.name.clone(), w), 0)))
            .collect();
        Self { counts }
    }

    pub fn count(&self, employee: &str, week: i64) -> Option<u32> {
        self.counts.get(&(employee.to_owned(), week)).copied()
    }

    pub fn increment(&mut self, employee: &str, week: i64) {
        match self.counts.get_mut(&(employee.to_owned(), week)) {
            Some(c) => *c += 1,
            None => tracing::debug!(employee, week, "untracked quota bucket, increment ignored"),
        }
    }

    /// Vrai si le compteur existe et reste sous `quota`.
    pub fn needs_office(&self, employee: &str, week: i64, quota: u32) -> bool {
        self.count(employee, week).is_some_and(|c| c < quota)
    }

    /// Vue triée (employé, semaine, compteur).
    pub fn snapshot(&self) -> Vec<(String, i64, u32)> {
        self.counts
            .iter()
            .map(|((name, week), count)| (name.clone(), *week, *count))
            .collect()
    }
}
