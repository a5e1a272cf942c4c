mod assignment;
mod calendar;
mod quota;
mod types;

pub use calendar::{
    is_weekday, next_monday, short_date, week_index, weekday_abbrev, ScheduleWindow,
    WINDOW_WEEKDAYS,
};
pub use quota::{QuotaTracker, TRACKED_WEEKS};
pub use types::{AssignOptions, ManagerRule};

use crate::error::RotaError;
use crate::grid::{Rota, RotaGrid};
use crate::holidays::HolidaySet;
use crate::model::{EmployeeDirectory, RotaId, ShiftAssignment};
use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Scheduler : annuaire + jours fériés + options, pour un run unique
#[derive(Debug, Clone)]
pub struct Scheduler {
    directory: EmployeeDirectory,
    holidays: HolidaySet,
    opts: AssignOptions,
}

impl Scheduler {
    pub fn new(directory: EmployeeDirectory, holidays: HolidaySet, opts: AssignOptions) -> Self {
        Self {
            directory,
            holidays,
            opts,
        }
    }

    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
    pub fn options(&self) -> AssignOptions {
        self.opts
    }

    pub fn window(&self, reference: NaiveDate) -> ScheduleWindow {
        ScheduleWindow::from_reference(reference)
    }

    /// Décisions brutes (avant la passe jours fériés de la grille) et compteurs finaux.
    pub fn assign<R: Rng>(
        &self,
        window: &ScheduleWindow,
        rng: &mut R,
    ) -> (Vec<ShiftAssignment>, QuotaTracker) {
        assignment::assign_window(&self.directory, window, &self.holidays, self.opts, rng)
    }

    /// Calcule tout le planning en mémoire ; rien n'est écrit ici.
    pub fn generate<R: Rng>(&self, reference: NaiveDate, rng: &mut R) -> Result<Rota, RotaError> {
        if self.directory.is_empty() {
            return Err(RotaError::MissingData("employee directory is empty".into()));
        }

        let window = self.window(reference);
        tracing::info!(
            start = %window.start(),
            end = %window.end(),
            employees = self.directory.len(),
            manager_rule = %self.opts.manager_rule,
            "generating rota"
        );

        let (assignments, quota) = self.assign(&window, rng);
        let grid = RotaGrid::assemble(&window, &self.directory, &assignments, &self.holidays)?;
        let holidays_in_window = self.holidays.within(&window);

        for (name, week, count) in quota.snapshot() {
            tracing::debug!(employee = %name, week, count, "office days");
        }

        Ok(Rota {
            id: RotaId::random(),
            generated_at: Utc::now(),
            reference_date: reference,
            manager_rule: self.opts.manager_rule,
            window,
            holidays_in_window,
            grid,
        })
    }
}

/// Raccourci : un run complet sans garder le `Scheduler`.
pub fn generate_rota<R: Rng>(
    directory: EmployeeDirectory,
    holidays: HolidaySet,
    reference: NaiveDate,
    opts: AssignOptions,
    rng: &mut R,
) -> Result<Rota, RotaError> {
    Scheduler::new(directory, holidays, opts).generate(reference, rng)
}
