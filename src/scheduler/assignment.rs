use super::calendar::{week_index, ScheduleWindow};
use super::quota::QuotaTracker;
use super::{AssignOptions, ManagerRule};
use crate::holidays::HolidaySet;
use crate::model::{EmployeeDirectory, Location, ShiftAssignment, ShiftType};
use chrono::Datelike;
use rand::Rng;

/// Parcourt jours (chronologique) × employés (ordre de l'annuaire) et
/// décide lieu + shift pour chaque case.
pub(super) fn assign_window<R: Rng>(
    directory: &EmployeeDirectory,
    window: &ScheduleWindow,
    holidays: &HolidaySet,
    opts: AssignOptions,
    rng: &mut R,
) -> (Vec<ShiftAssignment>, QuotaTracker) {
    let mut quota = QuotaTracker::new(directory);
    let mut out = Vec::with_capacity(window.len() * directory.len());

    for day in window.iter() {
        let day_start = out.len();
        for employee in directory.employees() {
            if holidays.contains(day) {
                out.push(ShiftAssignment::holiday(employee.name.as_str(), day));
                continue;
            }

            let pool = ShiftType::pool_for(day.weekday());
            let shift = pool[rng.random_range(0..pool.len())];
            let week = week_index(day);
            let needs_office = quota.needs_office(&employee.name, week, opts.office_days_per_week);

            let manager_first = employee.is_manager
                && manager_branch_fires(directory, &out[day_start..], opts.manager_rule);

            let assignment = if manager_first || needs_office {
                quota.increment(&employee.name, week);
                ShiftAssignment::office(employee.name.as_str(), day, shift)
            } else {
                ShiftAssignment::home(employee.name.as_str(), day, shift)
            };
            out.push(assignment);
        }
        tracing::debug!(
            %day,
            office = out[day_start..].iter().filter(|a| a.location == Location::Office).count(),
            "day assigned"
        );
    }

    (out, quota)
}

/// Évalué pour chaque (jour, employé manager), sans mémorisation.
fn manager_branch_fires(
    directory: &EmployeeDirectory,
    today: &[ShiftAssignment],
    rule: ManagerRule,
) -> bool {
    match rule {
        ManagerRule::Always => directory.has_manager(),
        ManagerRule::DailyPresence => !today
            .iter()
            .any(|a| a.location == Location::Office && directory.is_manager(&a.employee)),
    }
}

