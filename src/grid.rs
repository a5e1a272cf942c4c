use crate::error::RotaError;
use crate::holidays::HolidaySet;
use crate::model::{EmployeeDirectory, Location, RotaId, ShiftAssignment, ShiftType};
use crate::scheduler::{short_date, weekday_abbrev, ManagerRule, ScheduleWindow};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_HOLIDAY_MARKER: &str = "B/H";
pub const NAME_HEADER: &str = "Employee Name";

/// Contenu d'une case de la grille
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Assigned { shift: ShiftType, location: Location },
    Holiday,
}

impl Cell {
    pub fn from_assignment(a: &ShiftAssignment) -> Self {
        match (a.location, a.shift) {
            (Location::Holiday, _) | (_, None) => Cell::Holiday,
            (location, Some(shift)) => Cell::Assigned { shift, location },
        }
    }

    /// "Early (Office)", "Mid (Home)"... ou le marqueur de jour férié.
    pub fn render(&self, marker: &str) -> String {
        match self {
            Cell::Assigned { shift, location } => format!("{shift} ({location})"),
            Cell::Holiday => marker.to_string(),
        }
    }
}

/// Matrice employés × jours de la fenêtre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotaGrid {
    days: Vec<NaiveDate>,
    employees: Vec<String>,
    cells: Vec<Vec<Cell>>,
}

impl RotaGrid {
    /// Range les décisions en lignes (ordre de l'annuaire) et colonnes
    /// (ordre chronologique), puis applique la passe jours fériés.
    pub fn assemble(
        window: &ScheduleWindow,
        directory: &EmployeeDirectory,
        assignments: &[ShiftAssignment],
        holidays: &HolidaySet,
    ) -> Result<Self, RotaError> {
        let by_key: HashMap<(&str, NaiveDate), Cell> = assignments
            .iter()
            .map(|a| ((a.employee.as_str(), a.day), Cell::from_assignment(a)))
            .collect();

        let mut cells = Vec::with_capacity(directory.len());
        for employee in directory.employees() {
            let row = window
                .iter()
                .map(|day| {
                    by_key
                        .get(&(employee.name.as_str(), day))
                        .copied()
                        .ok_or_else(|| {
                            RotaError::Other(anyhow::anyhow!(
                                "no assignment for {} on {day}",
                                employee.name
                            ))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(row);
        }

        let mut grid = Self {
            days: window.days().to_vec(),
            employees: directory.employees().iter().map(|e| e.name.clone()).collect(),
            cells,
        };
        grid.apply_holiday_overlay(holidays);
        Ok(grid)
    }

    /// Force toute colonne fériée au marqueur pour chaque employé, quelle que
    /// soit la décision calculée. Retourne le nombre de colonnes touchées.
    pub fn apply_holiday_overlay(&mut self, holidays: &HolidaySet) -> usize {
        let columns = self.holiday_columns(holidays);
        for row in &mut self.cells {
            for &col in &columns {
                row[col] = Cell::Holiday;
            }
        }
        columns.len()
    }

    pub fn holiday_columns(&self, holidays: &HolidaySet) -> Vec<usize> {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, d)| holidays.contains(**d))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }
    pub fn employees(&self) -> &[String] {
        &self.employees
    }
    pub fn cell(&self, employee: usize, day: usize) -> Option<Cell> {
        self.cells.get(employee)?.get(day).copied()
    }
    pub fn row(&self, employee: usize) -> Option<&[Cell]> {
        self.cells.get(employee).map(Vec::as_slice)
    }

    /// Lignes prêtes pour un tableur : jours, dates, puis une ligne par employé.
    pub fn to_rows(&self, marker: &str) -> Vec<Vec<String>> {
        let mut header = vec![NAME_HEADER.to_string()];
        header.extend(self.days.iter().map(|d| weekday_abbrev(*d)));
        let mut dates = vec![String::new()];
        dates.extend(self.days.iter().map(|d| short_date(*d)));

        let mut rows = vec![header, dates];
        for (name, cells) in self.employees.iter().zip(&self.cells) {
            let mut row = vec![name.clone()];
            row.extend(cells.iter().map(|c| c.render(marker)));
            rows.push(row);
        }
        rows
    }
}

/// Planning complet issu d'un run
#[derive(Debug, Clone, Serialize)]
pub struct Rota {
    pub id: RotaId,
    pub generated_at: DateTime<Utc>,
    pub reference_date: NaiveDate,
    pub manager_rule: ManagerRule,
    pub window: ScheduleWindow,
    pub holidays_in_window: Vec<NaiveDate>,
    pub grid: RotaGrid,
}

impl Rota {
    pub fn rows(&self, marker: &str) -> Vec<Vec<String>> {
        self.grid.to_rows(marker)
    }
}
