use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifiant fort d'un planning généré
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotaId(String);

impl RotaId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Employé (le nom sert d'identité)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default)]
    pub is_manager: bool,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N, is_manager: bool) -> Self {
        Self {
            name: name.into(),
            is_manager,
        }
    }
}

/// Annuaire ordonné et dédoublonné des employés.
///
/// L'ordre de première apparition est conservé ; un doublon est ignoré et
/// c'est le drapeau manager de la première occurrence qui fait foi.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    managers: HashMap<String, bool>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_employees<I: IntoIterator<Item = Employee>>(employees: I) -> Self {
        let mut dir = Self::new();
        for e in employees {
            dir.push(e);
        }
        dir
    }

    /// Ajoute un employé ; retourne `false` si le nom était déjà présent.
    pub fn push(&mut self, employee: Employee) -> bool {
        if self.managers.contains_key(&employee.name) {
            return false;
        }
        self.managers
            .insert(employee.name.clone(), employee.is_manager);
        self.employees.push(employee);
        true
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
    pub fn len(&self) -> usize {
        self.employees.len()
    }
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn is_manager(&self, name: &str) -> bool {
        self.managers.get(name).copied().unwrap_or(false)
    }

    pub fn has_manager(&self) -> bool {
        self.employees.iter().any(|e| e.is_manager)
    }

    pub fn managers(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.is_manager)
    }
}

/// Type de shift (créneau horaire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    Early,
    Mid,
    Late,
}

impl ShiftType {
    const WEEKDAY_POOL: [ShiftType; 3] = [ShiftType::Early, ShiftType::Mid, ShiftType::Late];
    const FRIDAY_POOL: [ShiftType; 2] = [ShiftType::Early, ShiftType::Mid];

    /// Shifts tirables pour un jour donné : pas de Late le vendredi.
    pub fn pool_for(weekday: Weekday) -> &'static [ShiftType] {
        if weekday == Weekday::Fri {
            &Self::FRIDAY_POOL
        } else {
            &Self::WEEKDAY_POOL
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Early => "Early",
            ShiftType::Mid => "Mid",
            ShiftType::Late => "Late",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Office,
    Home,
    Holiday,
}

impl Location {
    pub fn label(self) -> &'static str {
        match self {
            Location::Office => "Office",
            Location::Home => "Home",
            Location::Holiday => "Holiday",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Décision pour un couple (employé, jour)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub employee: String,
    pub day: NaiveDate,
    pub shift: Option<ShiftType>,
    pub location: Location,
}

impl ShiftAssignment {
    pub fn holiday<N: Into<String>>(employee: N, day: NaiveDate) -> Self {
        Self {
            employee: employee.into(),
            day,
            shift: None,
            location: Location::Holiday,
        }
    }

    pub fn office<N: Into<String>>(employee: N, day: NaiveDate, shift: ShiftType) -> Self {
        Self {
            employee: employee.into(),
            day,
            shift: Some(shift),
            location: Location::Office,
        }
    }

    pub fn home<N: Into<String>>(employee: N, day: NaiveDate, shift: ShiftType) -> Self {
        Self {
            employee: employee.into(),
            day,
            shift: Some(shift),
            location: Location::Home,
        }
    }
}
