use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Nombre de jours ouvrés d'une fenêtre de planification.
pub const WINDOW_WEEKDAYS: usize = 20;

const WINDOW_SPAN_DAYS: i64 = 4 * 7 - 1;

/// Lundi suivant `date`. Un lundi avance d'une semaine complète.
pub fn next_monday(date: NaiveDate) -> NaiveDate {
    let dow = i64::from(date.weekday().num_days_from_sunday());
    let delta = if dow == 0 { 1 } else { 8 - dow };
    date + Duration::days(delta)
}

/// Index de semaine (1..=4 en pratique) relatif au premier lundi du mois
/// calendaire du jour, et non au début de la fenêtre.
///
/// Les jours précédant ce premier lundi donnent 0 (voire moins) et une fin de
/// mois peut donner 5 : ces valeurs sont conservées telles quelles, le
/// compteur de quota les ignore.
pub fn week_index(day: NaiveDate) -> i64 {
    let first_of_month = day - Duration::days(i64::from(day.day0()));
    let first_monday = next_monday(first_of_month);
    let since = (day - first_monday).num_days();
    // ceil((since + 1) / 7)
    (since + 1 + 6).div_euclid(7)
}

/// Abréviation du jour en majuscules : "MON", "TUE"...
pub fn weekday_abbrev(day: NaiveDate) -> String {
    day.format("%a").to_string().to_uppercase()
}

/// Date courte "3-Nov" (jour sans zéro, mois anglais abrégé).
pub fn short_date(day: NaiveDate) -> String {
    day.format("%-d-%b").to_string()
}

pub fn is_weekday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Fenêtre de 4 semaines démarrant au lundi suivant la date de référence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleWindow {
    start: NaiveDate,
    end: NaiveDate,
    days: Vec<NaiveDate>,
}

impl ScheduleWindow {
    pub fn from_reference(reference: NaiveDate) -> Self {
        let start = next_monday(reference);
        let end = start + Duration::days(WINDOW_SPAN_DAYS);
        let days = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| is_weekday(*d))
            .collect();
        Self { start, end, days }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }
    pub fn end(&self) -> NaiveDate {
        self.end
    }
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }
    pub fn len(&self) -> usize {
        self.days.len()
    }
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.binary_search(&day).is_ok()
    }
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}
