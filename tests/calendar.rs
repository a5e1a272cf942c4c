#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use rotaplan::scheduler::{
    next_monday, short_date, week_index, weekday_abbrev, ScheduleWindow, WINDOW_WEEKDAYS,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn next_monday_skips_current_monday() {
    assert_eq!(next_monday(d(2026, 10, 19)), d(2026, 10, 26)); // lundi
    assert_eq!(next_monday(d(2026, 10, 21)), d(2026, 10, 26)); // mercredi
    assert_eq!(next_monday(d(2026, 10, 24)), d(2026, 10, 26)); // samedi
    assert_eq!(next_monday(d(2026, 10, 25)), d(2026, 10, 26)); // dimanche
}

#[test]
fn window_has_twenty_increasing_weekdays() {
    let mut reference = d(2026, 1, 1);
    for _ in 0..400 {
        let window = ScheduleWindow::from_reference(reference);
        assert_eq!(window.len(), WINDOW_WEEKDAYS);
        assert_eq!(window.start().weekday(), Weekday::Mon);
        assert!(window.start() > reference);
        assert!((window.end() - window.start()).num_days() < 28);
        assert!(window
            .iter()
            .all(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)));
        assert!(window.days().windows(2).all(|w| w[0] < w[1]));
        reference = reference.succ_opt().unwrap();
    }
}

#[test]
fn window_bounds_for_a_wednesday() {
    let window = ScheduleWindow::from_reference(d(2026, 10, 21));
    assert_eq!(window.start(), d(2026, 10, 26));
    assert_eq!(window.end(), d(2026, 11, 22));
    assert_eq!(window.days().last().copied(), Some(d(2026, 11, 20)));
    assert!(window.contains(d(2026, 11, 2)));
    assert!(!window.contains(d(2026, 10, 31)));
}

#[test]
fn week_index_is_relative_to_the_month() {
    // octobre 2026 : premier lundi le 5
    assert_eq!(week_index(d(2026, 10, 5)), 1);
    assert_eq!(week_index(d(2026, 10, 26)), 4);
    assert_eq!(week_index(d(2026, 10, 30)), 4);
    // novembre 2026 : premier lundi le 2
    assert_eq!(week_index(d(2026, 11, 2)), 1);
    assert_eq!(week_index(d(2026, 11, 9)), 2);
    assert_eq!(week_index(d(2026, 11, 20)), 3);
}

#[test]
fn week_index_keeps_out_of_range_values() {
    // 1er janvier 2026 avant le premier lundi (le 5)
    assert_eq!(week_index(d(2026, 1, 1)), 0);
    // juin 2026 commence un lundi : le "premier lundi" retenu est le 8
    assert_eq!(week_index(d(2026, 6, 1)), 0);
    assert_eq!(week_index(d(2026, 6, 8)), 1);
    // fin novembre 2026 : cinquième semaine
    assert_eq!(week_index(d(2026, 11, 30)), 5);
}

#[test]
fn display_helpers() {
    assert_eq!(weekday_abbrev(d(2026, 10, 26)), "MON");
    assert_eq!(weekday_abbrev(d(2026, 10, 29)), "THU");
    assert_eq!(short_date(d(2026, 11, 2)), "2-Nov");
    assert_eq!(short_date(d(2025, 12, 25)), "25-Dec");
}
