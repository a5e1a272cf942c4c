#![forbid(unsafe_code)]
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rotaplan::{
    AssignOptions, Cell, Employee, EmployeeDirectory, HolidaySet, Location, RotaGrid, Scheduler,
    ShiftAssignment, ShiftType,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn directory() -> EmployeeDirectory {
    EmployeeDirectory::from_employees([Employee::new("Alice", true), Employee::new("Bob", false)])
}

#[test]
fn holiday_overlay_overwrites_computed_cells() {
    // décisions calculées sans connaître les jours fériés
    let scheduler = Scheduler::new(directory(), HolidaySet::new(), AssignOptions::default());
    let window = scheduler.window(d(2025, 12, 17));
    let (assignments, _) = scheduler.assign(&window, &mut StdRng::seed_from_u64(9));
    assert!(assignments.iter().all(|a| a.location != Location::Holiday));

    let holidays: HolidaySet = [d(2025, 12, 25), d(2025, 12, 26), d(2026, 1, 1)]
        .into_iter()
        .collect();
    let grid = RotaGrid::assemble(&window, scheduler.directory(), &assignments, &holidays).unwrap();

    let columns = grid.holiday_columns(&holidays);
    assert_eq!(columns, vec![3, 4, 8]);
    for col in 0..grid.days().len() {
        for row in 0..grid.employees().len() {
            let cell = grid.cell(row, col).unwrap();
            assert_eq!(cell == Cell::Holiday, columns.contains(&col));
        }
    }
}

#[test]
fn overlay_is_idempotent_and_counts_columns() {
    let scheduler = Scheduler::new(directory(), HolidaySet::new(), AssignOptions::default());
    let window = scheduler.window(d(2026, 10, 21));
    let (assignments, _) = scheduler.assign(&window, &mut StdRng::seed_from_u64(2));
    let mut grid =
        RotaGrid::assemble(&window, scheduler.directory(), &assignments, &HolidaySet::new())
            .unwrap();

    let holidays: HolidaySet = [d(2026, 11, 2), d(2026, 12, 25)].into_iter().collect();
    assert_eq!(grid.apply_holiday_overlay(&holidays), 1);
    let once = grid.clone();
    grid.apply_holiday_overlay(&holidays);
    assert_eq!(grid, once);
}

#[test]
fn missing_assignment_is_an_error() {
    let scheduler = Scheduler::new(directory(), HolidaySet::new(), AssignOptions::default());
    let window = scheduler.window(d(2026, 10, 21));
    let (mut assignments, _) = scheduler.assign(&window, &mut StdRng::seed_from_u64(2));
    assignments.pop();
    assert!(
        RotaGrid::assemble(&window, scheduler.directory(), &assignments, &HolidaySet::new())
            .is_err()
    );
}

#[test]
fn cells_render_like_the_sheet() {
    let day = d(2026, 10, 26);
    let office = Cell::from_assignment(&ShiftAssignment::office("Alice", day, ShiftType::Early));
    let home = Cell::from_assignment(&ShiftAssignment::home("Bob", day, ShiftType::Late));
    let holiday = Cell::from_assignment(&ShiftAssignment::holiday("Bob", day));
    assert_eq!(office.render("B/H"), "Early (Office)");
    assert_eq!(home.render("B/H"), "Late (Home)");
    assert_eq!(holiday.render("B/H"), "B/H");
}

#[test]
fn rows_layout() {
    let holidays: HolidaySet = [d(2026, 11, 2)].into_iter().collect();
    let scheduler = Scheduler::new(directory(), holidays, AssignOptions::default());
    let rota = scheduler
        .generate(d(2026, 10, 21), &mut StdRng::seed_from_u64(1))
        .unwrap();
    let rows = rota.rows("B/H");

    assert_eq!(rows.len(), 4);
    insta::assert_snapshot!(
        rows[0].join(","),
        @"Employee Name,MON,TUE,WED,THU,FRI,MON,TUE,WED,THU,FRI,MON,TUE,WED,THU,FRI,MON,TUE,WED,THU,FRI"
    );
    insta::assert_snapshot!(
        rows[1].join(","),
        @",26-Oct,27-Oct,28-Oct,29-Oct,30-Oct,2-Nov,3-Nov,4-Nov,5-Nov,6-Nov,9-Nov,10-Nov,11-Nov,12-Nov,13-Nov,16-Nov,17-Nov,18-Nov,19-Nov,20-Nov"
    );
    assert_eq!(rows[2][0], "Alice");
    assert_eq!(rows[3][0], "Bob");
    assert_eq!(rows[2][6], "B/H");
    assert_eq!(rows[3][6], "B/H");
    assert!(rows[2][1].ends_with("(Office)"));
}
