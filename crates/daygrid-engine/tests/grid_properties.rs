use chrono::{Datelike, NaiveDate};
use daygrid_engine::{AdjacentDays, build_grid, compute_grid};
use daygrid_types::{GRID_CELLS, GridState, MonthYear};

fn all_months() -> impl Iterator<Item = (u32, i32)> {
    (1890..=2110).flat_map(|year| (1..=12).map(move |month| (month, year)))
}

fn true_days_in_month(month: u32, year: i32) -> u32 {
    let (next_month, next_year) = if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (next - first).num_days() as u32
}

fn layout(grid: &GridState) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.day_of_month {
                    Some(day) => format!("{:02}", day),
                    None => "--".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_every_grid_has_42_cells() {
    for (month, year) in all_months() {
        let grid = compute_grid(month, year).unwrap();
        assert_eq!(grid.cells.len(), GRID_CELLS, "{}-{}", year, month);
        assert_eq!((grid.display_month, grid.display_year), (month, year));
    }
}

#[test]
fn test_populated_cells_match_month_length() {
    for (month, year) in all_months() {
        let grid = compute_grid(month, year).unwrap();
        let populated = grid.cells.iter().filter(|c| !c.is_empty()).count() as u32;
        assert_eq!(populated, true_days_in_month(month, year), "{}-{}", year, month);
    }

    let leap = compute_grid(2, 2024).unwrap();
    assert_eq!(leap.cells.iter().filter(|c| !c.is_empty()).count(), 29);
    let common = compute_grid(2, 2023).unwrap();
    assert_eq!(common.cells.iter().filter(|c| !c.is_empty()).count(), 28);
}

#[test]
fn test_first_cell_column_matches_weekday() {
    for (month, year) in all_months() {
        let grid = compute_grid(month, year).unwrap();
        let first_index = grid.cells.iter().position(|c| !c.is_empty()).unwrap();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

        assert_eq!(
            first_index as u32,
            first.weekday().num_days_from_monday(),
            "{}-{}",
            year,
            month
        );
        assert_eq!(grid.cells[first_index].day_of_month, Some(1));
    }
}

#[test]
fn test_populated_days_are_consecutive() {
    for (month, year) in all_months() {
        let grid = compute_grid(month, year).unwrap();
        let days: Vec<u32> = grid.cells.iter().filter_map(|c| c.day_of_month).collect();
        let expected: Vec<u32> = (1..=true_days_in_month(month, year)).collect();
        assert_eq!(days, expected);
    }
}

#[test]
fn test_adjacent_mode_is_contiguous() {
    for (month, year) in all_months() {
        let grid = build_grid(MonthYear::new(month, year).unwrap(), AdjacentDays::Show);
        let dates: Vec<NaiveDate> = grid.cells.iter().map(|c| c.date.unwrap()).collect();

        assert_eq!(dates[0].weekday().num_days_from_monday(), 0);
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
        for cell in &grid.cells {
            let date = cell.date.unwrap();
            let expected_offset = match (date.year(), date.month()) {
                (y, m) if (m, y) == (month, year) => 0,
                _ if date < NaiveDate::from_ymd_opt(year, month, 1).unwrap() => -1,
                _ => 1,
            };
            assert_eq!(cell.month_offset, expected_offset);
            assert_eq!(cell.belongs_to_current_month, expected_offset == 0);
        }
    }
}

#[test]
fn test_january_2024_layout() {
    let grid = compute_grid(1, 2024).unwrap();
    assert_eq!(grid.cells[0].day_of_month, Some(1));
    assert_eq!(grid.cells[30].day_of_month, Some(31));
    assert!(grid.cells[31..].iter().all(|c| c.is_empty()));
}

#[test]
fn test_february_2024_layout_snapshot() {
    let grid = compute_grid(2, 2024).unwrap();
    insta::assert_snapshot!(layout(&grid), @r"
    -- -- -- 01 02 03 04
    05 06 07 08 09 10 11
    12 13 14 15 16 17 18
    19 20 21 22 23 24 25
    26 27 28 29 -- -- --
    -- -- -- -- -- -- --
    ");
}

#[test]
fn test_grid_json_shape() {
    let grid = compute_grid(2, 2024).unwrap();
    let json = serde_json::to_value(&grid).unwrap();

    assert_eq!(json["display_month"], 2);
    assert_eq!(json["display_year"], 2024);
    assert_eq!(json["cells"].as_array().unwrap().len(), 42);
    assert_eq!(json["cells"][0], serde_json::json!({
        "belongs_to_current_month": false,
        "month_offset": 0
    }));
    assert_eq!(json["cells"][3], serde_json::json!({
        "day_of_month": 1,
        "date": "2024-02-01",
        "belongs_to_current_month": true,
        "month_offset": 0
    }));
}
