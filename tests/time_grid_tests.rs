mod common;
use common::t;
use rturnos::core::TimeGrid;
use rturnos::errors::AppError;

#[test]
fn test_rejects_invalid_configuration() {
    assert!(matches!(TimeGrid::new(19, 9, 120.0), Err(AppError::Config(_))));
    assert!(matches!(TimeGrid::new(9, 9, 120.0), Err(AppError::Config(_))));
    assert!(matches!(TimeGrid::new(9, 25, 120.0), Err(AppError::Config(_))));
    assert!(matches!(TimeGrid::new(9, 19, 0.0), Err(AppError::Config(_))));
    assert!(matches!(TimeGrid::new(9, 19, -5.0), Err(AppError::Config(_))));
    assert!(matches!(
        TimeGrid::new(9, 19, f64::NAN),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_total_height_matches_window() {
    for (start, end, pph) in [(9, 19, 120.0), (0, 24, 60.0), (8, 9, 33.5), (10, 20, 1.0)] {
        let grid = TimeGrid::new(start, end, pph).unwrap();
        assert_eq!(grid.total_height(), (end - start) as f64 * pph);
    }
}

#[test]
fn test_offset_of_quarter_past_noon() {
    let grid = TimeGrid::new(9, 19, 120.0).unwrap();

    assert_eq!(grid.offset_of(t("09:00")).unwrap(), 0.0);
    assert_eq!(grid.offset_of(t("12:15")).unwrap(), 390.0);
    assert_eq!(grid.offset_of(t("18:59")).unwrap(), 1198.0);
}

#[test]
fn test_offset_of_is_strictly_increasing() {
    let grid = TimeGrid::new(9, 19, 45.0).unwrap();
    let mut prev = -1.0;

    for minute in 9 * 60..19 * 60 {
        let time = chrono::NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap();
        let off = grid.offset_of(time).unwrap();
        assert!(off > prev, "offset not increasing at minute {minute}");
        prev = off;
    }
}

#[test]
fn test_offset_of_outside_window() {
    let grid = TimeGrid::new(9, 19, 120.0).unwrap();

    assert!(matches!(
        grid.offset_of(t("08:59")),
        Err(AppError::OutOfRange { .. })
    ));
    // the end of the window is exclusive
    assert!(matches!(
        grid.offset_of(t("19:00")),
        Err(AppError::OutOfRange { .. })
    ));
}

#[test]
fn test_height_of() {
    let grid = TimeGrid::new(9, 19, 120.0).unwrap();

    assert_eq!(grid.height_of(30).unwrap(), 60.0);
    assert_eq!(grid.height_of(90).unwrap(), 180.0);
    assert!(matches!(grid.height_of(0), Err(AppError::InvalidDuration(0))));
    assert!(matches!(
        grid.height_of(-15),
        Err(AppError::InvalidDuration(-15))
    ));
}

#[test]
fn test_height_of_is_linear() {
    let grid = TimeGrid::new(8, 20, 100.0).unwrap();

    for (d1, d2) in [(15, 30), (1, 1), (45, 90), (7, 113)] {
        let sum = grid.height_of(d1).unwrap() + grid.height_of(d2).unwrap();
        let whole = grid.height_of(d1 + d2).unwrap();
        assert!((sum - whole).abs() < 1e-9, "{d1}+{d2}: {sum} != {whole}");
    }
}

#[test]
fn test_hour_marks_cover_both_edges() {
    let grid = TimeGrid::new(9, 12, 120.0).unwrap();
    let marks = grid.hour_marks();

    let hours: Vec<u32> = marks.iter().map(|m| m.hour).collect();
    assert_eq!(hours, vec![9, 10, 11, 12]);
    assert_eq!(marks.last().unwrap().offset, grid.total_height());
}

#[test]
fn test_fits_checks_the_end_of_the_booking() {
    let grid = TimeGrid::default();

    assert!(grid.fits(t("18:30"), 30));
    assert!(!grid.fits(t("18:30"), 45));
    assert!(!grid.fits(t("08:45"), 30));
}
