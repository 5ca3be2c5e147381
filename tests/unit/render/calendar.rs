use super::*;

fn export_canvas() -> Canvas {
    Canvas::new(EXPORT_WIDTH, EXPORT_HEIGHT).unwrap()
}

#[test]
fn flat_export_has_no_glow_and_one_dot_per_day() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let scene = compose_calendar_export(date, Theme::Purple, export_canvas());
    let dots: Vec<_> = scene.dots().collect();
    assert_eq!(dots.len(), 366);
    assert!(dots.iter().all(|d| d.3.is_none()));
    assert_eq!(dots[365].2, Theme::Purple.palette().dot_today);
}

#[test]
fn flat_export_texts() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let scene = compose_calendar_export(date, Theme::Midnight, export_canvas());
    let texts: Vec<_> = scene.texts().map(|t| t.text.clone()).collect();
    assert_eq!(
        texts,
        [
            "Life Calendar".to_owned(),
            "2024 Progress: 1.6%".to_owned(),
            "Day 6 of 366 \u{2022} Saturday, January 6, 2024".to_owned(),
        ]
    );
    assert_eq!(scene.texts().next().unwrap().origin.y, 50.0);
}

#[test]
fn flat_export_starts_with_solid_background() {
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
    let scene = compose_calendar_export(date, Theme::Matrix, export_canvas());
    assert_eq!(
        scene.commands[0],
        DrawCommand::SolidFill {
            rect: export_canvas().rect(),
            color: Theme::Matrix.palette().bg_primary,
        }
    );

    // 21 columns of 12 px dots with 4 px gaps, centred
    let first = scene.dots().next().unwrap().0;
    assert!((first.x - ((800.0 - (21.0 * 16.0 - 4.0)) / 2.0 + 6.0)).abs() < 1e-9);
    assert!((first.y - (120.0 + 6.0)).abs() < 1e-9);
}
