use chrono::NaiveDateTime;
use rovertime::config::Config;
use rovertime::core::logic::{Core, YearLookup};
use rovertime::errors::AppError;

mod common;
use common::Sandbox;

fn at(ts: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn config_for(sb: &Sandbox, cap: f64) -> Config {
    Config {
        stempel_file: sb.backup.to_string_lossy().to_string(),
        monthly_compensated: cap,
        ..Config::default()
    }
}

#[test]
fn test_overview_from_backup_file() {
    let sb = Sandbox::sample();
    let ov = Core::overview_for(&config_for(&sb, 2.0), at("2021-03-15 10:00:00")).unwrap();

    assert_eq!(ov.start_year, Some(2020));
    assert_eq!(ov.end_year, Some(2021));
    assert_eq!(ov.total_overtime, 3.0);
    assert_eq!(ov.total_lost, 4.0);

    // March is the current month and gets a zero bucket; April is future
    let y2021 = ov.year(2021).unwrap();
    assert_eq!(y2021.months.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(y2021.total_overtime, 0.0);
    assert_eq!(y2021.total_lost, 2.0);
}

#[test]
fn test_now_cuts_off_later_records() {
    let sb = Sandbox::sample();
    let ov = Core::overview_for(&config_for(&sb, 0.0), at("2020-12-01 12:30:00")).unwrap();

    // the 13:00 entry of Dec 1st is still ahead
    assert_eq!(ov.end_year, Some(2020));
    assert_eq!(ov.year(2020).unwrap().month(12).unwrap().overtime, 4.0);
    assert_eq!(ov.total_overtime, 4.0);
}

#[test]
fn test_nothing_in_the_past_gives_empty_span() {
    let sb = Sandbox::sample();
    let ov = Core::overview_for(&config_for(&sb, 0.0), at("2019-01-01 00:00:00")).unwrap();

    assert!(ov.is_empty());
    assert_eq!(ov.end_year, None);
    assert!(matches!(
        Core::lookup_year(&ov, Some("2020")),
        YearLookup::Listing(years) if years.is_empty()
    ));
}

#[test]
fn test_repeated_runs_are_identical() {
    let sb = Sandbox::sample();
    let cfg = config_for(&sb, 1.25);
    let now = at("2024-05-01 08:00:00");

    let first = Core::overview_for(&cfg, now).unwrap();
    let second = Core::overview_for(&cfg, now).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_delimiter() {
    let sb = Sandbox::with_rows("");
    std::fs::write(
        &sb.backup,
        "Start,End,Location,Break,Time,Comment,A,B,C,Required\n\
         2022-04-04 08:00:00,2022-04-04 17:00:00,Office,0.5,9.5,,,,,8\n",
    )
    .unwrap();

    let cfg = Config {
        delimiter: ",".to_string(),
        ..config_for(&sb, 0.0)
    };
    let ov = Core::overview_for(&cfg, at("2023-01-01 00:00:00")).unwrap();
    assert_eq!(ov.total_overtime, 1.5);
}

#[test]
fn test_missing_file_is_reported() {
    let sb = Sandbox::sample();
    let cfg = Config {
        stempel_file: sb.path("gone.csv").to_string_lossy().to_string(),
        ..Config::default()
    };

    let err = Core::overview_for(&cfg, at("2024-01-01 00:00:00")).unwrap_err();
    assert!(matches!(err, AppError::SourceMissing(_)));
}
