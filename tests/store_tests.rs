use chrono::Duration;

mod common;
use common::{at, open_test_pool};
use rtracker::core::report::ReportLogic;
use rtracker::core::stats::StatsLogic;
use rtracker::core::track::TrackLogic;
use rtracker::models::Kind;
use rtracker::utils::format_elapsed;

#[test]
fn test_report_lines_newest_first() {
    let mut pool = open_test_pool("report_lines");

    TrackLogic::start(&mut pool, "proj", "1", at(9, 15, 0)).unwrap();
    TrackLogic::start(&mut pool, "proj", "2", at(10, 5, 0)).unwrap();

    let lines = ReportLogic::lines(&mut pool).unwrap();
    assert_eq!(lines, vec!["proj#2 10:05-not yet", "proj#1 09:15-10:05"]);
}

#[test]
fn test_single_open_record_invariant() {
    let mut pool = open_test_pool("invariant");
    let mut t = at(8, 0, 0);

    let mut step = |pool: &mut rtracker::db::pool::DbPool| {
        t += Duration::minutes(5);
        let open = StatsLogic::count(pool, Kind::Open).unwrap();
        assert!(open <= 1, "found {} open records", open);
        t
    };

    let now = step(&mut pool);
    TrackLogic::start(&mut pool, "a", "1", now).unwrap();
    let now = step(&mut pool);
    TrackLogic::toggle(&mut pool, "b", "2", now).unwrap();
    let now = step(&mut pool);
    TrackLogic::start(&mut pool, "c", "3", now).unwrap();
    let now = step(&mut pool);
    TrackLogic::toggle(&mut pool, "c", "3", now).unwrap();
    let now = step(&mut pool);
    TrackLogic::toggle(&mut pool, "a", "1", now).unwrap();
    let now = step(&mut pool);
    TrackLogic::close(&mut pool, None, None, now).unwrap();
    step(&mut pool);

    assert_eq!(StatsLogic::count(&mut pool, Kind::Open).unwrap(), 0);
    assert_eq!(StatsLogic::count(&mut pool, Kind::Closed).unwrap(), 4);
}

#[test]
fn test_toggle_reports_new_state() {
    let mut pool = open_test_pool("toggle_state");

    assert!(TrackLogic::toggle(&mut pool, "proj", "1", at(9, 0, 0)).unwrap());
    assert!(!TrackLogic::toggle(&mut pool, "proj", "1", at(9, 30, 0)).unwrap());
    assert!(TrackLogic::toggle(&mut pool, "proj", "1", at(10, 0, 0)).unwrap());

    let lines = ReportLogic::lines(&mut pool).unwrap();
    assert_eq!(lines, vec!["proj#1 10:00-not yet", "proj#1 09:00-09:30"]);
}

#[test]
fn test_close_with_partial_filter_closes_everything() {
    let mut pool = open_test_pool("close_partial_filter");

    TrackLogic::start(&mut pool, "a", "1", at(9, 0, 0)).unwrap();
    assert_eq!(TrackLogic::close(&mut pool, Some("zzz"), None, at(9, 10, 0)).unwrap(), 1);
    assert_eq!(StatsLogic::count(&mut pool, Kind::Open).unwrap(), 0);

    TrackLogic::start(&mut pool, "a", "2", at(9, 20, 0)).unwrap();
    assert_eq!(TrackLogic::close(&mut pool, None, Some("9"), at(9, 30, 0)).unwrap(), 1);
    assert_eq!(StatsLogic::count(&mut pool, Kind::Open).unwrap(), 0);

    // both given: only an exact match is closed
    TrackLogic::start(&mut pool, "a", "3", at(9, 40, 0)).unwrap();
    assert_eq!(TrackLogic::close(&mut pool, Some("a"), Some("9"), at(9, 50, 0)).unwrap(), 0);
    assert_eq!(StatsLogic::count(&mut pool, Kind::Open).unwrap(), 1);
}

#[test]
fn test_empty_filters_count_as_absent() {
    let mut pool = open_test_pool("empty_filters");

    TrackLogic::start(&mut pool, "proj", "1", at(9, 0, 0)).unwrap();

    let t = StatsLogic::time(&mut pool, Kind::Open, Some(""), Some(""), at(9, 0, 30)).unwrap();
    assert_eq!(t, "30s");

    assert_eq!(TrackLogic::delete(&mut pool, "proj", Some("")).unwrap(), 1);
    assert!(ReportLogic::lines(&mut pool).unwrap().is_empty());
}

#[test]
fn test_time_open_truncates_to_whole_seconds() {
    let mut pool = open_test_pool("time_open_truncate");

    TrackLogic::start(&mut pool, "proj", "1", at(9, 0, 0)).unwrap();

    let now = at(9, 0, 59) + Duration::milliseconds(600);
    assert_eq!(StatsLogic::time(&mut pool, Kind::Open, None, None, now).unwrap(), "59s");
}

#[test]
fn test_time_closed_rounds_to_nearest_second() {
    let mut pool = open_test_pool("time_closed_round");

    TrackLogic::start(&mut pool, "proj", "1", at(9, 0, 0)).unwrap();
    TrackLogic::close(&mut pool, None, None, at(9, 0, 59) + Duration::milliseconds(600)).unwrap();

    assert_eq!(
        StatsLogic::elapsed_seconds(&mut pool, Kind::Closed, None, None, at(12, 0, 0)).unwrap(),
        60
    );
}

#[test]
fn test_delete_leaves_other_slugs() {
    let mut pool = open_test_pool("delete_other_slugs");

    TrackLogic::start(&mut pool, "a", "1", at(9, 0, 0)).unwrap();
    TrackLogic::start(&mut pool, "b", "1", at(9, 10, 0)).unwrap();
    TrackLogic::start(&mut pool, "a", "2", at(9, 20, 0)).unwrap();

    assert_eq!(TrackLogic::delete(&mut pool, "a", None).unwrap(), 2);
    assert_eq!(TrackLogic::delete(&mut pool, "a", None).unwrap(), 0);

    let lines = ReportLogic::lines(&mut pool).unwrap();
    assert_eq!(lines, vec!["b#1 09:10-09:20"]);

    assert_eq!(TrackLogic::truncate(&mut pool).unwrap(), 1);
    assert!(ReportLogic::lines(&mut pool).unwrap().is_empty());
}

#[test]
fn test_time_open_rounds_to_minutes() {
    let mut pool = open_test_pool("time_open_90s");

    TrackLogic::start(&mut pool, "proj", "1", at(9, 0, 0)).unwrap();

    let t = StatsLogic::time(&mut pool, Kind::Open, None, None, at(9, 1, 30)).unwrap();
    assert_eq!(t, "2m");

    let t = StatsLogic::time(&mut pool, Kind::Open, Some("proj"), Some("1"), at(9, 0, 42)).unwrap();
    assert_eq!(t, "42s");

    let t = StatsLogic::time(&mut pool, Kind::Open, Some("other"), None, at(9, 1, 30)).unwrap();
    assert_eq!(t, "0s");
}

#[test]
fn test_time_closed_uses_latest_closed_record() {
    let mut pool = open_test_pool("time_closed_latest");

    TrackLogic::start(&mut pool, "proj", "1", at(8, 0, 0)).unwrap();
    TrackLogic::close(&mut pool, None, None, at(10, 0, 0)).unwrap();
    TrackLogic::start(&mut pool, "proj", "2", at(11, 0, 0)).unwrap();
    TrackLogic::close(&mut pool, None, None, at(11, 20, 0)).unwrap();

    let t = StatsLogic::time(&mut pool, Kind::Closed, None, None, at(12, 0, 0)).unwrap();
    assert_eq!(t, "20m");

    let t = StatsLogic::time(&mut pool, Kind::Closed, Some("proj"), Some("1"), at(12, 0, 0)).unwrap();
    assert_eq!(t, "2h");

    assert_eq!(
        StatsLogic::elapsed_seconds(&mut pool, Kind::Closed, Some("proj"), Some("2"), at(12, 0, 0))
            .unwrap(),
        1200
    );
}

#[test]
fn test_format_elapsed_thresholds() {
    assert_eq!(format_elapsed(0), "0s");
    assert_eq!(format_elapsed(59), "59s");
    assert_eq!(format_elapsed(60), "1m");
    assert_eq!(format_elapsed(90), "2m");
    assert_eq!(format_elapsed(3599), "60m");
    assert_eq!(format_elapsed(3600), "1h");
    assert_eq!(format_elapsed(5400), "2h");
    assert_eq!(format_elapsed(150), "2m");
    assert_eq!(format_elapsed(210), "4m");
    assert_eq!(format_elapsed(9000), "2h");
    assert_eq!(format_elapsed(-5), "0s");
}
