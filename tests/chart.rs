#![forbid(unsafe_code)]
use chrono::NaiveDate;
use plancharge::{
    clip_end, clip_start, Allocation, DaySeries, EffortDuration, Interval, LoadChartData,
    LoadDataSource, Resource, SeriesKind, StandardLoadChartFiller, WeeklyCalendar, Workload,
    WorkloadDataSource, ZoomLevel,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn interval(start: u32, finish: u32) -> Interval {
    Interval::new(d(start), d(finish)).unwrap()
}

/// Source factice : renvoie toujours les mêmes séries, quel que soit
/// l'intervalle demandé.
struct FixedSource(LoadChartData);

impl LoadDataSource for FixedSource {
    fn data_on(&self, _interval: &Interval) -> LoadChartData {
        self.0.clone()
    }
}

#[test]
fn clip_defaults_to_interval_bounds() {
    let interval = interval(5, 20);
    assert_eq!(clip_start(None, &interval), d(5));
    assert_eq!(clip_end(None, &interval), d(20));
}

#[test]
fn clip_intersects_explicit_bounds() {
    let interval = interval(5, 20);
    // borne explicite à l'intérieur : elle l'emporte
    assert_eq!(clip_start(Some(d(8)), &interval), d(8));
    assert_eq!(clip_end(Some(d(15)), &interval), d(15));
    // borne explicite à l'extérieur : l'intervalle l'emporte
    assert_eq!(clip_start(Some(d(1)), &interval), d(5));
    assert_eq!(clip_end(Some(d(25)), &interval), d(20));
}

#[test]
fn zoom_is_picked_from_span() {
    assert_eq!(ZoomLevel::for_span(10), ZoomLevel::Day);
    assert_eq!(ZoomLevel::for_span(50), ZoomLevel::Day);
    assert_eq!(ZoomLevel::for_span(60), ZoomLevel::Week);
    assert_eq!(ZoomLevel::for_span(200), ZoomLevel::Month);
    assert_eq!(ZoomLevel::for_span(600), ZoomLevel::Quarter);
    assert_eq!(ZoomLevel::for_span(1000), ZoomLevel::Year);
}

#[test]
fn zoom_next_previous_saturate() {
    assert_eq!(ZoomLevel::Year.next(), ZoomLevel::Quarter);
    assert_eq!(ZoomLevel::Day.next(), ZoomLevel::Day);
    assert_eq!(ZoomLevel::Day.previous(), ZoomLevel::Week);
    assert_eq!(ZoomLevel::Year.previous(), ZoomLevel::Year);
}

#[test]
fn zoom_buckets_snap_to_period_starts() {
    // 2025-03-05 est un mercredi
    assert_eq!(ZoomLevel::Day.bucket_of(d(5)), d(5));
    assert_eq!(ZoomLevel::Week.bucket_of(d(5)), d(3));
    assert_eq!(ZoomLevel::Month.bucket_of(d(5)), d(1));
    assert_eq!(
        ZoomLevel::Quarter.bucket_of(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()),
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    );
    assert_eq!(
        ZoomLevel::Year.bucket_of(d(5)),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    // le godet suivant franchit les bornes de calendrier
    assert_eq!(
        ZoomLevel::Month.advance(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    );
}

#[test]
fn grouping_sums_days_into_buckets() {
    let mut series = DaySeries::new();
    series.add(d(3), EffortDuration::hours(2)); // lundi
    series.add(d(5), EffortDuration::hours(3)); // mercredi, même semaine
    series.add(d(10), EffortDuration::hours(4)); // lundi suivant

    let weekly = series.grouped(ZoomLevel::Week);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly.get(d(3)), EffortDuration::hours(5));
    assert_eq!(weekly.get(d(10)), EffortDuration::hours(4));
}

#[test]
fn series_share_point_count_and_abscissas() {
    let mut load = DaySeries::new();
    load.add(d(3), EffortDuration::hours(4));
    load.add(d(5), EffortDuration::hours(2));
    let mut availability = DaySeries::new();
    availability.add(d(4), EffortDuration::hours(8));
    let data = LoadChartData::new(load, availability, DaySeries::new());

    let filler = StandardLoadChartFiller::new(FixedSource(data));
    let [overload, availability, load] = filler.plot_info(&interval(1, 20));

    assert_eq!(overload.kind, SeriesKind::Overload);
    assert_eq!(availability.kind, SeriesKind::Availability);
    assert_eq!(load.kind, SeriesKind::Load);

    // mêmes abscisses pour les trois séries, rognées aux bornes des données
    assert_eq!(load.points.len(), 3);
    for series in [&overload, &availability, &load] {
        assert_eq!(series.points.len(), 3);
        let days: Vec<NaiveDate> = series.points.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![d(3), d(4), d(5)]);
    }
    assert!(overload.points.iter().all(|p| p.hours == 0.0));
}

#[test]
fn empty_data_fills_zeroes_over_the_interval() {
    let filler = StandardLoadChartFiller::new(FixedSource(LoadChartData::default()));
    let [overload, availability, load] = filler.plot_info(&interval(3, 8));

    for series in [&overload, &availability, &load] {
        assert_eq!(series.points.len(), 5);
        assert!(series.points.iter().all(|p| p.hours == 0.0));
    }
}

fn one_resource_workload(start: u32, end: u32, daily_hours: u64) -> Workload {
    let resource = Resource::new("alice", WeeklyCalendar::standard());
    let allocation = Allocation::new(
        resource.id.clone(),
        "support".to_string(),
        d(start),
        d(end),
        EffortDuration::hours(daily_hours),
    )
    .unwrap();
    Workload {
        resources: vec![resource],
        allocations: vec![allocation],
    }
}

#[test]
fn workload_source_exposes_overload_on_working_days() {
    // alice : 8h par jour ouvré ; allocation à 10h/j sur la semaine
    let workload = one_resource_workload(3, 10, 10);
    let source = WorkloadDataSource::new(&workload);
    let filler = StandardLoadChartFiller::new(source);

    let [overload, availability, load] = filler.plot_info(&interval(3, 10));

    // le week-end ne porte aucune donnée : les points s'arrêtent au vendredi
    assert_eq!(load.points.len(), 5);
    for series in [&overload, &availability, &load] {
        assert_eq!(series.points.len(), 5);
    }
    assert!(load.points.iter().all(|p| p.hours == 10.0));
    assert!(availability.points.iter().all(|p| p.hours == 8.0));
    assert!(overload.points.iter().all(|p| p.hours == 2.0));
}

#[test]
fn forced_weekly_zoom_groups_points() {
    let workload = one_resource_workload(3, 17, 4);
    let source = WorkloadDataSource::new(&workload);
    let filler = StandardLoadChartFiller::with_zoom(source, ZoomLevel::Week);

    let [overload, availability, load] = filler.plot_info(&interval(3, 17));

    assert_eq!(load.points.len(), 2);
    assert_eq!(load.points[0].day, d(3));
    assert_eq!(load.points[1].day, d(10));
    assert!(load.points.iter().all(|p| p.hours == 20.0));
    assert!(availability.points.iter().all(|p| p.hours == 40.0));
    assert!(overload.points.iter().all(|p| p.hours == 0.0));
}
