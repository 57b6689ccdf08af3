mod series;
mod source;
mod zoom;

pub use series::DaySeries;
pub use source::WorkloadDataSource;
pub use zoom::{ParseZoomError, ZoomLevel};

use crate::model::Interval;
use chrono::{Duration, NaiveDate};

/// Source des séries brutes de charge pour un intervalle de requête.
///
/// Une seule méthode : les tests branchent des sources factices à la place du
/// plan de charge réel.
pub trait LoadDataSource {
    fn data_on(&self, interval: &Interval) -> LoadChartData;
}

/// Les trois séries journalières brutes d'un rendu : charge, disponibilité
/// maximale, surcharge.
#[derive(Debug, Clone, Default)]
pub struct LoadChartData {
    load: DaySeries,
    availability: DaySeries,
    overload: DaySeries,
}

impl LoadChartData {
    pub fn new(load: DaySeries, availability: DaySeries, overload: DaySeries) -> Self {
        Self {
            load,
            availability,
            overload,
        }
    }

    pub fn load(&self) -> &DaySeries {
        &self.load
    }

    pub fn availability(&self) -> &DaySeries {
        &self.availability
    }

    pub fn overload(&self) -> &DaySeries {
        &self.overload
    }

    /// Premier jour portant une donnée, toutes séries confondues.
    pub fn first_day(&self) -> Option<NaiveDate> {
        [&self.load, &self.availability, &self.overload]
            .iter()
            .filter_map(|series| series.first_day())
            .min()
    }

    /// Borne exclusive : lendemain du dernier jour portant une donnée.
    pub fn end_day(&self) -> Option<NaiveDate> {
        [&self.load, &self.availability, &self.overload]
            .iter()
            .filter_map(|series| series.last_day())
            .max()
            .map(|day| day + Duration::days(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Overload,
    Availability,
    Load,
}

impl SeriesKind {
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Overload => "overload",
            SeriesKind::Availability => "availability",
            SeriesKind::Load => "load",
        }
    }
}

/// Point prêt à tracer : abscisse = début de godet, ordonnée en heures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub day: NaiveDate,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub kind: SeriesKind,
    pub points: Vec<PlotPoint>,
}

/// Borne de début effective : intersection de la borne naturelle des données
/// (si connue) et de l'intervalle demandé.
pub fn clip_start(explicit: Option<NaiveDate>, interval: &Interval) -> NaiveDate {
    match explicit {
        None => interval.start(),
        Some(day) => day.max(interval.start()),
    }
}

/// Borne de fin effective, symétrique de [`clip_start`].
pub fn clip_end(explicit: Option<NaiveDate>, interval: &Interval) -> NaiveDate {
    match explicit {
        None => interval.finish(),
        Some(day) => day.min(interval.finish()),
    }
}

/// Remplit un graphe de charge : trois séries regroupées par zoom, rognées à
/// l'intervalle demandé, rendues dans l'ordre de dessin
/// `[surcharge, disponibilité, charge]` — la surcharge se peint derrière la
/// ligne de capacité, la charge encore derrière.
#[derive(Debug)]
pub struct StandardLoadChartFiller<S> {
    source: S,
    zoom: Option<ZoomLevel>,
}

impl<S: LoadDataSource> StandardLoadChartFiller<S> {
    pub fn new(source: S) -> Self {
        Self { source, zoom: None }
    }

    /// Force une granularité au lieu de la déduire de l'étendue demandée.
    pub fn with_zoom(source: S, zoom: ZoomLevel) -> Self {
        Self {
            source,
            zoom: Some(zoom),
        }
    }

    pub fn zoom_for(&self, interval: &Interval) -> ZoomLevel {
        self.zoom
            .unwrap_or_else(|| ZoomLevel::for_interval(interval))
    }

    pub fn plot_info(&self, interval: &Interval) -> [PlotSeries; 3] {
        let data = self.source.data_on(interval);
        let zoom = self.zoom_for(interval);
        let start = clip_start(data.first_day(), interval);
        let end = clip_end(data.end_day(), interval);

        let overload = PlotSeries {
            kind: SeriesKind::Overload,
            points: plot_points(&data.overload().grouped(zoom), zoom, start, end),
        };
        let availability = PlotSeries {
            kind: SeriesKind::Availability,
            points: plot_points(&data.availability().grouped(zoom), zoom, start, end),
        };
        let load = PlotSeries {
            kind: SeriesKind::Load,
            points: plot_points(&data.load().grouped(zoom), zoom, start, end),
        };

        [overload, availability, load]
    }
}

/// Points (godet, heures) couvrant `[start, end)`. Le domaine de godets est
/// calculé à partir des bornes seules : les trois séries d'un même rendu
/// partagent exactement les mêmes abscisses.
fn plot_points(
    series: &DaySeries,
    zoom: ZoomLevel,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PlotPoint> {
    let mut points = Vec::new();
    if start >= end {
        return points;
    }
    let mut bucket = zoom.bucket_of(start);
    while bucket < end {
        points.push(PlotPoint {
            // le premier godet peut déborder à gauche : l'abscisse est ramenée
            // dans l'intervalle
            day: bucket.max(start),
            hours: series.get(bucket).as_hours_f64(),
        });
        bucket = zoom.advance(bucket);
    }
    points
}
