#![forbid(unsafe_code)]
//! Plancharge — bibliothèque de plans de charge locale (sans BD).
//!
//! - Périodes de charge immuables, sans chevauchement, tri vérifié.
//! - Trois séries de graphe (surcharge, disponibilité, charge) regroupées
//!   par zoom et rognées à l'intervalle demandé.
//! - Stockage fichiers (JSON/CSV) ; tout en jours calendaires.

pub mod calendar;
pub mod chart;
pub mod effort;
pub mod generator;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod period;
#[cfg(feature = "serde")]
pub mod storage;

pub use calendar::{Calendar, WeeklyCalendar};
pub use chart::{
    clip_end, clip_start, DaySeries, LoadChartData, LoadDataSource, PlotPoint, PlotSeries,
    SeriesKind, StandardLoadChartFiller, WorkloadDataSource, ZoomLevel,
};
pub use effort::EffortDuration;
pub use generator::resource_load_periods;
pub use model::{Allocation, AllocationId, Interval, Resource, ResourceId, Workload};
pub use period::{LoadCategory, LoadError, LoadLevel, LoadPeriod};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
