use super::zoom::ZoomLevel;
use crate::effort::EffortDuration;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Série ordonnée jour → effort. Les jours absents valent implicitement zéro,
/// les clés sont en ordre chronologique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySeries {
    entries: BTreeMap<NaiveDate, EffortDuration>,
}

impl DaySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumule `effort` sur le jour donné ; un effort nul est ignoré pour
    /// garder la série creuse.
    pub fn add(&mut self, day: NaiveDate, effort: EffortDuration) {
        if effort.is_zero() {
            return;
        }
        let slot = self.entries.entry(day).or_insert_with(EffortDuration::zero);
        *slot = *slot + effort;
    }

    pub fn get(&self, day: NaiveDate) -> EffortDuration {
        self.entries.get(&day).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, EffortDuration)> + '_ {
        self.entries.iter().map(|(day, effort)| (*day, *effort))
    }

    /// Regroupe les jours par godet de zoom, en sommant les valeurs.
    pub fn grouped(&self, zoom: ZoomLevel) -> DaySeries {
        let mut out = DaySeries::new();
        for (day, effort) in self.iter() {
            out.add(zoom.bucket_of(day), effort);
        }
        out
    }
}

impl FromIterator<(NaiveDate, EffortDuration)> for DaySeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, EffortDuration)>>(iter: I) -> Self {
        let mut out = DaySeries::new();
        for (day, effort) in iter {
            out.add(day, effort);
        }
        out
    }
}
