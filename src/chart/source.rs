use super::{DaySeries, LoadChartData, LoadDataSource};
use crate::calendar::Calendar;
use crate::effort::EffortDuration;
use crate::model::{Interval, Workload};

/// Source branchée sur un plan de charge en mémoire.
///
/// Par jour : charge = somme des efforts alloués (jours ouvrés de la
/// ressource seulement), disponibilité = somme des capacités des calendriers,
/// surcharge = excédent de charge borné à zéro.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadDataSource<'a> {
    workload: &'a Workload,
}

impl<'a> WorkloadDataSource<'a> {
    pub fn new(workload: &'a Workload) -> Self {
        Self { workload }
    }
}

impl LoadDataSource for WorkloadDataSource<'_> {
    fn data_on(&self, interval: &Interval) -> LoadChartData {
        let mut load = DaySeries::new();
        let mut availability = DaySeries::new();
        let mut overload = DaySeries::new();

        for day in interval.days() {
            let capacity: EffortDuration = self
                .workload
                .resources
                .iter()
                .map(|resource| resource.calendar.capacity_on(day))
                .sum();
            let assigned: EffortDuration = self
                .workload
                .allocations
                .iter()
                .filter(|allocation| allocation.covers(day))
                .filter(|allocation| {
                    self.workload
                        .find_resource_by_id(&allocation.resource)
                        .map(|resource| resource.calendar.is_working_day(day))
                        .unwrap_or(false)
                })
                .map(|allocation| allocation.daily_effort)
                .sum();

            availability.add(day, capacity);
            load.add(day, assigned);
            overload.add(day, assigned.saturating_sub(capacity));
        }

        LoadChartData::new(load, availability, overload)
    }
}
