use crate::calendar::Calendar;
use crate::effort::EffortDuration;
use crate::model::{Allocation, Resource, ResourceId, Workload};
use crate::period::{LoadError, LoadLevel, LoadPeriod};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Construit les périodes de charge d'une ressource.
///
/// Les allocations (éventuellement imbriquées) sont découpées à leurs bornes
/// en segments sans chevauchement ; chaque segment couvert par au moins une
/// allocation donne une période, les trous n'en donnent pas. La séquence
/// produite repasse par [`LoadPeriod::sort`], qui sert d'assertion
/// d'intégrité sur le chemin de production.
pub fn resource_load_periods(
    workload: &Workload,
    resource_id: &ResourceId,
) -> Result<Vec<LoadPeriod>, LoadError> {
    let resource = workload
        .find_resource_by_id(resource_id)
        .ok_or_else(|| LoadError::UnknownResource(resource_id.as_str().to_string()))?;
    let allocations: Vec<&Allocation> = workload.allocations_of(resource_id).collect();

    LoadPeriod::sort(build_periods(resource, &allocations))
}

fn build_periods(resource: &Resource, allocations: &[&Allocation]) -> Vec<LoadPeriod> {
    let mut bounds = BTreeSet::new();
    for allocation in allocations {
        bounds.insert(allocation.start);
        bounds.insert(allocation.end);
    }

    let mut periods = Vec::new();
    let mut previous: Option<NaiveDate> = None;
    for bound in bounds {
        if let Some(start) = previous {
            if let Some(period) = build_segment(resource, allocations, start, bound) {
                periods.push(period);
            }
        }
        previous = Some(bound);
    }
    periods
}

fn build_segment(
    resource: &Resource,
    allocations: &[&Allocation],
    start: NaiveDate,
    end: NaiveDate,
) -> Option<LoadPeriod> {
    let covering: Vec<&&Allocation> = allocations
        .iter()
        .filter(|a| a.start <= start && end <= a.end)
        .collect();
    if covering.is_empty() {
        return None;
    }

    let mut available = EffortDuration::zero();
    let mut working_days = 0u32;
    let mut day = start;
    while day < end {
        let capacity = resource.calendar.capacity_on(day);
        if !capacity.is_zero() {
            working_days += 1;
        }
        available = available + capacity;
        day = day + Duration::days(1);
    }

    let assigned: EffortDuration = covering
        .iter()
        .map(|a| a.daily_effort * working_days)
        .sum();
    let level = LoadLevel::from_efforts(assigned, available);

    match LoadPeriod::new(start, end, available, assigned, level) {
        Ok(period) => Some(period),
        Err(err) => {
            eprintln!("Warning: inconsistent segment skipped: {err}");
            None
        }
    }
}
