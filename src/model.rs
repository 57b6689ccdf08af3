use crate::calendar::WeeklyCalendar;
use crate::effort::EffortDuration;
use chrono::{Duration, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Allocation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationId(String);

impl AllocationId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ressource dont on suit la charge, avec son calendrier de capacité.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "WeeklyCalendar::standard"))]
    pub calendar: WeeklyCalendar,
}

impl Resource {
    pub fn new<N: Into<String>>(name: N, calendar: WeeklyCalendar) -> Self {
        Self {
            id: ResourceId::random(),
            name: name.into(),
            calendar,
        }
    }
}

/// Allocation de travail sur une ressource (intervalle de jours `[start, end)`),
/// avec un effort journalier appliqué aux jours ouvrés.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Allocation {
    pub id: AllocationId,
    pub resource: ResourceId,
    pub task: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub daily_effort: EffortDuration,
}

impl Allocation {
    /// Crée une allocation en validant que `end > start`.
    pub fn new(
        resource: ResourceId,
        task: String,
        start: NaiveDate,
        end: NaiveDate,
        daily_effort: EffortDuration,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("allocation end must be strictly after start".to_string());
        }
        Ok(Self {
            id: AllocationId::random(),
            resource,
            task,
            start,
            end,
            daily_effort,
        })
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Durée en jours calendaires.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Intervalle de requête d'un graphe (jours, `[start, finish)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: NaiveDate,
    finish: NaiveDate,
}

impl Interval {
    pub fn new(start: NaiveDate, finish: NaiveDate) -> Result<Self, String> {
        if finish < start {
            return Err("interval finish must not precede start".to_string());
        }
        Ok(Self { start, finish })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn finish(&self) -> NaiveDate {
        self.finish
    }

    pub fn day_count(&self) -> i64 {
        (self.finish - self.start).num_days()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count()).map(move |offset| start + Duration::days(offset))
    }
}

/// Plan de charge complet
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Workload {
    pub resources: Vec<Resource>,
    pub allocations: Vec<Allocation>,
}

impl Workload {
    pub fn find_resource_by_name<'a>(&'a self, name: &str) -> Option<&'a Resource> {
        self.resources.iter().find(|r| r.name == name)
    }
    pub fn find_resource_by_id<'a>(&'a self, id: &ResourceId) -> Option<&'a Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }
    pub fn allocations_of<'a>(&'a self, id: &'a ResourceId) -> impl Iterator<Item = &'a Allocation> {
        self.allocations.iter().filter(move |a| &a.resource == id)
    }
}
