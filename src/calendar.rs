use crate::effort::EffortDuration;
use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacité de travail disponible un jour calendaire donné.
pub trait Calendar {
    fn capacity_on(&self, day: NaiveDate) -> EffortDuration;
}

/// Calendrier hebdomadaire fixe : une capacité par jour de semaine, lundi en tête.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeeklyCalendar {
    daily: [EffortDuration; 7],
}

impl WeeklyCalendar {
    pub fn new(daily: [EffortDuration; 7]) -> Self {
        Self { daily }
    }

    /// 8h du lundi au vendredi, rien le week-end.
    pub fn standard() -> Self {
        let workday = EffortDuration::hours(8);
        let off = EffortDuration::zero();
        Self {
            daily: [workday, workday, workday, workday, workday, off, off],
        }
    }

    /// Répartit un volume hebdomadaire sur les cinq jours ouvrés, à la minute près.
    pub fn from_weekly_hours(hours: u32) -> Self {
        let per_day = EffortDuration::minutes(u64::from(hours) * 60 / 5);
        let off = EffortDuration::zero();
        Self {
            daily: [per_day, per_day, per_day, per_day, per_day, off, off],
        }
    }

    pub fn is_working_day(&self, day: NaiveDate) -> bool {
        !self.capacity_on(day).is_zero()
    }
}

impl Default for WeeklyCalendar {
    fn default() -> Self {
        Self::standard()
    }
}

impl Calendar for WeeklyCalendar {
    fn capacity_on(&self, day: NaiveDate) -> EffortDuration {
        self.daily[day.weekday().num_days_from_monday() as usize]
    }
}
