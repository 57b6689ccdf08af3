use crate::model::Interval;
use chrono::{Datelike, Duration, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Granularité calendaire d'un graphe de charge, de la plus grossière à la
/// plus fine. Borne le nombre de points rendus quelle que soit l'étendue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ZoomLevel {
    Year,
    Quarter,
    Month,
    Week,
    Day,
}

impl ZoomLevel {
    const ALL: [ZoomLevel; 5] = [
        ZoomLevel::Year,
        ZoomLevel::Quarter,
        ZoomLevel::Month,
        ZoomLevel::Week,
        ZoomLevel::Day,
    ];

    fn suitable_for(self, days: i64) -> bool {
        match self {
            ZoomLevel::Year => days > 950,
            ZoomLevel::Quarter => days > 550,
            ZoomLevel::Month => days > 175,
            ZoomLevel::Week => days > 50,
            ZoomLevel::Day => true,
        }
    }

    /// Granularité par défaut pour une étendue en jours : la plus grossière
    /// qui convienne.
    pub fn for_span(days: i64) -> ZoomLevel {
        Self::ALL
            .iter()
            .copied()
            .find(|zoom| zoom.suitable_for(days))
            .unwrap_or(ZoomLevel::Day)
    }

    pub fn for_interval(interval: &Interval) -> ZoomLevel {
        Self::for_span(interval.day_count())
    }

    /// Niveau plus fin ; reste sur place en bout d'échelle.
    pub fn next(self) -> ZoomLevel {
        match self {
            ZoomLevel::Year => ZoomLevel::Quarter,
            ZoomLevel::Quarter => ZoomLevel::Month,
            ZoomLevel::Month => ZoomLevel::Week,
            ZoomLevel::Week => ZoomLevel::Day,
            ZoomLevel::Day => ZoomLevel::Day,
        }
    }

    /// Niveau plus grossier ; reste sur place en bout d'échelle.
    pub fn previous(self) -> ZoomLevel {
        match self {
            ZoomLevel::Year => ZoomLevel::Year,
            ZoomLevel::Quarter => ZoomLevel::Year,
            ZoomLevel::Month => ZoomLevel::Quarter,
            ZoomLevel::Week => ZoomLevel::Month,
            ZoomLevel::Day => ZoomLevel::Week,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoomLevel::Year => "year",
            ZoomLevel::Quarter => "quarter",
            ZoomLevel::Month => "month",
            ZoomLevel::Week => "week",
            ZoomLevel::Day => "day",
        }
    }

    /// Début du godet contenant `day` (lundi pour les semaines, premier jour
    /// du mois/trimestre/de l'année sinon).
    pub fn bucket_of(self, day: NaiveDate) -> NaiveDate {
        match self {
            ZoomLevel::Day => day,
            ZoomLevel::Week => {
                day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
            }
            ZoomLevel::Month => NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day),
            ZoomLevel::Quarter => {
                let quarter_month = (day.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(day.year(), quarter_month, 1).unwrap_or(day)
            }
            ZoomLevel::Year => NaiveDate::from_ymd_opt(day.year(), 1, 1).unwrap_or(day),
        }
    }

    /// Début du godet suivant.
    pub fn advance(self, bucket: NaiveDate) -> NaiveDate {
        match self {
            ZoomLevel::Day => bucket + Duration::days(1),
            ZoomLevel::Week => bucket + Duration::days(7),
            ZoomLevel::Month => bucket + Months::new(1),
            ZoomLevel::Quarter => bucket + Months::new(3),
            ZoomLevel::Year => bucket + Months::new(12),
        }
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown zoom level: {0}")]
pub struct ParseZoomError(String);

impl FromStr for ZoomLevel {
    type Err = ParseZoomError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(ZoomLevel::Year),
            "quarter" => Ok(ZoomLevel::Quarter),
            "month" => Ok(ZoomLevel::Month),
            "week" => Ok(ZoomLevel::Week),
            "day" => Ok(ZoomLevel::Day),
            _ => Err(ParseZoomError(raw.to_string())),
        }
    }
}
