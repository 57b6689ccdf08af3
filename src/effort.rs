use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;
use thiserror::Error;

/// Grandeur de temps de travail (jamais négative), stockée en secondes.
///
/// Affichage et parsing au format `H:MM` (minutes sur deux chiffres).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EffortDuration {
    seconds: u64,
}

impl EffortDuration {
    pub fn zero() -> Self {
        Self { seconds: 0 }
    }

    pub fn hours(hours: u64) -> Self {
        Self {
            seconds: hours * 3600,
        }
    }

    pub fn minutes(minutes: u64) -> Self {
        Self {
            seconds: minutes * 60,
        }
    }

    pub fn hours_and_minutes(hours: u64, minutes: u64) -> Self {
        Self {
            seconds: hours * 3600 + minutes * 60,
        }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Soustraction bornée à zéro : une surcharge ne peut pas être négative.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self {
            seconds: self.seconds.saturating_sub(other.seconds),
        }
    }

    /// Division entière, arrondie à la seconde inférieure.
    pub fn divide_by(self, divisor: u32) -> Self {
        Self {
            seconds: self.seconds / u64::from(divisor.max(1)),
        }
    }

    /// Valeur en heures décimales, pour les ordonnées de graphe.
    pub fn as_hours_f64(&self) -> f64 {
        self.seconds as f64 / 3600.0
    }
}

impl Add for EffortDuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl Mul<u32> for EffortDuration {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self {
            seconds: self.seconds * u64::from(rhs),
        }
    }
}

impl Sum for EffortDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for EffortDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.seconds / 60;
        write!(f, "{}:{:02}", minutes / 60, minutes % 60)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid effort literal: {0}")]
pub struct ParseEffortError(String);

impl FromStr for EffortDuration {
    type Err = ParseEffortError;

    /// Accepte `H`, `H:MM` ou `H:MM:SS`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bad = || ParseEffortError(raw.to_string());
        let mut parts = raw.trim().split(':');

        let hours: u64 = parts
            .next()
            .filter(|p| !p.is_empty())
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;
        let minutes: u64 = match parts.next() {
            Some(p) => p.parse().ok().filter(|m| *m < 60).ok_or_else(bad)?,
            None => 0,
        };
        let seconds: u64 = match parts.next() {
            Some(p) => p.parse().ok().filter(|s| *s < 60).ok_or_else(bad)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(bad());
        }

        Ok(Self {
            seconds: hours * 3600 + minutes * 60 + seconds,
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EffortDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EffortDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
