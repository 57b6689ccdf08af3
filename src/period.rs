use crate::effort::EffortDuration;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid period: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("load period {left} overlaps with {right}")]
    Overlap { left: LoadPeriod, right: LoadPeriod },
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCategory {
    NoLoad,
    SomeLoad,
    FullLoad,
    Overload,
    Unknown,
}

/// Taux de charge d'une période, en pourcentage entier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLevel {
    percentage: u32,
}

impl LoadLevel {
    pub fn new(percentage: u32) -> Self {
        Self { percentage }
    }

    /// Taux assigné/disponible. Capacité nulle avec charge non nulle →
    /// sentinelle `u32::MAX`, catégorie inconnue.
    pub fn from_efforts(assigned: EffortDuration, available: EffortDuration) -> Self {
        if available.is_zero() {
            return Self::new(if assigned.is_zero() { 0 } else { u32::MAX });
        }
        if assigned.is_zero() {
            return Self::new(0);
        }
        Self::new((assigned.seconds() * 100 / available.seconds()) as u32)
    }

    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    pub fn category(&self) -> LoadCategory {
        match self.percentage {
            u32::MAX => LoadCategory::Unknown,
            0 => LoadCategory::NoLoad,
            p if p < 100 => LoadCategory::SomeLoad,
            100 => LoadCategory::FullLoad,
            _ => LoadCategory::Overload,
        }
    }
}

impl fmt::Display for LoadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.percentage == u32::MAX {
            write!(f, "?%")
        } else {
            write!(f, "{}%", self.percentage)
        }
    }
}

/// Période de charge immuable `[start, end)` : un taux de charge et les deux
/// efforts (disponible, assigné) qui l'expliquent.
///
/// Une collection de périodes décrivant une même ressource est censée être
/// sans chevauchement ; l'invariant n'est pas imposé à la construction mais
/// vérifié par [`LoadPeriod::sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPeriod {
    start: NaiveDate,
    end: NaiveDate,
    load_level: LoadLevel,
    available_effort: EffortDuration,
    assigned_effort: EffortDuration,
}

impl LoadPeriod {
    /// Crée une période en validant que `start <= end` (période vide admise).
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        available_effort: EffortDuration,
        assigned_effort: EffortDuration,
        load_level: LoadLevel,
    ) -> Result<Self, LoadError> {
        if start > end {
            return Err(LoadError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            load_level,
            available_effort,
            assigned_effort,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn load_level(&self) -> LoadLevel {
        self.load_level
    }

    pub fn available_effort(&self) -> EffortDuration {
        self.available_effort
    }

    pub fn assigned_effort(&self) -> EffortDuration {
        self.assigned_effort
    }

    /// Vrai ssi les deux intervalles se coupent. Inégalités strictes aux deux
    /// bornes : des périodes adjacentes (`self.end == other.start`) ne se
    /// chevauchent pas.
    pub fn overlaps(&self, other: &LoadPeriod) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Trie par début croissant puis fin croissante, et vérifie l'invariant de
    /// non-chevauchement sur la séquence triée : la première paire en conflit
    /// fait échouer le tri avec les deux périodes fautives.
    pub fn sort<I>(periods: I) -> Result<Vec<LoadPeriod>, LoadError>
    where
        I: IntoIterator<Item = LoadPeriod>,
    {
        let mut sorted: Vec<LoadPeriod> = periods.into_iter().collect();
        sorted.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

        // Balayage : une fois trié par début, seuls les suivants démarrant
        // avant `end` peuvent encore couper la période courante.
        for i in 0..sorted.len() {
            for j in (i + 1)..sorted.len() {
                if sorted[j].start >= sorted[i].end {
                    break;
                }
                if sorted[i].overlaps(&sorted[j]) {
                    return Err(LoadError::Overlap {
                        left: sorted[i].clone(),
                        right: sorted[j].clone(),
                    });
                }
            }
        }

        Ok(sorted)
    }
}

impl fmt::Display for LoadPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) {}/{} ({})",
            self.start, self.end, self.assigned_effort, self.available_effort, self.load_level
        )
    }
}
