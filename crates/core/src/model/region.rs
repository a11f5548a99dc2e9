use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::RecordId;

/// A named, contiguous block of catalog numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    National,
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Paldea,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::National,
        Region::Kanto,
        Region::Johto,
        Region::Hoenn,
        Region::Sinnoh,
        Region::Unova,
        Region::Kalos,
        Region::Alola,
        Region::Galar,
        Region::Paldea,
    ];

    /// Inclusive `(start, end)` catalog numbers.
    #[must_use]
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Region::National => (1, 1025),
            Region::Kanto => (1, 151),
            Region::Johto => (152, 251),
            Region::Hoenn => (252, 386),
            Region::Sinnoh => (387, 493),
            Region::Unova => (494, 649),
            Region::Kalos => (650, 721),
            Region::Alola => (722, 809),
            Region::Galar => (810, 898),
            Region::Paldea => (899, 1025),
        }
    }

    #[must_use]
    pub fn range(self) -> RangeInclusive<RecordId> {
        let (start, end) = self.bounds();
        RecordId::clamped(start)..=RecordId::clamped(end)
    }

    /// Every id in the region, ascending.
    #[must_use]
    pub fn ids(self) -> Vec<RecordId> {
        let (start, end) = self.bounds();
        (start..=end).map(RecordId::clamped).collect()
    }

    #[must_use]
    pub fn len(self) -> usize {
        let (start, end) = self.bounds();
        (end - start + 1) as usize
    }

    #[must_use]
    pub fn contains(self, id: RecordId) -> bool {
        self.range().contains(&id)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Region::National => "National",
            Region::Kanto => "Kanto",
            Region::Johto => "Johto",
            Region::Hoenn => "Hoenn",
            Region::Sinnoh => "Sinnoh",
            Region::Unova => "Unova",
            Region::Kalos => "Kalos",
            Region::Alola => "Alola",
            Region::Galar => "Galar",
            Region::Paldea => "Paldea",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRegion(wanted.to_string()))
    }
}
