use crate::{Error, Result};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Land-use category of a city block.
///
/// Serialized as its lowercase name (`"residential"`, `"commercial"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandUse {
    Residential,
    Commercial,
    Industrial,
    Public,
}

impl LandUse {
    /// Every category, in declaration order.
    pub const ALL: [LandUse; 4] = [
        LandUse::Residential,
        LandUse::Commercial,
        LandUse::Industrial,
        LandUse::Public,
    ];

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LandUse::Residential => "residential",
            LandUse::Commercial => "commercial",
            LandUse::Industrial => "industrial",
            LandUse::Public => "public",
        }
    }
}

impl std::fmt::Display for LandUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LandUse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LandUse::ALL
            .into_iter()
            .find(|land_use| land_use.as_str() == s)
            .ok_or_else(|| Error::UnknownLandUse(s.to_string()))
    }
}

/// Uniform draw over [`LandUse::ALL`], so `rng.random::<LandUse>()` works.
impl Distribution<LandUse> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LandUse {
        LandUse::ALL[rng.random_range(0..LandUse::ALL.len())]
    }
}
