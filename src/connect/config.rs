use serde::Deserialize;

use super::error::Error;
use crate::model::system::CorrectionBond;

/// Si–O detection threshold, held in squared Ångström.
///
/// Detection compares squared distances, so the cutoff is stored squared and
/// must be constructed with an explicit unit: [`Cutoff::from_distance`] for a
/// linear bond length, [`Cutoff::from_squared`] for a value already squared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoff {
    squared: f64,
}

impl Cutoff {
    /// The fixed threshold of the legacy connectivity script, in Å².
    pub const LEGACY_SQUARED: f64 = 1.25;

    /// Fails when `distance`, or its square, is not finite and positive.
    pub fn from_distance(distance: f64) -> Result<Self, Error> {
        let squared = distance * distance;
        if !distance.is_finite() || distance <= 0.0 || !is_valid(squared) {
            return Err(Error::InvalidCutoff { value: distance });
        }
        Ok(Self { squared })
    }

    pub fn from_squared(squared: f64) -> Result<Self, Error> {
        if !is_valid(squared) {
            return Err(Error::InvalidCutoff { value: squared });
        }
        Ok(Self { squared })
    }

    #[inline]
    pub fn squared(&self) -> f64 {
        self.squared
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.squared.sqrt()
    }
}

fn is_valid(squared: f64) -> bool {
    squared.is_finite() && squared > 0.0
}

impl Default for Cutoff {
    fn default() -> Self {
        Self {
            squared: Self::LEGACY_SQUARED,
        }
    }
}

/// Neighbor search used by bond detection. Both emit the same bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Test every Si against every O.
    #[default]
    Exhaustive,
    /// Bucket oxygens into a uniform grid sized to the cutoff.
    Grid,
}

/// Boundary corrections for one specific slab model.
///
/// ```toml
/// [[corrections]]
/// si = 963
/// o = 2382
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CorrectionSet {
    #[serde(default)]
    pub corrections: Vec<CorrectionBond>,
}

impl CorrectionSet {
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }

    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}

/// Everything [`connect`](super::connect) needs besides the slab itself.
#[derive(Debug, Clone, Default)]
pub struct ConnectConfig {
    pub cutoff: Cutoff,
    pub strategy: Strategy,
    pub corrections: CorrectionSet,
}
