use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported species symbol: '{0}'")]
pub struct ParseSpeciesError(String);

/// The two atomic species of a silica slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    O,
    Si,
}

impl Species {
    pub fn symbol(&self) -> &'static str {
        match self {
            Species::O => "O",
            Species::Si => "Si",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Si" => Ok(Species::Si),
            "O" => Ok(Species::O),
            _ => Err(ParseSpeciesError(s.to_string())),
        }
    }
}
