use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use silica_bridge::{ConnectConfig, CorrectionSet, Cutoff, Strategy};

use crate::cli::{DetectOptions, SearchStrategy};

impl From<SearchStrategy> for Strategy {
    fn from(s: SearchStrategy) -> Self {
        match s {
            SearchStrategy::Exhaustive => Strategy::Exhaustive,
            SearchStrategy::Grid => Strategy::Grid,
        }
    }
}

pub fn build_connect_config(opts: &DetectOptions, distance: f64) -> Result<ConnectConfig> {
    let cutoff = if opts.squared {
        Cutoff::from_squared(distance)
    } else {
        Cutoff::from_distance(distance)
    }
    .context("Invalid bond cutoff")?;

    let corrections = match &opts.corrections {
        Some(path) => load_corrections(path)?,
        None => CorrectionSet::default(),
    };

    Ok(ConnectConfig {
        cutoff,
        strategy: opts.search.into(),
        corrections,
    })
}

fn load_corrections(path: &Path) -> Result<CorrectionSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read correction file: {}", path.display()))?;
    CorrectionSet::from_toml_str(&content)
        .with_context(|| format!("Failed to parse correction file: {}", path.display()))
}
