use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::pipeline::IdentityPolicy;
use crate::scorer::ScoreScale;
use crate::sequencer::PairingScope;

/// Run policies. Every field has a default, so `{}` is a valid config.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TunnelConfig {
    pub pairing: PairingScope,
    pub score_scale: ScoreScale,
    pub identity: IdentityPolicy,
}

impl TunnelConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid config JSON in {}", path.display()))
    }
}
