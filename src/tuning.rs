//! Data-driven game balance
//!
//! Everything a designer might want to tweak without touching the
//! simulation. Loaded from JSON; missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::SLOT_COUNT;

/// Which edge slots are forced alive on every generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// No slot is forced; every slot is rolled
    #[default]
    Free,
    /// Leftmost slot always holds a panel
    PinLeft,
    /// Rightmost slot always holds a panel
    PinRight,
    /// Both outer slots always hold a panel
    PinBoth,
}

impl EdgePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgePolicy::Free => "free",
            EdgePolicy::PinLeft => "pin_left",
            EdgePolicy::PinRight => "pin_right",
            EdgePolicy::PinBoth => "pin_both",
        }
    }

    /// Whether `slot` is forced alive under this policy
    pub fn pins(&self, slot: usize) -> bool {
        let left = slot == 0;
        let right = slot + 1 == SLOT_COUNT;
        match self {
            EdgePolicy::Free => false,
            EdgePolicy::PinLeft => left,
            EdgePolicy::PinRight => right,
            EdgePolicy::PinBoth => left || right,
        }
    }

    /// Number of slots forced alive
    pub fn pinned_count(&self) -> usize {
        (0..SLOT_COUNT).filter(|&slot| self.pins(slot)).count()
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("max_live ({max_live}) must be below the slot count ({}) so a gap always exists", SLOT_COUNT)]
    NoGuaranteedGap { max_live: usize },
    #[error("min_live ({min_live}) exceeds max_live ({max_live})")]
    EmptyLiveRange { min_live: usize, max_live: usize },
    #[error("spawn_chance ({0}) must be within [0, 1]")]
    SpawnChance(f64),
    #[error("retry_cap must be at least 1")]
    ZeroRetryCap,
    #[error("edge policy {policy} pins {pinned} slots but max_live is {max_live}")]
    TooManyPinned {
        policy: &'static str,
        pinned: usize,
        max_live: usize,
    },
    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("panel_start_z ({start}) must be in front of panel_reset_z ({reset})")]
    ResetBehindStart { start: f32, reset: f32 },
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Panel generation ===
    /// Chance that any single slot rolls a panel
    pub spawn_chance: f64,
    /// Fewest panels allowed in one generation
    pub min_live: usize,
    /// Most panels allowed in one generation (must leave a gap)
    pub max_live: usize,
    /// Rejection-sampling attempts before generation gives up
    pub retry_cap: u32,
    /// Edge slots forced alive
    pub edge_policy: EdgePolicy,

    // === Motion ===
    /// Panel scroll speed (units/sec toward the camera)
    pub panel_speed: f32,
    /// Depth a fresh generation starts at
    pub panel_start_z: f32,
    /// Depth past Hambert at which the field regenerates
    pub panel_reset_z: f32,
    /// Hambert lateral speed (units/sec)
    pub hambert_speed: f32,
    /// Eye orbit speed (radians/sec)
    pub eye_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_chance: 0.5,
            min_live: 2,
            max_live: 4,
            retry_cap: 64,
            edge_policy: EdgePolicy::Free,

            panel_speed: 10.0,
            panel_start_z: -20.0,
            panel_reset_z: 1.0,
            hambert_speed: 5.0,
            eye_speed: 1.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for dumping the active tuning)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.max_live >= SLOT_COUNT {
            return Err(TuningError::NoGuaranteedGap {
                max_live: self.max_live,
            });
        }
        if self.min_live > self.max_live {
            return Err(TuningError::EmptyLiveRange {
                min_live: self.min_live,
                max_live: self.max_live,
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(TuningError::SpawnChance(self.spawn_chance));
        }
        if self.retry_cap == 0 {
            return Err(TuningError::ZeroRetryCap);
        }
        let pinned = self.edge_policy.pinned_count();
        if pinned > self.max_live {
            return Err(TuningError::TooManyPinned {
                policy: self.edge_policy.as_str(),
                pinned,
                max_live: self.max_live,
            });
        }
        for (name, value) in [
            ("panel_speed", self.panel_speed),
            ("hambert_speed", self.hambert_speed),
            ("eye_speed", self.eye_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        if !(self.panel_start_z < self.panel_reset_z) {
            return Err(TuningError::ResetBehindStart {
                start: self.panel_start_z,
                reset: self.panel_reset_z,
            });
        }
        Ok(())
    }
}
