//! Game state and phase
//!
//! Everything the simulation mutates lives in [`GameState`], owned by the
//! host loop and only changed through [`tick`](super::tick::tick).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::eye::Eye;
use super::hambert::Hambert;
use super::panels::PanelField;
use super::pecan::Pecan;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    Start,
    /// Active gameplay
    Playing,
    /// Hambert hit a panel, waiting for the restart input
    GameOver,
}

/// Things that happened during a tick, for audio/UI hosts to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start input accepted on the title screen
    Started,
    /// Restart input accepted after a game over
    Restarted,
    /// The panel row passed Hambert and was re-rolled
    FieldRegenerated { generation: u64 },
    /// A pecan was eaten
    PecanCollected { score: u32 },
    /// Hambert ran into the panel in `slot`
    Crashed { slot: usize, score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed
    pub seed: u64,
    /// Balance knobs (validated)
    tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Pecans eaten this run
    pub score: u32,
    /// Field generations since the run started (the first one counts)
    pub generation: u64,
    /// Playing ticks this run
    pub time_ticks: u64,
    /// Seconds of play this run (sum of Playing deltas)
    pub elapsed: f32,
    pub panels: PanelField,
    pub hambert: Hambert,
    pub pecan: Pecan,
    pub eye: Eye,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a game on the title screen with a freshly rolled field
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, SimError> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let panels = PanelField::generate(&mut rng, &tuning)?;
        let pecan = Pecan::spawn(&panels, &mut rng)?;
        Ok(Self {
            seed,
            tuning,
            phase: GamePhase::Start,
            score: 0,
            generation: 1,
            time_ticks: 0,
            elapsed: 0.0,
            panels,
            hambert: Hambert::default(),
            pecan,
            eye: Eye::default(),
            events: Vec::new(),
            rng,
        })
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Put every run-scoped value back to its initial state and start
    /// playing. The RNG keeps its stream so each run gets a new layout.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.panels = PanelField::generate(&mut self.rng, &self.tuning)?;
        self.pecan = Pecan::spawn(&self.panels, &mut self.rng)?;
        self.hambert = Hambert::default();
        self.eye = Eye::default();
        self.score = 0;
        self.generation = 1;
        self.time_ticks = 0;
        self.elapsed = 0.0;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Scroll the field; on regeneration place the next pecan
    pub(super) fn advance_field(&mut self, dt: f32) -> Result<(), SimError> {
        if self.panels.advance(dt, &mut self.rng, &self.tuning)? {
            self.pecan = Pecan::spawn(&self.panels, &mut self.rng)?;
            self.generation += 1;
            self.events.push(GameEvent::FieldRegenerated {
                generation: self.generation,
            });
        }
        Ok(())
    }

    /// Take the events of the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seconds of play this run
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }
}
