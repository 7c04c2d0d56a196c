//! Simulation failures
//!
//! None of these should happen with a validated [`Tuning`](crate::Tuning);
//! hosts treat them as fatal.

use thiserror::Error;

use crate::tuning::TuningError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("panel generation gave up after {attempts} attempts (wanted {min_live}..={max_live} live slots)")]
    GenerationExhausted {
        attempts: u32,
        min_live: usize,
        max_live: usize,
    },
    #[error("no empty slot to place a pecan in")]
    NoEmptySlot,
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
}
