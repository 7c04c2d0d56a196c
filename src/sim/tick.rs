//! Per-frame simulation tick
//!
//! The only entry point that mutates [`GameState`]. Driven by wall-clock
//! frame deltas: a very long frame is applied as-is, so a stall can carry
//! a panel straight through Hambert's depth plane.
//!
//! `GameState::events` only ever holds what the latest tick raised.

use super::autopilot;
use super::collision;
use super::error::SimError;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick, polled once per frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Start/restart pressed this frame
    pub confirm: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub autopilot: bool,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<(), SimError> {
    let mut input = input.clone();
    if input.autopilot {
        (input.left, input.right, input.confirm) = autopilot::steer(state);
    }
    let input = &input;

    state.events.clear();

    match state.phase {
        GamePhase::Start => {
            if input.confirm {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Started);
                log::info!("Game started (seed {})", state.seed);
            }
        }
        GamePhase::Playing => {
            state.time_ticks += 1;
            state.elapsed += dt;

            state.advance_field(dt)?;

            let speed = state.tuning().hambert_speed;
            state.hambert.move_by(input.left, input.right, speed, dt);

            let eye_speed = state.tuning().eye_speed;
            state.eye.advance(eye_speed, dt);

            let hambert_box = state.hambert.bounding_box();
            let report = collision::resolve(&state.panels, &state.pecan, &hambert_box);

            if report.pecan_hit {
                state.score += 1;
                state.pecan.consume();
                state.events.push(GameEvent::PecanCollected { score: state.score });
            }

            if let Some(slot) = report.panel_hit {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::Crashed {
                    slot,
                    score: state.score,
                });
                log::info!(
                    "Crashed into slot {} after {} generations, {} pecans",
                    slot,
                    state.generation,
                    state.score
                );
            }
        }
        GamePhase::GameOver => {
            if input.confirm {
                state.reset()?;
                state.events.push(GameEvent::Restarted);
                log::info!("Game restarted");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::panels::PanelField;
    use crate::sim::pecan::Pecan;
    use crate::slot_x;
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345, Tuning::default()).expect("valid");
        state.phase = GamePhase::Playing;
        state
    }

    /// Field whose row lands exactly on Hambert's plane after one tick
    fn row_arriving(alive: [bool; SLOT_COUNT], state: &GameState) -> PanelField {
        PanelField::with_layout(alive, HAMBERT_Z - state.tuning().panel_speed * DT)
    }

    #[test]
    fn test_start_waits_for_confirm() {
        let mut state = GameState::new(1, Tuning::default()).expect("valid");
        let z = state.panels.z();

        tick(&mut state, &TickInput::default(), DT).expect("tick");
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.panels.z(), z);

        let held = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &held, DT).expect("tick");
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.hambert.x, 0.0);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT).expect("tick");
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_playing_advances_everything() {
        let mut state = playing_state();
        let z = state.panels.z();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT).expect("tick");
        assert!(state.panels.z() > z);
        assert!(state.hambert.x > 0.0);
        assert!(state.eye.angle > 0.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_confirm_does_not_end_play() {
        let mut state = playing_state();
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT).expect("tick");
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_panel_hit_ends_game() {
        let mut state = playing_state();
        state.panels = row_arriving([false, false, true, false, false], &state);
        state.pecan = Pecan::in_slot(0);
        state.hambert.x = 0.0;

        tick(&mut state, &TickInput::default(), DT).expect("tick");
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state
            .drain_events()
            .contains(&GameEvent::Crashed { slot: 2, score: 0 }));
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = playing_state();
        state.phase = GamePhase::GameOver;
        let z = state.panels.z();
        let held = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &held, DT).expect("tick");
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.panels.z(), z);
        assert_eq!(state.hambert.x, 0.0);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = playing_state();
        state.panels = row_arriving([true, true, true, true, false], &state);
        state.pecan = Pecan::in_slot(4);
        state.score = 3;
        state.hambert.x = -2.0;
        tick(&mut state, &TickInput::default(), DT).expect("tick");
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 3);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT).expect("tick");
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.hambert.x, 0.0);
        assert_eq!(state.panels.z(), state.tuning().panel_start_z);
        let slot = state.pecan.slot().expect("fresh pecan");
        assert!(state.panels.is_slot_empty(slot));
        assert!(state.drain_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_pecan_scores_once() {
        let mut state = playing_state();
        state.panels = row_arriving([true, false, false, false, true], &state);
        state.pecan = Pecan::in_slot(1);
        state.hambert.x = slot_x(1);

        tick(&mut state, &TickInput::default(), DT).expect("tick");
        assert_eq!(state.score, 1);
        assert!(state.pecan.is_consumed());

        // Still overlapping the pecan's old spot for a few more ticks
        state.panels = PanelField::with_layout([true, false, false, false, true], HAMBERT_Z);
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), 0.001).expect("tick");
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_regeneration_places_new_pecan() {
        let mut state = playing_state();
        let reset_z = state.tuning().panel_reset_z;
        state.panels = PanelField::with_layout([true, false, true, false, true], reset_z - 0.01);
        state.pecan.consume();

        tick(&mut state, &TickInput::default(), DT).expect("tick");
        assert_eq!(state.panels.z(), state.tuning().panel_start_z);
        assert_eq!(state.generation, 2);
        let slot = state.pecan.slot().expect("new pecan");
        assert!(state.panels.is_slot_empty(slot));
        assert!(state
            .drain_events()
            .contains(&GameEvent::FieldRegenerated { generation: 2 }));
    }

    #[test]
    fn test_elapsed_sums_variable_deltas() {
        let mut state = playing_state();
        for dt in [0.01, 0.05, 0.002, 0.03] {
            tick(&mut state, &TickInput::default(), dt).expect("tick");
        }
        assert_eq!(state.time_ticks, 4);
        assert!((state.elapsed_secs() - 0.092).abs() < 1e-5);

        // Waiting screens don't count
        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput::default(), 1.0).expect("tick");
        assert!((state.elapsed_secs() - 0.092).abs() < 1e-5);
    }

    #[test]
    fn test_events_hold_only_latest_tick() {
        let mut state = GameState::new(2024, Tuning::default()).expect("valid");
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        // Ten minutes of play without anyone draining the queue
        let mut seen = 0;
        for _ in 0..36_000 {
            tick(&mut state, &input, DT).expect("tick");
            // Regenerated + collected + crashed at most
            assert!(state.events.len() <= 3);
            seen += state.events.len();
        }
        assert!(seen > 100);

        // Leftovers from earlier ticks are dropped even when nothing happens
        state.phase = GamePhase::GameOver;
        state.events.extend([GameEvent::Started; 50]);
        tick(&mut state, &TickInput::default(), DT).expect("tick");
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_autopilot_survives_a_while() {
        let mut state = GameState::new(2024, Tuning::default()).expect("valid");
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT).expect("tick");
        assert_eq!(state.phase, GamePhase::Playing);

        // 30 seconds of play; the row passes every 2.1s
        for _ in 0..1800 {
            tick(&mut state, &input, DT).expect("tick");
            assert_eq!(state.phase, GamePhase::Playing);
        }
        assert!(state.generation > 10);
        assert!(state.score > 0);
    }
}
