//! HUD and banners
//!
//! Pure function of the game phase and score. Positions are in screen
//! pixels for a `SCREEN_WIDTH` x `SCREEN_HEIGHT` window.

use serde::Serialize;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, GameState};

pub const TITLE: &str = "HAMBERT'S QUEST";
pub const START_PROMPT: &str = "Press 'Space' to Start";
pub const RESTART_PROMPT: &str = "Press 'Space' to restart.";
pub const GAME_OVER: &str = "G A M E  O V E R";

/// Where a line of text goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Anchor {
    /// Top-left corner at a fixed point
    TopLeft { x: f32, y: f32 },
    /// Horizontally centered; the host measures the text width
    CenteredX { y: f32 },
}

impl Anchor {
    /// Resolve to a top-left corner given the measured text width
    pub fn resolve(&self, text_width: f32) -> (f32, f32) {
        match *self {
            Anchor::TopLeft { x, y } => (x, y),
            Anchor::CenteredX { y } => (SCREEN_WIDTH / 2.0 - text_width / 2.0, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub text: String,
    /// Font size in pixels
    pub size: u32,
    pub anchor: Anchor,
}

impl TextLine {
    fn new(text: impl Into<String>, size: u32, anchor: Anchor) -> Self {
        Self {
            text: text.into(),
            size,
            anchor,
        }
    }
}

/// All text to draw this frame
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Hud {
    pub lines: Vec<TextLine>,
}

pub fn score_text(score: u32) -> String {
    format!("Pecans: {score}")
}

impl Hud {
    pub fn for_phase(phase: GamePhase, score: u32) -> Self {
        let corner = Anchor::TopLeft { x: 10.0, y: 10.0 };
        let lines = match phase {
            GamePhase::Start => vec![
                TextLine::new(
                    TITLE,
                    60,
                    Anchor::CenteredX {
                        y: SCREEN_HEIGHT / 4.0 - 60.0,
                    },
                ),
                TextLine::new(
                    START_PROMPT,
                    40,
                    Anchor::CenteredX {
                        y: SCREEN_HEIGHT * 3.0 / 4.0,
                    },
                ),
            ],
            GamePhase::Playing => vec![TextLine::new(score_text(score), 20, corner)],
            GamePhase::GameOver => vec![
                TextLine::new(RESTART_PROMPT, 20, corner),
                TextLine::new(
                    GAME_OVER,
                    60,
                    Anchor::CenteredX {
                        y: SCREEN_HEIGHT / 2.0 - 60.0,
                    },
                ),
                TextLine::new(
                    score_text(score),
                    40,
                    Anchor::CenteredX {
                        y: SCREEN_HEIGHT / 2.0,
                    },
                ),
            ],
        };
        Self { lines }
    }

    pub fn from_state(state: &GameState) -> Self {
        Self::for_phase(state.phase, state.score)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}
