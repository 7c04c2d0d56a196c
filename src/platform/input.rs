//! Input sources

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Polled once per frame. Presses are not buffered between polls.
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Lets the autopilot drive every frame
#[derive(Debug, Default, Clone, Copy)]
pub struct AutopilotInput;

impl InputSource for AutopilotInput {
    fn poll(&mut self) -> TickInput {
        TickInput {
            autopilot: true,
            ..Default::default()
        }
    }
}

/// Replays a fixed list of inputs, then reports nothing held
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_in_order() {
        let mut input = ScriptedInput::new(vec![
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                ..Default::default()
            },
        ]);
        assert!(input.poll().left);
        assert!(input.poll().right);
        assert_eq!(input.remaining(), 0);
        let idle = input.poll();
        assert!(!idle.left && !idle.right && !idle.confirm);
    }
}
