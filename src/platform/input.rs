//! Inbound control events from the host's input layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// One input event; each maps onto a game state transition or a control hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    DifficultySelected(String),
    StartRequested,
    ResetRequested,
    Directional { direction: Direction, pressed: bool },
    TouchActive(bool),
}

/// Held control state, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub touch: bool,
}

impl Controls {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
        }
    }

    /// Plane vertical speed for this tick: thrust beats dive beats gravity
    pub fn plane_speed(&self, thrust: f32, dive: f32, gravity: f32) -> f32 {
        if self.up || self.touch {
            -thrust
        } else if self.down {
            dive
        } else {
            gravity
        }
    }
}
