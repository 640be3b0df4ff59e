//! Difficulty selection
//!
//! Exactly one profile is active per session. Profiles are immutable and
//! picked before the session starts.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// Speed, gravity and scoring constants for this difficulty
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                plane_speed: 6.0,
                base_speed: 5.0,
                gravity: 3.0,
                max_down_speed: 8.0,
                obstacle_frequency: 1.0,
                score_multiplier: 1.0,
                max_speed_increase: 2.0,
            },
            Difficulty::Medium => DifficultyProfile {
                plane_speed: 7.0,
                base_speed: 6.0,
                gravity: 4.0,
                max_down_speed: 9.0,
                obstacle_frequency: 1.5,
                score_multiplier: 1.5,
                max_speed_increase: 3.0,
            },
            Difficulty::Hard => DifficultyProfile {
                plane_speed: 8.0,
                base_speed: 7.0,
                gravity: 4.5,
                max_down_speed: 10.0,
                obstacle_frequency: 1.8,
                score_multiplier: 2.0,
                max_speed_increase: 4.0,
            },
            Difficulty::Extreme => DifficultyProfile {
                plane_speed: 9.0,
                base_speed: 8.0,
                gravity: 5.0,
                max_down_speed: 11.0,
                obstacle_frequency: 2.0,
                score_multiplier: 3.0,
                max_speed_increase: 5.0,
            },
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-difficulty tuning. Speeds are in pixels per 60 Hz frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Upward thrust while up/touch is held
    pub plane_speed: f32,
    /// Obstacle scroll speed at level 1
    pub base_speed: f32,
    /// Fall speed with no input
    pub gravity: f32,
    /// Fall speed while down is held
    pub max_down_speed: f32,
    /// Spawn density; spacing between obstacles is divided by this
    pub obstacle_frequency: f32,
    pub score_multiplier: f32,
    /// Ceiling on the level-driven scroll speed increase
    pub max_speed_increase: f32,
}
