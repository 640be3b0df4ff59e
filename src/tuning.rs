//! Data-driven game balance
//!
//! Difficulty-independent constants for scoring, spawning and timing. Any
//! subset of fields can be overridden from JSON; missing fields keep their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Points per 60 Hz frame before multipliers
    pub base_score_rate: f32,
    /// Pass bonus per level (bonus = this * level)
    pub pass_points_per_level: f32,
    /// Added to the score multiplier for each level above 1
    pub level_multiplier_step: f32,
    /// Floored score needed per level
    pub points_per_level: u32,
    /// Horizontal gap between spawns at obstacle frequency 1.0 (px)
    pub spawn_spacing: f32,
    /// Frames an obstacle spends exploding before removal
    pub destroy_frames: u32,
    /// Scroll speed added per level, before the difficulty ceiling
    pub level_speed_step: f32,
    /// Obstacle size growth per level (fraction of base size)
    pub obstacle_growth_per_level: f32,
    /// Largest integration step accepted from the clock (seconds)
    pub max_frame_dt: f32,
    /// Fixed horizontal plane position (px)
    pub plane_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_score_rate: 0.02,
            pass_points_per_level: 2.0,
            level_multiplier_step: 0.5,
            points_per_level: 100,
            spawn_spacing: 300.0,
            destroy_frames: 20,
            level_speed_step: 0.3,
            obstacle_growth_per_level: 0.1,
            max_frame_dt: 0.1,
            plane_x: 100.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
