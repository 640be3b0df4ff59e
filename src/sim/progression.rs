//! Score accrual, leveling and level-driven difficulty scaling

use super::state::{Color, Palette};
use crate::settings::DifficultyProfile;
use crate::tuning::Tuning;

/// Level schemes; levels past the end reuse the last entry
pub static LEVEL_PALETTES: [Palette; 10] = [
    palette(0x1a1a2e, 0xffffff, [0xff6b6b, 0x4ecdc4, 0xffe66d]),
    palette(0x2c3e50, 0x2ecc71, [0xe74c3c, 0xf1c40f, 0xecf0f1]),
    palette(0x8e44ad, 0xf1c40f, [0x2ecc71, 0xecf0f1, 0xe74c3c]),
    palette(0x2d3436, 0x55efc4, [0xffeaa7, 0xff7675, 0x74b9ff]),
    palette(0x273c75, 0xffd32a, [0xe84118, 0x7bed9f, 0x70a1ff]),
    palette(0x6c5ce7, 0x00cec9, [0xffeaa7, 0xff7675, 0xdfe6e9]),
    palette(0xd63031, 0x81ecec, [0xffeaa7, 0xdfe6e9, 0x6c5ce7]),
    palette(0x0c2461, 0xff7f50, [0x7bed9f, 0xecf0f1, 0xff6b6b]),
    palette(0x2c3e50, 0xf39c12, [0xe74c3c, 0x3498db, 0x2ecc71]),
    palette(0x1e272e, 0xffa502, [0xff6b6b, 0x2ecc71, 0x74b9ff]),
];

const fn palette(background: u32, plane: u32, obstacles: [u32; 3]) -> Palette {
    Palette {
        background: Color(background),
        plane: Color(plane),
        obstacles: [Color(obstacles[0]), Color(obstacles[1]), Color(obstacles[2])],
    }
}

pub fn palette_for_level(level: u32) -> &'static Palette {
    let index = (level.max(1) as usize - 1).min(LEVEL_PALETTES.len() - 1);
    &LEVEL_PALETTES[index]
}

/// `floor(floor(score) / points_per_level) + 1`
pub fn level_for_score(score: f64, points_per_level: u32) -> u32 {
    let floored = score.max(0.0).floor() as u64;
    (floored / points_per_level.max(1) as u64) as u32 + 1
}

/// Difficulty multiplier grown by the per-level step
pub fn score_multiplier(profile: &DifficultyProfile, level: u32, tuning: &Tuning) -> f32 {
    profile.score_multiplier * (1.0 + (level.max(1) - 1) as f32 * tuning.level_multiplier_step)
}

pub fn pass_points(level: u32, tuning: &Tuning) -> f32 {
    tuning.pass_points_per_level * level.max(1) as f32
}

/// Base speed plus a per-level increase, capped by the difficulty ceiling
pub fn obstacle_speed(profile: &DifficultyProfile, level: u32, tuning: &Tuning) -> f32 {
    let increase =
        ((level.max(1) - 1) as f32 * tuning.level_speed_step).min(profile.max_speed_increase);
    profile.base_speed + increase
}

/// Time-based score for one tick, normalized to a 60 Hz frame
pub fn time_score(base_rate: f32, multiplier: f32, dt: f32) -> f64 {
    base_rate as f64 * multiplier as f64 * dt as f64 * 60.0
}

/// Size factor applied to new obstacles at `level`
pub fn obstacle_growth(level: u32, tuning: &Tuning) -> f32 {
    1.0 + (level.max(1) - 1) as f32 * tuning.obstacle_growth_per_level
}
