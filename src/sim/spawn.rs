//! Procedural obstacle creation

use rand::Rng;

use super::progression::obstacle_growth;
use super::state::{Animation, Obstacle, Palette, ShapeKind, Viewport};
use crate::consts::*;
use crate::tuning::Tuning;

/// Vertical placement band for a new obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Top,
    Middle,
    Bottom,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Middle, Lane::Bottom];

    /// Top edge y for an obstacle of `height`
    pub fn y(&self, viewport: &Viewport, height: f32) -> f32 {
        match self {
            Lane::Top => 0.0,
            Lane::Middle => (viewport.height - height) / 2.0,
            Lane::Bottom => viewport.height - height,
        }
    }
}

/// Uniformly pick one of the six animation kinds with fresh state
pub fn random_animation<R: Rng>(rng: &mut R, y: f32) -> Animation {
    match rng.random_range(0..6) {
        0 => Animation::Scale { direction: 1.0 },
        1 => Animation::Spin {
            rotation: 0.0,
            speed: rng.random_range(SPIN_SPEED_MIN..SPIN_SPEED_MAX),
        },
        2 => Animation::Bounce {
            offset: 0.0,
            speed: rng.random_range(BOUNCE_SPEED_MIN..BOUNCE_SPEED_MAX),
            direction: 1.0,
            origin_y: y,
        },
        3 => Animation::Fall,
        4 => Animation::Rise,
        _ => Animation::Jitter { dx: 0.0, dy: 0.0 },
    }
}

/// Build a new obstacle at the right edge of the viewport
pub fn create_obstacle<R: Rng>(
    rng: &mut R,
    id: u32,
    level: u32,
    viewport: &Viewport,
    palette: &Palette,
    tuning: &Tuning,
) -> Obstacle {
    let shape = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
    let color = palette.obstacles[rng.random_range(0..palette.obstacles.len())];

    let bounds = viewport.obstacle_bounds();
    let growth = obstacle_growth(level, tuning);
    let width = sample(rng, bounds.min_width, bounds.max_width) * growth;
    let height = sample(rng, bounds.min_height, bounds.max_height) * growth;

    let lane = Lane::ALL[rng.random_range(0..Lane::ALL.len())];
    let y = lane.y(viewport, height);
    let animation = random_animation(rng, y);

    log::debug!(
        "Spawned {} #{} ({:.0}x{:.0}, {:?}, {})",
        shape.as_str(),
        id,
        width,
        height,
        lane,
        animation.name()
    );

    Obstacle {
        id,
        x: viewport.width,
        y,
        width,
        height,
        shape,
        color,
        scale: 1.0,
        animation,
        frozen: false,
        passed: false,
        destroying: false,
        destroy_frame: 0,
    }
}

/// Uniform in [min, max); tolerates an empty range
fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
