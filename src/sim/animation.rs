//! Per-frame obstacle animation and the destroy sequence

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::state::{Animation, Obstacle, Viewport};
use crate::consts::*;

/// Advance one frame of an obstacle's animation.
///
/// Destroying and frozen obstacles are left untouched.
pub fn animate<R: Rng>(obstacle: &mut Obstacle, viewport: &Viewport, rng: &mut R) {
    if obstacle.destroying || obstacle.frozen {
        return;
    }

    match &mut obstacle.animation {
        Animation::Scale { direction } => {
            let next = obstacle.scale + SCALE_STEP * *direction;
            if next >= SCALE_MAX {
                obstacle.scale = SCALE_MAX;
                *direction = -1.0;
            } else if next <= SCALE_MIN {
                obstacle.scale = SCALE_MIN;
                *direction = 1.0;
            } else {
                obstacle.scale = next;
            }
        }
        Animation::Spin { rotation, speed } => {
            *rotation += *speed;
            if *rotation > TAU {
                *rotation -= TAU;
            }
        }
        Animation::Bounce {
            offset,
            speed,
            direction,
            origin_y,
        } => {
            *offset += *speed * *direction;
            if offset.abs() > BOUNCE_AMPLITUDE {
                *direction = -*direction;
            }
            obstacle.y = *origin_y + *offset;
        }
        Animation::Fall => {
            obstacle.y += DRIFT_SPEED;
            if obstacle.y > viewport.height {
                obstacle.y = -obstacle.height;
            }
        }
        Animation::Rise => {
            obstacle.y -= DRIFT_SPEED;
            if obstacle.y + obstacle.height < 0.0 {
                obstacle.y = viewport.height;
            }
        }
        Animation::Jitter { dx, dy } => {
            *dx = rng.random_range(-JITTER_AMPLITUDE..JITTER_AMPLITUDE);
            *dy = rng.random_range(-JITTER_AMPLITUDE..JITTER_AMPLITUDE);
        }
    }
}

/// Step the destroy counter. Returns true once the obstacle should be removed.
pub fn advance_destroy(obstacle: &mut Obstacle, destroy_frames: u32) -> bool {
    obstacle.destroy_frame += 1;
    obstacle.destroy_frame > destroy_frames
}

/// One particle of the explosion burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParticle {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// Radial burst of `EXPLOSION_PARTICLES` evenly spaced particles.
///
/// Spread grows and size/alpha shrink linearly with `progress` (0..=1).
pub fn explosion_particles(center: Vec2, progress: f32) -> Vec<BurstParticle> {
    let progress = progress.clamp(0.0, 1.0);
    let radius = EXPLOSION_RADIUS * progress;
    (0..EXPLOSION_PARTICLES)
        .map(|i| {
            let angle = TAU / EXPLOSION_PARTICLES as f32 * i as f32;
            BurstParticle {
                pos: center + Vec2::new(angle.cos(), angle.sin()) * radius,
                size: EXPLOSION_PARTICLE_SIZE * (1.0 - progress),
                alpha: 1.0 - progress,
            }
        })
        .collect()
}
