//! Plane Dodge - a side-scrolling shape-dodging game
//!
//! Core modules:
//! - `sim`: Simulation engine (obstacles, animation, collisions, scoring, game loop)
//! - `platform`: Clock, input events and the presentation contract
//! - `persistence`: High score storage backends
//! - `settings`: Difficulty profiles
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use highscores::HighScore;
pub use settings::{Difficulty, DifficultyProfile};
pub use tuning::Tuning;

/// Animation and effect constants (per 60 Hz frame)
pub mod consts {
    /// Scale pulse step and range
    pub const SCALE_STEP: f32 = 0.01;
    pub const SCALE_MIN: f32 = 0.8;
    pub const SCALE_MAX: f32 = 1.2;

    /// Spin speed range (radians per frame)
    pub const SPIN_SPEED_MIN: f32 = 0.01;
    pub const SPIN_SPEED_MAX: f32 = 0.06;

    /// Bounce speed range (px per frame) and turnaround offset
    pub const BOUNCE_SPEED_MIN: f32 = 0.2;
    pub const BOUNCE_SPEED_MAX: f32 = 1.0;
    pub const BOUNCE_AMPLITUDE: f32 = 30.0;

    /// Fall/rise speed (px per frame)
    pub const DRIFT_SPEED: f32 = 2.0;

    /// Jitter offsets are drawn from (-A, A)
    pub const JITTER_AMPLITUDE: f32 = 3.0;

    /// Star shape tips
    pub const STAR_POINTS: u32 = 5;

    /// Explosion burst
    pub const EXPLOSION_PARTICLES: usize = 20;
    pub const EXPLOSION_RADIUS: f32 = 30.0;
    pub const EXPLOSION_PARTICLE_SIZE: f32 = 3.0;

    /// Frame rate that per-frame speeds are expressed in
    pub const REFERENCE_FPS: f32 = 60.0;
}
