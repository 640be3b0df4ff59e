//! Presentation contract
//!
//! The engine never touches a display surface. Each frame it issues
//! immediate-mode draw calls and fire-and-forget HUD updates through this
//! trait; a thin host adapter turns them into canvas/GPU/terminal output.

use glam::Vec2;

use crate::error::GameError;
use crate::sim::{BurstParticle, Color, EndCause, Rect, ShapeKind, explosion_particles};

pub trait Presenter {
    /// Start a new frame
    fn clear(&mut self, background: Color);

    fn draw_plane(&mut self, bounds: Rect, color: Color);

    /// Draw an obstacle outline. `rotation` is applied around the box center.
    fn draw_shape(&mut self, shape: ShapeKind, bounds: Rect, rotation: f32, color: Color);

    /// Draw a destroy burst; `progress` runs 0..=1
    fn draw_explosion(&mut self, center: Vec2, progress: f32) {
        for particle in explosion_particles(center, progress) {
            self.draw_particle(particle);
        }
    }

    fn draw_particle(&mut self, _particle: BurstParticle) {}

    fn report_score(&mut self, score: u64);
    fn report_level(&mut self, level: u32);
    fn report_obstacles_passed(&mut self, count: u32);
    fn report_high_score(&mut self, score: u64);

    fn report_game_over(&mut self, _final_score: u64, _cause: EndCause) {}

    /// A control event was refused
    fn report_error(&mut self, _error: &GameError) {}
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Plane {
        bounds: Rect,
        color: Color,
    },
    Shape {
        shape: ShapeKind,
        bounds: Rect,
        rotation: f32,
        color: Color,
    },
    Explosion {
        center: Vec2,
        progress: f32,
    },
}

/// Presenter that keeps the last frame and the latest HUD values.
///
/// Backs the tests and the headless runner.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub background: Option<Color>,
    /// Draw calls since the last `clear`
    pub frame: Vec<DrawCall>,
    pub frames_drawn: u64,
    pub score: Option<u64>,
    pub level: Option<u32>,
    pub obstacles_passed: Option<u32>,
    pub high_score: Option<u64>,
    pub game_over: Option<(u64, EndCause)>,
    pub errors: Vec<String>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes_drawn(&self) -> usize {
        self.frame
            .iter()
            .filter(|call| matches!(call, DrawCall::Shape { .. }))
            .count()
    }

    pub fn explosions_drawn(&self) -> usize {
        self.frame
            .iter()
            .filter(|call| matches!(call, DrawCall::Explosion { .. }))
            .count()
    }

    pub fn plane_drawn(&self) -> bool {
        self.frame
            .iter()
            .any(|call| matches!(call, DrawCall::Plane { .. }))
    }
}

impl Presenter for RecordingPresenter {
    fn clear(&mut self, background: Color) {
        self.background = Some(background);
        self.frame.clear();
        self.frames_drawn += 1;
    }

    fn draw_plane(&mut self, bounds: Rect, color: Color) {
        self.frame.push(DrawCall::Plane { bounds, color });
    }

    fn draw_shape(&mut self, shape: ShapeKind, bounds: Rect, rotation: f32, color: Color) {
        self.frame.push(DrawCall::Shape {
            shape,
            bounds,
            rotation,
            color,
        });
    }

    fn draw_explosion(&mut self, center: Vec2, progress: f32) {
        self.frame.push(DrawCall::Explosion { center, progress });
    }

    fn report_score(&mut self, score: u64) {
        self.score = Some(score);
    }

    fn report_level(&mut self, level: u32) {
        self.level = Some(level);
    }

    fn report_obstacles_passed(&mut self, count: u32) {
        self.obstacles_passed = Some(count);
    }

    fn report_high_score(&mut self, score: u64) {
        self.high_score = Some(score);
    }

    fn report_game_over(&mut self, final_score: u64, cause: EndCause) {
        self.game_over = Some((final_score, cause));
    }

    fn report_error(&mut self, error: &GameError) {
        self.errors.push(error.to_string());
    }
}
