//! Simulation engine
//!
//! All gameplay logic lives here. Nothing in this module touches a display
//! surface or the wall clock directly:
//! - Time arrives through the injected `Clock` or an explicit `dt`
//! - Randomness comes from a seeded RNG
//! - Output goes through the `Presenter` trait

pub mod animation;
pub mod collision;
pub mod engine;
pub mod geometry;
pub mod progression;
pub mod spawn;
pub mod state;

pub use animation::{BurstParticle, advance_destroy, animate, explosion_particles};
pub use collision::{Outline, find_collision, obstacle_hits_plane};
pub use engine::{Engine, EngineOptions};
pub use geometry::{
    Rect, circle_contains, diamond_vertices, point_in_polygon, point_in_triangle,
    regular_polygon_vertices, rotate_about, star_vertices,
};
pub use progression::{level_for_score, palette_for_level};
pub use spawn::create_obstacle;
pub use state::{
    Animation, Color, EndCause, GamePhase, Obstacle, Palette, Plane, Session, ShapeKind, Viewport,
};
