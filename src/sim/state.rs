//! Game state and core simulation types
//!
//! The engine owns all of this exclusively; the presentation layer only ever
//! sees copies handed out through the `Presenter` calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::error::{GameError, Result};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen
    NotStarted,
    /// Active gameplay
    Running,
    /// Session ended; the plane is still drawn
    Over,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    Ceiling,
    Floor,
    Obstacle,
}

impl EndCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndCause::Ceiling => "ceiling",
            EndCause::Floor => "floor",
            EndCause::Obstacle => "obstacle",
        }
    }
}

/// 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }

    /// RGBA floats for GPU-style consumers
    pub fn to_rgba(&self, alpha: f32) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, alpha]
    }
}

/// Display size class, decided by viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Range of obstacle base sizes for the current viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleBounds {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

/// The drawing surface dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(GameError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// 1% of the smaller dimension
    pub fn base_unit(&self) -> f32 {
        self.width.min(self.height) / 100.0
    }

    pub fn device_class(&self) -> DeviceClass {
        if self.width <= 480.0 {
            DeviceClass::Mobile
        } else if self.width <= 768.0 {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Plane (width, height) for this viewport
    pub fn plane_size(&self) -> (f32, f32) {
        let unit = self.base_unit();
        match self.device_class() {
            DeviceClass::Mobile => (unit * 8.0, unit * 4.0),
            DeviceClass::Tablet => (unit * 6.0, unit * 3.0),
            DeviceClass::Desktop => (unit * 4.0, unit * 2.0),
        }
    }

    pub fn obstacle_bounds(&self) -> ObstacleBounds {
        let unit = self.base_unit();
        ObstacleBounds {
            min_width: unit * 3.0,
            max_width: unit * 8.0,
            min_height: unit * 10.0,
            max_height: unit * 20.0,
        }
    }
}

/// The player's plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plane {
    /// Fixed for the whole session
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical speed in px per 60 Hz frame (negative = up)
    pub speed: f32,
}

impl Plane {
    /// Plane at `x`, vertically centered in the viewport
    pub fn new(x: f32, viewport: &Viewport) -> Self {
        let (width, height) = viewport.plane_size();
        Self {
            x,
            y: viewport.height / 2.0,
            width,
            height,
            speed: 0.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn corners(&self) -> [Vec2; 4] {
        self.bounds().corners()
    }
}

/// Obstacle outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Hexagon,
    Circle,
    Pentagon,
    Octagon,
    Star,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::Circle,
        ShapeKind::Pentagon,
        ShapeKind::Octagon,
        ShapeKind::Star,
        ShapeKind::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Circle => "circle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Star => "star",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Side count for the regular polygon shapes
    pub fn polygon_sides(&self) -> Option<u32> {
        match self {
            ShapeKind::Pentagon => Some(5),
            ShapeKind::Hexagon => Some(6),
            ShapeKind::Octagon => Some(8),
            _ => None,
        }
    }
}

/// Per-frame motion of an obstacle, with the state each kind needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Animation {
    /// Pulse the scale factor between 0.8 and 1.2
    Scale { direction: f32 },
    /// Rotate around the center
    Spin { rotation: f32, speed: f32 },
    /// Oscillate vertically around `origin_y`
    Bounce {
        offset: f32,
        speed: f32,
        direction: f32,
        origin_y: f32,
    },
    /// Drift down, wrapping back above the top
    Fall,
    /// Drift up, wrapping back below the bottom
    Rise,
    /// Random sub-pixel shake, resampled every frame
    Jitter { dx: f32, dy: f32 },
}

impl Animation {
    pub fn name(&self) -> &'static str {
        match self {
            Animation::Scale { .. } => "scale",
            Animation::Spin { .. } => "spin",
            Animation::Bounce { .. } => "bounce",
            Animation::Fall => "fall",
            Animation::Rise => "rise",
            Animation::Jitter { .. } => "jitter",
        }
    }

    /// Current rotation (radians); zero unless spinning
    pub fn rotation(&self) -> f32 {
        match self {
            Animation::Spin { rotation, .. } => *rotation,
            _ => 0.0,
        }
    }

    /// Current shake offset; zero unless jittering
    pub fn jitter(&self) -> Vec2 {
        match self {
            Animation::Jitter { dx, dy } => Vec2::new(*dx, *dy),
            _ => Vec2::ZERO,
        }
    }
}

/// A scrolling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// Base size, fixed at creation
    pub width: f32,
    pub height: f32,
    pub shape: ShapeKind,
    pub color: Color,
    pub scale: f32,
    pub animation: Animation,
    /// Set on game over; animation no longer advances
    pub frozen: bool,
    /// Pass bonus already awarded
    pub passed: bool,
    pub destroying: bool,
    pub destroy_frame: u32,
}

impl Obstacle {
    pub fn scaled_width(&self) -> f32 {
        self.width * self.scale
    }

    pub fn scaled_height(&self) -> f32 {
        self.height * self.scale
    }

    /// Drawn/collidable box: scaled size, shifted by the current jitter
    pub fn animated_bounds(&self) -> Rect {
        let jitter = self.animation.jitter();
        Rect::new(
            self.x + jitter.x,
            self.y + jitter.y,
            self.scaled_width(),
            self.scaled_height(),
        )
    }

    pub fn center(&self) -> Vec2 {
        self.animated_bounds().center()
    }

    /// Radius used by the round and polygonal shapes
    pub fn radius(&self) -> f32 {
        self.width.min(self.height) * self.scale / 2.0
    }

    /// Rotation applied to both the drawn and the colliding outline.
    /// Rectangles stay axis-aligned boxes.
    pub fn rotation(&self) -> f32 {
        match self.shape {
            ShapeKind::Rectangle => 0.0,
            _ => self.animation.rotation(),
        }
    }

    /// Fraction of the destroy sequence completed
    pub fn destroy_progress(&self, destroy_frames: u32) -> f32 {
        (self.destroy_frame as f32 / destroy_frames.max(1) as f32).min(1.0)
    }
}

/// Colors for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub plane: Color,
    pub obstacles: [Color; 3],
}

/// Scoring and progression for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Continuous; floored for display and leveling
    pub score: f64,
    pub level: u32,
    pub obstacles_passed: u32,
    pub phase: GamePhase,
    pub end_cause: Option<EndCause>,
    /// Current scroll speed in px per tick
    pub obstacle_speed: f32,
    pub score_multiplier: f32,
    pub pass_points: f32,
}

impl Session {
    pub fn new(obstacle_speed: f32, score_multiplier: f32, pass_points: f32) -> Self {
        Self {
            score: 0.0,
            level: 1,
            obstacles_passed: 0,
            phase: GamePhase::NotStarted,
            end_cause: None,
            obstacle_speed,
            score_multiplier,
            pass_points,
        }
    }

    pub fn floored_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}
