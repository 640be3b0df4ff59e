//! Point containment tests and shape outline generators
//!
//! Screen space: x grows right, y grows down. All functions are pure.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.x, self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Even-odd ray casting over an implicitly closed vertex list
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = match vertices.len() {
        0 => return false,
        n => n - 1,
    };
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > point.y) != (vj.y > point.y) {
            let cross_x = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Barycentric test; degenerate triangles never contain anything
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let double_area = -b.y * c.x + a.y * (c.x - b.x) + a.x * (b.y - c.y) + b.x * c.y;
    if double_area.abs() <= f32::EPSILON {
        return false;
    }
    let inv = 1.0 / double_area;
    let s = inv * (a.y * c.x - a.x * c.y + (c.y - a.y) * p.x + (a.x - c.x) * p.y);
    let t = inv * (a.x * b.y - a.y * b.x + (a.y - b.y) * p.x + (b.x - a.x) * p.y);
    s >= 0.0 && t >= 0.0 && (1.0 - s - t) >= 0.0
}

#[inline]
pub fn circle_contains(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// Rotate `points` by `rotation` radians around `center`
pub fn rotate_about(points: &mut [Vec2], center: Vec2, rotation: f32) {
    if rotation == 0.0 {
        return;
    }
    let turn = Vec2::from_angle(rotation);
    for p in points.iter_mut() {
        *p = center + turn.rotate(*p - center);
    }
}

/// Vertex i sits at angle `rotation + i * 2π / sides`
pub fn regular_polygon_vertices(center: Vec2, radius: f32, sides: u32, rotation: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = rotation + i as f32 * TAU / sides as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// `2 * points` vertices alternating outer/inner radius, starting outer
pub fn star_vertices(
    center: Vec2,
    outer_radius: f32,
    inner_radius: f32,
    points: u32,
    rotation: f32,
) -> Vec<Vec2> {
    (0..points * 2)
        .map(|i| {
            let angle = rotation + i as f32 * PI / points as f32;
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            center + Vec2::new(angle.cos(), angle.sin()) * r
        })
        .collect()
}

/// Top, right, bottom, left edge midpoints
pub fn diamond_vertices(bounds: &Rect) -> [Vec2; 4] {
    let c = bounds.center();
    [
        Vec2::new(c.x, bounds.y),
        Vec2::new(bounds.right(), c.y),
        Vec2::new(c.x, bounds.bottom()),
        Vec2::new(bounds.x, c.y),
    ]
}
