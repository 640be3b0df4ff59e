//! Plane-versus-obstacle collision detection
//!
//! Narrow phase samples the plane's four corners against the obstacle's
//! animated outline (rectangles use a box overlap instead). Thin slivers of a
//! shape can slip between corners; that approximation is part of the game's
//! balance and is kept on purpose.

use glam::Vec2;

use super::geometry::{
    Rect, circle_contains, diamond_vertices, point_in_polygon, point_in_triangle,
    regular_polygon_vertices, rotate_about, star_vertices,
};
use super::state::{Obstacle, Plane, ShapeKind};
use crate::consts::STAR_POINTS;

/// Collision geometry of an obstacle at its current animation frame
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Box(Rect),
    Triangle([Vec2; 3]),
    Polygon(Vec<Vec2>),
    Circle { center: Vec2, radius: f32 },
}

impl Outline {
    /// Build the outline from the obstacle's animated center, scale and rotation
    pub fn of(obstacle: &Obstacle) -> Self {
        let bounds = obstacle.animated_bounds();
        let center = bounds.center();
        let radius = obstacle.radius();
        let rotation = obstacle.rotation();

        match obstacle.shape {
            ShapeKind::Rectangle => Outline::Box(bounds),
            ShapeKind::Triangle => {
                let mut vertices = [
                    Vec2::new(bounds.x, bounds.bottom()),
                    Vec2::new(bounds.right(), bounds.bottom()),
                    Vec2::new(center.x, bounds.y),
                ];
                rotate_about(&mut vertices, center, rotation);
                Outline::Triangle(vertices)
            }
            ShapeKind::Hexagon | ShapeKind::Pentagon | ShapeKind::Octagon => {
                let sides = obstacle.shape.polygon_sides().unwrap_or(6);
                Outline::Polygon(regular_polygon_vertices(center, radius, sides, rotation))
            }
            ShapeKind::Circle => Outline::Circle { center, radius },
            ShapeKind::Star => Outline::Polygon(star_vertices(
                center,
                radius,
                radius / 2.0,
                STAR_POINTS,
                rotation,
            )),
            ShapeKind::Diamond => {
                let mut vertices = diamond_vertices(&bounds);
                rotate_about(&mut vertices, center, rotation);
                Outline::Polygon(vertices.to_vec())
            }
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Outline::Box(rect) => {
                point.x >= rect.x
                    && point.x <= rect.right()
                    && point.y >= rect.y
                    && point.y <= rect.bottom()
            }
            Outline::Triangle([a, b, c]) => point_in_triangle(point, *a, *b, *c),
            Outline::Polygon(vertices) => point_in_polygon(point, vertices),
            Outline::Circle { center, radius } => circle_contains(point, *center, *radius),
        }
    }

    /// Box overlap for rectangles, corner sampling for everything else
    pub fn hits(&self, plane: &Rect) -> bool {
        match self {
            Outline::Box(rect) => rect.overlaps(plane),
            _ => plane.corners().iter().any(|&corner| self.contains(corner)),
        }
    }
}

/// Cheap horizontal rejection before building any outline
pub fn in_horizontal_range(obstacle: &Obstacle, plane: &Plane) -> bool {
    let bounds = obstacle.animated_bounds();
    bounds.right() >= plane.x && bounds.x <= plane.x + plane.width
}

/// Whether the plane currently touches this obstacle.
///
/// Obstacles in their destroy sequence never collide.
pub fn obstacle_hits_plane(obstacle: &Obstacle, plane: &Plane) -> bool {
    if obstacle.destroying || !in_horizontal_range(obstacle, plane) {
        return false;
    }
    Outline::of(obstacle).hits(&plane.bounds())
}

/// First obstacle the plane collides with, in spawn order
pub fn find_collision<'a>(obstacles: &'a [Obstacle], plane: &Plane) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| obstacle_hits_plane(o, plane))
}
