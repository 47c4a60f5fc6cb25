//! Shape generation for 2D primitives
//!
//! Everything here works in CSS pixels; the pipeline maps to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors, rgb};
use crate::garage::{HullShape, ShipDesign};
use crate::sim::{GameState, PipePair, Ship};

const STAR_SEGMENTS: u32 = 8;

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Top and bottom pipe, the bottom one running to the viewport floor
pub fn pipe_pair(pipe: &PipePair, floor: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(12);
    vertices.extend(rect(pipe.x, 0.0, pipe.width, pipe.top_height, colors::PIPE));
    vertices.extend(rect(
        pipe.x,
        pipe.bottom_y,
        pipe.width,
        (floor - pipe.bottom_y).max(0.0),
        colors::PIPE,
    ));
    vertices
}

/// Accent triangle in hull-local units (half extents), nose along +x
fn accent(shape: HullShape) -> [Vec2; 3] {
    match shape {
        HullShape::Interceptor => [Vec2::new(0.6, 0.0), Vec2::new(-0.2, -0.25), Vec2::new(-0.2, 0.25)],
        HullShape::Cruiser => [Vec2::new(0.3, 0.0), Vec2::new(-0.4, -0.45), Vec2::new(-0.4, 0.45)],
        HullShape::Scout => [Vec2::new(0.4, 0.0), Vec2::new(0.0, -0.3), Vec2::new(0.0, 0.3)],
        HullShape::Dreadnought => [Vec2::new(0.2, 0.0), Vec2::new(-0.8, -0.7), Vec2::new(-0.8, 0.7)],
        HullShape::Vanguard => [Vec2::new(0.7, 0.0), Vec2::new(-0.5, -0.15), Vec2::new(-0.5, 0.15)],
    }
}

/// The ship: a four-point dart rotated about its centre, with an accent in
/// the design's secondary color
pub fn ship(ship: &Ship, design: &ShipDesign) -> Vec<Vertex> {
    let half = Vec2::new(ship.width / 2.0, ship.height / 2.0);
    let center = Vec2::new(ship.x, ship.y) + half;
    let rot = Vec2::from_angle(ship.rotation);
    let place = |local: Vec2| center + rot.rotate(local * half);

    let nose = place(Vec2::new(1.0, 0.0));
    let top = place(Vec2::new(-1.0, -1.0));
    let notch = place(Vec2::new(-0.5, 0.0));
    let bottom = place(Vec2::new(-1.0, 1.0));

    let hull = rgb(design.primary_color, 1.0);
    let trim = rgb(design.secondary_color, 1.0);

    let mut vertices = Vec::with_capacity(9);
    for p in [nose, top, notch, nose, notch, bottom] {
        vertices.push(Vertex::new(p.x, p.y, hull));
    }
    for p in accent(design.shape) {
        let p = place(p);
        vertices.push(Vertex::new(p.x, p.y, trim));
    }
    vertices
}

/// Full frame: stars always, pipes and the ship only during a run
pub fn scene(state: &GameState, design: &ShipDesign) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        state.stars.len() * (STAR_SEGMENTS as usize * 3) + state.pipes.len() * 12 + 9,
    );

    for star in &state.stars {
        let color = [colors::STAR[0], colors::STAR[1], colors::STAR[2], star.opacity];
        vertices.extend(circle(
            Vec2::new(star.x, star.y),
            star.size,
            color,
            STAR_SEGMENTS,
        ));
    }

    if state.is_playing() {
        for pipe in &state.pipes {
            vertices.extend(pipe_pair(pipe, state.viewport.height));
        }
        vertices.extend(ship(&state.ship, design));
    }

    vertices
}
