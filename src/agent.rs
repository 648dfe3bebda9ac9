//! The steerable triangle and its per-frame physics.
//!
//! An [`Agent`] is a rigid triangle whose apex (vertex 0) leads in the
//! direction of travel. Each call to [`Agent::update`] integrates velocity
//! and position, turns the base around the apex to face the new velocity,
//! and then applies the speed limit and damping.

use crate::library::*;
use std::f32::consts::PI;
use tracing::trace;

/// Default velocity damping applied every frame
pub const VELOCITY_DAMPING: f32 = 0.9925;
/// Default acceleration damping applied every frame
pub const ACCELERATION_DAMPING: f32 = 0.75;
/// Default per-axis speed limit in simulation units per frame
pub const MAX_SPEED: Vector2 = [2.0, 2.0];
/// Length of the velocity ray per unit of speed
pub const ARROW_SCALE: f32 = 100.0;

/// Apex, base right, base left.
pub type Triangle = [Vector2; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    vertices: Triangle,
    velocity: Vector2,
    acceleration: Vector2,
    velocity_damping: f32,
    acceleration_damping: f32,
    max_speed: Vector2,
}

impl Agent {
    /// Creates an agent at rest with the default damping and speed limit.
    pub fn new(vertices: Triangle) -> Agent {
        Agent::with_params(vertices, VELOCITY_DAMPING, ACCELERATION_DAMPING, MAX_SPEED)
    }

    pub fn with_params(
        vertices: Triangle,
        velocity_damping: f32,
        acceleration_damping: f32,
        max_speed: Vector2,
    ) -> Agent {
        Agent {
            vertices,
            velocity: [0.0, 0.0],
            acceleration: [0.0, 0.0],
            velocity_damping,
            acceleration_damping,
            max_speed,
        }
    }

    pub fn vertices(&self) -> Triangle {
        self.vertices
    }

    pub fn apex(&self) -> Vector2 {
        self.vertices[0]
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Direction of travel measured from the x axis, `0` when at rest.
    pub fn heading(&self) -> f32 {
        get_ox_angle(self.velocity)
    }

    /// Start and end of the velocity indicator drawn from the apex.
    pub fn velocity_ray(&self) -> [Vector2; 2] {
        let apex = self.apex();
        let length = get_magnitude(self.velocity) * ARROW_SCALE;
        [apex, polar_point(apex, length, self.heading())]
    }

    /// Lengths of the edges apex-right, right-left, left-apex.
    pub fn side_lengths(&self) -> [f32; 3] {
        let [a, b, c] = self.vertices;
        [
            get_magnitude(find_vector(a, b)),
            get_magnitude(find_vector(b, c)),
            get_magnitude(find_vector(c, a)),
        ]
    }

    /// Adds a control impulse to the current acceleration.
    pub fn apply_impulse(&mut self, delta: Vector2) {
        self.acceleration = add(self.acceleration, delta);
    }

    /// Turns the base around the apex so the apex points along the velocity.
    pub fn reorient(&mut self) {
        let [apex, right, left] = self.vertices;
        let base_mid = midpoint(right, left);
        let vel_tip = polar_point(apex, ARROW_SCALE * get_magnitude(self.velocity), self.heading());
        let angle = angle_between_points(apex, base_mid, vel_tip);
        // the base trails the apex, so it has to end up opposite the velocity
        let rotation = if angle == 0.0 { 0.0 } else { angle + PI };
        self.vertices[1] = rotate_around_center(apex, right, rotation);
        self.vertices[2] = rotate_around_center(apex, left, rotation);
    }

    /// Advances the agent by one frame.
    pub fn update(&mut self) {
        self.velocity = add(self.velocity, self.acceleration);
        let velocity = self.velocity;
        self.vertices = self.vertices.map(|vertex| translate(vertex, velocity));
        self.reorient();
        self.velocity = clamp(self.velocity, self.max_speed);
        self.velocity = scale(self.velocity, self.velocity_damping);
        self.acceleration = scale(self.acceleration, self.acceleration_damping);
        trace!(apex = ?self.apex(), velocity = ?self.velocity, acceleration = ?self.acceleration, "agent updated");
    }
}
