pub mod agent;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod simulation;

pub mod library {
    use crate::error::{Error, Result};
    use std::f32::consts::{PI, TAU};

    /// A point or direction in simulation space, `[x, y]`.
    pub type Vector2 = [f32; 2];

    pub fn dot(vec1: Vector2, vec2: Vector2) -> f32 {
        vec1[0] * vec2[0] + vec1[1] * vec2[1]
    }

    pub fn get_magnitude(vec: Vector2) -> f32 {
        (vec[0].powf(2.0) + vec[1].powf(2.0)).sqrt()
    }

    /// Unit vector in the direction of `vec`. The zero vector maps to itself.
    pub fn normalize(vec: Vector2) -> Vector2 {
        let mag = get_magnitude(vec);
        if mag == 0.0 {
            return [0.0, 0.0];
        }
        [vec[0] / mag, vec[1] / mag]
    }

    /// Like [`normalize`], but refuses the zero vector.
    pub fn try_normalize(vec: Vector2) -> Result<Vector2> {
        if get_magnitude(vec) == 0.0 {
            return Err(Error::ZeroMagnitude);
        }
        Ok(normalize(vec))
    }

    pub fn find_vector(x: Vector2, y: Vector2) -> Vector2 {
        [y[0] - x[0], y[1] - x[1]]
    }

    pub fn midpoint(a: Vector2, b: Vector2) -> Vector2 {
        [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
    }

    pub fn add(vec1: Vector2, vec2: Vector2) -> Vector2 {
        [vec1[0] + vec2[0], vec1[1] + vec2[1]]
    }

    pub fn scale(vec: Vector2, alpha: f32) -> Vector2 {
        [alpha * vec[0], alpha * vec[1]]
    }

    /// Angle of `vec` measured counter-clockwise from the positive x axis, in `[0, 2π)`.
    ///
    /// The zero vector has no direction and reports `0`.
    pub fn get_ox_angle(vec: Vector2) -> f32 {
        let mag = get_magnitude(vec);
        if mag == 0.0 {
            return 0.0;
        }
        let base = (vec[0] / mag).clamp(-1.0, 1.0).acos();
        if vec[1] < 0.0 {
            let angle = TAU - base;
            // acos near 0 can round the result up to a full turn
            if angle >= TAU { 0.0 } else { angle }
        } else {
            base
        }
    }

    /// Signed angle turning `vec1` onto `vec2`, in `(-π, π]`.
    ///
    /// Returns `0` when either vector has zero length.
    pub fn angle_between(vec1: Vector2, vec2: Vector2) -> f32 {
        if get_magnitude(vec1) == 0.0 || get_magnitude(vec2) == 0.0 {
            return 0.0;
        }
        let angle1 = vec1[1].atan2(vec1[0]);
        let angle2 = vec2[1].atan2(vec2[0]);
        let mut angle = angle2 - angle1;
        if angle > PI {
            angle -= TAU;
        } else if angle <= -PI {
            angle += TAU;
        }
        angle
    }

    /// Angle at `origin` between the rays towards `p2` and `p3`.
    pub fn angle_between_points(origin: Vector2, p2: Vector2, p3: Vector2) -> f32 {
        angle_between(find_vector(origin, p2), find_vector(origin, p3))
    }

    /// Clips each axis of `vec` to `[-|limit|, |limit|]` independently.
    ///
    /// A NaN limit leaves its axis unclipped.
    pub fn clamp(vec: Vector2, limit: Vector2) -> Vector2 {
        let clip = |value: f32, bound: f32| value.max(-bound.abs()).min(bound.abs());
        [clip(vec[0], limit[0]), clip(vec[1], limit[1])]
    }

    /// Rotates `p` counter-clockwise by `theta` radians around `center`.
    pub fn rotate_around_center(center: Vector2, p: Vector2, theta: f32) -> Vector2 {
        let relative = find_vector(center, p);
        translate(rotate(relative, theta), center)
    }

    /// Multiplies `p` by the row-major matrix `[a11, a12, a21, a22]`.
    pub fn apply_2d_transform(p: Vector2, matrix: [f32; 4]) -> Vector2 {
        let [x, y] = p;
        let [a11, a12, a21, a22] = matrix;
        [a11 * x + a12 * y, a21 * x + a22 * y]
    }

    pub fn rotate(p: Vector2, theta: f32) -> Vector2 {
        let (sin, cos) = theta.sin_cos();
        apply_2d_transform(p, [cos, -sin, sin, cos])
    }

    pub fn translate(p: Vector2, translation: Vector2) -> Vector2 {
        add(p, translation)
    }

    /// End point of a segment of `length` leaving `origin` at angle `theta`.
    pub fn polar_point(origin: Vector2, length: f32, theta: f32) -> Vector2 {
        translate(rotate([length, 0.0], theta), origin)
    }

    /// Isosceles triangle placed by its centroid, pointing along `theta + π/2`.
    ///
    /// Vertex 0 is the apex, vertices 1 and 2 the base.
    pub fn polar_triangle(center: Vector2, base_length: f32, height: f32, theta: f32) -> [Vector2; 3] {
        let apex = [0.0, (2.0 / 3.0) * height];
        let right = [base_length / 2.0, -(1.0 / 3.0) * height];
        let left = [-base_length / 2.0, -(1.0 / 3.0) * height];
        [apex, right, left].map(|p| translate(rotate(p, theta), center))
    }

}
