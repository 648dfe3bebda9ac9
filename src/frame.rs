//! Mapping between simulation space and screen pixels.

use crate::library::{Vector2, add};

/// Screen position of the simulation origin. Simulation y grows upwards,
/// screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    pub offset: Vector2,
}

impl CoordinateFrame {
    pub fn new(offset: Vector2) -> CoordinateFrame {
        CoordinateFrame { offset }
    }

    /// Frame with the origin in the middle of a `width` x `height` surface.
    pub fn centered(width: u32, height: u32) -> CoordinateFrame {
        CoordinateFrame::new([width as f32 / 2.0, height as f32 / 2.0])
    }

    pub fn to_screen(&self, p: Vector2) -> Vector2 {
        add([p[0], -p[1]], self.offset)
    }
}

/// Screen-space grid segments spaced `size` pixels apart and aligned to the
/// frame origin. A non-positive size yields no lines.
pub fn grid_lines(frame: &CoordinateFrame, width: u32, height: u32, size: f32) -> Vec<[Vector2; 2]> {
    let mut lines = Vec::new();
    if size.is_nan() || size <= 0.0 {
        return lines;
    }
    let (w, h) = (width as f32, height as f32);

    let mut x = frame.offset[0].rem_euclid(size);
    while x <= w {
        lines.push([[x, 0.0], [x, h]]);
        x += size;
    }
    let mut y = frame.offset[1].rem_euclid(size);
    while y <= h {
        lines.push([[0.0, y], [w, y]]);
        y += size;
    }
    lines
}
