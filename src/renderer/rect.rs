//! Draw primitive for the 2D field

use serde::Serialize;

/// RGB color
pub type Color = [u8; 3];

/// What a rectangle depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    TopWall,
    BottomWall,
    RightWall,
    LeftPaddle,
    RightPaddle,
    Ball,
}

/// Axis-aligned filled rectangle in field units, origin at top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub shape: Shape,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

impl Rect {
    pub const fn new(shape: Shape, x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            shape,
            x,
            y,
            w,
            h,
            color,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0, 0, 255];
    pub const WALL: Color = [255, 255, 255];
    pub const PADDLE: Color = [255, 255, 255];
    pub const BALL: Color = [255, 255, 255];
}
