//! Frame composition
//!
//! Decides what is on screen for a given state. Actually putting pixels (or
//! terminal cells) anywhere is the platform's job.

pub mod rect;
pub mod shapes;

pub use rect::{Color, Rect, Shape, colors};

use crate::settings::GameConfig;
use crate::sim::GameState;

/// Everything drawn for one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Field size the rectangles are expressed in
    pub width: f32,
    pub height: f32,
    pub clear: Color,
    pub rects: Vec<Rect>,
}

impl Frame {
    pub fn count(&self, shape: Shape) -> usize {
        self.rects.iter().filter(|r| r.shape == shape).count()
    }

    pub fn find(&self, shape: Shape) -> Option<&Rect> {
        self.rects.iter().find(|r| r.shape == shape)
    }
}

/// Build the draw list for the current state
pub fn compose(state: &GameState, config: &GameConfig) -> Frame {
    let mut rects = Vec::with_capacity(6);

    rects.push(shapes::top_wall(config));
    rects.push(shapes::bottom_wall(config));
    if !state.multiplayer {
        rects.push(shapes::right_wall(config));
    }

    for paddle in state.paddles() {
        rects.push(shapes::paddle(paddle, config));
    }

    rects.push(shapes::ball(state.ball.pos, config));

    Frame {
        width: config.field_width,
        height: config.field_height,
        clear: colors::BACKGROUND,
        rects,
    }
}
