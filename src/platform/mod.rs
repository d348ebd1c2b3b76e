//! Platform abstraction layer
//!
//! The loop driver only sees this trait:
//! - Time/ticks
//! - Input sampling
//! - Presenting a composed frame

pub mod terminal;

pub use terminal::TerminalPlatform;

use std::io;

use thiserror::Error;

use crate::input::InputSnapshot;
use crate::renderer::Frame;

#[derive(Debug, Error)]
pub enum PlatformError {
    /// Startup failed; the game cannot run in this environment
    #[error("environment unavailable ({context}): {source}")]
    Unavailable {
        context: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),
}

impl PlatformError {
    pub fn unavailable(context: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| PlatformError::Unavailable { context, source }
    }
}

/// Windowing/input/clock services consumed by the game loop
pub trait Platform {
    /// Milliseconds since the platform was initialized
    fn ticks(&self) -> u64;

    /// Block until `ticks()` reaches `target`
    fn sleep_until(&mut self, target: u64);

    /// Sample input for this frame
    fn poll_input(&mut self) -> Result<InputSnapshot, PlatformError>;

    /// Draw and present one frame
    fn present(&mut self, frame: &Frame) -> Result<(), PlatformError>;

    /// Release platform resources; must be safe to call more than once
    fn shutdown(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unavailable_keeps_source() {
        let err = PlatformError::unavailable("raw mode")(io::Error::other("no tty"));
        assert_eq!(err.to_string(), "environment unavailable (raw mode): no tty");
        assert_eq!(err.source().unwrap().to_string(), "no tty");
    }
}
