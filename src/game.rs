//! Loop driver
//!
//! Each frame runs input sampling, then the simulation step, then rendering.
//! Frames are paced by sleeping until the configured interval has elapsed.

use crate::platform::{Platform, PlatformError};
use crate::renderer;
use crate::settings::GameConfig;
use crate::sim::{self, GameState};

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Quit request or Escape
    Quit,
    /// Ball left the field
    GameOver,
}

/// Game instance holding the session config and state
pub struct Game {
    config: GameConfig,
    state: GameState,
    frames: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            frames: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Block until at least one frame interval has passed since the last
    /// step, then return the current tick
    fn wait_for_frame(&self, platform: &mut impl Platform) -> u64 {
        let target = self.state.ticks_count + self.config.frame_interval_ms;
        while platform.ticks() < target {
            platform.sleep_until(target);
        }
        platform.ticks()
    }

    /// Run a single frame. Returns `None` while the game keeps running.
    pub fn frame(
        &mut self,
        platform: &mut impl Platform,
    ) -> Result<Option<ExitReason>, PlatformError> {
        let input = platform.poll_input()?;
        if input.wants_quit() {
            self.state.running = false;
            log::info!("Quit requested");
            return Ok(Some(ExitReason::Quit));
        }

        let ticks = self.wait_for_frame(platform);
        let report = sim::advance(&mut self.state, &self.config, &input.to_tick_input(ticks));
        self.frames += 1;

        platform.present(&renderer::compose(&self.state, &self.config))?;

        if report.game_over {
            log::info!(
                "Game over after {} frames, ball at ({:.1}, {:.1})",
                self.frames,
                self.state.ball.pos.x,
                self.state.ball.pos.y
            );
            return Ok(Some(ExitReason::GameOver));
        }
        Ok(None)
    }

    /// Run frames until the game stops, then release the platform
    pub fn run_loop(&mut self, platform: &mut impl Platform) -> Result<ExitReason, PlatformError> {
        log::info!(
            "Starting {} game ({} cascade)",
            if self.config.multiplayer { "two-paddle" } else { "single-player" },
            self.config.cascade.as_str()
        );

        let result = loop {
            match self.frame(platform) {
                Ok(Some(reason)) => break Ok(reason),
                Ok(None) => {}
                Err(e) => break Err(e),
            }
        };

        self.shutdown(platform)?;
        result
    }

    pub fn shutdown(&mut self, platform: &mut impl Platform) -> Result<(), PlatformError> {
        self.state.running = false;
        platform.shutdown()
    }
}
