//! Terminal backend built on crossterm
//!
//! Field units are scaled onto the terminal grid; each cell is painted with
//! a background color. Key state comes from press/release events when the
//! terminal reports them, otherwise from a short latch after each press.

use std::collections::HashMap;
use std::io::{self, Stdout, Write, stdout};
use std::ops::Range;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor},
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};

use super::{Platform, PlatformError};
use crate::input::{GameKey, InputSnapshot, KeyBindings};
use crate::renderer::{Color, Frame};

/// How long a press counts as held when the terminal sends no release events
pub const HOLD_LATCH: Duration = Duration::from_millis(250);

/// Crossterm-backed platform
pub struct TerminalPlatform {
    out: Stdout,
    start: Instant,
    bindings: KeyBindings,
    /// Last press/repeat time per held key
    held: HashMap<GameKey, Instant>,
    /// Terminal reports key releases
    release_events: bool,
    quit_requested: bool,
    cols: u16,
    rows: u16,
    active: bool,
}

impl TerminalPlatform {
    /// Enter raw mode and the alternate screen
    pub fn init(bindings: KeyBindings) -> Result<Self, PlatformError> {
        enable_raw_mode().map_err(PlatformError::unavailable("raw mode"))?;

        let mut platform = Self {
            out: stdout(),
            start: Instant::now(),
            bindings,
            held: HashMap::new(),
            release_events: false,
            quit_requested: false,
            cols: 0,
            rows: 0,
            active: true,
        };

        // From here on Drop restores the terminal if a later step fails.
        execute!(platform.out, EnterAlternateScreen, Hide)
            .map_err(PlatformError::unavailable("alternate screen"))?;

        let (cols, rows) = terminal::size().map_err(PlatformError::unavailable("terminal size"))?;
        platform.cols = cols;
        platform.rows = rows;

        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                platform.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .map_err(PlatformError::unavailable("keyboard enhancement"))?;
            platform.release_events = true;
        }

        log::info!(
            "Terminal {}x{}, key release events: {}",
            cols,
            rows,
            platform.release_events
        );
        Ok(platform)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit_requested = true;
            return;
        }

        let game_key = match key.code {
            KeyCode::Esc => Some(GameKey::Quit),
            KeyCode::Up => Some(GameKey::LeftUp),
            KeyCode::Down => Some(GameKey::LeftDown),
            KeyCode::Char(c) => self.bindings.lookup(c),
            _ => None,
        };
        let Some(game_key) = game_key else {
            return;
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(game_key, Instant::now());
            }
            KeyEventKind::Release => {
                self.held.remove(&game_key);
            }
        }
    }

    fn is_held(&self, key: GameKey, now: Instant) -> bool {
        match self.held.get(&key) {
            Some(_) if self.release_events => true,
            Some(pressed) => now.duration_since(*pressed) < HOLD_LATCH,
            None => false,
        }
    }
}

impl Platform for TerminalPlatform {
    fn ticks(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_until(&mut self, target: u64) {
        let now = self.ticks();
        if target > now {
            sleep(Duration::from_millis(target - now));
        }
    }

    fn poll_input(&mut self) -> Result<InputSnapshot, PlatformError> {
        while event::poll(Duration::ZERO).map_err(PlatformError::Input)? {
            match event::read().map_err(PlatformError::Input)? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(cols, rows) => {
                    self.cols = cols;
                    self.rows = rows;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        Ok(InputSnapshot::from_held(
            |key| self.is_held(key, now),
            self.quit_requested,
        ))
    }

    fn present(&mut self, frame: &Frame) -> Result<(), PlatformError> {
        let cells = rasterize(frame, self.cols as usize, self.rows as usize);
        draw_cells(&mut self.out, &cells, self.cols as usize).map_err(PlatformError::Draw)
    }

    fn shutdown(&mut self) -> Result<(), PlatformError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        if self.release_events {
            execute!(self.out, PopKeyboardEnhancementFlags).map_err(PlatformError::Draw)?;
        }
        execute!(self.out, ResetColor, LeaveAlternateScreen, Show).map_err(PlatformError::Draw)?;
        disable_raw_mode().map_err(PlatformError::Draw)?;
        log::info!("Terminal restored");
        Ok(())
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Cells covered by `[start, end)` in field units along one axis
fn cell_span(start: f32, end: f32, extent: f32, cells: usize) -> Range<usize> {
    if cells == 0 || end <= 0.0 || start >= extent {
        return 0..0;
    }
    let scale = extent / cells as f32;
    let lo = ((start / scale).floor().max(0.0) as usize).min(cells - 1);
    let hi = ((end / scale).ceil() as usize).clamp(lo + 1, cells);
    lo..hi
}

/// Paint a frame onto a `cols` x `rows` grid, row-major
pub fn rasterize(frame: &Frame, cols: usize, rows: usize) -> Vec<Color> {
    let mut cells = vec![frame.clear; cols * rows];
    for rect in &frame.rects {
        let xs = cell_span(rect.x, rect.right(), frame.width, cols);
        let ys = cell_span(rect.y, rect.bottom(), frame.height, rows);
        for row in ys {
            for col in xs.clone() {
                cells[row * cols + col] = rect.color;
            }
        }
    }
    cells
}

fn draw_cells(out: &mut impl Write, cells: &[Color], cols: usize) -> io::Result<()> {
    if cols == 0 {
        return Ok(());
    }
    for (row, line) in cells.chunks(cols).enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        // Emit runs of equal color with a single color change each.
        let mut col = 0;
        while col < line.len() {
            let color = line[col];
            let run = line[col..].iter().take_while(|c| **c == color).count();
            queue!(
                out,
                SetBackgroundColor(TermColor::Rgb {
                    r: color[0],
                    g: color[1],
                    b: color[2],
                }),
                Print(" ".repeat(run))
            )?;
            col += run;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}
