//! Keyboard input handling
//!
//! Turns held-key state into paddle direction signals. The platform layer
//! decides what "held" means; this module only maps keys to intent.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Quit,
}

/// Character bindings for the game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: char,
    pub left_down: char,
    pub right_up: char,
    pub right_down: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: 'w',
            left_down: 's',
            right_up: 'i',
            right_down: 'k',
        }
    }
}

impl KeyBindings {
    /// Look up a character key (case-insensitive). Escape is mapped by the
    /// platform layer since it has no character.
    pub fn lookup(&self, c: char) -> Option<GameKey> {
        let c = c.to_ascii_lowercase();
        if c == self.left_up {
            Some(GameKey::LeftUp)
        } else if c == self.left_down {
            Some(GameKey::LeftDown)
        } else if c == self.right_up {
            Some(GameKey::RightUp)
        } else if c == self.right_down {
            Some(GameKey::RightDown)
        } else {
            None
        }
    }
}

/// Direction from an opposing key pair: up is -1, down is +1, both or
/// neither cancel out
pub fn axis(up: bool, down: bool) -> i8 {
    let mut dir = 0;
    if up {
        dir -= 1;
    }
    if down {
        dir += 1;
    }
    dir
}

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Window close / Ctrl-C
    pub quit_requested: bool,
    /// Escape held
    pub escape: bool,
    pub left_dir: i8,
    pub right_dir: i8,
}

impl InputSnapshot {
    /// Build a snapshot from a "is this key held" query
    pub fn from_held(held: impl Fn(GameKey) -> bool, quit_requested: bool) -> Self {
        Self {
            quit_requested,
            escape: held(GameKey::Quit),
            left_dir: axis(held(GameKey::LeftUp), held(GameKey::LeftDown)),
            right_dir: axis(held(GameKey::RightUp), held(GameKey::RightDown)),
        }
    }

    /// Quit request and Escape both end the game
    pub fn wants_quit(&self) -> bool {
        self.quit_requested || self.escape
    }

    pub fn to_tick_input(&self, ticks: u64) -> TickInput {
        TickInput {
            left_dir: self.left_dir,
            right_dir: self.right_dir,
            ticks,
        }
    }
}
