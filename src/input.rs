//! Boost key handling.
//!
//! The space scene has a single meaningful input: holding the boost key
//! (Space) speeds up the flight, releasing it slows it back down. The speed
//! scalar is read by every motion rule each tick.

use crate::config::SpeedConfig;
use kiss3d::event::{Action, Key, WindowEvent};

/// The key that modulates the flight speed.
pub const BOOST_KEY: Key = Key::Space;

/// The speed scalar, always within `[config.min, config.max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedState {
    value: f32,
    config: SpeedConfig,
}

impl SpeedState {
    /// Creates the scalar at its floor.
    pub fn new(config: SpeedConfig) -> Self {
        SpeedState {
            value: config.min,
            config,
        }
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Saturating increase by one step.
    pub fn press(&mut self) {
        self.value = (self.value + self.config.step).min(self.config.max);
    }

    /// Saturating decrease by one step.
    pub fn release(&mut self) {
        self.value = (self.value - self.config.step).max(self.config.min);
    }
}

impl Default for SpeedState {
    fn default() -> Self {
        SpeedState::new(SpeedConfig::default())
    }
}

/// Turns boost key transitions into speed changes.
///
/// Key-repeat presses delivered while the key is already held are ignored,
/// so one physical press is worth exactly one step up and its release one
/// step down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoostControl {
    held: bool,
}

impl BoostControl {
    /// Creates a control with the key released.
    pub fn new() -> Self {
        BoostControl { held: false }
    }

    /// Whether the boost key is currently held.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Handles a press of the boost key. Returns `true` if the speed changed.
    pub fn key_down(&mut self, speed: &mut SpeedState) -> bool {
        if self.held {
            return false;
        }

        self.held = true;
        let before = speed.value();
        speed.press();
        before != speed.value()
    }

    /// Handles a release of the boost key. Returns `true` if the speed changed.
    pub fn key_up(&mut self, speed: &mut SpeedState) -> bool {
        self.held = false;
        let before = speed.value();
        speed.release();
        before != speed.value()
    }

    /// Feeds a window event; anything but the boost key and focus changes is
    /// ignored.
    ///
    /// Losing focus while the key is held counts as a release, since the
    /// window will not see the real one. Returns `true` if the event was a
    /// boost key transition.
    pub fn handle_event(&mut self, event: &WindowEvent, speed: &mut SpeedState) -> bool {
        match *event {
            WindowEvent::Key(key, Action::Press, _) if key == BOOST_KEY => {
                if self.key_down(speed) {
                    log::trace!("boost on, speed {:.2}", speed.value());
                }
                true
            }
            WindowEvent::Key(key, Action::Release, _) if key == BOOST_KEY => {
                if self.key_up(speed) {
                    log::trace!("boost off, speed {:.2}", speed.value());
                }
                true
            }
            WindowEvent::Focus(false) if self.held => {
                self.key_up(speed);
                log::trace!("focus lost, boost off, speed {:.2}", speed.value());
                true
            }
            _ => false,
        }
    }
}
