//! Tick scheduling.
//!
//! The motion rules are expressed per tick. A [`TickSource`] decides how many
//! ticks to run for each rendered frame, which keeps the update context
//! independent of the display refresh rate and drivable without a window.

use web_time::{Duration, Instant};

/// Something that tells the main loop how many fixed ticks are due.
pub trait TickSource {
    /// Number of ticks to run before the next frame is drawn.
    fn ticks_due(&mut self) -> u32;
}

/// Converts wall-clock time into fixed-length ticks.
///
/// Leftover time below one tick is carried to the next frame. After a long
/// stall (window dragged, debugger break) at most `max_catch_up` ticks are
/// reported and the rest of the backlog is dropped.
#[derive(Clone, Debug)]
pub struct FixedStepClock {
    step: Duration,
    max_catch_up: u32,
    last: Option<Instant>,
    backlog: Duration,
}

impl FixedStepClock {
    /// Default number of ticks a single frame may catch up.
    pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

    /// Creates a clock producing `ticks_per_second` ticks.
    pub fn new(ticks_per_second: u32) -> Self {
        FixedStepClock {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
            last: None,
            backlog: Duration::ZERO,
        }
    }

    /// Sets the catch-up limit.
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Length of one tick.
    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feeds the time elapsed since the previous frame.
    ///
    /// This is what [`TickSource::ticks_due`] uses with the real clock; it is
    /// exposed so the accumulation can be driven with synthetic durations.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.backlog += elapsed;

        let mut due = 0;
        while self.backlog >= self.step {
            self.backlog -= self.step;
            due += 1;

            if due == self.max_catch_up {
                if self.backlog >= self.step {
                    log::debug!("dropping {:?} of simulation backlog", self.backlog);
                }
                self.backlog = Duration::ZERO;
                break;
            }
        }

        due
    }
}

impl TickSource for FixedStepClock {
    fn ticks_due(&mut self) -> u32 {
        let now = Instant::now();
        match self.last.replace(now) {
            // The first frame always runs one tick so the scene moves immediately.
            None => 1,
            Some(prev) => self.advance(now.duration_since(prev)),
        }
    }
}

/// A tick source driven by hand, for headless runs and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualTicks {
    pending: u32,
}

impl ManualTicks {
    /// Creates a source with no ticks queued.
    pub fn new() -> Self {
        ManualTicks { pending: 0 }
    }

    /// Queues `n` more ticks.
    pub fn queue(&mut self, n: u32) {
        self.pending = self.pending.saturating_add(n);
    }
}

impl TickSource for ManualTicks {
    fn ticks_due(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}
