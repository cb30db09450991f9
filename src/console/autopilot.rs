//! Headless console that answers every prompt with a random key.
//!
//! Used by the balance simulator. The autopilot has no idea what the frame
//! asks for, so it models an unskilled player: a random key from a small pool
//! after a random reaction delay.

use super::{Console, Key, KeyRead, ManualClock};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const KEY_POOL: &[Key] = &[
    Key::Char('1'),
    Key::Char('2'),
    Key::Char('3'),
    Key::Char('a'),
    Key::Char('b'),
    Key::Char('s'),
    Key::Char('d'),
    Key::Char('z'),
    Key::Char(' '),
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Enter,
];

#[derive(Debug)]
pub struct AutoPilot {
    clock: ManualClock,
    rng: StdRng,
    min_delay_ms: u64,
    max_delay_ms: u64,
    pending: Option<(Duration, Key)>,
    frames_rendered: u64,
}

impl AutoPilot {
    pub fn new(clock: ManualClock, seed: u64) -> Self {
        Self {
            clock,
            rng: StdRng::seed_from_u64(seed),
            min_delay_ms: 120,
            max_delay_ms: 900,
            pending: None,
            frames_rendered: 0,
        }
    }

    /// Narrow or widen the simulated reaction delay.
    pub fn with_delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_delay_ms = min_ms.min(max_ms);
        self.max_delay_ms = max_ms.max(min_ms);
        self
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn next_press(&mut self) -> (Duration, Key) {
        let delay = Duration::from_millis(
            self.rng
                .gen_range(self.min_delay_ms..=self.max_delay_ms),
        );
        let key = *KEY_POOL.choose(&mut self.rng).unwrap_or(&Key::Enter);
        (delay, key)
    }
}

impl Console for AutoPilot {
    fn render_frame(&mut self, _lines: &[String]) {
        self.frames_rendered += 1;
    }

    fn read_key(&mut self, timeout: Duration) -> KeyRead {
        let (delay, key) = match self.pending.take() {
            Some(p) => p,
            None => self.next_press(),
        };
        if delay <= timeout {
            self.clock.advance(delay);
            KeyRead::Key(key)
        } else {
            self.clock.advance(timeout);
            self.pending = Some((delay - timeout, key));
            KeyRead::Timeout
        }
    }

    fn hold(&mut self, duration: Duration) {
        self.pending = None;
        self.clock.advance(duration);
    }

    fn pause(&mut self, _duration: Duration) {}
}
