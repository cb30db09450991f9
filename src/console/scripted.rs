//! Deterministic console double driven by a queue of timed key presses.
//!
//! Each scripted press carries a delay measured from the start of the read
//! that consumes it, or from the start of the next hold for presses queued
//! with [`ScriptedConsole::press_in_hold`]. Reading advances the shared
//! [`ManualClock`], so gameplay windows behave exactly as they would in real
//! time without sleeping.

use super::{Clock, Console, Key, KeyRead, ManualClock};
use std::collections::VecDeque;
use std::time::Duration;

/// Delay applied by [`ScriptedConsole::press`].
pub const DEFAULT_PRESS_DELAY_MS: u64 = 100;

/// Reads past the end of the script before the double gives up. Guards
/// against tests that would otherwise poll a menu forever.
const MAX_EXHAUSTED_READS: u32 = 10_000;

#[derive(Debug, Clone, Copy)]
struct ScriptedKey {
    delay: Duration,
    key: Key,
    /// Timed from the start of the next hold rather than the next read.
    in_hold: bool,
}

#[derive(Debug)]
pub struct ScriptedConsole {
    clock: ManualClock,
    script: VecDeque<ScriptedKey>,
    frames: Vec<Vec<String>>,
    paused: Duration,
    exhausted_reads: u32,
    discarded: usize,
}

impl ScriptedConsole {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            script: VecDeque::new(),
            frames: Vec::new(),
            paused: Duration::ZERO,
            exhausted_reads: 0,
            discarded: 0,
        }
    }

    /// Queue a key pressed shortly after the read begins.
    pub fn press(self, key: Key) -> Self {
        self.press_after(DEFAULT_PRESS_DELAY_MS, key)
    }

    /// Queue a key pressed `delay_ms` after the read begins.
    pub fn press_after(mut self, delay_ms: u64, key: Key) -> Self {
        self.push(Duration::from_millis(delay_ms), key);
        self
    }

    /// Queue a key pressed `delay_ms` into the next hold. If the hold is
    /// longer than that the key is discarded; otherwise it carries over into
    /// the following read.
    pub fn press_in_hold(mut self, delay_ms: u64, key: Key) -> Self {
        self.script.push_back(ScriptedKey {
            delay: Duration::from_millis(delay_ms),
            key,
            in_hold: true,
        });
        self
    }

    pub fn push(&mut self, delay: Duration, key: Key) {
        self.script.push_back(ScriptedKey {
            delay,
            key,
            in_hold: false,
        });
    }

    /// Presses swallowed by holds so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Scripted presses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(|f| f.as_slice())
    }

    /// Total cosmetic pause time requested (never advances the clock).
    pub fn paused(&self) -> Duration {
        self.paused
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }
}

impl Console for ScriptedConsole {
    fn render_frame(&mut self, lines: &[String]) {
        self.frames.push(lines.to_vec());
    }

    fn read_key(&mut self, timeout: Duration) -> KeyRead {
        match self.script.front_mut() {
            Some(next) if next.delay <= timeout => {
                let delay = next.delay;
                let key = next.key;
                self.script.pop_front();
                self.clock.advance(delay);
                KeyRead::Key(key)
            }
            Some(next) => {
                // The press lands in a later read.
                next.delay -= timeout;
                self.clock.advance(timeout);
                KeyRead::Timeout
            }
            None => {
                self.exhausted_reads += 1;
                if self.exhausted_reads > MAX_EXHAUSTED_READS {
                    panic!(
                        "scripted console ran out of input at t={:?}",
                        self.clock.now()
                    );
                }
                self.clock.advance(timeout);
                KeyRead::Timeout
            }
        }
    }

    fn hold(&mut self, duration: Duration) {
        while let Some(next) = self.script.front_mut() {
            if !next.in_hold {
                break;
            }
            if next.delay <= duration {
                self.script.pop_front();
                self.discarded += 1;
            } else {
                next.delay -= duration;
                next.in_hold = false;
                break;
            }
        }
        self.clock.advance(duration);
    }

    fn pause(&mut self, duration: Duration) {
        self.paused += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_returns_key_and_advances_clock() {
        let clock = ManualClock::new();
        let mut console = ScriptedConsole::new(clock.clone()).press_after(300, Key::Char('a'));

        let read = console.read_key(Duration::from_secs(1));
        assert_eq!(read, KeyRead::Key(Key::Char('a')));
        assert_eq!(clock.now(), Duration::from_millis(300));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_late_press_times_out_then_arrives() {
        let clock = ManualClock::new();
        let mut console = ScriptedConsole::new(clock.clone()).press_after(1500, Key::Enter);

        assert_eq!(console.read_key(Duration::from_secs(1)), KeyRead::Timeout);
        assert_eq!(clock.now(), Duration::from_secs(1));
        assert_eq!(console.remaining(), 1);

        assert_eq!(
            console.read_key(Duration::from_secs(1)),
            KeyRead::Key(Key::Enter)
        );
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_empty_script_times_out() {
        let clock = ManualClock::new();
        let mut console = ScriptedConsole::new(clock.clone());
        assert_eq!(console.read_key(Duration::from_millis(200)), KeyRead::Timeout);
        assert_eq!(clock.now(), Duration::from_millis(200));
    }

    #[test]
    fn test_pause_does_not_advance_clock() {
        let clock = ManualClock::new();
        let mut console = ScriptedConsole::new(clock.clone());
        console.pause(Duration::from_secs(3));
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(console.paused(), Duration::from_secs(3));
    }

    #[test]
    fn test_hold_advances_clock() {
        let clock = ManualClock::new();
        let mut console = ScriptedConsole::new(clock.clone());
        console.hold(Duration::from_millis(800));
        assert_eq!(clock.now(), Duration::from_millis(800));
    }

    #[test]
    fn test_hold_discards_presses_inside_it() {
        let clock = ManualClock::new();
        let mut console = ScriptedConsole::new(clock.clone())
            .press_in_hold(200, Key::Char('a'))
            .press_in_hold(700, Key::Char('b'))
            .press_in_hold(1200, Key::Char('c'));
        console.hold(Duration::from_millis(800));
        assert_eq!(console.discarded(), 2);
        assert_eq!(console.remaining(), 1);

        // 'c' lands 400ms into the read that follows the hold.
        assert_eq!(
            console.read_key(Duration::from_secs(1)),
            KeyRead::Key(Key::Char('c'))
        );
        assert_eq!(clock.now(), Duration::from_millis(1200));
    }

    #[test]
    fn test_hold_keeps_ordinary_presses() {
        let mut console = ScriptedConsole::new(ManualClock::new()).press(Key::Enter);
        console.hold(Duration::from_secs(2));
        assert_eq!(console.remaining(), 1);
        assert_eq!(
            console.read_key(Duration::from_secs(1)),
            KeyRead::Key(Key::Enter)
        );
    }

    #[test]
    fn test_frames_recorded() {
        let mut console = ScriptedConsole::new(ManualClock::new());
        console.render_frame(&["hello".to_string()]);
        console.render_frame(&["world".to_string()]);
        assert_eq!(console.frames().len(), 2);
        assert_eq!(console.last_frame().unwrap()[0], "world");
    }
}
