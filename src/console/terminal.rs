//! Crossterm-backed console that draws frames with ratatui.

use super::{Console, Key, KeyRead};
use crate::ui::encounter_scene::render_encounter_frame;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Owns the terminal for the lifetime of an encounter. Raw mode and the
/// alternate screen are restored on drop.
pub struct TerminalConsole {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    skip_animations: bool,
}

impl TerminalConsole {
    pub fn new(skip_animations: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            skip_animations,
        })
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = self.terminal.backend_mut().execute(LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    }
}

impl Console for TerminalConsole {
    fn render_frame(&mut self, lines: &[String]) {
        let result = self.terminal.draw(|frame| {
            let area = frame.size();
            render_encounter_frame(frame, area, lines);
        });
        if let Err(e) = result {
            tracing::warn!(error = %e, "frame write failed");
        }
    }

    fn read_key(&mut self, timeout: Duration) -> KeyRead {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return KeyRead::Timeout;
            }
            match event::poll(remaining) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        return KeyRead::Key(map_key(key.code));
                    }
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "key read failed");
                        return KeyRead::Timeout;
                    }
                },
                Ok(false) => return KeyRead::Timeout,
                Err(e) => {
                    tracing::warn!(error = %e, "key poll failed");
                    return KeyRead::Timeout;
                }
            }
        }
    }

    fn hold(&mut self, duration: Duration) {
        // Drain anything typed during the hold so it can't answer the next prompt.
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match event::poll(remaining) {
                Ok(true) => {
                    let _ = event::read();
                }
                Ok(false) => break,
                Err(_) => {
                    std::thread::sleep(remaining);
                    break;
                }
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        if !self.skip_animations {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Char('x')), Key::Char('x'));
        assert_eq!(map_key(KeyCode::Up), Key::Up);
        assert_eq!(map_key(KeyCode::Enter), Key::Enter);
        assert_eq!(map_key(KeyCode::F(1)), Key::Other);
    }
}
