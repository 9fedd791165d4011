//! Scoped mouse capture
//!
//! Capture is enabled when the guard is created and released when it is
//! dropped, including on early returns and panics that unwind.

use std::io::{self, Write};

use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    pub fn enable() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture);
        let _ = stdout.flush();
    }
}
