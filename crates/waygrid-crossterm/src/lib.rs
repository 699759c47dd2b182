//! Crossterm terminal display for waygrid.
//!
//! Provides a [`TerminalSink`] that implements
//! [`waygrid_search::ProgressSink`], drawing each grid snapshot with one
//! coloured glyph per cell and the status line underneath. Pressing `q`,
//! `Esc` or `Ctrl-C` while a search runs trips the attached
//! [`CancelToken`].

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use waygrid_core::{CellState, Grid, Node};
use waygrid_search::{CancelToken, ProgressSink};

/// Foreground and background colours for a cell state.
fn cell_colors(state: CellState) -> (Color, Color) {
    match state {
        CellState::Empty => (Color::DarkGrey, Color::Reset),
        CellState::Wall => (Color::Grey, Color::DarkGrey),
        CellState::Start => (Color::Black, Color::Green),
        CellState::Target => (Color::Black, Color::Red),
        CellState::Frontier => (Color::Yellow, Color::Reset),
        CellState::Explored => (Color::Blue, Color::Reset),
        CellState::Path => (Color::Magenta, Color::Reset),
        CellState::DynamicWall => (Color::White, Color::DarkRed),
    }
}

/// Whether a key press asks to stop the running search.
fn is_cancel_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// A terminal progress display using crossterm.
///
/// The terminal is switched to raw mode and the alternate screen on
/// [`init`](TerminalSink::init) and restored on [`close`](TerminalSink::close)
/// or drop. Drawing errors are logged and otherwise ignored so that a broken
/// terminal never aborts a search.
pub struct TerminalSink {
    out: Stdout,
    cancel: Option<CancelToken>,
    active: bool,
}

impl TerminalSink {
    /// Create a sink. The terminal is left untouched until
    /// [`init`](TerminalSink::init).
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            cancel: None,
            active: false,
        }
    }

    /// Trip `token` when a cancel key is pressed.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Draw `grid` at the top-left corner, with `status` below it.
    pub fn draw(&mut self, grid: &Grid, status: &str) -> io::Result<()> {
        for row in 0..grid.rows() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for col in 0..grid.cols() {
                let state = grid[Node::new(row, col)];
                let (fg, bg) = cell_colors(state);
                queue!(
                    self.out,
                    SetForegroundColor(fg),
                    SetBackgroundColor(bg),
                    Print(state.glyph()),
                    ResetColor,
                    Print(' ')
                )?;
            }
        }
        queue!(
            self.out,
            cursor::MoveTo(0, grid.rows() as u16 + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush()
    }

    /// Drain pending input without blocking, tripping the cancel token on
    /// a cancel key.
    pub fn poll_keys(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if is_cancel_key(&key) {
                log::info!("cancel requested from keyboard");
                if let Some(token) = &self.cancel {
                    token.cancel();
                }
            }
        }
        Ok(())
    }

    /// Block until any key is pressed.
    pub fn wait_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        self.close();
    }
}

impl ProgressSink for TerminalSink {
    fn report(&mut self, grid: &Grid, status: &str) {
        if !self.active {
            return;
        }
        if let Err(e) = self.draw(grid, status) {
            log::warn!("terminal draw failed: {e}");
        }
        if let Err(e) = self.poll_keys() {
            log::warn!("terminal input failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn cancel_keys() {
        assert!(is_cancel_key(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_cancel_key(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_cancel_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_cancel_key(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_cancel_key(&press(KeyCode::Enter, KeyModifiers::NONE)));

        let mut release = press(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!is_cancel_key(&release));
    }

    #[test]
    fn states_are_distinguishable() {
        for (i, a) in CellState::ALL.iter().enumerate() {
            for b in &CellState::ALL[i + 1..] {
                assert_ne!(cell_colors(*a), cell_colors(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn inactive_sink_ignores_reports() {
        // Never initialised, so reporting must not touch the terminal.
        let mut sink = TerminalSink::new();
        sink.report(&Grid::new(2, 2), "idle");
        sink.close();
    }
}
