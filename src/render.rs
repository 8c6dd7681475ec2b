//! Board output: plain text frames for stdout and a full-screen live view

use crate::grid::{CellState, Grid};
use crate::terminal::Terminal;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Text rendering of one board: one line per row, every cell followed by a space,
/// `.` for OFF and `1` for ON, then a blank line.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() * 2 + 1) * grid.height() + 1);
    for row in grid.rows() {
        for &cell in row {
            match cell {
                CellState::Off => out.push('.'),
                CellState::On => out.push_str(&cell.value().to_string()),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Something that shows successive generations
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;

    /// Wait out the step interval. Returns `false` if the viewer asked to stop.
    fn wait(&mut self, interval: Duration) -> io::Result<bool> {
        if !interval.is_zero() {
            thread::sleep(interval);
        }
        Ok(true)
    }
}

/// Prints text frames to any writer
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid, _generation: u64) -> io::Result<()> {
        self.out.write_all(render_text(grid).as_bytes())?;
        self.out.flush()
    }
}

const MIN_INTERVAL: Duration = Duration::from_millis(50);
const MAX_INTERVAL: Duration = Duration::from_secs(10);
const KEY_POLL: Duration = Duration::from_millis(50);

pub const LIVE_HELP: &str = "space pause  +/- speed  q quit";

/// Interactive state for the live view
#[derive(Debug, Clone, PartialEq)]
pub struct LiveControls {
    pub interval: Duration,
    pub paused: bool,
}

impl LiveControls {
    pub fn new(interval: Duration) -> Self {
        Self { interval, paused: false }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.interval = (self.interval / 2).max(MIN_INTERVAL);
            }
            KeyCode::Char('-') => {
                self.interval = (self.interval * 2).clamp(MIN_INTERVAL, MAX_INTERVAL);
            }
            _ => {}
        }
        false
    }
}

/// Full-screen view in the terminal's alternate screen
pub struct ScreenRenderer {
    term: Terminal,
    draw_char: char,
    controls: Option<LiveControls>,
}

impl ScreenRenderer {
    pub fn new(draw_char: char) -> io::Result<Self> {
        Ok(Self {
            term: Terminal::new()?,
            draw_char,
            controls: None,
        })
    }

    fn draw_status(&mut self, grid: &Grid, generation: u64) {
        let (_, h) = self.term.size();
        let paused = self.controls.as_ref().is_some_and(|c| c.paused);
        let status = format!(
            "gen {}  pop {}  {}x{}{}  |  {}",
            generation,
            grid.population(),
            grid.width(),
            grid.height(),
            if paused { "  [paused]" } else { "" },
            LIVE_HELP,
        );
        self.term.set_str(0, h as i32 - 1, &status, Some(Color::DarkGrey), false);
    }
}

impl Renderer for ScreenRenderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        self.term.refresh_size()?;
        self.term.clear();
        for (y, row) in grid.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                // two columns per cell keeps the board roughly square
                let (ch, fg, bold) = match cell {
                    CellState::On => (self.draw_char, Some(Color::Green), true),
                    CellState::Off => ('.', Some(Color::DarkGrey), false),
                };
                self.term.set(x as i32 * 2, y as i32, ch, fg, bold);
            }
        }
        self.draw_status(grid, generation);
        self.term.present()
    }

    fn wait(&mut self, interval: Duration) -> io::Result<bool> {
        let controls = self.controls.get_or_insert_with(|| LiveControls::new(interval));
        let start = Instant::now();
        loop {
            let remaining = controls.interval.saturating_sub(start.elapsed());
            if remaining.is_zero() && !controls.paused {
                return Ok(true);
            }
            let timeout = if controls.paused { KEY_POLL } else { remaining.min(KEY_POLL) };
            if let Some(code) = self.term.wait_key(timeout)? {
                if controls.handle_key(code) {
                    return Ok(false);
                }
            }
        }
    }
}
