//! Terminal renderer built on crossterm.
//!
//! Each cell is two columns wide. The first frame paints the whole grid;
//! later frames repaint only the cells whose category changed.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use crate::display::DisplayCategory;
use crate::error::{LifeError, Result};
use crate::scheduler::{Frame, Renderer};
use crate::viewport::Viewport;

/// Terminal columns used to draw one cell.
pub const CELL_COLUMNS: u16 = 2;

/// Rows kept free below the grid for the status line.
pub const STATUS_ROWS: u16 = 1;

/// Glyph and colour for a category. `None` draws with the terminal's default colour.
fn style(category: DisplayCategory) -> (&'static str, Option<Color>) {
    match category {
        DisplayCategory::Dead => ("  ", None),
        DisplayCategory::Dying => ("░░", Some(Color::DarkRed)),
        DisplayCategory::Alive => ("██", Some(Color::White)),
        DisplayCategory::Born => ("▓▓", Some(Color::Green)),
    }
}

fn render_error(e: io::Error) -> LifeError {
    LifeError::Render(e.to_string())
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Viewport that makes the grid fill a `cols` x `rows` terminal, leaving room for the status line.
///
/// Every cell counts as `cell_size_px` pixels on each side, so sizing the
/// result with the same cell size yields one grid cell per `CELL_COLUMNS`
/// terminal columns.
pub fn viewport_for_size(cols: u16, rows: u16, cell_size_px: u32) -> Viewport {
    let grid_cols = u32::from(cols / CELL_COLUMNS);
    let grid_rows = u32::from(rows.saturating_sub(STATUS_ROWS));
    Viewport::new(
        grid_cols.saturating_mul(cell_size_px),
        grid_rows.saturating_mul(cell_size_px),
    )
}

/// Viewport matching the attached terminal, or `None` when there is no terminal to measure.
pub fn terminal_viewport(cell_size_px: u32) -> Option<Viewport> {
    let (cols, rows) = terminal::size().ok()?;
    Some(viewport_for_size(cols, rows, cell_size_px))
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Row just below the grid, set by `begin`.
    status_row: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer { out, status_row: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn queue_cell(&mut self, cols: usize, index: usize, category: DisplayCategory) -> Result<()> {
        let (row, col) = (index / cols, index % cols);
        let (glyph, colour) = style(category);
        queue!(
            self.out,
            MoveTo(to_u16(col).saturating_mul(CELL_COLUMNS), to_u16(row))
        )
        .map_err(render_error)?;
        let drawn = match colour {
            Some(colour) => queue!(self.out, SetForegroundColor(colour), Print(glyph)),
            None => queue!(self.out, ResetColor, Print(glyph)),
        };
        drawn.map_err(render_error)
    }

    fn queue_status(&mut self, frame: &Frame<'_>) -> Result<()> {
        queue!(
            self.out,
            ResetColor,
            MoveTo(0, self.status_row),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "generation {}  population {}",
                frame.generation,
                frame.grid.population()
            ))
        )
        .map_err(render_error)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.status_row = to_u16(frame.grid.rows());
        queue!(self.out, Hide, Clear(ClearType::All)).map_err(render_error)?;
        let cols = frame.grid.cols();
        for (index, &category) in frame.display.categories().iter().enumerate() {
            self.queue_cell(cols, index, category)?;
        }
        self.queue_status(frame)?;
        self.out.flush().map_err(render_error)
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        let cols = frame.grid.cols();
        for &index in frame.changed {
            if let Some(category) = frame.display.get(index) {
                self.queue_cell(cols, index, category)?;
            }
        }
        self.queue_status(frame)?;
        self.out.flush().map_err(render_error)
    }

    fn finish(&mut self) -> Result<()> {
        execute!(
            self.out,
            ResetColor,
            MoveTo(0, self.status_row.saturating_add(STATUS_ROWS)),
            Show
        )
        .map_err(render_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::Grid;
    use crate::display::DisplayMap;

    const HIDE_CURSOR: &str = "\x1b[?25l";
    const SHOW_CURSOR: &str = "\x1b[?25h";
    const CLEAR_ALL: &str = "\x1b[2J";

    #[test]
    fn test_begin_paints_every_cell() {
        let mut grid = Grid::new(2, 3);
        grid.set(4, true);
        let display = DisplayMap::new(&grid);
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer
            .begin(&Frame {
                generation: 0,
                grid: &grid,
                display: &display,
                changed: &[],
                transitions: &[],
            })
            .unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with(HIDE_CURSOR));
        assert!(out.contains(CLEAR_ALL));
        assert_eq!(out.matches("██").count(), 1);
        // Row 1, column 1 is drawn at terminal column 2 (1-based: 3).
        assert!(out.contains("\x1b[2;3H"));
        // Status line sits on the row below the grid.
        assert!(out.contains("\x1b[3;1H"));
        assert!(out.contains("generation 0  population 1"));
    }

    #[test]
    fn test_render_paints_only_changed() {
        let mut grid = Grid::new(5, 5);
        for i in [11, 12, 13] {
            grid.set(i, true);
        }
        let mut display = DisplayMap::new(&grid);
        let next = grid.next_generation();
        let changed = display.apply(&next.transitions);
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer
            .render(&Frame {
                generation: 1,
                grid: &next.grid,
                display: &display,
                changed: &changed,
                transitions: &next.transitions,
            })
            .unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.matches("▓▓").count(), 2);
        assert_eq!(out.matches("░░").count(), 2);
        assert_eq!(out.matches("██").count(), 0);
        assert!(out.contains("generation 1  population 3"));
    }

    #[test]
    fn test_finish_restores_cursor() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.finish().unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_viewport_fits_terminal() {
        let viewport = viewport_for_size(80, 24, 10);
        assert_eq!(viewport.grid_dimensions(10).unwrap(), (23, 40));

        // Odd widths drop the half cell at the right edge.
        let viewport = viewport_for_size(81, 24, 3);
        assert_eq!(viewport.grid_dimensions(3).unwrap(), (23, 40));
    }

    #[test]
    fn test_viewport_for_tiny_terminal_is_empty() {
        let viewport = viewport_for_size(1, 1, 10);
        assert!(viewport.grid_dimensions(10).is_err());
    }

    /// Accepts `limit` bytes, then fails like a closed pipe.
    struct BrokenPipe {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            let n = buf.len().min(self.limit - self.written.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_render_error() {
        let grid = Grid::new(4, 4);
        let display = DisplayMap::new(&grid);
        let mut renderer = TerminalRenderer::new(BrokenPipe {
            written: Vec::new(),
            limit: 8,
        });

        let err = renderer
            .begin(&Frame {
                generation: 0,
                grid: &grid,
                display: &display,
                changed: &[],
                transitions: &[],
            })
            .unwrap_err();
        assert!(matches!(err, LifeError::Render(_)));
    }
}
