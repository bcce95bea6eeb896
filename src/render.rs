use crate::grid::{Cell, Grid};
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// Visualization collaborator; gets a read-only look at the grid
pub trait Renderer {
    fn render(&mut self, iteration: u64, grid: &Grid);

    /// Final state once the run is over
    fn finish(&mut self, iteration: u64, grid: &Grid) {
        self.render(iteration, grid);
    }
}

/// Renders nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _iteration: u64, _grid: &Grid) {}
}

/// Draws one character per cell, north at the top
pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    /// Snapshot resolution in iterations
    every: u64,
    last_drawn: Option<u64>,
    /// Styled symbol per cell kind, see [`ConsoleRenderer::glyph_index`]
    glyphs: [String; 6],
    line: String,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(every: u64) -> Self {
        Self::new(io::stdout(), every)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, every: u64) -> Self {
        Self {
            out,
            every: every.max(1),
            last_drawn: None,
            glyphs: [
                ".".dimmed().to_string(),
                "o".yellow().to_string(),
                "a".red().to_string(),
                "A".bright_red().bold().to_string(),
                "b".cyan().to_string(),
                "B".bright_cyan().bold().to_string(),
            ],
            line: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph_index(cell: Cell) -> usize {
        match cell {
            Cell::Empty => 0,
            Cell::Item => 1,
            Cell::Ant { carrying: false, .. } => 2,
            Cell::Ant { carrying: true, .. } => 3,
            Cell::Both { carrying: false, .. } => 4,
            Cell::Both { carrying: true, .. } => 5,
        }
    }

    fn draw(&mut self, iteration: u64, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "{}", format!("t = {iteration}").bright_blue().bold())?;
        for row in grid.rows().rev() {
            self.line.clear();
            for &cell in row {
                self.line.push_str(&self.glyphs[Self::glyph_index(cell)]);
            }
            writeln!(self.out, "{}", self.line)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn draw_or_warn(&mut self, iteration: u64, grid: &Grid) {
        if let Err(err) = self.draw(iteration, grid) {
            warn!(%err, "failed to draw grid");
        }
        self.last_drawn = Some(iteration);
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, iteration: u64, grid: &Grid) {
        if iteration % self.every == 0 {
            self.draw_or_warn(iteration, grid);
        }
    }

    fn finish(&mut self, iteration: u64, grid: &Grid) {
        if self.last_drawn != Some(iteration) {
            self.draw_or_warn(iteration, grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn count(s: &str, c: char) -> usize {
        s.chars().filter(|&x| x == c).count()
    }

    #[test]
    fn test_console_draws_every_cell() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(0, 0), Cell::Item);
        grid.set(Position::new(1, 0), Cell::Ant { id: 0, carrying: true });
        grid.set(Position::new(2, 2), Cell::Both { id: 1, carrying: false });

        let mut renderer = ConsoleRenderer::new(Vec::new(), 1);
        renderer.render(0, &grid);
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(out.contains("t = 0"));
        assert_eq!(count(&out, 'o'), 1);
        assert_eq!(count(&out, 'A'), 1);
        assert_eq!(count(&out, 'b'), 1);
        assert_eq!(count(&out, '.'), 6);
    }

    #[test]
    fn test_console_distinguishes_carry_state() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), Cell::Ant { id: 0, carrying: false });
        grid.set(Position::new(1, 0), Cell::Both { id: 1, carrying: true });

        let mut renderer = ConsoleRenderer::new(Vec::new(), 1);
        renderer.render(0, &grid);
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(count(&out, 'a'), 1);
        assert_eq!(count(&out, 'B'), 1);
        assert_eq!(count(&out, 'A'), 0);
        assert_eq!(count(&out, '.'), 2);
    }

    #[test]
    fn test_console_respects_resolution() {
        let grid = Grid::new(2);
        let mut renderer = ConsoleRenderer::new(Vec::new(), 5);

        for t in 0..=10 {
            renderer.render(t, &grid);
        }
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(out.matches("t = ").count(), 3);
    }

    #[test]
    fn test_finish_draws_last_state_once() {
        let grid = Grid::new(2);
        let mut renderer = ConsoleRenderer::new(Vec::new(), 4);

        for t in 0..=6 {
            renderer.render(t, &grid);
        }
        renderer.finish(6, &grid);
        renderer.finish(6, &grid);
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        // t = 0, t = 4 and the final t = 6
        assert_eq!(out.matches("t = ").count(), 3);
        assert!(out.contains("t = 6"));
    }
}
