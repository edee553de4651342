//! Dino Run scene rendering.
//!
//! Uses a cell buffer approach for per-character color control: the logical
//! 800x600 world is rasterized into a 2D grid sized to the terminal and
//! then stamped row-by-row as `Paragraph` widgets.

use crate::config::Config;
use crate::game::logic::{DinoGame, GameStatus};
use crate::render::{draw_world, Surface};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// A `Surface` that rasterizes logical world coordinates into a terminal
/// cell grid. Terminal cells are much taller than wide, so the two axes
/// scale independently.
struct CellSurface {
    cols: usize,
    rows: usize,
    x_scale: f64,
    y_scale: f64,
    cells: Vec<Vec<Cell>>,
}

impl CellSurface {
    fn new(cols: usize, rows: usize, cfg: &Config) -> Self {
        Self {
            cols,
            rows,
            x_scale: cols as f64 / cfg.screen_width as f64,
            y_scale: rows as f64 / cfg.screen_height as f64,
            cells: vec![vec![Cell::default(); cols]; rows],
        }
    }

    fn col(&self, x: i32) -> i32 {
        (x as f64 * self.x_scale).round() as i32
    }

    fn row(&self, y: i32) -> i32 {
        (y as f64 * self.y_scale).round() as i32
    }

    fn put(&mut self, row: i32, col: i32, ch: char, fg: Color) {
        if row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols {
            self.cells[row as usize][col as usize] = Cell { ch, fg };
        }
    }
}

impl Surface for CellSurface {
    fn clear(&mut self, color: Color) {
        let blank = Cell { ch: ' ', fg: color };
        for row in &mut self.cells {
            row.fill(blank);
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        // A nonempty rectangle covers at least one cell even below scale.
        let c0 = self.col(x);
        let c1 = self.col(x + width).max(c0 + 1);
        let r0 = self.row(y);
        let r1 = self.row(y + height).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(row, col, '\u{2588}', color); // █
            }
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        // Always mark the center so small stones stay visible.
        let (center_row, center_col) = (self.row(cy), self.col(cx));
        self.put(center_row, center_col, '\u{2588}', color);

        let c0 = self.col(cx - radius);
        let c1 = self.col(cx + radius);
        let r0 = self.row(cy - radius);
        let r1 = self.row(cy + radius);
        for row in r0..=r1 {
            for col in c0..=c1 {
                // Map the cell center back to world units and test it
                // against the radius.
                let dx = (col as f64 + 0.5) / self.x_scale - cx as f64;
                let dy = (row as f64 + 0.5) / self.y_scale - cy as f64;
                if dx * dx + dy * dy <= (radius as f64 + 0.5).powi(2) {
                    self.put(row, col, '\u{2588}', color);
                }
            }
        }
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (c0, r0) = (self.col(x0), self.row(y0));
        let (c1, r1) = (self.col(x1), self.row(y1));
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);
        for i in 0..=steps {
            let col = c0 + (c1 - c0) * i / steps;
            let row = r0 + (r1 - r0) * i / steps;
            self.put(row, col, '\u{2580}', color); // ▀
        }
    }
}

/// Render one frame: the bordered playfield plus a one-line status bar.
pub fn render_scene(frame: &mut Frame, game: &DinoGame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(frame.size());

    let block = Block::default()
        .title(" Run Dino! Run! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    if inner.width >= 10 && inner.height >= 5 {
        let mut surface = CellSurface::new(
            inner.width as usize,
            inner.height as usize,
            &game.world.config,
        );
        draw_world(&game.world, &mut surface);
        stamp(frame, inner, &surface);
    }

    render_status_bar(frame, chunks[1], game.status);
}

/// Stamp the cell buffer into the frame, merging runs of equal color into
/// single spans.
fn stamp(frame: &mut Frame, area: Rect, surface: &CellSurface) {
    for (row_idx, row_data) in surface.cells.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, Style::default().fg(current_fg)));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, status: GameStatus) {
    let (label, color) = match status {
        GameStatus::Running => ("Running", Color::Green),
        GameStatus::Paused => ("Paused", Color::Yellow),
        GameStatus::Ended => ("Game over", Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(color)),
        Span::styled(
            "  [Up] Jump  [Space] Pause  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_80x30() -> CellSurface {
        CellSurface::new(80, 30, &Config::default())
    }

    fn painted(surface: &CellSurface) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in surface.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.ch != ' ' {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    #[test]
    fn test_fill_rect_scales_to_cells() {
        // 80/800 = 0.1 horizontally, 30/600 = 0.05 vertically.
        let mut surface = surface_80x30();

        surface.fill_rect(50, 480, 10, 20, Color::Red);

        // x: 50..60 -> cols 5..6, y: 480..500 -> rows 24..25.
        assert_eq!(painted(&surface), vec![(24, 5)]);
    }

    #[test]
    fn test_fill_rect_covers_at_least_one_cell() {
        let mut surface = surface_80x30();

        surface.fill_rect(100, 100, 1, 1, Color::Red);

        assert_eq!(painted(&surface).len(), 1);
    }

    #[test]
    fn test_fill_rect_off_screen_paints_nothing() {
        let mut surface = surface_80x30();

        surface.fill_rect(-200, 100, 10, 20, Color::Red);

        assert!(painted(&surface).is_empty());
    }

    #[test]
    fn test_fill_circle_marks_center() {
        let mut surface = surface_80x30();

        surface.fill_circle(400, 300, 15, Color::Gray);

        let cells = painted(&surface);
        assert!(cells.contains(&(15, 40)));
    }

    #[test]
    fn test_horizontal_line_spans_the_row() {
        let mut surface = surface_80x30();

        surface.line(0, 500, 800, 500, Color::Gray);

        let cells = painted(&surface);
        // Row 25, columns 0..=79 (the endpoint at col 80 is clipped).
        assert!(cells.contains(&(25, 0)));
        assert!(cells.contains(&(25, 79)));
        assert!(cells.iter().all(|&(r, _)| r == 25));
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut surface = surface_80x30();
        surface.fill_rect(50, 480, 10, 20, Color::Red);

        surface.clear(Color::Reset);

        assert!(painted(&surface).is_empty());
    }
}
