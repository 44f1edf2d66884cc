//! Terminal drawing. Only cells that changed since the last frame are
//! redrawn.

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use maze_escape::{CellState, MazeGame, Position};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

const CELL_W: usize = 2;
/// Status line above the grid, message line below it.
const CHROME_H: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Player,
    Exit,
    Key,
    Trap,
    Wall,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: Glyph,
    pub color: Color,
}

pub struct Renderer {
    last: Vec<Cell>,
    last_status: String,
    last_message: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
    reveal: bool,
}

impl Renderer {
    pub fn new(width: usize, height: usize, reveal: bool) -> Self {
        Self {
            last: vec![
                Cell {
                    glyph: Glyph::Floor,
                    color: Color::Reset,
                };
                width * height
            ],
            last_status: String::new(),
            last_message: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
            reveal,
        }
    }

    /// Forces the next frame to repaint everything.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }
}

pub fn render(
    stdout: &mut Stdout,
    game: &dyn MazeGame,
    renderer: &mut Renderer,
    message: &str,
) -> io::Result<()> {
    let grid = game.grid();

    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    let (term_w, term_h) = terminal::size()?;
    let fitting = footprint(grid.width(), grid.height()).filter(|&(w, h)| term_w >= w && term_h >= h);
    let Some((needed_w, needed_h)) = fitting else {
        stdout.queue(MoveTo(0, 0))?;
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            grid.width().saturating_mul(CELL_W),
            grid.height().saturating_add(CHROME_H),
            term_w,
            term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    };

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
        stdout.queue(Clear(ClearType::All))?;
    }

    let status = format!(
        "Key: {}  (WASD/arrows to move, q to quit)",
        if game.has_key() { "yes" } else { "no" }
    );
    if renderer.needs_full || status != renderer.last_status {
        draw_line(stdout, renderer.origin_x, renderer.origin_y - 1, &status, Color::White)?;
        renderer.last_status = status;
    }

    for pos in grid.positions() {
        let cell = cell_for(game, pos, renderer.reveal);
        let idx = pos.row * grid.width() + pos.col;
        if renderer.needs_full || cell != renderer.last[idx] {
            renderer.last[idx] = cell;
            draw_cell(stdout, renderer, pos, cell)?;
        }
    }

    if renderer.needs_full || message != renderer.last_message {
        let y = renderer.origin_y + grid.height() as u16;
        draw_line(stdout, renderer.origin_x, y, message, Color::Yellow)?;
        renderer.last_message = message.to_string();
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

/// Columns and rows needed for a `width` x `height` grid plus the status and
/// message lines, or `None` when that exceeds terminal coordinates.
fn footprint(width: usize, height: usize) -> Option<(u16, u16)> {
    let cols = u16::try_from(width.checked_mul(CELL_W)?).ok()?;
    let rows = u16::try_from(height.checked_add(CHROME_H)?).ok()?;
    Some((cols, rows))
}

/// What to show at `pos`. Keys and traps stay hidden unless `reveal` is set.
pub fn cell_for(game: &dyn MazeGame, pos: Position, reveal: bool) -> Cell {
    if pos == game.player_position() {
        return Cell {
            glyph: Glyph::Player,
            color: Color::Yellow,
        };
    }
    if pos == game.exit_position() {
        return Cell {
            glyph: Glyph::Exit,
            color: Color::Green,
        };
    }
    if reveal && !game.has_key() && game.key_positions().contains(&pos) {
        return Cell {
            glyph: Glyph::Key,
            color: Color::Magenta,
        };
    }
    match game.cell_state(pos) {
        Some(CellState::Trap) if reveal => Cell {
            glyph: Glyph::Trap,
            color: Color::Red,
        },
        Some(CellState::Wall) => Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        _ => Cell {
            glyph: Glyph::Floor,
            color: Color::DarkGrey,
        },
    }
}

fn draw_cell(stdout: &mut Stdout, renderer: &Renderer, pos: Position, cell: Cell) -> io::Result<()> {
    let text = match cell.glyph {
        Glyph::Player => "🙂",
        Glyph::Exit => "🚪",
        Glyph::Key => "🔑",
        Glyph::Trap => "💀",
        Glyph::Wall => "██",
        Glyph::Floor => "· ",
    };
    // `render` only gets here once the whole footprint fits in u16 terminal coordinates.
    let x_pos = renderer.origin_x + (pos.col * CELL_W) as u16;
    let y_pos = renderer.origin_y + pos.row as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

fn draw_line(stdout: &mut Stdout, x: u16, y: u16, text: &str, color: Color) -> io::Result<()> {
    stdout.queue(MoveTo(x, y))?;
    stdout.queue(Clear(ClearType::UntilNewLine))?;
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    stdout.queue(ResetColor)?;
    Ok(())
}

/// Shows `lines` on a cleared screen, one per row from the top.
pub fn render_text(stdout: &mut Stdout, lines: &[&str]) -> io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        stdout.queue(MoveTo(0, row as u16))?;
        stdout.queue(Print(line))?;
    }
    stdout.flush()
}
