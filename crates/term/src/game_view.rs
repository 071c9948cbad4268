//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GameStatus};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PANEL_W: u16 = 16;
const PANEL_GAP: u16 = 2;

const BG: Rgb = Rgb::new(0, 0, 0);
const FRAME: Rgb = Rgb::new(140, 140, 160);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const EMPTY: Rgb = Rgb::new(60, 60, 70);

const HELP: [&str; 7] = [
    "ENTER  start",
    "<- ->  move",
    "UP/Z   rotate",
    "DOWN   soft drop",
    "SPACE  hard drop",
    "R      reset",
    "Q      quit",
];

/// Board-plus-side-panel renderer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares cells on most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Terminal-space placement of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    board_x: u16,
    board_y: u16,
    board_w: u16,
    board_h: u16,
    panel_x: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    ///
    /// Anything that does not fit the viewport is clipped.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(TEXT, BG));

        let layout = self.layout(snap, viewport);
        self.draw_border(fb, layout);
        self.draw_board(fb, snap, layout);
        self.draw_side_panel(fb, snap, layout);

        match snap.status {
            GameStatus::NotStarted => self.draw_overlay(fb, layout, "PRESS ENTER", None),
            GameStatus::GameOver => self.draw_overlay(fb, layout, "GAME OVER", Some(snap.score)),
            GameStatus::Running => {}
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let side = |cells: usize, scale: u16| {
            u16::try_from(cells)
                .unwrap_or(u16::MAX)
                .saturating_mul(scale)
                .saturating_add(2)
        };
        let board_w = side(snap.cols, self.cell_w);
        let board_h = side(snap.rows, self.cell_h);
        let total_w = board_w.saturating_add(PANEL_GAP + PANEL_W);

        let board_x = viewport.width.saturating_sub(total_w) / 2;
        let board_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(board_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            board_x,
            board_y,
            board_w,
            board_h,
            panel_x: board_x.saturating_add(board_w).saturating_add(PANEL_GAP),
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout) {
        let style = CellStyle::plain(FRAME, BG);
        let right = l.board_x.saturating_add(l.board_w - 1);
        let bottom = l.board_y.saturating_add(l.board_h - 1);

        for x in l.board_x + 1..right {
            fb.put_char(x, l.board_y, '-', style);
            fb.put_char(x, bottom, '-', style);
        }
        for y in l.board_y + 1..bottom {
            fb.put_char(l.board_x, y, '|', style);
            fb.put_char(right, y, '|', style);
        }
        for (x, y) in [
            (l.board_x, l.board_y),
            (right, l.board_y),
            (l.board_x, bottom),
            (right, bottom),
        ] {
            fb.put_char(x, y, '+', style);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: Layout) {
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let kind = match snap.cell(row, col) {
                    Some(color) => CellKind::Filled(color),
                    None => CellKind::Empty,
                };
                self.draw_cell(fb, l, row as i32, col as i32, kind);
            }
        }

        let Some(active) = &snap.active else {
            return;
        };

        if let Some(ghost_row) = snap.ghost_row {
            let offset = ghost_row - active.row;
            for &(row, col) in &active.cells {
                let row = row + offset;
                let free = row >= 0 && snap.cell(row as usize, col as usize).is_none();
                if free && !active.cells.contains(&(row, col)) {
                    self.draw_cell(fb, l, row, col, CellKind::Ghost(active.color));
                }
            }
        }

        for &(row, col) in &active.cells {
            self.draw_cell(fb, l, row, col, CellKind::Filled(active.color));
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, l: Layout, row: i32, col: i32, kind: CellKind) {
        if row < 0 || col < 0 {
            return;
        }
        // Stay inside the frame.
        let inner_w = l.board_w - 2;
        let inner_h = l.board_h - 2;
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        let x0 = col.saturating_mul(self.cell_w);
        let y0 = row.saturating_mul(self.cell_h);
        if x0 >= inner_w || y0 >= inner_h {
            return;
        }

        let (pair, style) = match kind {
            CellKind::Filled(color) => (['[', ']'], CellStyle::plain(color_rgb(color), BG).bold()),
            CellKind::Ghost(color) => ([':', ':'], CellStyle::plain(color_rgb(color), BG).dim()),
            CellKind::Empty => ([' ', '.'], CellStyle::plain(EMPTY, BG)),
        };

        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = pair[(dx as usize).min(1)];
                let x = l.board_x.saturating_add(x0.saturating_add(dx)).saturating_add(1);
                let y = l.board_y.saturating_add(y0.saturating_add(dy)).saturating_add(1);
                fb.put_char(x, y, ch, style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: Layout) {
        let label = CellStyle::plain(FRAME, BG);
        let value = CellStyle::plain(TEXT, BG).bold();
        let x = l.panel_x;
        let mut y = l.board_y.saturating_add(1);

        fb.put_str(x, y, "SCORE", label);
        put_u32(fb, x, y.saturating_add(1), snap.score, value);
        y = y.saturating_add(3);
        fb.put_str(x, y, "LINES", label);
        put_u32(fb, x, y.saturating_add(1), snap.lines, value);
        y = y.saturating_add(3);
        fb.put_str(x, y, "STATUS", label);
        fb.put_str(x, y.saturating_add(1), status_label(snap.status), value);
        y = y.saturating_add(3);

        for line in HELP {
            fb.put_str(x, y, line, label);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, l: Layout, title: &str, score: Option<u32>) {
        let style = CellStyle::plain(TEXT, BG).bold();
        let mid_y = l.board_y.saturating_add(l.board_h / 2);
        let center_x = |len: u16| l.board_x.saturating_add(l.board_w.saturating_sub(len) / 2);

        fb.put_str(center_x(title.len() as u16), mid_y.saturating_sub(1), title, style);
        if let Some(score) = score {
            let x = center_x(6 + digit_count(score));
            let y = mid_y.saturating_add(1);
            fb.put_str(x, y, "SCORE ", style);
            put_u32(fb, x.saturating_add(6), y, score, style);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CellKind {
    Filled(Color),
    Ghost(Color),
    Empty,
}

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::SkyBlue => Rgb::new(135, 206, 235),
        Color::Yellow => Rgb::new(240, 220, 60),
        Color::Purple => Rgb::new(170, 90, 220),
        Color::Orange => Rgb::new(245, 150, 40),
        Color::Blue => Rgb::new(60, 100, 230),
        Color::Green => Rgb::new(80, 200, 90),
        Color::Red => Rgb::new(225, 60, 60),
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "READY",
        GameStatus::Running => "PLAYING",
        GameStatus::GameOver => "GAME OVER",
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Write a number without allocating.
fn put_u32(fb: &mut FrameBuffer, x: u16, y: u16, mut v: u32, style: CellStyle) {
    let mut digits = [0u8; 10];
    let mut len = 0;
    loop {
        digits[len] = b'0' + (v % 10) as u8;
        len += 1;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    for (i, d) in digits[..len].iter().rev().enumerate() {
        fb.put_char(x.saturating_add(i as u16), y, *d as char, style);
    }
}
