//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{tile_style, BOARD_BG};
use crate::types::BOARD_SIZE;

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

/// Player and score-reporting status shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStatusView<'a> {
    pub identity: Option<&'a str>,
    pub reporting_enabled: bool,
    pub reported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Columns between horizontally adjacent tiles.
    gap_x: u16,
    /// Rows between vertically adjacent tiles.
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits five digits with padding and stays roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_gaps(mut self, gap_x: u16, gap_y: u16) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board frame in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = n * self.cell_w + (n - 1) * self.gap_x;
        let inner_h = n * self.cell_h + (n - 1) * self.gap_y;
        (inner_w + 2, inner_h + 2)
    }

    /// Top-left terminal position of the tile at (row, col), relative to the
    /// frame origin.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            1 + (col as u16) * (self.cell_w + self.gap_x),
            1 + (row as u16) * (self.cell_h + self.gap_y),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_status(snap, None, viewport, fb);
    }

    pub fn render_into_with_status(
        &self,
        snap: &GameSnapshot,
        player: Option<&PlayerStatusView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board_bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r, c, value);
            }
        }

        self.draw_side_panel(fb, snap, player, viewport, start_x, start_y, frame_w);

        if snap.game_over() {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_status(
        &self,
        snap: &GameSnapshot,
        player: Option<&PlayerStatusView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_status(snap, player, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: u32,
    ) {
        let (ox, oy) = self.tile_origin(row, col);
        let px = start_x + ox;
        let py = start_y + oy;
        let style = tile_style(value);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if value == 0 {
            return;
        }

        let mid_y = py + self.cell_h / 2;
        let digits = decimal_width(value);
        let x = px + self.cell_w.saturating_sub(digits) / 2;
        fb.put_u32(x, mid_y, value, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        player: Option<&PlayerStatusView<'_>>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PLAYER", label);
        y = y.saturating_add(1);
        match player {
            Some(p) => {
                fb.put_str(panel_x, y, p.identity.unwrap_or("-"), value);
                y = y.saturating_add(1);
                let status = match (p.reporting_enabled, p.identity.is_some(), p.reported) {
                    (false, _, _) => "reporting off",
                    (true, false, _) => "not signed in",
                    (true, true, true) => "score sent",
                    (true, true, false) => "ready",
                };
                fb.put_str(panel_x, y, status, hint);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        for line in ["arrows/wasd move", "drag to swipe", "r new game", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let overlay = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(17, 24, 39)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        let box_x = start_x + 1;
        let box_w = frame_w.saturating_sub(2);

        fb.fill_rect(box_x, mid_y.saturating_sub(1), box_w, 3, ' ', overlay);
        fb.put_str_centered(box_x, mid_y.saturating_sub(1), box_w, "GAME OVER", overlay);

        let score_w = 6 + decimal_width(snap.score);
        let score_x = box_x + box_w.saturating_sub(score_w) / 2;
        fb.put_str(score_x, mid_y, "score ", overlay);
        fb.put_u32(score_x + 6, mid_y, snap.score, overlay);

        fb.put_str_centered(box_x, mid_y + 1, box_w, "press r to retry", overlay.dim());
    }
}

fn decimal_width(mut v: u32) -> u16 {
    let mut w = 1;
    while v >= 10 {
        v /= 10;
        w += 1;
    }
    w
}
