//! Tile colours.
//!
//! Every power of two gets its own stable style. Values up to 8192 use a
//! fixed palette; larger tiles get a colour derived from their exponent.

use crate::fb::{CellStyle, Rgb};

const DARK_TEXT: Rgb = Rgb::new(60, 58, 50);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background of the board behind the tiles.
pub const BOARD_BG: Rgb = Rgb::new(75, 85, 99);

/// Background of an empty cell.
pub const EMPTY_BG: Rgb = Rgb::new(107, 114, 128);

const PALETTE: [(Rgb, Rgb); 13] = [
    (Rgb::new(254, 249, 195), DARK_TEXT),  // 2
    (Rgb::new(254, 240, 138), DARK_TEXT),  // 4
    (Rgb::new(253, 186, 116), LIGHT_TEXT), // 8
    (Rgb::new(251, 146, 60), LIGHT_TEXT),  // 16
    (Rgb::new(248, 113, 113), LIGHT_TEXT), // 32
    (Rgb::new(239, 68, 68), LIGHT_TEXT),   // 64
    (Rgb::new(250, 204, 21), LIGHT_TEXT),  // 128
    (Rgb::new(234, 179, 8), LIGHT_TEXT),   // 256
    (Rgb::new(202, 138, 4), LIGHT_TEXT),   // 512
    (Rgb::new(99, 102, 241), LIGHT_TEXT),  // 1024
    (Rgb::new(67, 56, 202), LIGHT_TEXT),   // 2048
    (Rgb::new(126, 34, 206), LIGHT_TEXT),  // 4096
    (Rgb::new(88, 28, 135), LIGHT_TEXT),   // 8192
];

/// Style for a tile value; `0` is the empty cell.
pub fn tile_style(value: u32) -> CellStyle {
    if value == 0 {
        return CellStyle::new(EMPTY_BG, EMPTY_BG);
    }

    let exp = value.trailing_zeros();
    let (bg, fg) = match PALETTE.get(exp.saturating_sub(1) as usize) {
        Some(&pair) => pair,
        None => (beyond_palette(exp), Rgb::new(0, 0, 0)),
    };
    CellStyle::new(fg, bg).bold()
}

// Exponents above 13: grey ramp stepping with the exponent, distinct per value.
fn beyond_palette(exp: u32) -> Rgb {
    let step = (exp - 13).min(24) as u8;
    let v = 229u8.saturating_sub(step * 6);
    Rgb::new(v, v, 235u8.saturating_sub(step * 3))
}
