//! The 16-color palette
//!
//! Entities carry palette indices as plain data; only the renderer knows
//! the actual RGB values.

use macroquad::color::Color;

/// Palette indices used by the game
pub const BLACK: u8 = 0;
pub const GREEN: u8 = 3;
pub const DARK_BLUE: u8 = 5;
pub const WHITE: u8 = 7;
pub const RED: u8 = 8;
pub const YELLOW: u8 = 10;
pub const LIME: u8 = 11;
pub const GRAY: u8 = 13;
pub const PINK: u8 = 14;

/// Resolve a palette index to a drawable color (indices wrap at 16)
pub fn color(index: u8) -> Color {
    let (r, g, b) = match index & 0x0f {
        0 => (0x00, 0x00, 0x00),
        1 => (0x2b, 0x33, 0x5f),
        2 => (0x7e, 0x20, 0x72),
        3 => (0x19, 0x95, 0x9c),
        4 => (0x8b, 0x48, 0x52),
        5 => (0x39, 0x5c, 0x98),
        6 => (0xa9, 0xc1, 0xff),
        7 => (0xee, 0xee, 0xee),
        8 => (0xd4, 0x18, 0x6c),
        9 => (0xd3, 0x84, 0x41),
        10 => (0xe9, 0xc3, 0x5b),
        11 => (0x70, 0xc6, 0xa9),
        12 => (0x76, 0x96, 0xde),
        13 => (0x7f, 0x7f, 0x7f),
        14 => (0xff, 0x97, 0x98),
        _ => (0xed, 0xc7, 0xb0),
    };
    Color::from_rgba(r, g, b, 255)
}
