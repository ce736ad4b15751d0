//! Stack Overflow flavored palette.

use ratatui::style::Color;

pub const BRAND_ORANGE: Color = Color::Rgb(0xf4, 0x80, 0x24);

pub const TEXT: Color = Color::Rgb(0xe3, 0xe6, 0xe8);
pub const TEXT_MUTED: Color = Color::Rgb(0x9f, 0xa6, 0xad);
pub const SEPARATOR: Color = Color::Rgb(0x6a, 0x73, 0x7c);

pub const BORDER: Color = Color::Rgb(0x3d, 0x3d, 0x3d);
pub const POPUP_BORDER: Color = Color::Rgb(0xe3, 0xe6, 0xe8);
pub const SELECTION_BG: Color = Color::Rgb(0x2d, 0x2d, 0x2d);

pub const TAG: Color = Color::Rgb(0x9c, 0xc3, 0xdb);
pub const ACCEPTED_GREEN: Color = Color::Rgb(0x5e, 0xba, 0x7d);
pub const ERROR_RED: Color = Color::Rgb(0xde, 0x4f, 0x54);
