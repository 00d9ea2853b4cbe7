use ratatui::style::Color;

pub const CLASY_CYAN: Color = Color::Rgb(0x1a, 0xc4, 0xfc);
pub const CLASY_BLUE: Color = Color::Rgb(0x1c, 0x71, 0xf3);
pub const LIGHT_BLUE: Color = Color::Rgb(0x7b, 0xae, 0xff);
pub const TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BODY_TEXT: Color = Color::Rgb(0xc8, 0xcd, 0xd6);
pub const MUTED: Color = Color::Rgb(0x8b, 0x93, 0xa7);
pub const CARD_BORDER: Color = Color::Rgb(0x2a, 0x33, 0x4a);
pub const TRACK: Color = Color::Rgb(0x33, 0x33, 0x3d);
pub const INACTIVE_DOT: Color = Color::Rgb(0x4d, 0x4d, 0x57);
pub const DISABLED: Color = Color::Rgb(0x40, 0x40, 0x48);
