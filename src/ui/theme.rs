use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x16, 0x77, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const HIGHLIGHT_CHECK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const WHATSAPP_GREEN: Color = Color::Rgb(0x25, 0xd3, 0x66);
pub const SLIDER_ARROW: Color = Color::Rgb(0xff, 0xff, 0xff);
