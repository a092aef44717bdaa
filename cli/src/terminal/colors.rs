use colored::Color;

pub const PRIMARY: Color = Color::BrightMagenta;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MISSING: Color = Color::Red;
