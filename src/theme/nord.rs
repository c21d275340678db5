use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    crust: Color::Rgb(43, 48, 59),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    surface1: Color::Rgb(59, 66, 82),
    surface2: Color::Rgb(67, 76, 94),
    overlay0: Color::Rgb(129, 161, 193),
    overlay1: Color::Rgb(136, 192, 208),
    blue: Color::Rgb(129, 161, 193),
    sky: Color::Rgb(143, 188, 187),
    green: Color::Rgb(163, 190, 140),
    red: Color::Rgb(191, 97, 106),
};
