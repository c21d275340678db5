use ratatui::style::Color;

/// The colour slots the menu draws with.
pub struct Palette {
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub overlay1: Color,
    pub blue: Color,
    pub sky: Color,
    pub green: Color,
    pub red: Color,
}
