use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub title: Style,
    pub separator: Style,

    pub prompt: Style,
    pub query: Style,
    pub cursor: Style,
    pub placeholder: Style,
    pub placeholder_cursor: Style,
    pub hint: Style,

    pub marker: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub command: Style,
    pub no_match: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            title: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(p.surface1),

            prompt: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            query: Style::default().fg(p.text),
            cursor: Style::default().fg(p.overlay1),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            placeholder_cursor: Style::default().bg(p.overlay1).fg(p.crust),
            hint: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            marker: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            list_selected: Style::default().fg(p.sky).add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            command: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            no_match: Style::default().fg(p.red),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_builds_a_distinct_theme() {
        let themes: Vec<_> = [
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
        .into_iter()
        .map(Theme::from_palette_type)
        .collect();
        assert_ne!(themes[0], themes[1]);
        assert_ne!(themes[1], themes[2]);
        assert_eq!(Theme::default(), themes[0]);
    }

    #[test]
    fn test_palette_type_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let w: Wrapper = toml::from_str("theme = \"gruvbox\"").unwrap();
        assert_eq!(w.theme, PaletteType::Gruvbox);
    }
}
