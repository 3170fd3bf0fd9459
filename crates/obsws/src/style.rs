//! Named output styles.
//!
//! A style picks the border, column and highlight colours for tables and
//! sentences. `disabled` emits no escape codes at all.

use owo_colors::OwoColorize;
use tabled::settings::Color;

use crate::cli::StyleName;

type Rgb = (u8, u8, u8);

/// Colours of one named style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: Rgb,
    pub column: Rgb,
    pub highlight: Rgb,
}

impl Palette {
    pub fn border_color(&self) -> Color {
        rgb(self.border)
    }

    pub fn column_color(&self) -> Color {
        rgb(self.column)
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::rgb_fg(r, g, b)
}

fn palette(name: StyleName) -> Option<Palette> {
    let (border, column, highlight) = match name {
        StyleName::Disabled => return None,
        StyleName::Red => ((205, 49, 49), (205, 49, 49), (241, 76, 76)),
        StyleName::Magenta => ((188, 63, 188), (188, 63, 188), (214, 112, 214)),
        StyleName::Purple => ((128, 0, 128), (147, 112, 219), (186, 85, 211)),
        StyleName::Blue => ((36, 114, 200), (36, 114, 200), (59, 142, 234)),
        StyleName::Cyan => ((17, 168, 205), (17, 168, 205), (41, 184, 219)),
        StyleName::Green => ((13, 188, 121), (13, 188, 121), (35, 209, 139)),
        StyleName::Yellow => ((229, 229, 16), (229, 229, 16), (245, 245, 67)),
        StyleName::Orange => ((255, 140, 0), (255, 165, 0), (255, 165, 0)),
        StyleName::White => ((229, 229, 229), (229, 229, 229), (255, 255, 255)),
        StyleName::Grey => ((128, 128, 128), (169, 169, 169), (192, 192, 192)),
        StyleName::Navy => ((0, 0, 128), (65, 105, 225), (100, 149, 237)),
        StyleName::Black => ((0, 0, 0), (0, 0, 0), (64, 64, 64)),
    };
    Some(Palette {
        border,
        column,
        highlight,
    })
}

// ── Style ────────────────────────────────────────────────────────────

/// The resolved presentation settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    name: StyleName,
    border: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self::new(StyleName::Disabled, true)
    }
}

impl Style {
    pub fn new(name: StyleName, border: bool) -> Self {
        Self { name, border }
    }

    /// Whether tables are drawn with borders.
    pub fn border(&self) -> bool {
        self.border
    }

    pub fn palette(&self) -> Option<Palette> {
        palette(self.name)
    }

    /// Wrap `text` in the highlight colour, or return it unchanged when
    /// the style is disabled.
    pub fn highlight(&self, text: &str) -> String {
        match self.palette() {
            Some(Palette {
                highlight: (r, g, b),
                ..
            }) => text.truecolor(r, g, b).bold().to_string(),
            None => text.to_owned(),
        }
    }
}
