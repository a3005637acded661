//! Light/dark palettes.
//!
//! `Palette::for_mode` is a pure mapping with exactly two fixed outputs;
//! every color the viewer paints comes out of it.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

/// Resolved color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// User-facing preference, from the CLI or the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve the preference to a concrete mode.
    ///
    /// There is no portable way to query a terminal emulator's color
    /// scheme, so `Auto` settles on dark.
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Auto | ThemePreference::Dark => ThemeMode::Dark,
        }
    }
}

/// The full set of colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub border: Color,
    pub text: Color,
    pub button_background: Color,
    pub button_text: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xf8, 0xf8),
    card: Color::Rgb(0xff, 0xff, 0xff),
    border: Color::Rgb(0x22, 0x22, 0x22),
    text: Color::Rgb(0x18, 0x18, 0x18),
    button_background: Color::Rgb(0x22, 0x22, 0x22),
    button_text: Color::Rgb(0xff, 0xff, 0xff),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x18, 0x18, 0x18),
    card: Color::Rgb(0x23, 0x23, 0x23),
    border: Color::Rgb(0xee, 0xee, 0xee),
    text: Color::Rgb(0xf8, 0xf8, 0xf8),
    button_background: Color::Rgb(0xf8, 0xf8, 0xf8),
    button_text: Color::Rgb(0x18, 0x18, 0x18),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_palettes_are_distinct() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Light),
            Palette::for_mode(ThemeMode::Dark)
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(Palette::for_mode(mode), Palette::for_mode(mode));
        }
    }

    #[test]
    fn light_palette_matches_reference_colors() {
        let palette = Palette::for_mode(ThemeMode::Light);
        assert_eq!(palette.background, Color::Rgb(0xf8, 0xf8, 0xf8));
        assert_eq!(palette.card, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(palette.button_text, Color::Rgb(0xff, 0xff, 0xff));
    }

    #[test]
    fn dark_palette_inverts_text_and_background() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(light.background, dark.text);
        assert_eq!(light.text, dark.background);
    }

    #[test]
    fn toggled_flips_and_returns() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn auto_preference_resolves_to_dark() {
        assert_eq!(ThemePreference::Auto.resolve(), ThemeMode::Dark);
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
    }
}
