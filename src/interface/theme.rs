use std::fmt;
use std::str::FromStr;

use console::Style;
use dialoguer::theme::ColorfulTheme;

use crate::error::CalcError;
use crate::suggest::closest_match;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Nearest entry in the xterm 6x6x6 color cube.
    pub fn to_ansi256(self) -> u8 {
        let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
        16 + 36 * level(self.0) + 6 * level(self.1) + level(self.2)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalcError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Built-in color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 6] = [
        ThemePreset::Blue,
        ThemePreset::Green,
        ThemePreset::Purple,
        ThemePreset::Orange,
        ThemePreset::Pink,
        ThemePreset::Teal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemePreset::Blue => "Blue",
            ThemePreset::Green => "Green",
            ThemePreset::Purple => "Purple",
            ThemePreset::Orange => "Orange",
            ThemePreset::Pink => "Pink",
            ThemePreset::Teal => "Teal",
        }
    }

    /// Background gradient start/end and button color.
    pub fn colors(self) -> CustomColors {
        let (start, end, button) = match self {
            ThemePreset::Blue => (Rgb(0xef, 0xf6, 0xff), Rgb(0xe0, 0xe7, 0xff), Rgb(0x25, 0x63, 0xeb)),
            ThemePreset::Green => (Rgb(0xf0, 0xfd, 0xf4), Rgb(0xd1, 0xfa, 0xe5), Rgb(0x16, 0xa3, 0x4a)),
            ThemePreset::Purple => (Rgb(0xfa, 0xf5, 0xff), Rgb(0xed, 0xe9, 0xfe), Rgb(0x93, 0x33, 0xea)),
            ThemePreset::Orange => (Rgb(0xff, 0xf7, 0xed), Rgb(0xfe, 0xf3, 0xc7), Rgb(0xea, 0x58, 0x0c)),
            ThemePreset::Pink => (Rgb(0xfd, 0xf2, 0xf8), Rgb(0xff, 0xe4, 0xe6), Rgb(0xdb, 0x27, 0x77)),
            ThemePreset::Teal => (Rgb(0xf0, 0xfd, 0xfa), Rgb(0xcf, 0xfa, 0xfe), Rgb(0x0d, 0x94, 0x88)),
        };
        CustomColors {
            background_start: start,
            background_end: end,
            button,
        }
    }
}

/// User-chosen colors for the custom theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomColors {
    pub background_start: Rgb,
    pub background_end: Rgb,
    pub button: Rgb,
}

/// Active color theme. Only the presentation layer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Preset(ThemePreset),
    Custom(CustomColors),
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Preset(ThemePreset::Blue)
    }
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Preset(preset) => preset.name(),
            Theme::Custom(_) => "Custom",
        }
    }

    pub fn colors(&self) -> CustomColors {
        match self {
            Theme::Preset(preset) => preset.colors(),
            Theme::Custom(colors) => *colors,
        }
    }

    /// Style for headings and highlighted values.
    pub fn accent(&self) -> Style {
        Style::new().color256(self.colors().button.to_ansi256()).bold()
    }

    /// Horizontal rule fading from the background start to end color.
    pub fn gradient_rule(&self, width: usize) -> String {
        let colors = self.colors();
        (0..width)
            .map(|i| {
                let t = if width > 1 { i as f64 / (width - 1) as f64 } else { 0.0 };
                let color = colors.background_start.lerp(colors.background_end, t);
                Style::new().color256(color.to_ansi256()).apply_to("─").to_string()
            })
            .collect()
    }

    /// Prompt styling for dialoguer.
    pub fn prompt_theme(&self) -> ColorfulTheme {
        let accent = self.colors().button.to_ansi256();
        ColorfulTheme {
            values_style: Style::new().for_stderr().color256(accent),
            active_item_style: Style::new().for_stderr().color256(accent).bold(),
            ..ColorfulTheme::default()
        }
    }
}

impl FromStr for Theme {
    type Err = CalcError;

    /// Accepts a preset name, a single `#rrggbb` button color, or
    /// `#start,#end,#button` for a full custom theme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if input.starts_with('#') {
            let parts: Vec<&str> = input.split(',').map(str::trim).collect();
            return match parts.as_slice() {
                [button] => Ok(Theme::Custom(CustomColors {
                    button: button.parse()?,
                    ..ThemePreset::Blue.colors()
                })),
                [start, end, button] => Ok(Theme::Custom(CustomColors {
                    background_start: start.parse()?,
                    background_end: end.parse()?,
                    button: button.parse()?,
                })),
                _ => Err(CalcError::InvalidColor(input.to_string())),
            };
        }

        ThemePreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(input))
            .map(Theme::Preset)
            .ok_or_else(|| CalcError::UnknownTheme {
                input: input.to_string(),
                suggestion: closest_match(input, ThemePreset::ALL.iter().map(|p| p.name())),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preset() {
        assert_eq!("teal".parse::<Theme>().unwrap(), Theme::Preset(ThemePreset::Teal));
        assert_eq!("Purple".parse::<Theme>().unwrap().name(), "Purple");
        assert!("Magenta".parse::<Theme>().is_err());
    }

    #[test]
    fn test_parse_custom() {
        let theme: Theme = "#ffffff, #000000, #ff0000".parse().unwrap();
        let colors = theme.colors();
        assert_eq!(theme.name(), "Custom");
        assert_eq!(colors.background_start, Rgb(255, 255, 255));
        assert_eq!(colors.background_end, Rgb(0, 0, 0));
        assert_eq!(colors.button, Rgb(255, 0, 0));

        let accent_only: Theme = "#123456".parse().unwrap();
        assert_eq!(accent_only.colors().button, Rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_invalid_colors() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("123456".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#ffffff,#000000".parse::<Theme>().is_err());
    }

    #[test]
    fn test_ansi256_corners() {
        assert_eq!(Rgb(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Rgb(255, 255, 255).to_ansi256(), 231);
        assert_eq!(Rgb(255, 0, 0).to_ansi256(), 196);
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb(0x25, 0x63, 0xeb).to_string(), "#2563eb");
    }
}
