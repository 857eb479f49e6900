use std::io::IsTerminal;

use clap::{ValueEnum, builder::styling::Ansi256Color};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

/// One palette entry per theme.
struct Swatch {
  dark: Color,
  light: Color,
}

const TIMESTAMP: Swatch = Swatch {
  dark: rgb(126, 148, 160),
  light: rgb(84, 70, 58),
};
const PRIMARY: Swatch = Swatch {
  dark: rgb(205, 180, 140),
  light: rgb(60, 52, 40),
};
const ACCENT: Swatch = Swatch {
  dark: rgb(214, 110, 84),
  light: rgb(178, 58, 40),
};
const SUCCESS: Swatch = Swatch {
  dark: rgb(128, 186, 120),
  light: rgb(36, 128, 70),
};
const LABEL: Swatch = Swatch {
  dark: rgb(112, 170, 210),
  light: rgb(40, 96, 150),
};
const VALUE: Swatch = Swatch {
  dark: rgb(236, 220, 170),
  light: rgb(120, 86, 40),
};

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

pub trait IntoComfyColor {
  fn into(self) -> ComfyColor;
}

impl IntoComfyColor for Color {
  fn into(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
      _ => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, swatch: &Swatch) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => swatch.dark,
      Theme::Light => swatch.light,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(&TIMESTAMP)
  }

  pub const fn primary(&self) -> Color {
    self.pick(&PRIMARY)
  }

  /// Warnings and anything that needs the operator's attention.
  pub const fn accent(&self) -> Color {
    self.pick(&ACCENT)
  }

  pub const fn success(&self) -> Color {
    self.pick(&SUCCESS)
  }

  pub const fn label(&self) -> Color {
    self.pick(&LABEL)
  }

  pub const fn value(&self) -> Color {
    self.pick(&VALUE)
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{Color as ClapColor, RgbColor};

    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      Color::AnsiValue(value) => Some(ClapColor::Ansi256(Ansi256Color(value))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.label())))
      .literal(Style::new().fg_color(Self::to_clap(colors.success())))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.timestamp())))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
      .valid(Style::new().fg_color(Self::to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()),
  }
}

/// `COLORFGBG` is `fg;bg`; background codes 7 and up are light.
fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
  match value
    .and_then(|value| value.split(';').next_back())
    .and_then(|background| background.parse::<u8>().ok())
  {
    Some(background) if background >= 7 => Theme::Light,
    _ => Theme::Dark,
  }
}
