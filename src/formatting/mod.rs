use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Always
        } else {
            Self::Never
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        Self {
            color: color_mode_from_vars(
                env::var("NO_COLOR").ok().as_deref(),
                env::var("CLICOLOR").ok().as_deref(),
                env::var("CLICOLOR_FORCE").ok().as_deref(),
            ),
        }
    }

    /// Plain output: no colors, ASCII table borders.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.color == ColorMode::Never
    }

    /// Environment first, then the config file's `use_color`, then `--plain`.
    pub fn resolve(use_color: Option<bool>, plain: bool) -> Self {
        if plain {
            return Self::plain();
        }
        let from_env = Self::from_env();
        match (from_env.color, use_color) {
            (ColorMode::Auto, Some(enabled)) => Self::new(enabled.into()),
            _ => from_env,
        }
    }

    /// Point the `colored` crate at this configuration.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }

    pub fn highlight(&self, text: &str) -> String {
        if self.color.should_use_color() {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color.should_use_color() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.color.should_use_color() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color.should_use_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

// NO_COLOR (no-color.org) beats CLICOLOR=0, CLICOLOR_FORCE=1 beats both.
fn color_mode_from_vars(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
) -> ColorMode {
    let mut mode = ColorMode::Auto;
    if no_color.is_some() {
        mode = ColorMode::Never;
    }
    if clicolor == Some("0") {
        mode = ColorMode::Never;
    }
    if clicolor_force == Some("1") {
        mode = ColorMode::Always;
    }
    mode
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// Whole dollars with thousands separators, e.g. `-$1,234,567`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

/// Dollars and cents, for small per-unit amounts.
pub fn format_unit_price(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_optional_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_percent)
}
