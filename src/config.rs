//! Configuration resolution for the colorpage server.
//!
//! Resolves the page background color from the `APP_COLOR` environment
//! variable against a fixed allow-list, with `white` as the fallback for
//! anything absent or unrecognized. The resolved `Config` is built once at
//! startup and injected into the router; handlers never read the
//! environment.
//!
use std::env;

/// Environment variable holding the requested background color
const COLOR_VAR: &str = "APP_COLOR";

/// Web http port
pub const PORT: u16 = 5000;

/// Page background color. The enum is closed, so only allow-list members
/// (plus the `White` fallback) can ever reach the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Yellow,
    Red,
    Green,
    Blue,
    Orange,
    White,
}

impl Color {
    /// Resolve a raw configuration value to a color. Matching is
    /// case-insensitive; absent, empty or unrecognized input falls back to
    /// `White`. Total over all inputs, never signals an error.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("yellow") => Color::Yellow,
            Some("red") => Color::Red,
            Some("green") => Color::Green,
            Some("blue") => Color::Blue,
            Some("orange") => Color::Orange,
            _ => Color::White,
        }
    }

    /// CSS keyword for this color
    pub fn as_css(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::White => "white",
        }
    }

    /// Text color that stays legible against this background
    pub fn contrast(self) -> &'static str {
        match self {
            Color::Yellow | Color::White => "black",
            _ => "white",
        }
    }
}

/// Application configuration, fixed for the lifetime of the process
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Resolved page background color
    pub color: Color,
}

impl Config {
    /// Build the configuration from the environment. Called exactly once at
    /// process startup.
    pub fn from_env() -> Self {
        Config {
            color: Color::resolve(env::var(COLOR_VAR).ok().as_deref()),
        }
    }
}
