use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use ratatui::style::Color;

use crate::formatting::BoxChars;
use crate::scroll::ScrollTracker;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Event poll interval of the UI loop, also the animation frame period
    pub tick_rate_ms: u64,
    pub display: DisplayConfig,
    pub scroll: ScrollConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub endpoint_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub endpoint_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub range_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub range_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub today_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub accent_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub muted_fg: Color,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll events closer together than this are dropped by the tracker
    pub throttle_ms: u64,
    /// Quiet period before the centered month is recomputed
    pub settle_ms: u64,
    /// Rows moved per mouse wheel notch
    pub wheel_lines: u16,
    /// Length of the animated jump to a month picked in the selector
    pub jump_duration_ms: u64,
    /// Re-center the viewport on the nearest month once scrolling settles
    pub snap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            tick_rate_ms: 16,
            display: DisplayConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            endpoint_fg: Color::White,
            endpoint_bg: Color::Rgb(37, 99, 235), // Blue
            range_fg: Color::Rgb(30, 58, 138),
            range_bg: Color::Rgb(219, 234, 254), // Pale blue
            today_fg: Color::Rgb(255, 165, 0), // Orange
            accent_fg: Color::LightBlue,
            muted_fg: Color::DarkGray,
        }
    }
}

impl DisplayConfig {
    pub fn box_chars(&self) -> BoxChars {
        BoxChars::from_use_unicode(self.use_unicode)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            throttle_ms: 50,
            settle_ms: 100,
            wheel_lines: 3,
            jump_duration_ms: 300,
            snap: false,
        }
    }
}

impl ScrollConfig {
    pub fn jump_duration(&self) -> Duration {
        Duration::from_millis(self.jump_duration_ms)
    }

    /// A centering tracker using these intervals
    pub fn tracker(&self) -> ScrollTracker {
        ScrollTracker::new(
            Duration::from_millis(self.throttle_ms),
            Duration::from_millis(self.settle_ms),
        )
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    // Named colors
    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightred" => return Some(Color::LightRed),
        "lightgreen" => return Some(Color::LightGreen),
        "lightyellow" => return Some(Color::LightYellow),
        "lightblue" => return Some(Color::LightBlue),
        "lightmagenta" => return Some(Color::LightMagenta),
        "lightcyan" => return Some(Color::LightCyan),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    // Hex colors (#FF6600 or #f60)
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    // RGB tuples "255,165,0"
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid config {}: {}", config_path.display(), e);
        Config::default()
    })
}
