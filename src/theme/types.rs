use serde::{Deserialize, Serialize};
use tuirealm::props::Color;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub flavor_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // === Core Text Colors ===
    pub text_primary: String,
    pub text_muted: String,

    // === Layout Colors ===
    pub surface: String,

    // === Accent Colors ===
    pub primary_accent: String,
    pub title_accent: String,
    pub header_accent: String,

    // === Selection Colors ===
    pub selection_bg: String,
    pub selection_fg: String,

    // === Version Table Colors ===
    pub version_number: String,
    pub version_timestamp: String,
    pub version_author: String,
    pub version_note: String,
    pub snapshot_marker: String,
    pub active_marker: String,
    pub compare_badge: String,

    // === Status Colors ===
    pub status_success: String,
    pub status_warning: String,
    pub status_error: String,
    pub status_info: String,

    // === Help System Colors ===
    pub shortcut_key: String,
    pub shortcut_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub colors: ThemeColors,
}

/// Flavor selection, from the `[theme]` section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub flavor_name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            flavor_name: "nightfall".to_string(),
        }
    }
}

impl ThemeColors {
    /// Convert a hex color string to tuirealm Color
    pub fn hex_to_color(&self, hex: &str) -> Color {
        if hex.is_empty() || hex == "reset" {
            return Color::Reset;
        }

        // Handle standard color names
        match hex.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "reset" => Color::Reset,
            _ => {
                if let Ok(rgb) = Self::parse_hex_color(hex) {
                    Color::Rgb(rgb.0, rgb.1, rgb.2)
                } else {
                    Color::Reset
                }
            }
        }
    }

    fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err("Invalid hex color format");
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

        Ok((r, g, b))
    }
}
