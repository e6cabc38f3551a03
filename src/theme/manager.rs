use crate::error::{AppError, AppResult};
use crate::theme::{
    loader::ThemeLoader,
    types::{Theme, ThemeConfig},
};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

use tuirealm::props::Color;

// Global theme manager instance, wrapped in Mutex for thread-safe updates
static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

// Fallback colors for when the manager is uninitialized or locked
mod fallback_colors {
    use tuirealm::props::Color;

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Gray;
    pub const SURFACE: Color = Color::Reset;
    pub const PRIMARY_ACCENT: Color = Color::Cyan;
    pub const TITLE_ACCENT: Color = Color::LightCyan;
    pub const HEADER_ACCENT: Color = Color::Yellow;
    pub const SELECTION_BG: Color = Color::DarkGray;
    pub const SELECTION_FG: Color = Color::White;
    pub const VERSION_NUMBER: Color = Color::Yellow;
    pub const VERSION_TIMESTAMP: Color = Color::Green;
    pub const VERSION_AUTHOR: Color = Color::LightBlue;
    pub const VERSION_NOTE: Color = Color::White;
    pub const SNAPSHOT_MARKER: Color = Color::Gray;
    pub const ACTIVE_MARKER: Color = Color::LightGreen;
    pub const COMPARE_BADGE: Color = Color::Magenta;
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_WARNING: Color = Color::Yellow;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_INFO: Color = Color::Blue;
    pub const SHORTCUT_KEY: Color = Color::LightCyan;
    pub const SHORTCUT_DESCRIPTION: Color = Color::Gray;
}

pub struct ThemeManager {
    current_theme: Arc<Theme>,
    loader: ThemeLoader,
}

impl ThemeManager {
    /// Initialize the global theme manager - call this once at app startup
    pub fn init_global(config: &ThemeConfig) -> AppResult<()> {
        let loader = ThemeLoader::new();
        let theme = loader.load_flavor(&config.flavor_name)?;

        let manager = Self {
            current_theme: Arc::new(theme),
            loader,
        };

        GLOBAL_THEME_MANAGER
            .set(Mutex::new(manager))
            .map_err(|_| AppError::Config("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized");
        Ok(())
    }

    /// Get the global theme manager instance
    pub fn global() -> &'static Mutex<ThemeManager> {
        GLOBAL_THEME_MANAGER
            .get()
            .expect("Theme manager not initialized. Call ThemeManager::init_global() first.")
    }

    fn with_theme_manager<F, R>(f: F, fallback: R) -> R
    where
        F: FnOnce(&Arc<Theme>) -> R,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.try_lock() {
                Ok(manager) => f(&manager.current_theme),
                Err(_) => {
                    log::warn!("Theme manager lock contention, using fallback");
                    fallback
                }
            },
            None => fallback,
        }
    }

    fn get_theme_color<F>(color_getter: F, fallback: Color) -> Color
    where
        F: FnOnce(&Theme) -> Color,
    {
        Self::with_theme_manager(|theme| color_getter(theme), fallback)
    }

    /// Switch to another embedded flavor at runtime
    pub fn switch_flavor(&mut self, flavor_name: &str) -> AppResult<()> {
        let theme = self.loader.load_flavor(flavor_name)?;
        self.current_theme = Arc::new(theme);
        log::info!("Switched to theme flavor: {flavor_name}");
        Ok(())
    }
}

// Macro to generate theme accessor methods with fallbacks
macro_rules! theme_accessor {
    ($method:ident, $field:ident, $fallback:expr) => {
        impl ThemeManager {
            pub fn $method() -> Color {
                Self::get_theme_color(
                    |theme| theme.colors.hex_to_color(&theme.colors.$field),
                    $fallback,
                )
            }
        }
    };
}

theme_accessor!(text_primary, text_primary, fallback_colors::TEXT_PRIMARY);
theme_accessor!(text_muted, text_muted, fallback_colors::TEXT_MUTED);
theme_accessor!(surface, surface, fallback_colors::SURFACE);
theme_accessor!(
    primary_accent,
    primary_accent,
    fallback_colors::PRIMARY_ACCENT
);
theme_accessor!(title_accent, title_accent, fallback_colors::TITLE_ACCENT);
theme_accessor!(header_accent, header_accent, fallback_colors::HEADER_ACCENT);
theme_accessor!(selection_bg, selection_bg, fallback_colors::SELECTION_BG);
theme_accessor!(selection_fg, selection_fg, fallback_colors::SELECTION_FG);
theme_accessor!(
    version_number,
    version_number,
    fallback_colors::VERSION_NUMBER
);
theme_accessor!(
    version_timestamp,
    version_timestamp,
    fallback_colors::VERSION_TIMESTAMP
);
theme_accessor!(
    version_author,
    version_author,
    fallback_colors::VERSION_AUTHOR
);
theme_accessor!(version_note, version_note, fallback_colors::VERSION_NOTE);
theme_accessor!(
    snapshot_marker,
    snapshot_marker,
    fallback_colors::SNAPSHOT_MARKER
);
theme_accessor!(active_marker, active_marker, fallback_colors::ACTIVE_MARKER);
theme_accessor!(compare_badge, compare_badge, fallback_colors::COMPARE_BADGE);
theme_accessor!(
    status_success,
    status_success,
    fallback_colors::STATUS_SUCCESS
);
theme_accessor!(
    status_warning,
    status_warning,
    fallback_colors::STATUS_WARNING
);
theme_accessor!(status_error, status_error, fallback_colors::STATUS_ERROR);
theme_accessor!(status_info, status_info, fallback_colors::STATUS_INFO);
theme_accessor!(shortcut_key, shortcut_key, fallback_colors::SHORTCUT_KEY);
theme_accessor!(
    shortcut_description,
    shortcut_description,
    fallback_colors::SHORTCUT_DESCRIPTION
);
