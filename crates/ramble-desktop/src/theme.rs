//! Colors and light/dark resolution

use std::sync::OnceLock;

pub use ramble_core::models::ThemeMode;

/// System dark mode preference, looked up once per process
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Light or dark, after `System` has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value for the root `data-theme` attribute
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode) {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    match std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light.", e);
            false
        }
    }
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    // AppsUseLightTheme is 0x0 in dark mode
    match std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("0x0"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light.", e);
            false
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

/// Colors used by the components' inline styles
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_app: &'static str,
    pub surface: &'static str,
    pub surface_muted: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub recording: &'static str,
    pub danger: &'static str,
    pub drop_highlight: &'static str,
    pub overlay: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_app: "#f5f5f4",
    surface: "#ffffff",
    surface_muted: "#f1f3f4",
    text_primary: "#1c1917",
    text_secondary: "#57534e",
    text_muted: "#a8a29e",
    border: "#e7e5e4",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    recording: "#ef4444",
    danger: "#dc2626",
    drop_highlight: "#e0e7ff",
    overlay: "rgba(28, 25, 23, 0.45)",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_app: "#1a1a1a",
    surface: "#242424",
    surface_muted: "#2d2d2d",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    recording: "#f87171",
    danger: "#f87171",
    drop_highlight: "#312e81",
    overlay: "rgba(0, 0, 0, 0.6)",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_modes_skip_detection() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
        assert_eq!(ResolvedTheme::Dark.attr(), "dark");
    }
}
