//! Theme capability: host color lookups snapshotted into plain data.
//!
//! The host's theme state (CSS custom properties in a browser embedding)
//! is injected through [`ColorResolver`] and resolved once per
//! preparation call, so trace and layout construction stay deterministic
//! under test.

use serde::{Deserialize, Serialize};

/// Light/dark rendering mode of the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Token-to-hex lookup into the host's theme state.
pub trait ColorResolver {
    fn resolve(&self, token: &str) -> Option<String>;
}

/// Resolver that knows no tokens; every lookup falls back to the static
/// palette for the active mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullColorResolver;

impl ColorResolver for NullColorResolver {
    fn resolve(&self, _token: &str) -> Option<String> {
        None
    }
}

const LIGHT_BACKGROUND: &str = "#ffffff";
const LIGHT_FOREGROUND: &str = "#1f2430";
const LIGHT_GRID: &str = "#e3e6ee";
const DARK_BACKGROUND: &str = "#14161f";
const DARK_FOREGROUND: &str = "#e6e8f0";
const DARK_GRID: &str = "#2c3040";

// Marker fallbacks when a color scheme is unset or unrecognized.
const LIGHT_MARKER: &str = "#636efa";
const DARK_MARKER: &str = "#8ab4f8";

/// Theme colors snapshotted for one preparation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub background: String,
    pub foreground: String,
    pub grid: String,
}

impl ThemeContext {
    /// Snapshots the injected resolver, falling back to the static
    /// palette for tokens the host does not define.
    #[must_use]
    pub fn resolve(mode: ThemeMode, resolver: &dyn ColorResolver) -> Self {
        let pick = |token: &str, fallback: &str| {
            resolver
                .resolve(token)
                .unwrap_or_else(|| fallback.to_owned())
        };

        match mode {
            ThemeMode::Light => Self {
                mode,
                background: pick("--background", LIGHT_BACKGROUND),
                foreground: pick("--foreground", LIGHT_FOREGROUND),
                grid: pick("--border", LIGHT_GRID),
            },
            ThemeMode::Dark => Self {
                mode,
                background: pick("--background", DARK_BACKGROUND),
                foreground: pick("--foreground", DARK_FOREGROUND),
                grid: pick("--border", DARK_GRID),
            },
        }
    }

    /// Static palette only, no host resolver.
    #[must_use]
    pub fn with_defaults(mode: ThemeMode) -> Self {
        Self::resolve(mode, &NullColorResolver)
    }

    /// Marker fallback color for the active mode.
    #[must_use]
    pub fn default_marker_color(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => LIGHT_MARKER,
            ThemeMode::Dark => DARK_MARKER,
        }
    }
}

/// Resolves a named scheme to a single marker color, falling back to the
/// mode default for unknown or unset schemes.
#[must_use]
pub fn scheme_marker_color(scheme: Option<&str>, theme: &ThemeContext) -> String {
    match scheme {
        Some("viridis") => "#21918c".to_owned(),
        Some("plasma") => "#9c179e".to_owned(),
        Some("warm") => "#f58518".to_owned(),
        Some("cool") => "#4c78a8".to_owned(),
        _ => theme.default_marker_color().to_owned(),
    }
}

/// Resolves a named scheme to a renderer colorscale identifier for
/// surface and mesh traces.
#[must_use]
pub fn scheme_colorscale(scheme: Option<&str>) -> &'static str {
    match scheme {
        Some("plasma") => "Plasma",
        Some("warm") => "YlOrRd",
        Some("cool") => "Blues",
        _ => "Viridis",
    }
}
