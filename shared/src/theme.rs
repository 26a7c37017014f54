//! Seasonal themes.
//!
//! Every month of the year has one decorative palette. The site picks the one
//! for the current local month; anything outside 1..=12 resolves to
//! [`FALLBACK_MONTH`].

use chrono::Datelike;
use serde::Serialize;

/// Month whose theme is used when a lookup has no exact match
pub const FALLBACK_MONTH: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    NewYear,
    Valentine,
    Spring,
    Easter,
    MothersDay,
    Summer,
    ColombiaDay,
    Kites,
    LoveFriendship,
    Halloween,
    Thanksgiving,
    Christmas,
}

impl ThemeName {
    /// Stable id, also used as a CSS class on the page root
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::NewYear => "new-year",
            ThemeName::Valentine => "valentine",
            ThemeName::Spring => "spring",
            ThemeName::Easter => "easter",
            ThemeName::MothersDay => "mothers-day",
            ThemeName::Summer => "summer",
            ThemeName::ColombiaDay => "colombia-day",
            ThemeName::Kites => "kites",
            ThemeName::LoveFriendship => "love-friendship",
            ThemeName::Halloween => "halloween",
            ThemeName::Thanksgiving => "thanksgiving",
            ThemeName::Christmas => "christmas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: ThemeName,
    pub month: u32,
    pub colors: ThemeColors,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub decorations: &'static [&'static str],
    pub particles: &'static [&'static str],
    /// RGB triple of the ambient glow drawn behind the menu
    pub glow_rgb: (u8, u8, u8),
}

impl Theme {
    /// Inline style for a page root using this theme
    pub fn css_variables(&self) -> String {
        format!(
            "--theme-bg: {}; --theme-primary: {}; --theme-secondary: {}; --theme-accent: {}; --theme-glow: {}, {}, {};",
            self.colors.background,
            self.colors.primary,
            self.colors.secondary,
            self.colors.accent,
            self.glow_rgb.0,
            self.glow_rgb.1,
            self.glow_rgb.2,
        )
    }

    /// Decoration at `index`, wrapping around the list
    pub fn decoration(&self, index: usize) -> &'static str {
        self.decorations[index % self.decorations.len()]
    }
}

const TITLE: &str = "LICEO LUMEN";

static THEMES: [Theme; 12] = [
    Theme {
        name: ThemeName::NewYear,
        month: 1,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #2a1f5a 0%, #504c60 50%, #694ea4 100%)",
            primary: "#ffd700",
            secondary: "#c06c98ff",
            accent: "#00ffff",
        },
        title: TITLE,
        subtitle: "✨ Nuevo Año, Nuevos Sueños ✨",
        decorations: &["🎆", "🎊", "✨", "🎉"],
        particles: &["✨", "🎊", "🎆", "⭐"],
        glow_rgb: (255, 215, 0),
    },
    Theme {
        name: ThemeName::Valentine,
        month: 2,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #2d0a1e 0%, #4a0a2e 50%, #6d1040 100%)",
            primary: "#ff1493",
            secondary: "#ff69b4",
            accent: "#ffb6c1",
        },
        title: TITLE,
        subtitle: "💕 Con Amor y Dedicación 💕",
        decorations: &["💖", "💝", "💗", "💓"],
        particles: &["💕", "💖", "💗", "💝"],
        glow_rgb: (255, 20, 147),
    },
    Theme {
        name: ThemeName::Spring,
        month: 3,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #1a3a1a 0%, #2d5a2d 50%, #407a40 100%)",
            primary: "#32cd32",
            secondary: "#ff69b4",
            accent: "#ffff00",
        },
        title: TITLE,
        subtitle: "🌸 Floreciendo con Conocimiento 🌸",
        decorations: &["🌸", "🦋", "🌺", "🌼"],
        particles: &["🌸", "🌺", "🦋", "🌼"],
        glow_rgb: (50, 205, 50),
    },
    Theme {
        name: ThemeName::Easter,
        month: 4,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #4a2a0a 0%, #6a4a2a 50%, #8a6a4a 100%)",
            primary: "#ffd700",
            secondary: "#ff69b4",
            accent: "#87ceeb",
        },
        title: TITLE,
        subtitle: "🐰 Renovación y Esperanza 🐰",
        decorations: &["🐰", "🥚", "🐣", "🌷"],
        particles: &["🐰", "🥚", "🐣", "🌷"],
        glow_rgb: (100, 100, 200),
    },
    Theme {
        name: ThemeName::MothersDay,
        month: 5,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #2d1a3a 0%, #4a2a5a 50%, #6a4a7a 100%)",
            primary: "#ff69b4",
            secondary: "#dda0dd",
            accent: "#fff",
        },
        title: TITLE,
        subtitle: "👩 Celebrando a Mamá 👩",
        decorations: &["🌹", "💝", "🌺", "💐"],
        particles: &["🌹", "💝", "🌺", "💐"],
        glow_rgb: (100, 100, 200),
    },
    Theme {
        name: ThemeName::Summer,
        month: 6,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #0a3a5a 0%, #1a5a8a 50%, #2a7aba 100%)",
            primary: "#ffd700",
            secondary: "#ff8c00",
            accent: "#00bfff",
        },
        title: TITLE,
        subtitle: "☀️ Verano de Aprendizaje ☀️",
        decorations: &["☀️", "🌊", "🏖️", "🍉"],
        particles: &["☀️", "🌊", "🏖️", "⛱️"],
        glow_rgb: (0, 191, 255),
    },
    Theme {
        name: ThemeName::ColombiaDay,
        month: 7,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #1a1a3a 0%, #2a2a5a 50%, #3a3a7a 100%)",
            primary: "#fcd116",
            secondary: "#003893",
            accent: "#ce1126",
        },
        title: TITLE,
        subtitle: "🇨🇴 Orgullo Colombiano 🇨🇴",
        decorations: &["🇨🇴", "⭐", "🎆", "🎉"],
        particles: &["🇨🇴", "⭐", "🎆", "🎉"],
        glow_rgb: (252, 209, 22),
    },
    Theme {
        name: ThemeName::Kites,
        month: 8,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #2a3a5a 0%, #4a5a8a 50%, #6a7aba 100%)",
            primary: "#00bfff",
            secondary: "#ff69b4",
            accent: "#ffd700",
        },
        title: TITLE,
        subtitle: "🪁 Volando Alto 🪁",
        decorations: &["🪁", "☁️", "🌈", "🦅"],
        particles: &["🪁", "☁️", "🌈", "✨"],
        glow_rgb: (0, 191, 255),
    },
    Theme {
        name: ThemeName::LoveFriendship,
        month: 9,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #3a1a2a 0%, #5a2a4a 50%, #7a3a6a 100%)",
            primary: "#ff1493",
            secondary: "#ff69b4",
            accent: "#ffd700",
        },
        title: TITLE,
        subtitle: "💖 Amor y Amistad 💖",
        decorations: &["💖", "💕", "🎁", "🎈"],
        particles: &["💖", "💕", "💝", "🎁"],
        glow_rgb: (255, 20, 147),
    },
    Theme {
        name: ThemeName::Halloween,
        month: 10,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #0a0a1a 0%, #1a0a2e 50%, #2d1b3d 100%)",
            primary: "#ff8c00",
            secondary: "#8a2be2",
            accent: "#dda0dd",
        },
        title: TITLE,
        subtitle: "🕸️ Portal de las Sombras 🕸️",
        decorations: &["🦇", "👻", "🕷️", "🕸️"],
        particles: &["🎃", "👻", "🕷️", "🕸️"],
        glow_rgb: (139, 0, 139),
    },
    Theme {
        name: ThemeName::Thanksgiving,
        month: 11,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #f5f0e8 0%, #e8dcc8 50%, #d4c4a8 100%)",
            primary: "#d99058",
            secondary: "#c1774a",
            accent: "#fce4d3",
        },
        title: TITLE,
        subtitle: "🍂 Gratitud y Abundancia 🍂",
        decorations: &["🍂", "🦃", "🌾", "🍁"],
        particles: &["🍂", "🍁", "🌾", "🦃"],
        glow_rgb: (100, 100, 200),
    },
    Theme {
        name: ThemeName::Christmas,
        month: 12,
        colors: ThemeColors {
            background: "linear-gradient(to bottom, #0a1428 0%, #1a2850 50%, #2a3c78 100%)",
            primary: "#e0f4ff",
            secondary: "#4dd0ff",
            accent: "#ffffff",
        },
        title: TITLE,
        subtitle: "❄️ Magia Invernal ❄️",
        decorations: &["❄️", "⛄", "🎄", "✨", "🎅", "🔔", "⛷️"],
        particles: &["❄️", "✨", "⭐", "💎", "🎅"],
        glow_rgb: (0, 100, 200),
    },
];

/// Theme for `month` (1-12), or the fallback theme for any other value
pub fn theme_for_month(month: u32) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.month == month)
        .unwrap_or_else(fallback_theme)
}

pub fn fallback_theme() -> &'static Theme {
    &THEMES[(FALLBACK_MONTH - 1) as usize]
}

/// Theme for the current local month
pub fn current_theme() -> &'static Theme {
    theme_for_month(chrono::Local::now().month())
}

pub fn all_themes() -> &'static [Theme] {
    &THEMES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_month_resolves_to_its_own_theme() {
        for month in 1..=12 {
            assert_eq!(theme_for_month(month).month, month);
        }
    }

    #[test]
    fn test_out_of_range_months_use_fallback() {
        for month in [0, 13, 42, u32::MAX] {
            let theme = theme_for_month(month);
            assert_eq!(theme.name, ThemeName::Halloween);
            assert_eq!(theme.month, FALLBACK_MONTH);
        }
    }

    #[test]
    fn test_theme_table_has_one_entry_per_month() {
        let months: HashSet<u32> = all_themes().iter().map(|theme| theme.month).collect();
        assert_eq!(months.len(), 12);
        assert_eq!(all_themes().len(), 12);

        let names: HashSet<&str> = all_themes().iter().map(|theme| theme.name.as_str()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_every_theme_has_icons() {
        for theme in all_themes() {
            assert!(!theme.decorations.is_empty(), "{} has no decorations", theme.name.as_str());
            assert!(!theme.particles.is_empty(), "{} has no particles", theme.name.as_str());
        }
    }

    #[test]
    fn test_decoration_wraps_around() {
        let theme = theme_for_month(10);
        assert_eq!(theme.decoration(0), "🦇");
        assert_eq!(theme.decoration(4), "🦇");
        assert_eq!(theme.decoration(5), "👻");
    }

    #[test]
    fn test_css_variables_carry_palette() {
        let css = theme_for_month(12).css_variables();
        assert!(css.contains("--theme-primary: #e0f4ff;"));
        assert!(css.contains("--theme-glow: 0, 100, 200;"));
    }

    #[test]
    fn test_theme_name_serializes_as_id() {
        let json = serde_json::to_string(&ThemeName::ColombiaDay).unwrap();
        assert_eq!(json, "\"colombia-day\"");
    }
}
