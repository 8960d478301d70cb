use log::warn;
use yew::prelude::*;

use crate::config;
use crate::services::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Dark unless a non-empty preference other than "dark" was stored.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") | Some("") | None => Theme::Dark,
            Some(_) => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon for the toggle button: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn load(kv: &impl KeyValueStore) -> Self {
        Theme::from_stored(kv.get(config::THEME_KEY).as_deref())
    }

    pub fn save(self, kv: &impl KeyValueStore) {
        if let Err(e) = kv.set(config::THEME_KEY, self.as_str()) {
            warn!("Could not persist theme: {}", e);
        }
    }

    pub fn classes(self) -> &'static ThemeClasses {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Tailwind class sets that differ between the two themes.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeClasses {
    pub bg: &'static str,
    pub text: &'static str,
    pub text_sub: &'static str,
    pub border: &'static str,
    pub card_bg: &'static str,
    pub card_hover: &'static str,
    pub nav_bg: &'static str,
    pub menu_bg: &'static str,
    pub hero_gradient: &'static str,
    pub input_bg: &'static str,
    pub sticky_bar: &'static str,
    pub sticky_button: &'static str,
    pub alert_bg: &'static str,
    pub alert_text: &'static str,
    pub alert_shadow: &'static str,
}

static DARK: ThemeClasses = ThemeClasses {
    bg: "bg-black",
    text: "text-white",
    text_sub: "text-gray-400",
    border: "border-white/10",
    card_bg: "bg-zinc-900/40 border-gray-700",
    card_hover: "hover:bg-zinc-900/70",
    nav_bg: "bg-black/60",
    menu_bg: "bg-black/95",
    hero_gradient: "from-zinc-900/40 via-black to-black",
    input_bg: "bg-black border-gray-700 focus:border-orange-500",
    sticky_bar: "bg-orange-600 text-black",
    sticky_button: "bg-black text-orange-500",
    alert_bg: "bg-red-900/40 border-red-600",
    alert_text: "text-red-400",
    alert_shadow: "shadow-red-600/40",
};

static LIGHT: ThemeClasses = ThemeClasses {
    bg: "bg-white",
    text: "text-gray-900",
    text_sub: "text-gray-600",
    border: "border-black/10",
    card_bg: "bg-gray-100 border-gray-200",
    card_hover: "hover:bg-gray-200",
    nav_bg: "bg-white/80",
    menu_bg: "bg-white/95",
    hero_gradient: "from-gray-200/40 via-white to-white",
    input_bg: "bg-white border-gray-300 focus:border-orange-600",
    sticky_bar: "bg-orange-500 text-white",
    sticky_button: "bg-white text-orange-600",
    alert_bg: "bg-red-50 border-red-200",
    alert_text: "text-red-600",
    alert_shadow: "shadow-red-200",
};

/// Current theme plus the toggle, shared through context by the app root.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    pub fn classes(&self) -> &'static ThemeClasses {
        self.theme.classes()
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::Dark,
        toggle: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        // anything else stored is "not dark"
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    }

    #[test]
    fn toggle_persists_preference() {
        let kv = MemoryStore::default();
        let theme = Theme::load(&kv);
        assert!(theme.is_dark());

        let theme = theme.toggled();
        theme.save(&kv);
        assert_eq!(kv.raw(config::THEME_KEY).as_deref(), Some("light"));
        assert_eq!(Theme::load(&kv), Theme::Light);

        theme.toggled().save(&kv);
        assert_eq!(Theme::load(&kv), Theme::Dark);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Dark.classes(), Theme::Light.classes());
        assert_eq!(Theme::Light.classes().bg, "bg-white");
    }
}
