pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Toggle button glyph: offers the opposite theme.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// Persists the theme preference. Best-effort: failures are the store's
/// problem and never reach the caller.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

#[derive(Default, Debug)]
pub struct MemoryThemeStore {
    saved: Option<Theme>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self { saved: None }
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { saved: Some(theme) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.saved
    }

    fn save(&mut self, theme: Theme) {
        self.saved = Some(theme);
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let theme = store.load().unwrap_or_default();
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(self.theme);
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
