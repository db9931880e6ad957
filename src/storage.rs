use std::path::PathBuf;

use stopwatch_core::{Theme, ThemeStore, THEME_KEY};

/// Theme preference in a `key=value` per line file. Other keys in the
/// file are carried over untouched on save.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => {
                let theme = lookup(&data, THEME_KEY).and_then(Theme::parse);
                if theme.is_none() {
                    log::warn!("no usable theme in {}, using default", self.path.display());
                }
                theme
            }
            Err(e) => {
                log::info!("no saved theme ({}): {:?}", self.path.display(), e.kind());
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) {
        let existing = std::fs::read_to_string(&self.path).unwrap_or_default();
        let data = upsert(&existing, THEME_KEY, theme.as_str());
        if let Err(e) = std::fs::write(&self.path, data) {
            log::error!("Failed to save theme to {}: {:?}", self.path.display(), e);
        }
    }
}

fn lookup<'a>(data: &'a str, key: &str) -> Option<&'a str> {
    data.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        if k.trim() == key { Some(v.trim()) } else { None }
    })
}

fn upsert(data: &str, key: &str, value: &str) -> String {
    let mut out = String::with_capacity(data.len() + key.len() + value.len() + 2);
    let mut written = false;
    for line in data.lines() {
        let is_key = line.split_once('=').map(|(k, _)| k.trim() == key).unwrap_or(false);
        if is_key {
            if !written {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
                written = true;
            }
        } else if !line.trim().is_empty() {
            out.push_str(line);
            out.push('\n');
        }
    }
    if !written {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
