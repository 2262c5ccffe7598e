//! Light/dark theme model and the platform color-scheme signal.
//!
//! The session reads the platform preference once when it starts and then
//! listens for changes through [`ThemePreference::on_change`]. Subscriptions are
//! explicit handles so a rebuilt session never inherits stale listeners.
//!
//! Terminals expose no change notification for their color scheme, so the
//! bundled binary seeds [`PreferenceSignal`] once from `COLORFGBG` and never
//! calls [`PreferenceSignal::set`]. In that host the theme changes only through
//! `toggle`; embedding hosts with a real platform signal drive `set` themselves.

use crossterm::style::Color;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};

/// Active visual theme of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

/// Background/foreground pair applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: Color,
    pub foreground: Color,
}

const INK: Color = Color::Rgb {
    r: 0x0c,
    g: 0x11,
    b: 0x17,
};
const IVORY: Color = Color::Rgb {
    r: 0xff,
    g: 0xff,
    b: 0xf0,
};

impl Theme {
    /// Theme implied by a "prefers dark" platform signal.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The opposite theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse `light` / `dark`, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Self::Dark => ThemePalette {
                background: INK,
                foreground: IVORY,
            },
            Self::Light => ThemePalette {
                background: IVORY,
                foreground: INK,
            },
        }
    }
}

/// Callback invoked with the newly preferred theme.
pub type PreferenceCallback = Arc<dyn Fn(Theme) + Send + Sync>;

/// Narrow view of the platform color-scheme preference.
pub trait ThemePreference: Send + Sync {
    /// Read the current "prefers dark" value.
    fn prefers_dark(&self) -> bool;
    /// Register a change listener; dropping the handle unsubscribes.
    fn on_change(&self, callback: PreferenceCallback) -> PreferenceSubscription;
}

#[derive(Default)]
struct SignalState {
    prefers_dark: bool,
    next_id: u64,
    listeners: BTreeMap<u64, PreferenceCallback>,
}

/// In-process preference signal with change notification.
///
/// Hosts seed it from whatever the platform reports and call [`set`] when the
/// platform announces a change.
///
/// [`set`]: PreferenceSignal::set
#[derive(Clone, Default)]
pub struct PreferenceSignal {
    state: Arc<Mutex<SignalState>>,
}

impl PreferenceSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(SignalState {
                prefers_dark,
                ..SignalState::default()
            })),
        }
    }

    /// Update the preference and notify listeners when the value changed.
    pub fn set(&self, prefers_dark: bool) {
        let callbacks: Vec<PreferenceCallback> = {
            let Ok(mut state) = self.state.lock() else {
                return;
            };
            if state.prefers_dark == prefers_dark {
                return;
            }
            state.prefers_dark = prefers_dark;
            state.listeners.values().cloned().collect()
        };
        let theme = Theme::from_prefers_dark(prefers_dark);
        for callback in callbacks {
            callback(theme);
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.state
            .lock()
            .map(|state| state.listeners.len())
            .unwrap_or(0)
    }
}

impl ThemePreference for PreferenceSignal {
    fn prefers_dark(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.prefers_dark)
            .unwrap_or(true)
    }

    fn on_change(&self, callback: PreferenceCallback) -> PreferenceSubscription {
        let id = match self.state.lock() {
            Ok(mut state) => {
                let id = state.next_id;
                state.next_id += 1;
                state.listeners.insert(id, callback);
                id
            }
            Err(_) => return PreferenceSubscription::inert(),
        };
        PreferenceSubscription {
            id,
            state: Arc::downgrade(&self.state),
        }
    }
}

/// Handle for one registered preference listener.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct PreferenceSubscription {
    id: u64,
    state: Weak<Mutex<SignalState>>,
}

impl PreferenceSubscription {
    /// A handle that is not attached to any signal.
    pub fn inert() -> Self {
        Self {
            id: 0,
            state: Weak::new(),
        }
    }

    /// Explicitly remove the listener.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for PreferenceSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.lock() {
                state.listeners.remove(&self.id);
            }
        }
    }
}

/// Infer "prefers dark" from the `COLORFGBG` terminal hint (`fg;bg`).
///
/// Background indexes 7 and 15 are light; other numeric values are dark.
pub fn detect_terminal_preference<F>(env_lookup: F) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = env_lookup("COLORFGBG")?;
    let background = raw.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(!matches!(background, 7 | 15))
}
