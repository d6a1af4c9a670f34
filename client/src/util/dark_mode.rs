//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from the `darkMode` key in `localStorage` and
//! toggles the `dark-mode` class on `<body>`. Toggle writes the new value back
//! and swaps the toggle icon. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "darkMode";

/// Class applied to `<body>` while dark mode is on.
pub const BODY_CLASS: &str = "dark-mode";

/// Read the dark mode preference from localStorage.
///
/// Dark mode is on only when the stored value is `"true"`; a missing key
/// means light.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        is_enabled(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Interpret a stored `darkMode` value.
pub fn is_enabled(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// Add or remove the `dark-mode` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(BODY_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
            }
        }
        leptos::logging::log!("dark mode: {next}");
    }
    next
}

/// Font Awesome icon for the toggle: a sun while dark, a moon while light.
pub fn icon_class(enabled: bool) -> &'static str {
    if enabled { "fas fa-sun" } else { "fas fa-moon" }
}
