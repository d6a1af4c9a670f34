//! Page-level navigation: language switch, reload, redirect.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Interface languages the server can activate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Sr,
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Sr, Self::En];

    pub fn code(self) -> &'static str {
        match self {
            Self::Sr => "sr",
            Self::En => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sr => "Srpski",
            Self::En => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Language from a BCP 47 tag such as `en-US` or `sr-Latn`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::from_code(tag.trim().split(['-', '_']).next().unwrap_or_default())
    }
}

/// Active language as rendered into `<html lang>`; the default off-browser
/// or when the tag is missing.
pub fn current_language() -> Language {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|html| html.get_attribute("lang"))
            .and_then(|tag| Language::from_tag(&tag))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

/// Server route that switches the session language and redirects back.
pub fn language_path(lang: Language) -> String {
    format!("/change-language/{}/", lang.code())
}

pub fn change_language(lang: Language) {
    redirect(&language_path(lang));
}

/// Navigate the whole document to `href`.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Current document URL; empty off-browser.
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
