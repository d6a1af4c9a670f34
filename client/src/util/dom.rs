//! Thin document helpers used outside the reactive tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page renders the CSRF token into a hidden
//! `csrfmiddlewaretoken` input; requests read it from there. The other helpers
//! cover blocking alerts, focus, the global loading overlay and file downloads.
//! Every function no-ops outside the browser.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Id of the lazily created full-screen loader.
pub const LOADER_ID: &str = "globalLoader";
#[cfg(feature = "hydrate")]
const LOADER_CLASS: &str = "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50";

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// CSRF token from the hidden form field, or an empty string.
pub fn csrf_token() -> String {
    #[cfg(feature = "hydrate")]
    {
        document()
            .and_then(|d| d.query_selector("[name=csrfmiddlewaretoken]").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Blocking browser alert. Used where the page reloads right after.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

pub fn focus_element(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Show or hide `#globalLoader`, creating it on first use.
pub fn set_loading_overlay(show: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        let loader = match doc.get_element_by_id(LOADER_ID) {
            Some(el) => el,
            None => {
                let Ok(el) = doc.create_element("div") else {
                    return;
                };
                el.set_id(LOADER_ID);
                el.set_class_name(LOADER_CLASS);
                el.set_inner_html(r#"<div class="spinner"></div>"#);
                if let Some(body) = doc.body() {
                    let _ = body.append_child(&el);
                }
                el
            }
        };
        if let Some(html) = loader.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("display", if show { "flex" } else { "none" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = show;
    }
}

/// Start a download of `url` saved as `filename` through a temporary anchor.
pub fn download_file(url: &str, filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        let Some(anchor) = doc
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download(filename);
        let Some(body) = doc.body() else {
            return;
        };
        if body.append_child(&anchor).is_ok() {
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, filename);
    }
}

/// Append `<input type="hidden" name=.. value=..>` to form `form_id`.
pub fn append_hidden_input(form_id: &str, name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        let Some(form) = doc.get_element_by_id(form_id) else {
            return;
        };
        let Some(input) = doc
            .create_element("input")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        let _ = form.append_child(&input);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form_id, name, value);
    }
}

/// Submit form `form_id` natively, bypassing `submit` handlers.
pub fn submit_form(form_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(form) = document()
            .and_then(|d| d.get_element_by_id(form_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            let _ = form.submit();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form_id;
    }
}
