//! Autosave/restore cycle for arbitrary forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page calls [`restore`] once the form is mounted, [`save`] from the form's
//! `input` handler and [`clear`] on submit. The snapshot is a flat
//! name -> value map stored as JSON under a caller-chosen key.
//!
//! Secrets never reach storage: password and file inputs and the CSRF token
//! are left out of every snapshot. Hidden inputs are skipped as well; their
//! values are owned by the page (e.g. the selected plan), not by the user.

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

use std::collections::BTreeMap;

use crate::util::ui_persistence;

/// Flat field name -> value map.
pub type FormSnapshot = BTreeMap<String, String>;

/// Hidden field carrying the server-issued CSRF token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// One named form control as seen by the snapshotter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry<'a> {
    pub name: &'a str,
    /// Lower-cased `type` attribute (`"text"`, `"password"`, `"select"`, ...).
    pub kind: &'a str,
    pub value: &'a str,
    /// Whether a checkbox/radio is checked; ignored for other kinds.
    pub checked: bool,
}

/// Whether a control of this name/kind may be persisted.
pub fn is_persistable(name: &str, kind: &str) -> bool {
    !name.is_empty() && name != CSRF_FIELD && !matches!(kind, "password" | "file" | "hidden" | "submit" | "button")
}

/// Build a snapshot from form controls, later entries winning on duplicate names.
pub fn snapshot_from_fields<'a, I>(fields: I) -> FormSnapshot
where
    I: IntoIterator<Item = FieldEntry<'a>>,
{
    fields
        .into_iter()
        .filter(|f| is_persistable(f.name, f.kind))
        .filter(|f| !matches!(f.kind, "checkbox" | "radio") || f.checked)
        .map(|f| (f.name.to_owned(), f.value.to_owned()))
        .collect()
}

/// What restoring one control does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreStep {
    /// Write the stored value and notify listeners.
    SetValue(String),
    /// Check this choice and notify listeners.
    Check,
    /// Uncheck without events; the checked sibling carries the notification.
    Uncheck,
}

impl RestoreStep {
    /// Whether the control counts as restored.
    pub fn is_restored(&self) -> bool {
        !matches!(self, Self::Uncheck)
    }
}

/// Decide how `entry` is restored from `snapshot`; `None` leaves it alone.
pub fn restore_step(entry: FieldEntry<'_>, snapshot: &FormSnapshot) -> Option<RestoreStep> {
    if !is_persistable(entry.name, entry.kind) {
        return None;
    }
    let stored = snapshot.get(entry.name)?;
    Some(match entry.kind {
        "checkbox" | "radio" if entry.value == stored => RestoreStep::Check,
        "checkbox" | "radio" => RestoreStep::Uncheck,
        _ => RestoreStep::SetValue(stored.clone()),
    })
}

/// Load the stored snapshot for `key`, if any.
pub fn load(key: &str) -> Option<FormSnapshot> {
    ui_persistence::load_json(key)
}

/// Forget the stored snapshot.
pub fn clear(key: &str) {
    ui_persistence::remove(key);
}

/// Write the current values of form `form_id` under `key`.
pub fn save(form_id: &str, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(form) = dom::form(form_id) else {
            return;
        };
        let controls = dom::controls(&form);
        let snapshot = snapshot_from_fields(controls.iter().map(dom::Control::entry));
        ui_persistence::save_json(key, &snapshot);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form_id, key);
    }
}

/// Fill form `form_id` from the snapshot stored under `key`.
///
/// Each restored control receives synthetic `input` and `change` events so
/// reactive bindings pick the value up. Choices that end up unchecked get no
/// events. Returns the number of restored fields.
pub fn restore(form_id: &str, key: &str) -> usize {
    let Some(snapshot) = load(key) else {
        return 0;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(form) = dom::form(form_id) else {
            return 0;
        };
        let mut restored = 0;
        for control in dom::controls(&form) {
            let Some(step) = restore_step(control.entry(), &snapshot) else {
                continue;
            };
            if step.is_restored() {
                restored += 1;
            }
            control.apply(&step);
        }
        leptos::logging::log!("autosave: restored {restored} field(s) of #{form_id}");
        restored
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form_id;
        snapshot.len()
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use wasm_bindgen::JsCast;

    use super::{FieldEntry, RestoreStep};

    pub(super) fn form(form_id: &str) -> Option<web_sys::HtmlFormElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(form_id)?
            .dyn_into::<web_sys::HtmlFormElement>()
            .ok()
    }

    /// Owned snapshot of one control plus a handle to write it back.
    pub(super) struct Control {
        element: web_sys::Element,
        name: String,
        kind: String,
        value: String,
        checked: bool,
    }

    impl Control {
        pub(super) fn entry(&self) -> FieldEntry<'_> {
            FieldEntry {
                name: &self.name,
                kind: &self.kind,
                value: &self.value,
                checked: self.checked,
            }
        }

        pub(super) fn apply(&self, step: &RestoreStep) {
            match step {
                RestoreStep::SetValue(value) => {
                    if let Some(input) = self.element.dyn_ref::<web_sys::HtmlInputElement>() {
                        input.set_value(value);
                    } else if let Some(select) = self.element.dyn_ref::<web_sys::HtmlSelectElement>() {
                        select.set_value(value);
                    } else if let Some(area) = self.element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                        area.set_value(value);
                    }
                }
                RestoreStep::Check | RestoreStep::Uncheck => {
                    if let Some(input) = self.element.dyn_ref::<web_sys::HtmlInputElement>() {
                        input.set_checked(*step == RestoreStep::Check);
                    }
                }
            }
            if step.is_restored() {
                self.notify();
            }
        }

        fn notify(&self) {
            let init = web_sys::EventInit::new();
            init.set_bubbles(true);
            for kind in ["input", "change"] {
                if let Ok(event) = web_sys::Event::new_with_event_init_dict(kind, &init) {
                    let _ = self.element.dispatch_event(&event);
                }
            }
        }
    }

    pub(super) fn controls(form: &web_sys::HtmlFormElement) -> Vec<Control> {
        let Ok(nodes) = form.query_selector_all("[name]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(read_control)
            .collect()
    }

    fn read_control(element: web_sys::Element) -> Option<Control> {
        let (name, kind, value, checked) = if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            (input.name(), input.type_().to_ascii_lowercase(), input.value(), input.checked())
        } else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
            (select.name(), "select".to_owned(), select.value(), false)
        } else if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            (area.name(), "textarea".to_owned(), area.value(), false)
        } else {
            return None;
        };
        Some(Control { element, name, kind, value, checked })
    }
}
