use super::*;

fn field<'a>(name: &'a str, kind: &'a str, value: &'a str) -> FieldEntry<'a> {
    FieldEntry { name, kind, value, checked: false }
}

#[test]
fn snapshot_keeps_plain_fields() {
    let snapshot = snapshot_from_fields([field("ime", "text", "Ana"), field("plan", "select", "Business")]);
    assert_eq!(snapshot.get("ime").map(String::as_str), Some("Ana"));
    assert_eq!(snapshot.get("plan").map(String::as_str), Some("Business"));
}

#[test]
fn snapshot_excludes_secrets() {
    let snapshot = snapshot_from_fields([
        field("password", "password", "tajna1234"),
        field(CSRF_FIELD, "hidden", "token"),
        field("documents", "file", "C:\\fakepath\\a.pdf"),
        field("email", "email", "a@b.ba"),
    ]);
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.contains_key("email"));
}

#[test]
fn snapshot_keeps_only_checked_choices() {
    let snapshot = snapshot_from_fields([
        FieldEntry { name: "billing", kind: "radio", value: "monthly", checked: false },
        FieldEntry { name: "billing", kind: "radio", value: "yearly", checked: true },
        FieldEntry { name: "newsletter", kind: "checkbox", value: "on", checked: false },
    ]);
    assert_eq!(snapshot.get("billing").map(String::as_str), Some("yearly"));
    assert!(!snapshot.contains_key("newsletter"));
}

#[test]
fn unnamed_and_button_controls_are_ignored() {
    assert!(!is_persistable("", "text"));
    assert!(!is_persistable("go", "submit"));
    assert!(is_persistable("napomena", "textarea"));
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = snapshot_from_fields([field("jib", "text", "4401234567890")]);
    let raw = serde_json::to_string(&snapshot).expect("serialize");
    assert_eq!(raw, r#"{"jib":"4401234567890"}"#);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_without_browser_restores_nothing() {
    assert_eq!(restore("registerForm", "epausa_register_draft"), 0);
    save("registerForm", "epausa_register_draft");
    clear("epausa_register_draft");
}

#[test]
fn hidden_fields_are_never_persisted() {
    let snapshot = snapshot_from_fields([field("plan", "hidden", "Enterprise"), field("ime", "text", "Ana")]);
    assert!(!snapshot.contains_key("plan"));
    assert!(!is_persistable("plan", "hidden"));
}

#[test]
fn stale_hidden_value_is_not_restored() {
    let stored: FormSnapshot = [("plan".to_owned(), "Starter".to_owned())].into();
    assert_eq!(restore_step(field("plan", "hidden", "Business"), &stored), None);
}

#[test]
fn radio_restore_notifies_only_the_checked_choice() {
    let stored: FormSnapshot = [("billing_period".to_owned(), "monthly".to_owned())].into();
    let radios = [field("billing_period", "radio", "monthly"), field("billing_period", "radio", "yearly")];
    let steps: Vec<_> = radios.into_iter().map(|r| restore_step(r, &stored)).collect();
    assert_eq!(steps, vec![Some(RestoreStep::Check), Some(RestoreStep::Uncheck)]);
    assert!(steps[0].as_ref().is_some_and(RestoreStep::is_restored));
    assert!(!steps[1].as_ref().is_some_and(RestoreStep::is_restored));
}

#[test]
fn text_restore_writes_stored_value() {
    let stored: FormSnapshot = [("jib".to_owned(), "4401234567890".to_owned())].into();
    assert_eq!(
        restore_step(field("jib", "text", ""), &stored),
        Some(RestoreStep::SetValue("4401234567890".to_owned()))
    );
    assert_eq!(restore_step(field("email", "email", ""), &stored), None);
}
