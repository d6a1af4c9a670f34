use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationsState::default();
    let a = state.push("Sačuvano", NotificationKind::Success);
    let b = state.push("Greška", NotificationKind::Error);
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Sačuvano");
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = NotificationsState::default();
    let a = state.push("a", NotificationKind::Info);
    let b = state.push("b", NotificationKind::Info);
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kinds_map_to_colors_and_icons() {
    assert_eq!(NotificationKind::Success.background_class(), "bg-green-500");
    assert_eq!(NotificationKind::Error.background_class(), "bg-red-500");
    assert_eq!(NotificationKind::Info.background_class(), "bg-blue-500");
    assert!(NotificationKind::Success.icon_class().contains("fa-check-circle"));
    assert!(NotificationKind::Error.icon_class().contains("fa-exclamation-circle"));
}

#[test]
fn notification_class_includes_kind_color() {
    let mut state = NotificationsState::default();
    state.push("x", NotificationKind::Error);
    assert!(state.items[0].class().ends_with("bg-red-500"));
}

#[test]
fn dismiss_delay_is_five_seconds() {
    assert_eq!(DISMISS_AFTER.as_millis(), 5000);
}
