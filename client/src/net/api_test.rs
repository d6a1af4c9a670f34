use super::*;
#[cfg(not(feature = "hydrate"))]
use crate::test_support::block_on_ready;

fn ok(count: Option<u64>) -> Result<ActionResponse, ApiError> {
    Ok(ActionResponse { success: true, count, ..ActionResponse::default() })
}

#[test]
fn admin_endpoints_embed_request_id() {
    assert_eq!(retry_endpoint(42), "/admin-panel/retry/42/");
    assert_eq!(skip_endpoint(7), "/admin-panel/skip/7/");
}

#[test]
fn confirm_all_success_reports_count_and_reloads() {
    let feedback = confirm_all_feedback(&ok(Some(3)));
    assert_eq!(feedback.message, "✅ Uvezeno 3 prihoda iz Email Inbox-a!");
    assert!(feedback.reload);
}

#[test]
fn confirm_all_failure_does_not_reload() {
    let feedback = confirm_all_feedback(&Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(feedback.message, "❌ Greška pri potvrđivanju");
    assert!(!feedback.reload);
}

#[test]
fn retry_distinguishes_rejection_from_transport_failure() {
    assert_eq!(retry_feedback(&ok(None)).message, "✅ Request uspješno izvršen!");
    assert_eq!(
        retry_feedback(&Err(ApiError::Rejected(Some("Retry neuspješan".to_owned())))).message,
        "❌ Request ponovo neuspješan"
    );
    assert_eq!(retry_feedback(&Err(ApiError::Decode("eof".to_owned()))).message, "❌ Greška");
}

#[test]
fn skip_success_reloads() {
    let feedback = skip_feedback(&ok(None)).expect("feedback");
    assert_eq!(feedback.message, "✅ Request preskočen");
    assert!(feedback.reload);
}

#[test]
fn skip_rejection_is_silent() {
    assert_eq!(skip_feedback(&Err(ApiError::Rejected(Some("Nije dozvoljeno".to_owned())))), None);
    let failure = skip_feedback(&Err(ApiError::Transport("offline".to_owned()))).expect("feedback");
    assert_eq!(failure.message, "❌ Greška");
    assert!(!failure.reload);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_off_browser() {
    let result = block_on_ready(retry_request(1));
    assert_eq!(result, Err(ApiError::Transport("not available on server".to_owned())));
}

