//! Form-encoded POST helpers for the server's JSON action endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with multipart
//! `FormData` bodies. Server-side (SSR): stubs returning an error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<ActionResponse, ApiError>`. The
//! `*_feedback` functions turn that result into the single message the page
//! shows, plus whether the page should reload. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActionResponse, ApiError};
#[cfg(feature = "hydrate")]
use crate::util::autosave::CSRF_FIELD;
#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Form field that asks the inbox page to confirm every pending item.
pub const CONFIRM_ALL_FIELD: &str = "confirm_all";
/// Header carrying the CSRF token on admin actions.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Endpoint receiving uploaded bank statements.
pub const DOCUMENT_UPLOAD_ENDPOINT: &str = "/izvodi/upload/";
/// Multipart field name for uploaded files.
pub const DOCUMENT_FIELD: &str = "documents";
/// Creates an invoice and answers with its generated document.
pub const INVOICE_ENDPOINT: &str = "/fakture/";
/// Creates a payment slip and answers with its generated image.
pub const PAYMENT_SLIP_ENDPOINT: &str = "/uplatnice/";

pub fn retry_endpoint(request_id: u64) -> String {
    format!("/admin-panel/retry/{request_id}/")
}

pub fn skip_endpoint(request_id: u64) -> String {
    format!("/admin-panel/skip/{request_id}/")
}

/// What the page shows after an action, and whether it reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionFeedback {
    pub message: String,
    pub reload: bool,
}

impl ActionFeedback {
    fn done(message: impl Into<String>) -> Self {
        Self { message: message.into(), reload: true }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self { message: message.into(), reload: false }
    }
}

pub fn confirm_all_feedback(result: &Result<ActionResponse, ApiError>) -> ActionFeedback {
    match result {
        Ok(resp) => ActionFeedback::done(format!(
            "✅ Uvezeno {} prihoda iz Email Inbox-a!",
            resp.count.unwrap_or(0)
        )),
        Err(_) => ActionFeedback::failed("❌ Greška pri potvrđivanju"),
    }
}

pub fn retry_feedback(result: &Result<ActionResponse, ApiError>) -> ActionFeedback {
    match result {
        Ok(_) => ActionFeedback::done("✅ Request uspješno izvršen!"),
        Err(ApiError::Rejected(_)) => ActionFeedback::failed("❌ Request ponovo neuspješan"),
        Err(_) => ActionFeedback::failed("❌ Greška"),
    }
}

/// Skip outcome; a server-side refusal is left silent and the page unchanged.
pub fn skip_feedback(result: &Result<ActionResponse, ApiError>) -> Option<ActionFeedback> {
    match result {
        Ok(_) => Some(ActionFeedback::done("✅ Request preskočen")),
        Err(err) if err.is_rejection() => None,
        Err(_) => Some(ActionFeedback::failed("❌ Greška")),
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request, url: &str) -> Result<ActionResponse, ApiError> {
    log::debug!("POST {url}");
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    super::types::parse_action_response(&body).inspect_err(|e| leptos::logging::warn!("POST {url}: {e}"))
}

#[cfg(feature = "hydrate")]
fn form_data(fields: &[(&str, &str)]) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    }
    Ok(data)
}

/// POST `fields` as multipart form data to `url`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the body is not JSON, or the
/// server reports `success: false`.
pub async fn submit_fields(url: &str, fields: &[(&str, &str)]) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let data = form_data(fields)?;
        let request = gloo_net::http::Request::post(url)
            .body(data)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send(request, url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, fields);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// POST every field of form `form_id` to `url`.
///
/// # Errors
///
/// Same as [`submit_fields`]; a missing form is a transport error.
pub async fn submit_form(form_id: &str, url: &str) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let form = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(form_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
            .ok_or_else(|| ApiError::Transport(format!("form #{form_id} not found")))?;
        let data = web_sys::FormData::new_with_form(&form).map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        let request = gloo_net::http::Request::post(url)
            .body(data)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send(request, url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form_id, url);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Empty POST authenticated by the `X-CSRFToken` header.
async fn post_with_csrf_header(url: &str) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(url)
            .header(CSRF_HEADER, &dom::csrf_token())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send(request, url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Confirm every pending inbox item by posting to the inbox page itself.
///
/// # Errors
///
/// See [`submit_fields`].
pub async fn confirm_all(page_url: &str) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = dom::csrf_token();
        submit_fields(page_url, &[(CONFIRM_ALL_FIELD, "true"), (CSRF_FIELD, &token)]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        submit_fields(page_url, &[(CONFIRM_ALL_FIELD, "true")]).await
    }
}

/// Re-run a failed background request (administrators only).
///
/// # Errors
///
/// See [`submit_fields`].
pub async fn retry_request(request_id: u64) -> Result<ActionResponse, ApiError> {
    post_with_csrf_header(&retry_endpoint(request_id)).await
}

/// Mark a failed background request as skipped (administrators only).
///
/// # Errors
///
/// See [`submit_fields`].
pub async fn skip_request(request_id: u64) -> Result<ActionResponse, ApiError> {
    post_with_csrf_header(&skip_endpoint(request_id)).await
}

/// Upload accepted files as repeated `documents` fields.
///
/// # Errors
///
/// See [`submit_fields`].
#[cfg(feature = "hydrate")]
pub async fn upload_documents(url: &str, files: &[web_sys::File]) -> Result<ActionResponse, ApiError> {
    let token = dom::csrf_token();
    let data = form_data(&[(CSRF_FIELD, &token)])?;
    for file in files {
        data.append_with_blob_and_filename(DOCUMENT_FIELD, file, &file.name())
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    }
    let request = gloo_net::http::Request::post(url)
        .body(data)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    send(request, url).await
}
