//! Shared request layer for the remote asset service.
//!
//! All calls go through [`send`], which attaches the stored bearer token,
//! races the fetch against a timeout, and maps failures into [`ApiError`].
//! A rejected credential (401/403) is not an operation outcome: the layer
//! clears the stored token and bounces to the login route so the guard
//! takes over.

use js_sys::{Array, Promise};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::config::{API_BASE_URL, FETCH_TIMEOUT_MS, PAGE_SIZE};
use crate::core::{session, ApiError};
use crate::models::{AppRoute, Asset};

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined, which the fetch promise never does
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Building
// =============================================================================

/// Request body variants supported by the service contract.
enum Body {
    None,
    /// JSON-encoded body with `Content-Type: application/json`.
    Json(String),
    /// Multipart form body; the browser sets the boundary header itself.
    Form(FormData),
}

/// Build a request against the API base, attaching the bearer token when a
/// session is stored.
fn build_request(method: &str, path: &str, body: Body) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    match &body {
        Body::None => {}
        Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
        Body::Form(form) => opts.set_body(form),
    }

    let url = format!("{}{}", API_BASE_URL, path);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|_| ApiError::RequestCreationFailed)?;

    let headers = request.headers();
    if let Body::Json(_) = body {
        let _ = headers.set("Content-Type", "application/json");
    }
    if let Some(token) = session::load().token() {
        let _ = headers.set("Authorization", &format!("Bearer {}", token));
    }

    Ok(request)
}

/// Dispatch a request and map the outcome into the error taxonomy.
///
/// On a rejected credential the stored token is cleared and navigation moves
/// to the login route before the error is returned.
async fn send(request: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let fetch_promise = window.fetch_with_request(&request);

    let resp: Response = match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(ApiError::Timeout),
        RaceResult::Error(msg) => return Err(ApiError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            result.dyn_into().map_err(|_| ApiError::ResponseReadFailed)?
        }
    };

    if !resp.ok() {
        let err = ApiError::from_status(resp.status());
        if err == ApiError::Unauthorized {
            session::clear();
            AppRoute::Login.push();
        }
        return Err(err);
    }

    Ok(resp)
}

/// Read a response body as text and parse it as JSON.
async fn read_json<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T, ApiError> {
    let text = JsFuture::from(resp.text().map_err(|_| ApiError::ResponseReadFailed)?)
        .await
        .map_err(|_| ApiError::ResponseReadFailed)?
        .as_string()
        .ok_or(ApiError::ResponseReadFailed)?;

    serde_json::from_str(&text).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

// =============================================================================
// Service Operations
// =============================================================================

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Exchange admin credentials for a bearer token.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password }).to_string();
    let request = build_request("POST", "/admin/login", Body::Json(body))?;
    let resp = send(request).await?;
    let login: LoginResponse = read_json(resp).await?;
    Ok(login.token)
}

/// Fetch one page of assets, in server-determined order.
///
/// The search parameter is part of the service contract but the console
/// always sends it empty.
pub async fn list_assets(page: u32) -> Result<Vec<Asset>, ApiError> {
    let path = format!("/images?search=&page={}&limit={}", page, PAGE_SIZE);
    let request = build_request("GET", &path, Body::None)?;
    let resp = send(request).await?;
    read_json(resp).await
}

/// Upload a new asset as multipart `title` + `image` fields.
///
/// The created asset in the response body is unused beyond success/failure;
/// the caller reloads instead of patching local state.
pub async fn create_asset(title: &str, file: &File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|_| ApiError::RequestCreationFailed)?;
    form.append_with_str("title", title)
        .map_err(|_| ApiError::RequestCreationFailed)?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| ApiError::RequestCreationFailed)?;

    let request = build_request("POST", "/images", Body::Form(form))?;
    send(request).await?;
    Ok(())
}

/// Update an asset's title. Only the title field is sent.
pub async fn rename_asset(id: &str, title: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "title": title }).to_string();
    let request = build_request("PUT", &format!("/images/{}", id), Body::Json(body))?;
    send(request).await?;
    Ok(())
}

/// Delete an asset by identifier.
pub async fn delete_asset(id: &str) -> Result<(), ApiError> {
    let request = build_request("DELETE", &format!("/images/{}", id), Body::None)?;
    send(request).await?;
    Ok(())
}
