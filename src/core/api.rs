//! Backend API client.
//!
//! Every call carries the session token as a query parameter. Data and
//! download requests race a timeout (aborting the fetch); uploads do not,
//! since large files may legitimately take longer.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, Blob, FormData};

use super::error::ApiError;
use crate::config::{FETCH_TIMEOUT_MS, TOKEN_PARAM, api};
use crate::models::{ApiData, Session};
use crate::utils::encode_component;

/// Multipart field carrying the destination path.
const FORM_PATH_FIELD: &str = "path";
/// Multipart field carrying the file body.
const FORM_FILE_FIELD: &str = "file";

/// Client for the resource API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    token: String,
}

impl ApiClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Client for the session's token.
    pub fn for_session(session: &Session) -> Result<Self, ApiError> {
        session
            .token()
            .map(Self::new)
            .ok_or(ApiError::MissingToken)
    }

    fn token_query(&self) -> String {
        format!("{}={}", TOKEN_PARAM, encode_component(&self.token))
    }

    // =========================================================================
    // URLs
    // =========================================================================

    pub fn data_url(&self) -> String {
        format!("{}?{}", api::DATA, self.token_query())
    }

    /// Download URL, also used directly as an `<img>` source.
    pub fn download_url(&self, path: &str) -> String {
        format!(
            "{}?path={}&{}",
            api::DOWNLOAD,
            encode_component(path),
            self.token_query()
        )
    }

    pub fn upload_url(&self) -> String {
        format!("{}?{}", api::UPLOAD, self.token_query())
    }

    pub fn delete_url(&self, path: &str) -> String {
        format!(
            "{}?path={}&{}",
            api::DELETE,
            encode_component(path),
            self.token_query()
        )
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Fetch the file tree and item registry.
    pub async fn fetch_data(&self) -> Result<ApiData, ApiError> {
        let response = send_with_timeout(Request::get(&self.data_url())).await?;
        Ok(response.json::<ApiData>().await?)
    }

    /// Download a file as text.
    pub async fn download_text(&self, path: &str) -> Result<String, ApiError> {
        let response = send_with_timeout(Request::get(&self.download_url(path))).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Check that a file is downloadable and return its URL.
    ///
    /// Used for images, which the browser loads from the URL itself.
    pub async fn check_download(&self, path: &str) -> Result<String, ApiError> {
        let url = self.download_url(path);
        send_with_timeout(Request::get(&url)).await?;
        Ok(url)
    }

    /// Upload a blob to `path`, creating parent folders server-side.
    pub async fn upload(&self, path: &str, body: &Blob) -> Result<(), ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Request("FormData unavailable".into()))?;
        form.append_with_str(FORM_PATH_FIELD, path)
            .map_err(|_| ApiError::Request("invalid path field".into()))?;
        form.append_with_blob(FORM_FILE_FIELD, body)
            .map_err(|_| ApiError::Request("invalid file field".into()))?;

        let response = Request::post(&self.upload_url()).body(form)?.send().await?;
        ensure_ok(response).map(|_| ())
    }

    /// Delete a file or folder (recursively) at `path`.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.delete_url(path)).send().await?;
        ensure_ok(response).map(|_| ())
    }
}

/// Reject non-2xx responses.
fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Http(response.status()))
    }
}

/// Send a request, aborting it after `FETCH_TIMEOUT_MS`.
async fn send_with_timeout(builder: RequestBuilder) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Request("AbortController unavailable".into()))?;
    let signal = controller.signal();

    let abort_timer = Timeout::new(FETCH_TIMEOUT_MS, move || controller.abort());
    let result = builder.abort_signal(Some(&signal)).send().await;
    // Dropping the timer cancels it
    drop(abort_timer);

    match result {
        Err(_) if signal.aborted() => Err(ApiError::Timeout),
        Err(e) => Err(e.into()),
        Ok(response) => ensure_ok(response),
    }
}
