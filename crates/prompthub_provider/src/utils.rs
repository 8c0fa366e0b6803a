use reqwest::{Method, StatusCode};
use url::Url;

/// Describes a prompt API request as `METHOD url`, with the response status
/// appended once one was received.
pub(crate) fn http_context(method: &Method, url: &Url, status: Option<StatusCode>) -> String {
    match status {
        Some(status) => format!("{method} {url} returned {}", status.as_u16()),
        None => format!("{method} {url}"),
    }
}
