//! CSRF Token Acquisition
//!
//! The backend issues the token as a cookie. If the cookie is not set yet,
//! hitting the token endpoint sets it. Calling this repeatedly is harmless.

use inventory_core::{ApiError, CsrfToken};
use wasm_bindgen::JsCast;

use super::{check_status, network_error, HttpApi};

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub(super) async fn acquire_csrf_token(api: &HttpApi) -> Result<CsrfToken, ApiError> {
    if let Some(token) = read_csrf_cookie() {
        return Ok(CsrfToken(token));
    }

    let response = api
        .client
        .get(api.url("/api/csrf/"))
        .send()
        .await
        .map_err(network_error)?;
    check_status(response).await?;

    read_csrf_cookie()
        .map(CsrfToken)
        .ok_or(ApiError::MissingCsrfToken)
}

fn read_csrf_cookie() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    parse_cookie(&cookies, CSRF_COOKIE)
}

/// Value of `name` in a `document.cookie` string
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let cookies = "sessionid=abc; csrftoken=Xy9Z; theme=dark";
        assert_eq!(parse_cookie(cookies, "csrftoken"), Some("Xy9Z".to_string()));
        assert_eq!(parse_cookie(cookies, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_parse_cookie_missing_or_empty() {
        assert_eq!(parse_cookie("", CSRF_COOKIE), None);
        assert_eq!(parse_cookie("xcsrftoken=1", CSRF_COOKIE), None);
        assert_eq!(parse_cookie("csrftoken=", CSRF_COOKIE), None);
    }
}
