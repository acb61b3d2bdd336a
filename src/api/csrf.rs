//! Anti-forgery token handling.
//!
//! The backend drops the token into a cookie when the CSRF endpoint is hit.
//! Every call reads it back from the cookie jar, percent-decodes it and
//! echoes it in a header.

use std::sync::Arc;

use percent_encoding::percent_decode_str;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Url;

use crate::api::error::RequestError;
use crate::config::CsrfConfig;

pub struct CsrfSession {
    jar: Arc<Jar>,
    cookie_name: String,
    header_name: HeaderName,
}

impl CsrfSession {
    pub fn new(config: &CsrfConfig) -> Result<Self, RequestError> {
        let header_name = HeaderName::from_bytes(config.header_name.as_bytes()).map_err(|e| {
            RequestError::InvalidInput(format!(
                "Invalid CSRF header name '{}': {}",
                config.header_name, e
            ))
        })?;

        Ok(Self {
            jar: Arc::new(Jar::default()),
            cookie_name: config.cookie_name.clone(),
            header_name,
        })
    }

    /// Cookie jar shared with the HTTP client.
    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// Decoded token currently stored for `url`, if any.
    pub fn token(&self, url: &Url) -> Option<String> {
        let cookies = self.jar.cookies(url)?;
        let raw = cookies.to_str().ok()?;
        extract_cookie(raw, &self.cookie_name).map(decode_token)
    }

    /// Header carrying the token for a request to `url`.
    pub fn header(&self, url: &Url) -> Option<(HeaderName, HeaderValue)> {
        let token = self.token(url)?;
        let value = HeaderValue::from_str(&token).ok()?;
        Some((self.header_name.clone(), value))
    }
}

/// Finds `name` in a `Cookie` header value (`a=1; b=2`).
pub fn extract_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

pub fn decode_token(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_named_cookie() {
        let header = "laravel_session=abc; XSRF-TOKEN=eyJpdiI6%3D%3D; other=1";
        assert_eq!(extract_cookie(header, "XSRF-TOKEN"), Some("eyJpdiI6%3D%3D"));
        assert_eq!(extract_cookie(header, "missing"), None);
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        assert_eq!(extract_cookie("XSRF-TOKEN-OLD=1", "XSRF-TOKEN"), None);
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(decode_token("eyJpdiI6%3D%3D"), "eyJpdiI6==");
        assert_eq!(decode_token("plain"), "plain");
    }

    #[test]
    fn reads_token_from_jar() {
        let session = CsrfSession::new(&CsrfConfig::default()).unwrap();
        let url = Url::parse("http://shop.test/api/danhmucts").unwrap();
        session
            .jar()
            .add_cookie_str("XSRF-TOKEN=abc%2Fdef; Path=/", &url);

        assert_eq!(session.token(&url).as_deref(), Some("abc/def"));
        let (name, value) = session.header(&url).unwrap();
        assert_eq!(name.as_str(), "x-xsrf-token");
        assert_eq!(value, "abc/def");
    }

    #[test]
    fn rejects_invalid_header_name() {
        let config = CsrfConfig {
            cookie_name: "XSRF-TOKEN".to_string(),
            header_name: "bad header".to_string(),
        };
        assert!(CsrfSession::new(&config).is_err());
    }
}
