//! Session state carried between requests.
//!
//! The device tracks a session with two cookies. `sessionToken` rotates on
//! every response and must also be echoed as the `token` form field of the
//! next call; `SID` is handed out in the login reply body and identifies the
//! authenticated session.

use reqwest::header::{HeaderMap, SET_COOKIE};

pub(crate) const SESSION_TOKEN_COOKIE: &str = "sessionToken";
pub(crate) const SESSION_ID_COOKIE: &str = "SID";

#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct Session {
    token: String,
    sid: String,
}

impl Session {
    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn sid(&self) -> &str {
        &self.sid
    }

    pub(crate) fn set_sid(&mut self, sid: impl Into<String>) {
        self.sid = sid.into();
    }

    pub(crate) fn clear_sid(&mut self) {
        self.sid.clear();
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        !self.sid.is_empty()
    }

    /// `Cookie` header value for the next request, or `None` before the
    /// device has handed out any cookie.
    pub(crate) fn cookie_header(&self) -> Option<String> {
        let mut cookies = Vec::with_capacity(2);
        if !self.token.is_empty() {
            cookies.push(format!("{}={}", SESSION_TOKEN_COOKIE, self.token));
        }
        if !self.sid.is_empty() {
            cookies.push(format!("{}={}", SESSION_ID_COOKIE, self.sid));
        }
        if cookies.is_empty() {
            None
        } else {
            Some(cookies.join("; "))
        }
    }

    /// Take the rotated token from the response's `Set-Cookie` headers.
    ///
    /// Returns whether a `sessionToken` cookie was present. Without one the
    /// current token stays in use.
    pub(crate) fn refresh_from(&mut self, headers: &HeaderMap) -> bool {
        let mut rotated = false;
        for value in headers.get_all(SET_COOKIE) {
            let Ok(value) = value.to_str() else {
                continue;
            };
            if let Some(token) = cookie_value(value, SESSION_TOKEN_COOKIE) {
                self.token = token.to_string();
                rotated = true;
            }
        }
        rotated
    }
}

// Tokens are credentials; keep them out of debug output.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &!self.token.is_empty())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Value of cookie `name` in a `Set-Cookie` header, ignoring attributes.
fn cookie_value<'a>(set_cookie: &'a str, name: &str) -> Option<&'a str> {
    let pair = set_cookie.split(';').next()?;
    let (key, value) = pair.split_once('=')?;
    if key.trim() != name {
        return None;
    }
    let value = value.trim();
    Some(
        value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(set_cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for cookie in set_cookies {
            map.append(SET_COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        map
    }

    #[test]
    fn test_cookie_header_order_and_omission() {
        let mut session = Session::default();
        assert_eq!(session.cookie_header(), None);

        session.refresh_from(&headers(&["sessionToken=abc; path=/"]));
        assert_eq!(session.cookie_header().as_deref(), Some("sessionToken=abc"));

        session.set_sid("42");
        assert_eq!(session.cookie_header().as_deref(), Some("sessionToken=abc; SID=42"));

        session.clear_sid();
        assert!(!session.is_authenticated());
        assert_eq!(session.cookie_header().as_deref(), Some("sessionToken=abc"));
    }

    #[test]
    fn test_refresh_picks_session_token_among_cookies() {
        let mut session = Session::default();
        let rotated = session.refresh_from(&headers(&[
            "lang=en; path=/",
            "sessionToken=\"q1w2\"; path=/; HttpOnly",
        ]));
        assert!(rotated);
        assert_eq!(session.token(), "q1w2");
    }

    #[test]
    fn test_refresh_without_cookie_keeps_token() {
        let mut session = Session::default();
        session.refresh_from(&headers(&["sessionToken=first"]));

        assert!(!session.refresh_from(&HeaderMap::new()));
        assert!(!session.refresh_from(&headers(&["sessionTokenX=other"])));
        assert_eq!(session.token(), "first");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let mut session = Session::default();
        session.refresh_from(&headers(&["sessionToken=secret-token"]));
        session.set_sid("secret-sid");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret"));
        assert_eq!(session.sid(), "secret-sid");
    }
}
