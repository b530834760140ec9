use axum::http::{header::InvalidHeaderValue, HeaderValue};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Browser-session cookie: no `Max-Age`, so it goes away with the session.
pub fn session_cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; Path=/; SameSite=Lax{secure}"
    ))
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_has_no_max_age() {
        let cookie = session_cookie("_lp_ts", "123", false).unwrap();
        assert_eq!(cookie.to_str().unwrap(), "_lp_ts=123; Path=/; SameSite=Lax");

        let cookie = session_cookie("_lp_ts", "123", true).unwrap();
        assert!(cookie.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(session_cookie("a", "line\nbreak", false).is_err());
    }
}
