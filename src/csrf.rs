// src/csrf.rs
//! CSRF token lookup in the host session's cookie string

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Value of cookie `name` in a `Cookie:`-style string, percent-decoded
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_token_among_cookies() {
        let cookies = "sessionid=abc123; csrftoken=tok%2Fen%3D; theme=dark";
        assert_eq!(
            cookie_value(cookies, DEFAULT_CSRF_COOKIE),
            Some("tok/en=".to_string())
        );
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        assert_eq!(cookie_value("xcsrftoken=nope", DEFAULT_CSRF_COOKIE), None);
        assert_eq!(cookie_value("csrftokenx=nope", DEFAULT_CSRF_COOKIE), None);
    }

    #[test]
    fn test_missing_or_empty() {
        assert_eq!(cookie_value("", DEFAULT_CSRF_COOKIE), None);
        assert_eq!(cookie_value("csrftoken=", DEFAULT_CSRF_COOKIE), None);
    }

    #[test]
    fn test_undecodable_value_kept_raw() {
        assert_eq!(
            cookie_value("csrftoken=%E0%A4%A", DEFAULT_CSRF_COOKIE),
            Some("%E0%A4%A".to_string())
        );
    }
}
