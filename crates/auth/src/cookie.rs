use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use outliner_core::DEFAULT_SESSION_COOKIE;

/// Name and flags of the cookie holding the access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self { name: DEFAULT_SESSION_COOKIE.to_owned(), secure: false }
    }
}

impl SessionCookie {
    #[must_use]
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self { name: name.into(), secure }
    }

    /// Cookie storing `token` for `max_age_secs`.
    #[must_use]
    pub fn issue(&self, token: impl Into<String>, max_age_secs: u64) -> Cookie<'static> {
        let max_age = Duration::seconds(i64::try_from(max_age_secs).unwrap_or(i64::MAX));
        self.builder(token.into()).max_age(max_age).build()
    }

    /// Cookie matching the issued one, to hand to a jar's `remove`.
    #[must_use]
    pub fn removal(&self) -> Cookie<'static> {
        self.builder(String::new()).build()
    }

    /// The access token carried by `cookie`, if it is ours and non-empty.
    #[must_use]
    pub fn token<'c>(&self, cookie: &'c Cookie<'_>) -> Option<&'c str> {
        Some(cookie.value()).filter(|value| cookie.name() == self.name && !value.is_empty())
    }

    fn builder(&self, value: String) -> cookie::CookieBuilder<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_cookie_attributes() {
        let cookie = SessionCookie::new("session", true).issue("tok", 3600);
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_insecure_cookie_omits_secure_flag() {
        let header = SessionCookie::new("session", false).issue("tok", 60).to_string();
        assert!(header.starts_with("session=tok;"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Lax"));
        assert!(!header.contains("Secure"));
    }

    #[test]
    fn test_token_read_from_parsed_header() {
        let session = SessionCookie::default();
        let found: Vec<String> = Cookie::split_parse("theme=dark; sb-access-token=abc.def.ghi; other=1")
            .filter_map(Result::ok)
            .filter_map(|c| session.token(&c).map(str::to_owned))
            .collect();
        assert_eq!(found, vec!["abc.def.ghi"]);
    }

    #[test]
    fn test_empty_or_foreign_cookie_has_no_token() {
        let session = SessionCookie::new("session", false);
        assert_eq!(session.token(&Cookie::new("session", "")), None);
        assert_eq!(session.token(&Cookie::new("my-session", "x")), None);
    }

    #[test]
    fn test_removal_matches_issued_path() {
        let session = SessionCookie::default();
        assert_eq!(session.removal().path(), session.issue("t", 1).path());
        assert_eq!(session.removal().name(), session.name);
    }
}
