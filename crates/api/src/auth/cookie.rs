//! Session cookie construction.
//!
//! Both the set path (login/register) and the clear path (logout) build
//! their cookie from the same [`CookieSettings`] value. If the attribute
//! sets ever diverge, some browsers silently keep the stale cookie, so the
//! attributes live in exactly one place.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Session cookie lifetime, matching the token expiry.
pub const SESSION_TTL: Duration = Duration::hours(24);

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    /// Send only over HTTPS.
    pub secure: bool,
    /// Allow the cookie on cross-site requests (frontend on another origin).
    pub cross_site: bool,
}

impl CookieSettings {
    /// Derive cookie attributes from the deployment environment.
    ///
    /// Production deployments serve the frontend from another origin over
    /// HTTPS; development runs same-site over plain HTTP.
    pub fn for_environment(environment: &str) -> Self {
        let production = environment == "production";
        Self {
            secure: production,
            cross_site: production,
        }
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, value);
        cookie.set_http_only(true);
        cookie.set_path("/");
        cookie.set_secure(self.secure);
        cookie.set_same_site(if self.cross_site {
            SameSite::None
        } else {
            SameSite::Lax
        });
        cookie
    }

    /// Build the session cookie carrying the given token.
    pub fn session(&self, token: impl Into<String>) -> Cookie<'static> {
        let mut cookie = self.base(token.into());
        cookie.set_max_age(SESSION_TTL);
        cookie
    }

    /// Build the expired cookie that clears the session.
    pub fn expired(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.set_max_age(Duration::ZERO);
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let settings = CookieSettings::for_environment("development");
        let cookie = settings.session("abc123");

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(SESSION_TTL));
    }

    #[test]
    fn test_production_attributes() {
        let settings = CookieSettings::for_environment("production");
        let cookie = settings.session("abc123");

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_clear_matches_set_attributes() {
        for environment in ["development", "production"] {
            let settings = CookieSettings::for_environment(environment);
            let set = settings.session("abc123");
            let clear = settings.expired();

            assert_eq!(set.name(), clear.name());
            assert_eq!(set.path(), clear.path());
            assert_eq!(set.http_only(), clear.http_only());
            assert_eq!(set.secure(), clear.secure());
            assert_eq!(set.same_site(), clear.same_site());
        }
    }

    #[test]
    fn test_expired_cookie_is_empty_with_zero_age() {
        let cookie = CookieSettings::for_environment("development").expired();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
