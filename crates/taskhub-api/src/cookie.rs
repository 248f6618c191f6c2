//! Session cookie transport.
//!
//! The token travels only in an `HttpOnly` cookie. Its lifetime matches
//! the token's `exp`, so the browser drops it when the server would
//! reject it anyway.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::OffsetDateTime;

use taskhub_auth::jwt::IssuedToken;
use taskhub_core::config::{AuthConfig, SameSitePolicy};

/// Builds and reads the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
    same_site: SameSite,
}

impl SessionCookie {
    /// Creates the cookie transport from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            secure: config.cookie_secure,
            same_site: match config.cookie_same_site {
                SameSitePolicy::Strict => SameSite::Strict,
                SameSitePolicy::Lax => SameSite::Lax,
                SameSitePolicy::None => SameSite::None,
            },
        }
    }

    /// Reads the presented token, if any.
    pub fn read(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Cookie carrying a freshly issued token.
    pub fn issue(&self, token: &IssuedToken) -> Cookie<'static> {
        let max_age = (token.expires_at - token.issued_at).num_seconds().max(0);
        let mut cookie = self.base(token.token.clone());
        cookie.set_max_age(time::Duration::seconds(max_age));
        if let Ok(expires) = OffsetDateTime::from_unix_timestamp(token.expires_at.timestamp()) {
            cookie.set_expires(expires);
        }
        cookie
    }

    /// Cookie instructing the browser to drop the session.
    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie
    }

    fn base(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .build()
    }
}
