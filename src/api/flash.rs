//! One-shot notices carried across a redirect in a cookie.

use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    /// Hex-encoded JSON so the value stays within the cookie character set.
    pub fn encode(&self) -> Option<String> {
        serde_json::to_vec(self).ok().map(hex::encode)
    }

    pub fn decode(value: &str) -> Option<Self> {
        let bytes = hex::decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

pub fn set_flash(cookies: &Cookies, level: FlashLevel, message: impl Into<String>) {
    let Some(value) = Flash::new(level, message).encode() else {
        return;
    };
    let mut cookie = Cookie::new(FLASH_COOKIE, value);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Returns the pending notice, if any, and clears it.
pub fn take_flash(cookies: &Cookies) -> Option<Flash> {
    let cookie = cookies.get(FLASH_COOKIE)?;
    let flash = Flash::decode(cookie.value());
    cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").into());
    flash
}
