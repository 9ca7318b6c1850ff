//! One-shot flash notices carried across a redirect.
//!
//! A notice is attached to the redirect response as a `flash` cookie and
//! consumed (read and removed) by the next rendered page, so it survives
//! exactly one request/response cycle. The value is percent-encoded so
//! the cookie stays within RFC 6265 value syntax.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash";

/// Attach a flash notice to the outgoing response.
pub fn set(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, encode(&message.into())))
        .path("/")
        .http_only(true)
        .build();
    jar.add(cookie)
}

/// Consume the flash notice, if any: returns the jar with the cookie
/// removed plus the decoded message.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = decode(cookie.value());
            let removal = Cookie::build((FLASH_COOKIE, "")).path("/").build();
            (jar.remove(removal), Some(message))
        }
        None => (jar, None),
    }
}

/// Percent-encode everything outside the unreserved set, so the cookie
/// value carries no spaces, commas, or semicolons.
fn encode(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for byte in message.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Reverse [`encode`]. Malformed escapes are passed through verbatim.
fn decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
