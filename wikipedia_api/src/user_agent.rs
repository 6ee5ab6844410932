//! User agent sent with every request.
//!
//! Wikimedia asks API clients to identify themselves with a descriptive
//! user agent; generic library defaults may be throttled or blocked.

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wikiproxy/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/wikiproxy/wikiproxy) reqwest"
);

/// Returns the user agent to send, preferring an explicit override.
pub fn get_user_agent(custom: Option<&str>) -> String {
    match custom {
        Some(ua) if !ua.trim().is_empty() => ua.trim().to_string(),
        _ => DEFAULT_USER_AGENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_blank() {
        assert_eq!(get_user_agent(None), DEFAULT_USER_AGENT);
        assert_eq!(get_user_agent(Some("   ")), DEFAULT_USER_AGENT);
    }

    #[test]
    fn uses_override() {
        assert_eq!(get_user_agent(Some(" my-bot/1.0 ")), "my-bot/1.0");
    }
}
