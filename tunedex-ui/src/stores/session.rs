//! Admin session: the credential as an explicit context object
//!
//! Constructed once at login and torn down at logout. Protected views and
//! mutating API calls receive this by injection instead of reading a
//! storage key at arbitrary points.

/// The opaque admin credential. Validity is only proven by a mutating call
/// succeeding; there is no login-time verification round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSession {
    api_key: String,
}

impl AdminSession {
    /// Build a session from the login input. Blank keys are rejected.
    pub fn new(api_key: &str) -> Option<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            None
        } else {
            Some(Self {
                api_key: api_key.to_string(),
            })
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected() {
        assert_eq!(AdminSession::new(""), None);
        assert_eq!(AdminSession::new("   "), None);
    }

    #[test]
    fn key_is_trimmed() {
        let session = AdminSession::new("  secret-key \n").unwrap();
        assert_eq!(session.api_key(), "secret-key");
    }
}
