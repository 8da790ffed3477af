use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload of an access token.
///
/// All three fields are required; a token missing any of them is rejected
/// as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` valid from `issued_at` until `expires_at`.
    pub fn new(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Check if token is expired at `now`.
    ///
    /// A token is still valid at the exact instant of `exp`, and expired
    /// any time after it. An `exp` outside the representable range counts
    /// as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match DateTime::from_timestamp(self.exp, 0) {
            Some(expires_at) => now > expires_at,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_claims() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("user123", issued_at, issued_at + Duration::hours(1));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let expires_at = Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap();
        let claims = Claims {
            sub: "user123".to_string(),
            iat: 0,
            exp: expires_at.timestamp(),
        };

        assert!(!claims.is_expired(expires_at - Duration::seconds(1))); // Not expired
        assert!(!claims.is_expired(expires_at)); // Exactly at expiration
        assert!(claims.is_expired(expires_at + Duration::milliseconds(1))); // Just past
        assert!(claims.is_expired(expires_at + Duration::seconds(1))); // Expired
    }

    #[test]
    fn test_out_of_range_exp_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            iat: 0,
            exp: i64::MAX,
        };

        assert!(claims.is_expired(Utc::now()));
    }

    #[test]
    fn test_missing_claim_does_not_deserialize() {
        let result = serde_json::from_str::<Claims>(r#"{"sub":"user123","iat":0}"#);
        assert!(result.is_err());
    }
}
