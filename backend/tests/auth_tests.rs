//! Authentication integration tests
//!
//! Covers password hashing, JWT round trips, and account input validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use shared::validation::{validate_password, validate_username};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    username: String,
    exp: i64,
    iat: i64,
}

const TEST_SECRET: &str = "test-secret-key";

fn make_token(username: &str, expires_in: i64) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        exp: (now + Duration::seconds(expires_in)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

fn decode_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// bcrypt hash verifies against the original password only
    #[test]
    fn test_password_hash_round_trip() {
        // Low cost keeps the test fast; production uses DEFAULT_COST
        let hash = bcrypt::hash("correct horse battery", 4).unwrap();
        assert!(bcrypt::verify("correct horse battery", &hash).unwrap());
        assert!(!bcrypt::verify("wrong password", &hash).unwrap());
    }

    /// Hashing the same password twice yields distinct hashes (salted)
    #[test]
    fn test_password_hashes_are_salted() {
        let a = bcrypt::hash("samepassword", 4).unwrap();
        let b = bcrypt::hash("samepassword", 4).unwrap();
        assert_ne!(a, b);
        assert!(bcrypt::verify("samepassword", &a).unwrap());
        assert!(bcrypt::verify("samepassword", &b).unwrap());
    }

    /// JWT encode/decode preserves the claims
    #[test]
    fn test_token_round_trip() {
        let token = make_token("ravi_kumar", 3600);
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.username, "ravi_kumar");
        assert!(claims.exp > claims.iat);
    }

    /// An expired token is rejected
    #[test]
    fn test_expired_token_rejected() {
        let token = make_token("ravi_kumar", -120);
        assert!(decode_token(&token).is_err());
    }

    /// A token signed with a different secret is rejected
    #[test]
    fn test_wrong_secret_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "mallory".to_string(),
            exp: (now + Duration::seconds(3600)).timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"other-secret"),
        )
        .unwrap();
        assert!(decode_token(&token).is_err());
    }

    /// A tampered token is rejected
    #[test]
    fn test_tampered_token_rejected() {
        let mut token = make_token("ravi_kumar", 3600);
        token.pop();
        token.push('x');
        assert!(decode_token(&token).is_err());
    }

    /// Username rules: 3-32 chars of lowercase letters, digits, underscore
    #[test]
    fn test_username_validation() {
        assert!(validate_username("ravi_kumar").is_ok());
        assert!(validate_username("a2c").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
        assert!(validate_username("Ravi").is_err());
        assert!(validate_username("ravi kumar").is_err());
        assert!(validate_username("ravi@farm").is_err());
    }

    /// Password rule: at least 8 characters
    #[test]
    fn test_password_validation() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
    }
}
