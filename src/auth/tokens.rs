/**
 * Bearer Token Issuing and Verification
 *
 * This module creates and validates the signed, time-limited tokens that
 * authenticate requests. Tokens are HS256 JWTs carrying exactly three
 * claims: the account id (`sub`), the account email, and an absolute
 * expiry instant (`exp`, unix seconds).
 *
 * # Security
 *
 * - Validation is pinned to HS256; a token whose header names any other
 *   algorithm is rejected (algorithm-confusion defense).
 * - Expiry is exclusive with zero leeway: a token whose `exp` equals the
 *   current second is already expired.
 * - All verification failures (malformed token, bad signature, expiry,
 *   algorithm mismatch, missing claims) collapse into one uniform
 *   `InvalidToken` error, so callers cannot tell *why* a token failed.
 *
 * Tokens are never stored server-side. Rotating the signing secret
 * invalidates every outstanding token; there is no revocation list.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime. Fixed policy, not configurable per call.
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Claim set embedded in every issued token
///
/// Deserialized as a typed struct: a token missing any of these fields,
/// or carrying them with the wrong shape, fails verification outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id, as a UUID string
    pub sub: String,
    /// Account email
    pub email: String,
    /// Expiry instant, unix seconds
    pub exp: u64,
}

/// Uniform verification failure
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid token")]
pub struct InvalidToken;

/// Signing and verification keys, built once at startup from the server
/// secret and held read-only in application state thereafter.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    /// Build keys from the symmetric server secret
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for the given account
    ///
    /// The claim set is `{sub, email, exp: now + 1 hour}`.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            exp: unix_now() + TOKEN_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Idempotent and side-effect-free: verifying the same token twice
    /// yields the same result both times. Expiry is exclusive, so
    /// `exp == now` fails.
    pub fn verify(&self, token: &str) -> Result<Claims, InvalidToken> {
        let data =
            decode::<Claims>(token, &self.decoding, &self.validation).map_err(|_| InvalidToken)?;

        // jsonwebtoken keeps a token alive through the exp second itself;
        // the expiry window here is exclusive.
        if data.claims.exp <= unix_now() {
            return Err(InvalidToken);
        }

        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECRET: &[u8] = b"test-secret";

    fn keys() -> TokenKeys {
        TokenKeys::from_secret(SECRET)
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let keys = keys();
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id, "user1@example.com").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "user1@example.com");
        assert!(claims.exp > unix_now());
    }

    #[test]
    fn test_verify_is_idempotent() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4(), "user1@example.com").unwrap();

        let first = keys.verify(&token).unwrap();
        let second = keys.verify(&token).unwrap();
        assert_eq!(first.sub, second.sub);
        assert_eq!(first.email, second.email);
        assert_eq!(first.exp, second.exp);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert_eq!(keys().verify("garbage"), Err(InvalidToken));
        assert_eq!(keys().verify(""), Err(InvalidToken));
        assert_eq!(keys().verify("a.b.c"), Err(InvalidToken));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = keys().issue(Uuid::new_v4(), "user1@example.com").unwrap();
        let other = TokenKeys::from_secret(b"other-secret");
        assert_eq!(other.verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_verify_rejects_other_algorithm() {
        // Same secret, but signed as HS384: the verifier is pinned to
        // HS256 and must refuse it.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user1@example.com".to_string(),
            exp: unix_now() + TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(keys().verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        // exp == now must already count as expired.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user1@example.com".to_string(),
            exp: unix_now(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(keys().verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user1@example.com".to_string(),
            exp: unix_now() - 10,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(keys().verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_verify_rejects_missing_claims() {
        // A structurally valid, correctly signed token without the email
        // claim must fail typed decoding.
        #[derive(Serialize)]
        struct PartialClaims {
            sub: String,
            exp: u64,
        }
        let partial = PartialClaims {
            sub: Uuid::new_v4().to_string(),
            exp: unix_now() + TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &partial,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(keys().verify(&token), Err(InvalidToken));
    }
}
