use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::errors::AuthError;

/// Lifetime of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 12;

/// Decoded token payload: the caller's identity fields plus `iat` and `exp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn email(&self) -> Option<&Value> {
        self.0.get("email")
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.0.get("exp").and_then(Value::as_i64)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// A caller may read bookings for `requested` only when it equals the `email` claim.
    /// No claim and no requested email also match, which lists every booking.
    pub fn permits_email(&self, requested: Option<&str>) -> bool {
        match (self.email(), requested) {
            (None, None) => true,
            (Some(Value::String(claimed)), Some(requested)) => claimed == requested,
            _ => false,
        }
    }
}

/// HS256 token issuer and verifier sharing one secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Sign `payload` with `iat` and a 12 hour `exp`. The payload is not inspected beyond
    /// requiring a JSON object; its own `iat`/`exp` keys are overwritten.
    ///
    /// # Examples
    /// ```
    /// use service::auth::TokenService;
    /// let tokens = TokenService::new("secret");
    /// let token = tokens.issue(serde_json::json!({"email": "u@e.com"})).unwrap();
    /// let claims = tokens.verify(&token).unwrap();
    /// assert_eq!(claims.email().and_then(|v| v.as_str()), Some("u@e.com"));
    /// ```
    #[instrument(skip_all)]
    pub fn issue(&self, payload: Value) -> Result<String, AuthError> {
        let mut claims = models::document::into_object(payload, "token payload")
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let now = Utc::now();
        claims.insert("iat".into(), Value::from(now.timestamp()));
        claims.insert("exp".into(), Value::from((now + self.ttl).timestamp()));
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        debug!(claims = claims.len(), "token_issued");
        Ok(token)
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn issued_token_round_trips_payload() {
        let tokens = TokenService::new("test-secret");
        let token = tokens.issue(json!({"email": "a@b.c", "name": "Ann"})).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email(), Some(&json!("a@b.c")));
        assert_eq!(claims.as_map()["name"], "Ann");
    }

    #[test]
    fn expiry_is_twelve_hours_out() {
        let tokens = TokenService::new("test-secret");
        let before = Utc::now().timestamp();
        let token = tokens.issue(json!({"email": "a@b.c", "exp": 1})).unwrap();
        let exp = tokens.verify(&token).unwrap().expires_at().unwrap();
        let expected = before + TOKEN_TTL_HOURS * 3600;
        assert!((expected..=expected + 5).contains(&exp), "exp {exp} not ~12h after {before}");
    }

    #[test]
    fn non_object_payload_rejected() {
        let tokens = TokenService::new("test-secret");
        assert!(matches!(tokens.issue(json!("a@b.c")), Err(AuthError::Validation(_))));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token = TokenService::new("one").issue(json!({"email": "a@b.c"})).unwrap();
        let err = TokenService::new("two").verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn garbage_is_invalid() {
        let err = TokenService::new("k").verify("not.a.jwt").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn expired_token_reported_as_expired() {
        let now = Utc::now().timestamp();
        let claims = json!({"email": "a@b.c", "iat": now - 7200, "exp": now - 3600});
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap();
        let err = TokenService::new("k").verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }

    #[test]
    fn email_permission_rules() {
        let with_email = Claims(json!({"email": "a@b.c"}).as_object().unwrap().clone());
        assert!(with_email.permits_email(Some("a@b.c")));
        assert!(!with_email.permits_email(Some("x@y.z")));
        assert!(!with_email.permits_email(None));

        let without_email = Claims(Map::new());
        assert!(without_email.permits_email(None));
        assert!(!without_email.permits_email(Some("a@b.c")));

        let numeric = Claims(json!({"email": 7}).as_object().unwrap().clone());
        assert!(!numeric.permits_email(Some("7")));
    }
}
