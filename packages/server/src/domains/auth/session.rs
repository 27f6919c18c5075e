use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identity, UserId};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Session lifetime: 7 days.
pub const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// JWT Claims - data stored in the session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (user id as string)
    pub user_id: Uuid, // User UUID
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    pub iss: String,   // Issuer
    pub jti: String,   // Unique token identifier
}

/// Session service - issues and reads signed session tokens.
///
/// A token either resolves to exactly one `Identity` or is invalid;
/// malformed, tampered and expired tokens are all the same "invalid".
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl SessionService {
    /// Create a new session service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Issue a session token for a user. Expires after 7 days.
    pub fn issue(&self, user_id: UserId) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::seconds(SESSION_TTL_SECONDS);

        let claims = Claims {
            sub: user_id.to_string(),
            user_id: user_id.into_uuid(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Read a token back into an identity.
    ///
    /// Returns an error for anything that is not a well-formed, correctly
    /// signed, unexpired token from this issuer.
    pub fn read(&self, token: &str) -> Result<Identity> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;
        Ok(Identity::new(UserId::from_uuid(claims.user_id)))
    }
}

/// `Set-Cookie` value carrying the session token: HttpOnly, strict same-site,
/// whole-application path, 7-day max age. `Secure` everywhere except local
/// development, which has no TLS.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}{}",
        SESSION_COOKIE, token, SESSION_TTL_SECONDS, secure_attr
    )
}

/// `Set-Cookie` value that expires the session cookie (logout).
pub fn clear_session_cookie(secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Strict; Path=/{}",
        SESSION_COOKIE, secure_attr
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("test_secret_key", "test_issuer".to_string())
    }

    #[test]
    fn issue_and_read_token() {
        let sessions = service();
        let user_id = UserId::new();

        let token = sessions.issue(user_id).unwrap();
        let identity = sessions.read(&token).unwrap();

        assert_eq!(identity.user_id, user_id);
    }

    #[test]
    fn malformed_token_is_invalid() {
        let sessions = service();
        assert!(sessions.read("not_a_token").is_err());
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let sessions1 = SessionService::new("secret1", "test_issuer".to_string());
        let sessions2 = SessionService::new("secret2", "test_issuer".to_string());

        let token = sessions1.issue(UserId::new()).unwrap();
        assert!(sessions2.read(&token).is_err());
    }

    #[test]
    fn wrong_issuer_is_invalid() {
        let sessions1 = SessionService::new("secret", "issuer_a".to_string());
        let sessions2 = SessionService::new("secret", "issuer_b".to_string());

        let token = sessions1.issue(UserId::new()).unwrap();
        assert!(sessions2.read(&token).is_err());
    }

    #[test]
    fn token_expires_in_seven_days() {
        let sessions = service();
        let token = sessions.issue(UserId::new()).unwrap();

        // Decode without the service to inspect raw claims
        let mut validation = Validation::default();
        validation.set_issuer(&["test_issuer"]);
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test_secret_key".as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        let now = chrono::Utc::now().timestamp();
        let expires_in = claims.exp - now;
        assert!(expires_in > SESSION_TTL_SECONDS - 60);
        assert!(expires_in <= SESSION_TTL_SECONDS);
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("abc", false);
        assert!(cookie.starts_with("token=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));

        let secure = session_cookie("abc", true);
        assert!(secure.contains("Secure"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
        assert!(cookie.contains("HttpOnly"));
    }
}
