use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// HS256 (HMAC with SHA-256) over a process-wide secret. Only integrity is
/// guaranteed, not confidentiality: anyone holding a token can read its
/// claims, so nothing secret goes into them.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer from the configured signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Rotating the secret invalidates every outstanding token
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign a token whose sole claim is the given subject.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_subject(subject);

        encode(&header, &claims, &self.encoding_key).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// Issued tokens carry no expiry; an `exp` claim is still honored when
    /// one is present, so a token that does carry an expiry fails closed.
    ///
    /// # Errors
    /// * `SignatureMismatch` - Signature does not verify against the secret
    /// * `Expired` - An `exp` claim is present and in the past
    /// * `Malformed` - Structure or claims are unreadable
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Tokens are issued without `exp`; do not require one.
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer.issue("user-42").expect("Failed to issue token");
        assert!(!token.is_empty());

        let subject = issuer.verify(&token).expect("Failed to verify token");
        assert_eq!(subject, "user-42");
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenIssuer::new(SECRET);
        let other = TokenIssuer::new(b"another_secret_at_least_32_bytes!");

        let token = issuer.issue("user-42").expect("Failed to issue token");

        let result = other.verify(&token);
        assert!(matches!(result, Err(TokenError::SignatureMismatch)));
    }

    #[test]
    fn test_verify_garbage_token() {
        let issuer = TokenIssuer::new(SECRET);

        let result = issuer.verify("not.a.token");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_rejects_expired_claim_when_present() {
        let issuer = TokenIssuer::new(SECRET);

        // Forge a token that does carry an expiry, far in the past.
        let claims = Claims {
            sub: "user-42".to_string(),
            exp: Some(1),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_accepts_future_expiry() {
        let issuer = TokenIssuer::new(SECRET);

        let claims = Claims {
            sub: "user-42".to_string(),
            exp: Some(i64::MAX / 2),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(issuer.verify(&token).unwrap(), "user-42");
    }
}
