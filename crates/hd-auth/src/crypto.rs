use super::*;

/// Token issuer and verifier.
///
/// Signs [`Claims`] with HS256 under a server-held secret. Verification is
/// pure: it checks signature, structure, and expiry, and never touches the
/// identity store.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
    lifetime: std::time::Duration,
}

impl Crypto {
    pub fn new(secret: &[u8], lifetime: std::time::Duration) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
            lifetime,
        }
    }
    /// Builds from raw configuration values. A missing or blank secret and
    /// an unparsable or unrepresentable lifetime are configuration errors.
    pub fn configure(secret: Option<&str>, lifetime: Option<&str>) -> Result<Self, Error> {
        let secret = secret
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::Config(String::from("JWT_SECRET is required")))?;
        let lifetime = match lifetime {
            None => hd_core::TOKEN_LIFETIME,
            Some(s) => hd_core::parse_duration(s)
                .filter(|d| Self::representable(*d))
                .ok_or_else(|| Error::Config(format!("invalid token lifetime: {}", s)))?,
        };
        Ok(Self::new(secret.as_bytes(), lifetime))
    }
    /// Whether a token issued now with this lifetime has an `exp` that fits
    /// in a signed 64-bit timestamp.
    fn representable(lifetime: std::time::Duration) -> bool {
        i64::try_from(lifetime.as_secs())
            .ok()
            .and_then(|secs| hd_core::unix(std::time::SystemTime::now()).checked_add(secs))
            .is_some()
    }
    pub fn issue(&self, member: &Member) -> Result<String, Error> {
        let claims = Claims::new(member, self.lifetime);
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &self.encoding)
            .map_err(Error::from)
    }
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        use jsonwebtoken::errors::ErrorKind;
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Invalid,
            })
            .and_then(|claims| match claims.expired() {
                true => Err(AuthError::Expired),
                false => Ok(claims),
            })
    }
    pub const fn lifetime(&self) -> std::time::Duration {
        self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_core::ID;
    use hd_core::Unique;
    use std::time::Duration;

    fn member(role: Role) -> Member {
        Member::new(ID::default(), "Grace".into(), "grace@x.io".into(), role)
    }

    #[test]
    fn round_trips_subject_and_role() {
        let crypto = Crypto::new(b"secret", Duration::from_secs(3600));
        for role in Role::all() {
            let member = member(role);
            let claims = crypto.verify(&crypto.issue(&member).unwrap()).unwrap();
            assert_eq!(claims.user(), member.id());
            assert_eq!(claims.role(), role);
        }
    }
    #[test]
    fn zero_lifetime_expires() {
        let crypto = Crypto::new(b"secret", Duration::ZERO);
        let token = crypto.issue(&member(Role::Submitter)).unwrap();
        assert_eq!(crypto.verify(&token), Err(AuthError::Expired));
    }
    #[test]
    fn foreign_secret_is_invalid() {
        let ours = Crypto::new(b"ours", Duration::from_secs(3600));
        let theirs = Crypto::new(b"theirs", Duration::from_secs(3600));
        let token = theirs.issue(&member(Role::Reviewer)).unwrap();
        assert_eq!(ours.verify(&token), Err(AuthError::Invalid));
    }
    #[test]
    fn foreign_secret_and_expired_is_invalid() {
        let ours = Crypto::new(b"ours", Duration::from_secs(3600));
        let theirs = Crypto::new(b"theirs", Duration::ZERO);
        let token = theirs.issue(&member(Role::Reviewer)).unwrap();
        assert_eq!(ours.verify(&token), Err(AuthError::Invalid));
    }
    #[test]
    fn tampered_payload_is_invalid() {
        let crypto = Crypto::new(b"secret", Duration::from_secs(3600));
        let token = crypto.issue(&member(Role::Submitter)).unwrap();
        let forged = crypto.issue(&member(Role::Reviewer)).unwrap();
        let parts = token.split('.').collect::<Vec<_>>();
        let other = forged.split('.').collect::<Vec<_>>();
        let spliced = format!("{}.{}.{}", parts[0], other[1], parts[2]);
        assert_eq!(crypto.verify(&spliced), Err(AuthError::Invalid));
    }
    #[test]
    fn garbage_is_invalid() {
        let crypto = Crypto::new(b"secret", Duration::from_secs(3600));
        assert_eq!(crypto.verify(""), Err(AuthError::Invalid));
        assert_eq!(crypto.verify("a.b.c"), Err(AuthError::Invalid));
        assert_eq!(crypto.verify("not a token"), Err(AuthError::Invalid));
    }
    #[test]
    fn configure_requires_secret() {
        assert!(matches!(Crypto::configure(None, None), Err(Error::Config(_))));
        assert!(matches!(Crypto::configure(Some("  "), None), Err(Error::Config(_))));
    }
    #[test]
    fn configure_lifetime() {
        let crypto = Crypto::configure(Some("s"), None).unwrap();
        assert_eq!(crypto.lifetime(), hd_core::TOKEN_LIFETIME);
        let crypto = Crypto::configure(Some("s"), Some("15m")).unwrap();
        assert_eq!(crypto.lifetime(), Duration::from_secs(900));
        assert!(matches!(
            Crypto::configure(Some("s"), Some("soon")),
            Err(Error::Config(_))
        ));
    }
    #[test]
    fn configure_rejects_unrepresentable_lifetime() {
        for lifetime in ["9223372036854775807", "18446744073709551615", "300000000000000d"] {
            assert!(matches!(
                Crypto::configure(Some("s"), Some(lifetime)),
                Err(Error::Config(_))
            ));
        }
    }
    #[test]
    fn oversized_lifetime_still_issues() {
        let crypto = Crypto::new(b"secret", Duration::from_secs(u64::MAX));
        let member = member(Role::Submitter);
        let claims = crypto.verify(&crypto.issue(&member).unwrap()).unwrap();
        assert_eq!(claims.user(), member.id());
        assert!(!claims.expired());
    }
}
