use super::*;
use hd_core::ID;
use hd_core::Unique;

/// JWT payload: subject, role snapshot, and validity window.
///
/// The role is captured at issue time and trusted until `exp`, even if the
/// member's stored role changes in the meantime.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub rol: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(member: &Member, lifetime: std::time::Duration) -> Self {
        let now = hd_core::unix(std::time::SystemTime::now());
        Self {
            sub: member.id().inner(),
            rol: member.role(),
            iat: now,
            exp: i64::try_from(lifetime.as_secs())
                .map_or(i64::MAX, |secs| now.saturating_add(secs)),
        }
    }
    /// Valid only while strictly before `exp`.
    pub fn expired(&self) -> bool {
        self.exp <= hd_core::unix(std::time::SystemTime::now())
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
    pub fn role(&self) -> Role {
        self.rol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn member() -> Member {
        Member::new(ID::default(), "Ada".into(), "ada@x.io".into(), Role::Reviewer)
    }

    #[test]
    fn snapshots_member() {
        let member = member();
        let claims = Claims::new(&member, Duration::from_secs(60));
        assert_eq!(claims.user(), member.id());
        assert_eq!(claims.role(), Role::Reviewer);
        assert_eq!(claims.exp - claims.iat, 60);
        assert!(!claims.expired());
    }
    #[test]
    fn huge_lifetime_saturates() {
        let claims = Claims::new(&member(), Duration::from_secs(u64::MAX));
        assert_eq!(claims.exp, i64::MAX);
        assert!(!claims.expired());
    }
    #[test]
    fn zero_lifetime_is_expired() {
        let claims = Claims::new(&member(), Duration::ZERO);
        assert!(claims.expired());
    }
}
